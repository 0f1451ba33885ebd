//! Simulation domain models.
//!
//! Core data types for describing processes and the outcome of one
//! simulated run. All times are plain `i64` time units relative to the
//! simulation epoch (t = 0); the consumer defines the unit (ticks,
//! milliseconds, seconds).

mod outcome;
mod process;

pub use outcome::{ProcessTiming, SimulationOutcome, TimelineSegment};
pub use process::Process;
