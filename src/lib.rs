//! Deterministic single-CPU scheduling simulator.
//!
//! Simulates four classical scheduling policies over a caller-supplied
//! process set and reports per-process timings, the execution timeline,
//! and aggregate performance metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ProcessTiming`,
//!   `TimelineSegment`, `SimulationOutcome`
//! - **`validation`**: Input integrity checks (duplicate IDs, negative
//!   arrivals, non-positive bursts, missing priorities, invalid quanta)
//! - **`scheduler`**: The four policies (`Policy`, `fcfs`, `sjf`,
//!   `priority`, `round_robin`) and `SimulationMetrics`
//! - **`report`**: Serializable snapshot of one run for export
//!
//! # Policies
//!
//! | Policy | Discipline | Selection |
//! |--------|-----------|-----------|
//! | FCFS | Non-preemptive | Earliest arrival |
//! | SJF | Non-preemptive | Shortest burst among arrived |
//! | Priority | Non-preemptive | Lowest priority value among arrived |
//! | Round-Robin | Preemptive, fixed quantum | FIFO ready queue |
//!
//! All four are pure functions over immutable input: identical input
//! yields identical output, and concurrent runs cannot interfere.
//!
//! # Example
//!
//! ```
//! use cpu_sched::models::Process;
//! use cpu_sched::scheduler::{fcfs, SimulationMetrics};
//!
//! let processes = vec![
//!     Process::new("P1", 0, 5),
//!     Process::new("P2", 1, 3),
//! ];
//! let outcome = fcfs(&processes).unwrap();
//! assert_eq!(outcome.makespan(), 8);
//!
//! let metrics = SimulationMetrics::calculate(&outcome.results).unwrap();
//! assert!((metrics.avg_waiting - 2.0).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
