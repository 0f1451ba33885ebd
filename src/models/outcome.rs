//! Simulation outcome model.
//!
//! One run produces a [`SimulationOutcome`]: per-process timing records
//! and the ordered CPU timeline. Both are plain values — no references
//! back into the input, trivially serializable for export.

use serde::{Deserialize, Serialize};

/// Computed timing for one process after a run.
///
/// Carries the input fields alongside the simulated `start` and
/// `completion`; turnaround and waiting are derived accessors.
///
/// # Invariants
/// For every policy: `waiting() >= 0`, `completion >= arrival + burst`,
/// and `completion` equals the end of the process's last timeline segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessTiming {
    /// Process identifier.
    pub id: String,
    /// Arrival time (input).
    pub arrival: i64,
    /// Total CPU time required (input).
    pub burst: i64,
    /// Scheduling priority (input), if supplied.
    pub priority: Option<i64>,
    /// Time of first dispatch.
    pub start: i64,
    /// Time at which the last unit of burst finished.
    pub completion: i64,
}

impl ProcessTiming {
    /// Creates a timing record for a process dispatched at `start` and
    /// finished at `completion`.
    pub fn new(process: &crate::models::Process, start: i64, completion: i64) -> Self {
        Self {
            id: process.id.clone(),
            arrival: process.arrival,
            burst: process.burst,
            priority: process.priority,
            start,
            completion,
        }
    }

    /// Turnaround time: `completion - arrival`.
    #[inline]
    pub fn turnaround(&self) -> i64 {
        self.completion - self.arrival
    }

    /// Waiting time: `turnaround - burst` (ready but not running).
    #[inline]
    pub fn waiting(&self) -> i64 {
        self.turnaround() - self.burst
    }
}

/// A contiguous interval during which exactly one process occupies the CPU.
///
/// Round-Robin emits one segment per quantum grant, so a process may
/// appear in several segments; the non-preemptive policies emit exactly
/// one segment per process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSegment {
    /// Process occupying the CPU.
    pub id: String,
    /// Segment start time.
    pub start: i64,
    /// Segment end time (exclusive).
    pub end: i64,
}

impl TimelineSegment {
    /// Creates a segment for `[start, end)`.
    pub fn new(id: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            id: id.into(),
            start,
            end,
        }
    }

    /// Segment duration: `end - start`. Always positive in a valid run.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// The complete result of one simulation run.
///
/// `results` ordering is policy-defined: FCFS keeps arrival order, the
/// other policies sort by process ID for display. `timeline` is always
/// ordered by segment start, non-overlapping, on a single shared CPU.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Per-process timings, one entry per input process.
    pub results: Vec<ProcessTiming>,
    /// Dispatch events in execution order.
    pub timeline: Vec<TimelineSegment>,
}

impl SimulationOutcome {
    /// Finds the timing record for a given process.
    pub fn timing_for(&self, id: &str) -> Option<&ProcessTiming> {
        self.results.iter().find(|t| t.id == id)
    }

    /// Returns all timeline segments for a given process, in order.
    pub fn segments_for(&self, id: &str) -> Vec<&TimelineSegment> {
        self.timeline.iter().filter(|s| s.id == id).collect()
    }

    /// Makespan: latest completion time across all processes.
    ///
    /// Returns 0 for an empty outcome.
    pub fn makespan(&self) -> i64 {
        self.results.iter().map(|t| t.completion).max().unwrap_or(0)
    }

    /// Total CPU busy time: sum of all segment durations.
    pub fn busy_time(&self) -> i64 {
        self.timeline.iter().map(|s| s.duration()).sum()
    }

    /// Number of completed processes.
    pub fn result_count(&self) -> usize {
        self.results.len()
    }
}
