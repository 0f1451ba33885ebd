//! Process (simulation input) model.
//!
//! A process describes a single unit of CPU demand: when it becomes
//! eligible to run and how much CPU time it needs. The simulator never
//! mutates the caller's processes; all computed timings live on
//! [`ProcessTiming`](super::ProcessTiming).

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// # Time Representation
/// `arrival` and `burst` are integer time units relative to the
/// simulation epoch (t = 0). `arrival` must be ≥ 0 and `burst` > 0;
/// violations are reported by [`validation`](crate::validation) before
/// any simulation runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (caller-assigned).
    pub id: String,
    /// Time unit at which the process becomes eligible to run.
    pub arrival: i64,
    /// Total CPU time required.
    pub burst: i64,
    /// Scheduling priority — smaller value = higher priority.
    /// Required by the Priority policy, ignored by the others.
    pub priority: Option<i64>,
}

impl Process {
    /// Creates a process with the given ID, arrival, and burst time.
    pub fn new(id: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority: None,
        }
    }

    /// Sets the scheduling priority (smaller = higher priority).
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Whether this process carries a priority value.
    pub fn has_priority(&self) -> bool {
        self.priority.is_some()
    }
}
