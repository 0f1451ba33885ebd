//! Scheduling policies and performance metrics.
//!
//! Each policy is a pure function from a process slice to a
//! [`SimulationOutcome`]. Input is validated up front and the whole run
//! is rejected on any violation; the caller's slice is never mutated.
//!
//! # Usage
//!
//! ```
//! use cpu_sched::models::Process;
//! use cpu_sched::scheduler::Policy;
//!
//! let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
//! let outcome = Policy::RoundRobin { quantum: 2 }.run(&processes).unwrap();
//! assert_eq!(outcome.busy_time(), 8);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod metrics;
mod nonpreemptive;
mod round_robin;

pub use fcfs::fcfs;
pub use metrics::SimulationMetrics;
pub use nonpreemptive::{priority, sjf};
pub use round_robin::round_robin;

use serde::{Deserialize, Serialize};

use crate::models::{Process, SimulationOutcome};
use crate::validation::ValidationError;

/// Result of one simulation run.
pub type SimResult = Result<SimulationOutcome, Vec<ValidationError>>;

/// Policy selector for dispatch from a host layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Policy {
    /// First-Come-First-Served (non-preemptive).
    Fcfs,
    /// Shortest-Job-First (non-preemptive).
    Sjf,
    /// Priority scheduling (non-preemptive, lower value = higher priority).
    Priority,
    /// Round-Robin with a fixed positive time quantum.
    RoundRobin {
        /// Maximum time slice per dispatch.
        quantum: i64,
    },
}

impl Policy {
    /// Policy name (e.g., "FCFS").
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF",
            Policy::Priority => "PRIORITY",
            Policy::RoundRobin { .. } => "RR",
        }
    }

    /// Runs this policy over the given processes.
    pub fn run(&self, processes: &[Process]) -> SimResult {
        match *self {
            Policy::Fcfs => fcfs(processes),
            Policy::Sjf => sjf(processes),
            Policy::Priority => priority(processes),
            Policy::RoundRobin { quantum } => round_robin(processes, quantum),
        }
    }
}

/// Returns process indices sorted by arrival, stable on input order.
///
/// Shared by FCFS and Round-Robin, where arrival-order ties must keep
/// the caller's original ordering.
pub(crate) fn indices_by_arrival(processes: &[Process]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..processes.len()).collect();
    indices.sort_by_key(|&i| processes[i].arrival);
    indices
}
