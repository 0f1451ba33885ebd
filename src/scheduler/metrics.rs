//! Run performance metrics.
//!
//! Computes aggregate indicators from the completed timings of one run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | mean(waiting) |
//! | Avg Turnaround | mean(turnaround) |
//! | Total Time | Latest completion time |
//! | CPU Utilization | 100 · Σburst / total time |
//! | Throughput | Processes per time unit |

use serde::{Deserialize, Serialize};

use crate::models::ProcessTiming;

/// Aggregate performance indicators for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationMetrics {
    /// Mean waiting time across all processes.
    pub avg_waiting: f64,
    /// Mean turnaround time across all processes.
    pub avg_turnaround: f64,
    /// Latest completion time.
    pub total_time: i64,
    /// Fraction of total time the CPU was busy, as a percentage.
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
}

impl SimulationMetrics {
    /// Computes metrics from the timings of a completed run.
    ///
    /// Returns `None` for an empty result list — metrics are undefined
    /// without processes, never a division-by-zero artifact.
    pub fn calculate(results: &[ProcessTiming]) -> Option<Self> {
        if results.is_empty() {
            return None;
        }

        let count = results.len() as f64;
        let total_waiting: i64 = results.iter().map(|t| t.waiting()).sum();
        let total_turnaround: i64 = results.iter().map(|t| t.turnaround()).sum();
        let total_burst: i64 = results.iter().map(|t| t.burst).sum();
        let total_time = results.iter().map(|t| t.completion).max()?;
        if total_time <= 0 {
            return None;
        }

        Some(Self {
            avg_waiting: total_waiting as f64 / count,
            avg_turnaround: total_turnaround as f64 / count,
            total_time,
            cpu_utilization: 100.0 * total_burst as f64 / total_time as f64,
            throughput: count / total_time as f64,
        })
    }
}
