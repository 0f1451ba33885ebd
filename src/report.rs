//! Serializable run report for export.
//!
//! A [`SimulationReport`] snapshots everything a presentation layer
//! needs to display or export one run: the policy, the input processes,
//! the outcome, the derived metrics, and a caller-supplied timestamp.
//! The engine itself holds no "last run" state and reads no clocks;
//! the caller threads the report wherever it is needed.

use serde::{Deserialize, Serialize};

use crate::models::{Process, SimulationOutcome};
use crate::scheduler::{Policy, SimulationMetrics};

/// A self-contained snapshot of one simulation run.
///
/// Plain data with no cyclic references; serializes losslessly with
/// serde for the export path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Policy that produced this run.
    pub policy: Policy,
    /// Input processes as supplied by the caller.
    pub processes: Vec<Process>,
    /// Per-process timings and the execution timeline.
    pub outcome: SimulationOutcome,
    /// Aggregate metrics. `None` only if the outcome is empty.
    pub metrics: Option<SimulationMetrics>,
    /// Caller-supplied timestamp (e.g., ms since the Unix epoch).
    pub timestamp_ms: i64,
}

impl SimulationReport {
    /// Builds a report from a run, deriving metrics from the outcome.
    pub fn new(policy: Policy, processes: Vec<Process>, outcome: SimulationOutcome) -> Self {
        let metrics = SimulationMetrics::calculate(&outcome.results);
        Self {
            policy,
            processes,
            outcome,
            metrics,
            timestamp_ms: 0,
        }
    }

    /// Sets the timestamp.
    pub fn with_timestamp(mut self, timestamp_ms: i64) -> Self {
        self.timestamp_ms = timestamp_ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    fn sample_report() -> SimulationReport {
        let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
        let policy = Policy::RoundRobin { quantum: 2 };
        let outcome = policy.run(&processes).unwrap();
        SimulationReport::new(policy, processes, outcome).with_timestamp(1_700_000_000_000)
    }

    #[test]
    fn test_report_derives_metrics() {
        let report = sample_report();
        let m = report.metrics.as_ref().unwrap();
        assert_eq!(m.total_time, 9);
        assert!((m.avg_waiting - 3.5).abs() < 1e-10);
    }

    #[test]
    fn test_report_json_round_trip() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        let back: SimulationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_report_json_is_plain_data() {
        let report = sample_report();
        let value: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert!(value.get("policy").is_some());
        assert!(value.get("processes").is_some());
        assert!(value.get("outcome").is_some());
        assert!(value.get("metrics").is_some());
        assert_eq!(value["timestamp_ms"], 1_700_000_000_000i64);
    }
}
