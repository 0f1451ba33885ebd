//! First-Come-First-Served scheduling.
//!
//! # Algorithm
//!
//! 1. Sort processes by arrival time (stable: ties keep input order).
//! 2. Walk the sorted order with a single time cursor; each process
//!    starts at `max(cursor, arrival)` and runs its full burst.
//!
//! Complexity: O(n log n) for the sort, O(n) for the walk.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.1

use crate::models::{Process, ProcessTiming, SimulationOutcome, TimelineSegment};
use crate::validation::validate_processes;

use super::{indices_by_arrival, SimResult};

/// Simulates First-Come-First-Served scheduling.
///
/// Non-preemptive: each process runs its full burst in one segment.
/// Results keep arrival order; arrival ties keep the caller's input
/// order, making tie-breaking deterministic.
pub fn fcfs(processes: &[Process]) -> SimResult {
    validate_processes(processes)?;

    let order = indices_by_arrival(processes);

    let mut results = Vec::with_capacity(processes.len());
    let mut timeline = Vec::with_capacity(processes.len());
    let mut current_time: i64 = 0;

    for &idx in &order {
        let p = &processes[idx];
        let start = current_time.max(p.arrival);
        let completion = start + p.burst;

        timeline.push(TimelineSegment::new(&p.id, start, completion));
        results.push(ProcessTiming::new(p, start, completion));
        current_time = completion;
    }

    Ok(SimulationOutcome { results, timeline })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fcfs_reference_scenario() {
        let processes = vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
        ];
        let outcome = fcfs(&processes).unwrap();

        assert_eq!(outcome.timing_for("P1").unwrap().completion, 5);
        assert_eq!(outcome.timing_for("P2").unwrap().completion, 8);
        assert_eq!(outcome.timing_for("P3").unwrap().completion, 16);

        assert_eq!(outcome.timing_for("P1").unwrap().waiting(), 0);
        assert_eq!(outcome.timing_for("P2").unwrap().waiting(), 4);
        assert_eq!(outcome.timing_for("P3").unwrap().waiting(), 6);
    }

    #[test]
    fn test_fcfs_results_in_arrival_order() {
        let processes = vec![
            Process::new("late", 10, 2),
            Process::new("early", 0, 2),
        ];
        let outcome = fcfs(&processes).unwrap();
        assert_eq!(outcome.results[0].id, "early");
        assert_eq!(outcome.results[1].id, "late");
    }

    #[test]
    fn test_fcfs_arrival_tie_keeps_input_order() {
        let processes = vec![
            Process::new("B", 0, 2),
            Process::new("A", 0, 2),
        ];
        let outcome = fcfs(&processes).unwrap();
        // Same arrival: B was supplied first, B runs first
        assert_eq!(outcome.timeline[0].id, "B");
        assert_eq!(outcome.timeline[1].id, "A");
    }

    #[test]
    fn test_fcfs_idle_cpu() {
        let processes = vec![Process::new("P1", 3, 2), Process::new("P2", 10, 1)];
        let outcome = fcfs(&processes).unwrap();

        // CPU idles until 3, then from 5 until 10
        let p1 = outcome.timing_for("P1").unwrap();
        assert_eq!(p1.start, 3);
        assert_eq!(p1.completion, 5);
        let p2 = outcome.timing_for("P2").unwrap();
        assert_eq!(p2.start, 10);
        assert_eq!(p2.completion, 11);
        assert_eq!(p2.waiting(), 0);
    }

    #[test]
    fn test_fcfs_waiting_is_sum_of_earlier_bursts() {
        // All arrive at 0: waiting(k) = sum of bursts before k
        let processes = vec![
            Process::new("P1", 0, 4),
            Process::new("P2", 0, 6),
            Process::new("P3", 0, 2),
        ];
        let outcome = fcfs(&processes).unwrap();
        assert_eq!(outcome.timing_for("P1").unwrap().waiting(), 0);
        assert_eq!(outcome.timing_for("P2").unwrap().waiting(), 4);
        assert_eq!(outcome.timing_for("P3").unwrap().waiting(), 10);
    }

    #[test]
    fn test_fcfs_single_segment_per_process() {
        let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
        let outcome = fcfs(&processes).unwrap();
        assert_eq!(outcome.segments_for("P1").len(), 1);
        assert_eq!(outcome.segments_for("P2").len(), 1);
    }

    #[test]
    fn test_fcfs_does_not_mutate_input() {
        let processes = vec![Process::new("B", 5, 1), Process::new("A", 0, 1)];
        let before = processes.clone();
        fcfs(&processes).unwrap();
        assert_eq!(processes, before);
    }

    #[test]
    fn test_fcfs_rejects_invalid_input() {
        assert!(fcfs(&[]).is_err());
        assert!(fcfs(&[Process::new("P1", -1, 5)]).is_err());
        assert!(fcfs(&[Process::new("P1", 0, 0)]).is_err());
    }

    #[test]
    fn test_fcfs_deterministic() {
        let processes = vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
        ];
        assert_eq!(fcfs(&processes), fcfs(&processes));
    }
}
