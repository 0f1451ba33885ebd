//! Non-preemptive ready-set scheduling: SJF and Priority.
//!
//! Both policies share one control structure: repeatedly pick the best
//! process among those that have already arrived, run it to completion,
//! and let the CPU idle forward to the next arrival when nothing is
//! ready. Only the selection criterion differs — shortest burst for SJF,
//! lowest priority value for Priority.
//!
//! # Tie-breaking
//!
//! Selection is a min-heap keyed `(criterion, arrival, input index)`:
//! lowest criterion value first, then earliest arrival, then original
//! input order. This is part of the contract, not an implementation
//! accident — equal candidates always resolve the same way.
//!
//! Complexity: O(n log n).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2-5.3.3

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::models::{Process, ProcessTiming, SimulationOutcome, TimelineSegment};
use crate::validation::{validate_priority_input, validate_processes};

use super::{indices_by_arrival, SimResult};

/// Simulates Shortest-Job-First scheduling.
///
/// Non-preemptive: among arrived processes, the one with the smallest
/// burst runs to completion. Results are sorted by process ID for
/// display.
pub fn sjf(processes: &[Process]) -> SimResult {
    validate_processes(processes)?;
    Ok(simulate(processes, |p| p.burst))
}

/// Simulates non-preemptive Priority scheduling.
///
/// Among arrived processes, the one with the lowest priority value
/// (highest priority) runs to completion. Every process must carry a
/// priority; the run is rejected otherwise. Results are sorted by
/// process ID for display.
pub fn priority(processes: &[Process]) -> SimResult {
    validate_priority_input(processes)?;
    Ok(simulate(processes, |p| p.priority.unwrap_or(i64::MAX)))
}

/// Ready-set simulation shared by SJF and Priority.
///
/// `criterion` maps a process to its selection value (lower = runs
/// earlier).
fn simulate(processes: &[Process], criterion: impl Fn(&Process) -> i64) -> SimulationOutcome {
    let order = indices_by_arrival(processes);

    // Min-heap of (criterion, arrival, input index)
    let mut ready: BinaryHeap<Reverse<(i64, i64, usize)>> = BinaryHeap::new();
    let mut next_arrival = 0;
    let mut current_time: i64 = 0;
    let mut results = Vec::with_capacity(processes.len());
    let mut timeline = Vec::with_capacity(processes.len());

    while results.len() < processes.len() {
        while next_arrival < order.len() && processes[order[next_arrival]].arrival <= current_time {
            let idx = order[next_arrival];
            let p = &processes[idx];
            ready.push(Reverse((criterion(p), p.arrival, idx)));
            next_arrival += 1;
        }

        let Some(Reverse((_, _, idx))) = ready.pop() else {
            // Nothing ready: idle forward to the next arrival
            current_time = processes[order[next_arrival]].arrival;
            continue;
        };

        let p = &processes[idx];
        let start = current_time;
        let completion = start + p.burst;

        timeline.push(TimelineSegment::new(&p.id, start, completion));
        results.push(ProcessTiming::new(p, start, completion));
        current_time = completion;
    }

    results.sort_by(|a, b| a.id.cmp(&b.id));
    SimulationOutcome { results, timeline }
}
