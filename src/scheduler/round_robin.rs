//! Round-Robin scheduling with a fixed time quantum.
//!
//! # Algorithm
//!
//! A FIFO ready queue over arrival-sorted processes. Each dispatch runs
//! `min(quantum, remaining)` time units and emits one timeline segment.
//! After a dispatch, processes that arrived during it join the queue
//! **before** the preempted process returns to the tail — this ordering
//! changes fairness outcomes and is part of the contract. When the queue
//! drains with arrivals still pending, the clock jumps to the next
//! arrival.
//!
//! The quantum must be positive; an invalid quantum rejects the run
//! rather than falling back to a default.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.4

use std::collections::VecDeque;

use crate::models::{Process, ProcessTiming, SimulationOutcome, TimelineSegment};
use crate::validation::validate_round_robin_input;

use super::{indices_by_arrival, SimResult};

/// Simulates Round-Robin scheduling with the given quantum.
///
/// Preemptive: a process is preempted when its quantum expires and
/// re-queued behind any newly arrived processes. A process may span
/// several timeline segments, one per dispatch. Results are sorted by
/// process ID for display.
pub fn round_robin(processes: &[Process], quantum: i64) -> SimResult {
    validate_round_robin_input(processes, quantum)?;

    let order = indices_by_arrival(processes);

    let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst).collect();
    let mut first_start: Vec<Option<i64>> = vec![None; processes.len()];
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut next_arrival = 0;
    let mut current_time: i64 = 0;
    let mut timeline = Vec::new();
    let mut results = Vec::with_capacity(processes.len());

    // Enqueue everything already eligible at t=0
    enqueue_arrivals(processes, &order, &mut next_arrival, current_time, &mut queue);

    while !queue.is_empty() || next_arrival < order.len() {
        let Some(idx) = queue.pop_front() else {
            // Queue drained with arrivals pending: idle to the next one
            current_time = processes[order[next_arrival]].arrival;
            enqueue_arrivals(processes, &order, &mut next_arrival, current_time, &mut queue);
            continue;
        };

        let p = &processes[idx];
        let exec = quantum.min(remaining[idx]);

        if first_start[idx].is_none() {
            first_start[idx] = Some(current_time);
        }
        timeline.push(TimelineSegment::new(&p.id, current_time, current_time + exec));
        remaining[idx] -= exec;
        current_time += exec;

        // New arrivals enter the queue before the preempted process
        enqueue_arrivals(processes, &order, &mut next_arrival, current_time, &mut queue);

        if remaining[idx] == 0 {
            let start = first_start[idx].unwrap_or(p.arrival);
            results.push(ProcessTiming::new(p, start, current_time));
        } else {
            queue.push_back(idx);
        }
    }

    results.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(SimulationOutcome { results, timeline })
}

/// Moves every process with `arrival <= now` from the arrival cursor
/// into the ready queue, in ascending-arrival (stably original) order.
fn enqueue_arrivals(
    processes: &[Process],
    order: &[usize],
    next_arrival: &mut usize,
    now: i64,
    queue: &mut VecDeque<usize>,
) {
    while *next_arrival < order.len() && processes[order[*next_arrival]].arrival <= now {
        queue.push_back(order[*next_arrival]);
        *next_arrival += 1;
    }
}
