//! First-Come, First-Served.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival time (ties by submission index).
//! 2. Walk the order with a single clock; if the next process has not
//!    arrived yet, record an idle gap up to its arrival.
//! 3. Run each process to completion.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the walk.

use tracing::debug;

use super::timeline::{arrival_order, Timeline};
use super::SchedulingPolicy;
use crate::models::{ProcessResult, ProcessSpec, SimulationOutcome};

/// Non-preemptive arrival-order scheduling.
///
/// # Example
///
/// ```
/// use u_cpu_schedule::models::ProcessSpec;
/// use u_cpu_schedule::policy::{Fcfs, SchedulingPolicy};
///
/// let processes = ProcessSpec::from_tuples(&[("P1", 0, 5), ("P2", 1, 3), ("P3", 2, 8)]);
/// let outcome = Fcfs.simulate(&processes);
/// assert_eq!(outcome.completion_times(), vec![5, 8, 16]);
/// assert_eq!(outcome.total_elapsed_time, 16);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn key(&self) -> &'static str {
        "fcfs"
    }

    fn simulate(&self, processes: &[ProcessSpec]) -> SimulationOutcome {
        let mut timeline = Timeline::new();
        let mut results = Vec::with_capacity(processes.len());

        for process in arrival_order(processes) {
            timeline.idle_until(process.arrival_time);
            let start = timeline.now();
            let end = timeline.run(process, process.burst_time);
            results.push(ProcessResult::from_run(process, start, end));
        }

        let outcome = SimulationOutcome::new(timeline.into_gantt(), results);
        debug!(
            processes = processes.len(),
            total = outcome.total_elapsed_time,
            "fcfs simulation finished"
        );
        outcome
    }

    fn description(&self) -> &'static str {
        "First-Come, First-Served (non-preemptive)"
    }
}
