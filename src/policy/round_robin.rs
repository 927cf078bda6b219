//! Round Robin with a fixed quantum.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival (ties by submission index) and admit
//!    everything that has arrived at t=0 into a FIFO ready queue.
//! 2. If the queue is empty, idle until the next arrival and admit it
//!    (plus anything arriving at the same instant).
//! 3. Dispatch the head for `min(remaining, quantum)`.
//! 4. Admit arrivals up to the new clock, THEN requeue the dispatched
//!    process if it still has work. A process arriving exactly when a
//!    slice ends is therefore queued ahead of the preempted one.
//!
//! # Complexity
//! O(n log n + Σ ceil(burst / quantum)) dispatches.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.4

use std::collections::VecDeque;
use std::iter::Peekable;

use tracing::debug;

use super::timeline::{arrival_order, Timeline};
use super::SchedulingPolicy;
use crate::error::SimulationError;
use crate::models::{ProcessResult, ProcessSpec, SimulationOutcome};
use crate::validation::validate_quantum;

/// Quantum used when a caller does not supply one.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Preemptive time-sliced scheduling.
///
/// The quantum is validated on construction, so every `RoundRobin`
/// value is guaranteed to terminate.
///
/// # Example
///
/// ```
/// use u_cpu_schedule::models::ProcessSpec;
/// use u_cpu_schedule::policy::{RoundRobin, SchedulingPolicy};
///
/// let processes = ProcessSpec::from_tuples(&[("P1", 0, 5), ("P2", 1, 3), ("P3", 2, 8)]);
/// let rr = RoundRobin::new(2).unwrap();
/// let outcome = rr.simulate(&processes);
/// assert_eq!(outcome.completion_times(), vec![12, 9, 16]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: i64,
}

/// Per-run working state of a queued process.
#[derive(Debug)]
struct ReadyEntry<'a> {
    process: &'a ProcessSpec,
    remaining: i64,
    first_run: Option<i64>,
}

impl<'a> ReadyEntry<'a> {
    fn new(process: &'a ProcessSpec) -> Self {
        Self {
            process,
            remaining: process.burst_time,
            first_run: None,
        }
    }
}

impl RoundRobin {
    /// Creates a Round Robin policy.
    ///
    /// # Errors
    /// `InvalidInput` if `quantum <= 0`.
    pub fn new(quantum: i64) -> Result<Self, SimulationError> {
        validate_quantum(quantum)?;
        Ok(Self { quantum })
    }

    /// Maximum contiguous run per dispatch.
    #[inline]
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
        }
    }
}

/// Moves every pending process that has arrived by `now` into the queue.
fn admit<'a, I>(pending: &mut Peekable<I>, ready: &mut VecDeque<ReadyEntry<'a>>, now: i64)
where
    I: Iterator<Item = &'a ProcessSpec>,
{
    while let Some(process) = pending.next_if(|p| p.has_arrived(now)) {
        ready.push_back(ReadyEntry::new(process));
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn key(&self) -> &'static str {
        "rr"
    }

    fn simulate(&self, processes: &[ProcessSpec]) -> SimulationOutcome {
        let mut pending = arrival_order(processes).into_iter().peekable();
        let mut ready: VecDeque<ReadyEntry<'_>> = VecDeque::with_capacity(processes.len());
        let mut timeline = Timeline::new();
        let mut results = Vec::with_capacity(processes.len());
        let mut dispatches: usize = 0;

        admit(&mut pending, &mut ready, timeline.now());

        loop {
            let Some(mut entry) = ready.pop_front() else {
                let Some(next_arrival) = pending.peek().map(|p| p.arrival_time) else {
                    break;
                };
                timeline.idle_until(next_arrival);
                admit(&mut pending, &mut ready, timeline.now());
                continue;
            };

            let start = timeline.now();
            let first_run = *entry.first_run.get_or_insert(start);
            let exec_time = entry.remaining.min(self.quantum);
            let end = timeline.run(entry.process, exec_time);
            entry.remaining -= exec_time;
            dispatches += 1;

            // Arrivals during (or exactly at the end of) the slice go first
            admit(&mut pending, &mut ready, end);

            if entry.remaining > 0 {
                ready.push_back(entry);
            } else {
                results.push(ProcessResult::from_run(entry.process, first_run, end));
            }
        }

        let outcome = SimulationOutcome::new(timeline.into_gantt(), results);
        debug!(
            processes = processes.len(),
            quantum = self.quantum,
            dispatches,
            total = outcome.total_elapsed_time,
            "round robin simulation finished"
        );
        outcome
    }

    fn description(&self) -> &'static str {
        "Round Robin (preemptive, fixed quantum)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Fcfs;

    fn three_processes() -> Vec<ProcessSpec> {
        ProcessSpec::from_tuples(&[("P1", 0, 5), ("P2", 1, 3), ("P3", 2, 8)])
    }

    fn spans(outcome: &SimulationOutcome) -> Vec<(Option<&str>, i64, i64)> {
        outcome
            .gantt
            .slices
            .iter()
            .map(|s| (s.process_id(), s.start_time, s.end_time))
            .collect()
    }

    #[test]
    fn test_rr_quantum_two() {
        let outcome = RoundRobin::new(2).unwrap().simulate(&three_processes());

        assert_eq!(
            spans(&outcome),
            vec![
                (Some("P1"), 0, 2),
                (Some("P2"), 2, 4),
                (Some("P3"), 4, 6),
                (Some("P1"), 6, 8),
                (Some("P2"), 8, 9),
                (Some("P3"), 9, 11),
                (Some("P1"), 11, 12),
                (Some("P3"), 12, 14),
                (Some("P3"), 14, 16),
            ]
        );
        assert_eq!(outcome.completion_times(), vec![12, 9, 16]);
        assert_eq!(outcome.waiting_times(), vec![7, 5, 6]);
        assert_eq!(outcome.total_elapsed_time, 16);

        let rts: Vec<i64> = outcome.results.iter().map(|r| r.response_time).collect();
        assert_eq!(rts, vec![0, 1, 2]);
    }

    #[test]
    fn test_rr_arrival_at_slice_end_goes_before_requeue() {
        // P2 arrives exactly when P1's first slice ends
        let processes = ProcessSpec::from_tuples(&[("P1", 0, 4), ("P2", 2, 1)]);
        let outcome = RoundRobin::new(2).unwrap().simulate(&processes);

        assert_eq!(
            spans(&outcome),
            vec![(Some("P1"), 0, 2), (Some("P2"), 2, 3), (Some("P1"), 3, 5)]
        );
    }

    #[test]
    fn test_rr_idle_gap() {
        let processes = ProcessSpec::from_tuples(&[("P1", 3, 2)]);
        let outcome = RoundRobin::new(2).unwrap().simulate(&processes);

        assert_eq!(spans(&outcome), vec![(None, 0, 3), (Some("P1"), 3, 5)]);
        let r = &outcome.results[0];
        assert_eq!(r.response_time, 0);
        assert_eq!(r.waiting_time, 0);
        assert_eq!(r.turnaround_time, 2);
    }

    #[test]
    fn test_rr_idle_between_bursts() {
        let processes = ProcessSpec::from_tuples(&[("P1", 0, 3), ("P2", 10, 2), ("P3", 10, 1)]);
        let outcome = RoundRobin::new(2).unwrap().simulate(&processes);

        assert_eq!(
            spans(&outcome),
            vec![
                (Some("P1"), 0, 2),
                (Some("P1"), 2, 3),
                (None, 3, 10),
                (Some("P2"), 10, 12),
                (Some("P3"), 12, 13),
            ]
        );
        assert!(outcome.gantt.is_contiguous());
    }

    #[test]
    fn test_rr_single_process_runs_uninterrupted() {
        let processes = ProcessSpec::from_tuples(&[("P1", 0, 7)]);
        let outcome = RoundRobin::new(3).unwrap().simulate(&processes);

        // Sliced by the quantum, but never preempted by anyone else
        assert!(outcome.gantt.slices.iter().all(|s| s.process_id() == Some("P1")));
        assert_eq!(outcome.gantt.context_switches(), 0);
        assert_eq!(outcome.results[0].completion_time, 7);
        assert_eq!(outcome.results[0].waiting_time, 0);
    }

    #[test]
    fn test_rr_large_quantum_matches_fcfs() {
        let processes = three_processes();
        let rr = RoundRobin::new(100).unwrap().simulate(&processes);
        let fcfs = Fcfs.simulate(&processes);

        assert_eq!(rr.results, fcfs.results);
        assert_eq!(rr.gantt, fcfs.gantt);
    }

    #[test]
    fn test_rr_conserves_burst_time() {
        let processes = three_processes();
        let outcome = RoundRobin::new(3).unwrap().simulate(&processes);

        for p in &processes {
            let ran: i64 = outcome.gantt.slices_for(&p.id).iter().map(|s| s.duration()).sum();
            assert_eq!(ran, p.burst_time, "process {}", p.id);
        }
    }

    #[test]
    fn test_rr_rejects_non_positive_quantum() {
        assert!(matches!(
            RoundRobin::new(0),
            Err(SimulationError::InvalidInput { .. })
        ));
        assert!(RoundRobin::new(-1).is_err());
    }

    #[test]
    fn test_rr_default_quantum() {
        assert_eq!(RoundRobin::default().quantum(), DEFAULT_QUANTUM);
    }

    #[test]
    fn test_rr_empty() {
        let outcome = RoundRobin::default().simulate(&[]);
        assert!(outcome.is_empty());
        assert_eq!(outcome.total_elapsed_time, 0);
    }
}
