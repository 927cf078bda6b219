//! Shared ordering and clock bookkeeping for policy engines.

use tracing::trace;

use crate::models::{ExecutionSlice, Gantt, ProcessSpec};

/// Returns the processes in dispatch-eligibility order.
///
/// Sorted by arrival time, ties broken by submission index, so the
/// order never depends on how the caller happened to list processes
/// with equal arrivals.
pub(crate) fn arrival_order(processes: &[ProcessSpec]) -> Vec<&ProcessSpec> {
    let mut order: Vec<&ProcessSpec> = processes.iter().collect();
    order.sort_by_key(|p| (p.arrival_time, p.original_index));
    order
}

/// A single-CPU clock that records every interval it advances over.
#[derive(Debug, Default)]
pub(crate) struct Timeline {
    clock: i64,
    gantt: Gantt,
}

impl Timeline {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Current simulated time.
    #[inline]
    pub(crate) fn now(&self) -> i64 {
        self.clock
    }

    /// Advances to `time`, recording an idle gap if the clock is behind.
    pub(crate) fn idle_until(&mut self, time: i64) {
        if self.clock < time {
            trace!(start = self.clock, end = time, "cpu idle");
            self.gantt.push(ExecutionSlice::idle(self.clock, time));
            self.clock = time;
        }
    }

    /// Runs `process` for `duration` units and returns the new clock.
    pub(crate) fn run(&mut self, process: &ProcessSpec, duration: i64) -> i64 {
        let start = self.clock;
        let end = start + duration;
        trace!(process = %process.id, start, end, "dispatch");
        self.gantt.push(ExecutionSlice::running(
            &process.id,
            process.original_index,
            start,
            end,
        ));
        self.clock = end;
        end
    }

    pub(crate) fn into_gantt(self) -> Gantt {
        self.gantt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrival_order_breaks_ties_by_index() {
        let specs = vec![
            ProcessSpec::new("late", 4, 1, 0),
            ProcessSpec::new("tie_b", 1, 1, 2),
            ProcessSpec::new("tie_a", 1, 1, 1),
        ];
        let ids: Vec<&str> = arrival_order(&specs).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["tie_a", "tie_b", "late"]);
    }

    #[test]
    fn test_idle_until_only_moves_forward() {
        let mut t = Timeline::new();
        t.idle_until(0);
        assert_eq!(t.now(), 0);

        t.idle_until(3);
        assert_eq!(t.now(), 3);

        t.idle_until(1);
        assert_eq!(t.now(), 3);

        let gantt = t.into_gantt();
        assert_eq!(gantt.len(), 1);
        assert!(gantt.slices[0].is_idle());
    }

    #[test]
    fn test_run_records_slice() {
        let p = ProcessSpec::new("P1", 0, 4, 0);
        let mut t = Timeline::new();
        assert_eq!(t.run(&p, 2), 2);
        assert_eq!(t.run(&p, 2), 4);

        let gantt = t.into_gantt();
        assert_eq!(gantt.len(), 2);
        assert_eq!(gantt.slices[1].start_time, 2);
        assert!(gantt.is_contiguous());
    }
}
