//! Simulation outcome model.
//!
//! Per-process timing results and the full outcome of one policy run.

use serde::{Deserialize, Serialize};

use super::{Gantt, ProcessSpec};

/// Timing results for one process.
///
/// Derived fields obey, for every valid simulation:
/// - `turnaround_time = completion_time - arrival_time`
/// - `waiting_time = turnaround_time - burst_time`
/// - `response_time = first dispatch - arrival_time`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Process identifier.
    pub id: String,
    /// Arrival time (copied from the spec).
    pub arrival_time: i64,
    /// Burst time (copied from the spec).
    pub burst_time: i64,
    /// Time the process finished all execution (CT).
    pub completion_time: i64,
    /// CT - AT.
    pub turnaround_time: i64,
    /// TAT - BT.
    pub waiting_time: i64,
    /// First dispatch - AT.
    pub response_time: i64,
    /// Submission index.
    pub original_index: usize,
}

impl ProcessResult {
    /// Derives timing results from a process's first dispatch and completion.
    pub fn from_run(spec: &ProcessSpec, first_run: i64, completion_time: i64) -> Self {
        let turnaround_time = completion_time - spec.arrival_time;
        Self {
            id: spec.id.clone(),
            arrival_time: spec.arrival_time,
            burst_time: spec.burst_time,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - spec.burst_time,
            response_time: first_run - spec.arrival_time,
            original_index: spec.original_index,
        }
    }
}

/// What a single policy did with a process set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// CPU timeline, in execution order.
    pub gantt: Gantt,
    /// One result per process, ordered by `original_index`.
    pub results: Vec<ProcessResult>,
    /// Makespan: end time of the last slice.
    pub total_elapsed_time: i64,
}

impl SimulationOutcome {
    /// Builds an outcome, restoring submission order of the results.
    pub fn new(gantt: Gantt, mut results: Vec<ProcessResult>) -> Self {
        results.sort_by_key(|r| r.original_index);
        let total_elapsed_time = gantt.total_elapsed_time();
        Self {
            gantt,
            results,
            total_elapsed_time,
        }
    }

    /// Result for a given process.
    pub fn result_for(&self, process_id: &str) -> Option<&ProcessResult> {
        self.results.iter().find(|r| r.id == process_id)
    }

    /// Completion times in submission order.
    pub fn completion_times(&self) -> Vec<i64> {
        self.results.iter().map(|r| r.completion_time).collect()
    }

    /// Waiting times in submission order.
    pub fn waiting_times(&self) -> Vec<i64> {
        self.results.iter().map(|r| r.waiting_time).collect()
    }

    /// Whether no process was simulated.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
