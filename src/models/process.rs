//! Process (input) model.
//!
//! A process is a unit of CPU work submitted for simulation: it becomes
//! eligible at its arrival time and needs `burst_time` units of CPU.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process as submitted by a caller, before indexing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessInput {
    /// Caller-chosen label.
    pub id: String,
    /// Time the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
}

impl ProcessInput {
    /// Creates a new input record.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
        }
    }
}

/// An indexed, immutable process record consumed by every policy.
///
/// `original_index` is the 0-based submission position. Engines use it
/// only to break arrival ties and to restore display order.
///
/// # Time Representation
/// Times are abstract integer units relative to t=0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Unique process identifier.
    pub id: String,
    /// Arrival time (>= 0 for valid input).
    pub arrival_time: i64,
    /// Burst time (> 0 for valid input).
    pub burst_time: i64,
    /// Position in the submitted list.
    pub original_index: usize,
}

impl ProcessSpec {
    /// Creates a new process spec.
    pub fn new(
        id: impl Into<String>,
        arrival_time: i64,
        burst_time: i64,
        original_index: usize,
    ) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            original_index,
        }
    }

    /// Indexes inputs in submission order.
    pub fn index_all<I>(inputs: I) -> Vec<ProcessSpec>
    where
        I: IntoIterator<Item = ProcessInput>,
    {
        inputs
            .into_iter()
            .enumerate()
            .map(|(idx, p)| Self::new(p.id, p.arrival_time, p.burst_time, idx))
            .collect()
    }

    /// Builds specs from `(id, arrival, burst)` tuples.
    pub fn from_tuples(rows: &[(&str, i64, i64)]) -> Vec<ProcessSpec> {
        rows.iter()
            .enumerate()
            .map(|(idx, &(id, at, bt))| Self::new(id, at, bt, idx))
            .collect()
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }
}

/// Total CPU demand of a process set.
pub fn total_burst_time(processes: &[ProcessSpec]) -> i64 {
    processes.iter().map(|p| p.burst_time).sum()
}
