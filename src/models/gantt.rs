//! Gantt (timeline) model.
//!
//! A Gantt sequence is the ordered list of CPU-allocation intervals a
//! policy produced, including idle gaps. A well-formed sequence tiles
//! `[0, total_elapsed_time)` with no gaps or overlaps.

use serde::{Deserialize, Serialize};

/// Who holds the CPU during a slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SliceOwner {
    /// Nothing had arrived while the CPU was free.
    Idle,
    /// A process was running.
    Process {
        /// Process identifier.
        id: String,
        /// Submission index of the process.
        original_index: usize,
    },
}

/// One contiguous CPU-allocation interval `[start_time, end_time)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Slice owner.
    pub owner: SliceOwner,
    /// Start time (inclusive).
    pub start_time: i64,
    /// End time (exclusive).
    pub end_time: i64,
}

impl ExecutionSlice {
    /// Creates an idle slice.
    pub fn idle(start_time: i64, end_time: i64) -> Self {
        Self {
            owner: SliceOwner::Idle,
            start_time,
            end_time,
        }
    }

    /// Creates a slice in which a process runs.
    pub fn running(
        id: impl Into<String>,
        original_index: usize,
        start_time: i64,
        end_time: i64,
    ) -> Self {
        Self {
            owner: SliceOwner::Process {
                id: id.into(),
                original_index,
            },
            start_time,
            end_time,
        }
    }

    /// Slice length.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }

    /// Whether this is an idle gap.
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self.owner, SliceOwner::Idle)
    }

    /// Process ID, or `None` for idle slices.
    pub fn process_id(&self) -> Option<&str> {
        match &self.owner {
            SliceOwner::Idle => None,
            SliceOwner::Process { id, .. } => Some(id.as_str()),
        }
    }

    /// Submission index, or `None` for idle slices.
    pub fn original_index(&self) -> Option<usize> {
        match &self.owner {
            SliceOwner::Idle => None,
            SliceOwner::Process { original_index, .. } => Some(*original_index),
        }
    }
}

/// An ordered Gantt sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gantt {
    /// Slices in execution order.
    pub slices: Vec<ExecutionSlice>,
}

impl Gantt {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice.
    pub fn push(&mut self, slice: ExecutionSlice) {
        self.slices.push(slice);
    }

    /// End of the last slice (0 when empty).
    pub fn total_elapsed_time(&self) -> i64 {
        self.slices.last().map(|s| s.end_time).unwrap_or(0)
    }

    /// All slices in which the given process ran.
    pub fn slices_for(&self, process_id: &str) -> Vec<&ExecutionSlice> {
        self.slices
            .iter()
            .filter(|s| s.process_id() == Some(process_id))
            .collect()
    }

    /// Time the CPU spent running processes.
    pub fn busy_time(&self) -> i64 {
        self.slices
            .iter()
            .filter(|s| !s.is_idle())
            .map(|s| s.duration())
            .sum()
    }

    /// Time the CPU spent idle.
    pub fn idle_time(&self) -> i64 {
        self.slices
            .iter()
            .filter(|s| s.is_idle())
            .map(|s| s.duration())
            .sum()
    }

    /// CPU utilization: busy_time / total_elapsed_time.
    ///
    /// Returns `None` for an empty timeline.
    pub fn cpu_utilization(&self) -> Option<f64> {
        let horizon = self.total_elapsed_time();
        if horizon <= 0 {
            return None;
        }
        Some(self.busy_time() as f64 / horizon as f64)
    }

    /// Number of switches from one process to a different one.
    ///
    /// An idle gap between two processes does not count as a switch.
    pub fn context_switches(&self) -> usize {
        let running: Vec<&str> = self.slices.iter().filter_map(|s| s.process_id()).collect();
        running.windows(2).filter(|w| w[0] != w[1]).count()
    }

    /// Whether the slices tile `[0, total_elapsed_time)` exactly.
    pub fn is_contiguous(&self) -> bool {
        let mut cursor = 0;
        for s in &self.slices {
            if s.start_time != cursor || s.end_time <= s.start_time {
                return false;
            }
            cursor = s.end_time;
        }
        true
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether the sequence has no slices.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}
