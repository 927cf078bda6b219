//! CPU scheduling policies.
//!
//! Each policy consumes an immutable process set and returns a
//! [`SimulationOutcome`]. Policies share no state; the same slice can be
//! simulated by several policies, in any order or concurrently.
//!
//! # Usage
//!
//! ```
//! use u_cpu_schedule::models::ProcessSpec;
//! use u_cpu_schedule::policy::{Policy, SchedulingPolicy};
//!
//! let processes = ProcessSpec::from_tuples(&[("P1", 0, 4), ("P2", 2, 1)]);
//! let policies = [Policy::fcfs(), Policy::round_robin(2).unwrap()];
//! for policy in &policies {
//!     let outcome = policy.simulate(&processes);
//!     assert_eq!(outcome.total_elapsed_time, 5);
//! }
//! ```

mod fcfs;
mod round_robin;
mod timeline;

pub use fcfs::Fcfs;
pub use round_robin::{RoundRobin, DEFAULT_QUANTUM};

use std::fmt::Debug;

use crate::error::SimulationError;
use crate::models::{ProcessSpec, SimulationOutcome};

/// A CPU dispatching policy.
///
/// Implementations must be pure: the outcome depends only on the
/// process set, never on call history.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Display name (e.g., "FCFS").
    fn name(&self) -> &'static str;

    /// Short stable key used in reports and wire payloads (e.g., "fcfs").
    fn key(&self) -> &'static str;

    /// Simulates the process set from t=0 until every process completes.
    fn simulate(&self, processes: &[ProcessSpec]) -> SimulationOutcome;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// The closed set of supported policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// First-Come, First-Served.
    Fcfs(Fcfs),
    /// Round Robin with a validated quantum.
    RoundRobin(RoundRobin),
}

impl Policy {
    /// FCFS policy.
    pub fn fcfs() -> Self {
        Self::Fcfs(Fcfs)
    }

    /// Round Robin policy.
    ///
    /// # Errors
    /// `InvalidInput` if `quantum <= 0`.
    pub fn round_robin(quantum: i64) -> Result<Self, SimulationError> {
        RoundRobin::new(quantum).map(Self::RoundRobin)
    }

    fn inner(&self) -> &dyn SchedulingPolicy {
        match self {
            Self::Fcfs(p) => p,
            Self::RoundRobin(p) => p,
        }
    }
}

impl SchedulingPolicy for Policy {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn key(&self) -> &'static str {
        self.inner().key()
    }

    fn simulate(&self, processes: &[ProcessSpec]) -> SimulationOutcome {
        self.inner().simulate(processes)
    }

    fn description(&self) -> &'static str {
        self.inner().description()
    }
}

impl From<Fcfs> for Policy {
    fn from(p: Fcfs) -> Self {
        Self::Fcfs(p)
    }
}

impl From<RoundRobin> for Policy {
    fn from(p: RoundRobin) -> Self {
        Self::RoundRobin(p)
    }
}
