//! CPU scheduling domain models.
//!
//! Typed records for the input process set and for what a policy did
//! with it.
//!
//! # Glossary
//!
//! | Term | Meaning |
//! |------|---------|
//! | AT | Arrival time |
//! | BT | Burst time (CPU demand) |
//! | CT | Completion time |
//! | TAT | Turnaround time, CT - AT |
//! | WT | Waiting time, TAT - BT |
//! | RT | Response time, first dispatch - AT |

mod gantt;
mod outcome;
mod process;

pub use gantt::{ExecutionSlice, Gantt, SliceOwner};
pub use outcome::{ProcessResult, SimulationOutcome};
pub use process::{total_burst_time, ProcessInput, ProcessSpec};
