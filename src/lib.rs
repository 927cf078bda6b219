//! Deterministic CPU scheduling simulator.
//!
//! Given a fixed process set (arrival time, burst time), computes what a
//! single-CPU scheduler would have done under each configured policy: a
//! Gantt timeline plus completion, turnaround, waiting, and response
//! times per process.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessSpec`, `ExecutionSlice`, `Gantt`,
//!   `ProcessResult`, `SimulationOutcome`
//! - **`policy`**: `SchedulingPolicy` trait, `Fcfs`, `RoundRobin`, `Policy`
//! - **`runner`**: `PolicyRunner`, `RunnerConfig`, `AggregateMetrics`
//! - **`validation`**: Input checks (empty sets, duplicate IDs, bad times, bad quantum)
//! - **`wire`**: JSON request/response shapes
//! - **`workload`**: Seeded random process sets
//! - **`telemetry`**: Tracing subscriber setup for binaries
//!
//! # Example
//!
//! ```
//! use u_cpu_schedule::models::ProcessSpec;
//! use u_cpu_schedule::runner::PolicyRunner;
//!
//! let processes = ProcessSpec::from_tuples(&[("P1", 0, 5), ("P2", 1, 3), ("P3", 2, 8)]);
//! let report = PolicyRunner::default().run(&processes).unwrap();
//!
//! let fcfs = report.get("fcfs").unwrap();
//! assert_eq!(fcfs.outcome.waiting_times(), vec![0, 4, 6]);
//! assert_eq!(report.get("rr").unwrap().outcome.total_elapsed_time, 16);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod models;
pub mod policy;
pub mod runner;
pub mod telemetry;
pub mod validation;
pub mod wire;
pub mod workload;

pub use error::SimulationError;
