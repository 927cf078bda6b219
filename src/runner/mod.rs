//! Policy orchestration and metrics.
//!
//! Runs one or more policies against the same validated process set and
//! packages each outcome with its aggregate metrics.
//!
//! # Metrics
//!
//! `AggregateMetrics` holds mean turnaround, waiting, and response time,
//! each rounded to two decimals.

mod metrics;
mod policy_runner;

pub use metrics::AggregateMetrics;
pub use policy_runner::{
    PolicyReport, PolicyRunner, RunnerConfig, SimulationReport, SimulationRequest, PARALLEL_ENV,
};
