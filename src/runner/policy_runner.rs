//! Policy runner.
//!
//! # Algorithm
//!
//! 1. Validate the process set (and quantum, for requests).
//! 2. Simulate each configured policy against the same immutable slice,
//!    sequentially or on scoped threads.
//! 3. Aggregate each outcome into a [`PolicyReport`], keeping the
//!    configured policy order.

use std::thread;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use super::metrics::{round2, AggregateMetrics};
use crate::error::SimulationError;
use crate::models::{ProcessInput, ProcessSpec, SimulationOutcome};
use crate::policy::{Policy, SchedulingPolicy, DEFAULT_QUANTUM};
use crate::validation::{validate_processes, validate_quantum};

/// Environment variable enabling parallel policy runs.
pub const PARALLEL_ENV: &str = "CPU_SCHEDULE_PARALLEL";

/// Input container for a simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes in submission order.
    pub processes: Vec<ProcessInput>,
    /// Round Robin quantum. `None` = [`DEFAULT_QUANTUM`].
    #[serde(default)]
    pub quantum: Option<i64>,
}

impl SimulationRequest {
    /// Creates a request with the default quantum.
    pub fn new(processes: Vec<ProcessInput>) -> Self {
        Self {
            processes,
            quantum: None,
        }
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Effective quantum.
    pub fn quantum_or_default(&self) -> i64 {
        self.quantum.unwrap_or(DEFAULT_QUANTUM)
    }
}

/// Which policies to run and how.
#[derive(Debug, Clone, PartialEq)]
pub struct RunnerConfig {
    /// Policies in report order.
    pub policies: Vec<Policy>,
    /// Run policies on separate threads.
    pub parallel: bool,
}

impl RunnerConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self {
            policies: Vec::new(),
            parallel: false,
        }
    }

    /// FCFS followed by Round Robin with the given quantum.
    pub fn standard(quantum: i64) -> Result<Self, SimulationError> {
        Ok(Self::new()
            .with_policy(Policy::fcfs())
            .with_policy(Policy::round_robin(quantum)?))
    }

    /// Standard configuration, with parallelism taken from
    /// `CPU_SCHEDULE_PARALLEL` (`1` or `true`).
    pub fn from_env() -> Self {
        let parallel = std::env::var(PARALLEL_ENV)
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Self::default().with_parallel(parallel)
    }

    /// Appends a policy.
    pub fn with_policy(mut self, policy: impl Into<Policy>) -> Self {
        self.policies.push(policy.into());
        self
    }

    /// Enables or disables parallel runs.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::new()
            .with_policy(Policy::fcfs())
            .with_policy(Policy::RoundRobin(Default::default()))
    }
}

/// One policy's outcome plus derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyReport {
    /// Policy key (e.g., "rr").
    pub key: String,
    /// Policy display name.
    pub name: String,
    /// Timeline and per-process results.
    pub outcome: SimulationOutcome,
    /// Averages across processes.
    pub metrics: AggregateMetrics,
    /// Busy time / total elapsed time, rounded to two decimals.
    pub cpu_utilization: f64,
}

impl PolicyReport {
    fn new(policy: &Policy, outcome: SimulationOutcome) -> Result<Self, SimulationError> {
        let metrics = AggregateMetrics::calculate(&outcome.results)
            .ok_or_else(|| SimulationError::invalid_input("No processes provided"))?;
        let cpu_utilization = round2(outcome.gantt.cpu_utilization().unwrap_or(0.0));
        Ok(Self {
            key: policy.key().to_string(),
            name: policy.name().to_string(),
            outcome,
            metrics,
            cpu_utilization,
        })
    }
}

/// Reports for every configured policy, in configured order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Per-policy reports.
    pub reports: Vec<PolicyReport>,
}

impl SimulationReport {
    /// Report for a policy key.
    pub fn get(&self, key: &str) -> Option<&PolicyReport> {
        self.reports.iter().find(|r| r.key == key)
    }

    /// Iterates reports in configured order.
    pub fn iter(&self) -> impl Iterator<Item = &PolicyReport> {
        self.reports.iter()
    }

    /// Number of reports.
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Whether no policy was run.
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

/// Runs a configured list of policies against a process set.
///
/// # Example
///
/// ```
/// use u_cpu_schedule::models::ProcessInput;
/// use u_cpu_schedule::runner::{PolicyRunner, SimulationRequest};
///
/// let request = SimulationRequest::new(vec![
///     ProcessInput::new("P1", 0, 5),
///     ProcessInput::new("P2", 1, 3),
/// ]);
/// let report = PolicyRunner::default().run_request(request).unwrap();
/// assert_eq!(report.get("fcfs").unwrap().outcome.total_elapsed_time, 8);
/// assert_eq!(report.get("rr").unwrap().outcome.total_elapsed_time, 8);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PolicyRunner {
    config: RunnerConfig,
}

impl PolicyRunner {
    /// Creates a runner.
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Validates and simulates every configured policy.
    ///
    /// # Errors
    /// `InvalidInput` if the process set fails validation. No policy
    /// runs in that case.
    #[instrument(skip_all, fields(processes = processes.len(), policies = self.config.policies.len()))]
    pub fn run(&self, processes: &[ProcessSpec]) -> Result<SimulationReport, SimulationError> {
        if let Err(errors) = validate_processes(processes) {
            warn!(errors = errors.len(), "rejected process set");
            return Err(errors.into());
        }

        let outcomes = if self.config.parallel && self.config.policies.len() > 1 {
            self.simulate_parallel(processes)
        } else {
            self.config
                .policies
                .iter()
                .map(|p| p.simulate(processes))
                .collect()
        };

        let reports = self
            .config
            .policies
            .iter()
            .zip(outcomes)
            .map(|(policy, outcome)| {
                let report = PolicyReport::new(policy, outcome)?;
                info!(
                    policy = %report.key,
                    total = report.outcome.total_elapsed_time,
                    avg_tat = report.metrics.mean_turnaround_time,
                    avg_wt = report.metrics.mean_waiting_time,
                    avg_rt = report.metrics.mean_response_time,
                    "policy simulated"
                );
                Ok(report)
            })
            .collect::<Result<Vec<_>, SimulationError>>()?;

        Ok(SimulationReport { reports })
    }

    /// Indexes, validates, and runs a request with FCFS and Round Robin.
    ///
    /// The request's quantum (default 2) overrides the configured
    /// policy list; parallelism is kept from this runner.
    ///
    /// # Errors
    /// `InvalidInput` listing every problem with the processes and quantum.
    #[instrument(skip_all, fields(processes = request.processes.len()))]
    pub fn run_request(&self, request: SimulationRequest) -> Result<SimulationReport, SimulationError> {
        let quantum = request.quantum_or_default();
        let processes = ProcessSpec::index_all(request.processes);

        let mut errors = validate_processes(&processes).err().unwrap_or_default();
        if let Err(quantum_errors) = validate_quantum(quantum) {
            errors.extend(quantum_errors);
        }
        if !errors.is_empty() {
            warn!(errors = errors.len(), "rejected simulation request");
            return Err(errors.into());
        }

        let config = RunnerConfig::standard(quantum)?.with_parallel(self.config.parallel);
        Self::new(config).run(&processes)
    }

    fn simulate_parallel(&self, processes: &[ProcessSpec]) -> Vec<SimulationOutcome> {
        thread::scope(|scope| {
            let handles: Vec<_> = self
                .config
                .policies
                .iter()
                .map(|policy| scope.spawn(move || policy.simulate(processes)))
                .collect();

            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
                .collect()
        })
    }
}
