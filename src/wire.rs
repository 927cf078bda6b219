//! JSON wire format.
//!
//! Request and response shapes for exposing the runner behind any
//! transport (HTTP handler, CLI, message queue). Field names are short
//! (`at`, `bt`, `ct`, ...) to match existing front ends.
//!
//! # Request
//!
//! ```json
//! {"processes": [{"id": "P1", "at": 0, "bt": 5}], "quantum": 2}
//! ```
//!
//! # Response
//!
//! ```json
//! {"fcfs": {"results": [...], "gantt": [...], "metrics": {...}, "total": 5},
//!  "rr":   {"results": [...], "gantt": [...], "metrics": {...}, "total": 5}}
//! ```
//!
//! Errors are reported as `{"error": "<reason>"}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::models::{ExecutionSlice, ProcessInput, ProcessResult};
use crate::runner::{AggregateMetrics, PolicyReport, PolicyRunner, SimulationReport, SimulationRequest};

/// Label used for idle Gantt rows.
pub const IDLE_LABEL: &str = "Idle";

/// A process as sent by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireProcess {
    /// Process label.
    pub id: String,
    /// Arrival time.
    pub at: i64,
    /// Burst time.
    pub bt: i64,
}

/// A simulation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// Processes in submission order.
    #[serde(default)]
    pub processes: Vec<WireProcess>,
    /// Round Robin quantum (default 2).
    #[serde(default)]
    pub quantum: Option<i64>,
}

impl From<CalculateRequest> for SimulationRequest {
    fn from(req: CalculateRequest) -> Self {
        Self {
            processes: req
                .processes
                .into_iter()
                .map(|p| ProcessInput::new(p.id, p.at, p.bt))
                .collect(),
            quantum: req.quantum,
        }
    }
}

/// One row of the results table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireResult {
    /// Process label.
    pub id: String,
    /// Arrival time.
    pub at: i64,
    /// Burst time.
    pub bt: i64,
    /// Completion time.
    pub ct: i64,
    /// Turnaround time.
    pub tat: i64,
    /// Waiting time.
    pub wt: i64,
    /// Response time.
    pub rt: i64,
    /// Submission index.
    pub idx: usize,
}

impl From<&ProcessResult> for WireResult {
    fn from(r: &ProcessResult) -> Self {
        Self {
            id: r.id.clone(),
            at: r.arrival_time,
            bt: r.burst_time,
            ct: r.completion_time,
            tat: r.turnaround_time,
            wt: r.waiting_time,
            rt: r.response_time,
            idx: r.original_index,
        }
    }
}

/// One Gantt row. Idle rows carry `idle: true` and no `idx`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireSlice {
    /// Process label, or `"Idle"`.
    pub id: String,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
    /// Submission index of the running process.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idx: Option<usize>,
    /// Set on idle gaps only.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub idle: bool,
}

impl From<&ExecutionSlice> for WireSlice {
    fn from(s: &ExecutionSlice) -> Self {
        Self {
            id: s.process_id().unwrap_or(IDLE_LABEL).to_string(),
            start: s.start_time,
            end: s.end_time,
            idx: s.original_index(),
            idle: s.is_idle(),
        }
    }
}

/// Averages block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WireMetrics {
    /// Mean turnaround time.
    pub avg_tat: f64,
    /// Mean waiting time.
    pub avg_wt: f64,
    /// Mean response time.
    pub avg_rt: f64,
}

impl From<&AggregateMetrics> for WireMetrics {
    fn from(m: &AggregateMetrics) -> Self {
        Self {
            avg_tat: m.mean_turnaround_time,
            avg_wt: m.mean_waiting_time,
            avg_rt: m.mean_response_time,
        }
    }
}

/// Everything reported for one policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyPayload {
    /// Per-process rows in submission order.
    pub results: Vec<WireResult>,
    /// Timeline rows in execution order.
    pub gantt: Vec<WireSlice>,
    /// Averages.
    pub metrics: WireMetrics,
    /// Total elapsed time.
    pub total: i64,
}

impl From<&PolicyReport> for PolicyPayload {
    fn from(report: &PolicyReport) -> Self {
        Self {
            results: report.outcome.results.iter().map(WireResult::from).collect(),
            gantt: report.outcome.gantt.slices.iter().map(WireSlice::from).collect(),
            metrics: WireMetrics::from(&report.metrics),
            total: report.outcome.total_elapsed_time,
        }
    }
}

/// Response body keyed by policy key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalculateResponse {
    /// Payloads keyed by policy key (`"fcfs"`, `"rr"`).
    pub policies: BTreeMap<String, PolicyPayload>,
}

impl CalculateResponse {
    /// Payload for a policy key.
    pub fn get(&self, key: &str) -> Option<&PolicyPayload> {
        self.policies.get(key)
    }
}

impl From<&SimulationReport> for CalculateResponse {
    fn from(report: &SimulationReport) -> Self {
        Self {
            policies: report
                .iter()
                .map(|r| (r.key.clone(), PolicyPayload::from(r)))
                .collect(),
        }
    }
}

/// Error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Rejection reason.
    pub error: String,
}

impl From<&SimulationError> for ErrorBody {
    fn from(err: &SimulationError) -> Self {
        Self {
            error: err.reason().to_string(),
        }
    }
}

/// Runs a decoded request.
pub fn calculate(
    runner: &PolicyRunner,
    request: CalculateRequest,
) -> Result<CalculateResponse, SimulationError> {
    let report = runner.run_request(request.into())?;
    Ok(CalculateResponse::from(&report))
}

/// Decodes a JSON request, runs it, and encodes the JSON response.
///
/// # Errors
/// `Malformed` for undecodable bodies, `InvalidInput` for rejected input.
pub fn calculate_json(runner: &PolicyRunner, body: &str) -> Result<String, SimulationError> {
    let request: CalculateRequest = serde_json::from_str(body)?;
    let response = calculate(runner, request)?;
    Ok(serde_json::to_string(&response)?)
}

/// Encodes an error as `{"error": "<reason>"}`.
pub fn error_json(err: &SimulationError) -> String {
    serde_json::to_string(&ErrorBody::from(err))
        .unwrap_or_else(|_| String::from(r#"{"error":"Unencodable error"}"#))
}
