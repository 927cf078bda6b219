//! Fleet-wide timing metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Mean TAT | Σ(CT - AT) / n |
//! | Mean WT | Σ(TAT - BT) / n |
//! | Mean RT | Σ(first dispatch - AT) / n |
//!
//! Every mean is rounded to two decimal places.

use serde::{Deserialize, Serialize};

use crate::models::ProcessResult;

/// Averages across all processes of one policy run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateMetrics {
    /// Mean turnaround time.
    pub mean_turnaround_time: f64,
    /// Mean waiting time.
    pub mean_waiting_time: f64,
    /// Mean response time.
    pub mean_response_time: f64,
}

impl AggregateMetrics {
    /// Computes metrics from per-process results.
    ///
    /// Returns `None` for an empty slice; a mean over no processes is
    /// undefined.
    pub fn calculate(results: &[ProcessResult]) -> Option<Self> {
        if results.is_empty() {
            return None;
        }

        let n = results.len() as f64;
        // Sums of many large per-process times can exceed i64
        let mean = |f: fn(&ProcessResult) -> i64| {
            let total: i128 = results.iter().map(|r| i128::from(f(r))).sum();
            round2(total as f64 / n)
        };

        Some(Self {
            mean_turnaround_time: mean(|r| r.turnaround_time),
            mean_waiting_time: mean(|r| r.waiting_time),
            mean_response_time: mean(|r| r.response_time),
        })
    }
}

/// Rounds to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSpec;
    use crate::policy::{Fcfs, SchedulingPolicy};

    #[test]
    fn test_metrics_fcfs_scenario() {
        let processes = ProcessSpec::from_tuples(&[("P1", 0, 5), ("P2", 1, 3), ("P3", 2, 8)]);
        let outcome = Fcfs.simulate(&processes);
        let m = AggregateMetrics::calculate(&outcome.results).unwrap();

        // TAT: 5, 7, 14 → 26/3
        assert!((m.mean_turnaround_time - 8.67).abs() < 1e-10);
        // WT: 0, 4, 6 → 10/3
        assert!((m.mean_waiting_time - 3.33).abs() < 1e-10);
        // RT equals WT under FCFS
        assert!((m.mean_response_time - 3.33).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_exact_mean() {
        let spec = ProcessSpec::new("P1", 0, 2, 0);
        let results = vec![
            ProcessResult::from_run(&spec, 0, 2),
            ProcessResult::from_run(&spec, 1, 5),
        ];
        let m = AggregateMetrics::calculate(&results).unwrap();
        // TAT: 2, 5; WT: 0, 3; RT: 0, 1
        assert!((m.mean_turnaround_time - 3.5).abs() < 1e-10);
        assert!((m.mean_waiting_time - 1.5).abs() < 1e-10);
        assert!((m.mean_response_time - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_large_values_do_not_overflow() {
        let spec = ProcessSpec::new("P1", 0, 1, 0);
        let big = ProcessResult::from_run(&spec, 0, i64::MAX);
        let m = AggregateMetrics::calculate(&[big.clone(), big]).unwrap();
        assert!((m.mean_turnaround_time - i64::MAX as f64).abs() < 1e6);
    }

    #[test]
    fn test_metrics_empty() {
        assert!(AggregateMetrics::calculate(&[]).is_none());
    }

    #[test]
    fn test_round2() {
        assert!((round2(2.0 / 3.0) - 0.67).abs() < 1e-10);
        assert!((round2(1.004) - 1.0).abs() < 1e-10);
        assert!((round2(7.0) - 7.0).abs() < 1e-10);
    }
}
