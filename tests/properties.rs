//! Property tests over random process sets.

use proptest::prelude::*;

use u_cpu_schedule::models::{total_burst_time, ProcessSpec, SimulationOutcome};
use u_cpu_schedule::policy::{Fcfs, RoundRobin, SchedulingPolicy};
use u_cpu_schedule::runner::{PolicyRunner, RunnerConfig};

fn process_set() -> impl Strategy<Value = Vec<ProcessSpec>> {
    prop::collection::vec((0i64..30, 1i64..12), 1..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(idx, (at, bt))| ProcessSpec::new(format!("P{}", idx + 1), at, bt, idx))
            .collect()
    })
}

fn outcomes(processes: &[ProcessSpec], quantum: i64) -> Vec<SimulationOutcome> {
    vec![
        Fcfs.simulate(processes),
        RoundRobin::new(quantum).unwrap().simulate(processes),
    ]
}

proptest! {
    #[test]
    fn gantt_tiles_elapsed_time(processes in process_set(), quantum in 1i64..6) {
        for outcome in outcomes(&processes, quantum) {
            prop_assert!(outcome.gantt.is_contiguous());
            prop_assert_eq!(outcome.total_elapsed_time, outcome.gantt.total_elapsed_time());
            prop_assert_eq!(
                outcome.gantt.busy_time() + outcome.gantt.idle_time(),
                outcome.total_elapsed_time
            );
        }
    }

    #[test]
    fn cpu_time_is_conserved(processes in process_set(), quantum in 1i64..6) {
        let total_burst = total_burst_time(&processes);
        for outcome in outcomes(&processes, quantum) {
            prop_assert_eq!(outcome.gantt.busy_time(), total_burst);
            for p in &processes {
                let ran: i64 = outcome.gantt.slices_for(&p.id).iter().map(|s| s.duration()).sum();
                prop_assert_eq!(ran, p.burst_time);
            }
        }
    }

    #[test]
    fn metric_identities_hold(processes in process_set(), quantum in 1i64..6) {
        for outcome in outcomes(&processes, quantum) {
            prop_assert_eq!(outcome.results.len(), processes.len());
            for (idx, r) in outcome.results.iter().enumerate() {
                prop_assert_eq!(r.original_index, idx);
                prop_assert_eq!(r.turnaround_time, r.completion_time - r.arrival_time);
                prop_assert_eq!(r.waiting_time, r.turnaround_time - r.burst_time);
                prop_assert!(r.turnaround_time >= r.burst_time);
                prop_assert!(r.waiting_time >= 0);
                prop_assert!(r.response_time >= 0);
                prop_assert!(r.response_time <= r.waiting_time);
            }
        }
    }

    #[test]
    fn idle_only_when_nothing_is_ready(processes in process_set(), quantum in 1i64..6) {
        for outcome in outcomes(&processes, quantum) {
            for slice in outcome.gantt.slices.iter().filter(|s| s.is_idle()) {
                // The gap ends at an arrival
                prop_assert!(processes.iter().any(|p| p.arrival_time == slice.end_time));
                // Everyone who arrived before the gap ended had already finished
                for r in outcome.results.iter().filter(|r| r.arrival_time < slice.end_time) {
                    prop_assert!(r.completion_time <= slice.start_time);
                }
            }
        }
    }

    #[test]
    fn fcfs_ignores_submission_order(processes in process_set()) {
        // Same records (indices included), listed in a different order
        let reversed: Vec<ProcessSpec> = processes.iter().rev().cloned().collect();

        let a = Fcfs.simulate(&processes);
        let b = Fcfs.simulate(&reversed);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn round_robin_respects_fairness_bound(processes in process_set(), quantum in 1i64..6) {
        let n = processes.len() as i64;
        let outcome = RoundRobin::new(quantum).unwrap().simulate(&processes);
        for r in &outcome.results {
            let dispatches = (r.burst_time + quantum - 1) / quantum;
            prop_assert!(r.response_time <= (n - 1) * quantum);
            prop_assert!(r.waiting_time <= dispatches * (n - 1) * quantum);
        }
    }

    #[test]
    fn large_quantum_degenerates_to_fcfs(processes in process_set()) {
        let max_burst = processes.iter().map(|p| p.burst_time).max().unwrap_or(1);
        let rr = RoundRobin::new(max_burst).unwrap().simulate(&processes);
        prop_assert_eq!(rr, Fcfs.simulate(&processes));
    }

    #[test]
    fn parallel_runner_matches_sequential(processes in process_set(), quantum in 1i64..6) {
        let config = RunnerConfig::standard(quantum).unwrap();
        let sequential = PolicyRunner::new(config.clone()).run(&processes).unwrap();
        let parallel = PolicyRunner::new(config.with_parallel(true)).run(&processes).unwrap();
        prop_assert_eq!(sequential, parallel);
    }
}
