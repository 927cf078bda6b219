//! Random workload generation.
//!
//! Produces reproducible process sets for demos, benchmarks, and
//! property tests. Every generated set passes validation: arrivals are
//! non-negative, bursts are at least 1, and IDs are unique (`P1..Pn`).

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::models::ProcessInput;

/// Configurable generator of random process sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadGenerator {
    count: usize,
    max_arrival: i64,
    min_burst: i64,
    max_burst: i64,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes, arriving in `[0, 10]`
    /// with bursts in `[1, 10]`.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
        }
    }

    /// Sets the latest possible arrival time (clamped to >= 0).
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the inclusive burst range (clamped so that 1 <= min <= max).
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst.max(1);
        self.max_burst = max_burst.max(self.min_burst);
        self
    }

    /// Number of processes generated per call.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Generates a process set using the given RNG.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<ProcessInput> {
        (1..=self.count)
            .map(|n| {
                ProcessInput::new(
                    format!("P{n}"),
                    rng.random_range(0..=self.max_arrival),
                    rng.random_range(self.min_burst..=self.max_burst),
                )
            })
            .collect()
    }

    /// Generates a process set from a fixed seed.
    pub fn generate_seeded(&self, seed: u64) -> Vec<ProcessInput> {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.generate(&mut rng)
    }
}
