//! Random process-set generation.
//!
//! Produces reproducible workloads for exercises and benchmarks: the same
//! seed always yields the same processes.

use rand::prelude::*;

use crate::models::Process;

/// Parameters of a random workload.
#[derive(Debug, Clone)]
pub struct WorkloadConfig {
    /// Number of processes.
    pub count: usize,
    /// Arrivals are drawn uniformly from `0..=max_arrival`.
    pub max_arrival: i64,
    /// Smallest burst time (clamped to at least 1).
    pub burst_min: i64,
    /// Largest burst time.
    pub burst_max: i64,
    /// Smallest priority value.
    pub priority_min: i32,
    /// Largest priority value.
    pub priority_max: i32,
    /// Random seed for reproducibility.
    pub seed: u64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            count: 5,
            max_arrival: 10,
            burst_min: 1,
            burst_max: 10,
            priority_min: 1,
            priority_max: 5,
            seed: 0,
        }
    }
}

impl WorkloadConfig {
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.burst_min = min;
        self.burst_max = max;
        self
    }

    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority_min = min;
        self.priority_max = max;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Generates `config.count` processes with ids `"1"`, `"2"`, ...
///
/// Inverted ranges collapse to their lower bound, and bursts are at least 1,
/// so the output always passes validation.
pub fn generate_workload(config: &WorkloadConfig) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let max_arrival = config.max_arrival.max(0);
    let burst_min = config.burst_min.max(1);
    let burst_max = config.burst_max.max(burst_min);
    let priority_max = config.priority_max.max(config.priority_min);

    (1..=config.count)
        .map(|i| {
            Process::new(i.to_string())
                .with_arrival(rng.random_range(0..=max_arrival))
                .with_burst(rng.random_range(burst_min..=burst_max))
                .with_priority(rng.random_range(config.priority_min..=priority_max))
        })
        .collect()
}
