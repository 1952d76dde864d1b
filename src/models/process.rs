//! Process model.
//!
//! A process is the unit of work competing for the single simulated CPU.
//! It becomes eligible at its arrival time and needs `burst_time` ticks of
//! CPU before it completes.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Processes are immutable input: schedulers copy what they need into their
/// own per-run state and never modify the caller's values.
///
/// # Time Representation
/// All times are integer ticks of a discrete simulation clock starting at 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    /// Unique process identifier (within one run).
    pub id: String,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU ticks required to complete.
    pub burst_time: i64,
    /// Static priority (lower = more important).
    ///
    /// Only consulted by the priority-based strategies.
    #[serde(default = "default_priority")]
    pub priority: i32,
}

fn default_priority() -> i32 {
    1
}

impl Process {
    /// Creates a process arriving at t=0 with burst 1 and priority 1.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            arrival_time: 0,
            burst_time: 1,
            priority: default_priority(),
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the burst time.
    pub fn with_burst(mut self, burst_time: i64) -> Self {
        self.burst_time = burst_time;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Earliest tick at which this process could possibly finish.
    #[inline]
    pub fn earliest_completion(&self) -> i64 {
        self.arrival_time + self.burst_time
    }
}
