//! Scheduler configuration.

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::scheduler::Algorithm;

/// Time quantum used when none is given.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Configuration for a scheduling run.
///
/// # Examples
///
/// ```
/// use u_cpusched::{Algorithm, SchedulerConfig};
///
/// let config = SchedulerConfig::default()
///     .with_algorithm(Algorithm::RoundRobin)
///     .with_quantum(4);
/// assert!(config.validate().is_ok());
///
/// let partial: SchedulerConfig = serde_json::from_str(r#"{"algorithm":"SRTF"}"#).unwrap();
/// assert_eq!(partial.quantum, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Scheduling discipline.
    pub algorithm: Algorithm,

    /// Maximum contiguous slice for quantum-based disciplines.
    ///
    /// Ignored by FIFO, SJF, SRTF and Priority.
    pub quantum: i64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            quantum: DEFAULT_QUANTUM,
        }
    }
}

impl SchedulerConfig {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Validates the configuration.
    ///
    /// A quantum < 1 is rejected only when the algorithm consults it.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.algorithm.uses_quantum() && self.quantum < 1 {
            return Err(ScheduleError::InvalidQuantum(self.quantum));
        }
        Ok(())
    }
}
