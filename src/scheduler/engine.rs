//! Scheduling entry point.
//!
//! # Algorithm
//!
//! 1. Return an all-zero result for an empty process set.
//! 2. Validate the configuration and the process set.
//! 3. Copy the processes into a job pool sorted by arrival (stable).
//! 4. Dispatch to the selected strategy, which produces a timeline.
//! 5. Derive completion data and averages from the timeline.

use crate::config::SchedulerConfig;
use crate::dispatching::JobPool;
use crate::error::ScheduleError;
use crate::models::{Process, SchedulingResult, Timeline};
use crate::validation::validate_processes;

use super::metrics::{averages, completion_data};
use super::{fifo, priority, priority_rr, round_robin, sjf, srtf, Algorithm};

/// CPU scheduling simulator.
///
/// Holds a [`SchedulerConfig`]; every call to [`CpuScheduler::schedule`] is
/// an independent, pure computation over its own copy of the input.
///
/// # Example
///
/// ```
/// use u_cpusched::{Algorithm, CpuScheduler, Process, SchedulerConfig};
///
/// let processes = vec![
///     Process::new("1").with_arrival(0).with_burst(5),
///     Process::new("2").with_arrival(0).with_burst(3),
/// ];
/// let scheduler = CpuScheduler::new(
///     SchedulerConfig::new(Algorithm::RoundRobin).with_quantum(2),
/// );
/// let result = scheduler.schedule(&processes).unwrap();
///
/// assert_eq!(result.execution_sequence.len(), 5);
/// assert_eq!(result.completion("2").unwrap().completion_time, 7);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuScheduler {
    config: SchedulerConfig,
}

impl CpuScheduler {
    /// Creates a scheduler with the given configuration.
    pub fn new(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Schedules `processes` and computes their metrics.
    ///
    /// # Errors
    /// - [`ScheduleError::InvalidQuantum`] if a quantum-based algorithm has a quantum < 1.
    /// - [`ScheduleError::InvalidInput`] if the process set fails validation.
    ///
    /// An empty process set always yields [`SchedulingResult::empty`].
    pub fn schedule(&self, processes: &[Process]) -> Result<SchedulingResult, ScheduleError> {
        if processes.is_empty() {
            return Ok(SchedulingResult::empty());
        }
        self.config.validate()?;
        validate_processes(processes)?;

        let algorithm = self.config.algorithm;
        log::debug!(
            "scheduling {} processes with {algorithm} (quantum {})",
            processes.len(),
            self.config.quantum
        );

        let timeline = self.timeline(processes);
        let process_completion_data = completion_data(processes, &timeline);
        let (average_turnaround_time, average_waiting_time) =
            averages(processes, &process_completion_data);

        log::debug!(
            "{algorithm}: {} steps, makespan {}, avg turnaround {average_turnaround_time:.2}, avg waiting {average_waiting_time:.2}",
            timeline.len(),
            timeline.makespan()
        );

        Ok(SchedulingResult {
            execution_sequence: timeline,
            process_completion_data,
            average_turnaround_time,
            average_waiting_time,
        })
    }

    /// Runs the selected strategy on a validated process set.
    fn timeline(&self, processes: &[Process]) -> Timeline {
        let mut pool = JobPool::new(processes);
        let quantum = self.config.quantum;
        match self.config.algorithm {
            Algorithm::Fifo => fifo::run(&mut pool),
            Algorithm::Sjf => sjf::run(&mut pool),
            Algorithm::Srtf => srtf::run(&mut pool),
            Algorithm::RoundRobin => round_robin::run(&mut pool, quantum),
            Algorithm::Priority => priority::run(&mut pool),
            Algorithm::PriorityRoundRobin => priority_rr::run(&mut pool, quantum),
        }
    }
}

/// Schedules `processes` with `algorithm` and `quantum`.
///
/// Shorthand for [`CpuScheduler::schedule`] with a one-off configuration.
pub fn schedule(
    algorithm: Algorithm,
    processes: &[Process],
    quantum: i64,
) -> Result<SchedulingResult, ScheduleError> {
    CpuScheduler::new(SchedulerConfig::new(algorithm).with_quantum(quantum)).schedule(processes)
}
