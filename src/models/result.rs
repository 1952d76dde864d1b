//! Scheduling result model.
//!
//! The output contract consumed by a presentation layer: the timeline, one
//! completion record per input process, and the two averages.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Process, Timeline};
use crate::scheduler::ScheduleMetrics;

/// Per-process completion record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessCompletion {
    /// End of the process's last step (0 if it never ran).
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`, clamped to 0.
    pub waiting_time: i64,
}

/// Result of one scheduling run.
///
/// Computed fresh on every invocation; holds no reference to the input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingResult {
    /// Ordered execution timeline.
    pub execution_sequence: Timeline,
    /// Completion data keyed by process id.
    pub process_completion_data: HashMap<String, ProcessCompletion>,
    /// Mean turnaround time over all input processes.
    pub average_turnaround_time: f64,
    /// Mean waiting time over all input processes.
    pub average_waiting_time: f64,
}

impl SchedulingResult {
    /// An all-zero result (no processes).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Completion record for a process.
    pub fn completion(&self, process_id: &str) -> Option<&ProcessCompletion> {
        self.process_completion_data.get(process_id)
    }

    /// End of the last step.
    pub fn makespan(&self) -> i64 {
        self.execution_sequence.makespan()
    }

    /// Extended metrics (makespan, idle time, utilization) for this result.
    ///
    /// `processes` must be the set the result was computed from.
    pub fn metrics(&self, processes: &[Process]) -> ScheduleMetrics {
        ScheduleMetrics::calculate(processes, &self.execution_sequence)
    }
}
