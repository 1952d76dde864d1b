//! Execution timeline model.
//!
//! A timeline is the ordered list of CPU slices a scheduling strategy
//! produced. Idle gaps are implicit: they are the absence of a step, never a
//! materialized "idle" entry.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3 (Gantt charts)

use serde::{Deserialize, Serialize};

/// One contiguous, uninterrupted slice of CPU time owned by a single process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionStep {
    /// Process occupying the CPU.
    pub process_id: String,
    /// First tick of the slice.
    pub start_time: i64,
    /// Tick at which the slice ends (exclusive).
    pub end_time: i64,
}

impl ExecutionStep {
    /// Creates a new step.
    pub fn new(process_id: impl Into<String>, start_time: i64, end_time: i64) -> Self {
        Self {
            process_id: process_id.into(),
            start_time,
            end_time,
        }
    }

    /// Length of the slice in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }
}

/// An ordered, non-overlapping sequence of execution steps.
///
/// Steps are ordered by `start_time`; each step starts at or after the end
/// of the previous one. Several steps may belong to the same process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    steps: Vec<ExecutionStep>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step covering `[start_time, end_time)`.
    ///
    /// Zero-length slices are dropped.
    pub fn push(&mut self, process_id: impl Into<String>, start_time: i64, end_time: i64) {
        if end_time <= start_time {
            return;
        }
        debug_assert!(
            self.steps.last().map_or(true, |s| s.end_time <= start_time),
            "timeline steps must not overlap"
        );
        self.steps.push(ExecutionStep::new(process_id, start_time, end_time));
    }

    /// All steps in execution order.
    pub fn steps(&self) -> &[ExecutionStep] {
        &self.steps
    }

    /// Iterates over the steps in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, ExecutionStep> {
        self.steps.iter()
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether no step was emitted.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// End of the last step (0 for an empty timeline).
    pub fn makespan(&self) -> i64 {
        self.steps.last().map_or(0, |s| s.end_time)
    }

    /// Returns all steps belonging to a process.
    pub fn steps_for_process(&self, process_id: &str) -> Vec<&ExecutionStep> {
        self.steps
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Completion time of a process (latest end of its steps).
    pub fn completion_time(&self, process_id: &str) -> Option<i64> {
        self.steps
            .iter()
            .filter(|s| s.process_id == process_id)
            .map(|s| s.end_time)
            .max()
    }

    /// Total ticks the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.steps.iter().map(ExecutionStep::duration).sum()
    }

    /// Idle intervals `(start, end)` between t=0 and the makespan.
    pub fn idle_periods(&self) -> Vec<(i64, i64)> {
        let mut idle = Vec::new();
        let mut cursor = 0;
        for step in &self.steps {
            if step.start_time > cursor {
                idle.push((cursor, step.start_time));
            }
            cursor = step.end_time;
        }
        idle
    }

    /// Busy time divided by makespan.
    ///
    /// Returns `None` for an empty timeline.
    pub fn cpu_utilization(&self) -> Option<f64> {
        let makespan = self.makespan();
        if makespan <= 0 {
            return None;
        }
        Some(self.busy_time() as f64 / makespan as f64)
    }

    /// Number of adjacent step pairs that hand the CPU to a different process.
    pub fn context_switches(&self) -> usize {
        self.steps
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a ExecutionStep;
    type IntoIter = std::slice::Iter<'a, ExecutionStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.push("1", 0, 2);
        t.push("2", 2, 4);
        t.push("1", 6, 9);
        t
    }

    #[test]
    fn test_timeline_makespan() {
        assert_eq!(sample_timeline().makespan(), 9);
        assert_eq!(Timeline::new().makespan(), 0);
    }

    #[test]
    fn test_push_drops_empty_slices() {
        let mut t = Timeline::new();
        t.push("1", 3, 3);
        assert!(t.is_empty());
    }

    #[test]
    fn test_step_duration() {
        let s = ExecutionStep::new("1", 4, 9);
        assert_eq!(s.duration(), 5);
    }

    #[test]
    fn test_steps_for_process() {
        let t = sample_timeline();
        assert_eq!(t.steps_for_process("1").len(), 2);
        assert_eq!(t.steps_for_process("2").len(), 1);
        assert!(t.steps_for_process("3").is_empty());
    }

    #[test]
    fn test_completion_time() {
        let t = sample_timeline();
        assert_eq!(t.completion_time("1"), Some(9));
        assert_eq!(t.completion_time("2"), Some(4));
        assert_eq!(t.completion_time("99"), None);
    }

    #[test]
    fn test_idle_and_utilization() {
        let t = sample_timeline();
        assert_eq!(t.busy_time(), 7);
        assert_eq!(t.idle_periods(), vec![(4, 6)]);
        // 7 busy over 9 ticks
        assert!((t.cpu_utilization().unwrap() - 7.0 / 9.0).abs() < 1e-10);
        assert!(Timeline::new().cpu_utilization().is_none());
    }

    #[test]
    fn test_leading_idle_gap() {
        let mut t = Timeline::new();
        t.push("1", 3, 5);
        assert_eq!(t.idle_periods(), vec![(0, 3)]);
    }

    #[test]
    fn test_context_switches() {
        let mut t = sample_timeline();
        assert_eq!(t.context_switches(), 2);
        t.push("1", 9, 10);
        assert_eq!(t.context_switches(), 2);
    }

    #[test]
    fn test_serializes_as_array() {
        let json = serde_json::to_string(&sample_timeline()).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains(r#""processId":"1""#));
        assert!(json.contains(r#""startTime":0"#));
        assert!(json.contains(r#""endTime":2"#));
    }
}
