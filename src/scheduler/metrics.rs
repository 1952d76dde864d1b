//! Scheduling performance metrics.
//!
//! Derives per-process completion data and aggregate indicators from a
//! timeline and the input processes.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion | Latest end of the process's steps (0 if it never ran) |
//! | Turnaround | completion - arrival |
//! | Waiting | max(0, turnaround - burst) |
//! | Avg Turnaround / Waiting | Unweighted mean over all input processes |
//! | Makespan | End of the last step |
//! | Idle Time | Ticks in [0, makespan) with no step |
//! | CPU Utilization | busy / makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use std::collections::HashMap;

use crate::models::{Process, ProcessCompletion, Timeline};

/// Computes completion, turnaround and waiting time for every process.
///
/// Steps referencing ids that are not in `processes` are ignored.
pub fn completion_data(
    processes: &[Process],
    timeline: &Timeline,
) -> HashMap<String, ProcessCompletion> {
    let mut completion: HashMap<&str, i64> =
        processes.iter().map(|p| (p.id.as_str(), 0)).collect();

    for step in timeline {
        if let Some(end) = completion.get_mut(step.process_id.as_str()) {
            *end = (*end).max(step.end_time);
        }
    }

    processes
        .iter()
        .map(|p| {
            let completion_time = completion.get(p.id.as_str()).copied().unwrap_or(0);
            let turnaround_time = completion_time - p.arrival_time;
            let waiting_time = (turnaround_time - p.burst_time).max(0);
            (
                p.id.clone(),
                ProcessCompletion {
                    completion_time,
                    turnaround_time,
                    waiting_time,
                },
            )
        })
        .collect()
}

/// Aggregate performance indicators of one run.
#[derive(Debug, Clone)]
pub struct ScheduleMetrics {
    /// Mean turnaround time over all input processes.
    pub average_turnaround_time: f64,
    /// Mean waiting time over all input processes.
    pub average_waiting_time: f64,
    /// End of the last step.
    pub makespan: i64,
    /// Idle ticks between t=0 and the makespan.
    pub idle_time: i64,
    /// Fraction of [0, makespan) the CPU was busy (0.0 for an empty run).
    pub cpu_utilization: f64,
}

impl ScheduleMetrics {
    /// Computes metrics from the input processes and their timeline.
    pub fn calculate(processes: &[Process], timeline: &Timeline) -> Self {
        let completions = completion_data(processes, timeline);
        Self::from_completions(processes, timeline, &completions)
    }

    /// Computes metrics when completion data is already available.
    pub fn from_completions(
        processes: &[Process],
        timeline: &Timeline,
        completions: &HashMap<String, ProcessCompletion>,
    ) -> Self {
        let (average_turnaround_time, average_waiting_time) = averages(processes, completions);
        let makespan = timeline.makespan();

        Self {
            average_turnaround_time,
            average_waiting_time,
            makespan,
            idle_time: makespan - timeline.busy_time(),
            cpu_utilization: timeline.cpu_utilization().unwrap_or(0.0),
        }
    }
}

/// Mean turnaround and waiting time over `processes` (0 for none).
pub(crate) fn averages(
    processes: &[Process],
    completions: &HashMap<String, ProcessCompletion>,
) -> (f64, f64) {
    if processes.is_empty() {
        return (0.0, 0.0);
    }

    let mut total_turnaround = 0.0;
    let mut total_waiting = 0.0;
    for p in processes {
        if let Some(c) = completions.get(&p.id) {
            total_turnaround += c.turnaround_time as f64;
            total_waiting += c.waiting_time as f64;
        }
    }

    let n = processes.len() as f64;
    (total_turnaround / n, total_waiting / n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_processes() -> Vec<Process> {
        vec![
            Process::new("1").with_arrival(0).with_burst(5),
            Process::new("2").with_arrival(1).with_burst(3),
        ]
    }

    fn fifo_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.push("1", 0, 5);
        t.push("2", 5, 8);
        t
    }

    #[test]
    fn test_completion_basic() {
        let data = completion_data(&two_processes(), &fifo_timeline());
        assert_eq!(
            data["2"],
            ProcessCompletion {
                completion_time: 8,
                turnaround_time: 7,
                waiting_time: 4,
            }
        );
        assert_eq!(data["1"].waiting_time, 0);
    }

    #[test]
    fn test_completion_uses_last_step() {
        let processes = vec![Process::new("1").with_arrival(0).with_burst(3)];
        let mut t = Timeline::new();
        t.push("1", 0, 1);
        t.push("1", 4, 6);
        let data = completion_data(&processes, &t);
        assert_eq!(data["1"].completion_time, 6);
        assert_eq!(data["1"].waiting_time, 3);
    }

    #[test]
    fn test_unknown_steps_ignored() {
        let mut t = fifo_timeline();
        t.push("ghost", 8, 20);
        let data = completion_data(&two_processes(), &t);
        assert_eq!(data.len(), 2);
        assert!(!data.contains_key("ghost"));
    }

    #[test]
    fn test_never_ran_process() {
        let processes = vec![Process::new("1").with_arrival(2).with_burst(3)];
        let data = completion_data(&processes, &Timeline::new());
        assert_eq!(data["1"].completion_time, 0);
        assert_eq!(data["1"].turnaround_time, -2);
        // waiting clamps at 0
        assert_eq!(data["1"].waiting_time, 0);
    }

    #[test]
    fn test_metrics_averages() {
        let m = ScheduleMetrics::calculate(&two_processes(), &fifo_timeline());
        // turnaround (5 + 7) / 2, waiting (0 + 4) / 2
        assert!((m.average_turnaround_time - 6.0).abs() < 1e-10);
        assert!((m.average_waiting_time - 2.0).abs() < 1e-10);
        assert_eq!(m.makespan, 8);
        assert_eq!(m.idle_time, 0);
        assert!((m.cpu_utilization - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_idle() {
        let processes = vec![Process::new("1").with_arrival(2).with_burst(2)];
        let mut t = Timeline::new();
        t.push("1", 2, 4);
        let m = ScheduleMetrics::calculate(&processes, &t);
        assert_eq!(m.idle_time, 2);
        assert!((m.cpu_utilization - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_empty() {
        let m = ScheduleMetrics::calculate(&[], &Timeline::new());
        assert_eq!(m.makespan, 0);
        assert_eq!(m.idle_time, 0);
        assert!((m.average_turnaround_time - 0.0).abs() < 1e-10);
        assert!((m.average_waiting_time - 0.0).abs() < 1e-10);
        assert!((m.cpu_utilization - 0.0).abs() < 1e-10);
    }
}
