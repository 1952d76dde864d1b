//! Per-run simulation state shared by the strategies.

use crate::models::Process;

/// Scheduler-side copy of a process, tracking its remaining CPU demand.
#[derive(Debug, Clone)]
pub struct Job<'a> {
    id: &'a str,
    arrival_time: i64,
    burst_time: i64,
    priority: i32,
    remaining: i64,
}

impl<'a> Job<'a> {
    fn from_process(process: &'a Process) -> Self {
        Self {
            id: &process.id,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            remaining: process.burst_time,
        }
    }

    pub fn id(&self) -> &'a str {
        self.id
    }

    pub fn arrival_time(&self) -> i64 {
        self.arrival_time
    }

    pub fn burst_time(&self) -> i64 {
        self.burst_time
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    pub fn is_finished(&self) -> bool {
        self.remaining <= 0
    }
}

/// Arena of jobs for one scheduling run, in arrival order.
///
/// Jobs are sorted once by arrival time (stable, so equal arrivals keep
/// their input order) and never reordered afterwards. Finished jobs stay in
/// place and are skipped, which keeps every eligible list in
/// (arrival, input-order) order for the whole run.
#[derive(Debug, Clone)]
pub struct JobPool<'a> {
    jobs: Vec<Job<'a>>,
    unfinished: usize,
}

impl<'a> JobPool<'a> {
    /// Copies `processes` into a new pool sorted by arrival time.
    pub fn new(processes: &'a [Process]) -> Self {
        let mut jobs: Vec<Job<'a>> = processes.iter().map(Job::from_process).collect();
        jobs.sort_by_key(|j| j.arrival_time);
        let unfinished = jobs.iter().filter(|j| !j.is_finished()).count();
        Self { jobs, unfinished }
    }

    /// Number of jobs, finished or not.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Job at arena index `idx`.
    pub fn job(&self, idx: usize) -> &Job<'a> {
        &self.jobs[idx]
    }

    /// All jobs in arrival order.
    pub fn jobs(&self) -> &[Job<'a>] {
        &self.jobs
    }

    /// Whether every job has finished.
    pub fn is_drained(&self) -> bool {
        self.unfinished == 0
    }

    /// Indices of unfinished jobs with `arrival_time <= clock`, in arrival order.
    pub fn eligible(&self, clock: i64) -> Vec<usize> {
        self.jobs
            .iter()
            .enumerate()
            .filter(|(_, j)| !j.is_finished() && j.arrival_time <= clock)
            .map(|(i, _)| i)
            .collect()
    }

    /// Earliest arrival among unfinished jobs.
    pub fn earliest_pending_arrival(&self) -> Option<i64> {
        self.jobs
            .iter()
            .filter(|j| !j.is_finished())
            .map(|j| j.arrival_time)
            .min()
    }

    /// Earliest arrival strictly after `clock` among unfinished jobs.
    pub fn next_arrival_after(&self, clock: i64) -> Option<i64> {
        self.jobs
            .iter()
            .filter(|j| !j.is_finished() && j.arrival_time > clock)
            .map(|j| j.arrival_time)
            .min()
    }

    /// Runs job `idx` for up to `ticks`, returning the ticks actually consumed.
    pub fn run(&mut self, idx: usize, ticks: i64) -> i64 {
        let job = &mut self.jobs[idx];
        let ran = ticks.min(job.remaining).max(0);
        let was_finished = job.is_finished();
        job.remaining -= ran;
        if !was_finished && job.is_finished() {
            self.unfinished -= 1;
        }
        ran
    }
}
