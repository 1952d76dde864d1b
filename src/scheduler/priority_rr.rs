//! Priority scheduling with Round Robin inside each priority level.
//!
//! # Algorithm
//!
//! Written as an explicit state machine:
//!
//! | Phase | Action | Next |
//! |-------|--------|------|
//! | `SelectGroup` | Pop the next priority group of the current snapshot, or take a new snapshot of the eligible jobs grouped by priority (jumping to the next arrival if none are eligible) | `RunSlice` / `SelectGroup` |
//! | `RunSlice` | Run the head of the group's queue for `min(quantum, remaining)` | `CheckPreempt` / `GroupDone` |
//! | `CheckPreempt` | If a job outside the snapshot has arrived with a strictly lower priority value, drop the rest of the snapshot; otherwise requeue the job if unfinished | `SelectGroup` / `RunSlice` |
//! | `GroupDone` | The group's queue is empty | `SelectGroup` |
//!
//! Preemption is only checked after a whole slice; a slice is never cut
//! short. Jobs arriving with an equal or worse priority wait for the next
//! snapshot.

use std::collections::{BTreeMap, VecDeque};

use crate::dispatching::JobPool;
use crate::models::Timeline;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    SelectGroup,
    RunSlice,
    CheckPreempt { idx: usize },
    GroupDone,
}

/// Mutable state of one Priority+RR run.
struct PriorityRoundRobin<'p, 'a> {
    pool: &'p mut JobPool<'a>,
    quantum: i64,
    clock: i64,
    timeline: Timeline,
    /// Jobs that were part of the current eligibility snapshot.
    in_snapshot: Vec<bool>,
    /// Remaining groups of the snapshot, most important first.
    groups: VecDeque<(i32, VecDeque<usize>)>,
    /// Priority and ready queue of the group being served.
    priority: i32,
    queue: VecDeque<usize>,
}

impl<'p, 'a> PriorityRoundRobin<'p, 'a> {
    fn new(pool: &'p mut JobPool<'a>, quantum: i64) -> Self {
        let len = pool.len();
        Self {
            pool,
            quantum,
            clock: 0,
            timeline: Timeline::new(),
            in_snapshot: vec![false; len],
            groups: VecDeque::new(),
            priority: 0,
            queue: VecDeque::new(),
        }
    }

    fn run(mut self) -> Timeline {
        let mut phase = Phase::SelectGroup;
        loop {
            phase = match phase {
                Phase::SelectGroup => match self.groups.pop_front() {
                    Some((priority, members)) => {
                        self.priority = priority;
                        self.queue = members;
                        Phase::RunSlice
                    }
                    None => {
                        if !self.take_snapshot() {
                            break;
                        }
                        Phase::SelectGroup
                    }
                },
                Phase::RunSlice => match self.queue.pop_front() {
                    Some(idx) => {
                        self.run_slice(idx);
                        Phase::CheckPreempt { idx }
                    }
                    None => Phase::GroupDone,
                },
                Phase::CheckPreempt { idx } => {
                    let preempted = self.higher_priority_arrived();
                    if !self.pool.job(idx).is_finished() {
                        self.queue.push_back(idx);
                    }
                    if preempted {
                        log::trace!(
                            "t={}: higher-priority arrival interrupts priority {} group",
                            self.clock,
                            self.priority
                        );
                        self.queue.clear();
                        self.groups.clear();
                        Phase::SelectGroup
                    } else {
                        Phase::RunSlice
                    }
                }
                Phase::GroupDone => Phase::SelectGroup,
            };
        }
        self.timeline
    }

    /// Groups the currently eligible jobs by priority.
    ///
    /// Returns `false` once every job has finished.
    fn take_snapshot(&mut self) -> bool {
        if self.pool.is_drained() {
            return false;
        }

        let mut eligible = self.pool.eligible(self.clock);
        if eligible.is_empty() {
            let Some(arrival) = self.pool.earliest_pending_arrival() else {
                return false;
            };
            self.clock = self.clock.max(arrival);
            eligible = self.pool.eligible(self.clock);
        }

        self.in_snapshot.iter_mut().for_each(|seen| *seen = false);
        let mut by_priority: BTreeMap<i32, VecDeque<usize>> = BTreeMap::new();
        for idx in eligible {
            self.in_snapshot[idx] = true;
            by_priority
                .entry(self.pool.job(idx).priority())
                .or_default()
                .push_back(idx);
        }
        self.groups = by_priority.into_iter().collect();
        true
    }

    fn run_slice(&mut self, idx: usize) {
        let id = self.pool.job(idx).id();
        let ran = self.pool.run(idx, self.quantum);
        self.timeline.push(id, self.clock, self.clock + ran);
        self.clock += ran;
    }

    /// Whether a job outside the snapshot has arrived with a better priority
    /// than the group being served.
    fn higher_priority_arrived(&self) -> bool {
        self.pool.jobs().iter().enumerate().any(|(idx, job)| {
            !self.in_snapshot[idx]
                && !job.is_finished()
                && job.arrival_time() <= self.clock
                && job.priority() < self.priority
        })
    }
}

pub(crate) fn run(pool: &mut JobPool<'_>, quantum: i64) -> Timeline {
    PriorityRoundRobin::new(pool, quantum).run()
}
