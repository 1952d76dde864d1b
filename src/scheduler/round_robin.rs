//! Round Robin scheduling.
//!
//! # Algorithm
//!
//! A FIFO ready queue of jobs. The head runs for `min(quantum, remaining)`,
//! then every job that arrived by the end of that slice is enqueued, and
//! only then is the preempted job (if unfinished) pushed to the back. A job
//! arriving exactly when a slice ends is therefore served before the job
//! that was just preempted.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;

use crate::dispatching::JobPool;
use crate::models::Timeline;

/// Moves every job arriving by `clock` from the arrival cursor into `queue`.
fn admit(pool: &JobPool<'_>, next_arrival: &mut usize, clock: i64, queue: &mut VecDeque<usize>) {
    while *next_arrival < pool.len() && pool.job(*next_arrival).arrival_time() <= clock {
        queue.push_back(*next_arrival);
        *next_arrival += 1;
    }
}

pub(crate) fn run(pool: &mut JobPool<'_>, quantum: i64) -> Timeline {
    let mut timeline = Timeline::new();
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(pool.len());
    let mut next_arrival = 0;
    let mut clock: i64 = 0;

    while !queue.is_empty() || next_arrival < pool.len() {
        let Some(idx) = queue.pop_front() else {
            clock = clock.max(pool.job(next_arrival).arrival_time());
            admit(pool, &mut next_arrival, clock, &mut queue);
            continue;
        };

        let id = pool.job(idx).id();
        let ran = pool.run(idx, quantum);
        timeline.push(id, clock, clock + ran);
        clock += ran;

        admit(pool, &mut next_arrival, clock, &mut queue);
        if !pool.job(idx).is_finished() {
            queue.push_back(idx);
        }
    }

    timeline
}
