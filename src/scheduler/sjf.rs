//! Shortest Job First (non-preemptive).
//!
//! At each decision point the eligible process with the smallest total
//! burst runs to completion. The same loop drives non-preemptive Priority
//! scheduling with a different [`SelectionRule`].

use crate::dispatching::rules::ShortestBurst;
use crate::dispatching::{select_best, JobPool, SelectionRule};
use crate::models::Timeline;

pub(crate) fn run(pool: &mut JobPool<'_>) -> Timeline {
    run_to_completion(pool, &ShortestBurst)
}

/// Repeatedly picks the best eligible job by `rule` and runs it to the end.
///
/// If nothing is eligible the clock jumps to the earliest pending arrival.
pub(crate) fn run_to_completion<R: SelectionRule>(pool: &mut JobPool<'_>, rule: &R) -> Timeline {
    let mut timeline = Timeline::new();
    let mut clock: i64 = 0;

    while !pool.is_drained() {
        let eligible = pool.eligible(clock);
        let Some(idx) = select_best(rule, pool, &eligible) else {
            match pool.earliest_pending_arrival() {
                Some(arrival) => {
                    clock = clock.max(arrival);
                    continue;
                }
                None => break,
            }
        };

        let job = pool.job(idx);
        let (id, remaining) = (job.id(), job.remaining());
        log::trace!("t={clock}: {} selects {id}", rule.name());
        let ran = pool.run(idx, remaining);
        timeline.push(id, clock, clock + ran);
        clock += ran;
    }

    timeline
}
