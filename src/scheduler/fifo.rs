//! First-In, First-Out scheduling.
//!
//! Runs every process to completion in arrival order. When the next
//! process has not arrived yet the CPU idles until it does.

use crate::dispatching::JobPool;
use crate::models::Timeline;

pub(crate) fn run(pool: &mut JobPool<'_>) -> Timeline {
    let mut timeline = Timeline::new();
    let mut clock: i64 = 0;

    for idx in 0..pool.len() {
        let job = pool.job(idx);
        let (id, burst) = (job.id(), job.burst_time());
        clock = clock.max(job.arrival_time());

        let ran = pool.run(idx, burst);
        timeline.push(id, clock, clock + ran);
        clock += ran;
    }

    timeline
}
