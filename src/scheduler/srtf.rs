//! Shortest Remaining Time First (preemptive SJF).
//!
//! # Algorithm
//!
//! Event-driven: the clock only advances to the next event, which is either
//! the running job's completion or the next arrival, whichever is sooner.
//! At each event the eligible job with the least remaining time is chosen.
//! A new step is opened only when the chosen job differs from the running
//! one, so a job that keeps the CPU across arrivals produces a single step.

use crate::dispatching::rules::ShortestRemaining;
use crate::dispatching::{select_best, JobPool};
use crate::models::Timeline;

/// The job holding the CPU and the tick its current step started.
#[derive(Debug, Clone, Copy)]
struct Running {
    idx: usize,
    since: i64,
}

pub(crate) fn run(pool: &mut JobPool<'_>) -> Timeline {
    let mut timeline = Timeline::new();
    let mut clock: i64 = 0;
    let mut running: Option<Running> = None;

    while !pool.is_drained() {
        let eligible = pool.eligible(clock);
        let Some(next) = select_best(&ShortestRemaining, pool, &eligible) else {
            if let Some(prev) = running.take() {
                timeline.push(pool.job(prev.idx).id(), prev.since, clock);
            }
            match pool.earliest_pending_arrival() {
                Some(arrival) => {
                    clock = clock.max(arrival);
                    continue;
                }
                None => break,
            }
        };

        if running.map(|r| r.idx) != Some(next) {
            if let Some(prev) = running.take() {
                log::trace!(
                    "t={clock}: {} preempts {}",
                    pool.job(next).id(),
                    pool.job(prev.idx).id()
                );
                timeline.push(pool.job(prev.idx).id(), prev.since, clock);
            }
            running = Some(Running {
                idx: next,
                since: clock,
            });
        }

        let mut event = clock + pool.job(next).remaining();
        if let Some(arrival) = pool.next_arrival_after(clock) {
            event = event.min(arrival);
        }

        pool.run(next, event - clock);
        clock = event;

        if pool.job(next).is_finished() {
            if let Some(done) = running.take() {
                timeline.push(pool.job(done.idx).id(), done.since, clock);
            }
        }
    }

    timeline
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExecutionStep, Process};

    fn srtf(processes: &[Process]) -> Timeline {
        run(&mut JobPool::new(processes))
    }

    #[test]
    fn test_srtf_preempts_longer_job() {
        let processes = vec![
            Process::new("1").with_arrival(0).with_burst(8),
            Process::new("2").with_arrival(1).with_burst(4),
        ];
        let t = srtf(&processes);
        assert_eq!(
            t.steps(),
            &[
                ExecutionStep::new("1", 0, 1),
                ExecutionStep::new("2", 1, 5),
                ExecutionStep::new("1", 5, 12),
            ]
        );
    }

    #[test]
    fn test_srtf_no_split_when_job_keeps_cpu() {
        // Arrivals at 1 and 2 do not beat the running job's remaining time.
        let processes = vec![
            Process::new("1").with_arrival(0).with_burst(3),
            Process::new("2").with_arrival(1).with_burst(5),
            Process::new("3").with_arrival(2).with_burst(6),
        ];
        let t = srtf(&processes);
        assert_eq!(
            t.steps(),
            &[
                ExecutionStep::new("1", 0, 3),
                ExecutionStep::new("2", 3, 8),
                ExecutionStep::new("3", 8, 14),
            ]
        );
    }

    #[test]
    fn test_srtf_textbook_example() {
        // Classic SRTF exercise: P1(0,8) P2(1,4) P3(2,9) P4(3,5)
        let processes = vec![
            Process::new("P1").with_arrival(0).with_burst(8),
            Process::new("P2").with_arrival(1).with_burst(4),
            Process::new("P3").with_arrival(2).with_burst(9),
            Process::new("P4").with_arrival(3).with_burst(5),
        ];
        let t = srtf(&processes);
        assert_eq!(
            t.steps(),
            &[
                ExecutionStep::new("P1", 0, 1),
                ExecutionStep::new("P2", 1, 5),
                ExecutionStep::new("P4", 5, 10),
                ExecutionStep::new("P1", 10, 17),
                ExecutionStep::new("P3", 17, 26),
            ]
        );
    }

    #[test]
    fn test_srtf_idle_gap() {
        let processes = vec![
            Process::new("1").with_arrival(0).with_burst(2),
            Process::new("2").with_arrival(5).with_burst(2),
        ];
        let t = srtf(&processes);
        assert_eq!(
            t.steps(),
            &[ExecutionStep::new("1", 0, 2), ExecutionStep::new("2", 5, 7)]
        );
    }

    #[test]
    fn test_srtf_tie_goes_to_earlier_job() {
        // At t=2 jobs 2 and 3 both need 1 tick; 2 comes first in input order.
        let processes = vec![
            Process::new("1").with_arrival(0).with_burst(4),
            Process::new("2").with_arrival(2).with_burst(1),
            Process::new("3").with_arrival(2).with_burst(1),
        ];
        let t = srtf(&processes);
        assert_eq!(
            t.steps(),
            &[
                ExecutionStep::new("1", 0, 2),
                ExecutionStep::new("2", 2, 3),
                ExecutionStep::new("3", 3, 4),
                ExecutionStep::new("1", 4, 6),
            ]
        );
        assert!(t.iter().all(|s| s.duration() > 0));
    }

    #[test]
    fn test_srtf_running_job_keeps_cpu_on_tie() {
        // At t=1 the arrival needs 3 ticks, exactly what job 1 has left.
        let processes = vec![
            Process::new("1").with_arrival(0).with_burst(4),
            Process::new("2").with_arrival(1).with_burst(3),
        ];
        let t = srtf(&processes);
        assert_eq!(
            t.steps(),
            &[ExecutionStep::new("1", 0, 4), ExecutionStep::new("2", 4, 7)]
        );
    }
}
