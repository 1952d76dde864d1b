//! CPU scheduling strategies and metrics.
//!
//! Six interchangeable strategies behind one entry point. Each strategy
//! consumes a job pool (a sorted copy of the input) and produces a
//! [`Timeline`](crate::models::Timeline); the metrics
//! calculator then derives completion data from that timeline.
//!
//! # Strategies
//!
//! | Algorithm | Preemptive | Selection |
//! |-----------|-----------|-----------|
//! | FIFO | no | arrival order |
//! | SJF | no | shortest burst |
//! | SRTF | yes, at arrivals | shortest remaining time |
//! | Round Robin | yes, every quantum | FIFO ready queue |
//! | Priority | no | lowest priority value |
//! | Priority+RR | yes, after a slice | priority groups, RR within a group |
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod algorithm;
mod engine;
mod fifo;
mod metrics;
mod priority;
mod priority_rr;
mod round_robin;
mod sjf;
mod srtf;

pub use algorithm::Algorithm;
pub use engine::{schedule, CpuScheduler};
pub use metrics::{completion_data, ScheduleMetrics};

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::models::Process;
    use proptest::prelude::*;

    fn process_set() -> impl Strategy<Value = Vec<Process>> {
        prop::collection::vec((0i64..20, 1i64..10, 0i32..4), 0..8).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (arrival, burst, priority))| {
                    Process::new((i + 1).to_string())
                        .with_arrival(arrival)
                        .with_burst(burst)
                        .with_priority(priority)
                })
                .collect()
        })
    }

    fn algorithm() -> impl Strategy<Value = Algorithm> {
        prop::sample::select(Algorithm::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn timeline_is_ordered_and_covers_bursts(
            processes in process_set(),
            algorithm in algorithm(),
            quantum in 1i64..5,
        ) {
            let result = schedule(algorithm, &processes, quantum).unwrap();
            let steps = result.execution_sequence.steps();

            for step in steps {
                prop_assert!(step.end_time > step.start_time);
            }
            for pair in steps.windows(2) {
                prop_assert!(pair[0].end_time <= pair[1].start_time);
            }
            for p in &processes {
                let ran: i64 = result
                    .execution_sequence
                    .steps_for_process(&p.id)
                    .iter()
                    .map(|s| s.duration())
                    .sum();
                prop_assert_eq!(ran, p.burst_time);
                prop_assert!(steps
                    .iter()
                    .filter(|s| s.process_id == p.id)
                    .all(|s| s.start_time >= p.arrival_time));
            }
        }

        #[test]
        fn completion_data_is_consistent(
            processes in process_set(),
            algorithm in algorithm(),
            quantum in 1i64..5,
        ) {
            let result = schedule(algorithm, &processes, quantum).unwrap();
            prop_assert_eq!(result.process_completion_data.len(), processes.len());

            let mut turnaround = 0i64;
            let mut waiting = 0i64;
            for p in &processes {
                let c = result.completion(&p.id).unwrap();
                prop_assert!(c.completion_time >= p.earliest_completion());
                prop_assert!(c.waiting_time >= 0);
                prop_assert_eq!(c.turnaround_time, c.waiting_time + p.burst_time);
                turnaround += c.turnaround_time;
                waiting += c.waiting_time;
            }

            if !processes.is_empty() {
                let n = processes.len() as f64;
                prop_assert!((result.average_turnaround_time - turnaround as f64 / n).abs() < 1e-9);
                prop_assert!((result.average_waiting_time - waiting as f64 / n).abs() < 1e-9);
            }
        }

        #[test]
        fn cpu_never_idles_with_work_ready(
            processes in process_set(),
            algorithm in algorithm(),
            quantum in 1i64..5,
        ) {
            let result = schedule(algorithm, &processes, quantum).unwrap();
            for (start, _) in result.execution_sequence.idle_periods() {
                // Nothing that was still unfinished at `start` had arrived.
                for p in &processes {
                    let done = result.completion(&p.id).unwrap().completion_time;
                    prop_assert!(p.arrival_time > start || done <= start);
                }
            }
        }
    }
}
