//! Static priority scheduling (non-preemptive).
//!
//! Lower priority value = more important. Ties go to the earliest
//! eligible process.

use super::sjf::run_to_completion;
use crate::dispatching::rules::HighestPriority;
use crate::dispatching::JobPool;
use crate::models::Timeline;

pub(crate) fn run(pool: &mut JobPool<'_>) -> Timeline {
    run_to_completion(pool, &HighestPriority)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExecutionStep, Process};

    fn priority(processes: &[Process]) -> Timeline {
        run(&mut JobPool::new(processes))
    }

    #[test]
    fn test_priority_order() {
        let processes = vec![
            Process::new("1").with_arrival(0).with_burst(3).with_priority(3),
            Process::new("2").with_arrival(1).with_burst(2).with_priority(1),
            Process::new("3").with_arrival(1).with_burst(1).with_priority(2),
        ];
        let t = priority(&processes);
        assert_eq!(
            t.steps(),
            &[
                ExecutionStep::new("1", 0, 3),
                ExecutionStep::new("2", 3, 5),
                ExecutionStep::new("3", 5, 6),
            ]
        );
    }

    #[test]
    fn test_priority_does_not_preempt() {
        let processes = vec![
            Process::new("low").with_arrival(0).with_burst(5).with_priority(9),
            Process::new("high").with_arrival(1).with_burst(1).with_priority(0),
        ];
        let t = priority(&processes);
        assert_eq!(t.steps()[0], ExecutionStep::new("low", 0, 5));
        assert_eq!(t.steps()[1], ExecutionStep::new("high", 5, 6));
    }

    #[test]
    fn test_priority_single_process() {
        let processes = vec![Process::new("1").with_arrival(2).with_burst(3)];
        let t = priority(&processes);
        assert_eq!(t.steps(), &[ExecutionStep::new("1", 2, 5)]);
    }
}
