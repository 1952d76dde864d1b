//! Built-in selection rules.
//!
//! | Rule | Key | Used by |
//! |------|-----|---------|
//! | [`ShortestBurst`] | total burst time | SJF |
//! | [`ShortestRemaining`] | remaining time | SRTF |
//! | [`HighestPriority`] | priority value | Priority |
//!
//! All rules return lower keys for jobs that should run first.

use super::{Job, RuleKey, SelectionRule};

/// Shortest Job First.
///
/// Ranks by total burst time, ignoring progress.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn key(&self, job: &Job<'_>) -> RuleKey {
        job.burst_time()
    }
}

/// Shortest Remaining Time First.
///
/// Ranks by remaining CPU demand, so a partly run job competes with what
/// it still needs.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn key(&self, job: &Job<'_>) -> RuleKey {
        job.remaining()
    }
}

/// Static priority (lower value = more important).
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, job: &Job<'_>) -> RuleKey {
        RuleKey::from(job.priority())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::JobPool;
    use crate::models::Process;

    #[test]
    fn test_rule_keys() {
        let processes = vec![Process::new("1").with_burst(6).with_priority(-2)];
        let mut pool = JobPool::new(&processes);
        pool.run(0, 2);
        let job = pool.job(0);

        assert_eq!(ShortestBurst.key(job), 6);
        assert_eq!(ShortestRemaining.key(job), 4);
        assert_eq!(HighestPriority.key(job), -2);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(ShortestBurst.name(), "SJF");
        assert_eq!(ShortestRemaining.name(), "SRTF");
        assert_eq!(HighestPriority.name(), "PRIORITY");
    }
}
