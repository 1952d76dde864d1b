//! Selection rules for the CPU dispatcher.
//!
//! Non-preemptive SJF, Priority and preemptive SRTF all share one decision:
//! "among the eligible jobs, which one runs next?". Each strategy supplies a
//! [`SelectionRule`] and the dispatcher picks the job with the smallest key.
//!
//! # Tie-breaking
//! Ties go to the first job encountered in the eligible list. The eligible
//! list is always in arrival order, with equal arrivals in input order (see
//! [`JobPool`]), so the outcome is deterministic for a given input.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod context;
mod engine;
pub mod rules;

pub use context::{Job, JobPool};
pub use engine::select_best;

use std::fmt::Debug;

/// Key returned by a selection rule.
///
/// Lower keys = selected first.
pub type RuleKey = i64;

/// A rule that ranks eligible jobs.
///
/// # Key Convention
/// **Lower key = runs first.**
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "SRTF").
    fn name(&self) -> &'static str;

    /// Ranks a job at the current decision point.
    fn key(&self, job: &Job<'_>) -> RuleKey;
}
