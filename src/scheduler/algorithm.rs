//! Scheduling discipline selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScheduleError;

/// The six supported CPU scheduling disciplines.
///
/// Serialized by id (`"FIFO"`, `"SJF"`, `"SRTF"`, `"RoundRobin"`,
/// `"Priority"`, `"PriorityRR"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-In, First-Out (non-preemptive, arrival order).
    #[default]
    #[serde(rename = "FIFO")]
    Fifo,
    /// Shortest Job First (non-preemptive).
    #[serde(rename = "SJF")]
    Sjf,
    /// Shortest Remaining Time First (preemptive).
    #[serde(rename = "SRTF")]
    Srtf,
    /// Round Robin with a fixed time quantum.
    #[serde(rename = "RoundRobin")]
    RoundRobin,
    /// Static priority (non-preemptive).
    #[serde(rename = "Priority")]
    Priority,
    /// Priority groups, Round Robin within each group.
    #[serde(rename = "PriorityRR")]
    PriorityRoundRobin,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Fifo,
        Algorithm::Sjf,
        Algorithm::Srtf,
        Algorithm::RoundRobin,
        Algorithm::Priority,
        Algorithm::PriorityRoundRobin,
    ];

    /// Stable identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Algorithm::Fifo => "FIFO",
            Algorithm::Sjf => "SJF",
            Algorithm::Srtf => "SRTF",
            Algorithm::RoundRobin => "RoundRobin",
            Algorithm::Priority => "Priority",
            Algorithm::PriorityRoundRobin => "PriorityRR",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Fifo => "First-In, First-Out (FIFO)",
            Algorithm::Sjf => "Shortest Job First (SJF)",
            Algorithm::Srtf => "Shortest Remaining Time First (SRTF)",
            Algorithm::RoundRobin => "Round Robin (RR)",
            Algorithm::Priority => "Priority Scheduling",
            Algorithm::PriorityRoundRobin => "Priority with Round Robin",
        }
    }

    /// Whether a running process can lose the CPU before it finishes.
    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Algorithm::Srtf | Algorithm::RoundRobin | Algorithm::PriorityRoundRobin
        )
    }

    /// Whether the time quantum is consulted.
    pub fn uses_quantum(&self) -> bool {
        matches!(self, Algorithm::RoundRobin | Algorithm::PriorityRoundRobin)
    }

    /// Parses an id, falling back to FIFO for anything unrecognized.
    pub fn from_id(id: &str) -> Self {
        id.parse().unwrap_or_else(|_| {
            log::warn!("unknown scheduling algorithm '{id}', falling back to FIFO");
            Algorithm::Fifo
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = ScheduleError;

    /// Case-insensitive match on the id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.id().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ScheduleError::UnknownAlgorithm(s.to_string()))
    }
}
