//! Error type for scheduling runs.

use std::fmt;

use crate::validation::ValidationError;

/// Reasons a scheduling run is rejected.
///
/// Runs never fail halfway: every check happens before a strategy starts.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// A quantum-based algorithm was given a quantum < 1.
    InvalidQuantum(i64),
    /// The process set failed validation.
    InvalidInput(Vec<ValidationError>),
    /// An algorithm id did not match any known algorithm.
    UnknownAlgorithm(String),
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::InvalidQuantum(q) => {
                write!(f, "time quantum must be at least 1, got {q}")
            }
            ScheduleError::InvalidInput(errors) => {
                write!(f, "invalid process set: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
            ScheduleError::UnknownAlgorithm(id) => write!(f, "unknown scheduling algorithm '{id}'"),
        }
    }
}

impl std::error::Error for ScheduleError {}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ScheduleError::InvalidInput(errors)
    }
}
