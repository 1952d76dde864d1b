//! CPU scheduling domain models.
//!
//! Provides the input and output types of a scheduling run. All times are
//! integer ticks of a discrete simulation clock starting at 0.
//!
//! # Domain Mappings
//!
//! | u-cpusched | Textbook term | Gantt chart |
//! |------------|---------------|-------------|
//! | Process | Process / job | Row label |
//! | ExecutionStep | CPU burst slice | Colored block |
//! | Timeline | Dispatch history | Whole chart |
//! | SchedulingResult | Run report | Chart + metrics table |

mod process;
mod result;
mod timeline;

pub use process::Process;
pub use result::{ProcessCompletion, SchedulingResult};
pub use timeline::{ExecutionStep, Timeline};
