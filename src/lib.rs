//! CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Given a set of processes (arrival time, burst time, priority) and a
//! scheduling discipline, produces the exact execution timeline and the
//! derived performance metrics (turnaround time, waiting time, averages).
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ExecutionStep`, `Timeline`,
//!   `ProcessCompletion`, `SchedulingResult`
//! - **`scheduler`**: The six strategies (FIFO, SJF, SRTF, Round Robin,
//!   Priority, Priority+RR), the `CpuScheduler` entry point and metrics
//! - **`validation`**: Input integrity checks (duplicate IDs, bad burst/arrival)
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use u_cpusched::{schedule, Algorithm, Process};
//!
//! let processes = vec![
//!     Process::new("1").with_arrival(0).with_burst(8),
//!     Process::new("2").with_arrival(1).with_burst(4),
//! ];
//! let result = schedule(Algorithm::Srtf, &processes, 2).unwrap();
//!
//! assert_eq!(result.execution_sequence.len(), 3);
//! assert!((result.average_waiting_time - 2.0).abs() < 1e-10);
//! ```
//!
//! # Time Model
//!
//! A single CPU and a discrete integer clock starting at 0. Every call is a
//! pure, deterministic computation: no state survives between runs.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod config;
mod dispatching;
mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use config::{SchedulerConfig, DEFAULT_QUANTUM};
pub use error::ScheduleError;
pub use models::{ExecutionStep, Process, ProcessCompletion, SchedulingResult, Timeline};
pub use scheduler::{schedule, Algorithm, CpuScheduler, ScheduleMetrics};
