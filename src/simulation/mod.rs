//! Simulation runs.
//!
//! # Components
//! - [`Simulator`] - Starts runs under a configuration
//! - [`Simulation`] - The per-run context (frames, counters, log)
//! - [`ExecutionLog`] / [`LogEntry`] - Per-instruction outcomes
//! - [`RunResult`] / [`RunStats`] / [`TimedRun`] - What a run returns

mod engine;
mod execution_log;
mod stats;

pub use engine::{Simulation, Simulator};
pub use execution_log::{ExecutionLog, LogEntry, EMPTY_MARKER};
pub use stats::{RunResult, RunStats, TimedRun};
