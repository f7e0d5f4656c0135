//! Run results and summary statistics.

use std::fmt;
use std::time::Duration;

use crate::memory::Policy;
use crate::simulation::ExecutionLog;

/// Outcome of one simulation run.
///
/// Produced once per run and never modified afterwards; each run owns its
/// own log.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    /// Policy the run used.
    pub policy: Policy,

    /// Number of faulting references.
    pub fault_count: usize,

    /// `fault_count / instructions processed` (0.0 to 1.0).
    pub fault_rate: f64,

    /// One entry per processed instruction.
    pub log: ExecutionLog,
}

impl RunResult {
    /// Summary counters derived from the log.
    pub fn stats(&self) -> RunStats {
        let instructions = self.log.len();
        RunStats {
            instructions,
            faults: self.fault_count,
            hits: instructions - self.fault_count,
            evictions: self.log.eviction_count(),
        }
    }
}

/// Fault rate for `faults` out of `instructions`. 0.0 for an empty run.
pub(crate) fn fault_rate(faults: usize, instructions: usize) -> f64 {
    if instructions == 0 {
        0.0
    } else {
        faults as f64 / instructions as f64
    }
}

/// Summary counters of a run.
///
/// # Example
/// ```
/// use pagesim::run_fifo_simulation;
///
/// let stats = run_fifo_simulation().stats();
/// assert_eq!(stats.instructions, 320);
/// assert_eq!(stats.hits + stats.faults, 320);
/// println!("{}", stats);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub instructions: usize,
    pub faults: usize,
    pub hits: usize,
    pub evictions: usize,
}

impl RunStats {
    /// Calculate fault rate (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        fault_rate(self.faults, self.instructions)
    }

    /// Calculate hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.instructions == 0 {
            0.0
        } else {
            self.hits as f64 / self.instructions as f64
        }
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ faults: {}, hits: {}, evictions: {}, fault_rate: {:.2}% }}",
            self.faults,
            self.hits,
            self.evictions,
            self.fault_rate() * 100.0
        )
    }
}

/// A run together with its wall-clock duration.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedRun {
    pub policy: Policy,
    pub result: RunResult,
    pub elapsed: Duration,
}

impl TimedRun {
    /// Elapsed time in milliseconds, rounded to two decimals.
    pub fn execution_time_ms(&self) -> f64 {
        (self.elapsed.as_secs_f64() * 1000.0 * 100.0).round() / 100.0
    }
}
