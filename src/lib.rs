//! pagesim - A page replacement simulator comparing FIFO and LRU.
//!
//! A synthetic program issues instruction references with spatial locality.
//! Each reference either hits a resident page or faults and loads the page
//! into one of a few frames, evicting another when memory is full. Every
//! step is recorded.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Workload (workload/)                        │   │
//! │  │   LocalityWorkload (random) | FixedWorkload (replay)     │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓  Vec<u32>                        │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          Simulation Engine (simulation/)                 │   │
//! │  │   Simulator → Simulation context → ExecutionLog          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │             Memory (memory/)                             │   │
//! │  │   PageCatalog + FrameTable                               │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │       Replacement Policies: FIFO | LRU          │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`memory`] - Pages, frames and eviction policies
//! - [`workload`] - Instruction sequence generation
//! - [`simulation`] - Runs, execution logs and results
//!
//! # Quick Start
//! ```
//! use pagesim::{run_fifo_simulation, run_lru_simulation};
//!
//! let fifo = run_fifo_simulation();
//! let lru = run_lru_simulation();
//!
//! assert_eq!(fifo.log.len(), 320);
//! println!("FIFO {:.3} vs LRU {:.3}", fifo.fault_rate, lru.fault_rate);
//! ```

pub mod common;
pub mod memory;
pub mod simulation;
pub mod workload;

// Re-export commonly used items at crate root for convenience
pub use common::config::{
    FRAME_CAPACITY, INSTRUCTIONS_PER_PAGE, MAX_ADDRESS_SPACE, PAGE_COUNT, TOTAL_INSTRUCTIONS,
};
pub use common::{Error, FrameId, PageId, Result, SimConfig};

pub use memory::{FrameTable, Page, PageCatalog, Policy, Replacer};
pub use simulation::{ExecutionLog, LogEntry, RunResult, RunStats, Simulation, Simulator, TimedRun};
pub use workload::{FixedWorkload, InstructionSource, LocalityWorkload};

/// Run FIFO over a fresh random workload with the default configuration.
pub fn run_fifo_simulation() -> RunResult {
    Simulator::new().run(Policy::Fifo)
}

/// Run LRU over a fresh random workload with the default configuration.
pub fn run_lru_simulation() -> RunResult {
    Simulator::new().run(Policy::Lru)
}

/// Dispatch to the entry point registered for `policy`.
pub fn simulate(policy: Policy) -> RunResult {
    match policy {
        Policy::Fifo => run_fifo_simulation(),
        Policy::Lru => run_lru_simulation(),
    }
}

/// Run `policy` with the default configuration and time it.
pub fn run_timed(policy: Policy) -> TimedRun {
    Simulator::new().run_timed(policy)
}
