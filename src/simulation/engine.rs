//! Simulation engine - runs a policy over an instruction sequence.
//!
//! [`Simulator`] holds the configuration and starts runs. Each run builds a
//! fresh [`Simulation`] context, so no state carries between runs or
//! policies.

use std::time::Instant;

use log::{debug, info, trace};

use crate::common::{Error, PageId, Result, SimConfig};
use crate::memory::{FrameTable, PageCatalog, Policy, Replacer};
use crate::simulation::stats::fault_rate;
use crate::simulation::{ExecutionLog, RunResult, TimedRun};
use crate::workload::{InstructionSource, LocalityWorkload};

/// State of a single run.
///
/// # Architecture
/// ```text
/// ┌───────────────────────────────────────────────────────┐
/// │                      Simulation                       │
/// │  ┌─────────────┐  ┌──────────────────────────────┐    │
/// │  │  catalog    │  │  frames: FrameTable          │    │
/// │  │ PageCatalog │  │  [P0] [P7] [--] [--]         │    │
/// │  └─────────────┘  └──────────────────────────────┘    │
/// │  ┌─────────────┐  ┌─────────────┐  ┌──────────────┐   │
/// │  │  replacer   │  │     log     │  │ step, faults │   │
/// │  │ dyn Replacer│  │ExecutionLog │  │   counters   │   │
/// │  └─────────────┘  └─────────────┘  └──────────────┘   │
/// └───────────────────────────────────────────────────────┘
/// ```
pub struct Simulation {
    catalog: PageCatalog,
    frames: FrameTable,
    replacer: Box<dyn Replacer>,
    log: ExecutionLog,

    /// Steps processed so far; also the logical clock for `last_used`.
    step: u64,

    fault_count: usize,
}

impl Simulation {
    /// Fresh context for one run of `policy`.
    ///
    /// The configuration is not validated here; [`Simulator::with_config`]
    /// does that.
    ///
    /// # Panics
    /// Panics if `config.frame_capacity` or `config.instructions_per_page` is 0.
    pub fn new(config: &SimConfig, policy: Policy) -> Self {
        Self {
            catalog: PageCatalog::new(config),
            frames: FrameTable::new(config),
            replacer: policy.replacer(),
            log: ExecutionLog::with_capacity(config.total_instructions),
            step: 0,
            fault_count: 0,
        }
    }

    /// Process one instruction reference.
    ///
    /// # Panics
    /// Panics if `instruction` lies outside the page catalog.
    pub fn step(&mut self, instruction: u32) {
        self.step += 1;
        let step = self.step;

        let now = self.replacer.tracks_recency().then_some(step);
        if self.frames.resident(instruction, now) {
            trace!("step {}: instruction {} hit", step, instruction);
            self.log
                .append(step, instruction, self.frames.snapshot(), false, None, None);
            return;
        }

        let page_id = self.page_for(instruction);
        self.fault_count += 1;

        let victim = self.replacer.victim(&self.frames);
        let evicted = self.frames.install(victim, page_id, step);

        debug!(
            "step {}: instruction {} faulted, {} -> {}{}",
            step,
            instruction,
            page_id,
            victim,
            evicted.map(|p| format!(", evicted {}", p)).unwrap_or_default()
        );

        self.log.append(
            step,
            instruction,
            self.frames.snapshot(),
            true,
            Some(victim),
            evicted,
        );
    }

    fn page_for(&self, instruction: u32) -> PageId {
        match self.catalog.page_for(instruction) {
            Some(page) => page.id(),
            None => panic!(
                "instruction {} outside catalog of {} pages",
                instruction,
                self.catalog.len()
            ),
        }
    }

    /// Read-only view of the frame table.
    pub fn frames(&self) -> &FrameTable {
        &self.frames
    }

    pub fn fault_count(&self) -> usize {
        self.fault_count
    }

    /// Consume the context and produce the result.
    pub fn finish(self) -> RunResult {
        let policy = self.replacer.policy();
        let result = RunResult {
            policy,
            fault_count: self.fault_count,
            fault_rate: fault_rate(self.fault_count, self.log.len()),
            log: self.log,
        };

        info!(
            "{} run finished: {} faults over {} instructions ({:.2}%)",
            policy,
            result.fault_count,
            result.log.len(),
            result.fault_rate * 100.0
        );
        result
    }
}

/// Starts simulation runs.
///
/// # Usage
/// ```
/// use pagesim::{Policy, Simulator};
///
/// let sim = Simulator::new();
/// let result = sim.run_sequence(Policy::Fifo, &[5, 15, 25, 35, 5, 45]).unwrap();
/// assert_eq!(result.fault_count, 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimConfig,
}

impl Simulator {
    /// Simulator using the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulator using a custom configuration.
    ///
    /// # Errors
    /// `Error::InvalidConfig` if the configuration fails validation.
    pub fn with_config(config: SimConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Run `policy` over a freshly generated locality workload.
    pub fn run(&self, policy: Policy) -> RunResult {
        let instructions = LocalityWorkload::new().generate(&self.config);
        self.execute(policy, &instructions)
    }

    /// Run `policy` over the sequence produced by `source`.
    ///
    /// # Errors
    /// - `Error::WorkloadLength` if the source does not produce exactly
    ///   `total_instructions` references
    /// - `Error::InstructionOutOfRange` if any address is outside the catalog
    pub fn run_with_source(
        &self,
        policy: Policy,
        source: &mut dyn InstructionSource,
    ) -> Result<RunResult> {
        let instructions = source.generate(&self.config);
        if instructions.len() != self.config.total_instructions {
            return Err(Error::WorkloadLength {
                expected: self.config.total_instructions,
                actual: instructions.len(),
            });
        }
        self.run_sequence(policy, &instructions)
    }

    /// Run `policy` over an explicit sequence of any length.
    ///
    /// # Errors
    /// `Error::InstructionOutOfRange` if any address is outside the catalog.
    pub fn run_sequence(&self, policy: Policy, instructions: &[u32]) -> Result<RunResult> {
        self.check_range(instructions)?;
        Ok(self.execute(policy, instructions))
    }

    /// Run every registered policy over the same sequence.
    ///
    /// Each policy gets its own frame table and log.
    pub fn compare(&self, instructions: &[u32]) -> Result<Vec<RunResult>> {
        self.check_range(instructions)?;
        Ok(Policy::ALL
            .iter()
            .map(|&policy| self.execute(policy, instructions))
            .collect())
    }

    /// Run `policy` over a generated workload and measure wall-clock time.
    pub fn run_timed(&self, policy: Policy) -> TimedRun {
        let start = Instant::now();
        let result = self.run(policy);
        TimedRun {
            policy,
            result,
            elapsed: start.elapsed(),
        }
    }

    fn check_range(&self, instructions: &[u32]) -> Result<()> {
        let address_space = self.config.address_space();
        match instructions.iter().find(|&&addr| addr >= address_space) {
            Some(&instruction) => Err(Error::InstructionOutOfRange {
                instruction,
                address_space,
            }),
            None => Ok(()),
        }
    }

    fn execute(&self, policy: Policy, instructions: &[u32]) -> RunResult {
        let mut sim = Simulation::new(&self.config, policy);
        for &instruction in instructions {
            sim.step(instruction);
        }
        sim.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::FrameId;
    use crate::workload::FixedWorkload;

    const SCENARIO: [u32; 6] = [5, 15, 25, 35, 5, 45];

    fn frames(result: &RunResult, step: usize) -> Vec<Option<u32>> {
        result.log.entries()[step - 1]
            .frames
            .iter()
            .map(|slot| slot.map(|p| p.0))
            .collect()
    }

    #[test]
    fn test_fifo_scenario() {
        let result = Simulator::new()
            .run_sequence(Policy::Fifo, &SCENARIO)
            .unwrap();
        let entries = result.log.entries();

        for (i, entry) in entries[..4].iter().enumerate() {
            assert!(entry.is_fault);
            assert_eq!(entry.inserted_frame, Some(FrameId::new(i)));
            assert_eq!(entry.evicted, None);
        }

        assert!(!entries[4].is_fault);
        assert_eq!(entries[4].inserted_frame, None);

        assert!(entries[5].is_fault);
        assert_eq!(entries[5].inserted_frame, Some(FrameId::new(0)));
        assert_eq!(entries[5].evicted, Some(PageId::new(0)));
        assert_eq!(frames(&result, 6), vec![Some(4), Some(1), Some(2), Some(3)]);

        assert_eq!(result.fault_count, 5);
        assert_eq!(result.fault_rate, 5.0 / 6.0);
    }

    #[test]
    fn test_lru_scenario() {
        let result = Simulator::new()
            .run_sequence(Policy::Lru, &SCENARIO)
            .unwrap();
        let last = &result.log.entries()[5];

        // Page 0 was hit at step 5, page 1 is the oldest
        assert!(last.is_fault);
        assert_eq!(last.inserted_frame, Some(FrameId::new(1)));
        assert_eq!(last.evicted, Some(PageId::new(1)));
        assert_eq!(frames(&result, 6), vec![Some(0), Some(4), Some(2), Some(3)]);
    }

    #[test]
    fn test_simulation_context_timestamps() {
        let mut sim = Simulation::new(&SimConfig::default(), Policy::Lru);
        for &instruction in &SCENARIO {
            sim.step(instruction);
        }

        let table = sim.frames();
        assert_eq!(table.last_used(FrameId::new(0)), 5);
        assert_eq!(table.last_used(FrameId::new(1)), 6);
        assert_eq!(sim.fault_count(), 5);
    }

    #[test]
    #[should_panic(expected = "capacity must be > 0")]
    fn test_simulation_new_unvalidated_config() {
        let config = SimConfig::default().with_frame_capacity(0);
        Simulation::new(&config, Policy::Lru);
    }

    #[test]
    fn test_fifo_hit_keeps_install_time() {
        let mut sim = Simulation::new(&SimConfig::default(), Policy::Fifo);
        for &instruction in &SCENARIO[..5] {
            sim.step(instruction);
        }
        assert_eq!(sim.frames().last_used(FrameId::new(0)), 1);
    }

    #[test]
    fn test_run_sequence_rejects_out_of_range() {
        let err = Simulator::new()
            .run_sequence(Policy::Lru, &[1, 320])
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InstructionOutOfRange {
                instruction: 320,
                address_space: 320
            }
        ));
    }

    #[test]
    fn test_run_with_source_checks_length() {
        let sim = Simulator::new();
        let err = sim
            .run_with_source(Policy::Fifo, &mut FixedWorkload(SCENARIO.to_vec()))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::WorkloadLength {
                expected: 320,
                actual: 6
            }
        ));

        let sim = Simulator::with_config(SimConfig::default().with_total_instructions(6)).unwrap();
        let result = sim
            .run_with_source(Policy::Fifo, &mut FixedWorkload(SCENARIO.to_vec()))
            .unwrap();
        assert_eq!(result.log.len(), 6);
    }

    #[test]
    fn test_with_config_validates() {
        let config = SimConfig::default().with_frame_capacity(0);
        assert!(matches!(
            Simulator::with_config(config),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_compare_uses_independent_tables() {
        let results = Simulator::new().compare(&SCENARIO).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].policy, Policy::Fifo);
        assert_eq!(results[1].policy, Policy::Lru);

        // Same faults, different victims
        assert_eq!(results[0].fault_count, results[1].fault_count);
        assert_ne!(
            results[0].log.entries()[5].evicted,
            results[1].log.entries()[5].evicted
        );
    }

    #[test]
    fn test_empty_sequence() {
        let result = Simulator::new().run_sequence(Policy::Lru, &[]).unwrap();
        assert_eq!(result.fault_count, 0);
        assert_eq!(result.fault_rate, 0.0);
        assert!(result.log.is_empty());
    }

    #[test]
    fn test_run_timed() {
        let timed = Simulator::new().run_timed(Policy::Lru);
        assert_eq!(timed.policy, Policy::Lru);
        assert_eq!(timed.result.log.len(), 320);
        assert!(timed.execution_time_ms() >= 0.0);
    }
}
