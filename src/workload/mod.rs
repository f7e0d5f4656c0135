//! Instruction workloads.
//!
//! - [`LocalityWorkload`] - Random references with sequential, backward and
//!   forward locality
//! - [`FixedWorkload`] - A caller-supplied sequence, for deterministic runs

mod generator;

pub use generator::{generate_instruction_sequence, FixedWorkload, InstructionSource, LocalityWorkload};
