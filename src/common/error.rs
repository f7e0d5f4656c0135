//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All recoverable errors in pagesim.
///
/// The default simulation never produces one of these: every input is
/// generated internally. They surface only when a caller supplies its own
/// configuration, instruction sequence or policy name.
///
/// Broken internal invariants (a frame index out of bounds, a page resident
/// in two slots) are bugs and panic instead.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration parameter is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No replacement policy is registered under this name.
    #[error("Unknown replacement policy: {0}")]
    UnknownPolicy(String),

    /// An injected instruction address lies outside the page catalog.
    #[error("Instruction {instruction} is outside the address space [0, {address_space})")]
    InstructionOutOfRange { instruction: u32, address_space: u32 },

    /// An instruction source produced the wrong number of references.
    #[error("Workload produced {actual} instructions, expected {expected}")]
    WorkloadLength { expected: usize, actual: usize },
}
