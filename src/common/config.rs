//! Configuration for a simulation run.

use crate::common::{Error, Result};

/// Number of instruction references processed per run.
pub const TOTAL_INSTRUCTIONS: usize = 320;

/// Number of frames in the resident memory table.
pub const FRAME_CAPACITY: usize = 4;

/// Number of pages in the catalog.
pub const PAGE_COUNT: u32 = 32;

/// Number of consecutive instruction addresses held by each page.
///
/// # Memory Layout
/// Page `n` holds addresses `n*10 .. n*10+9`, so the 32 pages cover the
/// address range `[0, 320)`.
pub const INSTRUCTIONS_PER_PAGE: u32 = 10;

/// Largest address space a configuration may describe.
///
/// Keeps the catalog allocation bounded and leaves headroom for the
/// generator's `m + 2` arithmetic.
pub const MAX_ADDRESS_SPACE: u32 = 1 << 24;

/// Parameters of a simulation run.
///
/// The zero-argument entry points always use [`SimConfig::default`], which
/// matches the module constants.
///
/// # Example
/// ```
/// use pagesim::SimConfig;
///
/// let config = SimConfig::default().with_frame_capacity(8);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.address_space(), 320);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Length of the generated instruction sequence.
    pub total_instructions: usize,

    /// Number of frame slots.
    pub frame_capacity: usize,

    /// Number of pages in the catalog.
    pub page_count: u32,

    /// Addresses per page.
    pub instructions_per_page: u32,
}

impl SimConfig {
    /// Total number of addressable instructions (`page_count * instructions_per_page`).
    #[inline]
    pub fn address_space(&self) -> u32 {
        self.page_count * self.instructions_per_page
    }

    pub fn with_total_instructions(mut self, total_instructions: usize) -> Self {
        self.total_instructions = total_instructions;
        self
    }

    pub fn with_frame_capacity(mut self, frame_capacity: usize) -> Self {
        self.frame_capacity = frame_capacity;
        self
    }

    pub fn with_page_count(mut self, page_count: u32) -> Self {
        self.page_count = page_count;
        self
    }

    pub fn with_instructions_per_page(mut self, instructions_per_page: u32) -> Self {
        self.instructions_per_page = instructions_per_page;
        self
    }

    /// Check that every parameter is usable.
    ///
    /// # Errors
    /// `Error::InvalidConfig` if any field is zero or the address space
    /// exceeds [`MAX_ADDRESS_SPACE`].
    pub fn validate(&self) -> Result<()> {
        if self.total_instructions == 0 {
            return Err(Error::InvalidConfig("total_instructions must be > 0".into()));
        }
        if self.frame_capacity == 0 {
            return Err(Error::InvalidConfig("frame_capacity must be > 0".into()));
        }
        if self.page_count == 0 {
            return Err(Error::InvalidConfig("page_count must be > 0".into()));
        }
        if self.instructions_per_page == 0 {
            return Err(Error::InvalidConfig(
                "instructions_per_page must be > 0".into(),
            ));
        }
        match self.page_count.checked_mul(self.instructions_per_page) {
            Some(space) if space <= MAX_ADDRESS_SPACE => {}
            _ => {
                return Err(Error::InvalidConfig(format!(
                    "address space must be <= {}",
                    MAX_ADDRESS_SPACE
                )))
            }
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_instructions: TOTAL_INSTRUCTIONS,
            frame_capacity: FRAME_CAPACITY,
            page_count: PAGE_COUNT,
            instructions_per_page: INSTRUCTIONS_PER_PAGE,
        }
    }
}
