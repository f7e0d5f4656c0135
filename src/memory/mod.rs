//! Simulated main memory.
//!
//! A run has a fixed catalog of pages and a fixed number of frames to hold
//! them. Replacement policies decide which frame a faulting page lands in.
//!
//! # Components
//! - [`Page`] / [`PageCatalog`] - The pages of the address space
//! - [`FrameTable`] - The resident slots plus recency timestamps
//! - [`replacer`] - Eviction policy implementations

mod frame_table;
mod page;
pub mod replacer;

pub use frame_table::FrameTable;
pub use page::{Page, PageCatalog};
pub use replacer::{FifoReplacer, LruReplacer, Policy, Replacer};
