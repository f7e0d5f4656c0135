//! Eviction policy implementations (replacers).
//!
//! Currently implements:
//! - [`FifoReplacer`] - Round-robin over slots, oldest install goes first
//! - [`LruReplacer`] - Oldest reference goes first
//!
//! A new policy needs a [`Replacer`] implementation and a [`Policy`] variant.

mod fifo;
mod lru;

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, FrameId};
use crate::memory::FrameTable;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;

/// Chooses which slot receives a faulting page.
///
/// `victim` is called exactly once per fault, before the new page is
/// installed. Policies that keep a cursor may advance it there.
pub trait Replacer {
    /// Which policy this is.
    fn policy(&self) -> Policy;

    /// Whether hits should refresh the slot's `last_used` timestamp.
    fn tracks_recency(&self) -> bool;

    /// Pick the slot to fill. The returned slot must be in bounds.
    fn victim(&mut self, table: &FrameTable) -> FrameId;
}

/// The registered replacement policies.
///
/// # Example
/// ```
/// use pagesim::Policy;
///
/// let policy: Policy = "lru".parse().unwrap();
/// assert_eq!(policy, Policy::Lru);
/// assert_eq!(policy.name(), "LRU");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    Fifo,
    Lru,
}

impl Policy {
    /// Every registered policy, in display order.
    pub const ALL: [Policy; 2] = [Policy::Fifo, Policy::Lru];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
        }
    }

    /// A fresh replacer for one run.
    pub fn replacer(&self) -> Box<dyn Replacer> {
        match self {
            Policy::Fifo => Box::new(FifoReplacer::new()),
            Policy::Lru => Box::new(LruReplacer::new()),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Policy::ALL
            .into_iter()
            .find(|policy| policy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownPolicy(s.to_string()))
    }
}
