//! LRU (Least-Recently-Used) replacement policy.

use crate::common::FrameId;
use crate::memory::replacer::{Policy, Replacer};
use crate::memory::FrameTable;

/// Evicts the page with the oldest `last_used` timestamp.
///
/// Timestamps live in the [`FrameTable`]; they are set on install and
/// refreshed on every hit, so the minimum identifies the least recent
/// access even for pages never hit since loading.
#[derive(Debug, Default)]
pub struct LruReplacer;

impl LruReplacer {
    pub fn new() -> Self {
        Self
    }
}

impl Replacer for LruReplacer {
    fn policy(&self) -> Policy {
        Policy::Lru
    }

    fn tracks_recency(&self) -> bool {
        true
    }

    /// Lowest-indexed empty slot, else the minimum `last_used`.
    ///
    /// Ties on the minimum go to the lowest slot index.
    fn victim(&mut self, table: &FrameTable) -> FrameId {
        if let Some(empty) = table.first_empty() {
            return empty;
        }

        // min_by_key returns the first minimum, which is the lowest index
        let (index, _) = table
            .last_used_times()
            .iter()
            .enumerate()
            .min_by_key(|&(_, &time)| time)
            .expect("frame table has at least one slot");

        FrameId::new(index)
    }
}
