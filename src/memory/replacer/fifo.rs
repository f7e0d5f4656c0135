//! FIFO (First-In-First-Out) replacement policy.

use crate::common::FrameId;
use crate::memory::replacer::{Policy, Replacer};
use crate::memory::FrameTable;

/// Round-robin FIFO eviction.
///
/// Slots are filled in order and then overwritten in the same order, so the
/// slot under the cursor always holds the page that has been resident
/// longest. Hits do not move the cursor.
#[derive(Debug, Default)]
pub struct FifoReplacer {
    /// Next slot to fill.
    cursor: usize,
}

impl FifoReplacer {
    /// Create a new FIFO replacer starting at slot 0.
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    /// Slot the next fault will use.
    pub fn cursor(&self) -> FrameId {
        FrameId::new(self.cursor)
    }
}

impl Replacer for FifoReplacer {
    fn policy(&self) -> Policy {
        Policy::Fifo
    }

    fn tracks_recency(&self) -> bool {
        false
    }

    /// Return the cursor slot and advance it modulo capacity.
    fn victim(&mut self, table: &FrameTable) -> FrameId {
        let victim = FrameId::new(self.cursor);

        // Until the table fills up the cursor always points at an empty slot
        debug_assert!(table.is_full() || table.page(victim).is_none());

        self.cursor = (self.cursor + 1) % table.capacity();
        victim
    }
}
