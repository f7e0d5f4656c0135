//! FrameTable - the fixed set of resident memory slots.
//!
//! A [`FrameTable`] holds up to `capacity` pages plus the metadata the
//! replacement policies need:
//! - Which page occupies each slot (if any)
//! - When each slot's page was last referenced

use crate::common::{FrameId, PageId, SimConfig};

/// The resident memory of one simulation run.
///
/// Slots are filled and overwritten in place; a slot never goes back to
/// empty once occupied. A page may sit in at most one slot at a time.
///
/// # Layout
/// ```text
/// slots:     [ Some(Page 0) | Some(Page 7) | None | None ]
/// last_used: [      5       |      3       |  0   |  0   ]
/// ```
///
/// `last_used` holds the step at which the slot's page was installed or
/// last hit. Only the LRU policy refreshes it on hits.
#[derive(Debug, Clone)]
pub struct FrameTable {
    /// Resident page per slot, or None if the slot is empty.
    slots: Vec<Option<PageId>>,

    /// Logical timestamp of the last reference, parallel to `slots`.
    last_used: Vec<u64>,

    /// Addresses per page, used to map an instruction to its page.
    instructions_per_page: u32,
}

impl FrameTable {
    /// Create an empty table sized by `config`.
    pub fn new(config: &SimConfig) -> Self {
        Self::with_capacity(config.frame_capacity, config.instructions_per_page)
    }

    /// Create an empty table with `capacity` slots.
    ///
    /// # Panics
    /// Panics if `capacity` or `instructions_per_page` is 0.
    pub fn with_capacity(capacity: usize, instructions_per_page: u32) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        assert!(instructions_per_page > 0, "instructions_per_page must be > 0");

        Self {
            slots: vec![None; capacity],
            last_used: vec![0; capacity],
            instructions_per_page,
        }
    }

    // ========================================================================
    // Membership
    // ========================================================================

    /// Find the slot holding `page_id`.
    pub fn find(&self, page_id: PageId) -> Option<FrameId> {
        self.slots
            .iter()
            .position(|slot| *slot == Some(page_id))
            .map(FrameId::new)
    }

    /// Check whether the page holding `instruction` is resident.
    ///
    /// On a hit with `now` supplied, the slot's `last_used` is set to `now`.
    /// Misses never touch the timestamps, and callers that ignore recency
    /// (FIFO) pass `None`.
    pub fn resident(&mut self, instruction: u32, now: Option<u64>) -> bool {
        let page_id = PageId::from_instruction(instruction, self.instructions_per_page);

        match self.find(page_id) {
            Some(frame_id) => {
                if let Some(now) = now {
                    self.last_used[frame_id.0] = now;
                }
                true
            }
            None => false,
        }
    }

    // ========================================================================
    // Installation
    // ========================================================================

    /// Place `page_id` into `frame_id`, stamping it with `now`.
    ///
    /// Returns the page that previously occupied the slot, if any.
    ///
    /// # Panics
    /// Panics if `frame_id` is out of bounds. In debug builds, also panics if
    /// `page_id` is already resident in another slot.
    pub fn install(&mut self, frame_id: FrameId, page_id: PageId, now: u64) -> Option<PageId> {
        assert!(
            frame_id.0 < self.slots.len(),
            "{} out of bounds for capacity {}",
            frame_id,
            self.slots.len()
        );
        debug_assert!(
            self.find(page_id).is_none(),
            "{} is already resident",
            page_id
        );

        self.last_used[frame_id.0] = now;
        self.slots[frame_id.0].replace(page_id)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Check if every slot holds a page.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Lowest-indexed empty slot.
    pub fn first_empty(&self) -> Option<FrameId> {
        self.slots.iter().position(Option::is_none).map(FrameId::new)
    }

    /// Page resident in `frame_id`, or None if the slot is empty.
    #[inline]
    pub fn page(&self, frame_id: FrameId) -> Option<PageId> {
        self.slots[frame_id.0]
    }

    /// Timestamp of the last reference to the page in `frame_id`.
    #[inline]
    pub fn last_used(&self, frame_id: FrameId) -> u64 {
        self.last_used[frame_id.0]
    }

    /// All timestamps in slot order.
    pub fn last_used_times(&self) -> &[u64] {
        &self.last_used
    }

    /// Copy of the current occupancy in slot order.
    pub fn snapshot(&self) -> Vec<Option<PageId>> {
        self.slots.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> FrameTable {
        FrameTable::with_capacity(4, 10)
    }

    #[test]
    fn test_frame_table_new() {
        let table = table();
        assert_eq!(table.capacity(), 4);
        assert_eq!(table.occupied(), 0);
        assert!(!table.is_full());
        assert_eq!(table.first_empty(), Some(FrameId::new(0)));
        assert_eq!(table.snapshot(), vec![None; 4]);
    }

    #[test]
    #[should_panic(expected = "capacity must be > 0")]
    fn test_frame_table_zero_capacity() {
        FrameTable::with_capacity(0, 10);
    }

    #[test]
    fn test_install_and_find() {
        let mut table = table();

        assert_eq!(table.install(FrameId::new(2), PageId::new(7), 1), None);
        assert_eq!(table.find(PageId::new(7)), Some(FrameId::new(2)));
        assert_eq!(table.page(FrameId::new(2)), Some(PageId::new(7)));
        assert_eq!(table.last_used(FrameId::new(2)), 1);
        assert_eq!(table.first_empty(), Some(FrameId::new(0)));
    }

    #[test]
    fn test_install_returns_displaced_page() {
        let mut table = table();
        table.install(FrameId::new(0), PageId::new(1), 1);

        let displaced = table.install(FrameId::new(0), PageId::new(2), 5);
        assert_eq!(displaced, Some(PageId::new(1)));
        assert_eq!(table.find(PageId::new(1)), None);
        assert_eq!(table.last_used(FrameId::new(0)), 5);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_install_out_of_bounds() {
        let mut table = table();
        table.install(FrameId::new(4), PageId::new(0), 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "already resident")]
    fn test_install_duplicate_page() {
        let mut table = table();
        table.install(FrameId::new(0), PageId::new(3), 1);
        table.install(FrameId::new(1), PageId::new(3), 2);
    }

    #[test]
    fn test_resident_maps_instruction_to_page() {
        let mut table = table();
        table.install(FrameId::new(0), PageId::new(4), 1);

        assert!(table.resident(40, None));
        assert!(table.resident(49, None));
        assert!(!table.resident(50, None));
        assert!(!table.resident(39, None));
    }

    #[test]
    fn test_resident_refreshes_only_on_hit() {
        let mut table = table();
        table.install(FrameId::new(1), PageId::new(0), 1);

        // Miss with a timestamp leaves every slot untouched
        assert!(!table.resident(15, Some(9)));
        assert_eq!(table.last_used_times(), &[0, 1, 0, 0]);

        // Hit without a timestamp leaves the slot untouched
        assert!(table.resident(5, None));
        assert_eq!(table.last_used(FrameId::new(1)), 1);

        // Hit with a timestamp refreshes it
        assert!(table.resident(5, Some(9)));
        assert_eq!(table.last_used(FrameId::new(1)), 9);
    }

    #[test]
    fn test_full_table() {
        let mut table = table();
        for i in 0..4 {
            table.install(FrameId::new(i), PageId::new(i as u32), i as u64 + 1);
        }

        assert!(table.is_full());
        assert_eq!(table.occupied(), 4);
        assert_eq!(table.first_empty(), None);
    }
}
