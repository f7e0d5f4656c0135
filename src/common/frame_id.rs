//! Frame identifier type.

use std::fmt;

/// Identifies a slot in the frame table.
///
/// Using `usize` because:
/// 1. Slots are stored in `Vec<Option<PageId>>`
/// 2. Direct indexing without casting: `slots[frame_id.0]`
///
/// Internally slots are 0-based. Reports shown to people use the 1-based
/// [`FrameId::slot_number`].
///
/// # Example
/// ```
/// use pagesim::FrameId;
///
/// let frame_id = FrameId::new(0);
/// assert_eq!(frame_id.slot_number(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }

    /// 1-based slot number for display.
    #[inline]
    pub fn slot_number(&self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}
