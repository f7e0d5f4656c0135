//! Page identifier type.

use std::fmt;

/// Identifies a page in the catalog.
///
/// A page covers a contiguous block of instruction addresses, so the page
/// holding an address is found by integer division.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::from_instruction(45, 10);
/// assert_eq!(page_id, PageId::new(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }

    /// The page holding `instruction` when each page spans
    /// `instructions_per_page` addresses.
    #[inline]
    pub fn from_instruction(instruction: u32, instructions_per_page: u32) -> Self {
        PageId(instruction / instructions_per_page)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_new() {
        let pid = PageId::new(42);
        assert_eq!(pid.0, 42);
    }

    #[test]
    fn test_page_id_from_instruction() {
        assert_eq!(PageId::from_instruction(0, 10), PageId::new(0));
        assert_eq!(PageId::from_instruction(9, 10), PageId::new(0));
        assert_eq!(PageId::from_instruction(10, 10), PageId::new(1));
        assert_eq!(PageId::from_instruction(319, 10), PageId::new(31));
    }

    #[test]
    fn test_page_id_ordering() {
        assert!(PageId::new(1) < PageId::new(2));
        assert!(PageId::new(5) > PageId::new(3));
    }

    #[test]
    fn test_page_id_display() {
        assert_eq!(format!("{}", PageId::new(42)), "Page(42)");
    }
}
