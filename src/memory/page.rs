//! Pages and the page catalog.

use std::ops::Range;

use crate::common::{PageId, SimConfig};

/// A page of the simulated program's address space.
///
/// Each page holds a contiguous block of instruction addresses:
/// page `n` holds `n * per_page .. (n + 1) * per_page`.
/// Pages are immutable once built.
///
/// # Example
/// ```
/// use pagesim::{Page, PageId};
///
/// let page = Page::new(PageId::new(3), 10);
/// assert!(page.contains(35));
/// assert!(!page.contains(40));
/// assert_eq!(page.instructions().count(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    id: PageId,
    instructions: Range<u32>,
}

impl Page {
    /// Create the page `id` spanning `instructions_per_page` addresses.
    pub fn new(id: PageId, instructions_per_page: u32) -> Self {
        let start = id.0 * instructions_per_page;
        Self {
            id,
            instructions: start..start + instructions_per_page,
        }
    }

    #[inline]
    pub fn id(&self) -> PageId {
        self.id
    }

    /// Whether `instruction` lives on this page.
    #[inline]
    pub fn contains(&self, instruction: u32) -> bool {
        self.instructions.contains(&instruction)
    }

    /// The addresses held by this page, in ascending order.
    pub fn instructions(&self) -> Range<u32> {
        self.instructions.clone()
    }
}

/// The full set of pages for one run.
///
/// Built once at the start of a run and owned by it.
#[derive(Debug, Clone)]
pub struct PageCatalog {
    pages: Vec<Page>,
    instructions_per_page: u32,
}

impl PageCatalog {
    /// Build every page described by `config`.
    pub fn new(config: &SimConfig) -> Self {
        let pages = (0..config.page_count)
            .map(|id| Page::new(PageId::new(id), config.instructions_per_page))
            .collect();

        Self {
            pages,
            instructions_per_page: config.instructions_per_page,
        }
    }

    /// The page holding `instruction`, or None if it lies past the last page.
    pub fn page_for(&self, instruction: u32) -> Option<&Page> {
        let page_id = PageId::from_instruction(instruction, self.instructions_per_page);
        self.pages.get(page_id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }
}
