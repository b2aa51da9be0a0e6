//! Client-side pagination of rendered rows

use shared::response::Pagination;

/// Rows per page used by the category table
pub const DEFAULT_PER_PAGE: u32 = 5;

/// One page of rows plus its metadata
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

/// Current page position (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: u32,
    per_page: u32,
}

impl Pager {
    pub fn new(per_page: u32) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Change the page size and go back to the first page
    pub fn set_per_page(&mut self, per_page: u32) {
        self.per_page = per_page.max(1);
        self.page = 1;
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Slice `rows` down to the current page.
    /// A page past the end yields no items.
    pub fn paginate<T: Clone>(&self, rows: &[T]) -> Page<T> {
        let pagination = Pagination::new(self.page, self.per_page, rows.len() as u64);
        let start = pagination.offset().min(rows.len());
        let end = (start + self.per_page as usize).min(rows.len());
        Page {
            items: rows[start..end].to_vec(),
            pagination,
        }
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PER_PAGE)
    }
}
