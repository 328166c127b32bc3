//! Search results and pagination.

use serde::{Deserialize, Serialize};

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of matching items across all pages.
    pub total: usize,
    /// Total number of pages (at least 1).
    pub total_pages: usize,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info. `page` and `per_page` below 1 are raised to 1.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let total_pages = if total == 0 {
            1
        } else {
            total.div_ceil(per_page)
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }

    /// Get start item number (1-indexed), 0 when the page is empty.
    pub fn start_item(&self) -> usize {
        if self.offset() >= self.total {
            0
        } else {
            self.offset() + 1
        }
    }

    /// Get end item number (1-indexed), 0 when the page is empty.
    pub fn end_item(&self) -> usize {
        if self.start_item() == 0 {
            0
        } else {
            self.offset().saturating_add(self.per_page).min(self.total)
        }
    }
}

/// One page of results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults<T> {
    /// The result items.
    pub items: Vec<T>,
    /// Pagination info.
    pub pagination: Pagination,
}

impl<T> SearchResults<T> {
    /// Create new search results.
    pub fn new(items: Vec<T>, pagination: Pagination) -> Self {
        Self { items, pagination }
    }

    /// Check if this page is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_basics() {
        let p = Pagination::new(2, 10, 45);
        assert_eq!(p.total_pages, 5);
        assert!(p.has_next);
        assert!(p.has_prev);
        assert_eq!(p.offset(), 10);
    }

    #[test]
    fn test_pagination_single_page() {
        let p = Pagination::new(1, 12, 5);
        assert_eq!(p.total_pages, 1);
        assert!(!p.has_next);
        assert!(!p.has_prev);
    }

    #[test]
    fn test_pagination_empty() {
        let p = Pagination::new(1, 12, 0);
        assert_eq!(p.total_pages, 1);
        assert_eq!(p.start_item(), 0);
        assert_eq!(p.end_item(), 0);
    }

    #[test]
    fn test_pagination_item_range() {
        let p = Pagination::new(2, 10, 45);
        assert_eq!(p.start_item(), 11);
        assert_eq!(p.end_item(), 20);

        let past_end = Pagination::new(9, 10, 45);
        assert_eq!(past_end.start_item(), 0);
        assert_eq!(past_end.end_item(), 0);
        assert!(!past_end.has_next);
    }

    #[test]
    fn test_pagination_clamps_zero_inputs() {
        let p = Pagination::new(0, 0, 5);
        assert_eq!(p.page, 1);
        assert_eq!(p.per_page, 1);
        assert_eq!(p.total_pages, 5);
        assert_eq!(p.offset(), 0);
        assert_eq!((p.start_item(), p.end_item()), (1, 1));

        assert_eq!(Pagination::new(1, 0, 5).total_pages, 5);
        assert_eq!(Pagination::new(0, 10, 5).offset(), 0);
    }

    #[test]
    fn test_offset_with_zeroed_public_field() {
        let mut p = Pagination::new(1, 10, 5);
        p.page = 0;
        assert_eq!(p.offset(), 0);
        assert_eq!((p.start_item(), p.end_item()), (1, 5));
    }
}
