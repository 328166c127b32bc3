//! Product filters and the pure filtering pipeline.

use serde::{Deserialize, Serialize};

use crate::catalog::{Product, ALL_CATEGORIES_SLUG};
use crate::search::{Pagination, SearchResults, SortOption};

/// Page size used when a filter does not set one.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Largest page size a filter may request.
pub const MAX_PAGE_SIZE: usize = 100;

/// Filters applied to a product listing.
///
/// Every field is optional; `ProductFilters::default()` matches every
/// product in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilters {
    /// Category name or slug; `None` or `"all"` disables the filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Text matched against name and description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Sort order; `None` keeps source order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortOption>,
    /// 1-indexed page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    /// Items per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl ProductFilters {
    /// The filters the catalog view starts with: all categories, no
    /// search, sorted by name.
    pub fn catalog_defaults() -> Self {
        Self {
            category: Some(ALL_CATEGORIES_SLUG.to_string()),
            search: Some(String::new()),
            sort_by: Some(SortOption::NameAsc),
            page: None,
            limit: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort_by = Some(sort);
        self
    }

    pub fn with_page(mut self, page: usize, limit: usize) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }

    /// Return to the catalog defaults ("reset filters").
    pub fn reset(&mut self) {
        *self = Self::catalog_defaults();
    }

    /// Clear the search term without touching anything else.
    pub fn clear_search(&mut self) {
        self.search = Some(String::new());
    }

    /// The active category filter, if any.
    pub fn active_category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case(ALL_CATEGORIES_SLUG))
    }

    /// The active search term, lowercased, if any.
    pub fn active_search(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Effective page number (at least 1).
    pub fn effective_page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }

    /// Effective page size, clamped to `1..=MAX_PAGE_SIZE`.
    pub fn effective_limit(&self) -> usize {
        self.limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }
}

/// Filter, sort and paginate a product list.
///
/// Steps run in order: category, search, sort, page. Sorting is stable, so
/// products that compare equal keep their source order.
pub fn apply_filters(products: &[Product], filters: &ProductFilters) -> SearchResults<Product> {
    let category = filters.active_category();
    let term = filters.active_search();

    let mut matched: Vec<&Product> = products
        .iter()
        .filter(|p| category.map_or(true, |c| p.in_category(c)))
        .filter(|p| term.as_deref().map_or(true, |t| p.matches_term(t)))
        .collect();

    if let Some(sort) = filters.sort_by {
        matched.sort_by(|a, b| sort.compare(a, b));
    }

    let pagination = Pagination::new(
        filters.effective_page(),
        filters.effective_limit(),
        matched.len(),
    );

    let items = matched
        .into_iter()
        .skip(pagination.offset())
        .take(pagination.per_page)
        .cloned()
        .collect();

    SearchResults::new(items, pagination)
}
