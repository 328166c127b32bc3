//! Catalog search module.
//!
//! Filtering, sorting and pagination over an in-memory product list, plus
//! the debouncer that sits between the search box and the active filter.

mod debounce;
mod filter;
mod results;
mod sort;

pub use debounce::{debounce, DebounceSender, Debouncer, SEARCH_DEBOUNCE};
pub use filter::{apply_filters, ProductFilters, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use results::{Pagination, SearchResults};
pub use sort::{ParseSortError, SortOption};
