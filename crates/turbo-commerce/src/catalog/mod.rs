//! Product catalog module.
//!
//! Contains product and category records plus the [`ProductSource`] seam
//! the storefront reads them through.

mod category;
pub(crate) mod fixtures;
mod product;
mod source;

pub use category::{Category, ALL_CATEGORIES_SLUG};
pub use product::Product;
pub use source::{CatalogLatency, MockCatalog, ProductSource};
