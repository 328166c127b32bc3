//! Product source seam and the in-memory demo implementation.

use std::time::Duration;

use async_trait::async_trait;

use crate::catalog::{fixtures, Category, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::search::{apply_filters, ProductFilters, SearchResults};

/// Where the storefront reads products from.
///
/// The cart only ever sees snapshot values copied out of the records this
/// returns.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// List one page of products matching the filters.
    async fn list_products(
        &self,
        filters: &ProductFilters,
    ) -> Result<SearchResults<Product>, CommerceError>;

    /// Fetch a single product.
    ///
    /// Returns [`CommerceError::ProductNotFound`] for unknown ids.
    async fn get_product(&self, id: &ProductId) -> Result<Product, CommerceError>;

    /// List the categories, "All" first.
    async fn list_categories(&self) -> Result<Vec<Category>, CommerceError>;
}

/// Simulated network latency for [`MockCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogLatency {
    /// Delay before a product listing resolves.
    pub list: Duration,
    /// Delay before a single product or the category list resolves.
    pub lookup: Duration,
}

impl CatalogLatency {
    /// No delay at all.
    pub const NONE: CatalogLatency = CatalogLatency {
        list: Duration::ZERO,
        lookup: Duration::ZERO,
    };

    /// Same delay for every call.
    pub fn uniform(delay: Duration) -> Self {
        Self {
            list: delay,
            lookup: delay,
        }
    }
}

impl Default for CatalogLatency {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(500),
            lookup: Duration::from_millis(300),
        }
    }
}

/// In-memory product source over a static product list.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    products: Vec<Product>,
    latency: CatalogLatency,
}

impl MockCatalog {
    /// The built-in demo catalog with default latency.
    pub fn demo() -> Self {
        Self::new(fixtures::demo_products())
    }

    /// A catalog over arbitrary products with default latency.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            latency: CatalogLatency::default(),
        }
    }

    /// Override the simulated latency.
    pub fn with_latency(mut self, latency: CatalogLatency) -> Self {
        self.latency = latency;
        self
    }

    /// All products, unfiltered.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    async fn simulate(delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl ProductSource for MockCatalog {
    async fn list_products(
        &self,
        filters: &ProductFilters,
    ) -> Result<SearchResults<Product>, CommerceError> {
        Self::simulate(self.latency.list).await;
        let results = apply_filters(&self.products, filters);
        tracing::debug!(
            category = ?filters.category,
            search = ?filters.search,
            total = results.pagination.total,
            "listed products"
        );
        Ok(results)
    }

    async fn get_product(&self, id: &ProductId) -> Result<Product, CommerceError> {
        Self::simulate(self.latency.lookup).await;
        self.products
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CommerceError> {
        Self::simulate(self.latency.lookup).await;
        Ok(Category::from_products(&self.products))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SortOption;

    fn catalog() -> MockCatalog {
        MockCatalog::demo().with_latency(CatalogLatency::NONE)
    }

    #[tokio::test]
    async fn test_demo_catalog_size() {
        let results = catalog()
            .list_products(&ProductFilters::default())
            .await
            .unwrap();
        assert_eq!(results.pagination.total, 12);
        assert_eq!(results.len(), 12);
    }

    #[tokio::test]
    async fn test_get_product() {
        let product = catalog().get_product(&ProductId::new("3")).await.unwrap();
        assert_eq!(product.name, "Running Shoes");
    }

    #[tokio::test]
    async fn test_get_missing_product() {
        let err = catalog()
            .get_product(&ProductId::new("999"))
            .await
            .unwrap_err();
        assert!(matches!(err, CommerceError::ProductNotFound(id) if id == "999"));
    }

    #[tokio::test]
    async fn test_categories_are_derived() {
        let categories = catalog().list_categories().await.unwrap();
        let summary: Vec<(&str, usize)> = categories
            .iter()
            .map(|c| (c.slug.as_str(), c.product_count))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("all", 12),
                ("electronics", 5),
                ("sports", 3),
                ("home", 2),
                ("office", 2)
            ]
        );
    }

    #[tokio::test]
    async fn test_listing_applies_filters() {
        let filters = ProductFilters::default()
            .with_category("electronics")
            .with_sort(SortOption::PriceAsc);
        let results = catalog().list_products(&filters).await.unwrap();

        let names: Vec<&str> = results.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Gaming Mouse",
                "Bluetooth Speaker",
                "Mechanical Keyboard",
                "Wireless Headphones",
                "Smart Watch"
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_simulated() {
        let catalog = MockCatalog::demo();
        let started = tokio::time::Instant::now();
        catalog.get_product(&ProductId::new("1")).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(300));
    }
}
