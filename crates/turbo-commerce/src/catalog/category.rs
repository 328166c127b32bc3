//! Category records.

use crate::catalog::Product;
use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// Slug of the pseudo-category that matches every product.
pub const ALL_CATEGORIES_SLUG: &str = "all";

/// A product category as shown in the catalog sidebar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// URL-friendly slug; also the value used in product filters.
    pub slug: String,
    /// Number of products in this category.
    pub product_count: usize,
}

impl Category {
    /// Create a category with no products counted yet.
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            slug: slugify(&name),
            name,
            product_count: 0,
        }
    }

    /// Check if this is the "All" pseudo-category.
    pub fn is_all(&self) -> bool {
        self.slug == ALL_CATEGORIES_SLUG
    }

    /// Build the category list for a set of products.
    ///
    /// The "All" pseudo-category comes first, followed by one entry per
    /// distinct product category in order of first appearance.
    pub fn from_products(products: &[Product]) -> Vec<Category> {
        let mut all = Category::new("1", "All");
        all.product_count = products.len();

        let mut categories = vec![all];
        for product in products {
            match categories
                .iter_mut()
                .skip(1)
                .find(|c| c.name.eq_ignore_ascii_case(&product.category))
            {
                Some(existing) => existing.product_count += 1,
                None => {
                    let id = (categories.len() + 1).to_string();
                    let mut category = Category::new(id, product.category.clone());
                    category.product_count = 1;
                    categories.push(category);
                }
            }
        }
        categories
    }
}

fn slugify(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_slugify() {
        assert_eq!(Category::new("1", "All").slug, "all");
        assert_eq!(Category::new("2", "Home & Garden").slug, "home-garden");
    }

    #[test]
    fn test_from_products_counts() {
        let products = vec![
            Product::new("1", "A", Money::usd(1.0)).with_category("Electronics"),
            Product::new("2", "B", Money::usd(1.0)).with_category("Sports"),
            Product::new("3", "C", Money::usd(1.0)).with_category("electronics"),
        ];

        let categories = Category::from_products(&products);
        assert_eq!(categories.len(), 3);
        assert!(categories[0].is_all());
        assert_eq!(categories[0].product_count, 3);
        assert_eq!(categories[1].name, "Electronics");
        assert_eq!(categories[1].product_count, 2);
        assert_eq!(categories[2].slug, "sports");
        assert_eq!(categories[2].product_count, 1);
    }
}
