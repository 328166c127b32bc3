//! Product records.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// The cart never holds on to a `Product`; it copies the fields it needs
/// into a [`CartItem`](crate::cart::CartItem) when the product is added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Description shown on the detail view and matched by search.
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Image URL.
    pub image: String,
    /// Category name (e.g. "Electronics").
    pub category: String,
    /// Whether the product can currently be bought.
    pub in_stock: bool,
    /// Average rating out of 5, if the product has been rated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl Product {
    /// Create an in-stock product with no description, image or rating.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            image: String::new(),
            category: String::new(),
            in_stock: true,
            rating: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }

    /// Rating used for sorting; unrated products sort as 0.
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Check if the product belongs to a category, ignoring case.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// Check if the (already lowercased) term appears in the name or description.
    pub fn matches_term(&self, term_lower: &str) -> bool {
        self.name.to_lowercase().contains(term_lower)
            || self.description.to_lowercase().contains(term_lower)
    }
}
