//! Cart line items.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;

/// One line of the cart.
///
/// Title, price and image are copied from the product when it is added and
/// never re-synced with the catalog afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Id of the product this line was created from.
    pub id: ProductId,
    /// Product name at add time.
    pub title: String,
    /// Unit price at add time.
    pub price: Money,
    /// Quantity. Always at least 1 while the item is in a cart.
    pub qty: i64,
    /// Product image at add time.
    #[serde(default)]
    pub image_url: String,
}

impl CartItem {
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: Money, qty: i64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            qty,
            image_url: String::new(),
        }
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Snapshot a product into a line item.
    pub fn from_product(product: &Product, qty: i64) -> Self {
        Self {
            id: product.id.clone(),
            title: product.name.clone(),
            price: product.price,
            qty,
            image_url: product.image.clone(),
        }
    }

    /// Price times quantity, clamped at the `i64` bounds.
    pub fn line_total(&self) -> Money {
        self.price.saturating_multiply(self.qty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_product_snapshots_fields() {
        let product = Product::new("7", "Yoga Mat", Money::usd(29.99))
            .with_image("https://example.com/mat.jpg")
            .with_category("Sports");
        let item = CartItem::from_product(&product, 3);

        assert_eq!(item.id.as_str(), "7");
        assert_eq!(item.title, "Yoga Mat");
        assert_eq!(item.price.amount_cents, 2999);
        assert_eq!(item.qty, 3);
        assert_eq!(item.image_url, "https://example.com/mat.jpg");
        assert_eq!(item.line_total().amount_cents, 8997);
    }

    #[test]
    fn test_serde_layout() {
        let item = CartItem::new("1", "Wireless Headphones", Money::usd(79.99), 1)
            .with_image("img.jpg");
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["id"], "1");
        assert_eq!(json["imageUrl"], "img.jpg");
        assert_eq!(json["qty"], 1);
        assert_eq!(json["price"]["amount_cents"], 7999);
    }
}
