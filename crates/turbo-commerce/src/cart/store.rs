//! The cart store and its four mutations.

use std::sync::Arc;

use crate::cart::{select_subtotal, select_total_qty, CartItem};
use crate::ids::ProductId;
use crate::money::Money;

/// Ordered list of line items, unique by product id.
///
/// None of the operations can fail or panic. Every item in the cart has
/// `qty >= 1`.
///
/// ```
/// use turbo_commerce::cart::{Cart, CartItem};
/// use turbo_commerce::money::Money;
///
/// let mut cart = Cart::new();
/// cart.add(CartItem::new("1", "Wireless Headphones", Money::usd(29.99), 2));
/// cart.add(CartItem::new("2", "Smart Watch", Money::usd(19.99), 1));
///
/// assert_eq!(cart.subtotal().display(), "$79.97");
/// assert_eq!(cart.total_qty(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    items: Arc<[CartItem]>,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }

    /// Build a cart by adding each item in order.
    ///
    /// Duplicates are merged and items with `qty <= 0` are dropped, exactly
    /// as [`Cart::add`] would.
    pub fn from_items(items: impl IntoIterator<Item = CartItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            cart.add(item);
        }
        cart
    }

    /// The current items, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// The current snapshot. It stays the same allocation until a mutation
    /// actually changes the cart.
    pub fn snapshot(&self) -> Arc<[CartItem]> {
        Arc::clone(&self.items)
    }

    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add an item, merging quantities when the id is already present.
    ///
    /// A merged line keeps the title, price and image it was first added
    /// with. Quantities saturate at `i64::MAX`. Items with `qty <= 0` are
    /// ignored.
    pub fn add(&mut self, item: CartItem) {
        if item.qty <= 0 {
            tracing::debug!(id = %item.id, qty = item.qty, "ignoring add with non-positive quantity");
            return;
        }

        match self.position(&item.id) {
            Some(index) => {
                let current = self.items[index].qty;
                let qty = current.saturating_add(item.qty);
                if qty == current {
                    return;
                }
                let mut next = self.items.to_vec();
                next[index].qty = qty;
                tracing::debug!(id = %item.id, qty, "merged cart item");
                self.replace(next);
            }
            None => {
                let mut next = Vec::with_capacity(self.items.len() + 1);
                next.extend_from_slice(&self.items);
                tracing::debug!(id = %item.id, qty = item.qty, "added cart item");
                next.push(item);
                self.replace(next);
            }
        }
    }

    /// Remove the item with `id`. Does nothing if it is not in the cart.
    pub fn remove(&mut self, id: &ProductId) {
        if self.position(id).is_none() {
            return;
        }
        let next: Vec<CartItem> = self.items.iter().filter(|i| &i.id != id).cloned().collect();
        tracing::debug!(%id, "removed cart item");
        self.replace(next);
    }

    /// Set the quantity of an item. `qty <= 0` removes it; unknown ids are
    /// ignored.
    pub fn set_qty(&mut self, id: &ProductId, qty: i64) {
        let Some(index) = self.position(id) else {
            return;
        };
        if qty <= 0 {
            self.remove(id);
            return;
        }
        if self.items[index].qty == qty {
            return;
        }
        let mut next = self.items.to_vec();
        next[index].qty = qty;
        tracing::debug!(%id, qty, "set cart item quantity");
        self.replace(next);
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        tracing::debug!(items = self.items.len(), "cleared cart");
        self.replace(Vec::new());
    }

    /// Sum of `price * qty` over all items.
    pub fn subtotal(&self) -> Money {
        select_subtotal(&self.items)
    }

    /// Sum of quantities over all items.
    pub fn total_qty(&self) -> i64 {
        select_total_qty(&self.items)
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.items.iter().position(|i| &i.id == id)
    }

    fn replace(&mut self, items: Vec<CartItem>) {
        self.items = Arc::from(items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: f64, qty: i64) -> CartItem {
        CartItem::new(id, format!("Product {id}"), Money::usd(price), qty)
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal().amount_cents, 0);
        assert_eq!(cart.total_qty(), 0);
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut cart = Cart::new();
        cart.add(item("3", 10.0, 1));
        cart.add(item("1", 10.0, 1));
        cart.add(item("2", 10.0, 1));

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_add_same_id_merges_and_keeps_first_snapshot() {
        let mut cart = Cart::new();
        cart.add(CartItem::new("1", "Old Title", Money::usd(10.0), 1).with_image("old.jpg"));
        cart.add(CartItem::new("1", "New Title", Money::usd(99.0), 4).with_image("new.jpg"));

        assert_eq!(cart.len(), 1);
        let line = &cart.items()[0];
        assert_eq!(line.qty, 5);
        assert_eq!(line.title, "Old Title");
        assert_eq!(line.price, Money::usd(10.0));
        assert_eq!(line.image_url, "old.jpg");
    }

    #[test]
    fn test_add_non_positive_qty_is_noop() {
        let mut cart = Cart::new();
        cart.add(item("1", 5.0, 2));
        let before = cart.snapshot();

        cart.add(item("1", 5.0, 0));
        cart.add(item("2", 5.0, -3));

        assert!(Arc::ptr_eq(&before, &cart.snapshot()));
        assert_eq!(cart.total_qty(), 2);
    }

    #[test]
    fn test_add_saturates() {
        let mut cart = Cart::new();
        cart.add(item("1", 0.01, i64::MAX - 1));
        cart.add(item("1", 0.01, 10));
        assert_eq!(cart.items()[0].qty, i64::MAX);

        let before = cart.snapshot();
        cart.add(item("1", 0.01, 1));
        assert!(Arc::ptr_eq(&before, &cart.snapshot()));
    }

    #[test]
    fn test_remove() {
        let mut cart = Cart::new();
        cart.add(item("1", 5.0, 1));
        cart.add(item("2", 5.0, 1));

        cart.remove(&ProductId::new("1"));
        assert_eq!(cart.len(), 1);
        assert!(cart.get(&ProductId::new("1")).is_none());
        assert!(cart.get(&ProductId::new("2")).is_some());
    }

    #[test]
    fn test_remove_absent_keeps_snapshot() {
        let mut cart = Cart::new();
        cart.add(item("1", 5.0, 1));
        let before = cart.snapshot();

        cart.remove(&ProductId::new("42"));
        assert!(Arc::ptr_eq(&before, &cart.snapshot()));
    }

    #[test]
    fn test_set_qty_sets_exactly() {
        let mut cart = Cart::new();
        cart.add(item("1", 5.0, 3));
        cart.set_qty(&ProductId::new("1"), 7);
        assert_eq!(cart.items()[0].qty, 7);
    }

    #[test]
    fn test_set_qty_non_positive_removes() {
        let mut cart = Cart::new();
        cart.add(item("1", 5.0, 3));
        cart.add(item("2", 5.0, 3));

        cart.set_qty(&ProductId::new("1"), 0);
        cart.set_qty(&ProductId::new("2"), -5);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_qty_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(item("1", 5.0, 3));
        let before = cart.snapshot();

        cart.set_qty(&ProductId::new("9"), 4);
        cart.set_qty(&ProductId::new("1"), 3);
        assert!(Arc::ptr_eq(&before, &cart.snapshot()));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(item("1", 29.99, 2));
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.subtotal().amount_cents, 0);
        assert_eq!(cart.total_qty(), 0);
    }

    #[test]
    fn test_from_items_merges_and_drops_invalid() {
        let cart = Cart::from_items(vec![
            item("1", 5.0, 1),
            item("2", 5.0, 0),
            item("1", 5.0, 2),
        ]);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].qty, 3);
    }
}
