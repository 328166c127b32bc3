//! Derived cart values.
//!
//! Selectors are plain functions over a slice of items. [`Memo`] caches the
//! last result per cart snapshot; results never depend on the cache.

use std::fmt;
use std::sync::Arc;

use crate::cart::CartItem;
use crate::money::{Currency, Money};

/// Sum of `price * qty`.
///
/// The result is in the currency of the first item (USD for an empty
/// list). Saturates instead of overflowing.
pub fn select_subtotal(items: &[CartItem]) -> Money {
    let currency = items
        .first()
        .map(|i| i.price.currency)
        .unwrap_or(Currency::USD);

    items
        .iter()
        .fold(Money::zero(currency), |acc, i| acc.saturating_add(&i.line_total()))
}

/// Sum of quantities. Saturates instead of overflowing.
pub fn select_total_qty(items: &[CartItem]) -> i64 {
    items.iter().fold(0_i64, |acc, i| acc.saturating_add(i.qty))
}

/// Caches a selector's result for the last snapshot it was asked about.
///
/// Snapshots are compared by pointer. The memo keeps its own reference to
/// the cached snapshot, so the allocation cannot be freed and reused for a
/// different cart while the entry is live.
pub struct Memo<T, F = fn(&[CartItem]) -> T> {
    select: F,
    last: Option<(Arc<[CartItem]>, T)>,
}

impl Memo<Money> {
    /// Memoized [`select_subtotal`].
    pub fn subtotal() -> Self {
        Self::new(select_subtotal)
    }
}

impl Memo<i64> {
    /// Memoized [`select_total_qty`].
    pub fn total_qty() -> Self {
        Self::new(select_total_qty)
    }
}

impl<T, F> Memo<T, F>
where
    T: Clone,
    F: Fn(&[CartItem]) -> T,
{
    pub fn new(select: F) -> Self {
        Self { select, last: None }
    }

    /// The selector's value for `snapshot`, recomputed only when the
    /// snapshot differs from the previous call.
    pub fn get(&mut self, snapshot: &Arc<[CartItem]>) -> T {
        if let Some((cached, value)) = &self.last {
            if Arc::ptr_eq(cached, snapshot) {
                return value.clone();
            }
        }
        let value = (self.select)(&snapshot[..]);
        self.last = Some((Arc::clone(snapshot), value.clone()));
        value
    }

    /// Whether the cached value belongs to `snapshot`.
    pub fn is_cached_for(&self, snapshot: &Arc<[CartItem]>) -> bool {
        self.last
            .as_ref()
            .is_some_and(|(cached, _)| Arc::ptr_eq(cached, snapshot))
    }

    /// Drop the cached value.
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Memo<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memo")
            .field("cached", &self.last.as_ref().map(|(_, v)| v))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::ids::ProductId;
    use std::cell::Cell;

    fn two_items() -> Vec<CartItem> {
        vec![
            CartItem::new("1", "A", Money::usd(29.99), 2),
            CartItem::new("2", "B", Money::usd(19.99), 1),
        ]
    }

    #[test]
    fn test_subtotal_is_exact() {
        let subtotal = select_subtotal(&two_items());
        assert_eq!(subtotal.amount_cents, 7997);
        assert_eq!(subtotal.display(), "$79.97");
        assert_eq!(select_total_qty(&two_items()), 3);
    }

    #[test]
    fn test_empty_selectors() {
        assert_eq!(select_subtotal(&[]), Money::zero(Currency::USD));
        assert_eq!(select_total_qty(&[]), 0);
    }

    #[test]
    fn test_subtotal_uses_item_currency() {
        let items = vec![CartItem::new("1", "A", Money::new(500, Currency::EUR), 3)];
        let subtotal = select_subtotal(&items);
        assert_eq!(subtotal.currency, Currency::EUR);
        assert_eq!(subtotal.amount_cents, 1500);
    }

    #[test]
    fn test_selectors_saturate() {
        let items = vec![
            CartItem::new("1", "A", Money::usd(1.0), i64::MAX),
            CartItem::new("2", "B", Money::usd(1.0), i64::MAX),
        ];
        assert_eq!(select_total_qty(&items), i64::MAX);
        assert_eq!(select_subtotal(&items).amount_cents, i64::MAX);
    }

    #[test]
    fn test_memo_recomputes_only_on_new_snapshot() {
        let calls = Cell::new(0);
        let mut memo = Memo::new(|items: &[CartItem]| {
            calls.set(calls.get() + 1);
            select_total_qty(items)
        });

        let mut cart = Cart::from_items(two_items());
        let first = cart.snapshot();
        assert_eq!(memo.get(&first), 3);
        assert_eq!(memo.get(&cart.snapshot()), 3);
        assert_eq!(calls.get(), 1);

        // A no-op keeps the snapshot, so the cache still applies.
        cart.remove(&ProductId::new("missing"));
        assert!(memo.is_cached_for(&cart.snapshot()));

        cart.set_qty(&ProductId::new("2"), 5);
        assert_eq!(memo.get(&cart.snapshot()), 7);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_memo_matches_plain_selector() {
        let mut memo = Memo::subtotal();
        let mut cart = Cart::new();

        for item in two_items() {
            cart.add(item);
            assert_eq!(memo.get(&cart.snapshot()), select_subtotal(cart.items()));
        }
        cart.clear();
        assert_eq!(memo.get(&cart.snapshot()), Money::zero(Currency::USD));

        memo.invalidate();
        assert!(!memo.is_cached_for(&cart.snapshot()));
    }
}
