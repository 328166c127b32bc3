//! Behavioural checks for the cart store, its persistence and checkout.

use std::sync::Arc;

use turbo_commerce::cart::{
    select_subtotal, select_total_qty, Cart, CartItem, Memo, MemoryCartStorage, PersistedCart,
};
use turbo_commerce::catalog::{CatalogLatency, MockCatalog, ProductSource};
use turbo_commerce::checkout::{place_order, CheckoutForm, MockOrderGateway};
use turbo_commerce::{CommerceError, Money, ProductId};

fn item(id: &str, price: f64, qty: i64) -> CartItem {
    CartItem::new(id, format!("Item {id}"), Money::usd(price), qty)
}

fn id(s: &str) -> ProductId {
    ProductId::new(s)
}

#[test]
fn distinct_adds_count_every_item() {
    let quantities = [3, 1, 4, 1, 5, 9, 2, 6];
    let mut cart = Cart::new();
    for (i, qty) in quantities.iter().enumerate() {
        cart.add(item(&i.to_string(), 1.0, *qty));
    }

    assert_eq!(cart.len(), quantities.len());
    assert_eq!(cart.total_qty(), quantities.iter().sum::<i64>());
}

#[test]
fn same_id_merges_quantities() {
    let mut cart = Cart::new();
    cart.add(item("1", 1.0, 1));
    cart.add(item("1", 1.0, 1));

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.items()[0].qty, 2);
}

#[test]
fn add_then_zero_qty_empties_cart() {
    let mut cart = Cart::new();
    cart.add(item("1", 1.0, 1));
    cart.set_qty(&id("1"), 0);
    assert!(cart.is_empty());

    cart.add(item("1", 1.0, 1));
    cart.set_qty(&id("1"), -5);
    assert!(cart.is_empty());
}

#[test]
fn absent_ids_leave_snapshot_alone() {
    let mut cart = Cart::new();
    cart.add(item("1", 1.0, 1));
    let before = cart.snapshot();

    cart.remove(&id("2"));
    cart.set_qty(&id("2"), 10);

    assert!(Arc::ptr_eq(&before, &cart.snapshot()));
}

#[test]
fn subtotal_and_total_qty() {
    let mut cart = Cart::new();
    cart.add(item("1", 29.99, 2));
    cart.add(item("2", 19.99, 1));

    assert_eq!(cart.subtotal(), Money::usd(79.97));
    assert_eq!(cart.total_qty(), 3);

    cart.clear();
    assert!(cart.subtotal().is_zero());
    assert_eq!(cart.total_qty(), 0);
}

#[test]
fn memoized_selectors_track_the_cart() {
    let mut subtotal = Memo::subtotal();
    let mut total_qty = Memo::total_qty();
    let mut cart = Cart::new();

    let ops: Vec<Box<dyn Fn(&mut Cart)>> = vec![
        Box::new(|c: &mut Cart| c.add(item("1", 2.50, 2))),
        Box::new(|c: &mut Cart| c.add(item("2", 1.25, 1))),
        Box::new(|c: &mut Cart| c.set_qty(&id("1"), 5)),
        Box::new(|c: &mut Cart| c.remove(&id("3"))),
        Box::new(|c: &mut Cart| c.remove(&id("2"))),
        Box::new(|c: &mut Cart| c.clear()),
    ];

    for op in ops {
        op(&mut cart);
        let snapshot = cart.snapshot();
        assert_eq!(subtotal.get(&snapshot), select_subtotal(&snapshot));
        assert_eq!(total_qty.get(&snapshot), select_total_qty(&snapshot));
    }
}

#[test]
fn restore_after_save_round_trips() {
    let storage = MemoryCartStorage::new();
    {
        let mut cart = PersistedCart::restore(&storage);
        cart.add(item("1", 29.99, 2));
        cart.add(item("2", 19.99, 1));
        cart.remove(&id("1"));
        cart.add(item("3", 5.00, 4));
    }

    let restored = PersistedCart::restore(&storage);
    let ids: Vec<&str> = restored.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "3"]);
    assert_eq!(restored.total_qty(), 5);
}

#[test]
fn corrupt_storage_starts_empty() {
    for raw in ["", "null", "[]", r#"{"items": 3}"#, r#"{"items": [{"id": 1}]}"#] {
        let cart = PersistedCart::restore(MemoryCartStorage::with_raw(raw));
        assert!(cart.is_empty(), "{raw:?} should restore to an empty cart");
    }
}

#[tokio::test]
async fn catalog_to_checkout() {
    let catalog = MockCatalog::demo().with_latency(CatalogLatency::NONE);
    let storage = MemoryCartStorage::new();
    let mut cart = PersistedCart::restore(&storage);

    let shoes = catalog.get_product(&id("3")).await.unwrap();
    cart.add(CartItem::from_product(&shoes, 1));
    cart.add(CartItem::from_product(&shoes, 1));
    assert_eq!(cart.total_qty(), 2);

    let form = CheckoutForm {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        address: "12 Analytical St".into(),
        city: "London".into(),
        zip_code: "N1".into(),
        country: "UK".into(),
    };

    let failed = place_order(&mut cart, &form, &MockOrderGateway::failing("timeout")).await;
    assert!(matches!(failed, Err(CommerceError::OrderSubmission(_))));
    assert_eq!(PersistedCart::restore(&storage).total_qty(), 2);

    let gateway = MockOrderGateway::new().with_latency(std::time::Duration::ZERO);
    let confirmation = place_order(&mut cart, &form, &gateway).await.unwrap();
    assert_eq!(confirmation.items[0].title, shoes.name);
    assert_eq!(confirmation.subtotal, shoes.price.saturating_multiply(2));
    assert!(cart.is_empty());
    assert!(PersistedCart::restore(&storage).is_empty());
}

#[cfg(feature = "storage")]
mod cache_storage {
    use super::*;
    use turbo_cache::Cache;
    use turbo_commerce::cart::{PersistedCartState, CART_STORAGE_KEY};

    #[test]
    fn cart_is_saved_under_fixed_key() {
        let cache = Cache::in_memory();
        let mut cart = PersistedCart::restore(&cache);
        cart.add(item("1", 9.99, 3));

        let state: PersistedCartState = cache.get(CART_STORAGE_KEY).unwrap().unwrap();
        assert_eq!(state.items, vec![item("1", 9.99, 3)]);

        let restored = PersistedCart::restore(&cache);
        assert_eq!(restored.items(), cart.items());
    }

    #[test]
    fn wrong_shape_in_cache_starts_empty() {
        let cache = Cache::in_memory();
        cache.set(CART_STORAGE_KEY, "not a cart").unwrap();
        assert!(PersistedCart::restore(&cache).is_empty());
    }
}
