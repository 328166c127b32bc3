//! Shopping cart.
//!
//! The cart is an ordered list of line items held as an immutable snapshot.
//! Mutations that change something install a new snapshot; no-ops keep the
//! old one, so snapshot identity tells callers (selectors, persistence)
//! whether anything happened.

mod item;
mod persist;
mod selectors;
mod store;

pub use item::CartItem;
pub use persist::{CartStorage, MemoryCartStorage, PersistedCart, PersistedCartState, CART_STORAGE_KEY};
pub use selectors::{select_subtotal, select_total_qty, Memo};
pub use store::Cart;
