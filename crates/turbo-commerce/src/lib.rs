//! Storefront core for Turbo Shop.
//!
//! - **Cart**: the cart store, its selectors and snapshot persistence
//! - **Catalog**: products, categories and the product source seam
//! - **Search**: filters, sorting, pagination and input debouncing
//! - **Checkout**: form validation and order placement
//!
//! # Example
//!
//! ```rust
//! use turbo_commerce::prelude::*;
//!
//! let headphones = Product::new("1", "Wireless Headphones", Money::usd(29.99));
//! let watch = Product::new("2", "Smart Watch", Money::usd(19.99));
//!
//! let mut cart = PersistedCart::restore(MemoryCartStorage::new());
//! cart.add(CartItem::from_product(&headphones, 2));
//! cart.add(CartItem::from_product(&watch, 1));
//!
//! assert_eq!(cart.subtotal().display(), "$79.97");
//! assert_eq!(cart.total_qty(), 3);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Cart
    pub use crate::cart::{
        select_subtotal, select_total_qty, Cart, CartItem, CartStorage, Memo, MemoryCartStorage,
        PersistedCart,
    };

    // Catalog
    pub use crate::catalog::{Category, MockCatalog, Product, ProductSource};

    // Search
    pub use crate::search::{
        apply_filters, debounce, Pagination, ProductFilters, SearchResults, SortOption,
        SEARCH_DEBOUNCE,
    };

    // Checkout
    pub use crate::checkout::{
        place_order, CheckoutField, CheckoutForm, MockOrderGateway, OrderConfirmation,
        OrderGateway, ValidationErrors,
    };
}
