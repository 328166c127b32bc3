//! Snapshot and restore of the cart.
//!
//! Only the item list is persisted, as `{"items": [...]}` under
//! [`CART_STORAGE_KEY`]. Restoring happens once; after that every mutation
//! that changes the cart is saved, best effort.

use std::ops::Deref;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartItem};
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Storage key the cart is persisted under.
pub const CART_STORAGE_KEY: &str = "persist:cart";

/// The persisted shape of the cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedCartState {
    pub items: Vec<CartItem>,
}

/// Somewhere the cart's items can be saved and loaded.
pub trait CartStorage {
    /// Load the saved items. `Ok(None)` means nothing was saved yet.
    fn load(&self) -> Result<Option<Vec<CartItem>>, CommerceError>;

    /// Replace the saved items.
    fn save(&self, items: &[CartItem]) -> Result<(), CommerceError>;
}

impl<S: CartStorage + ?Sized> CartStorage for &S {
    fn load(&self) -> Result<Option<Vec<CartItem>>, CommerceError> {
        (**self).load()
    }

    fn save(&self, items: &[CartItem]) -> Result<(), CommerceError> {
        (**self).save(items)
    }
}

/// In-process storage holding the serialized state as a JSON string.
#[derive(Debug, Default)]
pub struct MemoryCartStorage {
    raw: RwLock<Option<String>>,
}

impl MemoryCartStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with raw text, which need not be valid JSON.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: RwLock::new(Some(raw.into())),
        }
    }

    /// The raw stored text, if anything was saved.
    pub fn raw(&self) -> Option<String> {
        self.raw.read().ok().and_then(|raw| raw.clone())
    }
}

impl CartStorage for MemoryCartStorage {
    fn load(&self) -> Result<Option<Vec<CartItem>>, CommerceError> {
        let raw = self
            .raw
            .read()
            .map_err(|e| CommerceError::Storage(e.to_string()))?;
        match raw.as_deref() {
            Some(text) => {
                let state: PersistedCartState = serde_json::from_str(text)?;
                Ok(Some(state.items))
            }
            None => Ok(None),
        }
    }

    fn save(&self, items: &[CartItem]) -> Result<(), CommerceError> {
        let text = serde_json::to_string(&PersistedCartState {
            items: items.to_vec(),
        })?;
        let mut raw = self
            .raw
            .write()
            .map_err(|e| CommerceError::Storage(e.to_string()))?;
        *raw = Some(text);
        Ok(())
    }
}

#[cfg(feature = "storage")]
impl CartStorage for turbo_cache::Cache {
    fn load(&self) -> Result<Option<Vec<CartItem>>, CommerceError> {
        let state: Option<PersistedCartState> = self.get(CART_STORAGE_KEY)?;
        Ok(state.map(|s| s.items))
    }

    fn save(&self, items: &[CartItem]) -> Result<(), CommerceError> {
        self.set(
            CART_STORAGE_KEY,
            &PersistedCartState {
                items: items.to_vec(),
            },
        )?;
        Ok(())
    }
}

/// A [`Cart`] that saves itself to a [`CartStorage`] after every change.
///
/// Reads go through `Deref<Target = Cart>`. Storage failures never reach
/// the caller: a failed restore starts an empty cart and a failed save is
/// logged and dropped.
#[derive(Debug)]
pub struct PersistedCart<S> {
    cart: Cart,
    storage: S,
}

impl<S: CartStorage> PersistedCart<S> {
    /// Load the cart from storage.
    pub fn restore(storage: S) -> Self {
        let cart = match storage.load() {
            Ok(Some(items)) => {
                let stored = items.len();
                let cart = Cart::from_items(items);
                if cart.len() != stored {
                    tracing::warn!(
                        stored,
                        restored = cart.len(),
                        "dropped invalid or duplicate items from stored cart"
                    );
                }
                tracing::debug!(items = cart.len(), "restored cart");
                cart
            }
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "could not restore cart, starting empty");
                Cart::new()
            }
        };
        Self { cart, storage }
    }

    /// Wrap an existing cart without loading anything.
    pub fn with_cart(cart: Cart, storage: S) -> Self {
        Self { cart, storage }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_inner(self) -> (Cart, S) {
        (self.cart, self.storage)
    }

    pub fn add(&mut self, item: CartItem) {
        let before = self.cart.snapshot();
        self.cart.add(item);
        self.save_if_changed(&before);
    }

    pub fn remove(&mut self, id: &ProductId) {
        let before = self.cart.snapshot();
        self.cart.remove(id);
        self.save_if_changed(&before);
    }

    pub fn set_qty(&mut self, id: &ProductId, qty: i64) {
        let before = self.cart.snapshot();
        self.cart.set_qty(id, qty);
        self.save_if_changed(&before);
    }

    pub fn clear(&mut self) {
        let before = self.cart.snapshot();
        self.cart.clear();
        self.save_if_changed(&before);
    }

    /// Save the current items now. Returns whether the save succeeded.
    pub fn flush(&self) -> bool {
        match self.storage.save(self.cart.items()) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "failed to save cart");
                false
            }
        }
    }

    fn save_if_changed(&self, before: &Arc<[CartItem]>) {
        if !Arc::ptr_eq(before, &self.cart.snapshot()) {
            self.flush();
        }
    }
}

impl<S> Deref for PersistedCart<S> {
    type Target = Cart;

    fn deref(&self) -> &Cart {
        &self.cart
    }
}
