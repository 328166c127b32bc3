//! Commerce error types.
//!
//! The cart store itself never fails; these errors come from the layers
//! around it (catalog lookups, checkout, persistence).

use thiserror::Error;

use crate::checkout::ValidationErrors;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product with id {0} not found")]
    ProductNotFound(String),

    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Checkout form failed validation.
    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    /// The order gateway rejected or failed the submission.
    #[error("Error placing order: {0}")]
    OrderSubmission(String),

    /// Persisted state could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<ValidationErrors> for CommerceError {
    fn from(e: ValidationErrors) -> Self {
        CommerceError::Validation(e)
    }
}

#[cfg(feature = "storage")]
impl From<turbo_cache::CacheError> for CommerceError {
    fn from(e: turbo_cache::CacheError) -> Self {
        CommerceError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}
