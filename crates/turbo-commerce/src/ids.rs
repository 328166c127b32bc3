//! String identifiers for products, categories and orders.
//!
//! Each kind of id is its own type, so an order id can never be looked up
//! as a product.

use std::borrow::Borrow;
use std::fmt;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use rand::Rng;
use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident => $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[doc = concat!("A fresh random id of the form `", $prefix, "_<base64url>`.")]
            pub fn generate() -> Self {
                Self(random_id($prefix))
            }

            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id! {
    /// Identifies a catalog product, and the cart line created from it.
    ProductId => "prod"
}

define_id! {
    /// Identifies a catalog category.
    CategoryId => "cat"
}

define_id! {
    /// Identifies a placed order.
    OrderId => "ord"
}

/// `{prefix}_` followed by 18 random bytes in unpadded base64url.
fn random_id(prefix: &str) -> String {
    let bytes: [u8; 18] = rand::thread_rng().gen();
    format!("{prefix}_{}", URL_SAFE_NO_PAD.encode(bytes))
}
