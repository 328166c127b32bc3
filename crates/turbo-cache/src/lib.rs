//! Type-safe local Key-Value storage for the Turbo Shop storefront.
//!
//! Provides a small, ergonomic API for keeping client-side state (the
//! shopping cart, mostly) between runs, with automatic JSON serialization.
//! Two backends are available: an in-memory map for tests and a directory
//! of JSON files for the CLI.
//!
//! # Example
//!
//! ```rust
//! use turbo_cache::{cache_key, Cache};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Prefs {
//!     currency: String,
//! }
//!
//! let cache = Cache::in_memory();
//! let key = cache_key!("prefs", "default");
//!
//! cache.set(&key, &Prefs { currency: "USD".into() }).unwrap();
//! let prefs: Option<Prefs> = cache.get(&key).unwrap();
//! assert_eq!(prefs.unwrap().currency, "USD");
//!
//! cache.delete(&key).unwrap();
//! assert!(!cache.exists(&key).unwrap());
//! ```

mod error;
mod kv;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use store::{FileStore, KvStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KvStore, MemoryStore};
}
