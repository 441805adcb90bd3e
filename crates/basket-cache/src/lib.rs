//! Type-safe key-value persistence layer for Basket.
//!
//! Provides a simple, ergonomic API for keeping small serialized values in a
//! key-value store with automatic JSON serialization.
//!
//! # Example
//!
//! ```rust,ignore
//! use basket_cache::{cache_key, Cache, FileStore, Slot};
//!
//! let cache = Cache::new(FileStore::open(".basket")?);
//!
//! // Store a value
//! cache.set("cart:user123", &cart)?;
//!
//! // Retrieve a value
//! let cart: Option<Cart> = cache.get("cart:user123")?;
//!
//! // Or bind one key as a slot
//! let slot: Slot<Cart> = Slot::new(cache, cache_key!("@Basket", "cart"));
//! slot.store(&cart)?;
//! ```

mod error;
mod kv;
mod slot;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use slot::Slot;
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KeyValueStore, MemoryStore, Slot};
}
