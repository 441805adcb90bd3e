//! Client-side shopping cart for Basket storefronts.
//!
//! This crate provides:
//!
//! - **Catalog**: `Product` metadata and `Stock` records served by the API
//! - **Cart**: an ordered, one-line-per-product `Cart` of `LineItem`s
//! - **Api**: `StockLookup` / `CatalogLookup` traits and their HTTP client
//! - **Store**: `CartStore`, the shared cart state with persistence and
//!   user notifications
//!
//! # Example
//!
//! ```rust,ignore
//! use basket_commerce::prelude::*;
//! use basket_cache::{Cache, FileStore};
//!
//! let config = StoreConfig::default();
//! let cache = Cache::new(FileStore::open(".basket")?);
//! let store = CartStore::from_config(&config, cache, Arc::new(LogNotifier))?;
//!
//! store.add_product(ProductId::new(7)).await?;
//! store
//!     .update_product_amount(UpdateProductAmount::new(ProductId::new(7), -1))
//!     .await?;
//! store.remove_product(ProductId::new(7));
//!
//! println!("{} items", store.cart().item_count());
//! ```

pub mod error;
pub mod ids;

pub mod api;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod store;

pub use error::{CartError, LookupError, Operation};
pub use ids::ProductId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CartError, LookupError, Operation};
    pub use crate::ids::ProductId;

    // Catalog
    pub use crate::catalog::{Product, Stock};

    // Cart
    pub use crate::cart::{Cart, LineItem};

    // Api
    pub use crate::api::{CatalogLookup, HttpStorefrontApi, StockLookup, StorefrontApi};

    // Store
    pub use crate::config::StoreConfig;
    pub use crate::store::{
        CartPersistence, CartStore, LogNotifier, Notifier, RecordingNotifier, StoreError,
        UpdateProductAmount,
    };
}
