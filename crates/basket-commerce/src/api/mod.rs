//! Remote lookups the cart store depends on.
//!
//! Both are read-only. The store never retries or caches their answers.

mod http;

use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::{Product, Stock};
use crate::error::LookupError;
use crate::ids::ProductId;

pub use http::HttpStorefrontApi;

/// Live stock levels.
#[async_trait]
pub trait StockLookup: Send + Sync {
    /// Current stock record for a product.
    async fn stock(&self, product_id: ProductId) -> Result<Stock, LookupError>;
}

/// Product metadata.
#[async_trait]
pub trait CatalogLookup: Send + Sync {
    /// Catalog entry for a product, without quantity.
    async fn product(&self, product_id: ProductId) -> Result<Product, LookupError>;
}

/// Both lookups, as served by one storefront API.
pub trait StorefrontApi: StockLookup + CatalogLookup {}

impl<T: StockLookup + CatalogLookup> StorefrontApi for T {}

#[async_trait]
impl<T: StockLookup + ?Sized> StockLookup for Arc<T> {
    async fn stock(&self, product_id: ProductId) -> Result<Stock, LookupError> {
        (**self).stock(product_id).await
    }
}

#[async_trait]
impl<T: CatalogLookup + ?Sized> CatalogLookup for Arc<T> {
    async fn product(&self, product_id: ProductId) -> Result<Product, LookupError> {
        (**self).product(product_id).await
    }
}
