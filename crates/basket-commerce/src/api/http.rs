//! Storefront API over HTTP.

use async_trait::async_trait;
use basket_data::{FetchClient, FetchError};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{CatalogLookup, StockLookup};
use crate::catalog::{Product, Stock};
use crate::config::StoreConfig;
use crate::error::LookupError;
use crate::ids::ProductId;

/// Lookups against `GET /stock/{id}` and `GET /products/{id}`.
#[derive(Debug, Clone)]
pub struct HttpStorefrontApi {
    client: FetchClient,
}

impl HttpStorefrontApi {
    /// Use a preconfigured client; paths are resolved against its base URL.
    pub fn new(client: FetchClient) -> Self {
        Self { client }
    }

    /// Build a client from the store configuration.
    pub fn from_config(config: &StoreConfig) -> Result<Self, FetchError> {
        let client = FetchClient::with_timeout(config.request_timeout())?
            .with_base_url(config.api_base_url.clone())
            .with_default_header("Accept", "application/json");
        Ok(Self::new(client))
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        path: String,
        product_id: ProductId,
    ) -> Result<T, LookupError> {
        debug!(%path, %product_id, "storefront lookup");
        match self.client.get_json(&path).await {
            Ok(value) => Ok(value),
            Err(e) if e.is_not_found() => Err(LookupError::NotFound(product_id)),
            Err(e) => Err(e.into()),
        }
    }
}

fn check_id(requested: ProductId, returned: ProductId) -> Result<(), LookupError> {
    if requested == returned {
        Ok(())
    } else {
        Err(LookupError::Malformed(format!(
            "asked for product {}, got {}",
            requested, returned
        )))
    }
}

#[async_trait]
impl StockLookup for HttpStorefrontApi {
    async fn stock(&self, product_id: ProductId) -> Result<Stock, LookupError> {
        let stock: Stock = self.fetch(format!("/stock/{}", product_id), product_id).await?;
        check_id(product_id, stock.id)?;
        Ok(stock)
    }
}

#[async_trait]
impl CatalogLookup for HttpStorefrontApi {
    async fn product(&self, product_id: ProductId) -> Result<Product, LookupError> {
        let product: Product = self
            .fetch(format!("/products/{}", product_id), product_id)
            .await?;
        check_id(product_id, product.id)?;
        Ok(product)
    }
}
