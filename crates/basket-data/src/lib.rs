//! HTTP client utilities for Basket.
//!
//! A thin GET client over `reqwest` with base-URL resolution, default
//! headers and JSON decoding.
//!
//! # Example
//!
//! ```rust,ignore
//! use basket_data::FetchClient;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Stock {
//!     id: u64,
//!     amount: i64,
//! }
//!
//! let client = FetchClient::new()?.with_base_url("http://localhost:3333");
//!
//! let stock: Stock = client.get_json("/stock/1").await?;
//! ```

mod error;
mod response;

use std::collections::HashMap;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

pub use error::FetchError;
pub use response::Response;

/// HTTP client for making outbound requests.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: reqwest::Client,
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
}

impl FetchClient {
    /// Create a new HTTP client without a request timeout.
    pub fn new() -> Result<Self, FetchError> {
        Self::build(None)
    }

    /// Create a client whose requests fail with [`FetchError::Timeout`]
    /// after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        Self::build(Some(timeout))
    }

    fn build(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| FetchError::RequestError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: None,
            default_headers: HashMap::new(),
        })
    }

    /// Prepend `base_url` to every relative path.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a header sent with every request.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// The configured base URL, if any.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Resolve `path` against the base URL. Absolute URLs pass through.
    pub fn resolve(&self, path: &str) -> String {
        match &self.base_url {
            Some(base) if !(path.starts_with("http://") || path.starts_with("https://")) => {
                format!(
                    "{}/{}",
                    base.trim_end_matches('/'),
                    path.trim_start_matches('/')
                )
            }
            _ => path.to_string(),
        }
    }

    /// GET `path` and buffer the response, whatever its status.
    pub async fn get(&self, path: &str) -> Result<Response, FetchError> {
        let url = self.resolve(path);
        let parsed = reqwest::Url::parse(&url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;

        let mut request = self.http.get(parsed);
        for (key, value) in &self.default_headers {
            request = request.header(key.as_str(), value.as_str());
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        debug!(%url, status, bytes = body.len(), "fetch completed");

        Ok(Response::new(status, body))
    }

    /// GET `path` and decode a JSON body, failing on non-2xx statuses.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        self.get(path).await?.error_for_status()?.json()
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, Response};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_joining() {
        let client = FetchClient::new()
            .unwrap()
            .with_base_url("http://localhost:3333/");
        assert_eq!(client.resolve("/stock/1"), "http://localhost:3333/stock/1");
        assert_eq!(client.resolve("products/2"), "http://localhost:3333/products/2");
    }

    #[test]
    fn test_absolute_url_bypasses_base() {
        let client = FetchClient::new().unwrap().with_base_url("http://a");
        assert_eq!(client.resolve("https://b/x"), "https://b/x");
    }

    #[test]
    fn test_no_base_url() {
        let client = FetchClient::new().unwrap();
        assert_eq!(client.base_url(), None);
        assert_eq!(client.resolve("/x"), "/x");
    }
}
