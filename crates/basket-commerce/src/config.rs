//! Cart store configuration.

use std::time::Duration;

use basket_cache::cache_key;
use serde::{Deserialize, Serialize};

/// Where the store talks to and where it persists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the storefront API serving `/stock` and `/products`.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Prefix for the persistence key.
    #[serde(default = "default_storage_namespace")]
    pub storage_namespace: String,

    /// Per-request timeout for lookups, in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_api_base_url() -> String {
    "http://localhost:3333".to_string()
}

fn default_storage_namespace() -> String {
    "@Basket".to_string()
}

fn default_request_timeout_ms() -> u64 {
    5000
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            storage_namespace: default_storage_namespace(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl StoreConfig {
    /// The persistence key: `<namespace>:cart`.
    pub fn storage_key(&self) -> String {
        cache_key!(&self.storage_namespace, "cart")
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Override the API URL.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Override the storage namespace.
    pub fn with_storage_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.storage_namespace = namespace.into();
        self
    }
}
