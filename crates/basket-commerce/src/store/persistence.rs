//! The cart's persistence slot.

use basket_cache::{Cache, CacheError, Slot};
use tracing::{debug, warn};

use crate::cart::Cart;
use crate::config::StoreConfig;

/// Reads and writes the whole cart under `<namespace>:cart`.
#[derive(Debug, Clone)]
pub struct CartPersistence {
    slot: Slot<Cart>,
}

impl CartPersistence {
    /// Bind to `cache` at the configured key.
    pub fn new(cache: Cache, config: &StoreConfig) -> Self {
        Self::with_key(cache, config.storage_key())
    }

    /// Bind to an explicit key.
    pub fn with_key(cache: Cache, key: impl Into<String>) -> Self {
        Self {
            slot: Slot::new(cache, key),
        }
    }

    pub fn key(&self) -> &str {
        self.slot.key()
    }

    /// Load the persisted cart.
    ///
    /// An empty slot is an empty cart. So is an undecodable value: it is
    /// logged and left in place until the next save overwrites it. Backend
    /// failures are returned.
    pub fn load(&self) -> Result<Cart, CacheError> {
        match self.slot.load() {
            Ok(Some(cart)) => {
                debug!(key = self.key(), items = cart.len(), "loaded persisted cart");
                Ok(cart)
            }
            Ok(None) => Ok(Cart::new()),
            Err(e) if e.is_corrupt() => {
                warn!(key = self.key(), error = %e, "persisted cart is corrupt; starting empty");
                Ok(Cart::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Replace the persisted cart.
    pub fn save(&self, cart: &Cart) -> Result<(), CacheError> {
        self.slot.store(cart)
    }

    /// Remove the persisted cart.
    pub fn clear(&self) -> Result<(), CacheError> {
        self.slot.clear()
    }
}
