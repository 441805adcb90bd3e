//! A single typed value persisted under a fixed key.

use std::marker::PhantomData;

use serde::{de::DeserializeOwned, Serialize};

use crate::{Cache, CacheError};

/// A persistence slot: one key, one serialized value, full replace on write.
///
/// # Example
///
/// ```rust,ignore
/// let slot: Slot<Vec<LineItem>> = Slot::new(cache, cache_key!("@Basket", "cart"));
/// let items = slot.load()?.unwrap_or_default();
/// slot.store(&items)?;
/// ```
pub struct Slot<T> {
    cache: Cache,
    key: String,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
            key: self.key.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slot").field("key", &self.key).finish()
    }
}

impl<T> Slot<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Bind `cache` to `key`.
    pub fn new(cache: Cache, key: impl Into<String>) -> Self {
        Self {
            cache,
            key: key.into(),
            _phantom: PhantomData,
        }
    }

    /// The key this slot writes to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the stored value. `Ok(None)` when the slot is empty.
    pub fn load(&self) -> Result<Option<T>, CacheError> {
        self.cache.get(&self.key)
    }

    /// Overwrite the slot with `value`.
    pub fn store(&self, value: &T) -> Result<(), CacheError> {
        self.cache.set(&self.key, value)
    }

    /// Empty the slot.
    pub fn clear(&self) -> Result<(), CacheError> {
        self.cache.delete(&self.key)
    }

    /// Whether the slot currently holds a value.
    pub fn is_set(&self) -> Result<bool, CacheError> {
        self.cache.exists(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slot_loads_none() {
        let slot: Slot<Vec<u32>> = Slot::new(Cache::in_memory(), "ns:cart");
        assert_eq!(slot.load().unwrap(), None);
        assert!(!slot.is_set().unwrap());
    }

    #[test]
    fn test_store_replaces_whole_value() {
        let cache = Cache::in_memory();
        let slot: Slot<Vec<u32>> = Slot::new(cache.clone(), "ns:cart");

        slot.store(&vec![1, 2, 3]).unwrap();
        slot.store(&vec![4]).unwrap();

        assert_eq!(slot.load().unwrap(), Some(vec![4]));
        assert_eq!(cache.keys().unwrap(), vec!["ns:cart"]);
    }

    #[test]
    fn test_clear() {
        let slot: Slot<String> = Slot::new(Cache::in_memory(), "ns:note");
        slot.store(&"hello".to_string()).unwrap();
        slot.clear().unwrap();
        assert_eq!(slot.load().unwrap(), None);
    }
}
