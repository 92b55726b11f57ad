//! Key-value store with automatic serialization.

use crate::StoreError;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Type-safe key-value store.
///
/// Values are JSON blobs; any type implementing `Serialize` and
/// `DeserializeOwned` can be stored. The store is an in-process map
/// behind a `RwLock`: handles are cheap to clone and share the same data,
/// and every operation is a single synchronous, all-or-nothing write.
/// Handles are passed in explicitly wherever storage is needed — there is
/// no process-wide instance.
#[derive(Debug, Clone)]
pub struct Store {
    name: String,
    inner: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl Store {
    /// Open a named, initially empty store.
    pub fn open(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// The store's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get a value.
    ///
    /// Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let map = self.read()?;
        match map.get(key) {
            Some(bytes) => Ok(Some(serde_json::from_slice(bytes)?)),
            None => Ok(None),
        }
    }

    /// Get a value, or fail with `NotFound`.
    pub fn get_or_fail<T: DeserializeOwned>(&self, key: &str) -> Result<T, StoreError> {
        self.get(key)?
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    /// Set a value, overwriting any existing one.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value)?;
        let mut map = self.write()?;
        map.insert(key.to_string(), bytes);
        Ok(())
    }

    /// Insert-only write: set the value only when the key is absent.
    ///
    /// Fails with [`StoreError::Conflict`] when the key already exists.
    /// This is the uniqueness primitive behind one-to-one constraints.
    pub fn set_if_absent<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value)?;
        let mut map = self.write()?;
        if map.contains_key(key) {
            return Err(StoreError::Conflict(key.to_string()));
        }
        map.insert(key.to_string(), bytes);
        Ok(())
    }

    /// Delete a value. Returns whether the key existed.
    pub fn delete(&self, key: &str) -> Result<bool, StoreError> {
        let mut map = self.write()?;
        Ok(map.remove(key).is_some())
    }

    /// Check if a key exists.
    pub fn exists(&self, key: &str) -> Result<bool, StoreError> {
        let map = self.read()?;
        Ok(map.contains_key(key))
    }

    /// All keys currently in the store.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        let map = self.read()?;
        Ok(map.keys().cloned().collect())
    }

    fn read(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, HashMap<String, Vec<u8>>>, StoreError> {
        self.inner
            .read()
            .map_err(|e| StoreError::Store(e.to_string()))
    }

    fn write(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<String, Vec<u8>>>, StoreError> {
        self.inner
            .write()
            .map_err(|e| StoreError::Store(e.to_string()))
    }
}

/// Helper to build store keys with namespacing.
///
/// # Example
///
/// ```
/// use rig_store::store_key;
///
/// let key = store_key!("computer", "abc123");
/// assert_eq!(key, "computer:abc123");
/// ```
#[macro_export]
macro_rules! store_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Record {
        name: String,
        count: u32,
    }

    #[test]
    fn test_get_set_round_trip() {
        let store = Store::open("test");
        assert_eq!(store.name(), "test");
        let record = Record {
            name: "widget".to_string(),
            count: 3,
        };
        store.set("r:1", &record).unwrap();

        let loaded: Record = store.get("r:1").unwrap().unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_get_missing_is_none() {
        let store = Store::open("test");
        let loaded: Option<Record> = store.get("absent").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_get_or_fail() {
        let store = Store::open("test");
        let err = store.get_or_fail::<Record>("absent").unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn test_set_if_absent_conflicts_on_second_insert() {
        let store = Store::open("test");
        store.set_if_absent("k", &1u32).unwrap();
        let err = store.set_if_absent("k", &2u32).unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));

        // The first value is untouched.
        let value: u32 = store.get("k").unwrap().unwrap();
        assert_eq!(value, 1);
    }

    #[test]
    fn test_delete_and_exists() {
        let store = Store::open("test");
        store.set("k", &"v").unwrap();
        assert!(store.exists("k").unwrap());
        assert!(store.delete("k").unwrap());
        assert!(!store.exists("k").unwrap());
        assert!(!store.delete("k").unwrap());
    }

    #[test]
    fn test_keys() {
        let store = Store::open("test");
        store.set("a", &1u32).unwrap();
        store.set("b", &2u32).unwrap();
        let mut keys = store.keys().unwrap();
        keys.sort();
        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_cloned_handles_share_data() {
        let store = Store::open("test");
        let handle = store.clone();
        handle.set("k", &7u32).unwrap();
        let value: u32 = store.get("k").unwrap().unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn test_store_key_macro() {
        let key = store_key!("order", "by-computer", "pc1");
        assert_eq!(key, "order:by-computer:pc1");
    }
}
