use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::traits::KvStore;

/// In-memory, HashMap-based key-value store.
///
/// Intended for tests and embedding. All values are held in memory behind a
/// `RwLock` for safe concurrent access. Values are cloned on read.
pub struct InMemoryKvStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryKvStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.values.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.values.read().expect("lock poisoned").is_empty()
    }

    /// Remove all keys from the store.
    pub fn clear(&self) {
        self.values.write().expect("lock poisoned").clear();
    }

    /// Return a sorted list of all keys in the store.
    pub fn all_keys(&self) -> Vec<String> {
        let map = self.values.read().expect("lock poisoned");
        let mut keys: Vec<String> = map.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Synchronous read, for seeding assertions in tests.
    pub fn get_sync(&self, key: &str) -> Option<String> {
        self.values.read().expect("lock poisoned").get(key).cloned()
    }

    /// Synchronous write, for seeding fixtures in tests.
    pub fn put_sync(&self, key: &str, value: &str) {
        self.values
            .write()
            .expect("lock poisoned")
            .insert(key.to_string(), value.to_string());
    }
}

impl Default for InMemoryKvStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KvStore for InMemoryKvStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let map = self.values.read().expect("lock poisoned");
        Ok(map.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut map = self.values.write().expect("lock poisoned");
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> StoreResult<bool> {
        let mut map = self.values.write().expect("lock poisoned");
        Ok(map.remove(key).is_some())
    }
}

impl std::fmt::Debug for InMemoryKvStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryKvStore")
            .field("key_count", &count)
            .finish()
    }
}
