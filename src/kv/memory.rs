//! In-memory KV store implementation using `DashMap`.
//!
//! Data is lost when the store is dropped. Use `FileKvStore` to persist.

use super::KvStore;
use crate::Result;
use dashmap::DashMap;

/// In-memory key-value store using a lock-free concurrent hashmap.
///
/// # Example
///
/// ```rust
/// use femcare_core::kv::{KvStore, MemoryKvStore};
///
/// # async fn example() -> femcare_core::Result<()> {
/// let store = MemoryKvStore::new();
/// store.set("femcare_reminders", b"[]".to_vec()).await?;
/// assert_eq!(store.get("femcare_reminders").await?, Some(b"[]".to_vec()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MemoryKvStore {
    store: DashMap<String, Vec<u8>>,
}

impl MemoryKvStore {
    /// Create a new in-memory KV store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: DashMap::new(),
        }
    }
}

impl Default for MemoryKvStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.store.get(key).map(|v| v.value().clone()))
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        self.store.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.store.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.store.contains_key(key))
    }
}
