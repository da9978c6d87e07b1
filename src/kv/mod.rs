//! Key-value storage for record collections
//!
//! The storage collaborator behind [`crate::repository::RecordRepository`].
//! Each key holds one serialized collection, mirroring how the records were
//! kept in browser local storage:
//! - `MemoryKvStore`: in-memory, lost on drop (tests, ephemeral sessions)
//! - `FileKvStore`: one JSON file per key in a data directory
//!
//! # Example
//!
//! ```rust,no_run
//! use femcare_core::kv::{KvStore, MemoryKvStore};
//!
//! # async fn example() -> femcare_core::Result<()> {
//! let store = MemoryKvStore::new();
//!
//! store.set("femcare_cycles", b"[]".to_vec()).await?;
//! assert!(store.exists("femcare_cycles").await?);
//!
//! store.delete("femcare_cycles").await?;
//! assert_eq!(store.get("femcare_cycles").await?, None);
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "tokio")]
mod file;
mod memory;

#[cfg(feature = "tokio")]
pub use file::FileKvStore;
pub use memory::MemoryKvStore;

use crate::Result;
use std::future::Future;

/// Key-value store holding one serialized collection per key.
pub trait KvStore: Send + Sync {
    /// Get a value by key.
    ///
    /// Returns `None` if the key doesn't exist.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<Vec<u8>>>> + Send;

    /// Set a value for a key.
    ///
    /// Overwrites any existing value.
    fn set(&self, key: &str, value: Vec<u8>) -> impl Future<Output = Result<()>> + Send;

    /// Delete a key.
    ///
    /// No-op if the key doesn't exist.
    fn delete(&self, key: &str) -> impl Future<Output = Result<()>> + Send;

    /// Check if a key exists.
    fn exists(&self, key: &str) -> impl Future<Output = Result<bool>> + Send;
}
