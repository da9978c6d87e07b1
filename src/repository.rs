//! Typed collection access over a [`KvStore`]
//!
//! Replaces ad-hoc global storage access with an injected repository:
//! callers load a whole collection, change it, and save it back.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use femcare_core::kv::MemoryKvStore;
//! use femcare_core::records::CycleRecord;
//! use femcare_core::repository::RecordRepository;
//!
//! # async fn example() -> femcare_core::Result<()> {
//! let repo = RecordRepository::new(MemoryKvStore::new());
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! repo.save(&[CycleRecord::new("c-1", start, 28)]).await?;
//!
//! let cycles: Vec<CycleRecord> = repo.load().await?;
//! assert_eq!(cycles.len(), 1);
//! # Ok(())
//! # }
//! ```

use tracing::{debug, warn};

use crate::kv::KvStore;
use crate::records::Collection;
use crate::{Error, Result};

/// Loads and saves whole record collections.
#[derive(Debug)]
pub struct RecordRepository<S> {
    store: S,
}

impl<S: KvStore> RecordRepository<S> {
    /// Wrap a key-value store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying key-value store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Load every record of a collection. A missing key is an empty collection.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the stored bytes are not a valid
    /// collection, or the store's error if the read fails.
    pub async fn load<T: Collection>(&self) -> Result<Vec<T>> {
        let Some(bytes) = self.store.get(T::KEY).await? else {
            debug!(key = T::KEY, "collection absent, starting empty");
            return Ok(Vec::new());
        };
        let records: Vec<T> = serde_json::from_slice(&bytes)?;
        debug!(key = T::KEY, count = records.len(), "loaded collection");
        Ok(records)
    }

    /// Load a collection, treating any failure as an empty collection.
    ///
    /// The failure is logged at warn level.
    pub async fn load_or_default<T: Collection>(&self) -> Vec<T> {
        match self.load::<T>().await {
            Ok(records) => records,
            Err(e) => {
                warn!(key = T::KEY, error = %e, "failed to load collection");
                Vec::new()
            }
        }
    }

    /// Overwrite a collection with `records`.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if encoding fails, or the store's error.
    pub async fn save<T: Collection>(&self, records: &[T]) -> Result<()> {
        let bytes = serde_json::to_vec(records)?;
        self.store.set(T::KEY, bytes).await?;
        debug!(key = T::KEY, count = records.len(), "saved collection");
        Ok(())
    }

    /// Remove a collection entirely.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the delete fails.
    pub async fn clear<T: Collection>(&self) -> Result<()> {
        self.store.delete(T::KEY).await
    }

    /// Find one record by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record has that id, or any `load` error.
    pub async fn find<T: Collection>(&self, id: &str) -> Result<T> {
        self.load::<T>()
            .await?
            .into_iter()
            .find(|record| record.id() == id)
            .ok_or_else(|| Error::not_found(T::KIND, id))
    }

    /// Apply `change` to the record with `id` and save the collection.
    ///
    /// Returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record has that id, or any load/save error.
    pub async fn update<T, F>(&self, id: &str, change: F) -> Result<T>
    where
        T: Collection + Clone,
        F: FnOnce(&mut T) + Send,
    {
        let mut records = self.load::<T>().await?;
        let record = records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| Error::not_found(T::KIND, id))?;
        change(record);
        let updated = record.clone();
        self.save(&records).await?;
        Ok(updated)
    }

    /// Append one record to its collection.
    ///
    /// # Errors
    ///
    /// Returns any load/save error.
    pub async fn push<T: Collection>(&self, record: T) -> Result<()> {
        let mut records = self.load::<T>().await?;
        records.push(record);
        self.save(&records).await
    }

    /// Remove the record with `id` and save the collection.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record has that id, or any load/save error.
    pub async fn remove<T: Collection>(&self, id: &str) -> Result<T> {
        let mut records = self.load::<T>().await?;
        let index = records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| Error::not_found(T::KIND, id))?;
        let removed = records.remove(index);
        self.save(&records).await?;
        Ok(removed)
    }
}
