//! Memory store implementation.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use tracing::debug;

use storehouse_protocols::error::StoreError;
use storehouse_protocols::store::{StorageObject, Store, Ttl};

/// Memory-backed key/value store.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, StorageObject>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries held, including ones that expired but were not purged yet.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Look up a live entry, dropping it if it has expired.
    fn live<R>(&self, key: &str, f: impl FnOnce(&mut StorageObject) -> R) -> Option<R> {
        let mut entries = self.entries.lock();
        match entries.get_mut(key) {
            Some(obj) if obj.expired() => {
                entries.remove(key);
                None
            }
            Some(obj) => Some(f(obj)),
            None => None,
        }
    }
}

#[async_trait]
impl Store for MemoryStore {
    fn backend(&self) -> &str {
        "memory"
    }

    async fn set(
        &self,
        key: &str,
        value: Bytes,
        expires_in: Option<Duration>,
    ) -> Result<(), StoreError> {
        let obj = StorageObject::new(value, expires_in)?;
        self.entries.lock().insert(key.to_string(), obj);
        Ok(())
    }

    async fn get(
        &self,
        key: &str,
        renew_for: Option<Duration>,
    ) -> Result<Option<Bytes>, StoreError> {
        self.live(key, |obj| -> Result<Bytes, StoreError> {
            if let Some(renew_for) = renew_for {
                obj.renew(renew_for)?;
            }
            Ok(obj.data.clone())
        })
        .transpose()
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.entries.lock().remove(key);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        self.entries.lock().clear();
        Ok(())
    }

    async fn delete_expired(&self) -> Result<(), StoreError> {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|_, obj| !obj.expired());
        debug!("Purged {} expired entries", before - entries.len());
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.live(key, |_| ()).is_some())
    }

    async fn expires_in(&self, key: &str) -> Result<Option<Ttl>, StoreError> {
        Ok(self.live(key, |obj| obj.ttl()))
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
