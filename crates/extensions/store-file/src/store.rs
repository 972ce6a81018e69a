//! File store implementation.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::{debug, warn};

use storehouse_protocols::error::StoreError;
use storehouse_protocols::store::{StorageObject, Store, Ttl};

/// Check that `name` is usable as a single file or directory name.
///
/// Rejects empty names, `.`, `..`, and names containing `/`, `\` or NUL.
pub fn validate_name(name: &str) -> Result<(), StoreError> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);
    if invalid {
        return Err(StoreError::InvalidKey(name.to_string()));
    }
    Ok(())
}

/// File-backed key/value store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `path`. The directory is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve the file for `key`, rejecting keys that would escape the store directory.
    fn key_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_name(key)?;
        Ok(self.path.join(key))
    }

    async fn load(path: &Path) -> Result<Option<StorageObject>, StoreError> {
        match fs::read(path).await {
            Ok(raw) => Ok(Some(StorageObject::from_bytes(Bytes::from(raw))?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn remove(path: &Path) -> Result<(), StoreError> {
        match fs::remove_file(path).await {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }

    async fn write(&self, target: PathBuf, obj: &StorageObject) -> Result<(), StoreError> {
        fs::create_dir_all(&self.path).await?;
        let dir = self.path.clone();
        let raw = obj.to_bytes()?;

        tokio::task::spawn_blocking(move || -> Result<(), StoreError> {
            let name = target
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let mut tmp = tempfile::Builder::new()
                .prefix(&format!(".{}.tmp", name))
                .tempfile_in(&dir)?;
            tmp.write_all(&raw)?;
            tmp.persist(&target).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(|e| StoreError::Backend(e.to_string()))?
    }

    /// Load a live value, removing the file if it has expired.
    async fn load_live(&self, path: &Path) -> Result<Option<StorageObject>, StoreError> {
        match Self::load(path).await? {
            Some(obj) if obj.expired() => {
                Self::remove(path).await?;
                Ok(None)
            }
            other => Ok(other),
        }
    }
}

#[async_trait]
impl Store for FileStore {
    fn backend(&self) -> &str {
        "file"
    }

    async fn set(
        &self,
        key: &str,
        value: Bytes,
        expires_in: Option<Duration>,
    ) -> Result<(), StoreError> {
        let target = self.key_path(key)?;
        let obj = StorageObject::new(value, expires_in)?;
        self.write(target, &obj).await
    }

    async fn get(
        &self,
        key: &str,
        renew_for: Option<Duration>,
    ) -> Result<Option<Bytes>, StoreError> {
        let path = self.key_path(key)?;
        let Some(mut obj) = self.load_live(&path).await? else {
            return Ok(None);
        };

        if let Some(renew_for) = renew_for {
            if obj.renew(renew_for)? {
                self.write(path, &obj).await?;
            }
        }

        Ok(Some(obj.data))
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        Self::remove(&self.key_path(key)?).await
    }

    /// Removes and recreates the store directory.
    async fn delete_all(&self) -> Result<(), StoreError> {
        match fs::remove_dir_all(&self.path).await {
            Err(e) if e.kind() != ErrorKind::NotFound => return Err(e.into()),
            _ => {}
        }
        fs::create_dir_all(&self.path).await?;
        Ok(())
    }

    async fn delete_expired(&self) -> Result<(), StoreError> {
        let mut dir = match fs::read_dir(&self.path).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        let mut purged = 0usize;
        while let Some(entry) = dir.next_entry().await? {
            let path = entry.path();
            match Self::load(&path).await {
                Ok(Some(obj)) if obj.expired() => {
                    Self::remove(&path).await?;
                    purged += 1;
                }
                Ok(_) => {}
                Err(e) => warn!("Skipping unreadable store file {:?}: {}", path, e),
            }
        }

        debug!("Purged {} expired files from {:?}", purged, self.path);
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        let path = self.key_path(key)?;
        Ok(self.load_live(&path).await?.is_some())
    }

    async fn expires_in(&self, key: &str) -> Result<Option<Ttl>, StoreError> {
        let path = self.key_path(key)?;
        Ok(self.load_live(&path).await?.map(|obj| obj.ttl()))
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
