//! Store protocol definitions.
//!
//! A store is a key/value backend with optional per-value expiry. Session
//! storage, response caching and rate limiting all obtain one by name from a
//! store registry.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Core trait for key/value store backends.
#[async_trait]
pub trait Store: Send + Sync {
    /// Short label of the backend kind, e.g. `"memory"`.
    fn backend(&self) -> &str;

    /// Set a value, optionally expiring after `expires_in`.
    async fn set(
        &self,
        key: &str,
        value: Bytes,
        expires_in: Option<Duration>,
    ) -> Result<(), StoreError>;

    /// Get a value.
    ///
    /// Returns `None` for missing or expired keys. When `renew_for` is given
    /// and the value was stored with an expiry, the expiry is reset to
    /// `renew_for` from now; values without an expiry are left untouched.
    async fn get(&self, key: &str, renew_for: Option<Duration>)
        -> Result<Option<Bytes>, StoreError>;

    /// Delete a value. Deleting a missing key is a no-op.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Delete all values.
    async fn delete_all(&self) -> Result<(), StoreError>;

    /// Purge values that have already expired.
    async fn delete_expired(&self) -> Result<(), StoreError>;

    /// Check whether a live value exists under `key`.
    async fn exists(&self, key: &str) -> Result<bool, StoreError>;

    /// Remaining lifetime of `key`, or `None` if it does not exist.
    async fn expires_in(&self, key: &str) -> Result<Option<Ttl>, StoreError>;
}

/// Remaining lifetime of a stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ttl {
    /// Stored without an expiry.
    Persistent,
    /// Expires after the given duration.
    Remaining(Duration),
}

impl Ttl {
    /// Whole seconds remaining, `None` for persistent values.
    pub fn as_secs(&self) -> Option<u64> {
        match self {
            Ttl::Persistent => None,
            Ttl::Remaining(d) => Some(d.as_secs()),
        }
    }
}

/// Compute the absolute deadline for a relative expiry.
pub fn deadline_after(expires_in: Duration) -> Result<DateTime<Utc>, StoreError> {
    TimeDelta::from_std(expires_in)
        .ok()
        .and_then(|delta| Utc::now().checked_add_signed(delta))
        .ok_or_else(|| StoreError::InvalidExpiry(format!("{:?} is out of range", expires_in)))
}

#[derive(Debug, Serialize, Deserialize)]
struct Header {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expires_at: Option<DateTime<Utc>>,
}

/// A stored value together with its expiry.
///
/// Backends that persist raw bytes (the file store) use [`StorageObject::to_bytes`]:
/// a single JSON header line followed by the untouched payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageObject {
    pub expires_at: Option<DateTime<Utc>>,
    pub data: Bytes,
}

impl StorageObject {
    pub fn new(data: Bytes, expires_in: Option<Duration>) -> Result<Self, StoreError> {
        let expires_at = expires_in.map(deadline_after).transpose()?;
        Ok(Self { expires_at, data })
    }

    /// Whether the expiry has passed.
    pub fn expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Utc::now() >= at)
    }

    pub fn ttl(&self) -> Ttl {
        match self.expires_at {
            None => Ttl::Persistent,
            Some(at) => Ttl::Remaining((at - Utc::now()).to_std().unwrap_or(Duration::ZERO)),
        }
    }

    /// Reset the expiry to `renew_for` from now, if the object has one.
    ///
    /// Returns whether the expiry changed.
    pub fn renew(&mut self, renew_for: Duration) -> Result<bool, StoreError> {
        if self.expires_at.is_none() {
            return Ok(false);
        }
        self.expires_at = Some(deadline_after(renew_for)?);
        Ok(true)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, StoreError> {
        let mut out = serde_json::to_vec(&Header {
            expires_at: self.expires_at,
        })?;
        out.push(b'\n');
        out.extend_from_slice(&self.data);
        Ok(out)
    }

    pub fn from_bytes(raw: Bytes) -> Result<Self, StoreError> {
        let split = raw
            .iter()
            .position(|b| *b == b'\n')
            .ok_or_else(|| StoreError::Serialization("missing storage header".to_string()))?;
        let header: Header = serde_json::from_slice(&raw[..split])?;
        Ok(Self {
            expires_at: header.expires_at,
            data: raw.slice(split + 1..),
        })
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
