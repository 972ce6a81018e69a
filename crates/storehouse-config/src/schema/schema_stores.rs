//! Store backend configuration types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use super::default_storage_root;
use crate::error::ConfigError;

/// Kind of store backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Memory,
    File,
    Redis,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BackendKind::Memory => "memory",
            BackendKind::File => "file",
            BackendKind::Redis => "redis",
        };
        f.write_str(name)
    }
}

/// Configuration of one store backend.
///
/// Used for every `[stores.<name>]` table and for `[defaults]`, where `path`
/// and `namespace` act as roots that each lazily created store nests below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: BackendKind,

    /// Directory of a file store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Redis connection URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Redis key namespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl StoreConfig {
    pub fn memory() -> Self {
        Self::default()
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            backend: BackendKind::File,
            path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn redis(url: impl Into<String>) -> Self {
        Self {
            backend: BackendKind::Redis,
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Directory for a named file store: the configured path, or a
    /// per-name directory below the default storage root.
    ///
    /// Without a configured path the name must be a single path segment,
    /// so it cannot point outside the storage root.
    pub fn file_path(&self, name: &str) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }
        if !is_path_segment(name) {
            return Err(ConfigError::InvalidValue {
                field: format!("stores.{}", name),
                message: "store name cannot be used as a directory name".to_string(),
            });
        }
        Ok(default_storage_root().join(name))
    }
}

/// Non-empty, not `.` or `..`, and free of separators and NUL.
fn is_path_segment(name: &str) -> bool {
    !(name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\', '\0']))
}
