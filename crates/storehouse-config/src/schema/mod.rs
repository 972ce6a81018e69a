//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

mod schema_consumers;
mod schema_stores;

pub use schema_consumers::*;
pub use schema_stores::*;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Policy for stores requested by name without being configured.
    #[serde(default)]
    pub defaults: StoreConfig,

    /// Stores registered when the application starts.
    #[serde(default)]
    pub stores: BTreeMap<String, StoreConfig>,

    #[serde(default)]
    pub response_cache: ResponseCacheConfig,

    #[serde(default)]
    pub sessions: SessionConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_level")]
    pub level: String,

    /// Directory for daily-rotated log files; console only when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    /// Emit JSON lines instead of human-readable text.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            directory: None,
            json: false,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// Root directory for file stores without an explicit path (`~/.storehouse/stores`).
pub fn default_storage_root() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".storehouse")
        .join("stores")
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
