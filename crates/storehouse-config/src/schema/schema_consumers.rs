//! Settings of the subsystems that obtain stores from the registry.

use serde::{Deserialize, Serialize};

/// Response cache settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseCacheConfig {
    /// Name of the store holding cached responses.
    #[serde(default = "default_cache_store")]
    pub store: String,

    /// Default expiration of cached responses, in seconds.
    #[serde(default = "default_expiration")]
    pub default_expiration: u64,
}

impl Default for ResponseCacheConfig {
    fn default() -> Self {
        Self {
            store: default_cache_store(),
            default_expiration: default_expiration(),
        }
    }
}

fn default_cache_store() -> String {
    "response_cache".to_string()
}

fn default_expiration() -> u64 {
    60
}

/// Server-side session settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the store holding session data.
    #[serde(default = "default_session_store")]
    pub store: String,

    /// Session lifetime in seconds.
    #[serde(default = "default_max_age")]
    pub max_age: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            store: default_session_store(),
            max_age: default_max_age(),
        }
    }
}

fn default_session_store() -> String {
    "sessions".to_string()
}

/// Two weeks.
fn default_max_age() -> u64 {
    14 * 24 * 60 * 60
}
