//! Application assembly: turns configuration into a store registry.

use std::sync::Arc;

use tracing::{debug, info};

use storehouse_config::{default_storage_root, BackendKind, Config, StoreConfig};
use storehouse_core::{StoreFactory, StoreRegistry};
use storehouse_protocols::{Store, StoreError};
use storehouse_store_file::{validate_name, FileStore};
use storehouse_store_memory::MemoryStore;
use storehouse_store_redis::{RedisStore, RedisStoreConfig, DEFAULT_NAMESPACE};

/// The assembled application: configuration plus the registry it owns.
///
/// Consumers receive the registry from here; there is no global instance.
pub(crate) struct App {
    pub config: Config,
    pub stores: Arc<StoreRegistry>,
}

impl App {
    pub fn from_config(config: Config) -> Result<Self, StoreError> {
        let mut seeded = Vec::with_capacity(config.stores.len());
        for (name, store_config) in &config.stores {
            debug!("Configuring {} store '{}'", store_config.backend, name);
            seeded.push((name.clone(), build_store(name, store_config)?));
        }

        let factory = default_factory(&config.defaults)?;
        let stores = StoreRegistry::with_stores(seeded)
            .with_default_factory(move |name: &str| factory(name));

        info!(
            "Store registry ready: {} configured, default backend {}",
            stores.len(),
            config.defaults.backend
        );

        Ok(Self {
            config,
            stores: Arc::new(stores),
        })
    }

    /// Store backing server-side sessions.
    pub fn session_store(&self) -> Result<Arc<dyn Store>, StoreError> {
        self.stores.get(&self.config.sessions.store)
    }

    /// Store backing the response cache.
    pub fn response_cache_store(&self) -> Result<Arc<dyn Store>, StoreError> {
        self.stores.get(&self.config.response_cache.store)
    }
}

fn redis_store(config: &StoreConfig) -> Result<RedisStore, StoreError> {
    let url = config
        .url
        .clone()
        .ok_or_else(|| StoreError::Misconfigured("redis store requires a url".to_string()))?;
    let namespace = config
        .namespace
        .clone()
        .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
    RedisStore::new(RedisStoreConfig::new(url).with_namespace(Some(namespace)))
}

/// Build an explicitly configured store.
fn build_store(name: &str, config: &StoreConfig) -> Result<Arc<dyn Store>, StoreError> {
    Ok(match config.backend {
        BackendKind::Memory => Arc::new(MemoryStore::new()),
        BackendKind::File => {
            let path = config
                .file_path(name)
                .map_err(|e| StoreError::Misconfigured(e.to_string()))?;
            Arc::new(FileStore::new(path))
        }
        BackendKind::Redis => Arc::new(redis_store(config)?),
    })
}

/// Build the factory for names without configuration.
///
/// File stores get a sub-directory of the configured root, named after the
/// store; names that are not a single directory name are rejected. Redis
/// stores get a child namespace sharing one connection.
fn default_factory(config: &StoreConfig) -> Result<StoreFactory, StoreError> {
    Ok(match config.backend {
        BackendKind::Memory => storehouse_core::memory_factory(),
        BackendKind::File => {
            let root = config.path.clone().unwrap_or_else(default_storage_root);
            Arc::new(move |name: &str| {
                validate_name(name)?;
                Ok(Arc::new(FileStore::new(root.join(name))) as Arc<dyn Store>)
            })
        }
        BackendKind::Redis => {
            let base = redis_store(config)?;
            Arc::new(move |name: &str| Ok(Arc::new(base.with_namespace(name)) as Arc<dyn Store>))
        }
    })
}
