//! Default factories for the store registry.

use std::sync::Arc;

use storehouse_protocols::error::StoreError;
use storehouse_protocols::store::Store;
use storehouse_store_memory::MemoryStore;

/// Builds a store for a name that has not been registered.
///
/// Receives the requested name. Errors are handed to the caller of
/// [`StoreRegistry::get`](super::StoreRegistry::get) unchanged.
pub type StoreFactory = Arc<dyn Fn(&str) -> Result<Arc<dyn Store>, StoreError> + Send + Sync>;

/// Fallback factory: a fresh, independent [`MemoryStore`] per name.
pub fn memory_factory() -> StoreFactory {
    Arc::new(|_name: &str| Ok(Arc::new(MemoryStore::new()) as Arc<dyn Store>))
}
