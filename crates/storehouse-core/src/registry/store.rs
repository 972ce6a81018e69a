//! Store registry.
//!
//! Maps names to [`Store`] handles. A name that was never registered gets a
//! store from the default factory on first lookup, and keeps that store for
//! the life of the registry unless it is replaced with an override
//! registration.
//!
//! Each name owns a slot (`OnceCell`). The map lock is only held long enough
//! to fetch or create the slot, so a slow factory for one name never blocks
//! lookups of other names, while concurrent misses on the same name all wait
//! on the same slot and see a single factory call.

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::OnceCell;
use tracing::{debug, info, warn};

use storehouse_protocols::error::{RegistryError, StoreError};
use storehouse_protocols::store::Store;

use super::factory::{memory_factory, StoreFactory};

/// Name of the conventional default store.
pub const DEFAULT_STORE_NAME: &str = "default";

type Slot = Arc<OnceCell<Arc<dyn Store>>>;

/// Registry for [`Store`] instances.
pub struct StoreRegistry {
    slots: DashMap<String, Slot>,
    default_factory: StoreFactory,
}

impl StoreRegistry {
    /// Create an empty registry whose default factory builds memory stores.
    pub fn new() -> Self {
        Self {
            slots: DashMap::new(),
            default_factory: memory_factory(),
        }
    }

    /// Create a registry pre-seeded with named stores.
    pub fn with_stores<I, S>(stores: I) -> Self
    where
        I: IntoIterator<Item = (S, Arc<dyn Store>)>,
        S: Into<String>,
    {
        let registry = Self::new();
        for (name, store) in stores {
            registry
                .slots
                .insert(name.into(), Arc::new(OnceCell::with_value(store)));
        }
        registry
    }

    /// Replace the factory used for names that have not been registered.
    pub fn with_default_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn(&str) -> Result<Arc<dyn Store>, StoreError> + Send + Sync + 'static,
    {
        self.default_factory = Arc::new(factory);
        self
    }

    /// Register a store under `name`.
    ///
    /// Fails with [`RegistryError::DuplicateName`] if the name is already
    /// bound and `override_existing` is false; the existing store is kept.
    /// Among concurrent registrations of the same name without override,
    /// exactly one succeeds.
    pub fn register(
        &self,
        name: &str,
        store: Arc<dyn Store>,
        override_existing: bool,
    ) -> Result<(), RegistryError> {
        if name.is_empty() {
            return Err(RegistryError::InvalidName(name.to_string()));
        }

        if override_existing {
            let previous = self
                .slots
                .insert(name.to_string(), Arc::new(OnceCell::with_value(store)));
            if previous.is_some_and(|slot| slot.get().is_some()) {
                warn!("Replaced store '{}'", name);
            } else {
                info!("Registered store '{}'", name);
            }
            return Ok(());
        }

        // Blocks while a factory call for this name is in flight, then loses to it.
        self.slot(name)
            .set(store)
            .map_err(|_| RegistryError::DuplicateName(name.to_string()))?;
        info!("Registered store '{}'", name);
        Ok(())
    }

    /// Get the store registered under `name`, creating it with the default
    /// factory if there is none.
    ///
    /// A factory error is returned as is and leaves the name unbound, so a
    /// later call tries again. The factory must not look up the name it is
    /// building.
    pub fn get(&self, name: &str) -> Result<Arc<dyn Store>, StoreError> {
        let slot = self.slot(name);
        let result = slot.get_or_try_init(|| {
            debug!("Creating store '{}' with the default factory", name);
            (self.default_factory)(name)
        });
        match result {
            Ok(store) => Ok(Arc::clone(store)),
            Err(e) => {
                self.discard_empty_slot(name, &slot);
                Err(e)
            }
        }
    }

    /// The store registered under [`DEFAULT_STORE_NAME`].
    ///
    /// Equivalent to `registry.get("default")`.
    pub fn default_store(&self) -> Result<Arc<dyn Store>, StoreError> {
        self.get(DEFAULT_STORE_NAME)
    }

    /// Check whether a store is bound to `name`. Never calls the factory.
    pub fn contains(&self, name: &str) -> bool {
        self.slots
            .get(name)
            .is_some_and(|slot| slot.get().is_some())
    }

    /// Names with a bound store, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .slots
            .iter()
            .filter(|entry| entry.value().get().is_some())
            .map(|entry| entry.key().clone())
            .collect();
        names.sort();
        names
    }

    /// Number of bound stores.
    pub fn len(&self) -> usize {
        self.slots
            .iter()
            .filter(|entry| entry.value().get().is_some())
            .count()
    }

    /// Whether no store is bound yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop the slot for `name` after a failed factory call, so failing names
    /// do not accumulate.
    ///
    /// Only removes `slot` itself while it is unfilled and nobody else holds
    /// it. Clones are only handed out under the shard lock `remove_if` holds,
    /// so a concurrent `get` or `register` on the same slot keeps it alive.
    fn discard_empty_slot(&self, name: &str, slot: &Slot) {
        self.slots.remove_if(name, |_, current| {
            Arc::ptr_eq(current, slot) && current.get().is_none() && Arc::strong_count(current) == 2
        });
    }

    /// Fetch or create the slot for `name`. The map lock is released on return.
    fn slot(&self, name: &str) -> Slot {
        if let Some(slot) = self.slots.get(name) {
            return Arc::clone(slot.value());
        }
        Arc::clone(self.slots.entry(name.to_string()).or_default().value())
    }
}

impl Default for StoreRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StoreRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreRegistry")
            .field("stores", &self.names())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
