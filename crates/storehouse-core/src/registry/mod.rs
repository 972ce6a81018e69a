//! Registry of named stores.

mod factory;
mod store;

pub use factory::{memory_factory, StoreFactory};
pub use store::{StoreRegistry, DEFAULT_STORE_NAME};
