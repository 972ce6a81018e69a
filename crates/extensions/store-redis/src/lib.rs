//! Redis-backed store for Storehouse.
//!
//! Keys are prefixed with a namespace (`NAMESPACE:key`) so several stores can
//! share one Redis database. Child namespaces created with
//! [`RedisStore::with_namespace`] nest below their parent, which means
//! clearing a parent also clears its children but never the other way round.

mod store;

pub use store::{RedisStore, RedisStoreConfig, DEFAULT_NAMESPACE};
