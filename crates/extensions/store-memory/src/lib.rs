//! In-process memory store for Storehouse.
//!
//! Values live in a mutex-guarded map and vanish with the process. This is
//! the store a registry hands out for names nobody configured.

mod store;

pub use store::MemoryStore;
