//! # Storehouse Protocols
//!
//! Core protocol definitions (traits) for Storehouse.
//! Contains only interface definitions and the shared value envelope.
//!
//! ## Core Types
//!
//! - [`Store`] - Trait for key/value backend implementations
//! - [`StorageObject`] - Value envelope carrying data and an optional expiry
//! - [`Ttl`] - Remaining lifetime of a stored value

pub mod error;
pub mod store;

pub use error::{ProtocolError, RegistryError, StoreError};
pub use store::{StorageObject, Store, Ttl};
