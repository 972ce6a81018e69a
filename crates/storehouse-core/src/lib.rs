//! # Storehouse Core
//!
//! The store registry: name-addressed access to [`Store`] handles, created on
//! demand by a pluggable factory when a name has not been registered.
//!
//! ## Components
//!
//! - [`StoreRegistry`] - The registry itself
//! - [`StoreFactory`] - Factory signature used for lazily created stores
//!
//! The registry is meant to be owned by the application and handed to
//! consumers (session storage, response caching, rate limiting) explicitly.
//!
//! [`Store`]: storehouse_protocols::Store

pub mod registry;

pub use registry::{memory_factory, StoreFactory, StoreRegistry, DEFAULT_STORE_NAME};
