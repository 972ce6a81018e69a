//! # Storehouse Config
//!
//! Configuration management for Storehouse: named stores, the policy used
//! for stores nobody configured, consumer settings and logging.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
