//! Store registry errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A store is already bound to this name and override was not requested.
    #[error("Store with the name '{0}' already exists")]
    DuplicateName(String),

    #[error("Invalid store name: {0:?}")]
    InvalidName(String),
}

impl RegistryError {
    /// The store name involved in the failure.
    pub fn name(&self) -> &str {
        match self {
            RegistryError::DuplicateName(name) | RegistryError::InvalidName(name) => name,
        }
    }
}
