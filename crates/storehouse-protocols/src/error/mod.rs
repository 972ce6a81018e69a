//! Error types for the Storehouse protocol layer.

mod protocol;
mod registry;
mod store;

pub use protocol::*;
pub use registry::*;
pub use store::*;
