//! File-backed store for Storehouse.
//!
//! Every key is a file inside the store directory. A file holds one JSON
//! header line with the expiry followed by the raw value:
//!
//! ```text
//! {"expires_at":"2026-10-16T10:30:00Z"}
//! <value bytes>
//! ```
//!
//! Writes land in a temporary file next to the target and are renamed into
//! place, so readers in other threads or processes never see a torn value.

mod store;

pub use store::{validate_name, FileStore};
