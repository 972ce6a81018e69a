//! CLI definitions for Storehouse.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Storehouse CLI.
#[derive(Parser)]
#[command(name = "storehouse")]
#[command(about = "Named key/value stores for sessions, caches and rate limits")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "storehouse.toml", global = true, env = "STOREHOUSE_CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Validate the configuration file
    Check,

    /// Store management commands
    Stores {
        #[command(subcommand)]
        action: StoresAction,
    },

    /// Read a value
    Get {
        /// Store name
        store: String,
        /// Key to read
        key: String,
        /// Reset an existing expiry to this many seconds
        #[arg(long)]
        renew_for: Option<u64>,
    },

    /// Write a value
    Set {
        /// Store name
        store: String,
        /// Key to write
        key: String,
        /// Value to store
        value: String,
        /// Expire the value after this many seconds
        #[arg(long)]
        expires_in: Option<u64>,
    },

    /// Delete a value
    Delete {
        /// Store name
        store: String,
        /// Key to delete
        key: String,
    },

    /// Show the remaining lifetime of a value
    Ttl {
        /// Store name
        store: String,
        /// Key to inspect
        key: String,
    },

    /// Delete every value in a store
    Clear {
        /// Store name
        store: String,
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete expired values from a store
    Purge {
        /// Store name
        store: String,
    },

    /// Manage server-side sessions
    Sessions {
        #[command(subcommand)]
        action: SessionsAction,
    },

    /// Manage the response cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum StoresAction {
    /// List configured stores and the default policy
    List,
}

#[derive(Subcommand)]
pub(crate) enum SessionsAction {
    /// Delete a specific session
    Delete {
        /// Session ID
        session_id: String,
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete all sessions
    Clear {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum CacheAction {
    /// Delete all cached responses
    Clear {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}
