//! Storehouse - named key/value stores
//!
//! Main entry point for the Storehouse management CLI.

mod app;
mod cli;
mod cmd_sessions;
mod cmd_store;
mod logging;

use anyhow::bail;
use clap::Parser;
use tracing::{error, warn};

use storehouse_config::{ConfigLoader, ConfigValidator};

use crate::app::App;
use crate::cli::{Cli, Commands};
use crate::cmd_sessions::{handle_cache_command, handle_sessions_command};
use crate::cmd_store::handle_store_command;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ConfigLoader::load_or_default(&cli.config)?;
    logging::init_tracing(&config.logging)?;

    let validation = ConfigValidator::validate(&config);
    for warning in &validation.warnings {
        warn!("{}: {}", warning.path, warning.message);
    }
    for err in &validation.errors {
        error!("{}: {}", err.path, err.message);
    }

    if let Commands::Check = cli.command {
        println!(
            "{}: {} error(s), {} warning(s)",
            cli.config.display(),
            validation.errors.len(),
            validation.warnings.len()
        );
        if !validation.is_valid() {
            bail!("configuration is invalid");
        }
        return Ok(());
    }

    if !validation.is_valid() {
        bail!(
            "configuration {} is invalid ({} error(s))",
            cli.config.display(),
            validation.errors.len()
        );
    }

    let app = App::from_config(config)?;

    match cli.command {
        Commands::Sessions { action } => handle_sessions_command(&app, action).await,
        Commands::Cache { action } => handle_cache_command(&app, action).await,
        command => handle_store_command(&app, command).await,
    }
}
