//! Store subcommand handlers for Storehouse.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::bail;
use bytes::Bytes;
use tracing::info;

use storehouse_config::BackendKind;
use storehouse_protocols::{Store, Ttl};

use crate::app::App;
use crate::cli::{Commands, StoresAction};

/// Handle store subcommands.
pub(crate) async fn handle_store_command(app: &App, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Stores { action: StoresAction::List } => {
            stores_list(app);
            Ok(())
        }
        Commands::Get { store, key, renew_for } => {
            let store = app.stores.get(&store)?;
            match store.get(&key, renew_for.map(Duration::from_secs)).await? {
                Some(value) => println!("{}", String::from_utf8_lossy(&value)),
                None => bail!("key '{}' not found", key),
            }
            Ok(())
        }
        Commands::Set { store: name, key, value, expires_in } => {
            let store = app.stores.get(&name)?;
            store
                .set(&key, Bytes::from(value), expires_in.map(Duration::from_secs))
                .await?;
            info!("Set '{}' in store '{}'", key, name);
            Ok(())
        }
        Commands::Delete { store, key } => {
            app.stores.get(&store)?.delete(&key).await?;
            Ok(())
        }
        Commands::Ttl { store, key } => {
            let store = app.stores.get(&store)?;
            println!("{}", format_ttl(store.expires_in(&key).await?));
            Ok(())
        }
        Commands::Clear { store: name, yes } => {
            let store = app.stores.get(&name)?;
            clear_store(&*store, &format!("Delete every value in store '{}'?", name), yes).await
        }
        Commands::Purge { store: name } => {
            app.stores.get(&name)?.delete_expired().await?;
            info!("Purged expired values from store '{}'", name);
            Ok(())
        }
        Commands::Check | Commands::Sessions { .. } | Commands::Cache { .. } => {
            bail!("not a store command")
        }
    }
}

fn stores_list(app: &App) {
    let defaults = &app.config.defaults;
    println!("{:<24} {:<8} {}", "NAME", "BACKEND", "LOCATION");
    println!("{}", "-".repeat(64));
    for (name, store) in &app.config.stores {
        let location = match store.backend {
            BackendKind::Memory => "-".to_string(),
            BackendKind::File => match store.file_path(name) {
                Ok(path) => path.display().to_string(),
                Err(err) => err.to_string(),
            },
            BackendKind::Redis => store.url.clone().unwrap_or_default(),
        };
        println!("{:<24} {:<8} {}", name, store.backend, location);
    }
    println!();
    println!("Unconfigured names use the {} backend.", defaults.backend);
}

/// Delete everything in `store` after confirmation.
pub(crate) async fn clear_store(store: &dyn Store, prompt: &str, yes: bool) -> anyhow::Result<()> {
    if !yes && !confirm(prompt)? {
        println!("Aborted.");
        return Ok(());
    }
    store.delete_all().await?;
    println!("Done.");
    Ok(())
}

/// Ask a yes/no question on stdin. Anything but `y`/`yes` is a no.
pub(crate) fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

pub(crate) fn format_ttl(ttl: Option<Ttl>) -> String {
    match ttl {
        None => "not found".to_string(),
        Some(Ttl::Persistent) => "no expiry".to_string(),
        Some(Ttl::Remaining(remaining)) => format!("{}s", remaining.as_secs()),
    }
}
