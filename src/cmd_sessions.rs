//! Session and response-cache subcommand handlers.

use tracing::info;

use crate::app::App;
use crate::cli::{CacheAction, SessionsAction};
use crate::cmd_store::{clear_store, confirm};

/// Handle session subcommands against the configured session store.
pub(crate) async fn handle_sessions_command(app: &App, action: SessionsAction) -> anyhow::Result<()> {
    let store = app.session_store()?;
    match action {
        SessionsAction::Delete { session_id, yes } => {
            if !yes && !confirm(&format!("Delete session '{}'?", session_id))? {
                println!("Aborted.");
                return Ok(());
            }
            store.delete(&session_id).await?;
            info!("Deleted session '{}'", session_id);
            println!("Deleted session '{}'.", session_id);
            Ok(())
        }
        SessionsAction::Clear { yes } => {
            let prompt = format!("Delete all sessions in store '{}'?", app.config.sessions.store);
            clear_store(&*store, &prompt, yes).await
        }
    }
}

/// Handle response-cache subcommands against the configured cache store.
pub(crate) async fn handle_cache_command(app: &App, action: CacheAction) -> anyhow::Result<()> {
    let store = app.response_cache_store()?;
    match action {
        CacheAction::Clear { yes } => {
            let prompt = format!(
                "Delete all cached responses in store '{}'?",
                app.config.response_cache.store
            );
            clear_store(&*store, &prompt, yes).await
        }
    }
}
