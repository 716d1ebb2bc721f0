//! CLI command implementations
//!
//! Boot sequence for both commands is the same up to the server start:
//! load config from the environment, open the connection pool, and ensure
//! the schema exists. Any failure along that path aborts the process.

use std::str::FromStr;
use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::config::AppConfig;
use crate::http_server::{EmailState, HttpServer};
use crate::notifier::create_notifier;
use crate::store::EmailStore;

use super::errors::{CliError, CliResult};

/// Start the HTTP server and serve until interrupted
pub async fn serve() -> CliResult<()> {
    let config = AppConfig::from_env()?;
    let store = connect_store(&config.database_url).await?;

    let notifier = create_notifier(config.notifier.clone());
    match &notifier {
        Some(_) => tracing::info!("signup notifier enabled"),
        None => tracing::info!("signup notifier disabled (SMTP not configured)"),
    }

    let state = Arc::new(EmailState { store, notifier });
    let server = HttpServer::with_config(config.http, state);

    server.start().await?;
    Ok(())
}

/// Ensure the schema exists, then exit
pub async fn init_db() -> CliResult<()> {
    let config = AppConfig::from_env()?;
    connect_store(&config.database_url).await?;
    tracing::info!("emails table ready");
    Ok(())
}

/// Open the pool and run idempotent schema creation. Fail-fast: any error
/// here propagates out and terminates the process.
///
/// A single shared connection is reused across all requests; concurrency
/// control is left to SQLite itself.
async fn connect_store(database_url: &str) -> CliResult<EmailStore> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| CliError::Boot(format!("Invalid DATABASE_URL: {}", e)))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(|e| CliError::Boot(format!("Failed to connect to database: {}", e)))?;

    tracing::info!(url = %database_url, "connected to database");

    let store = EmailStore::new(pool);
    store.init().await?;
    Ok(store)
}
