//! CLI module
//!
//! Owns argument parsing, logging initialization, and the tokio runtime.
//! `main.rs` delegates here and only maps errors to the exit code.

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init_db, serve};
pub use errors::{CliError, CliResult};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse arguments, set up logging, and dispatch the selected command.
pub fn run() -> CliResult<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse_args();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        match cli.command {
            Command::Serve => serve().await,
            Command::InitDb => init_db().await,
        }
    })
}
