//! CLI-specific error types
//!
//! All CLI errors are fatal: main prints them and exits non-zero.

use thiserror::Error;

use crate::config::ConfigError;
use crate::store::StoreError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration is missing or malformed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Schema init or store access failed during boot
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The initial database connection could not be established
    #[error("Boot failed: {0}")]
    Boot(String),

    /// Runtime or server I/O failure
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}
