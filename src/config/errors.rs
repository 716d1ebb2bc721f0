//! Configuration error types.
//!
//! All configuration errors are fatal: the process refuses to start.

use thiserror::Error;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// DATABASE_URL is not set
    #[error(
        "DATABASE_URL environment variable must be set to a sqlite:// URL. \
         Example: sqlite://data/signups.db"
    )]
    MissingDatabaseUrl,

    /// DATABASE_URL does not use the sqlite:// scheme
    #[error(
        "DATABASE_URL must be a sqlite:// URL, got '{0}'. \
         Example: sqlite://data/signups.db"
    )]
    InvalidDatabaseUrl(String),

    /// A numeric variable failed to parse
    #[error("{var} must be a number, got '{value}'")]
    InvalidNumber { var: String, value: String },
}
