//! # Store Errors
//!
//! Error types for the record store.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Email must be non-empty
    #[error("Email is required")]
    EmptyEmail,

    /// Unique constraint violation on the email column
    #[error("Email already registered: {0}")]
    Duplicate(String),

    /// The underlying connection failed
    #[error("Record store unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StoreError::Duplicate(db.message().to_string())
            }
            _ => StoreError::Unavailable(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(StoreError::EmptyEmail.to_string(), "Email is required");
        assert!(StoreError::Duplicate("UNIQUE constraint failed".into())
            .to_string()
            .contains("UNIQUE"));
    }
}
