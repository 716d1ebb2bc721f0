//! Notifier error types.

use thiserror::Error;

/// Result type for notifier operations
pub type NotifierResult<T> = Result<T, NotifierError>;

/// Errors from the outbound notification path.
///
/// These are never surfaced to HTTP callers; the dispatch site only logs them.
#[derive(Debug, Clone, Error)]
pub enum NotifierError {
    /// A from/to address failed to parse
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// The message could not be built
    #[error("Failed to build email: {0}")]
    BuildFailed(String),

    /// The SMTP transport rejected the send
    #[error("Failed to send email: {0}")]
    SendFailed(String),
}
