//! Error types for token extraction.

use thiserror::Error;

/// Result type for token extraction operations.
pub type TokenResult<T> = Result<T, TokenError>;

/// Errors that can occur during an extraction run.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Document or token serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
