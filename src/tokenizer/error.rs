//! Tokenizer error types.

use thiserror::Error;

/// Tokenizer errors
///
/// Out-of-vocabulary words are not errors: encoding substitutes or drops them.
#[derive(Debug, Error)]
pub enum TokenizerError {
    #[error("Invalid filter pattern: {0}")]
    InvalidFilters(String),

    #[error("Malformed vocabulary snapshot: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for tokenizer operations
pub type Result<T> = std::result::Result<T, TokenizerError>;
