//! Validation error types

/// Validation error type
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid num_words: {0} (must be 0 for unlimited or >= 2; index 1 is the first word)")]
    InvalidNumWords(usize),

    #[error("Invalid OOV token: {0:?} (must not contain whitespace)")]
    InvalidOovToken(String),

    #[error("Invalid filters: {0}")]
    InvalidFilters(String),
}
