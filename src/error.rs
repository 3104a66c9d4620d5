//! Crate-level error type

use thiserror::Error;

use crate::config::ValidationError;
use crate::tokenizer::TokenizerError;

/// Errors surfaced by the configuration layer and CLI commands
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid config: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for crate-level operations
pub type Result<T> = std::result::Result<T, Error>;
