//! Configuration validation
//!
//! Rejects tokenizer settings that would silently produce useless output.

mod error;
mod validator;

#[cfg(test)]
mod proptests;

pub use error::ValidationError;
pub use validator::validate_config;
