//! Configuration validation logic

use super::error::ValidationError;
use crate::config::schema::TokenizerSpec;
use crate::tokenizer::Normalizer;

/// Validate a tokenizer specification
///
/// Checks:
/// - `num_words` leaves at least one usable index
/// - The OOV token is a single word
/// - The filter set compiles
pub fn validate_config(spec: &TokenizerSpec) -> Result<(), ValidationError> {
    let config = &spec.tokenizer;

    if config.num_words == Some(1) {
        return Err(ValidationError::InvalidNumWords(1));
    }

    if config.oov_token.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidOovToken(config.oov_token.clone()));
    }

    Normalizer::new(config).map_err(|e| ValidationError::InvalidFilters(e.to_string()))?;

    Ok(())
}
