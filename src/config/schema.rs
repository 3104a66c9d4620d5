//! YAML schema for tokenizer configuration files
//!
//! ```yaml
//! tokenizer:
//!   num_words: 10000
//!   oov_token: "<OOV>"
//!   lowercase: "true"
//! ```

use serde::{Deserialize, Serialize};

use crate::tokenizer::WordTokenizerConfig;

/// Complete tokenizer specification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenizerSpec {
    /// Normalization and encoding options
    #[serde(default)]
    pub tokenizer: WordTokenizerConfig,
}
