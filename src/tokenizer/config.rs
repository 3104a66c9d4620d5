//! Tokenizer configuration types.

use serde::{Deserialize, Deserializer, Serialize};

/// Characters stripped from text before splitting.
///
/// Common punctuation; the apostrophe is kept so contractions stay one word.
pub const DEFAULT_FILTERS: &str = "\\.,/#!$%^&*;:{}=-_`~()";

/// Deserialize a bool from either a YAML boolean (`true`) or a quoted string (`"true"`).
fn deserialize_bool_lenient<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        Str(String),
    }

    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(b) => Ok(b),
        BoolOrString::Str(s) => match s.to_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected 'true' or 'false', got '{other}'"
            ))),
        },
    }
}

/// Word tokenizer configuration
///
/// Configuration is not part of a vocabulary snapshot and must be supplied
/// again when a snapshot is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordTokenizerConfig {
    /// Every character in this string is removed from input text
    pub filters: String,
    /// Keep only indices strictly below this value (`None` or 0 = unlimited)
    pub num_words: Option<usize>,
    /// Out-of-vocabulary token, reserved at index 1 (empty = disabled)
    pub oov_token: String,
    /// Whether to lowercase input
    #[serde(deserialize_with = "deserialize_bool_lenient")]
    pub lowercase: bool,
    /// Drop empty strings produced by splitting instead of counting them
    #[serde(deserialize_with = "deserialize_bool_lenient")]
    pub drop_empty_tokens: bool,
}

impl Default for WordTokenizerConfig {
    fn default() -> Self {
        Self {
            filters: DEFAULT_FILTERS.to_string(),
            num_words: None,
            oov_token: String::new(),
            lowercase: true,
            drop_empty_tokens: false,
        }
    }
}

impl WordTokenizerConfig {
    /// Set the filter character set
    pub fn with_filters(mut self, filters: impl Into<String>) -> Self {
        self.filters = filters.into();
        self
    }

    /// Cap the usable vocabulary (0 = unlimited)
    pub fn with_num_words(mut self, num_words: usize) -> Self {
        self.num_words = Some(num_words);
        self
    }

    /// Enable the out-of-vocabulary token
    pub fn with_oov_token(mut self, oov_token: impl Into<String>) -> Self {
        self.oov_token = oov_token.into();
        self
    }

    /// Enable lowercase preprocessing
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Drop empty tokens during normalization
    pub fn with_drop_empty_tokens(mut self, drop: bool) -> Self {
        self.drop_empty_tokens = drop;
        self
    }

    /// Vocabulary cap with 0 folded into "unlimited"
    pub fn effective_num_words(&self) -> Option<usize> {
        self.num_words.filter(|&n| n > 0)
    }

    /// Whether an OOV token is configured
    pub fn has_oov(&self) -> bool {
        !self.oov_token.is_empty()
    }
}
