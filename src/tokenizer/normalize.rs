//! Text normalization: lowercasing, filter stripping and word splitting.

use regex::Regex;

use super::config::WordTokenizerConfig;
use super::error::{Result, TokenizerError};

/// Cleans raw text and splits it into words
#[derive(Debug, Clone)]
pub struct Normalizer {
    filters: Option<Regex>,
    whitespace_run: Regex,
    lowercase: bool,
    drop_empty: bool,
}

impl Normalizer {
    /// Compile the filter and whitespace patterns for a configuration
    pub fn new(config: &WordTokenizerConfig) -> Result<Self> {
        let filters = if config.filters.is_empty() {
            None
        } else {
            let class: String =
                config.filters.chars().map(|c| regex::escape(c.encode_utf8(&mut [0; 4]))).collect();
            Some(
                Regex::new(&format!("[{class}]"))
                    .map_err(|e| TokenizerError::InvalidFilters(e.to_string()))?,
            )
        };
        let whitespace_run =
            Regex::new(r"\s{2,}").map_err(|e| TokenizerError::InvalidFilters(e.to_string()))?;

        Ok(Self { filters, whitespace_run, lowercase: config.lowercase, drop_empty: config.drop_empty_tokens })
    }

    /// Normalize `text` into a word sequence
    ///
    /// Only runs of two or more whitespace characters are collapsed, so a lone
    /// tab or newline stays inside its word. An empty input yields `[""]`
    /// unless empty tokens are dropped.
    pub fn clean(&self, text: &str) -> Vec<String> {
        let mut text =
            if self.lowercase { text.to_lowercase() } else { text.to_string() };

        if let Some(filters) = &self.filters {
            text = filters.replace_all(&text, "").into_owned();
        }
        let text = self.whitespace_run.replace_all(&text, " ");

        text.split(' ')
            .filter(|word| !(self.drop_empty && word.is_empty()))
            .map(str::to_string)
            .collect()
    }
}
