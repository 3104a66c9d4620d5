//! JSON snapshot of a learned vocabulary.
//!
//! The snapshot is a flat object with three mappings:
//!
//! ```json
//! {"word_index": {"the": 1}, "index_word": {"1": "the"}, "word_counts": {"the": 2}}
//! ```
//!
//! Configuration is not included and must be supplied when loading.

use std::collections::BTreeMap;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::config::WordTokenizerConfig;
use super::error::{Result, TokenizerError};
use super::traits::TokenId;
use super::vocab::Vocabulary;
use super::word::WordTokenizer;

#[derive(Serialize)]
struct SnapshotRef<'a> {
    word_index: &'a IndexMap<String, TokenId>,
    index_word: &'a BTreeMap<TokenId, String>,
    word_counts: &'a IndexMap<String, usize>,
}

/// Missing or null fields read as empty mappings
#[derive(Deserialize)]
struct Snapshot {
    #[serde(default)]
    word_index: Option<IndexMap<String, TokenId>>,
    #[serde(default)]
    index_word: Option<BTreeMap<TokenId, String>>,
    #[serde(default)]
    word_counts: Option<IndexMap<String, usize>>,
}

impl<'a> From<&'a Vocabulary> for SnapshotRef<'a> {
    fn from(vocab: &'a Vocabulary) -> Self {
        Self {
            word_index: vocab.word_index(),
            index_word: vocab.index_word(),
            word_counts: vocab.word_counts(),
        }
    }
}

impl Vocabulary {
    /// Serialize to a compact JSON snapshot
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&SnapshotRef::from(self))
            .map_err(|e| TokenizerError::Serialization(e.to_string()))
    }

    /// Serialize to an indented JSON snapshot
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(&SnapshotRef::from(self))
            .map_err(|e| TokenizerError::Serialization(e.to_string()))
    }

    /// Parse a JSON snapshot
    ///
    /// When only one of the two index mappings is present the other is
    /// derived from it.
    ///
    /// # Errors
    /// Returns [`TokenizerError::Format`] if the blob is not a JSON object of
    /// the expected shape, contains index 0, or its index mappings disagree.
    pub fn from_json(blob: &str) -> Result<Self> {
        // Structs also deserialize from JSON arrays; only objects are snapshots
        if !blob.trim_start().starts_with('{') {
            return Err(TokenizerError::Format("expected a JSON object".to_string()));
        }
        let snapshot: Snapshot =
            serde_json::from_str(blob).map_err(|e| TokenizerError::Format(e.to_string()))?;

        let mut word_index = snapshot.word_index.unwrap_or_default();
        let mut index_word = snapshot.index_word.unwrap_or_default();
        let word_counts = snapshot.word_counts.unwrap_or_default();

        if word_index.is_empty() {
            word_index = index_word.iter().map(|(&i, w)| (w.clone(), i)).collect();
        } else if index_word.is_empty() {
            index_word = word_index.iter().map(|(w, &i)| (i, w.clone())).collect();
        }

        if word_index.values().any(|&i| i == 0) {
            return Err(TokenizerError::Format("indices are 1-based; found 0".to_string()));
        }

        let vocab = Vocabulary::from_parts(word_index, index_word, word_counts);
        vocab.check_consistency()?;
        Ok(vocab)
    }
}

impl WordTokenizer {
    /// Serialize the learned vocabulary to JSON
    pub fn to_json(&self) -> Result<String> {
        self.vocabulary().to_json()
    }

    /// Serialize the learned vocabulary to indented JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        self.vocabulary().to_json_pretty()
    }

    /// Rebuild a tokenizer from a snapshot and a configuration
    ///
    /// # Errors
    /// Returns error if the snapshot is malformed or the filters are invalid.
    pub fn from_json(blob: &str, config: WordTokenizerConfig) -> Result<Self> {
        let vocab = Vocabulary::from_json(blob)?;
        Self::with_vocabulary(config, vocab)
    }

    /// Save the vocabulary snapshot to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a vocabulary snapshot from a file
    pub fn load<P: AsRef<Path>>(path: P, config: WordTokenizerConfig) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json, config)
    }
}

/// Rebuild a tokenizer from a snapshot using the default configuration
pub fn tokenizer_from_json(blob: &str) -> Result<WordTokenizer> {
    WordTokenizer::from_json(blob, WordTokenizerConfig::default())
}
