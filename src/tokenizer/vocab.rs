//! Frequency-ranked vocabulary state.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use super::error::{Result, TokenizerError};
use super::traits::TokenId;

/// Learned word counts and the word <-> index mappings derived from them
///
/// `word_counts` keeps first-seen order, which breaks ties between words of
/// equal frequency. `word_index` and `index_word` are always inverses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    word_index: IndexMap<String, TokenId>,
    index_word: BTreeMap<TokenId, String>,
    word_counts: IndexMap<String, usize>,
}

impl Vocabulary {
    /// Create an empty vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a vocabulary from already-built parts
    pub(crate) fn from_parts(
        word_index: IndexMap<String, TokenId>,
        index_word: BTreeMap<TokenId, String>,
        word_counts: IndexMap<String, usize>,
    ) -> Self {
        Self { word_index, index_word, word_counts }
    }

    /// Add one occurrence of each word
    pub fn count<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for word in words {
            *self.word_counts.entry(word.into()).or_insert(0) += 1;
        }
    }

    /// Recompute both index mappings from the current counts
    ///
    /// Words are ranked by descending count with a stable sort over
    /// first-seen order. A non-empty `oov_token` takes index 1.
    pub fn rebuild(&mut self, oov_token: &str) {
        let mut ranked: Vec<(&str, usize)> =
            self.word_counts.iter().map(|(word, &count)| (word.as_str(), count)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let mut ordered: Vec<String> = Vec::with_capacity(ranked.len() + 1);
        if !oov_token.is_empty() {
            ordered.push(oov_token.to_string());
        }
        ordered.extend(ranked.into_iter().map(|(word, _)| word.to_string()));

        self.word_index.clear();
        self.index_word.clear();
        for word in ordered {
            // A counted word equal to the OOV token keeps index 1
            if self.word_index.contains_key(&word) {
                continue;
            }
            let index = self.word_index.len() + 1;
            self.index_word.insert(index, word.clone());
            self.word_index.insert(word, index);
        }
    }

    /// Verify that `word_index` and `index_word` are exact inverses
    pub fn check_consistency(&self) -> Result<()> {
        if self.word_index.len() != self.index_word.len() {
            return Err(TokenizerError::Format(format!(
                "word_index has {} entries but index_word has {}",
                self.word_index.len(),
                self.index_word.len()
            )));
        }
        for (word, &index) in &self.word_index {
            if self.index_word.get(&index).map(String::as_str) != Some(word.as_str()) {
                return Err(TokenizerError::Format(format!(
                    "word_index maps '{word}' to {index} but index_word disagrees"
                )));
            }
        }
        Ok(())
    }

    /// Word -> index mapping
    pub fn word_index(&self) -> &IndexMap<String, TokenId> {
        &self.word_index
    }

    /// Index -> word mapping
    pub fn index_word(&self) -> &BTreeMap<TokenId, String> {
        &self.index_word
    }

    /// Word -> occurrence count, in first-seen order
    pub fn word_counts(&self) -> &IndexMap<String, usize> {
        &self.word_counts
    }

    /// Index assigned to `word`
    pub fn index_of(&self, word: &str) -> Option<TokenId> {
        self.word_index.get(word).copied()
    }

    /// Word stored at `index`
    pub fn word_at(&self, index: TokenId) -> Option<&str> {
        self.index_word.get(&index).map(String::as_str)
    }

    /// Occurrences of `word` seen while fitting
    pub fn count_of(&self, word: &str) -> usize {
        self.word_counts.get(word).copied().unwrap_or(0)
    }

    /// Number of indexed entries
    pub fn len(&self) -> usize {
        self.word_index.len()
    }

    /// True before any fit
    pub fn is_empty(&self) -> bool {
        self.word_index.is_empty()
    }

    /// The `n` highest-ranked entries as `(index, word, count)`
    pub fn top(&self, n: usize) -> Vec<(TokenId, &str, usize)> {
        self.index_word
            .iter()
            .take(n)
            .map(|(&index, word)| (index, word.as_str(), self.count_of(word)))
            .collect()
    }
}
