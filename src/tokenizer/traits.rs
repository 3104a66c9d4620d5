//! Sequence encoder trait.

/// Index of a word in the learned vocabulary (1-based)
pub type TokenId = usize;

/// Text-to-sequence encoding over a learned word vocabulary
///
/// Encoding and decoding are total: unknown words are substituted or
/// dropped, never reported as errors.
pub trait SequenceEncoder: Send + Sync {
    /// Learn from a batch of texts, accumulating into existing counts
    fn fit_batch(&mut self, texts: &[&str]);

    /// Encode one text
    fn encode_text(&self, text: &str) -> Vec<TokenId>;

    /// Encode texts in input order, one sequence per text
    fn encode_batch(&self, texts: &[&str]) -> Vec<Vec<TokenId>> {
        texts.iter().map(|text| self.encode_text(text)).collect()
    }

    /// Map a sequence back to space-joined words
    fn decode_sequence(&self, ids: &[TokenId]) -> String;

    /// Number of indexed words, OOV token included
    fn vocab_size(&self) -> usize;

    /// Index assigned to a word
    fn index_of(&self, word: &str) -> Option<TokenId>;

    /// Word stored at an index
    fn word_at(&self, id: TokenId) -> Option<&str>;
}
