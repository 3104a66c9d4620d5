//! Word-level tokenizer: fit a frequency-ranked vocabulary, encode texts.

use super::config::WordTokenizerConfig;
use super::error::Result;
use super::normalize::Normalizer;
use super::traits::{SequenceEncoder, TokenId};
use super::vocab::Vocabulary;

/// Index reserved for the out-of-vocabulary token when one is configured
pub const OOV_INDEX: TokenId = 1;

/// Word tokenizer
///
/// Each instance owns its vocabulary; fitting requires `&mut self` and
/// encoding only `&self`, so a fitted tokenizer can be shared for reads.
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    config: WordTokenizerConfig,
    normalizer: Normalizer,
    vocab: Vocabulary,
}

impl WordTokenizer {
    /// Create an unfitted tokenizer
    ///
    /// # Errors
    /// Returns error if the filter set cannot be compiled.
    pub fn new(config: WordTokenizerConfig) -> Result<Self> {
        Self::with_vocabulary(config, Vocabulary::new())
    }

    pub(crate) fn with_vocabulary(config: WordTokenizerConfig, vocab: Vocabulary) -> Result<Self> {
        let normalizer = Normalizer::new(&config)?;
        Ok(Self { config, normalizer, vocab })
    }

    /// Normalize text into words
    pub fn clean_text(&self, text: &str) -> Vec<String> {
        self.normalizer.clean(text)
    }

    /// Count the words of every text and rebuild the index mappings
    ///
    /// Counts accumulate across calls; indices are recomputed from scratch.
    pub fn fit_on_texts<S: AsRef<str>>(&mut self, texts: &[S]) {
        for text in texts {
            let words = self.normalizer.clean(text.as_ref());
            self.vocab.count(words);
        }
        self.vocab.rebuild(&self.config.oov_token);
    }

    /// Encode each text into a sequence of word indices
    pub fn texts_to_sequences<S: AsRef<str>>(&self, texts: &[S]) -> Vec<Vec<TokenId>> {
        texts.iter().map(|text| self.text_to_sequence(text.as_ref())).collect()
    }

    /// Encode one text
    ///
    /// Unknown words, and words whose index is at or above `num_words`, become
    /// [`OOV_INDEX`] when an OOV token is configured and are dropped otherwise.
    pub fn text_to_sequence(&self, text: &str) -> Vec<TokenId> {
        self.normalizer
            .clean(text)
            .iter()
            .filter_map(|word| {
                self.vocab.index_of(word).filter(|&i| self.within_cap(i)).or(self.oov_index())
            })
            .collect()
    }

    /// Decode each sequence into space-joined words
    pub fn sequences_to_texts(&self, sequences: &[Vec<TokenId>]) -> Vec<String> {
        sequences.iter().map(|seq| self.sequence_to_text(seq)).collect()
    }

    /// Decode one sequence
    ///
    /// Indices outside the vocabulary or the cap follow the same OOV rule as
    /// encoding.
    pub fn sequence_to_text(&self, sequence: &[TokenId]) -> String {
        let oov = self.config.has_oov().then_some(self.config.oov_token.as_str());
        sequence
            .iter()
            .filter_map(|&index| {
                if self.within_cap(index) {
                    self.vocab.word_at(index).or(oov)
                } else {
                    oov
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn within_cap(&self, index: TokenId) -> bool {
        self.config.effective_num_words().map_or(true, |cap| index < cap)
    }

    /// Index emitted for out-of-vocabulary words
    pub fn oov_index(&self) -> Option<TokenId> {
        self.config.has_oov().then_some(OOV_INDEX)
    }

    /// Configuration this tokenizer was built with
    pub fn config(&self) -> &WordTokenizerConfig {
        &self.config
    }

    /// Learned vocabulary
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Whether any vocabulary has been learned or loaded
    pub fn is_fitted(&self) -> bool {
        !self.vocab.is_empty()
    }
}

impl SequenceEncoder for WordTokenizer {
    fn fit_batch(&mut self, texts: &[&str]) {
        self.fit_on_texts(texts);
    }

    fn encode_text(&self, text: &str) -> Vec<TokenId> {
        self.text_to_sequence(text)
    }

    fn decode_sequence(&self, ids: &[TokenId]) -> String {
        self.sequence_to_text(ids)
    }

    fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    fn index_of(&self, word: &str) -> Option<TokenId> {
        self.vocab.index_of(word)
    }

    fn word_at(&self, id: TokenId) -> Option<&str> {
        self.vocab.word_at(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORPUS: [&str; 2] = ["the cat sat", "the dog sat"];

    fn default_tokenizer() -> WordTokenizer {
        WordTokenizer::new(WordTokenizerConfig::default()).unwrap()
    }

    fn fitted(config: WordTokenizerConfig) -> WordTokenizer {
        let mut tokenizer = WordTokenizer::new(config).unwrap();
        tokenizer.fit_on_texts(&CORPUS);
        tokenizer
    }

    #[test]
    fn test_new_is_unfitted() {
        let tokenizer = default_tokenizer();
        assert!(!tokenizer.is_fitted());
        assert_eq!(tokenizer.vocab_size(), 0);
        assert_eq!(tokenizer.oov_index(), None);
    }

    #[test]
    fn test_fit_counts_and_ranks() {
        let tokenizer = fitted(WordTokenizerConfig::default());
        let vocab = tokenizer.vocabulary();
        assert_eq!(vocab.count_of("the"), 2);
        assert_eq!(vocab.count_of("cat"), 1);
        assert_eq!(vocab.count_of("sat"), 2);
        assert_eq!(vocab.count_of("dog"), 1);
        assert_eq!(vocab.index_of("the"), Some(1));
        assert_eq!(vocab.index_of("sat"), Some(2));
        assert_eq!(vocab.index_of("cat"), Some(3));
        assert_eq!(vocab.index_of("dog"), Some(4));
    }

    #[test]
    fn test_encode_known_words() {
        let tokenizer = fitted(WordTokenizerConfig::default());
        assert_eq!(tokenizer.texts_to_sequences(&["the dog"]), vec![vec![1, 4]]);
    }

    #[test]
    fn test_encode_with_oov() {
        let tokenizer = fitted(WordTokenizerConfig::default().with_oov_token("<OOV>"));
        assert_eq!(tokenizer.vocabulary().index_of("<OOV>"), Some(1));
        assert_eq!(tokenizer.vocabulary().index_of("the"), Some(2));
        assert_eq!(tokenizer.vocabulary().index_of("dog"), Some(5));
        assert_eq!(tokenizer.texts_to_sequences(&["the fox"]), vec![vec![2, 1]]);
    }

    #[test]
    fn test_encode_unknown_without_oov_drops_words() {
        let tokenizer = fitted(WordTokenizerConfig::default());
        assert_eq!(tokenizer.text_to_sequence("fox jumps"), Vec::<TokenId>::new());
        assert_eq!(tokenizer.text_to_sequence("fox the"), vec![1]);
    }

    #[test]
    fn test_encode_cap_excludes_indices_at_or_above() {
        let tokenizer = fitted(WordTokenizerConfig::default().with_num_words(3));
        // the=1, sat=2 kept; cat=3, dog=4 dropped
        assert_eq!(tokenizer.text_to_sequence("the sat cat dog"), vec![1, 2]);

        let tokenizer =
            fitted(WordTokenizerConfig::default().with_num_words(3).with_oov_token("<OOV>"));
        // <OOV>=1, the=2 kept; sat=3 and above become OOV
        assert_eq!(tokenizer.text_to_sequence("the sat cat"), vec![2, 1, 1]);
    }

    #[test]
    fn test_encode_zero_cap_is_unlimited() {
        let tokenizer = fitted(WordTokenizerConfig::default().with_num_words(0));
        assert_eq!(tokenizer.text_to_sequence("dog"), vec![4]);
    }

    #[test]
    fn test_encode_preserves_input_order() {
        let tokenizer = fitted(WordTokenizerConfig::default());
        assert_eq!(
            tokenizer.texts_to_sequences(&["dog", "cat", "the sat"]),
            vec![vec![4], vec![3], vec![1, 2]]
        );
    }

    #[test]
    fn test_fit_accumulates_across_calls() {
        let mut tokenizer = fitted(WordTokenizerConfig::default());
        tokenizer.fit_on_texts(&["dog dog dog"]);
        let vocab = tokenizer.vocabulary();
        assert_eq!(vocab.count_of("dog"), 4);
        assert_eq!(vocab.index_of("dog"), Some(1));
        assert_eq!(vocab.index_of("the"), Some(2));
        assert_eq!(vocab.len(), 4);
    }

    #[test]
    fn test_fit_empty_text_counts_empty_word() {
        let mut tokenizer = default_tokenizer();
        tokenizer.fit_on_texts(&["", "a"]);
        assert_eq!(tokenizer.vocabulary().index_of(""), Some(1));
        assert_eq!(tokenizer.vocabulary().index_of("a"), Some(2));
    }

    #[test]
    fn test_fit_empty_text_dropped_when_configured() {
        let mut tokenizer =
            WordTokenizer::new(WordTokenizerConfig::default().with_drop_empty_tokens(true)).unwrap();
        tokenizer.fit_on_texts(&["", "a "]);
        assert_eq!(tokenizer.vocabulary().index_of(""), None);
        assert_eq!(tokenizer.vocab_size(), 1);
    }

    #[test]
    fn test_encode_does_not_mutate() {
        let tokenizer = fitted(WordTokenizerConfig::default().with_oov_token("<OOV>"));
        let before = tokenizer.vocabulary().clone();
        let _ = tokenizer.texts_to_sequences(&["unknown words here", "the cat"]);
        assert_eq!(tokenizer.vocabulary(), &before);
    }

    #[test]
    fn test_decode_sequence() {
        let tokenizer = fitted(WordTokenizerConfig::default());
        assert_eq!(tokenizer.sequence_to_text(&[1, 3, 2]), "the cat sat");
        assert_eq!(tokenizer.sequence_to_text(&[1, 99]), "the");
    }

    #[test]
    fn test_decode_with_oov() {
        let tokenizer = fitted(WordTokenizerConfig::default().with_oov_token("<OOV>"));
        assert_eq!(tokenizer.sequences_to_texts(&[vec![2, 1, 99]]), vec!["the <OOV> <OOV>"]);
    }

    #[test]
    fn test_sequence_encoder_trait() {
        let mut tokenizer = default_tokenizer();
        let encoder: &mut dyn SequenceEncoder = &mut tokenizer;
        encoder.fit_batch(&CORPUS);
        assert_eq!(encoder.encode_batch(&["the dog", "sat"]), vec![vec![1, 4], vec![2]]);
        assert_eq!(encoder.decode_sequence(&[4]), "dog");
        assert_eq!(encoder.index_of("cat"), Some(3));
        assert_eq!(encoder.word_at(2), Some("sat"));
        assert_eq!(encoder.vocab_size(), 4);
    }
}
