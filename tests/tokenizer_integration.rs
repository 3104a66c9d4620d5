//! Integration tests for fitting, encoding and vocabulary snapshots

use proptest::prelude::*;
use wordindex::tokenizer::{
    tokenizer_from_json, SequenceEncoder, TokenizerError, Vocabulary, WordTokenizer,
    WordTokenizerConfig, OOV_INDEX,
};

const CORPUS: [&str; 2] = ["the cat sat", "the dog sat"];

fn fitted(config: WordTokenizerConfig) -> WordTokenizer {
    let mut tokenizer = WordTokenizer::new(config).expect("default filters should compile");
    tokenizer.fit_on_texts(&CORPUS);
    tokenizer
}

#[test]
fn test_scenario_default_config() {
    let tokenizer = fitted(WordTokenizerConfig::default());
    let vocab = tokenizer.vocabulary();

    let counts: Vec<(&str, usize)> =
        vocab.word_counts().iter().map(|(w, &c)| (w.as_str(), c)).collect();
    assert_eq!(counts, vec![("the", 2), ("cat", 1), ("sat", 2), ("dog", 1)]);

    let ranked: Vec<(&str, usize)> =
        vocab.word_index().iter().map(|(w, &i)| (w.as_str(), i)).collect();
    assert_eq!(ranked, vec![("the", 1), ("sat", 2), ("cat", 3), ("dog", 4)]);

    assert_eq!(tokenizer.texts_to_sequences(&["the dog"]), vec![vec![1, 4]]);
}

#[test]
fn test_scenario_oov_token() {
    let tokenizer = fitted(WordTokenizerConfig::default().with_oov_token("<OOV>"));
    let vocab = tokenizer.vocabulary();

    assert_eq!(vocab.index_of("<OOV>"), Some(1));
    assert_eq!(vocab.index_of("the"), Some(2));
    assert_eq!(vocab.index_of("sat"), Some(3));
    assert_eq!(vocab.index_of("cat"), Some(4));
    assert_eq!(vocab.index_of("dog"), Some(5));

    assert_eq!(tokenizer.texts_to_sequences(&["the fox"]), vec![vec![2, 1]]);
}

#[test]
fn test_punctuation_and_case_are_normalized() {
    let tokenizer = fitted(WordTokenizerConfig::default());
    assert_eq!(tokenizer.text_to_sequence("The   CAT, sat!"), vec![1, 3, 2]);
}

#[test]
fn test_snapshot_restores_encoder_with_supplied_config() {
    let config = WordTokenizerConfig::default().with_oov_token("<OOV>").with_num_words(4);
    let tokenizer = fitted(config.clone());
    let json = tokenizer.to_json().expect("serialization should succeed");

    let restored = WordTokenizer::from_json(&json, config).expect("snapshot should parse");
    assert_eq!(restored.vocabulary(), tokenizer.vocabulary());
    // cat=4 and dog=5 are at or above the cap
    assert_eq!(restored.text_to_sequence("the sat cat dog"), vec![2, 3, 1, 1]);
}

#[test]
fn test_snapshot_does_not_carry_config() {
    let tokenizer = fitted(WordTokenizerConfig::default().with_oov_token("<OOV>"));
    let json = tokenizer.to_json().expect("serialization should succeed");

    let restored = tokenizer_from_json(&json).expect("snapshot should parse");
    assert_eq!(restored.oov_index(), None);
    assert_eq!(restored.text_to_sequence("the fox"), vec![2]);
}

#[test]
fn test_malformed_snapshot_is_format_error() {
    let result = Vocabulary::from_json("{\"word_index\": {\"a\": 1}");
    assert!(matches!(result, Err(TokenizerError::Format(_))));
}

#[test]
fn test_independent_tokenizers_do_not_share_state() {
    let mut a = WordTokenizer::new(WordTokenizerConfig::default()).expect("valid config");
    let b = WordTokenizer::new(WordTokenizerConfig::default()).expect("valid config");
    a.fit_on_texts(&CORPUS);
    assert!(a.is_fitted());
    assert!(!b.is_fitted());
}

#[test]
fn test_fitted_tokenizer_is_shareable_across_threads() {
    let tokenizer = std::sync::Arc::new(fitted(WordTokenizerConfig::default()));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let tokenizer = std::sync::Arc::clone(&tokenizer);
            std::thread::spawn(move || tokenizer.encode_batch(&["the dog", "cat sat"]))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().expect("thread should not panic"), vec![vec![1, 4], vec![3, 2]]);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_roundtrip_and_bijection(
        texts in proptest::collection::vec("[a-d]{1,2}( [a-d]{1,2}){0,5}", 1..6),
        oov in proptest::bool::ANY,
    ) {
        let config = if oov {
            WordTokenizerConfig::default().with_oov_token("<OOV>")
        } else {
            WordTokenizerConfig::default()
        };
        let mut tokenizer = WordTokenizer::new(config.clone()).unwrap();
        tokenizer.fit_on_texts(&texts);

        let restored = WordTokenizer::from_json(&tokenizer.to_json().unwrap(), config).unwrap();
        let vocab = restored.vocabulary();
        prop_assert_eq!(vocab, tokenizer.vocabulary());
        for (index, word) in vocab.index_word() {
            prop_assert_eq!(vocab.index_of(word), Some(*index));
        }
        prop_assert_eq!(restored.texts_to_sequences(&texts), tokenizer.texts_to_sequences(&texts));
    }

    #[test]
    fn prop_unknown_only_text_is_all_oov(words in proptest::collection::vec("[w-z]{3}", 0..8)) {
        let tokenizer = fitted(WordTokenizerConfig::default().with_oov_token("<OOV>"));
        let text = words.join(" ");
        let expected = if words.is_empty() { 1 } else { words.len() };
        // An empty text normalizes to one empty word, which is unknown too
        prop_assert_eq!(tokenizer.text_to_sequence(&text), vec![OOV_INDEX; expected]);
    }
}
