//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_config;
use crate::config::schema::TokenizerSpec;
use crate::tokenizer::WordTokenizerConfig;
use proptest::prelude::*;

fn arb_valid_spec() -> impl Strategy<Value = TokenizerSpec> {
    (
        proptest::option::of(prop_oneof![Just(0usize), 2usize..100_000]), // num_words
        "[<>A-Za-z]{0,8}",                                                 // oov_token
        "[!-/:-@]{0,12}",                                                  // filters
        proptest::bool::ANY,                                               // lowercase
    )
        .prop_map(|(num_words, oov_token, filters, lowercase)| TokenizerSpec {
            tokenizer: WordTokenizerConfig {
                num_words,
                oov_token,
                filters,
                lowercase,
                ..Default::default()
            },
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_spec_passes(spec in arb_valid_spec()) {
        prop_assert!(validate_config(&spec).is_ok());
    }

    #[test]
    fn prop_num_words_one_fails(spec in arb_valid_spec()) {
        let mut spec = spec;
        spec.tokenizer.num_words = Some(1);
        prop_assert_eq!(validate_config(&spec), Err(ValidationError::InvalidNumWords(1)));
    }

    #[test]
    fn prop_whitespace_oov_fails(spec in arb_valid_spec(), pad in "[ \t\n]{1,3}") {
        let mut spec = spec;
        spec.tokenizer.oov_token = format!("oov{pad}token");
        prop_assert!(matches!(validate_config(&spec), Err(ValidationError::InvalidOovToken(_))));
    }
}
