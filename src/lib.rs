//! Wordindex: frequency-ranked word vocabularies for text preprocessing
//!
//! Learns a mapping from words to integer indices ordered by descending
//! frequency, then converts new text into integer sequences for numeric
//! models.
//!
//! # Modules
//!
//! - [`tokenizer`] - Normalization, vocabulary building, encoding and snapshots
//! - [`config`] - CLI arguments and YAML tokenizer configuration
//! - [`cli`] - Command handlers for the `wordindex` binary
//!
//! # Example
//!
//! ```
//! use wordindex::{WordTokenizer, WordTokenizerConfig};
//!
//! let mut tokenizer = WordTokenizer::new(WordTokenizerConfig::default()).unwrap();
//! tokenizer.fit_on_texts(&["the cat sat", "the dog sat"]);
//!
//! assert_eq!(tokenizer.texts_to_sequences(&["the dog"]), vec![vec![1, 4]]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod tokenizer;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use tokenizer::{
    tokenizer_from_json, SequenceEncoder, TokenizerError, Vocabulary, WordTokenizer,
    WordTokenizerConfig,
};
