//! Word Tokenization Module
//!
//! Learns a word vocabulary ranked by descending frequency and encodes text
//! into integer sequences for downstream numeric models.
//!
//! Fitting and encoding share one normalization step: lowercase, strip the
//! filter characters, collapse whitespace runs, split on spaces.
//!
//! # Example
//!
//! ```
//! use wordindex::tokenizer::{WordTokenizer, WordTokenizerConfig};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = WordTokenizerConfig::default().with_oov_token("<OOV>");
//!     let mut tokenizer = WordTokenizer::new(config)?;
//!
//!     tokenizer.fit_on_texts(&["the cat sat", "the dog sat"]);
//!     assert_eq!(tokenizer.texts_to_sequences(&["the fox"]), vec![vec![2, 1]]);
//!
//!     // Persist only the learned vocabulary
//!     let json = tokenizer.to_json()?;
//!     let restored = WordTokenizer::from_json(&json, tokenizer.config().clone())?;
//!     assert_eq!(restored.vocabulary(), tokenizer.vocabulary());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

mod codec;
mod config;
mod error;
mod normalize;
mod traits;
mod vocab;
mod word;

pub use codec::tokenizer_from_json;
pub use config::{WordTokenizerConfig, DEFAULT_FILTERS};
pub use error::{Result, TokenizerError};
pub use normalize::Normalizer;
pub use traits::{SequenceEncoder, TokenId};
pub use vocab::Vocabulary;
pub use word::{WordTokenizer, OOV_INDEX};
