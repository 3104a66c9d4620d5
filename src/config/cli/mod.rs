//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! wordindex fit corpus.txt --output vocab.json --oov-token "<OOV>"
//! wordindex encode vocab.json "the cat sat" --oov-token "<OOV>"
//! wordindex encode vocab.json --input texts.txt --config tokenizer.yaml
//! wordindex decode vocab.json 2 5 1
//! wordindex info vocab.json --format json --top 20
//! ```

mod core;
mod types;


pub use self::core::{
    apply_overrides, parse_args, Cli, Command, DecodeArgs, EncodeArgs, FitArgs, InfoArgs,
    TokenizerArgs,
};
pub use types::OutputFormat;
