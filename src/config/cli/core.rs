//! Core CLI types - Cli, Command, and argument structs

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;
use crate::config::schema::TokenizerSpec;
use crate::tokenizer::TokenId;

/// Wordindex: frequency-ranked word vocabularies and sequence encoding
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "wordindex")]
#[command(version)]
#[command(about = "Build word vocabularies from text and encode text into integer sequences")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Learn a vocabulary from corpus files (one text per line)
    Fit(FitArgs),

    /// Encode texts with a saved vocabulary
    Encode(EncodeArgs),

    /// Decode index sequences back into words
    Decode(DecodeArgs),

    /// Summarize a saved vocabulary
    Info(InfoArgs),
}

/// Tokenizer options shared by commands that normalize text
#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct TokenizerArgs {
    /// Path to YAML tokenizer configuration
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Keep only word indices below N (0 = unlimited)
    #[arg(short = 'n', long, value_name = "N")]
    pub num_words: Option<usize>,

    /// Token substituted for out-of-vocabulary words (takes index 1)
    #[arg(long, value_name = "TOKEN")]
    pub oov_token: Option<String>,

    /// Characters to strip from text
    #[arg(long, value_name = "CHARS")]
    pub filters: Option<String>,

    /// Keep original letter case
    #[arg(long)]
    pub no_lowercase: bool,
}

/// Arguments for the fit command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct FitArgs {
    /// Corpus files, one text per line
    #[arg(value_name = "CORPUS", required = true)]
    pub corpus: Vec<PathBuf>,

    /// Where to write the vocabulary snapshot
    #[arg(short, long)]
    pub output: PathBuf,

    #[command(flatten)]
    pub tokenizer: TokenizerArgs,
}

/// Arguments for the encode command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct EncodeArgs {
    /// Vocabulary snapshot produced by `fit`
    #[arg(value_name = "VOCAB")]
    pub vocab: PathBuf,

    /// Texts to encode
    #[arg(value_name = "TEXT")]
    pub texts: Vec<String>,

    /// Read texts from a file, one per line
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub tokenizer: TokenizerArgs,
}

/// Arguments for the decode command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct DecodeArgs {
    /// Vocabulary snapshot produced by `fit`
    #[arg(value_name = "VOCAB")]
    pub vocab: PathBuf,

    /// Word indices to decode
    #[arg(value_name = "ID", required = true)]
    pub ids: Vec<TokenId>,

    #[command(flatten)]
    pub tokenizer: TokenizerArgs,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Vocabulary snapshot produced by `fit`
    #[arg(value_name = "VOCAB")]
    pub vocab: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Number of top-ranked words to list
    #[arg(short, long, default_value_t = 10)]
    pub top: usize,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to a TokenizerSpec
pub fn apply_overrides(spec: &mut TokenizerSpec, args: &TokenizerArgs) {
    if let Some(num_words) = args.num_words {
        spec.tokenizer.num_words = Some(num_words);
    }
    if let Some(oov_token) = &args.oov_token {
        spec.tokenizer.oov_token = oov_token.clone();
    }
    if let Some(filters) = &args.filters {
        spec.tokenizer.filters = filters.clone();
    }
    if args.no_lowercase {
        spec.tokenizer.lowercase = false;
    }
}
