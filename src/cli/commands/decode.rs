//! Decode command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{resolve_config, DecodeArgs};
use crate::error::Result;
use crate::tokenizer::WordTokenizer;

pub fn run_decode(args: DecodeArgs, level: LogLevel) -> Result<()> {
    let spec = resolve_config(&args.tokenizer)?;
    let tokenizer = WordTokenizer::load(&args.vocab, spec.tokenizer)?;

    log(level, LogLevel::Verbose, &format!("Decoding {} indices", args.ids.len()));
    println!("{}", tokenizer.sequence_to_text(&args.ids));

    Ok(())
}
