//! Encode command implementation

use super::read_lines;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{resolve_config, EncodeArgs};
use crate::error::{Error, Result};
use crate::tokenizer::WordTokenizer;

pub fn run_encode(args: EncodeArgs, level: LogLevel) -> Result<()> {
    let spec = resolve_config(&args.tokenizer)?;
    let tokenizer = WordTokenizer::load(&args.vocab, spec.tokenizer)?;

    let mut texts = args.texts;
    if let Some(input) = &args.input {
        texts.extend(read_lines(input)?);
    }
    if texts.is_empty() {
        return Err(Error::ConfigError(
            "No texts to encode; pass TEXT arguments or --input".to_string(),
        ));
    }

    let msg = format!(
        "Encoding {} texts with {} indexed words",
        texts.len(),
        tokenizer.vocabulary().len()
    );
    log(level, LogLevel::Verbose, &msg);

    let sequences = tokenizer.texts_to_sequences(&texts);
    let json = serde_json::to_string(&sequences)
        .map_err(|e| Error::ConfigError(format!("JSON serialization error: {e}")))?;
    println!("{json}");

    Ok(())
}
