//! Fit command implementation

use super::read_lines;
use crate::cli::logging::{log, warn};
use crate::cli::LogLevel;
use crate::config::{resolve_config, FitArgs};
use crate::error::Result;
use crate::tokenizer::WordTokenizer;

pub fn run_fit(args: FitArgs, level: LogLevel) -> Result<()> {
    let spec = resolve_config(&args.tokenizer)?;
    let mut tokenizer = WordTokenizer::new(spec.tokenizer)?;

    let mut texts = Vec::new();
    for path in &args.corpus {
        let lines = read_lines(path)?;
        let msg = format!("  Read {} texts from {}", lines.len(), path.display());
        log(level, LogLevel::Verbose, &msg);
        texts.extend(lines);
    }
    if texts.is_empty() {
        warn(level, "corpus is empty; the vocabulary will only hold the OOV token, if any");
    }

    tokenizer.fit_on_texts(&texts);
    tokenizer.save(&args.output)?;

    let vocab = tokenizer.vocabulary();
    log(
        level,
        LogLevel::Normal,
        &format!("✓ Fitted {} words from {} texts", vocab.len(), texts.len()),
    );
    log(level, LogLevel::Normal, &format!("  Saved to {}", args.output.display()));
    for (index, word, count) in vocab.top(5) {
        log(level, LogLevel::Verbose, &format!("  [{index}] {word:?} x{count}"));
    }

    Ok(())
}
