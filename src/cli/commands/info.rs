//! Info command implementation

use serde::Serialize;

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{InfoArgs, OutputFormat};
use crate::error::{Error, Result};
use crate::tokenizer::{TokenId, Vocabulary};

/// Summary of a saved vocabulary
#[derive(Debug, Serialize, PartialEq)]
pub struct VocabularyReport {
    pub indexed_words: usize,
    pub counted_words: usize,
    pub total_occurrences: usize,
    pub top: Vec<RankedWord>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct RankedWord {
    pub index: TokenId,
    pub word: String,
    pub count: usize,
}

impl VocabularyReport {
    pub fn new(vocab: &Vocabulary, top: usize) -> Self {
        Self {
            indexed_words: vocab.len(),
            counted_words: vocab.word_counts().len(),
            total_occurrences: vocab.word_counts().values().sum(),
            top: vocab
                .top(top)
                .into_iter()
                .map(|(index, word, count)| RankedWord { index, word: word.to_string(), count })
                .collect(),
        }
    }
}

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<()> {
    let json = std::fs::read_to_string(&args.vocab).map_err(|e| {
        Error::ConfigError(format!("Failed to read {}: {e}", args.vocab.display()))
    })?;
    let vocab = Vocabulary::from_json(&json)?;
    let report = VocabularyReport::new(&vocab, args.top);

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Vocabulary Info:");
            println!();
            println!("Indexed words: {}", report.indexed_words);
            println!("Counted words: {}", report.counted_words);
            println!("Total occurrences: {}", report.total_occurrences);
            if !report.top.is_empty() {
                println!("Top {}:", report.top.len());
                for entry in &report.top {
                    println!("  [{}] {:?} x{}", entry.index, entry.word, entry.count);
                }
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| Error::ConfigError(format!("JSON serialization error: {e}")))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&report)
                .map_err(|e| Error::ConfigError(format!("YAML serialization error: {e}")))?;
            println!("{yaml}");
        }
    }

    Ok(())
}
