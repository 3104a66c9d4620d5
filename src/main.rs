//! Wordindex CLI
//!
//! # Usage
//!
//! ```bash
//! # Learn a vocabulary
//! wordindex fit corpus.txt --output vocab.json --oov-token "<OOV>"
//!
//! # Encode texts
//! wordindex encode vocab.json "the cat sat" --oov-token "<OOV>"
//!
//! # Inspect a vocabulary
//! wordindex info vocab.json --format yaml
//! ```

use clap::Parser;
use std::process::ExitCode;
use wordindex::cli::{run_command, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
