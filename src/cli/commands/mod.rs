//! CLI command implementations

mod decode;
mod encode;
mod fit;
mod info;


use std::path::Path;

use crate::cli::LogLevel;
use crate::config::{Cli, Command};
use crate::error::{Error, Result};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> std::result::Result<(), String> {
    let log_level = LogLevel::from_flags(cli.quiet, cli.verbose);

    let result = match cli.command {
        Command::Fit(args) => fit::run_fit(args, log_level),
        Command::Encode(args) => encode::run_encode(args, log_level),
        Command::Decode(args) => decode::run_decode(args, log_level),
        Command::Info(args) => info::run_info(args, log_level),
    };
    result.map_err(|e| e.to_string())
}

/// Read a text file as one text per line
fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::ConfigError(format!("Failed to read {}: {e}", path.display()))
    })?;
    Ok(content.lines().map(str::to_string).collect())
}
