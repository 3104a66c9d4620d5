//! Loading tokenizer configuration from YAML

use std::fs;
use std::path::Path;

use super::cli::{apply_overrides, TokenizerArgs};
use super::schema::TokenizerSpec;
use super::validate::validate_config;
use crate::error::{Error, Result};

/// Load, parse and validate a YAML tokenizer configuration
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<TokenizerSpec> {
    let yaml_content = fs::read_to_string(config_path.as_ref()).map_err(|e| {
        Error::ConfigError(format!(
            "Failed to read config file {}: {}",
            config_path.as_ref().display(),
            e
        ))
    })?;

    let spec: TokenizerSpec = serde_yaml::from_str(&yaml_content)
        .map_err(|e| Error::ConfigError(format!("Failed to parse YAML config: {e}")))?;

    validate_config(&spec)?;
    Ok(spec)
}

/// Build the effective spec for a command: config file (or defaults) plus overrides
pub fn resolve_config(args: &TokenizerArgs) -> Result<TokenizerSpec> {
    let mut spec = match &args.config {
        Some(path) => load_config(path)?,
        None => TokenizerSpec::default(),
    };
    apply_overrides(&mut spec, args);
    validate_config(&spec)?;
    Ok(spec)
}
