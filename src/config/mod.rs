//! Tokenizer configuration: CLI arguments, YAML schema, loading and validation

pub mod cli;
mod loader;
mod schema;
mod validate;

pub use cli::{
    apply_overrides, parse_args, Cli, Command, DecodeArgs, EncodeArgs, FitArgs, InfoArgs,
    OutputFormat, TokenizerArgs,
};
pub use loader::{load_config, resolve_config};
pub use schema::TokenizerSpec;
pub use validate::{validate_config, ValidationError};
