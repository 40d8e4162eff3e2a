//! Command implementations for tagyaml.
//!
//! This module builds the active configuration from the global flags and
//! routes each command to its handler.

mod reprefix;
mod resolve;
mod unwrap;

use crate::cli::{Cli, Command, ConfigArgs};
use tagyaml::{KeyConfig, Result};

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = load_config(&cli.config)?;
    tracing::debug!(tag = %config.tag, prefix = %config.prefix, "active configuration");

    match cli.command {
        Command::Resolve(args) => resolve::cmd_resolve(&config, args),
        Command::Unwrap(args) => unwrap::cmd_unwrap(&config, args),
        Command::Reprefix(args) => reprefix::cmd_reprefix(&config, args),
    }
}

/// Config file (or defaults), then command-line overrides, then validation.
pub(crate) fn load_config(args: &ConfigArgs) -> Result<KeyConfig> {
    let mut config = match &args.config {
        Some(path) => KeyConfig::load(path)?,
        None => KeyConfig::default(),
    };

    if let Some(tag) = &args.tag {
        config.tag = tag.clone();
    }
    if let Some(prefix) = &args.prefix {
        config.prefix = prefix.clone();
    }

    config.validate()?;
    Ok(config)
}
