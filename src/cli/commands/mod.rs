//! Subcommand implementations.

use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};

/// Chat mode command handler.
pub mod chat;

/// Configure command handler.
pub mod configure;

/// Glossary store command handler.
pub mod glossary;

/// Polish command handler.
pub mod polish;

/// One-shot translation command handler.
pub mod translate;

/// Loads the config file and applies CLI overrides.
pub fn load_config(options: &ResolveOptions) -> Result<ResolvedConfig> {
    let file_config = ConfigManager::new().load_or_default()?;
    resolve_config(options, &file_config)
}
