use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;

/// Backend address used when neither the CLI nor the config file sets one.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000";

/// Settings in the `[glossa]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaConfig {
    /// Base URL of the translation backend.
    pub endpoint: Option<String>,
    /// Highlight glossary terms in replies.
    pub highlight: Option<bool>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/glossa/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub glossa: GlossaConfig,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Backend base URL, without a trailing slash.
    pub endpoint: String,
    /// Whether glossary terms are highlighted in chat output.
    pub highlight: bool,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Backend endpoint override.
    pub endpoint: Option<String>,
    /// Disable highlighting regardless of the config file.
    pub no_highlight: bool,
}

/// The configured endpoint is not an http(s) URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEndpoint(pub String);

impl fmt::Display for InvalidEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid endpoint '{}'\n\n\
             The endpoint must start with http:// or https://, e.g.:\n  \
             - CLI option: glossa --endpoint {DEFAULT_ENDPOINT}\n  \
             - Config file: ~/.config/glossa/config.toml",
            self.0
        )
    }
}

impl std::error::Error for InvalidEndpoint {}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI options, then the config file, then built-in defaults.
///
/// # Errors
///
/// Returns [`InvalidEndpoint`] if the chosen endpoint is not an http(s) URL.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let endpoint = options
        .endpoint
        .as_deref()
        .or(config_file.glossa.endpoint.as_deref())
        .unwrap_or(DEFAULT_ENDPOINT)
        .trim();

    if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
        return Err(InvalidEndpoint(endpoint.to_string()).into());
    }

    let highlight = !options.no_highlight && config_file.glossa.highlight.unwrap_or(true);

    Ok(ResolvedConfig {
        endpoint: endpoint.trim_end_matches('/').to_string(),
        highlight,
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a config manager for the default location.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/glossa/config.toml`
    /// or `~/.config/glossa/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Self {
        Self::with_path(paths::config_dir().join("config.toml"))
    }

    /// Creates a config manager for an explicit file.
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config file, falling back to defaults when it is missing.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if !self.config_path.exists() {
            return Ok(ConfigFile::default());
        }
        self.load()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
