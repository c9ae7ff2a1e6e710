#![allow(clippy::unwrap_used)]
//! Config priority contract tests.
//!
//! These tests verify that CLI options take priority over config file settings.
//! Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file defaults
//! 3. Built-in defaults

use glossa_cli::config::{
    ConfigFile, ConfigManager, DEFAULT_ENDPOINT, GlossaConfig, ResolveOptions, resolve_config,
};
use tempfile::TempDir;

fn make_config_with_defaults() -> ConfigFile {
    ConfigFile {
        glossa: GlossaConfig {
            endpoint: Some("http://config.local:8000".to_string()),
            highlight: Some(false),
        },
    }
}

#[test]
fn test_cli_endpoint_overrides_config_endpoint() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        endpoint: Some("http://cli.local:9000".to_string()),
        no_highlight: false,
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.endpoint, "http://cli.local:9000");
}

#[test]
fn test_config_endpoint_used_when_cli_not_specified() {
    let config = make_config_with_defaults();

    let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

    assert_eq!(resolved.endpoint, "http://config.local:8000");
    assert!(!resolved.highlight);
}

#[test]
fn test_builtin_defaults_when_nothing_configured() {
    let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

    assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
    assert!(resolved.highlight);
}

#[test]
fn test_cli_no_highlight_wins_over_config() {
    let mut config = make_config_with_defaults();
    config.glossa.highlight = Some(true);
    let options = ResolveOptions {
        endpoint: None,
        no_highlight: true,
    };

    assert!(!resolve_config(&options, &config).unwrap().highlight);
}

#[test]
fn test_invalid_cli_endpoint_is_rejected_even_with_valid_config() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        endpoint: Some("config.local".to_string()),
        no_highlight: false,
    };

    assert!(resolve_config(&options, &config).is_err());
}

#[test]
fn test_saved_config_feeds_resolution() {
    let temp_dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_path(temp_dir.path().join("glossa").join("config.toml"));
    manager.save(&make_config_with_defaults()).unwrap();

    let loaded = manager.load_or_default().unwrap();
    let resolved = resolve_config(&ResolveOptions::default(), &loaded).unwrap();

    assert_eq!(resolved.endpoint, "http://config.local:8000");
}
