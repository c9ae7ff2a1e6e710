//! Configure command handler for editing default settings.

use anyhow::Result;
use inquire::{Confirm, Text};

use crate::config::{
    ConfigFile, ConfigManager, DEFAULT_ENDPOINT, GlossaConfig, ResolveOptions, resolve_config,
};
use crate::ui::{Style, answered};

/// Runs the configure command.
///
/// With `show`, prints the stored settings; otherwise edits them interactively.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new();

    if show {
        let config = manager.load_or_default()?;
        print_current(&manager, &config);
        return Ok(());
    }

    let config = manager.load_or_default()?;
    print_current(&manager, &config);

    let Some(updated) = prompt_settings(&config)? else {
        println!();
        return Ok(());
    };

    // Refuse to save something every later command would reject
    resolve_config(&ResolveOptions::default(), &updated)?;
    manager.save(&updated)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

/// Asks for each setting, defaulting to the stored value.
///
/// Returns `None` if the user cancelled any prompt.
fn prompt_settings(config: &ConfigFile) -> Result<Option<ConfigFile>> {
    let current_endpoint = config
        .glossa
        .endpoint
        .clone()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    let endpoint = Text::new("Backend endpoint:")
        .with_default(&current_endpoint)
        .with_help_message("Base URL of the translation backend")
        .prompt();
    let Some(endpoint) = answered(endpoint)? else {
        return Ok(None);
    };

    let highlight = Confirm::new("Highlight glossary terms in replies?")
        .with_default(config.glossa.highlight.unwrap_or(true))
        .prompt();
    let Some(highlight) = answered(highlight)? else {
        return Ok(None);
    };

    Ok(Some(ConfigFile {
        glossa: GlossaConfig {
            endpoint: Some(endpoint.trim().to_string()),
            highlight: Some(highlight),
        },
    }))
}

fn print_current(manager: &ConfigManager, config: &ConfigFile) {
    println!("{}", Style::header("Current settings"));
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        config
            .glossa
            .endpoint
            .as_deref()
            .map_or_else(|| Style::secondary(format!("(default: {DEFAULT_ENDPOINT})")), Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("highlight"),
        config.glossa.highlight.map_or_else(
            || Style::secondary("(default: on)"),
            |on| Style::value(if on { "on" } else { "off" })
        )
    );
    println!(
        "  {}       {}",
        Style::label("file"),
        Style::secondary(manager.config_path().display())
    );
    println!();
}
