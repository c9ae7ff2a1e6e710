//! Chat mode UI components.

use crate::config::ResolvedConfig;
use crate::glossary::{ARROW, GlossaryMapping, Highlighter, Marker, format_glossary_block};
use crate::output;
use crate::transcript::{Entry, EntryKind};
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(endpoint: &str) {
    println!(
        "{} {} - Glossary Translation Chat",
        Style::header("glossa"),
        Style::version(format!("v{VERSION}"))
    );
    println!("{}", Style::secondary(endpoint));
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_config(config: &ResolvedConfig) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::value(&config.endpoint)
    );
    println!(
        "  {}  {}",
        Style::label("highlight"),
        Style::value(if config.highlight { "on" } else { "off" })
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    for (command, description) in [
        ("/config   ", "Show current configuration"),
        ("/glossary ", "Show the glossary from the last translation"),
        ("/highlight", "Toggle glossary highlighting"),
        ("/polish   ", "Fix grammar and spelling: /polish <text>"),
        ("/help     ", "Show this help"),
        ("/quit     ", "Exit chat mode"),
    ] {
        println!(
            "  {}  {}",
            Style::command(command),
            Style::secondary(description)
        );
    }
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}

pub fn print_glossary(mapping: &GlossaryMapping, highlighter: Option<&Highlighter>) {
    if mapping.is_empty() {
        println!("{}", Style::hint("No glossary yet. Translate something first."));
        println!();
        return;
    }
    print_glossary_block(&format_glossary_block(mapping), highlighter);
}

/// Shows which message the candidates belong to before they are edited.
pub fn print_candidates_header(message: &str, count: usize) {
    println!(
        "{} {}",
        Style::header("Confirm glossary"),
        Style::secondary(format!("({count} terms, Enter keeps the suggestion, Esc cancels)"))
    );
    println!("  {}", Style::user(message));
}

/// Renders transcript entries appended since the last render.
pub fn render_entries(entries: &[Entry], highlighter: Option<&Highlighter>) {
    for entry in entries {
        match entry.kind {
            // Already on screen as the answered prompt
            EntryKind::User => {}
            EntryKind::Glossary => print_glossary_block(&entry.text, highlighter),
            EntryKind::Assistant => {
                println!("{}", highlight(&entry.text, highlighter));
                println!();
            }
            EntryKind::Error => print_error(&entry.text),
            EntryKind::Notice => {
                println!("{}", Style::hint(&entry.text));
                println!();
            }
        }
    }
}

fn print_glossary_block(block: &str, highlighter: Option<&Highlighter>) {
    println!("{}", Style::header("Glossary"));
    for line in block.lines().filter(|l| !l.trim().is_empty()) {
        println!("{}", glossary_line(line, highlighter));
    }
    println!();
}

// Only the definition column is highlighted; the term is already styled
fn glossary_line(line: &str, highlighter: Option<&Highlighter>) -> String {
    match line.split_once(ARROW) {
        Some((term, definition)) => format!(
            "  {} {} {}",
            Style::value(term.trim()),
            Style::secondary(ARROW),
            highlight(definition.trim(), highlighter)
        ),
        None => format!("  {}", Style::secondary(line.trim())),
    }
}

fn highlight(text: &str, highlighter: Option<&Highlighter>) -> String {
    let Some(highlighter) = highlighter else {
        return text.to_string();
    };

    // Without colors the ANSI marker would vanish, so fall back to brackets
    if output::is_no_color() {
        highlighter.highlight(text, &Marker::BRACKETS).into_owned()
    } else {
        highlighter
            .highlight_with(text, |span| Style::highlight(span))
            .into_owned()
    }
}
