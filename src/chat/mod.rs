//! Interactive chat mode for glossary-aware translation.
//!
//! Provides a REPL-style interface with slash commands. Each message goes
//! through the two-stage exchange; when the backend finds glossary terms
//! the user confirms or edits them before the translation is produced.

/// Slash command parsing and autocomplete.
pub mod command;
pub(crate) mod panel;
mod session;
pub(crate) mod ui;

pub use session::ChatSession;
