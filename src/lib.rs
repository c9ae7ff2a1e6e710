//! # glossa - Glossary-Aware Translation Chat
//!
//! `glossa` is a terminal client for a glossary translation backend. Every
//! message goes through a two-stage exchange: the backend first proposes
//! glossary terms found in the text, the user confirms or edits them, and
//! only then is the translation produced with that glossary applied.
//!
//! ## Features
//!
//! - **Glossary confirmation**: Review each proposed term before translating
//! - **Term highlighting**: Glossary terms and definitions are marked in replies
//! - **Glossary store**: Add, edit, remove and export stored terms
//! - **Interactive mode**: Chat-style sessions with `glossa chat`
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive chat
//! glossa
//!
//! # Translate a file, accepting the suggested glossary
//! glossa translate --yes ./notes.txt
//!
//! # Polish English text from stdin
//! echo "She go to school." | glossa polish
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/glossa/config.toml`:
//!
//! ```toml
//! [glossa]
//! endpoint = "http://127.0.0.1:8000"
//! highlight = true
//! ```
//!
//! ## Library use
//!
//! The exchange state machine is independent of the terminal:
//!
//! ```no_run
//! # async fn demo() -> anyhow::Result<()> {
//! use glossa_cli::backend::BackendClient;
//! use glossa_cli::exchange::{ExchangeSession, StepOutcome};
//!
//! let client = BackendClient::new("http://127.0.0.1:8000")?;
//! let mut session = ExchangeSession::new();
//!
//! if session.start(&client, "训练一个新的模型").await? == StepOutcome::NeedsConfirmation {
//!     session.edit_candidate("模型", "model")?;
//!     session.confirm(&client).await?;
//! }
//! # Ok(())
//! # }
//! ```

/// HTTP client for the translation backend.
pub mod backend;

/// Interactive chat mode.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// Two-stage glossary confirmation exchange.
pub mod exchange;

/// File system utilities.
pub mod fs;

/// Glossary block parsing and term highlighting.
pub mod glossary;

/// Input reading from files and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Append-only chat transcript.
pub mod transcript;

/// Terminal UI components (spinner, colors).
pub mod ui;
