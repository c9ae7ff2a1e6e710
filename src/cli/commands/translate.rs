use anyhow::{Result, bail};

use super::load_config;
use crate::backend::BackendClient;
use crate::chat::panel;
use crate::config::ResolveOptions;
use crate::exchange::{ExchangeSession, StepOutcome};
use crate::input::InputReader;
use crate::output;
use crate::transcript::EntryKind;
use crate::ui::{Spinner, Style};

pub struct TranslateOptions {
    pub file: Option<String>,
    /// Accept the backend's suggested glossary as-is.
    pub yes: bool,
}

/// Runs one exchange to completion and prints the reply to stdout.
///
/// The glossary block and all prompts go to stderr so the translation can
/// be piped.
pub async fn run_translate(options: &TranslateOptions, resolve: &ResolveOptions) -> Result<()> {
    let config = load_config(resolve)?;
    let message = InputReader::read_message(options.file.as_deref())?;
    let client = BackendClient::new(config.endpoint)?;
    let mut session = ExchangeSession::new();

    let outcome = {
        let _spinner = Spinner::for_request("Looking up glossary...");
        session.start(&client, &message).await?
    };

    if outcome == StepOutcome::NeedsConfirmation {
        let count = session.candidates().map_or(0, |c| c.len());

        if options.yes {
            crate::status!("Using the suggested glossary ({count} terms)");
        } else {
            crate::status!(
                "{} {}",
                Style::header("Confirm glossary"),
                Style::secondary(format!("({count} terms, Enter keeps the suggestion)"))
            );
            if !panel::edit_candidates(&mut session)? {
                session.abandon();
                bail!("Glossary confirmation cancelled");
            }
        }

        let _spinner = Spinner::for_request("Translating...");
        session.confirm(&client).await?;
    }

    for entry in session.transcript().entries() {
        match entry.kind {
            EntryKind::Glossary => {
                crate::status!("{}\n{}\n", Style::header("Glossary"), entry.text);
            }
            EntryKind::Assistant => println!("{}", entry.text),
            EntryKind::User | EntryKind::Error | EntryKind::Notice => {}
        }
    }
    output::flush_stderr();

    Ok(())
}
