//! Glossary store command handler.

use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;

use super::load_config;
use crate::backend::{BackendClient, TermForm};
use crate::cli::GlossaryCommand;
use crate::config::ResolveOptions;
use crate::fs::atomic_write;
use crate::ui::Style;

pub async fn run_glossary(command: GlossaryCommand, options: &ResolveOptions) -> Result<()> {
    let config = load_config(options)?;
    let client = BackendClient::new(config.endpoint)?;

    match command {
        GlossaryCommand::Add {
            term,
            definition,
            notes,
        } => {
            let form = TermForm::new(term, definition).with_notes(notes);
            client.add_term(&form).await?;
            crate::info!(
                "{} Added {} → {}",
                Style::success("✓"),
                Style::value(&form.term),
                form.definition
            );
        }
        GlossaryCommand::Edit {
            id,
            term,
            definition,
            notes,
        } => {
            let form = TermForm::new(term, definition).with_notes(notes);
            client.update_term(id, &form).await?;
            crate::info!(
                "{} Updated #{id}: {} → {}",
                Style::success("✓"),
                Style::value(&form.term),
                form.definition
            );
        }
        GlossaryCommand::Remove { id } => {
            client.delete_term(id).await?;
            crate::info!("{} Removed #{id}", Style::success("✓"));
        }
        GlossaryCommand::Export { output } => {
            let csv = client.export_csv().await?;
            match output {
                Some(path) => {
                    atomic_write(Path::new(&path), &csv)?;
                    crate::info!(
                        "{} Exported glossary to {}",
                        Style::success("✓"),
                        Style::secondary(&path)
                    );
                }
                None => {
                    let mut stdout = io::stdout().lock();
                    stdout.write_all(csv.as_bytes())?;
                    stdout.flush()?;
                }
            }
        }
    }

    Ok(())
}
