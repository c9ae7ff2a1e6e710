//! Glossary confirmation panel.

use anyhow::Result;
use inquire::Text;

use crate::exchange::ExchangeSession;
use crate::glossary::ARROW;
use crate::ui::answered;

/// Prompts for every pending candidate, writing edits into the session.
///
/// Returns `Ok(false)` if the user cancelled; edits made before the
/// cancellation stay in the session until it is confirmed or abandoned.
pub fn edit_candidates(session: &mut ExchangeSession) -> Result<bool> {
    let Some(pending) = session.candidates() else {
        return Ok(true);
    };

    let candidates: Vec<(String, String)> = pending
        .iter()
        .map(|(term, definition)| (term.to_string(), definition.to_string()))
        .collect();

    for (term, suggested) in candidates {
        let label = format!("{term} {ARROW}");
        let Some(definition) = answered(Text::new(&label).with_default(&suggested).prompt())?
        else {
            return Ok(false);
        };

        let definition = definition.trim();
        if !definition.is_empty() && definition != suggested {
            session.edit_candidate(&term, definition)?;
        }
    }

    Ok(true)
}
