use std::fmt::Write;

use super::GlossaryMapping;

/// Separator between a term and its definition in a glossary block.
pub const ARROW: char = '→';

/// Parses a newline-delimited glossary block into a mapping.
///
/// Each line of the form `<term> → <definition>` becomes one entry, with
/// whitespace trimmed on both sides. Lines without an arrow, or with an
/// empty term or definition, are skipped. A term repeated on a later line
/// overwrites the earlier definition.
pub fn parse_glossary_block(text: &str) -> GlossaryMapping {
    text.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<(String, String)> {
    let (term, definition) = line.split_once(ARROW)?;
    let term = term.trim();
    let definition = definition.trim();

    if term.is_empty() || definition.is_empty() {
        return None;
    }

    Some((term.to_string(), definition.to_string()))
}

/// Renders a mapping back into block form, one line per term, sorted by term.
pub fn format_glossary_block(mapping: &GlossaryMapping) -> String {
    let mut terms: Vec<_> = mapping.iter().collect();
    terms.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut block = String::new();
    for (term, definition) in terms {
        if !block.is_empty() {
            block.push('\n');
        }
        // Writing to a String cannot fail
        let _ = write!(block, "{term} {ARROW} {definition}");
    }
    block
}
