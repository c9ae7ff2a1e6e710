use anyhow::{Context, Result};
use regex::{Captures, Regex};
use std::borrow::Cow;

use super::GlossaryMapping;

/// A literal pair of strings placed around each highlighted span.
///
/// ```
/// use glossa_cli::glossary::{GlossaryMapping, Highlighter, Marker};
///
/// let mapping = GlossaryMapping::from([("模型".to_string(), "model".to_string())]);
/// let highlighter = Highlighter::new(&mapping)?;
///
/// assert_eq!(highlighter.highlight("a model", &Marker::HTML), "a <mark>model</mark>");
/// assert_eq!(highlighter.highlight("a model", &Marker::new("**", "**")), "a **model**");
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    open: Cow<'static, str>,
    close: Cow<'static, str>,
}

impl Marker {
    /// HTML `<mark>` element.
    pub const HTML: Self = Self {
        open: Cow::Borrowed("<mark>"),
        close: Cow::Borrowed("</mark>"),
    };

    /// Square brackets, for plain-text output.
    pub const BRACKETS: Self = Self {
        open: Cow::Borrowed("["),
        close: Cow::Borrowed("]"),
    };

    pub fn new(open: impl Into<Cow<'static, str>>, close: impl Into<Cow<'static, str>>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    fn wrap(&self, span: &str) -> String {
        format!("{}{span}{}", self.open, self.close)
    }
}

/// Highlights glossary terms and their definitions in free text.
///
/// All terms and definitions are compiled into a single alternation of
/// escaped literals, longest first, and the text is scanned once. At each
/// position the longest literal wins and scanning resumes after it, so a
/// span is never wrapped twice even when one term contains another.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    /// Builds a highlighter for every term and definition in `mapping`.
    pub fn new(mapping: &GlossaryMapping) -> Result<Self> {
        let mut literals: Vec<&str> = mapping
            .iter()
            .flat_map(|(term, definition)| [term.as_str(), definition.as_str()])
            .filter(|literal| !literal.is_empty())
            .collect();

        if literals.is_empty() {
            return Ok(Self { pattern: None });
        }

        // Regex alternation is leftmost-first, so longer literals go first
        literals.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        literals.dedup();

        let alternation = literals
            .iter()
            .map(|literal| regex::escape(literal))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = Regex::new(&alternation)
            .with_context(|| format!("Failed to compile highlight pattern for {} terms", literals.len()))?;

        Ok(Self {
            pattern: Some(pattern),
        })
    }

    /// Returns `true` if there is nothing to highlight.
    pub const fn is_empty(&self) -> bool {
        self.pattern.is_none()
    }

    /// Wraps every matching span in `marker`.
    pub fn highlight<'t>(&self, text: &'t str, marker: &Marker) -> Cow<'t, str> {
        self.highlight_with(text, |span| marker.wrap(span))
    }

    /// Wraps every matching span using `wrap`.
    pub fn highlight_with<'t, F>(&self, text: &'t str, wrap: F) -> Cow<'t, str>
    where
        F: Fn(&str) -> String,
    {
        match &self.pattern {
            Some(pattern) => pattern.replace_all(text, |caps: &Captures<'_>| wrap(&caps[0])),
            None => Cow::Borrowed(text),
        }
    }
}
