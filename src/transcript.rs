//! Append-only chat transcript.

/// What produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Text the user submitted.
    User,
    /// A glossary block returned by the backend.
    Glossary,
    /// A reply from the backend.
    Assistant,
    /// A failed exchange.
    Error,
    /// Local status, e.g. an abandoned confirmation.
    Notice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub kind: EntryKind,
    pub text: String,
}

/// Ordered log of chat entries. Entries are never edited or removed.
///
/// A cursor remembers how far the log has been displayed so renderers can
/// fetch only what is new.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<Entry>,
    rendered: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: EntryKind, text: impl Into<String>) {
        self.entries.push(Entry {
            kind,
            text: text.into(),
        });
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }

    /// Number of entries of the given kind.
    pub fn count(&self, kind: EntryKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }

    /// Returns entries appended since the previous call and advances the cursor.
    pub fn take_unrendered(&mut self) -> &[Entry] {
        let start = self.rendered;
        self.rendered = self.entries.len();
        &self.entries[start..]
    }
}
