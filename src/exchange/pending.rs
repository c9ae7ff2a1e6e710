use serde::Serialize;
use std::collections::BTreeMap;

/// Glossary candidates offered by the backend, editable until confirmed.
///
/// Serializes as a plain JSON object of term to definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PendingGlossary {
    candidates: BTreeMap<String, String>,
}

impl PendingGlossary {
    pub fn get(&self, term: &str) -> Option<&str> {
        self.candidates.get(term).map(String::as_str)
    }

    /// Overwrites the definition of an offered term.
    ///
    /// Returns `false` and leaves the candidates untouched if `term` was not offered.
    pub fn set(&mut self, term: &str, definition: impl Into<String>) -> bool {
        match self.candidates.get_mut(term) {
            Some(slot) => {
                *slot = definition.into();
                true
            }
            None => false,
        }
    }

    /// Candidates in term order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.candidates
            .iter()
            .map(|(term, definition)| (term.as_str(), definition.as_str()))
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl From<BTreeMap<String, String>> for PendingGlossary {
    fn from(candidates: BTreeMap<String, String>) -> Self {
        Self { candidates }
    }
}

impl FromIterator<(String, String)> for PendingGlossary {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            candidates: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> PendingGlossary {
        [("模型", "model"), ("训练", "training")]
            .into_iter()
            .map(|(t, d)| (t.to_string(), d.to_string()))
            .collect()
    }

    #[test]
    fn test_set_overwrites_offered_term() {
        let mut pending = sample();
        assert!(pending.set("模型", "checkpoint"));
        assert_eq!(pending.get("模型"), Some("checkpoint"));
        assert_eq!(pending.len(), 2);
    }

    #[test]
    fn test_set_rejects_unknown_term() {
        let mut pending = sample();
        assert!(!pending.set("推理", "inference"));
        assert_eq!(pending.get("推理"), None);
        assert_eq!(pending, sample());
    }

    #[test]
    fn test_iter_is_sorted() {
        let pending: PendingGlossary = [("b", "2"), ("a", "1")]
            .into_iter()
            .map(|(t, d)| (t.to_string(), d.to_string()))
            .collect();
        let terms: Vec<_> = pending.iter().map(|(t, _)| t).collect();
        assert_eq!(terms, vec!["a", "b"]);
    }

    #[test]
    fn test_serializes_as_object() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"模型": "model", "训练": "training"})
        );
    }
}
