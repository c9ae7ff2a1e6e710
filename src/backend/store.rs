use anyhow::{Context, Result, bail};
use reqwest::Response;
use serde::Serialize;

use super::BackendClient;

pub const GLOSSARY_PATH: &str = "/glossary/";
pub const EXPORT_PATH: &str = "/glossary/export";

/// Fields of a stored glossary term, as the backend's form handlers expect them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermForm {
    #[serde(rename = "chinese")]
    pub term: String,
    #[serde(rename = "english")]
    pub definition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TermForm {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            notes: None,
        }
    }

    #[must_use]
    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes.filter(|n| !n.trim().is_empty());
        self
    }
}

impl BackendClient {
    /// Adds a term to the backend's glossary store.
    pub async fn add_term(&self, form: &TermForm) -> Result<()> {
        let url = self.url(GLOSSARY_PATH);
        crate::debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .form(form)
            .send()
            .await
            .with_context(|| format!("Failed to connect to backend: {url}"))?;

        ensure_stored(response).await
    }

    /// Replaces the stored term with the given id.
    pub async fn update_term(&self, id: u64, form: &TermForm) -> Result<()> {
        let url = self.url(&format!("{GLOSSARY_PATH}{id}"));
        crate::debug!("PATCH {url}");

        let response = self
            .client
            .patch(&url)
            .form(form)
            .send()
            .await
            .with_context(|| format!("Failed to connect to backend: {url}"))?;

        ensure_stored(response).await
    }

    /// Deletes the stored term with the given id.
    pub async fn delete_term(&self, id: u64) -> Result<()> {
        let url = self.url(&format!("{GLOSSARY_PATH}{id}"));
        crate::debug!("DELETE {url}");

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .with_context(|| format!("Failed to connect to backend: {url}"))?;

        ensure_stored(response).await
    }

    /// Downloads the whole glossary store as CSV (`chinese,english` rows).
    pub async fn export_csv(&self) -> Result<String> {
        let url = self.url(EXPORT_PATH);
        crate::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to connect to backend: {url}"))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read export from {url}"))?;

        if !status.is_success() {
            bail!("Glossary export failed with status {status}: {body}");
        }
        Ok(body)
    }
}

// Store writes answer with a redirect to the glossary page on success.
async fn ensure_stored(response: Response) -> Result<()> {
    let status = response.status();
    if status.is_success() || status.is_redirection() {
        return Ok(());
    }

    let body = response.text().await.unwrap_or_default();
    bail!("Glossary store request failed with status {status}: {body}");
}
