use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use super::{ExchangeError, PendingGlossary};

/// Stage value asking the client to confirm glossary candidates.
pub const STAGE_CONFIRM_GLOSSARY: &str = "confirm_glossary";

/// Stage value carrying the finished translation.
pub const STAGE_COMPLETE: &str = "complete";

/// Body of the start request.
#[derive(Debug, Serialize)]
pub struct StartRequest<'a> {
    pub message: &'a str,
}

/// Body of the confirm request.
#[derive(Debug, Serialize)]
pub struct ConfirmRequest<'a> {
    pub message: &'a str,
    pub confirmed_glossary: &'a PendingGlossary,
}

/// Response of both the start and confirm endpoints.
///
/// The stage is kept as a raw string so an unknown value can be reported
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeResponse {
    pub stage: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glossary_options: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glossary_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
}

impl ExchangeResponse {
    /// A `confirm_glossary` response offering `options`.
    pub fn confirm_glossary<I, T, D>(options: I) -> Self
    where
        I: IntoIterator<Item = (T, D)>,
        T: Into<String>,
        D: Into<String>,
    {
        Self {
            stage: STAGE_CONFIRM_GLOSSARY.to_string(),
            glossary_options: Some(
                options
                    .into_iter()
                    .map(|(term, definition)| (term.into(), definition.into()))
                    .collect(),
            ),
            ..Self::default()
        }
    }

    /// A `complete` response with the given reply.
    pub fn complete(reply: impl Into<String>) -> Self {
        Self {
            stage: STAGE_COMPLETE.to_string(),
            reply: Some(reply.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_glossary_prompt(mut self, block: impl Into<String>) -> Self {
        self.glossary_prompt = Some(block.into());
        self
    }

    /// Parses the stage string.
    pub fn server_stage(&self) -> Result<ServerStage, ExchangeError> {
        self.stage.parse()
    }
}

/// Stage values the backend may send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerStage {
    ConfirmGlossary,
    Complete,
}

impl FromStr for ServerStage {
    type Err = ExchangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STAGE_CONFIRM_GLOSSARY => Ok(Self::ConfirmGlossary),
            STAGE_COMPLETE => Ok(Self::Complete),
            other => Err(ExchangeError::UnknownStage(other.to_string())),
        }
    }
}
