use std::error::Error;
use std::fmt;

/// Failures of the two-stage exchange.
///
/// Transport and protocol failures are recorded in the session transcript
/// as a single error entry; misuse of the state machine is only returned.
#[derive(Debug)]
pub enum ExchangeError {
    /// The request could not be sent, or the response could not be read.
    Transport(anyhow::Error),
    /// The backend replied with a stage this client does not know.
    UnknownStage(String),
    /// The backend replied with a known stage that is invalid at this point.
    UnexpectedStage(String),
    /// A new exchange was started while a confirmation is still open.
    ConfirmationPending,
    /// Confirmation was requested but the backend never asked for one.
    NothingToConfirm,
    /// The edited term was not among the offered candidates.
    UnknownTerm(String),
    /// The message was empty after trimming.
    EmptyMessage,
}

impl ExchangeError {
    /// Returns `true` if this failure was appended to the transcript.
    pub const fn is_recorded(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::UnknownStage(_) | Self::UnexpectedStage(_)
        )
    }
}

impl fmt::Display for ExchangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "Request failed: {err:#}"),
            Self::UnknownStage(stage) => write!(f, "Backend returned unknown stage '{stage}'"),
            Self::UnexpectedStage(stage) => {
                write!(f, "Backend returned stage '{stage}' where a completion was expected")
            }
            Self::ConfirmationPending => {
                write!(f, "Confirm or cancel the pending glossary before sending a new message")
            }
            Self::NothingToConfirm => write!(f, "No glossary is awaiting confirmation"),
            Self::UnknownTerm(term) => write!(f, "'{term}' is not one of the offered terms"),
            Self::EmptyMessage => write!(f, "Message is empty"),
        }
    }
}

// The transport cause chain is part of the Display text, so no `source`
impl Error for ExchangeError {}
