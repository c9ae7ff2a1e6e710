//! Two-stage translation exchange.
//!
//! A message is first sent to the start endpoint. The backend either
//! completes the translation right away or asks the user to confirm the
//! glossary terms it found; in the latter case the edited candidates are
//! sent to the confirm endpoint together with the original message.

mod error;
mod pending;
mod protocol;
mod session;
mod transport;

pub use error::ExchangeError;
pub use pending::PendingGlossary;
pub use protocol::{
    ConfirmRequest, ExchangeResponse, STAGE_COMPLETE, STAGE_CONFIRM_GLOSSARY, ServerStage,
    StartRequest,
};
pub use session::{ExchangeSession, ExchangeStage, StepOutcome};
pub use transport::Transport;
