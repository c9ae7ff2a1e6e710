use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

/// Check if the inquire error is a user cancellation/interruption.
const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Unwraps a prompt answer, turning Ctrl+C or Escape into `Ok(None)`.
///
/// Any other prompt failure is propagated.
pub fn answered<T>(result: Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(answer) => Ok(Some(answer)),
        Err(err) if is_prompt_cancelled(&err) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
