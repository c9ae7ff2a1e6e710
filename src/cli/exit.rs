//! Process exit codes for failed commands.

use anyhow::Error;
use exitcode::ExitCode;

use crate::config::InvalidEndpoint;
use crate::exchange::ExchangeError;
use crate::input::EmptyInput;

/// Maps a command failure to a sysexits-style exit code.
pub fn exit_code(err: &Error) -> ExitCode {
    if err.downcast_ref::<InvalidEndpoint>().is_some()
        || err.chain().any(|cause| cause.is::<toml::de::Error>())
    {
        return exitcode::CONFIG;
    }

    if err.downcast_ref::<EmptyInput>().is_some() {
        return exitcode::DATAERR;
    }

    if let Some(exchange_err) = err.downcast_ref::<ExchangeError>() {
        return match exchange_err {
            ExchangeError::Transport(_) => exitcode::UNAVAILABLE,
            ExchangeError::UnknownStage(_) | ExchangeError::UnexpectedStage(_) => {
                exitcode::PROTOCOL
            }
            _ => exitcode::SOFTWARE,
        };
    }

    if err.chain().any(|cause| cause.is::<reqwest::Error>()) {
        return exitcode::UNAVAILABLE;
    }

    exitcode::SOFTWARE
}
