use anyhow::{Context, Result, bail};
use std::fmt;
use std::fs;
use std::io::{self, Read};

pub const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

/// The input contained nothing but whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyInput;

impl fmt::Display for EmptyInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Input is empty")
    }
}

impl std::error::Error for EmptyInput {}

pub struct InputReader;

impl InputReader {
    /// Reads a file, or stdin when no path is given.
    pub fn read(file_path: Option<&str>) -> Result<String> {
        file_path.map_or_else(Self::read_stdin, Self::read_file)
    }

    /// Reads a message to send to the backend, trimmed and non-empty.
    pub fn read_message(file_path: Option<&str>) -> Result<String> {
        let text = Self::read(file_path)?;
        let text = text.trim();
        if text.is_empty() {
            return Err(EmptyInput.into());
        }
        Ok(text.to_string())
    }

    fn read_file(path: &str) -> Result<String> {
        let file = fs::File::open(path).with_context(|| format!("Failed to open file: {path}"))?;
        read_capped(file, "file").with_context(|| format!("Failed to read file: {path}"))
    }

    fn read_stdin() -> Result<String> {
        read_capped(io::stdin().lock(), "input").context("Failed to read from stdin")
    }
}

/// Reads at most [`MAX_INPUT_SIZE`] bytes of UTF-8 from `source`.
///
/// One byte past the limit is read so oversized input is detected without
/// buffering all of it.
fn read_capped(source: impl Read, what: &str) -> Result<String> {
    let mut buffer = Vec::new();
    source
        .take(MAX_INPUT_SIZE as u64 + 1)
        .read_to_end(&mut buffer)?;

    if buffer.len() > MAX_INPUT_SIZE {
        bail!(
            "Input exceeds maximum allowed size (1 MB).\n\n\
             Consider splitting the {what} into smaller parts."
        );
    }

    String::from_utf8(buffer).context("Input is not valid UTF-8")
}
