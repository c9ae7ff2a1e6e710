//! Input reading from files and stdin.

mod reader;

pub use reader::{EmptyInput, InputReader, MAX_INPUT_SIZE};
