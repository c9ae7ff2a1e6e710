//! HTTP client for the glossary translation backend.

mod client;
mod store;
#[cfg(test)]
mod test_server;

pub use client::{BackendClient, CONFIRM_PATH, POLISH_PATH, START_PATH};
pub use store::{EXPORT_PATH, GLOSSARY_PATH, TermForm};
