//! Glossary text handling: parsing `term → definition` blocks and
//! highlighting glossary terms in rendered text.

mod highlight;
mod parser;

use std::collections::HashMap;

pub use highlight::{Highlighter, Marker};
pub use parser::{ARROW, format_glossary_block, parse_glossary_block};

/// Active glossary: source term to target definition.
///
/// Rebuilt from scratch for every glossary block received from the backend.
pub type GlossaryMapping = HashMap<String, String>;
