//! JSON-with-comments parsing for project configuration files.
//!
//! `pages.json` and `manifest.json` are hand-edited and routinely carry `//`
//! comments, block comments and trailing commas. Parsing goes through `json5`,
//! which is a superset of that dialect.

use serde::de::DeserializeOwned;
use std::borrow::Cow;
use tracing::trace;

#[uni_derive::uni_error]
pub enum JsoncError {
    /// The text is not well-formed, or does not match the target type.
    #[error("Failed to parse JSONC{}: {source}", format_context(.context))]
    Parse { source: json5::Error, context: Option<Cow<'static, str>> },
}

/// Parses JSON-with-comments text into `T`.
///
/// # Errors
/// Returns [`JsoncError::Parse`] on malformed input or a shape mismatch.
pub fn parse_jsonc<T: DeserializeOwned>(text: &str) -> Result<T, JsoncError> {
    trace!(bytes = text.len(), "parsing JSONC");
    Ok(json5::from_str(text)?)
}
