//! Rendering of parse outcomes for the terminal.

use cmdarg_core::error::{Error, Result};
use cmdarg_core::result::ParseResult;

/// Serializes a parse result as YAML with `passedOptions` and `missingOptions` keys.
///
/// # Errors
///
/// Returns a `Yaml` error if serialization fails.
pub fn render_result(result: &ParseResult) -> Result<String> {
    serde_yaml::to_string(result).map_err(|e| {
        Error::yaml_error(
            "writing".to_string(),
            "parse result".to_string(),
            "<stdout>".to_string(),
            e,
        )
    })
}

/// Formats an error as `name: message`, the name being its stable code.
pub fn render_error(error: &Error) -> String {
    format!("{}: {}", error.name(), error)
}
