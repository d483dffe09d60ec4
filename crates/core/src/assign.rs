//! Decides how many tokens an option consumes and what value it gets.

use log::trace;

use crate::cursor::TokenCursor;
use crate::error::Error::MissingArgument;
use crate::error::Result;
use crate::option::{OptionDefinition, OptionId, OptionKind, Value};
use crate::registry::Registry;
use crate::resolution::Resolution;

/// Resolves one occurrence of `definition`, consuming at most one token.
///
/// - Required options take the next token, which must exist, be non-empty and
///   not itself read as an option.
/// - Optional options take the next token unless it reads as an option; otherwise
///   they keep their default. An empty next token is consumed and dropped.
/// - Flags never consume a token and always become `true`. A non-option token
///   after a flag is left for the parse loop to classify.
///
/// # Errors
///
/// Returns [`MissingArgument`] when a required option has no usable value.
pub fn assign<S: AsRef<str>>(
    id: OptionId,
    definition: &OptionDefinition,
    cursor: &mut TokenCursor<'_, S>,
    registry: &Registry,
    resolution: &mut Resolution,
) -> Result<()> {
    match definition.kind {
        OptionKind::Required => {
            let value = cursor
                .peek()
                .filter(|token| !token.is_empty() && !registry.recognizes(token))
                .ok_or_else(|| MissingArgument {
                    short: definition.short.clone(),
                    long: definition.long.clone(),
                })?;
            cursor.advance();
            trace!("{} takes value `{value}`", definition.long);
            resolution.set(id, Value::Text(value.to_string()));
        }

        OptionKind::Optional => match cursor.peek() {
            Some(value) if !registry.recognizes(value) => {
                cursor.advance();
                if value.is_empty() {
                    trace!("{} drops an empty value", definition.long);
                } else {
                    trace!("{} takes value `{value}`", definition.long);
                    resolution.set(id, Value::Text(value.to_string()));
                }
            }
            _ => trace!("{} keeps its default", definition.long),
        },

        OptionKind::Flag => {
            resolution.set(id, Value::Bool(true));
        }
    }

    Ok(())
}
