//! Projection of resolved option values into the caller-facing result.

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde::Serialize;

use crate::option::{OptionKind, Value};
use crate::registry::Registry;
use crate::resolution::Resolution;

/// A required option that never received a value.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MissingOption {
    pub short: String,
    pub long: String,
}

impl Display for MissingOption {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}, {}", self.short, self.long)
    }
}

/// Outcome of one parse: values keyed by derived key, plus unmet required options.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    pub passed_options: IndexMap<String, Option<Value>>,
    pub missing_options: Vec<MissingOption>,
}

impl ParseResult {
    /// The value under a derived key, if the key exists and holds one.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.passed_options.get(key).and_then(Option::as_ref)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Flag state; `false` for unknown keys.
    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.passed_options.contains_key(key)
    }
}

/// Walks the registry in order, reporting unset required options as missing
/// and every other option under its derived key.
pub fn project(registry: &Registry, resolution: &Resolution) -> ParseResult {
    let mut result = ParseResult::default();

    for (id, definition) in registry.iter() {
        let value = resolution.get(id);

        if definition.kind == OptionKind::Required && value.is_none() {
            result.missing_options.push(MissingOption {
                short: definition.short.clone(),
                long: definition.long.clone(),
            });
        } else {
            result
                .passed_options
                .insert(definition.key(), value.cloned());
        }
    }

    result
}
