//! Option definitions and the values they resolve to.

use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

use serde::Serialize;

use crate::error::HandlerError;
use crate::patterns::camel_case_key;

/// Callback invoked with the derived key and resolved value whenever its option is parsed.
pub type Handler =
    Arc<dyn Fn(&str, Option<&Value>) -> std::result::Result<(), HandlerError> + Send + Sync>;

/// A resolved option value. Flags resolve to `Bool`, everything else to `Text`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Text(String),
}

impl Value {
    /// Whether the value counts as "passed": `true` or a non-empty string.
    pub fn is_set(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Text(s) => !s.is_empty(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::Text(_) => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Bool(b) => write!(formatter, "{b}"),
            Value::Text(s) => formatter.write_str(s),
        }
    }
}

/// How an option consumes tokens, derived from its long-name placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// No placeholder: boolean, never consumes a value.
    Flag,
    /// Bare placeholder (`--name value`): must be followed by a value.
    Required,
    /// Bracketed placeholder (`--name [value]`): may be followed by a value.
    Optional,
}

/// Position of a definition in its registry. Stable for the lifetime of the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionId(pub(crate) usize);

/// A registered, immutable option.
#[derive(Clone)]
pub struct OptionDefinition {
    pub short: String,
    /// Bare long name, e.g. `--name`.
    pub long: String,
    /// Placeholder as declared, e.g. `value` or `[path]`.
    pub placeholder: Option<String>,
    pub description: String,
    pub default: Option<String>,
    pub kind: OptionKind,
    pub(crate) handler: Option<Handler>,
}

impl OptionDefinition {
    /// The result key, e.g. `outputDir` for `--output-dir`.
    pub fn key(&self) -> String {
        camel_case_key(&self.long)
    }

    pub fn is_flag(&self) -> bool {
        self.kind == OptionKind::Flag
    }

    pub fn is_required(&self) -> bool {
        self.kind == OptionKind::Required
    }

    pub fn is_optional(&self) -> bool {
        self.kind == OptionKind::Optional
    }

    /// The long name as declared, placeholder included.
    pub fn declared_long(&self) -> String {
        match &self.placeholder {
            Some(placeholder) => format!("{} {}", self.long, placeholder),
            None => self.long.clone(),
        }
    }

    /// Value this option holds before any token touches it.
    pub fn initial_value(&self) -> Option<Value> {
        match self.kind {
            OptionKind::Flag => Some(Value::Bool(false)),
            OptionKind::Optional => self.default.clone().map(Value::Text),
            OptionKind::Required => None,
        }
    }

    /// Description as shown in help, annotated with the default or `(required)`.
    pub fn annotated_description(&self) -> String {
        match self.kind {
            OptionKind::Flag => self.description.clone(),
            OptionKind::Required => {
                format!("{} (required)", self.description.trim_end_matches('.'))
            }
            OptionKind::Optional => match &self.default {
                Some(default) => {
                    format!("{} [\"{}\"]", self.description.trim_end_matches('.'), default)
                }
                None => self.description.clone(),
            },
        }
    }

    pub(crate) fn run_handler(&self, value: Option<&Value>) -> crate::error::Result<()> {
        let Some(handler) = &self.handler else {
            return Ok(());
        };

        let key = self.key();
        handler(&key, value).map_err(|source| crate::error::Error::Handler { key, source })
    }
}

impl Debug for OptionDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("OptionDefinition")
            .field("short", &self.short)
            .field("long", &self.long)
            .field("placeholder", &self.placeholder)
            .field("description", &self.description)
            .field("default", &self.default)
            .field("kind", &self.kind)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

impl Display for OptionDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}, {}", self.short, self.declared_long())
    }
}

/// Arguments for registering an option, with optional default and handler.
///
/// ```
/// use cmdarg_core::option::NewOption;
/// use cmdarg_core::parser::Parser;
///
/// let mut parser = Parser::new();
/// parser.add_option_with(
///     NewOption::new("-o", "--output [path]", "Where to write").default("out"),
/// )?;
/// # Ok::<(), cmdarg_core::error::Error>(())
/// ```
#[derive(Clone)]
pub struct NewOption {
    pub(crate) short: String,
    pub(crate) long: String,
    pub(crate) description: String,
    pub(crate) default: Option<String>,
    pub(crate) handler: Option<Handler>,
}

impl NewOption {
    pub fn new(short: &str, long: &str, description: &str) -> Self {
        Self {
            short: short.to_string(),
            long: long.to_string(),
            description: description.to_string(),
            default: None,
            handler: None,
        }
    }

    /// Default value for an optional option. Ignored for flags and required options.
    #[must_use]
    pub fn default(mut self, default: &str) -> Self {
        self.default = Some(default.to_string());
        self
    }

    #[must_use]
    pub fn handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str, Option<&Value>) -> std::result::Result<(), HandlerError>
            + Send
            + Sync
            + 'static,
    {
        self.handler = Some(Arc::new(handler));
        self
    }
}
