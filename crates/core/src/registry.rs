//! Ordered storage of option definitions.
//!
//! Insertion order is preserved and drives both help rendering and the order
//! in which missing required options are reported.

use indexmap::IndexMap;
use log::debug;

use crate::error::Error::DuplicateOptions;
use crate::error::{Error, Result};
use crate::option::{NewOption, OptionDefinition, OptionId, OptionKind};
use crate::patterns::{is_short_option, parse_long};

#[derive(Debug, Clone, Default)]
pub struct Registry {
    options: IndexMap<String, OptionDefinition>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and stores a new option.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The short or long name is malformed (`InvalidOptionFormat`)
    /// - Either name is already registered (`DuplicateOptions`)
    pub fn register(&mut self, new_option: NewOption) -> Result<OptionId> {
        let NewOption {
            short,
            long,
            description,
            default,
            handler,
        } = new_option;

        if !is_short_option(&short) {
            return Err(Error::invalid_short(&short));
        }

        let parsed = parse_long(&long).ok_or_else(|| Error::invalid_long(&long))?;

        if self.is_duplicate(&short, parsed.name) {
            return Err(DuplicateOptions {
                short,
                long: parsed.name.to_string(),
            });
        }

        let kind = match parsed.placeholder {
            None => OptionKind::Flag,
            Some(_) if parsed.is_bracketed() => OptionKind::Optional,
            Some(_) => OptionKind::Required,
        };

        let definition = OptionDefinition {
            short: short.clone(),
            long: parsed.name.to_string(),
            placeholder: parsed.placeholder.map(ToString::to_string),
            description,
            default: if kind == OptionKind::Optional {
                default
            } else {
                None
            },
            kind,
            handler,
        };

        debug!("Registered option {definition} as {kind:?}");

        let (index, _) = self.options.insert_full(short, definition);
        Ok(OptionId(index))
    }

    fn is_duplicate(&self, short: &str, long: &str) -> bool {
        self.options.contains_key(short) || self.options.values().any(|opt| opt.long == long)
    }

    /// Resolves a token that names an option directly, by short or bare long name.
    pub fn find(&self, token: &str) -> Option<(OptionId, &OptionDefinition)> {
        if let Some((index, _, definition)) = self.options.get_full(token) {
            return Some((OptionId(index), definition));
        }

        if !token.starts_with("--") {
            return None;
        }

        self.options
            .values()
            .enumerate()
            .find(|(_, definition)| definition.long == token)
            .map(|(index, definition)| (OptionId(index), definition))
    }

    pub fn find_short(&self, short: &str) -> Option<(OptionId, &OptionDefinition)> {
        self.options
            .get_full(short)
            .map(|(index, _, definition)| (OptionId(index), definition))
    }

    /// Whether a token reads as an option rather than a value. Only direct
    /// short or long matches count; a cluster of known shorts is a value.
    pub fn recognizes(&self, token: &str) -> bool {
        self.find(token).is_some()
    }

    pub fn get(&self, id: OptionId) -> Option<&OptionDefinition> {
        self.options.get_index(id.0).map(|(_, definition)| definition)
    }

    pub fn iter(&self) -> impl Iterator<Item = (OptionId, &OptionDefinition)> {
        self.options
            .values()
            .enumerate()
            .map(|(index, definition)| (OptionId(index), definition))
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
