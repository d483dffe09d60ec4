//! Parser definitions declared in YAML.
//!
//! A definition file lists options, help groups and exclusion groups. It is
//! replayed through the regular registration calls, so a bad file fails with
//! the same errors as bad code would.

use std::fs::File;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::option::NewOption;
use crate::parser::Parser;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OptionDeclaration {
    pub short: String,
    pub long: String,
    #[serde(default)]
    pub description: String,
    pub default: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GroupDeclaration {
    pub title: String,
    pub options: Vec<String>,
    pub tail: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserDefinition {
    pub banner: Option<String>,
    pub options_title: Option<String>,
    pub tail: Option<String>,
    #[serde(default)]
    pub options: Vec<OptionDeclaration>,
    #[serde(default)]
    pub groups: Vec<GroupDeclaration>,
    #[serde(default)]
    pub mutually_exclusive: Vec<Vec<String>>,
}

impl ParserDefinition {
    /// Builds a parser by registering options, then groups, then exclusions.
    ///
    /// # Errors
    ///
    /// Returns any registration error from [`Parser`].
    pub fn into_parser(self) -> Result<Parser> {
        let mut parser = Parser::new();

        if let Some(banner) = &self.banner {
            parser.set_banner(banner);
        }
        if let Some(title) = &self.options_title {
            parser.set_options_title(title);
        }
        if let Some(tail) = &self.tail {
            parser.set_options_tail(tail);
        }

        for option in &self.options {
            let mut new_option = NewOption::new(&option.short, &option.long, &option.description);
            if let Some(default) = &option.default {
                new_option = new_option.default(default);
            }
            parser.add_option_with(new_option)?;
        }

        for group in &self.groups {
            parser.form_options_group(&group.title, &group.options, group.tail.as_deref())?;
        }

        for shorts in &self.mutually_exclusive {
            parser.make_options_mutually_exclusive(shorts)?;
        }

        Ok(parser)
    }
}

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path).map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

/// Reads a [`ParserDefinition`] from a YAML file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The file contains invalid YAML or doesn't match the expected structure
pub fn load_parser_definition(path: &str) -> Result<ParserDefinition> {
    let reader = get_reader("parser definition", path)?;

    let definition: ParserDefinition = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "parser definition".to_string(),
            path.to_string(),
            e,
        )
    })?;

    debug!(
        "Loaded {} option declarations from `{path}`",
        definition.options.len()
    );
    Ok(definition)
}

/// Parses a [`ParserDefinition`] from a YAML string.
///
/// # Errors
///
/// Returns a `Yaml` error if the text doesn't match the expected structure.
pub fn parse_parser_definition(yaml: &str) -> Result<ParserDefinition> {
    serde_yaml::from_str(yaml).map_err(|e| {
        Error::yaml_error(
            "parsing".to_string(),
            "parser definition".to_string(),
            "<inline>".to_string(),
            e,
        )
    })
}
