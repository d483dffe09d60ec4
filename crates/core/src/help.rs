//! Help text rendering. Display only: nothing here affects parsing.

use log::error;

use crate::error::Error::{EmptyGroupOptions, EmptyGroupTitle};
use crate::error::{Error, Result};
use crate::option::{OptionDefinition, OptionId};
use crate::patterns::is_short_option;
use crate::registry::Registry;

pub const DEFAULT_BANNER: &str = "Usage: [Options]";
pub const DEFAULT_OPTIONS_TITLE: &str = "Available options:";
pub const DEFAULT_COMMON_OPTIONS_TITLE: &str = "Common options:";

/// Options listed under their own heading in help output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsGroup {
    pub title: String,
    pub members: Vec<OptionId>,
    pub tail: Option<String>,
}

impl OptionsGroup {
    /// # Errors
    ///
    /// Returns an error if:
    /// - The title has no word characters (`EmptyGroupTitle`)
    /// - No short names are given (`EmptyGroupOptions`)
    /// - A short name is malformed (`InvalidOptionFormat`) or not registered (`UnknownOptions`)
    pub fn new<S: AsRef<str>>(
        registry: &Registry,
        title: &str,
        shorts: &[S],
        tail: Option<&str>,
    ) -> Result<Self> {
        if !title.chars().any(|c| c.is_alphanumeric() || c == '_') {
            return Err(EmptyGroupTitle);
        }

        if shorts.is_empty() {
            return Err(EmptyGroupOptions);
        }

        let members = shorts
            .iter()
            .map(|short| {
                let short = short.as_ref();
                if !is_short_option(short) {
                    return Err(Error::invalid_short(short));
                }
                registry
                    .find_short(short)
                    .map(|(id, _)| id)
                    .ok_or_else(|| Error::unknown(short))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            title: title.to_string(),
            members,
            tail: tail.filter(|t| !t.is_empty()).map(ToString::to_string),
        })
    }
}

/// Formats `  -s, --long<pad>description` lines, aligned on the longest long name.
pub fn format_options(options: &[&OptionDefinition]) -> Vec<String> {
    let longest = options
        .iter()
        .map(|option| option.declared_long().len())
        .max()
        .unwrap_or(0);

    options
        .iter()
        .map(|option| {
            let long = option.declared_long();
            let padding = " ".repeat(longest + 4 - long.len());
            format!(
                "  {}, {}{}{}",
                option.short,
                long,
                padding,
                option.annotated_description()
            )
        })
        .collect()
}

/// Everything needed to lay out the help text.
pub struct HelpLayout<'a> {
    pub banner: &'a str,
    pub exclusion_annotations: Vec<String>,
    pub options_title: &'a str,
    pub registry: &'a Registry,
    pub groups: &'a [OptionsGroup],
    pub tail: Option<&'a str>,
}

pub fn render(layout: &HelpLayout<'_>) -> String {
    let mut banner = layout.banner.to_string();
    for annotation in &layout.exclusion_annotations {
        banner.push(' ');
        banner.push_str(annotation);
    }

    let common: Vec<&OptionDefinition> = layout
        .registry
        .iter()
        .filter(|(id, _)| !layout.groups.iter().any(|g| g.members.contains(id)))
        .map(|(_, definition)| definition)
        .collect();

    let title = if !layout.groups.is_empty() && !common.is_empty() {
        DEFAULT_COMMON_OPTIONS_TITLE
    } else {
        layout.options_title
    };

    let mut lines = vec![banner, title.to_string()];
    lines.extend(format_options(&common));

    for group in layout.groups {
        lines.push(group.title.clone());
        let members: Vec<&OptionDefinition> = group
            .members
            .iter()
            .filter_map(|id| {
                let definition = layout.registry.get(*id);
                if definition.is_none() {
                    error!("Options group `{}` refers to an unknown option", group.title);
                }
                definition
            })
            .collect();
        lines.extend(format_options(&members));
        if let Some(tail) = &group.tail {
            lines.push(tail.clone());
        }
    }

    if let Some(tail) = layout.tail {
        lines.push(tail.to_string());
    }

    lines.join("\n")
}
