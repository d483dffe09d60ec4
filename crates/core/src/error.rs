use std::fmt::{Display, Formatter};

use itertools::Itertools;
use thiserror::Error;

use crate::result::MissingOption;

pub type Result<T> = std::result::Result<T, Error>;

/// Error type a handler callback may return to abort the parse.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Which of the two option names failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Short,
    Long,
}

impl Display for NameKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NameKind::Short => formatter.write_str("Short"),
            NameKind::Long => formatter.write_str("Long"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("{} name `{}` is in invalid format", .kind, .name)]
    InvalidOptionFormat { kind: NameKind, name: String },

    #[error("Coupled options must be Flag only: `{}` in `{}` takes a value", .option, .cluster)]
    InvalidOption { option: String, cluster: String },

    #[error("Unnecessary argument `{}` passed after flag only options `{}`", .argument, .options)]
    UnnecessaryArgument { argument: String, options: String },

    #[error("\"{}\" or \"{}\" option is already defined", .short, .long)]
    DuplicateOptions { short: String, long: String },

    #[error("A group title must be a non-empty string")]
    EmptyGroupTitle,

    #[error("A group options must be a non-empty list of short names")]
    EmptyGroupOptions,

    #[error("Mutually exclusive options must be a list of at least two short names")]
    EmptyMutualOptions,

    #[error("Mutually exclusive options must be either Required or Flag only: `{}` is Optional", .option)]
    InvalidMutuallyExclusiveOptions { option: String },

    #[error("Options {} are mutually exclusive.", join_shorts(.options))]
    MutuallyExclusiveOptions { options: Vec<String> },

    #[error("Unknown option passed: `{}`", .token)]
    UnknownOptions { token: String },

    #[error("Missing option argument for `{}`/`{}`", .short, .long)]
    MissingArgument { short: String, long: String },

    #[error("Missing required options\n {}", join_missing(.options))]
    MissingOptions { options: Vec<MissingOption> },

    #[error("Handler for `{}` failed: {}", .key, .source)]
    Handler { key: String, source: HandlerError },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },
}

fn join_shorts(options: &[String]) -> String {
    options.join(", ")
}

fn join_missing(options: &[MissingOption]) -> String {
    options.iter().map(|option| &option.short).join(", ")
}

impl Error {
    /// Stable machine-readable error code, e.g. `CliParserError:MissingArgument`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Error::InvalidOptionFormat { .. } => "CliParserError:InvalidOptionFormat",
            Error::InvalidOption { .. } => "CliParserError:InvalidOption",
            Error::UnnecessaryArgument { .. } => "CliParserError:UnnecessaryArgument",
            Error::DuplicateOptions { .. } => "CliParserError:DuplicateOptions",
            Error::EmptyGroupTitle => "CliParserError:EmptyGroupTitle",
            Error::EmptyGroupOptions => "CliParserError:EmptyGroupOptions",
            Error::EmptyMutualOptions => "CliParserError:EmptyMutualOptions",
            Error::InvalidMutuallyExclusiveOptions { .. } => {
                "CliParserError:InvalidMutuallyExclusiveOptions"
            }
            Error::MutuallyExclusiveOptions { .. } => "CliParserError:MutuallyExclusiveOptions",
            Error::UnknownOptions { .. } => "CliParserError:UnknownOptions",
            Error::MissingArgument { .. } => "CliParserError:MissingArgument",
            Error::MissingOptions { .. } => "CliParserError:MissingOptions",
            Error::Handler { .. } => "CliParserError:Handler",
            Error::Io { .. } => "CliParserError:Io",
            Error::Yaml { .. } => "CliParserError:Yaml",
        }
    }

    pub fn invalid_short(name: &str) -> Self {
        Self::InvalidOptionFormat {
            kind: NameKind::Short,
            name: name.to_string(),
        }
    }

    pub fn invalid_long(name: &str) -> Self {
        Self::InvalidOptionFormat {
            kind: NameKind::Long,
            name: name.to_string(),
        }
    }

    pub fn unknown(token: &str) -> Self {
        Self::UnknownOptions {
            token: token.to_string(),
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
