//! Name and token syntax shared by the registry and the parse loop.

use regex::Regex;
use std::sync::LazyLock;

/// One dash followed by letters: a short name (`-v`, `-ab`) or a cluster of
/// short flags (`-abc`). Which one a token is depends on the registry.
static SHORT_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-[a-zA-Z]+$").expect("valid short name regex"));

/// A long option with an optional value placeholder: `--out-dir`, `--name value`,
/// `--output [path]`.
static LONG_OPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(--[a-zA-Z][a-zA-Z0-9]*(?:-[a-zA-Z0-9]+)*)(?:\s+(\[[a-zA-Z][a-zA-Z-]*\]|[a-zA-Z][a-zA-Z-]*))?$",
    )
    .expect("valid long option regex")
});

/// Parsed pieces of a long option declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongName<'a> {
    /// The bare `--name` part.
    pub name: &'a str,
    /// The placeholder as written, brackets included.
    pub placeholder: Option<&'a str>,
}

impl LongName<'_> {
    pub fn is_bracketed(&self) -> bool {
        self.placeholder
            .is_some_and(|p| p.starts_with('[') && p.ends_with(']'))
    }
}

pub fn is_short_option(value: &str) -> bool {
    SHORT_NAME_RE.is_match(value)
}

/// Same syntax as a short name; the parse loop only treats a token as a
/// cluster after a direct registry lookup has failed.
pub fn is_short_cluster(value: &str) -> bool {
    SHORT_NAME_RE.is_match(value)
}

/// Splits a long declaration into name and placeholder, or `None` if malformed.
pub fn parse_long(value: &str) -> Option<LongName<'_>> {
    let captures = LONG_OPTION_RE.captures(value)?;
    let name = captures.get(1)?.as_str();
    let placeholder = captures.get(2).map(|m| m.as_str());
    Some(LongName { name, placeholder })
}

/// Derives the result key from a long name: `--output-dir value` becomes `outputDir`.
pub fn camel_case_key(long: &str) -> String {
    let bare = long
        .trim_start_matches("--")
        .split_whitespace()
        .next()
        .unwrap_or_default();

    let mut key = String::with_capacity(bare.len());
    let mut upper_next = false;
    for c in bare.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            key.extend(c.to_uppercase());
            upper_next = false;
        } else {
            key.push(c);
        }
    }
    key
}
