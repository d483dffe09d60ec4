//! Configuration path utilities for cmdarg.
//!
//! This module resolves where parser definitions are read from and expands
//! shell variables like `~` in paths.

/// Default path for the parser definition file
const DEFAULT_DEFINITIONS_PATH: &str = "~/.cmdarg/options.yml";

/// Environment variable that overrides the default definition path
pub const DEFINITIONS_PATH_ENV: &str = "CMDARG_DEFINITIONS";

/// Resolves the parser definition file path.
///
/// Precedence is the explicit argument, then the `CMDARG_DEFINITIONS`
/// environment variable, then `~/.cmdarg/options.yml`. Shell expansions like
/// `~` and `$HOME` are resolved; a path that fails to expand is used as given.
///
/// # Examples
///
/// ```
/// use cmdarg_core::config::get_definitions_path;
///
/// let custom = get_definitions_path(Some("/path/to/options.yml"));
/// assert_eq!(custom, "/path/to/options.yml");
/// ```
pub fn get_definitions_path(definitions_path_arg: Option<&str>) -> String {
    let from_env = std::env::var(DEFINITIONS_PATH_ENV).ok();

    let definitions_path = definitions_path_arg
        .or(from_env.as_deref())
        .unwrap_or(DEFAULT_DEFINITIONS_PATH);

    shellexpand::full(definitions_path)
        .map(|expanded| expanded.to_string())
        .unwrap_or_else(|_| definitions_path.to_string())
}
