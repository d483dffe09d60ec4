//! Command-line argument parsing for the `cmdarg` binary.
//!
//! The binary's own switches are handled by `clap`; everything after `--` is
//! handed to the parser loaded from the definition file untouched.

use clap::Parser;

/// Command-line arguments for the cmdarg CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use cmdarg_cli::cli_args::Args;
///
/// let args = Args::parse_from(["cmdarg", "-c", "deploy.yml", "--", "-v"]);
/// assert_eq!(args.tokens, vec!["-v"]);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the parser definition YAML.
    ///
    /// If not provided, `CMDARG_DEFINITIONS` is used, then `~/.cmdarg/options.yml`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Print the help text rendered from the definition instead of parsing.
    #[arg(long, short = 'H', action)]
    pub show_help: bool,

    /// Tokens to parse against the definition, given after `--`.
    #[arg(last = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}
