//! cmdarg CLI Library
//!
//! This crate provides the `cmdarg` command-line front end for the
//! `cmdarg-core` option parser. It loads a parser definition from YAML, parses
//! the tokens given after `--` against it and prints the result.
//!
//! # Architecture
//!
//! - [`cli_args`]: The binary's own argument parsing
//! - [`output`]: Rendering of parse results and errors
//!
//! # Examples
//!
//! ```bash
//! # Parse tokens against ~/.cmdarg/options.yml
//! cmdarg -- -v --name world
//!
//! # Use a specific definition file
//! cmdarg -c ./deploy.yml -- -e prod -df
//!
//! # Show the help text rendered from the definition
//! cmdarg -c ./deploy.yml --show-help
//! ```

pub mod cli_args;
pub mod output;
