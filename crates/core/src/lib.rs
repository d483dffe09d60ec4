//! cmdarg Core Library
//!
//! This crate provides a declarative command-line option parser. Callers
//! register options by short and long name, then hand it a token list which it
//! consumes into a map of resolved values.
//!
//! # Key Features
//!
//! - **Option Kinds**: Flags, required-value and optional-value options, derived from the long name
//! - **Coupled Flags**: Short boolean flags combined behind one dash (`-abc`)
//! - **Mutual Exclusion**: Groups of options of which at most one may be passed
//! - **Handlers**: Callbacks invoked with the derived key and value as options are parsed
//! - **YAML Definitions**: Parsers declared in a definition file
//! - **Help Rendering**: Banner, grouped options and tail text
//!
//! # Examples
//!
//! ```
//! use cmdarg_core::option::NewOption;
//! use cmdarg_core::parser::Parser;
//!
//! let mut parser = Parser::new();
//! parser.add_option("-a", "--all", "Show everything")?;
//! parser.add_option("-l", "--long", "Long listing")?;
//! parser.add_option_with(NewOption::new("-s", "--sort [field]", "Sort order").default("name"))?;
//! parser.make_options_mutually_exclusive(&["-a", "-l"])?;
//!
//! let result = parser.parse(&["-a", "--sort", "size"])?;
//! assert!(result.get_bool("all"));
//! assert_eq!(result.get_str("sort"), Some("size"));
//! # Ok::<(), cmdarg_core::error::Error>(())
//! ```

pub mod assign;
pub mod config;
pub mod coupled;
pub mod cursor;
pub mod definitions;
pub mod error;
pub mod exclusion;
pub mod help;
pub mod option;
pub mod parser;
pub mod patterns;
pub mod registry;
pub mod resolution;
pub mod result;
