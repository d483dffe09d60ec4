//! The parser: option registration and the token-consumption loop.

use log::{debug, trace};

use crate::assign::assign;
use crate::coupled;
use crate::cursor::TokenCursor;
use crate::error::Error::{MissingOptions, UnnecessaryArgument};
use crate::error::{Error, Result};
use crate::exclusion::{self, MutualExclusionGroup};
use crate::help::{self, HelpLayout, OptionsGroup, DEFAULT_BANNER, DEFAULT_OPTIONS_TITLE};
use crate::option::{NewOption, OptionDefinition, OptionId};
use crate::patterns::is_short_cluster;
use crate::registry::Registry;
use crate::resolution::Resolution;
use crate::result::{project, ParseResult};

/// A declarative command-line option parser.
///
/// Definitions are immutable once registered and each parse keeps its own
/// resolution state, so a single parser can be reused, or shared across
/// threads, freely.
///
/// # Examples
///
/// ```
/// use cmdarg_core::parser::Parser;
///
/// let mut parser = Parser::new();
/// parser.add_option("-v", "--verbose", "Verbose output")?;
/// parser.add_option("-n", "--name value", "Who to greet")?;
///
/// let result = parser.parse(&["-v", "--name", "world"])?;
/// assert!(result.get_bool("verbose"));
/// assert_eq!(result.get_str("name"), Some("world"));
/// # Ok::<(), cmdarg_core::error::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    registry: Registry,
    exclusions: Vec<MutualExclusionGroup>,
    groups: Vec<OptionsGroup>,
    banner: String,
    options_title: String,
    options_tail: Option<String>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            exclusions: Vec::new(),
            groups: Vec::new(),
            banner: DEFAULT_BANNER.to_string(),
            options_title: DEFAULT_OPTIONS_TITLE.to_string(),
            options_tail: None,
        }
    }

    /// Registers an option without default or handler.
    ///
    /// The long name decides the kind: `--name` is a flag, `--name value` is
    /// required and `--name [value]` is optional.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOptionFormat` or `DuplicateOptions`.
    pub fn add_option(&mut self, short: &str, long: &str, description: &str) -> Result<OptionId> {
        self.add_option_with(NewOption::new(short, long, description))
    }

    /// Registers an option built with [`NewOption`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidOptionFormat` or `DuplicateOptions`.
    pub fn add_option_with(&mut self, new_option: NewOption) -> Result<OptionId> {
        self.registry.register(new_option)
    }

    /// Lists the given options under their own heading in help output.
    ///
    /// # Errors
    ///
    /// Returns `EmptyGroupTitle`, `EmptyGroupOptions`, `InvalidOptionFormat`
    /// or `UnknownOptions`.
    pub fn form_options_group<S: AsRef<str>>(
        &mut self,
        title: &str,
        shorts: &[S],
        tail: Option<&str>,
    ) -> Result<()> {
        let group = OptionsGroup::new(&self.registry, title, shorts, tail)?;
        debug!("Formed options group `{}`", group.title);
        self.groups.push(group);
        Ok(())
    }

    /// Allows at most one of the given flag or required options per parse.
    ///
    /// # Errors
    ///
    /// Returns `EmptyMutualOptions`, `InvalidOptionFormat`, `UnknownOptions` or
    /// `InvalidMutuallyExclusiveOptions`.
    pub fn make_options_mutually_exclusive<S: AsRef<str>>(&mut self, shorts: &[S]) -> Result<()> {
        let group = MutualExclusionGroup::new(&self.registry, shorts)?;
        debug!("Options {} made mutually exclusive", group.banner_annotation());
        self.exclusions.push(group);
        Ok(())
    }

    pub fn set_banner(&mut self, banner: &str) {
        self.banner = banner.to_string();
    }

    pub fn set_options_title(&mut self, title: &str) {
        self.options_title = title.to_string();
    }

    pub fn set_options_tail(&mut self, tail: &str) {
        self.options_tail = Some(tail.to_string());
    }

    pub fn options(&self) -> impl Iterator<Item = &OptionDefinition> {
        self.registry.iter().map(|(_, definition)| definition)
    }

    pub fn exclusion_groups(&self) -> &[MutualExclusionGroup] {
        &self.exclusions
    }

    pub fn options_groups(&self) -> &[OptionsGroup] {
        &self.groups
    }

    /// Parses `tokens`, failing with `MissingOptions` if any required option
    /// never received a value.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while consuming tokens, a handler error,
    /// or `MissingOptions` once all tokens have been consumed.
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> Result<ParseResult> {
        let result = self.resolve(tokens)?;

        if !result.missing_options.is_empty() {
            return Err(MissingOptions {
                options: result.missing_options,
            });
        }

        Ok(result)
    }

    /// Parses the process arguments, program name excluded.
    ///
    /// # Errors
    ///
    /// See [`Parser::parse`].
    pub fn parse_env(&self) -> Result<ParseResult> {
        let tokens: Vec<String> = std::env::args().skip(1).collect();
        self.parse(&tokens)
    }

    /// Runs the token loop and projects the result without failing on missing
    /// required options; they are reported in `missing_options` instead.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while consuming tokens or by a handler.
    pub fn resolve<S: AsRef<str>>(&self, tokens: &[S]) -> Result<ParseResult> {
        debug!("Parsing {} tokens", tokens.len());

        let mut cursor = TokenCursor::new(tokens);
        let mut resolution = Resolution::initial(&self.registry);

        while let Some(token) = cursor.advance() {
            if let Some((id, definition)) = self.registry.find(token) {
                trace!("`{token}` resolves to {definition}");
                assign(id, definition, &mut cursor, &self.registry, &mut resolution)?;
                exclusion::check(id, definition.kind, &self.exclusions, &resolution)?;
                definition.run_handler(resolution.get(id))?;
            } else if is_short_cluster(token) {
                trace!("`{token}` treated as coupled flags");
                if let Some(next) = cursor.peek() {
                    if !self.registry.recognizes(next) {
                        return Err(UnnecessaryArgument {
                            argument: next.to_string(),
                            options: token.to_string(),
                        });
                    }
                }
                coupled::expand(token, &self.registry, &self.exclusions, &mut resolution)?;
            } else {
                return Err(Error::unknown(token));
            }
        }

        let result = project(&self.registry, &resolution);
        debug!(
            "Parsed {} options, {} missing",
            result.passed_options.len(),
            result.missing_options.len()
        );
        Ok(result)
    }

    /// Renders the help text. Does not change the parser.
    pub fn help(&self) -> String {
        help::render(&HelpLayout {
            banner: &self.banner,
            exclusion_annotations: self
                .exclusions
                .iter()
                .map(MutualExclusionGroup::banner_annotation)
                .collect(),
            options_title: &self.options_title,
            registry: &self.registry,
            groups: &self.groups,
            tail: self.options_tail.as_deref(),
        })
    }
}
