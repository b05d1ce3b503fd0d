//! Parser for the runner's command line.
//!
//! A single left-to-right scan with one token of lookahead. Flags are
//! introduced by `--` and always take the following token as their value;
//! anything else is an assembly path.

use tracing::{debug, trace};

use super::flag::{is_flag, Flag, FLAG_PREFIX};
use super::options::Options;
use crate::CommandLineError;

/// Value stored for a `--parameter` given without `=`
const SWITCH_ON: &str = "on";

/// Result of parsing command line arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCommandLine {
    /// Non-flag tokens, in order of appearance
    assembly_paths: Vec<String>,

    /// Flag values keyed by canonical or custom name
    options: Options,

    /// Defects in the order they were found
    errors: Vec<CommandLineError>,
}

impl ParsedCommandLine {
    pub fn assembly_paths(&self) -> &[String] {
        &self.assembly_paths
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn errors(&self) -> &[CommandLineError] {
        &self.errors
    }

    /// Diagnostics rendered for display, one per defect
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn add_assembly_path(&mut self, path: &str) {
        trace!(path, "assembly path");
        self.assembly_paths.push(path.to_string());
    }

    fn add_option(&mut self, key: &str, value: &str) {
        debug!(key, value, "option");
        self.options.push(key, value);
    }

    fn record(&mut self, error: CommandLineError) {
        debug!(%error, "command line defect");
        self.errors.push(error);
    }
}

/// Parse a list of command line arguments
///
/// The list excludes the program name. Malformed input never fails the
/// parse; each defect is recorded on the result instead, and the scan stops
/// at the first one so that everything parsed before it is kept.
///
/// # Arguments
/// * `args` - Tokens exactly as supplied, already shell-split
///
/// # Returns
/// * `ParsedCommandLine` - Paths, options and diagnostics
pub fn parse<S: AsRef<str>>(args: &[S]) -> ParsedCommandLine {
    let mut result = ParsedCommandLine::default();
    let mut tokens = args.iter().map(AsRef::<str>::as_ref).peekable();

    while let Some(token) = tokens.next() {
        trace!(token, "scanning");

        let Some(name) = token.strip_prefix(FLAG_PREFIX) else {
            result.add_assembly_path(token);
            continue;
        };

        let Some(flag) = Flag::from_name(name) else {
            result.record(CommandLineError::UnrecognizedOption(token.to_string()));
            break;
        };

        // A following flag is left unconsumed and the scan ends here
        let Some(value) = tokens.next_if(|next| !is_flag(next)) else {
            result.record(CommandLineError::MissingOptionValue(token.to_string()));
            break;
        };

        if flag.is_fixed() {
            result.add_option(flag.name(), value);
            continue;
        }

        match split_parameter(value) {
            Ok((key, value)) => result.add_option(key, value),
            Err(error) => {
                result.record(error);
                break;
            }
        }
    }

    if result.errors.is_empty() && result.assembly_paths.is_empty() {
        result.record(CommandLineError::MissingAssemblyPaths);
    }

    result
}

/// Split a custom parameter into key and value on its first `=`
fn split_parameter(parameter: &str) -> Result<(&str, &str), CommandLineError> {
    match parameter.split_once('=') {
        Some(("", _)) => Err(CommandLineError::MissingParameterKey(parameter.to_string())),
        Some((key, value)) => Ok((key, value)),
        None if parameter.is_empty() => {
            Err(CommandLineError::MissingParameterKey(parameter.to_string()))
        }
        None => Ok((parameter, SWITCH_ON)),
    }
}
