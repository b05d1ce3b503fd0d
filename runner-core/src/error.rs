//! Error types for the runner console.

use thiserror::Error;

/// A defect found while scanning the command line.
///
/// The parser never fails outright; it records these on the
/// [`ParsedCommandLine`](crate::ParsedCommandLine) instead. The `Display`
/// text of each variant is the diagnostic shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandLineError {
    /// No assembly path survived the scan
    #[error("Missing required test assembly path(s).")]
    MissingAssemblyPaths,

    /// A `--` token named a flag outside the recognized set
    #[error("Option {0} is not recognized.")]
    UnrecognizedOption(String),

    /// A recognized flag had nothing usable after it
    #[error("Option {0} is missing its required value.")]
    MissingOptionValue(String),

    /// A `--parameter` value had nothing before its first `=`
    #[error("Custom parameter {0} is missing its required key.")]
    MissingParameterKey(String),
}

/// Errors raised when turning a parsed command line into [`RunnerOptions`](crate::RunnerOptions).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// The command line itself carried diagnostics
    #[error("{}", .0.join("\n"))]
    InvalidCommandLine(Vec<String>),

    /// An on/off option held something else
    #[error("Option --{option} expects on or off, but was {value}.")]
    InvalidSwitch { option: String, value: String },
}

/// Result type alias for building runner options
pub type Result<T> = std::result::Result<T, OptionsError>;
