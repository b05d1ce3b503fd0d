//! Core types for the runner console.
//!
//! This crate parses the console runner's command line into assembly paths
//! and options, and turns the result into typed run settings. It performs no
//! I/O; printing diagnostics and choosing an exit code is left to callers.

mod command_line;
mod error;
mod runner_options;

// Re-export core types
pub use command_line::{parse, Flag, Options, ParsedCommandLine, FLAG_PREFIX};
pub use error::{CommandLineError, OptionsError, Result};
pub use runner_options::RunnerOptions;

/// Usage line shown alongside command line diagnostics
pub const USAGE: &str = "Usage: runner [--NUnitXml <output-file>] [--XUnitXml <output-file>] [--TeamCity <on|off>] [--parameter <key>=<value>]... <assembly-path>...";

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
