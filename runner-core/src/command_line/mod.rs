//! Command line scanning for the runner console.
//!
//! This module turns the raw argument vector into assembly paths plus a
//! multi-valued option map, recording diagnostics for malformed input
//! rather than failing.

mod flag;
mod options;
mod parser;

pub use flag::{Flag, FLAG_PREFIX};
pub use options::Options;
pub use parser::{parse, ParsedCommandLine};
