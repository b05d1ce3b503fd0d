//! Typed configuration for a test run.
//!
//! This module turns the loosely typed option map of a [`ParsedCommandLine`]
//! into the settings a runner acts on: report destinations, the TeamCity
//! switch and the custom parameters handed to conventions.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;

use crate::command_line::{Flag, ParsedCommandLine};
use crate::error::{OptionsError, Result};

/// Settings for a single test run.
///
/// Custom parameters share their key space with the fixed flags. A
/// `--parameter` whose key is a canonical flag name (`NUnitXml`, `XUnitXml`
/// or `TeamCity`) is read as that flag's value and does not appear in
/// [`RunnerOptions::parameters`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunnerOptions {
    /// Assemblies to run, in the order given
    pub assembly_paths: Vec<PathBuf>,

    /// Where to write an NUnit-style XML report
    pub nunit_xml: Option<PathBuf>,

    /// Where to write an xUnit-style XML report
    pub xunit_xml: Option<PathBuf>,

    /// Explicit TeamCity output switch, if one was given
    pub team_city: Option<bool>,

    /// Custom `--parameter` values by key
    pub parameters: IndexMap<String, Vec<String>>,
}

impl RunnerOptions {
    /// Whether TeamCity service messages should be written.
    ///
    /// An explicit `--TeamCity` switch wins; otherwise `detected` decides,
    /// which callers usually derive from the build agent's environment.
    pub fn team_city_enabled(&self, detected: bool) -> bool {
        self.team_city.unwrap_or(detected)
    }
}

impl TryFrom<&ParsedCommandLine> for RunnerOptions {
    type Error = OptionsError;

    fn try_from(parsed: &ParsedCommandLine) -> Result<Self> {
        if parsed.has_errors() {
            return Err(OptionsError::InvalidCommandLine(parsed.error_messages()));
        }

        let options = parsed.options();

        let team_city = options
            .first(Flag::TeamCity.name())
            .map(|value| parse_switch(Flag::TeamCity, value))
            .transpose()?;

        // Fixed flags are read through their own fields
        let parameters = options
            .iter()
            .filter(|(key, _)| !is_fixed_key(key))
            .map(|(key, values)| (key.to_string(), values.to_vec()))
            .collect();

        Ok(RunnerOptions {
            assembly_paths: parsed.assembly_paths().iter().map(PathBuf::from).collect(),
            nunit_xml: options.first(Flag::NUnitXml.name()).map(PathBuf::from),
            xunit_xml: options.first(Flag::XUnitXml.name()).map(PathBuf::from),
            team_city,
            parameters,
        })
    }
}

fn is_fixed_key(key: &str) -> bool {
    Flag::ALL
        .into_iter()
        .any(|flag| flag.is_fixed() && flag.name() == key)
}

/// Convert an on/off style value
fn parse_switch(flag: Flag, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(OptionsError::InvalidSwitch {
            option: flag.name().to_string(),
            value: value.to_string(),
        }),
    }
}
