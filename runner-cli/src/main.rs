//! Console entry point for the test runner.
//!
//! Parses the process arguments, reports any diagnostics with usage help on
//! stderr, and otherwise prints the resolved run configuration as JSON.

mod logging;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use serde_json::json;
use tracing::{debug, info};

use runner_core::{parse, RunnerOptions, USAGE};

/// Set by TeamCity build agents
const TEAM_CITY_ENV: &str = "TEAMCITY_PROJECT_NAME";

fn main() -> ExitCode {
    logging::init_tracing();

    match collect_args().and_then(|args| run(&args)) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Process arguments without the program name, rejecting non-UTF-8 ones
fn collect_args() -> Result<Vec<String>> {
    std::env::args_os()
        .skip(1)
        .map(|arg| {
            arg.into_string()
                .map_err(|arg| anyhow!("Argument {arg:?} is not valid UTF-8."))
        })
        .collect()
}

fn run(args: &[String]) -> Result<ExitCode> {
    debug!(?args, "parsing command line");
    let parsed = parse(args);

    if parsed.has_errors() {
        let mut stderr = io::stderr().lock();
        for message in parsed.error_messages() {
            writeln!(stderr, "{message}")?;
        }
        writeln!(stderr)?;
        writeln!(stderr, "{USAGE}")?;
        return Ok(ExitCode::FAILURE);
    }

    let options = RunnerOptions::try_from(&parsed)?;
    let team_city = options.team_city_enabled(std::env::var_os(TEAM_CITY_ENV).is_some());
    info!(
        assemblies = options.assembly_paths.len(),
        team_city, "resolved run configuration"
    );

    let output = json!({
        "options": options,
        "team_city_enabled": team_city,
        "version": runner_core::VERSION,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(ExitCode::SUCCESS)
}
