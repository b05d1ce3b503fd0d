//! Tracing setup for the runner console.

use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log level or a raw filter directive.
///
/// A directive that fails to parse is reported on stderr and replaced by
/// the [`LogLevel::Normal`] filter.
pub const LOG_ENV: &str = "RUNNER_LOG";

/// Coarse verbosity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Quiet,
    #[default]
    Normal,
    Debug,
}

impl LogLevel {
    pub fn from_name(name: &str) -> Option<LogLevel> {
        match name.to_lowercase().as_str() {
            "quiet" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "debug" => Some(LogLevel::Debug),
            _ => None,
        }
    }

    fn directives(self) -> &'static str {
        match self {
            LogLevel::Debug => "runner_core=debug,runner_cli=debug",
            LogLevel::Normal => "runner_core=warn,runner_cli=warn",
            LogLevel::Quiet => "runner_core=error,runner_cli=error",
        }
    }
}

/// Build the filter from `RUNNER_LOG`, falling back to [`LogLevel::Normal`]
fn filter_from_env() -> EnvFilter {
    let fallback = || EnvFilter::new(LogLevel::default().directives());

    match std::env::var(LOG_ENV) {
        Ok(value) => match LogLevel::from_name(&value) {
            Some(level) => EnvFilter::new(level.directives()),
            None => EnvFilter::try_new(&value).unwrap_or_else(|e| {
                eprintln!("Ignoring invalid {LOG_ENV} directive {value:?}: {e}");
                fallback()
            }),
        },
        Err(_) => fallback(),
    }
}

/// Install the global subscriber, writing to stderr so stdout stays parseable
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(filter_from_env())
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_are_case_insensitive() {
        assert_eq!(LogLevel::from_name("DEBUG"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::from_name("quiet"), Some(LogLevel::Quiet));
        assert_eq!(LogLevel::from_name("runner_core=trace"), None);
    }
}
