// src/logging.rs

//! Logging setup: `tracing-subscriber` with an `EnvFilter`, written to STDERR
//! so STDOUT only carries command output.
//!
//! Filter source, first match wins: `--log-level`, then the `JOBBOARD_LOG`
//! directive string (e.g. `jobboard=debug,warn`), then `info`.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::LogLevel;

pub const LOG_ENV: &str = "JOBBOARD_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

impl LogLevel {
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Install the global subscriber. Fails if one is already set.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env = std::env::var(LOG_ENV).ok();
    let filter = build_filter(cli_level, env.as_deref());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}

/// An unparsable `JOBBOARD_LOG` falls back to the default rather than failing
/// startup.
fn build_filter(cli_level: Option<LogLevel>, env: Option<&str>) -> EnvFilter {
    if let Some(level) = cli_level {
        return EnvFilter::new(level.directive());
    }
    env.filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s.trim()).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn cli_level_beats_env() {
        let filter = build_filter(Some(LogLevel::Trace), Some("error"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn env_directive_used_without_flag() {
        let filter = build_filter(None, Some("jobboard=debug,warn"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn missing_or_bad_env_defaults_to_info() {
        assert_eq!(build_filter(None, None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(build_filter(None, Some("  ")).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(
            build_filter(None, Some("jobboard=loud")).max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }
}
