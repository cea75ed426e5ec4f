//! Chroma CLI library module.
//!
//! Exposes the argument definitions and command handlers so they can be
//! driven from tests without spawning the binary.

pub mod cli;

use tracing_subscriber::EnvFilter;

use cli::{Cli, LogLevel};

/// Crates whose events the `--log-level` family of flags controls.
const LOG_TARGETS: &[&str] = &["chroma", "chroma_cli", "chroma_core"];

/// Resolve the effective log level.
///
/// `--trace` wins over `--verbose`, which wins over `CHROMA_LOG_LEVEL`, which
/// wins over `--log-level`. An unparseable environment value is ignored.
pub fn resolve_log_level(cli: &Cli, env_level: Option<&str>) -> LogLevel {
    if cli.trace {
        LogLevel::Trace
    } else if cli.verbose {
        LogLevel::Debug
    } else if let Some(env_level) = env_level {
        LogLevel::from_str_loose(env_level).unwrap_or(cli.log_level)
    } else {
        cli.log_level
    }
}

/// Build the subscriber filter for `level`.
///
/// When `RUST_LOG` is set its directives are used as-is.
pub fn log_filter(level: LogLevel) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        return EnvFilter::from_default_env();
    }

    let directives = LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={}", level.as_filter_str()))
        .collect::<Vec<_>>()
        .join(",");
    EnvFilter::new(format!("error,{directives}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_trace_beats_everything() {
        let cli = parse(&["chroma", "--trace", "-v", "-L", "error", "names"]);
        assert_eq!(resolve_log_level(&cli, Some("info")), LogLevel::Trace);
    }

    #[test]
    fn test_verbose_beats_env() {
        let cli = parse(&["chroma", "-v", "names"]);
        assert_eq!(resolve_log_level(&cli, Some("error")), LogLevel::Debug);
    }

    #[test]
    fn test_env_beats_flag() {
        let cli = parse(&["chroma", "-L", "error", "names"]);
        assert_eq!(resolve_log_level(&cli, Some("INFO")), LogLevel::Info);
    }

    #[test]
    fn test_bad_env_falls_back_to_flag() {
        let cli = parse(&["chroma", "-L", "error", "names"]);
        assert_eq!(resolve_log_level(&cli, Some("loud")), LogLevel::Error);
        assert_eq!(resolve_log_level(&cli, None), LogLevel::Error);
    }
}
