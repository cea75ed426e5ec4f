//! Chroma CLI - Main entry point.
//!
//! Parses the command line, installs logging and hands the command to the
//! dispatcher. Results go to stdout; logs go to stderr.

use anyhow::Result;
use clap::Parser;

use chroma_cli::cli::{Cli, dispatch_command};
use chroma_cli::{log_filter, resolve_log_level};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_level = std::env::var("CHROMA_LOG_LEVEL").ok();
    let log_level = resolve_log_level(&cli, env_level.as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(log_level))
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(command = ?cli.command, "dispatching command");
    dispatch_command(cli)
}
