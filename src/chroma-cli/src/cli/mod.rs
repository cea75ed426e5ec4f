//! CLI argument parsing and command dispatch.
//!
//! # Module Structure
//!
//! - `args` - Command-line argument structures
//! - `handlers` - Command execution and output formatting

pub mod args;
pub mod handlers;

// Re-export main types
pub use args::{Cli, Commands, LogLevel, MixMode};
pub use handlers::{dispatch_command, run_command};
