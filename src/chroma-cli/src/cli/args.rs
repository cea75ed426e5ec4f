//! CLI argument structures and parsing.
//!
//! Defines all command-line argument structures using clap.

use clap::{Args, Parser, Subcommand};

/// Log verbosity level for CLI output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors (default)
    #[default]
    Warn,
    /// Show informational messages, warnings, and errors
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including trace-level details
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<LogLevel> {
        match s.to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Compositing formula for the `mix` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MixMode {
    /// Plain percentage mix
    Opacity,
    /// Overlay, branching on the base channel
    Overlay,
    /// Soft light, branching on the blend channel
    SoftLight,
}

/// Chroma - color blending and tinting
///
/// Colors are given as HTML tokens: `#RGB`, `#RRGGBB`, `#AARRGGBB` or a
/// well-known name such as `CornflowerBlue`.
#[derive(Parser, Debug)]
#[command(name = "chroma")]
#[command(author, version)]
#[command(about = "Chroma - color blending and tinting", long_about = None)]
pub struct Cli {
    /// Enable verbose output (same as --log-level debug)
    #[arg(long = "verbose", short = 'v', global = true)]
    pub verbose: bool,

    /// Enable trace-level logging for debugging
    #[arg(long = "trace", global = true)]
    pub trace: bool,

    /// Set log verbosity level (error, warn, info, debug, trace)
    #[arg(
        long = "log-level",
        short = 'L',
        global = true,
        value_enum,
        default_value = "warn"
    )]
    pub log_level: LogLevel,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a color and print its components
    #[command(visible_alias = "p")]
    Parse(ParseArgs),

    /// Interpolate from a back color toward a fore color
    Blend(BlendArgs),

    /// Average two colors
    Insert(InsertArgs),

    /// Composite two colors with an opacity, overlay or soft-light mix
    Mix(MixArgs),

    /// Scale a color's channels by a percentage
    Step(StepArgs),

    /// Shift every channel toward black or white
    Tint(TintArgs),

    /// Interpolate between two colors at a progress percentage
    Transition(TransitionArgs),

    /// Generate random opaque colors
    Random(RandomArgs),

    /// List the well-known color names
    Names,

    /// Sample a pixel from a synthetic gradient surface
    Sample(SampleArgs),
}

/// Arguments for the `parse` command.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Color to parse
    pub color: String,

    /// Replace the parsed alpha channel
    #[arg(long, short = 'a')]
    pub alpha: Option<u8>,
}

/// Arguments for the `blend` command.
#[derive(Args, Debug)]
pub struct BlendArgs {
    /// Background color
    pub back: String,

    /// Foreground color
    pub fore: String,

    /// Weight of the foreground on a 0-255 scale [default: the fore color's alpha]
    #[arg(long, short = 'a', allow_negative_numbers = true)]
    pub alpha: Option<f64>,
}

/// Arguments for the `insert` command.
#[derive(Args, Debug)]
pub struct InsertArgs {
    /// First color
    pub base: String,

    /// Second color
    pub insert: String,
}

/// Arguments for the `mix` command.
#[derive(Args, Debug)]
pub struct MixArgs {
    /// Compositing formula
    #[arg(value_enum)]
    pub mode: MixMode,

    /// Base color
    pub base: String,

    /// Blend color
    pub blend: String,

    /// Opacity percentage
    #[arg(long, short = 'o', default_value_t = 50, allow_negative_numbers = true)]
    pub opacity: i32,
}

/// Arguments for the `step` command.
#[derive(Args, Debug)]
pub struct StepArgs {
    /// Color to scale
    pub color: String,

    /// Percentage: 100 keeps the color, 0 is black, 200 doubles each channel
    #[arg(allow_negative_numbers = true)]
    pub percent: i32,
}

/// Arguments for the `tint` command.
#[derive(Args, Debug)]
pub struct TintArgs {
    /// Direction: darker or lighter
    pub direction: String,

    /// Color to tint
    pub color: String,

    /// Amount added to or subtracted from each channel
    pub amount: u8,
}

/// Arguments for the `transition` command.
#[derive(Args, Debug)]
pub struct TransitionArgs {
    /// Start color
    pub begin: String,

    /// End color
    pub end: String,

    /// Progress percentage from begin (0) to end (100)
    #[arg(allow_negative_numbers = true)]
    pub progress: i32,
}

/// Arguments for the `random` command.
#[derive(Args, Debug)]
pub struct RandomArgs {
    /// Number of colors to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Largest accepted width or height of the sampled surface.
pub const MAX_SURFACE_SIDE: i64 = 16_384;

/// Arguments for the `sample` command.
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Column to sample
    #[arg(allow_negative_numbers = true)]
    pub x: i32,

    /// Row to sample
    #[arg(allow_negative_numbers = true)]
    pub y: i32,

    /// Surface width
    #[arg(long, default_value_t = 256, value_parser = clap::value_parser!(u32).range(1..=MAX_SURFACE_SIDE))]
    pub width: u32,

    /// Surface height
    #[arg(long, default_value_t = 256, value_parser = clap::value_parser!(u32).range(1..=MAX_SURFACE_SIDE))]
    pub height: u32,

    /// Place the pointer at X,Y and sample under it instead
    #[arg(long)]
    pub cursor: bool,
}
