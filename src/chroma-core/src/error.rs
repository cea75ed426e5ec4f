//! Error types for Chroma color operations.

use thiserror::Error;

/// Core error type for Chroma operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A color string could not be parsed.
    #[error("invalid color format: {0}")]
    InvalidFormat(#[from] ColorParseError),

    /// A value fell outside the domain the operation accepts.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The platform could not read back a screen pixel.
    #[error("screen capture unavailable: {0}")]
    CaptureUnavailable(#[from] CaptureError),
}

/// Result type alias using the core Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for color parsing operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input string was empty.
    #[error("empty input")]
    EmptyInput,

    /// Hex string had an invalid length.
    #[error("invalid hex length: {0} (expected 3, 6, or 8)")]
    InvalidLength(usize),

    /// Invalid hexadecimal character.
    #[error("invalid hex character")]
    InvalidHexChar,

    /// Unknown color name.
    #[error("unknown color name: {0}")]
    UnknownColor(String),
}

/// Error type for screen sampling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// No device context could be acquired.
    #[error("{0}")]
    Unavailable(String),

    /// Coordinates lie outside the captured surface.
    #[error("coordinates out of bounds: ({x}, {y})")]
    OutOfBounds {
        /// The X coordinate.
        x: i32,
        /// The Y coordinate.
        y: i32,
    },

    /// The pointer position could not be queried.
    #[error("pointer position unavailable")]
    NoPointer,
}
