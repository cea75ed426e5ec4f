//! Uniform tinting toward black or white.

use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::error::Error;

/// Direction of a tint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brightness {
    /// Shift every channel toward 0.
    Darker,
    /// Shift every channel toward 255.
    Lighter,
}

impl Brightness {
    /// Returns the lowercase name used by [`FromStr`] and [`fmt::Display`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Brightness::Darker => "darker",
            Brightness::Lighter => "lighter",
        }
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts a raw discriminant (`0` = darker, `1` = lighter).
impl TryFrom<i32> for Brightness {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Brightness::Darker),
            1 => Ok(Brightness::Lighter),
            other => Err(Error::InvalidArgument(format!(
                "brightness must be 0 (darker) or 1 (lighter), got {other}"
            ))),
        }
    }
}

impl FromStr for Brightness {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "darker" => Ok(Brightness::Darker),
            "lighter" => Ok(Brightness::Lighter),
            _ => Err(Error::InvalidArgument(format!(
                "unknown brightness: {s} (expected darker or lighter)"
            ))),
        }
    }
}

/// Shifts each RGB channel of `color` by `amount`, saturating at the bounds.
///
/// The result is always opaque, whatever the input alpha was.
///
/// # Examples
///
/// ```
/// use chroma_core::{tint_color, Brightness, Color};
///
/// let dark = tint_color(Brightness::Darker, Color::rgb(10, 10, 10), 50);
/// assert_eq!(dark, Color::BLACK);
///
/// let light = tint_color(Brightness::Lighter, Color::rgb(250, 250, 250), 10);
/// assert_eq!(light, Color::WHITE);
/// ```
pub fn tint_color(direction: Brightness, color: Color, amount: u8) -> Color {
    let shift = |c: u8| match direction {
        Brightness::Darker => c.saturating_sub(amount),
        Brightness::Lighter => c.saturating_add(amount),
    };

    Color::rgb(shift(color.r), shift(color.g), shift(color.b))
}
