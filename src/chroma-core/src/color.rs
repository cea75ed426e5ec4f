//! ARGB color value, constructors and HTML-style parsing.
//!
//! [`Color`] stores four 8-bit channels. It is `Copy` and never mutated in
//! place: every operation in this crate returns a new value. Constructors that
//! accept wider integers clamp each channel into `0..=255`.
//!
//! # Supported text formats
//!
//! - `#RGB` (shorthand, each digit doubled)
//! - `#RRGGBB`
//! - `#AARRGGBB` (alpha first, as in a packed ARGB value)
//! - well-known color names such as `CornflowerBlue` (see [`crate::known`])
//!
//! # Examples
//!
//! ```
//! use chroma_core::{color_from_hex, color_from_rgb, Color};
//!
//! let red = color_from_hex(None, "#FF0000").unwrap();
//! assert_eq!(red, Color::RED);
//!
//! let clamped = color_from_rgb(-10, 300, 128);
//! assert_eq!(clamped, Color::rgb(0, 255, 128));
//!
//! let faded = color_from_hex(Some(64), "teal").unwrap();
//! assert_eq!(faded.a, 64);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{ColorParseError, Result};
use crate::known::{known_color, known_color_name};

/// An ARGB color with 8-bit channels.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Alpha channel (0 = fully transparent, 255 = opaque).
    pub a: u8,
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "Color::rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "Color::argb({}, {}, {}, {})",
                self.a, self.r, self.g, self.b
            )
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ============================================================================
// Common color constants
// ============================================================================

impl Color {
    /// All channels zero, including alpha.
    pub const EMPTY: Self = Self::argb(0, 0, 0, 0);

    /// White with zero alpha, the value of the well-known `Transparent`.
    pub const TRANSPARENT: Self = Self::argb(0, 255, 255, 255);

    /// Opaque black (#000000).
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque white (#FFFFFF).
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque red (#FF0000).
    pub const RED: Self = Self::rgb(255, 0, 0);

    /// Opaque lime (#00FF00).
    pub const LIME: Self = Self::rgb(0, 255, 0);

    /// Opaque blue (#0000FF).
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Opaque gray (#808080).
    pub const GRAY: Self = Self::rgb(128, 128, 128);
}

// ============================================================================
// Constructors
// ============================================================================

impl Color {
    /// Creates a color from alpha, red, green and blue channels.
    #[inline]
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Creates an opaque color from red, green and blue channels.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::argb(255, r, g, b)
    }

    /// Creates a color from a packed `0xAARRGGBB` value.
    #[inline]
    pub const fn from_argb(value: u32) -> Self {
        Self {
            a: (value >> 24) as u8,
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    /// Returns the color packed as `0xAARRGGBB`.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Returns a copy with the alpha channel replaced.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Returns a fully opaque copy.
    #[inline]
    pub const fn opaque(self) -> Self {
        self.with_alpha(255)
    }

    /// Returns whether alpha is 255.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Returns the RGB channels as a tuple.
    #[inline]
    pub const fn to_rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

/// Clamps a raw channel value into `0..=255`.
#[inline]
pub(crate) fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Creates an opaque color, clamping each channel into `0..=255`.
///
/// This is the safe constructor for any arithmetic result that may have left
/// the channel range.
#[inline]
pub fn color_from_rgb(red: i32, green: i32, blue: i32) -> Color {
    Color::rgb(
        clamp_channel(red),
        clamp_channel(green),
        clamp_channel(blue),
    )
}

// ============================================================================
// Hex parsing and formatting
// ============================================================================

impl Color {
    /// Parses a bare hex color.
    ///
    /// Accepts `RGB`, `RRGGBB` and `AARRGGBB` digits with an optional leading
    /// `#`. Shorthand digits are doubled (`F80` is `FF8800`).
    ///
    /// # Examples
    ///
    /// ```
    /// use chroma_core::Color;
    ///
    /// assert_eq!(Color::from_hex("#F80").unwrap(), Color::rgb(255, 136, 0));
    /// assert_eq!(Color::from_hex("8000ff00").unwrap(), Color::argb(128, 0, 255, 0));
    /// ```
    pub fn from_hex(hex: &str) -> std::result::Result<Self, ColorParseError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.is_empty() {
            return Err(ColorParseError::EmptyInput);
        }

        let digits = hex
            .bytes()
            .map(nibble)
            .collect::<Option<Vec<u8>>>()
            .ok_or(ColorParseError::InvalidHexChar)?;

        let pair = |i: usize| (digits[i] << 4) | digits[i + 1];

        match digits.len() {
            3 => Ok(Self::rgb(
                digits[0] * 17,
                digits[1] * 17,
                digits[2] * 17,
            )),
            6 => Ok(Self::rgb(pair(0), pair(2), pair(4))),
            8 => Ok(Self::argb(pair(0), pair(2), pair(4), pair(6))),
            len => Err(ColorParseError::InvalidLength(len)),
        }
    }

    /// Formats as `#RRGGBB`, or `#AARRGGBB` when the color is not opaque.
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                self.a, self.r, self.g, self.b
            )
        }
    }

    /// Parses an HTML color token: a `#`-prefixed hex value or a
    /// well-known color name.
    ///
    /// Surrounding whitespace is ignored. Bare hex digits without `#` are
    /// treated as a name and therefore rejected.
    pub fn from_html(input: &str) -> std::result::Result<Self, ColorParseError> {
        let input = input.trim();

        if input.is_empty() {
            return Err(ColorParseError::EmptyInput);
        }

        if input.starts_with('#') {
            return Self::from_hex(input);
        }

        known_color(input).ok_or_else(|| ColorParseError::UnknownColor(input.to_string()))
    }

    /// Formats as an HTML token.
    ///
    /// Returns the well-known name when one matches the full ARGB value,
    /// otherwise `#RRGGBB`. Alpha is dropped from the hex form.
    pub fn to_html(&self) -> String {
        match known_color_name(*self) {
            Some(name) => name.to_string(),
            None => format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b),
        }
    }
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parses an HTML color token, optionally overriding its alpha.
///
/// When `alpha` is `None` the parsed alpha is kept (opaque for `#RRGGBB`).
/// Malformed input fails with [`crate::Error::InvalidFormat`].
pub fn color_from_hex(alpha: Option<u8>, value: &str) -> Result<Color> {
    let color = Color::from_html(value)?;
    Ok(match alpha {
        Some(a) => color.with_alpha(a),
        None => color,
    })
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_html(s)
    }
}

// ============================================================================
// Type conversions
// ============================================================================

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((a, r, g, b): (u8, u8, u8, u8)) -> Self {
        Self::argb(a, r, g, b)
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self::from_argb(value)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.to_argb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    mod constructor_tests {
        use super::*;

        #[test]
        fn test_rgb_is_opaque() {
            let c = Color::rgb(1, 2, 3);
            assert_eq!((c.a, c.r, c.g, c.b), (255, 1, 2, 3));
            assert!(c.is_opaque());
        }

        #[test]
        fn test_packed_argb() {
            let c = Color::from_argb(0x80FF_4020);
            assert_eq!(c, Color::argb(0x80, 0xFF, 0x40, 0x20));
            assert_eq!(c.to_argb(), 0x80FF_4020);
            assert_eq!(u32::from(Color::WHITE), 0xFFFF_FFFF);
        }

        #[test]
        fn test_color_from_rgb_clamps() {
            assert_eq!(color_from_rgb(-10, 300, 128), Color::rgb(0, 255, 128));
            assert_eq!(color_from_rgb(i32::MIN, i32::MAX, 0), Color::rgb(0, 255, 0));
        }

        #[test]
        fn test_with_alpha() {
            let c = Color::RED.with_alpha(10);
            assert_eq!(c.a, 10);
            assert_eq!(c.to_rgb(), (255, 0, 0));
            assert_eq!(c.opaque(), Color::RED);
        }

        #[test]
        fn test_default_is_empty() {
            assert_eq!(Color::default(), Color::EMPTY);
            assert_eq!(Color::EMPTY.to_argb(), 0);
        }
    }

    mod hex_tests {
        use super::*;

        #[test]
        fn test_from_hex_6digit() {
            assert_eq!(Color::from_hex("#FF8000").unwrap(), Color::rgb(255, 128, 0));
        }

        #[test]
        fn test_from_hex_3digit() {
            assert_eq!(Color::from_hex("#F80").unwrap(), Color::rgb(255, 136, 0));
        }

        #[test]
        fn test_from_hex_8digit() {
            assert_eq!(
                Color::from_hex("#80FF8000").unwrap(),
                Color::argb(128, 255, 128, 0)
            );
        }

        #[test]
        fn test_html_8digit_is_alpha_first() {
            assert_eq!(
                color_from_hex(None, "#80FF0000").unwrap(),
                Color::argb(128, 255, 0, 0)
            );
            assert_eq!(
                Color::from_html("#00FFFFFF").unwrap(),
                Color::TRANSPARENT
            );
        }

        #[test]
        fn test_from_hex_no_hash() {
            assert_eq!(Color::from_hex("ff8000").unwrap(), Color::rgb(255, 128, 0));
        }

        #[test]
        fn test_from_hex_invalid_length() {
            assert_eq!(
                Color::from_hex("#12345"),
                Err(ColorParseError::InvalidLength(5))
            );
        }

        #[test]
        fn test_from_hex_invalid_char() {
            assert_eq!(
                Color::from_hex("#GGGGGG"),
                Err(ColorParseError::InvalidHexChar)
            );
            assert_eq!(Color::from_hex("#é0"), Err(ColorParseError::InvalidHexChar));
        }

        #[test]
        fn test_from_hex_empty() {
            assert_eq!(Color::from_hex("#"), Err(ColorParseError::EmptyInput));
        }

        #[test]
        fn test_to_hex() {
            assert_eq!(Color::rgb(255, 128, 0).to_hex(), "#FF8000");
            assert_eq!(Color::argb(0x80, 255, 128, 0).to_hex(), "#80FF8000");
        }

        #[test]
        fn test_display_round_trips_through_from_str() {
            let c = Color::argb(7, 10, 20, 30);
            assert_eq!(c.to_string().parse::<Color>().unwrap(), c);
        }
    }

    mod html_tests {
        use super::*;

        #[test]
        fn test_from_html_name() {
            assert_eq!(Color::from_html("Red").unwrap(), Color::RED);
            assert_eq!(Color::from_html(" lightgrey ").unwrap(), Color::rgb(211, 211, 211));
        }

        #[test]
        fn test_from_html_rejects_bare_digits() {
            assert_eq!(
                Color::from_html("FF0000"),
                Err(ColorParseError::UnknownColor("FF0000".to_string()))
            );
        }

        #[test]
        fn test_from_html_empty() {
            assert_eq!(Color::from_html("   "), Err(ColorParseError::EmptyInput));
        }

        #[test]
        fn test_to_html() {
            assert_eq!(Color::RED.to_html(), "Red");
            assert_eq!(Color::rgb(1, 2, 3).to_html(), "#010203");
            assert_eq!(Color::argb(9, 1, 2, 3).to_html(), "#010203");
        }

        #[test]
        fn test_color_from_hex_alpha_override() {
            let c = color_from_hex(Some(64), "#102030").unwrap();
            assert_eq!(c, Color::argb(64, 0x10, 0x20, 0x30));

            let kept = color_from_hex(None, "Transparent").unwrap();
            assert_eq!(kept, Color::TRANSPARENT);
        }

        #[test]
        fn test_color_from_hex_invalid_format() {
            let err = color_from_hex(None, "not-a-color").unwrap_err();
            assert!(matches!(
                err,
                Error::InvalidFormat(ColorParseError::UnknownColor(_))
            ));
        }
    }
}
