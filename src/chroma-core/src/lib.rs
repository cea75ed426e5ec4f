//! Color math for Chroma.
//!
//! This crate works on 8-bit ARGB colors and provides:
//!
//! - [`color`]: the [`Color`] value, clamping constructors and HTML parsing
//! - [`known`]: the table of well-known color names
//! - [`mix`]: blending, opacity/overlay/soft-light compositing, stepping,
//!   transitions and random colors
//! - [`tint`]: uniform tinting toward black or white
//! - [`screen`]: pixel sampling through an injected [`Screen`] capability
//! - [`surface`]: an in-memory [`Screen`] implementation
//! - [`editor`]: the value flow of a modal color-picker property editor
//! - [`geometry`]: points and rectangles
//! - [`error`]: error types
//!
//! Every function except [`random_color`] and the sampling functions is pure
//! and safe to call from any thread.
//!
//! # Examples
//!
//! ```
//! use chroma_core::{
//!     blend_color, color_from_hex, soft_light_mix, tint_color, transition_color, Brightness,
//!     Color,
//! };
//!
//! let accent = color_from_hex(None, "#3366CC").unwrap();
//! let hover = tint_color(Brightness::Lighter, accent, 20);
//! let pressed = tint_color(Brightness::Darker, accent, 20);
//! assert_eq!(hover, Color::rgb(0x47, 0x7A, 0xE0));
//! assert_eq!(pressed, Color::rgb(0x1F, 0x52, 0xB8));
//!
//! let shadow = blend_color(Color::WHITE, Color::BLACK, 64.0);
//! let glow = soft_light_mix(accent, Color::WHITE, 50);
//! let midway = transition_color(50, Color::BLACK, Color::WHITE);
//! assert!(shadow.is_opaque() && glow.is_opaque() && midway.is_opaque());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

pub mod color;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod known;
pub mod mix;
pub mod screen;
pub mod surface;
pub mod tint;

// Re-export the color-math surface at the crate root
pub use color::{Color, color_from_hex, color_from_rgb};
pub use editor::{ColorEditor, ColorPrompt, EditStyle};
pub use error::{CaptureError, ColorParseError, Error, Result};
pub use geometry::{Point, Rect};
pub use known::{KNOWN_COLORS, known_color, known_color_name, known_color_names};
pub use mix::{
    blend_color, blend_color_with_alpha, insert_color, opacity_mix, overlay_mix, random_color,
    random_color_with, soft_light_mix, step_color, transition_color,
};
pub use screen::{
    DeviceContext, DeviceGuard, Screen, ScreenSampler, color_from_position, cursor_pointer_color,
};
pub use surface::FrameBuffer;
pub use tint::{Brightness, tint_color};
