//! Blending and compositing between colors.
//!
//! Every function here is pure apart from [`random_color`], and all of them
//! return opaque colors except [`step_color`], which keeps the input alpha.
//! Fractional channel results are truncated toward zero before clamping,
//! except in [`transition_color`], which rounds half to even.
//!
//! # Examples
//!
//! ```
//! use chroma_core::{blend_color, opacity_mix, overlay_mix, Color};
//!
//! let half = blend_color(Color::BLACK, Color::WHITE, 128.0);
//! assert_eq!(half, Color::rgb(128, 128, 128));
//!
//! let base = Color::rgb(200, 40, 90);
//! assert_eq!(opacity_mix(base, Color::BLUE, 0), base);
//!
//! let overlaid = overlay_mix(base, Color::GRAY, 100);
//! assert!(overlaid.is_opaque());
//! ```

use rand::Rng;

use crate::color::{Color, color_from_rgb};

const MAX: f64 = 255.0;

/// Moves `back` toward `fore` by `ratio`, clamped to the channel range.
#[inline]
fn blend_channel(back: f64, fore: f64, ratio: f64) -> f64 {
    (back + ratio * (fore - back)).clamp(0.0, MAX)
}

/// Linearly interpolates each RGB channel from `back` toward `fore`.
///
/// `alpha` is the weight of `fore` on a `0..=255` scale. Values outside that
/// range extrapolate, and the result is clamped per channel. The output is
/// always opaque; neither input's alpha channel is carried through.
pub fn blend_color(back: Color, fore: Color, alpha: f64) -> Color {
    let ratio = alpha / MAX;
    let channel = |b: u8, f: u8| blend_channel(f64::from(b), f64::from(f), ratio) as u8;

    Color::rgb(
        channel(back.r, fore.r),
        channel(back.g, fore.g),
        channel(back.b, fore.b),
    )
}

/// Blends using `fore`'s own alpha channel as the weight.
///
/// `fore.a` only drives the ratio. The result is opaque, so callers that need
/// a particular output alpha must set it afterwards with
/// [`Color::with_alpha`].
pub fn blend_color_with_alpha(back: Color, fore: Color) -> Color {
    blend_color(back, fore, f64::from(fore.a))
}

/// Averages two colors channel by channel (integer midpoint). Opaque output.
pub fn insert_color(base: Color, insert: Color) -> Color {
    let mid = |a: u8, b: u8| ((u16::from(a) + u16::from(b)) / 2) as u8;
    Color::rgb(
        mid(base.r, insert.r),
        mid(base.g, insert.g),
        mid(base.b, insert.b),
    )
}

/// Mixes `blend` over `base` at `opacity` percent.
///
/// 0 yields `base` and 100 yields `blend`. The percentage is not clamped
/// here; out-of-range values extrapolate and the channels are clamped by
/// [`color_from_rgb`].
pub fn opacity_mix(base: Color, blend: Color, opacity: i32) -> Color {
    let weight = opacity as f32 / 100.0;
    let channel =
        |b: u8, o: u8| (f32::from(o) * weight + f32::from(b) * (1.0 - weight)) as i32;

    color_from_rgb(
        channel(base.r, blend.r),
        channel(base.g, blend.g),
        channel(base.b, blend.b),
    )
}

fn overlay_channel(base: u8, blend: u8) -> i32 {
    let b = f64::from(base) / MAX;
    let a = f64::from(blend) / MAX;
    if b < 0.5 {
        (2.0 * b * a * MAX) as i32
    } else {
        ((1.0 - 2.0 * (1.0 - b) * (1.0 - a)) * MAX) as i32
    }
}

/// Composites `blend` onto `base` with the overlay formula, then mixes the
/// result back over `base` at `opacity` percent.
///
/// The branch for each channel depends on the base value.
pub fn overlay_mix(base: Color, blend: Color, opacity: i32) -> Color {
    let overlay = color_from_rgb(
        overlay_channel(base.r, blend.r),
        overlay_channel(base.g, blend.g),
        overlay_channel(base.b, blend.b),
    );
    opacity_mix(base, overlay, opacity)
}

/// Normalises in `f32`; only the square and square root run in `f64`.
fn soft_light_channel(base: u8, blend: u8) -> i32 {
    let b = f32::from(base) / 255.0;
    let a = f32::from(blend) / 255.0;
    let wide = f64::from(b);
    if a < 0.5 {
        ((f64::from(2.0 * b * a) + wide.powi(2) * f64::from(1.0 - 2.0 * a)) * MAX) as i32
    } else {
        ((wide.sqrt() * f64::from(2.0 * a - 1.0) + f64::from(2.0 * b * (1.0 - a))) * MAX) as i32
    }
}

/// Composites `blend` onto `base` with the soft-light formula.
///
/// The branch for each channel depends on the *blend* value. The soft-light
/// result is then the base of an [`opacity_mix`] with the original `base`
/// mixed in at `opacity` percent, so 0 yields the pure soft-light color and
/// 100 yields `base`. This is the reverse of [`overlay_mix`].
pub fn soft_light_mix(base: Color, blend: Color, opacity: i32) -> Color {
    let soft = color_from_rgb(
        soft_light_channel(base.r, blend.r),
        soft_light_channel(base.g, blend.g),
        soft_light_channel(base.b, blend.b),
    );
    opacity_mix(soft, base, opacity)
}

/// Generates an opaque color with R, G and B drawn from `0..=254`.
///
/// 255 is never produced for any channel.
pub fn random_color() -> Color {
    random_color_with(&mut rand::rng())
}

/// Like [`random_color`], drawing from the given generator.
pub fn random_color_with<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::rgb(
        rng.random_range(0..255),
        rng.random_range(0..255),
        rng.random_range(0..255),
    )
}

/// Scales a color's RGB channels by `alpha` percent.
///
/// 100 returns `color` unchanged. Otherwise the percentage is clamped to
/// `0..=200`, so 0 gives black, 50 halves each channel and 200 doubles it
/// (saturating at 255). The alpha channel is kept.
pub fn step_color(color: Color, alpha: i32) -> Color {
    if alpha == 100 {
        return color;
    }

    let delta = f64::from(alpha.clamp(0, 200) - 100) / 100.0;
    let ratio = 1.0 + delta;
    let channel = |c: u8| blend_channel(0.0, f64::from(c), ratio) as u8;

    Color::argb(color.a, channel(color.r), channel(color.g), channel(color.b))
}

/// Interpolates from `begin` toward `end` at `progress` percent.
///
/// Each channel is rounded half to even. The output is opaque. If any channel
/// lands outside `0..=255`, which can only happen when `progress` is outside
/// `0..=100`, the computation is abandoned and `begin` is returned unchanged.
pub fn transition_color(progress: i32, begin: Color, end: Color) -> Color {
    let channel = |b: u8, e: u8| -> Option<u8> {
        let b = f64::from(b);
        let value = (b + (f64::from(e) - b) * f64::from(progress) * 0.01).round_ties_even();
        (0.0..=MAX).contains(&value).then_some(value as u8)
    };

    match (
        channel(begin.r, end.r),
        channel(begin.g, end.g),
        channel(begin.b, end.b),
    ) {
        (Some(r), Some(g), Some(b)) => Color::rgb(r, g, b),
        _ => {
            tracing::debug!(
                progress,
                %begin,
                %end,
                "transition left the channel range, keeping begin color"
            );
            begin
        }
    }
}
