//! Behavioral properties of the color-math surface.
//!
//! These tests exercise the public API only and sweep over many inputs
//! instead of checking single examples.

use chroma_core::{
    Brightness, CaptureError, Color, ColorParseError, Error, FrameBuffer, Point, ScreenSampler,
    blend_color, blend_color_with_alpha, color_from_hex, color_from_position, color_from_rgb,
    cursor_pointer_color, insert_color, known_color, known_color_names, opacity_mix, random_color,
    step_color, tint_color, transition_color,
};

/// A deterministic spread of colors covering the channel extremes.
fn sample_colors() -> Vec<Color> {
    let levels = [0u8, 1, 63, 127, 128, 200, 254, 255];
    let mut colors = Vec::new();
    for &r in &levels {
        for &g in &levels {
            for &b in &[0u8, 128, 255] {
                colors.push(Color::argb(r ^ g, r, g, b));
            }
        }
    }
    colors
}

// ============================================================================
// BLEND TESTS
// ============================================================================

mod blend {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blending_a_color_with_itself_keeps_rgb() {
        for c in sample_colors() {
            for alpha in [0.0, 1.0, 77.7, 128.0, 255.0, 400.0, -30.0] {
                assert_eq!(blend_color(c, c, alpha), c.opaque(), "alpha {alpha}");
            }
        }
    }

    #[test]
    fn two_color_overload_never_propagates_fore_alpha() {
        for c in sample_colors() {
            let out = blend_color_with_alpha(Color::WHITE, c);
            assert_eq!(out.a, 255);
            assert_eq!(out, blend_color(Color::WHITE, c, f64::from(c.a)));
        }
    }
}

// ============================================================================
// CONSTRUCTION AND PARSING TESTS
// ============================================================================

mod construct {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rgb_constructor_clamps_each_channel() {
        assert_eq!(color_from_rgb(-10, 300, 128), color_from_rgb(0, 255, 128));
        assert_eq!(color_from_rgb(-10, 300, 128), Color::rgb(0, 255, 128));
    }

    #[test]
    fn hex_red_is_opaque_red() {
        assert_eq!(color_from_hex(None, "#FF0000").unwrap(), Color::rgb(255, 0, 0));
    }

    #[test]
    fn malformed_hex_is_invalid_format() {
        for bad in ["not-a-color", "", "#12", "#12345", "#GG0000", "FF0000", "rgb(1,2,3)"] {
            let err = color_from_hex(None, bad).unwrap_err();
            assert!(matches!(err, Error::InvalidFormat(_)), "{bad:?} gave {err:?}");
        }
    }

    #[test]
    fn alpha_override_applies_to_names_and_hex() {
        assert_eq!(color_from_hex(Some(0), "#FF0000").unwrap(), Color::argb(0, 255, 0, 0));
        assert_eq!(color_from_hex(Some(200), "White").unwrap().a, 200);
    }

    #[test]
    fn every_known_name_parses() {
        for name in known_color_names() {
            let parsed = color_from_hex(None, name).unwrap();
            assert_eq!(Some(parsed), known_color(name));
            assert_eq!(parsed, color_from_hex(None, &name.to_uppercase()).unwrap());
        }
    }

    #[test]
    fn eight_digit_hex_is_alpha_first() {
        assert_eq!(
            color_from_hex(None, "#80FF0000").unwrap(),
            Color::argb(128, 255, 0, 0)
        );
        for c in sample_colors() {
            assert_eq!(color_from_hex(None, &c.to_hex()).unwrap(), c);
        }
    }

    #[test]
    fn html_form_round_trips() {
        for c in sample_colors() {
            let opaque = c.opaque();
            assert_eq!(color_from_hex(None, &opaque.to_html()).unwrap(), opaque);
        }
    }

    #[test]
    fn unknown_name_reports_the_token() {
        assert_eq!(
            color_from_hex(None, " chartreusey "),
            Err(Error::InvalidFormat(ColorParseError::UnknownColor(
                "chartreusey".to_string()
            )))
        );
    }
}

// ============================================================================
// MIX TESTS
// ============================================================================

mod mixes {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn opacity_mix_endpoints() {
        let colors = sample_colors();
        for pair in colors.windows(2) {
            let (base, blend) = (pair[0], pair[1]);
            assert_eq!(opacity_mix(base, blend, 0), base.opaque());
            assert_eq!(opacity_mix(base, blend, 100), blend.opaque());
        }
    }

    #[test]
    fn insert_color_is_commutative() {
        let colors = sample_colors();
        for &a in &colors {
            for &b in colors.iter().step_by(7) {
                assert_eq!(insert_color(a, b), insert_color(b, a));
            }
        }
    }

    #[test]
    fn step_color_hundred_is_identity() {
        for c in sample_colors() {
            assert_eq!(step_color(c, 100), c);
        }
    }

    #[test]
    fn transition_endpoints_are_exact() {
        let colors = sample_colors();
        for pair in colors.windows(2) {
            let (begin, end) = (pair[0], pair[1]);
            assert_eq!(transition_color(0, begin, end), begin.opaque());
            assert_eq!(transition_color(100, begin, end), end.opaque());
        }
    }

    #[test]
    fn transition_never_fails_outside_range() {
        let begin = Color::argb(1, 2, 3, 4);
        for progress in [-1_000, -101, 101, 250, i32::MAX, i32::MIN] {
            let out = transition_color(progress, begin, Color::WHITE);
            assert!(out == begin || out.is_opaque());
        }
    }

    #[test]
    fn random_color_never_yields_255() {
        for _ in 0..10_000 {
            let c = random_color();
            assert!(c.r != 255 && c.g != 255 && c.b != 255, "{c:?}");
            assert!(c.is_opaque());
        }
    }
}

// ============================================================================
// TINT TESTS
// ============================================================================

mod tints {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tint_saturates_at_bounds() {
        assert_eq!(
            tint_color(Brightness::Darker, Color::rgb(10, 10, 10), 50),
            Color::rgb(0, 0, 0)
        );
        assert_eq!(
            tint_color(Brightness::Lighter, Color::rgb(250, 250, 250), 10),
            Color::rgb(255, 255, 255)
        );
    }

    #[test]
    fn tint_output_is_always_opaque() {
        for c in sample_colors() {
            assert!(tint_color(Brightness::Darker, c, 3).is_opaque());
            assert!(tint_color(Brightness::Lighter, c, 3).is_opaque());
        }
    }

    #[test]
    fn undefined_direction_is_invalid_argument() {
        assert!(matches!(
            Brightness::try_from(-1),
            Err(Error::InvalidArgument(_))
        ));
    }
}

// ============================================================================
// SAMPLING TESTS
// ============================================================================

mod sampling {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn samples_every_pixel_and_releases_each_context() {
        let frame = FrameBuffer::from_fn(8, 8, |p| Color::rgb(p.x as u8 * 10, p.y as u8 * 10, 7));
        for y in 0..8 {
            for x in 0..8 {
                let c = color_from_position(&frame, Point::new(x, y)).unwrap();
                assert_eq!(c, Color::rgb(x as u8 * 10, y as u8 * 10, 7));
            }
        }
        assert_eq!(frame.acquisitions(), 64);
        assert_eq!(frame.releases(), 64);
    }

    #[test]
    fn missing_capability_is_capture_unavailable() {
        let mut frame = FrameBuffer::new(1, 1, Color::BLACK);
        frame.set_available(false);
        frame.set_pointer(Some(Point::ZERO));

        let sampler = ScreenSampler::new(frame);
        assert!(matches!(
            sampler.sample_cursor(),
            Err(Error::CaptureUnavailable(CaptureError::Unavailable(_)))
        ));
        assert!(matches!(
            cursor_pointer_color(sampler.screen()),
            Err(Error::CaptureUnavailable(_))
        ));
    }
}
