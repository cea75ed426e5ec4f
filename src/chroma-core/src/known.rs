//! Well-known named colors.
//!
//! The table holds `Transparent` followed by the 140 web colors, in the order
//! a color picker lists them. Name lookup is ASCII case-insensitive.

use crate::color::Color;

/// Every well-known color, paired with its name.
pub const KNOWN_COLORS: &[(&str, Color)] = &[
    ("Transparent", Color::from_argb(0x00FF_FFFF)),
    ("AliceBlue", Color::from_argb(0xFFF0_F8FF)),
    ("AntiqueWhite", Color::from_argb(0xFFFA_EBD7)),
    ("Aqua", Color::from_argb(0xFF00_FFFF)),
    ("Aquamarine", Color::from_argb(0xFF7F_FFD4)),
    ("Azure", Color::from_argb(0xFFF0_FFFF)),
    ("Beige", Color::from_argb(0xFFF5_F5DC)),
    ("Bisque", Color::from_argb(0xFFFF_E4C4)),
    ("Black", Color::from_argb(0xFF00_0000)),
    ("BlanchedAlmond", Color::from_argb(0xFFFF_EBCD)),
    ("Blue", Color::from_argb(0xFF00_00FF)),
    ("BlueViolet", Color::from_argb(0xFF8A_2BE2)),
    ("Brown", Color::from_argb(0xFFA5_2A2A)),
    ("BurlyWood", Color::from_argb(0xFFDE_B887)),
    ("CadetBlue", Color::from_argb(0xFF5F_9EA0)),
    ("Chartreuse", Color::from_argb(0xFF7F_FF00)),
    ("Chocolate", Color::from_argb(0xFFD2_691E)),
    ("Coral", Color::from_argb(0xFFFF_7F50)),
    ("CornflowerBlue", Color::from_argb(0xFF64_95ED)),
    ("Cornsilk", Color::from_argb(0xFFFF_F8DC)),
    ("Crimson", Color::from_argb(0xFFDC_143C)),
    ("Cyan", Color::from_argb(0xFF00_FFFF)),
    ("DarkBlue", Color::from_argb(0xFF00_008B)),
    ("DarkCyan", Color::from_argb(0xFF00_8B8B)),
    ("DarkGoldenrod", Color::from_argb(0xFFB8_860B)),
    ("DarkGray", Color::from_argb(0xFFA9_A9A9)),
    ("DarkGreen", Color::from_argb(0xFF00_6400)),
    ("DarkKhaki", Color::from_argb(0xFFBD_B76B)),
    ("DarkMagenta", Color::from_argb(0xFF8B_008B)),
    ("DarkOliveGreen", Color::from_argb(0xFF55_6B2F)),
    ("DarkOrange", Color::from_argb(0xFFFF_8C00)),
    ("DarkOrchid", Color::from_argb(0xFF99_32CC)),
    ("DarkRed", Color::from_argb(0xFF8B_0000)),
    ("DarkSalmon", Color::from_argb(0xFFE9_967A)),
    ("DarkSeaGreen", Color::from_argb(0xFF8F_BC8F)),
    ("DarkSlateBlue", Color::from_argb(0xFF48_3D8B)),
    ("DarkSlateGray", Color::from_argb(0xFF2F_4F4F)),
    ("DarkTurquoise", Color::from_argb(0xFF00_CED1)),
    ("DarkViolet", Color::from_argb(0xFF94_00D3)),
    ("DeepPink", Color::from_argb(0xFFFF_1493)),
    ("DeepSkyBlue", Color::from_argb(0xFF00_BFFF)),
    ("DimGray", Color::from_argb(0xFF69_6969)),
    ("DodgerBlue", Color::from_argb(0xFF1E_90FF)),
    ("Firebrick", Color::from_argb(0xFFB2_2222)),
    ("FloralWhite", Color::from_argb(0xFFFF_FAF0)),
    ("ForestGreen", Color::from_argb(0xFF22_8B22)),
    ("Fuchsia", Color::from_argb(0xFFFF_00FF)),
    ("Gainsboro", Color::from_argb(0xFFDC_DCDC)),
    ("GhostWhite", Color::from_argb(0xFFF8_F8FF)),
    ("Gold", Color::from_argb(0xFFFF_D700)),
    ("Goldenrod", Color::from_argb(0xFFDA_A520)),
    ("Gray", Color::from_argb(0xFF80_8080)),
    ("Green", Color::from_argb(0xFF00_8000)),
    ("GreenYellow", Color::from_argb(0xFFAD_FF2F)),
    ("Honeydew", Color::from_argb(0xFFF0_FFF0)),
    ("HotPink", Color::from_argb(0xFFFF_69B4)),
    ("IndianRed", Color::from_argb(0xFFCD_5C5C)),
    ("Indigo", Color::from_argb(0xFF4B_0082)),
    ("Ivory", Color::from_argb(0xFFFF_FFF0)),
    ("Khaki", Color::from_argb(0xFFF0_E68C)),
    ("Lavender", Color::from_argb(0xFFE6_E6FA)),
    ("LavenderBlush", Color::from_argb(0xFFFF_F0F5)),
    ("LawnGreen", Color::from_argb(0xFF7C_FC00)),
    ("LemonChiffon", Color::from_argb(0xFFFF_FACD)),
    ("LightBlue", Color::from_argb(0xFFAD_D8E6)),
    ("LightCoral", Color::from_argb(0xFFF0_8080)),
    ("LightCyan", Color::from_argb(0xFFE0_FFFF)),
    ("LightGoldenrodYellow", Color::from_argb(0xFFFA_FAD2)),
    ("LightGray", Color::from_argb(0xFFD3_D3D3)),
    ("LightGreen", Color::from_argb(0xFF90_EE90)),
    ("LightPink", Color::from_argb(0xFFFF_B6C1)),
    ("LightSalmon", Color::from_argb(0xFFFF_A07A)),
    ("LightSeaGreen", Color::from_argb(0xFF20_B2AA)),
    ("LightSkyBlue", Color::from_argb(0xFF87_CEFA)),
    ("LightSlateGray", Color::from_argb(0xFF77_8899)),
    ("LightSteelBlue", Color::from_argb(0xFFB0_C4DE)),
    ("LightYellow", Color::from_argb(0xFFFF_FFE0)),
    ("Lime", Color::from_argb(0xFF00_FF00)),
    ("LimeGreen", Color::from_argb(0xFF32_CD32)),
    ("Linen", Color::from_argb(0xFFFA_F0E6)),
    ("Magenta", Color::from_argb(0xFFFF_00FF)),
    ("Maroon", Color::from_argb(0xFF80_0000)),
    ("MediumAquamarine", Color::from_argb(0xFF66_CDAA)),
    ("MediumBlue", Color::from_argb(0xFF00_00CD)),
    ("MediumOrchid", Color::from_argb(0xFFBA_55D3)),
    ("MediumPurple", Color::from_argb(0xFF93_70DB)),
    ("MediumSeaGreen", Color::from_argb(0xFF3C_B371)),
    ("MediumSlateBlue", Color::from_argb(0xFF7B_68EE)),
    ("MediumSpringGreen", Color::from_argb(0xFF00_FA9A)),
    ("MediumTurquoise", Color::from_argb(0xFF48_D1CC)),
    ("MediumVioletRed", Color::from_argb(0xFFC7_1585)),
    ("MidnightBlue", Color::from_argb(0xFF19_1970)),
    ("MintCream", Color::from_argb(0xFFF5_FFFA)),
    ("MistyRose", Color::from_argb(0xFFFF_E4E1)),
    ("Moccasin", Color::from_argb(0xFFFF_E4B5)),
    ("NavajoWhite", Color::from_argb(0xFFFF_DEAD)),
    ("Navy", Color::from_argb(0xFF00_0080)),
    ("OldLace", Color::from_argb(0xFFFD_F5E6)),
    ("Olive", Color::from_argb(0xFF80_8000)),
    ("OliveDrab", Color::from_argb(0xFF6B_8E23)),
    ("Orange", Color::from_argb(0xFFFF_A500)),
    ("OrangeRed", Color::from_argb(0xFFFF_4500)),
    ("Orchid", Color::from_argb(0xFFDA_70D6)),
    ("PaleGoldenrod", Color::from_argb(0xFFEE_E8AA)),
    ("PaleGreen", Color::from_argb(0xFF98_FB98)),
    ("PaleTurquoise", Color::from_argb(0xFFAF_EEEE)),
    ("PaleVioletRed", Color::from_argb(0xFFDB_7093)),
    ("PapayaWhip", Color::from_argb(0xFFFF_EFD5)),
    ("PeachPuff", Color::from_argb(0xFFFF_DAB9)),
    ("Peru", Color::from_argb(0xFFCD_853F)),
    ("Pink", Color::from_argb(0xFFFF_C0CB)),
    ("Plum", Color::from_argb(0xFFDD_A0DD)),
    ("PowderBlue", Color::from_argb(0xFFB0_E0E6)),
    ("Purple", Color::from_argb(0xFF80_0080)),
    ("Red", Color::from_argb(0xFFFF_0000)),
    ("RosyBrown", Color::from_argb(0xFFBC_8F8F)),
    ("RoyalBlue", Color::from_argb(0xFF41_69E1)),
    ("SaddleBrown", Color::from_argb(0xFF8B_4513)),
    ("Salmon", Color::from_argb(0xFFFA_8072)),
    ("SandyBrown", Color::from_argb(0xFFF4_A460)),
    ("SeaGreen", Color::from_argb(0xFF2E_8B57)),
    ("SeaShell", Color::from_argb(0xFFFF_F5EE)),
    ("Sienna", Color::from_argb(0xFFA0_522D)),
    ("Silver", Color::from_argb(0xFFC0_C0C0)),
    ("SkyBlue", Color::from_argb(0xFF87_CEEB)),
    ("SlateBlue", Color::from_argb(0xFF6A_5ACD)),
    ("SlateGray", Color::from_argb(0xFF70_8090)),
    ("Snow", Color::from_argb(0xFFFF_FAFA)),
    ("SpringGreen", Color::from_argb(0xFF00_FF7F)),
    ("SteelBlue", Color::from_argb(0xFF46_82B4)),
    ("Tan", Color::from_argb(0xFFD2_B48C)),
    ("Teal", Color::from_argb(0xFF00_8080)),
    ("Thistle", Color::from_argb(0xFFD8_BFD8)),
    ("Tomato", Color::from_argb(0xFFFF_6347)),
    ("Turquoise", Color::from_argb(0xFF40_E0D0)),
    ("Violet", Color::from_argb(0xFFEE_82EE)),
    ("Wheat", Color::from_argb(0xFFF5_DEB3)),
    ("White", Color::from_argb(0xFFFF_FFFF)),
    ("WhiteSmoke", Color::from_argb(0xFFF5_F5F5)),
    ("Yellow", Color::from_argb(0xFFFF_FF00)),
    ("YellowGreen", Color::from_argb(0xFF9A_CD32)),
];

/// Returns the names of all well-known colors, in table order.
pub fn known_color_names() -> Vec<&'static str> {
    KNOWN_COLORS.iter().map(|(name, _)| *name).collect()
}

/// Looks up a well-known color by name.
///
/// Matching ignores ASCII case, and `LightGrey` is accepted as an alias for
/// `LightGray`.
///
/// # Examples
///
/// ```
/// use chroma_core::{known_color, Color};
///
/// assert_eq!(known_color("cornflowerblue"), Some(Color::rgb(100, 149, 237)));
/// assert_eq!(known_color("LightGrey"), known_color("LightGray"));
/// assert_eq!(known_color("rebeccapurple"), None);
/// ```
pub fn known_color(name: &str) -> Option<Color> {
    let name = name.trim();
    let name = if name.eq_ignore_ascii_case("lightgrey") {
        "LightGray"
    } else {
        name
    };

    KNOWN_COLORS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|(_, color)| *color)
}

/// Returns the first well-known name whose ARGB value equals `color`.
pub fn known_color_name(color: Color) -> Option<&'static str> {
    KNOWN_COLORS
        .iter()
        .find(|(_, known)| *known == color)
        .map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_size() {
        assert_eq!(KNOWN_COLORS.len(), 141);
        assert_eq!(known_color_names().len(), 141);
    }

    #[test]
    fn test_names_are_unique() {
        let unique: HashSet<String> = KNOWN_COLORS
            .iter()
            .map(|(name, _)| name.to_ascii_lowercase())
            .collect();
        assert_eq!(unique.len(), KNOWN_COLORS.len());
    }

    #[test]
    fn test_transparent_leads_the_table() {
        assert_eq!(known_color_names()[0], "Transparent");
        assert_eq!(known_color("transparent"), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_only_transparent_has_alpha() {
        for (name, color) in KNOWN_COLORS {
            if *name == "Transparent" {
                assert_eq!(color.a, 0);
            } else {
                assert_eq!(color.a, 255, "{name} should be opaque");
            }
        }
    }

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(known_color("RED"), Some(Color::RED));
        assert_eq!(known_color("  Navy "), Some(Color::rgb(0, 0, 128)));
        assert_eq!(known_color("no-such-color"), None);
    }

    #[test]
    fn test_reverse_lookup_prefers_first_entry() {
        assert_eq!(known_color_name(Color::rgb(0, 255, 255)), Some("Aqua"));
        assert_eq!(known_color_name(Color::rgb(1, 2, 3)), None);
        assert_eq!(known_color_name(Color::argb(128, 255, 0, 0)), None);
    }
}
