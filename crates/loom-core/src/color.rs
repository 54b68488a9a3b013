//! Hex color to color-name descriptors
//!
//! Image models respond far better to "dark blue" than to `#1A2B5C`, so
//! user-picked colors are bucketed by hue and lightness before they reach
//! a prompt. Conversion is a pure function of the input string.

/// Saturation below which a color is treated as a neutral (white/gray/black)
const NEUTRAL_SATURATION: f64 = 0.12;

/// Hue band upper bounds in degrees, checked in order
const HUE_BANDS: [(f64, &str); 7] = [
    (50.0, "orange"),
    (70.0, "yellow"),
    (160.0, "green"),
    (200.0, "cyan"),
    (250.0, "blue"),
    (290.0, "purple"),
    (340.0, "magenta"),
];

/// Parse `#RRGGBB` (leading `#` optional) into channels in `[0, 1]`
pub fn parse_hex(hex: &str) -> Option<(f64, f64, f64)> {
    let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .ok()
            .map(|v| v as f64 / 255.0)
    };
    Some((channel(0)?, channel(2)?, channel(4)?))
}

fn hue_degrees(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    let hue = if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    hue.rem_euclid(360.0)
}

fn hue_name(hue: f64) -> &'static str {
    if !(20.0..340.0).contains(&hue) {
        return "red";
    }
    HUE_BANDS
        .iter()
        .find(|(bound, _)| hue < *bound)
        .map(|(_, name)| *name)
        .unwrap_or("red")
}

/// Convert a hex color into a phrase like "light blue", "red" or "gray".
///
/// Malformed input is returned unchanged.
pub fn color_to_descriptor(hex: &str) -> String {
    let Some((r, g, b)) = parse_hex(hex) else {
        return hex.to_string();
    };

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let value = max;
    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    if saturation < NEUTRAL_SATURATION {
        let name = if value > 0.9 {
            "white"
        } else if value < 0.2 {
            "black"
        } else {
            "gray"
        };
        return name.to_string();
    }

    let name = hue_name(hue_degrees(r, g, b, max, delta));

    // Lightness (HSL) keeps fully saturated primaries unqualified.
    let lightness = (max + min) / 2.0;
    if lightness >= 0.8 {
        format!("light {}", name)
    } else if lightness <= 0.35 {
        format!("dark {}", name)
    } else {
        name.to_string()
    }
}

/// Comma-joined descriptors in input order, or `None` for an empty list.
///
/// Order carries weight in the final sentence: the first-added color is
/// emphasized first.
pub fn colors_to_palette_text<S: AsRef<str>>(colors: &[S]) -> Option<String> {
    if colors.is_empty() {
        return None;
    }
    Some(
        colors
            .iter()
            .map(|c| color_to_descriptor(c.as_ref()))
            .collect::<Vec<_>>()
            .join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE_NAMES: [&str; 11] = [
        "red", "orange", "yellow", "green", "cyan", "blue", "purple", "magenta", "white",
        "black", "gray",
    ];

    #[test]
    fn test_primaries() {
        assert_eq!(color_to_descriptor("#FF0000"), "red");
        assert_eq!(color_to_descriptor("#00FF00"), "green");
        assert_eq!(color_to_descriptor("#0000FF"), "blue");
        assert_eq!(color_to_descriptor("00ffff"), "cyan");
    }

    #[test]
    fn test_neutrals() {
        assert_eq!(color_to_descriptor("#FFFFFF"), "white");
        assert_eq!(color_to_descriptor("#000000"), "black");
        assert_eq!(color_to_descriptor("#808080"), "gray");
        assert_eq!(color_to_descriptor("#F0F0EE"), "white");
    }

    #[test]
    fn test_lightness_qualifiers() {
        assert_eq!(color_to_descriptor("#000080"), "dark blue");
        assert_eq!(color_to_descriptor("#FFC0CB"), "light red");
        assert_eq!(color_to_descriptor("#FF8C00"), "orange");
        assert_eq!(color_to_descriptor("#800080"), "dark magenta");
    }

    #[test]
    fn test_hue_band_edges() {
        // hue 340 wraps back to red
        assert_eq!(color_to_descriptor("#FF0040"), "red");
        assert_eq!(color_to_descriptor("#FFFF00"), "yellow");
        assert_eq!(color_to_descriptor("#8000FF"), "purple");
    }

    #[test]
    fn test_malformed_returned_unchanged() {
        assert_eq!(color_to_descriptor("#12"), "#12");
        assert_eq!(color_to_descriptor("#zzzzzz"), "#zzzzzz");
        assert_eq!(color_to_descriptor("navy"), "navy");
        assert_eq!(color_to_descriptor(""), "");
    }

    #[test]
    fn test_every_descriptor_has_one_known_name() {
        for r in (0..=255u32).step_by(51) {
            for g in (0..=255u32).step_by(51) {
                for b in (0..=255u32).step_by(51) {
                    let hex = format!("#{:02X}{:02X}{:02X}", r, g, b);
                    let desc = color_to_descriptor(&hex);
                    let base = desc
                        .strip_prefix("light ")
                        .or_else(|| desc.strip_prefix("dark "))
                        .unwrap_or(&desc);
                    assert!(BASE_NAMES.contains(&base), "{} -> {}", hex, desc);
                }
            }
        }
    }

    #[test]
    fn test_palette_text_preserves_order() {
        assert_eq!(colors_to_palette_text::<&str>(&[]), None);
        assert_eq!(
            colors_to_palette_text(&["#FF0000", "#0000FF"]).as_deref(),
            Some("red, blue")
        );
        assert_eq!(
            colors_to_palette_text(&["#0000FF", "#FF0000"]).as_deref(),
            Some("blue, red")
        );
    }
}
