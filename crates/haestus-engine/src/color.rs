//! HSL and hex color conversion.
//!
//! The gradient model stores colors as `hsl(H, S%, L%)` literals, while the
//! color picker speaks `#rrggbb`. Conversions never fail: malformed input
//! falls back to black.

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::debug;

/// Hex string returned for any HSL input that does not parse.
pub const BLACK_HEX: &str = "#000000";

/// A color in HSL space with integer channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hsl {
    /// Hue in degrees, 0..=360 (360 is the same hue as 0).
    pub h: u16,
    /// Saturation percentage, 0..=100.
    pub s: u8,
    /// Lightness percentage, 0..=100.
    pub l: u8,
}

/// A color in 8-bit RGB space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Error returned when parsing a color literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    /// Input is not of the form `hsl(H, S%, L%)`.
    #[error("not an hsl() color: {0:?}")]
    InvalidHsl(String),

    /// Input is not of the form `#rrggbb`.
    #[error("not a #rrggbb color: {0:?}")]
    InvalidHex(String),

    /// A channel is outside its allowed range.
    #[error("channel out of range in {0:?}")]
    OutOfRange(String),
}

impl Hsl {
    /// Create an HSL color. Values are not range-checked here.
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }

    /// Convert to RGB using the `hue2rgb` piecewise formula.
    pub fn to_rgb(self) -> Rgb {
        let h = f64::from(self.h) / 360.0;
        let s = f64::from(self.s) / 100.0;
        let l = f64::from(self.l) / 100.0;

        let (r, g, b) = if self.s == 0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_rgb(p, q, h + 1.0 / 3.0),
                hue_to_rgb(p, q, h),
                hue_to_rgb(p, q, h - 1.0 / 3.0),
            )
        };

        Rgb {
            r: unit_to_byte(r),
            g: unit_to_byte(g),
            b: unit_to_byte(b),
        }
    }

    /// Hex form of this color, e.g. `#3399ff`.
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

impl FromStr for Hsl {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorParseError::InvalidHsl(s.to_string());
        let caps = hsl_regex()
            .and_then(|re| re.captures(s.trim()))
            .ok_or_else(invalid)?;

        let channel = |i: usize| -> Result<u32, ColorParseError> {
            caps[i]
                .parse::<u32>()
                .map_err(|_| ColorParseError::OutOfRange(s.to_string()))
        };
        let (h, sat, l) = (channel(1)?, channel(2)?, channel(3)?);

        if h > 360 || sat > 100 || l > 100 {
            return Err(ColorParseError::OutOfRange(s.to_string()));
        }

        // Bounds checked above, so the narrowing casts are lossless.
        #[allow(clippy::cast_possible_truncation)]
        let hsl = Self::new(h as u16, sat as u8, l as u8);
        Ok(hsl)
    }
}

impl Serialize for Hsl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hsl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` string (case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError::InvalidHex(s.to_string());
        let digits = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let byte = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };
        Ok(Self::new(byte(0..2)?, byte(2..4)?, byte(4..6)?))
    }

    /// Lower-case `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to HSL, rounding every channel to the nearest integer.
    #[allow(clippy::float_cmp)]
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let mut h = 0.0;
        let mut s = 0.0;

        if max != min {
            let d = max - min;
            s = if l > 0.5 {
                d / (2.0 - max - min)
            } else {
                d / (max + min)
            };

            h = if max == r {
                ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
            } else if max == g {
                ((b - r) / d + 2.0) / 6.0
            } else {
                ((r - g) / d + 4.0) / 6.0
            };
        }

        // All three are in 0.0..=1.0, so the scaled values fit.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let hsl = Hsl::new(
            (h * 360.0).round() as u16,
            (s * 100.0).round() as u8,
            (l * 100.0).round() as u8,
        );
        hsl
    }
}

/// Convert an `hsl(H, S%, L%)` string to `#rrggbb`.
///
/// Anything that does not parse yields [`BLACK_HEX`].
pub fn hsl_to_hex(input: &str) -> String {
    match input.parse::<Hsl>() {
        Ok(hsl) => hsl.to_hex(),
        Err(e) => {
            debug!(error = %e, "falling back to black");
            BLACK_HEX.to_string()
        }
    }
}

/// Convert a `#rrggbb` string to `hsl(H, S%, L%)`.
///
/// Malformed hex input yields `hsl(0, 0%, 0%)`.
pub fn hex_to_hsl(input: &str) -> String {
    match Rgb::from_hex(input) {
        Ok(rgb) => rgb.to_hsl().to_string(),
        Err(e) => {
            debug!(error = %e, "falling back to black");
            Hsl::default().to_string()
        }
    }
}

/// The `hsl(H, S%, L%)` grammar, compiled once.
fn hsl_regex() -> Option<&'static Regex> {
    static HSL_RE: OnceLock<Option<Regex>> = OnceLock::new();
    HSL_RE
        .get_or_init(|| Regex::new(r"^hsl\((\d+),\s*(\d+)%,\s*(\d+)%\)$").ok())
        .as_ref()
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_byte(x: f64) -> u8 {
    (x * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_hsl_example() {
        assert_eq!(hex_to_hsl("#3399FF"), "hsl(210, 100%, 60%)");
    }

    #[test]
    fn test_hsl_to_hex_example() {
        assert_eq!(hsl_to_hex("hsl(210, 100%, 60%)"), "#3399ff");
    }

    #[test]
    fn test_primaries() {
        assert_eq!(hsl_to_hex("hsl(0, 100%, 50%)"), "#ff0000");
        assert_eq!(hsl_to_hex("hsl(120, 100%, 50%)"), "#00ff00");
        assert_eq!(hsl_to_hex("hsl(240, 100%, 50%)"), "#0000ff");
        assert_eq!(hex_to_hsl("#ff0000"), "hsl(0, 100%, 50%)");
        assert_eq!(hex_to_hsl("#00ff00"), "hsl(120, 100%, 50%)");
        assert_eq!(hex_to_hsl("#0000ff"), "hsl(240, 100%, 50%)");
    }

    #[test]
    fn test_achromatic() {
        assert_eq!(hsl_to_hex("hsl(0, 0%, 0%)"), "#000000");
        assert_eq!(hsl_to_hex("hsl(0, 0%, 100%)"), "#ffffff");
        assert_eq!(hex_to_hsl("#808080"), "hsl(0, 0%, 50%)");
        assert_eq!(hex_to_hsl("#ffffff"), "hsl(0, 0%, 100%)");
    }

    #[test]
    fn test_whitespace_after_commas_is_optional() {
        assert_eq!(hsl_to_hex("hsl(210,100%,60%)"), "#3399ff");
        assert_eq!(hsl_to_hex("hsl(210,   100%,  60%)"), "#3399ff");
    }

    #[test]
    fn test_malformed_hsl_falls_back_to_black() {
        for input in [
            "",
            "red",
            "#3399ff",
            "hsl(210, 100, 60)",
            "hsla(210, 100%, 60%, 0.5)",
            "hsl(-10, 50%, 50%)",
            "hsl(10.5, 50%, 50%)",
            "rgb(1, 2, 3)",
            "hsl(210, 100%, 60%",
        ] {
            assert_eq!(hsl_to_hex(input), BLACK_HEX, "input {input:?}");
        }
    }

    #[test]
    fn test_out_of_range_falls_back_to_black() {
        assert_eq!(hsl_to_hex("hsl(400, 50%, 50%)"), BLACK_HEX);
        assert_eq!(hsl_to_hex("hsl(10, 150%, 50%)"), BLACK_HEX);
        assert_eq!(hsl_to_hex("hsl(10, 50%, 101%)"), BLACK_HEX);
        assert_eq!(hsl_to_hex("hsl(99999999999, 50%, 50%)"), BLACK_HEX);
    }

    #[test]
    fn test_malformed_hex_falls_back() {
        assert_eq!(hex_to_hsl("3399ff"), "hsl(0, 0%, 0%)");
        assert_eq!(hex_to_hsl("#39f"), "hsl(0, 0%, 0%)");
        assert_eq!(hex_to_hsl("#zz99ff"), "hsl(0, 0%, 0%)");
    }

    /// Worst per-channel drift of hex -> hsl -> hex over the whole RGB cube.
    /// Integer HSL has fewer states than 24-bit RGB.
    const ROUND_TRIP_TOLERANCE: u8 = 5;

    fn drift(original: Rgb) -> u8 {
        let back = Rgb::from_hex(&hsl_to_hex(&hex_to_hsl(&original.to_hex())))
            .expect("round trip produces valid hex");
        original
            .r
            .abs_diff(back.r)
            .max(original.g.abs_diff(back.g))
            .max(original.b.abs_diff(back.b))
    }

    #[test]
    fn test_round_trip_drift_is_bounded() {
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(5) {
                for b in (0..=255u8).step_by(5) {
                    let original = Rgb::new(r, g, b);
                    assert!(
                        drift(original) <= ROUND_TRIP_TOLERANCE,
                        "{} drifted too far",
                        original.to_hex()
                    );
                }
            }
        }
    }

    #[test]
    fn test_round_trip_worst_case() {
        assert_eq!(hex_to_hsl("#02e4e6"), "hsl(181, 98%, 45%)");
        assert_eq!(hsl_to_hex("hsl(181, 98%, 45%)"), "#02dfe3");
        assert_eq!(drift(Rgb::new(2, 228, 230)), ROUND_TRIP_TOLERANCE);
    }

    #[test]
    fn test_round_trip_exact_for_preset_like_colors() {
        for hex in ["#3399ff", "#ff0000", "#000000", "#ffffff", "#808080", "#00ffff"] {
            assert_eq!(hsl_to_hex(&hex_to_hsl(hex)), hex);
        }
    }

    #[test]
    fn test_hsl_display_and_parse() {
        let hsl: Hsl = "hsl(193, 85%, 66%)".parse().unwrap();
        assert_eq!(hsl, Hsl::new(193, 85, 66));
        assert_eq!(hsl.to_string(), "hsl(193, 85%, 66%)");
    }

    #[test]
    fn test_hsl_serde_as_string() {
        let json = serde_json::to_string(&Hsl::new(0, 0, 5)).unwrap();
        assert_eq!(json, "\"hsl(0, 0%, 5%)\"");
        let back: Hsl = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Hsl::new(0, 0, 5));
        assert!(serde_json::from_str::<Hsl>("\"blue\"").is_err());
    }

    #[test]
    fn test_hue_360_is_accepted() {
        assert_eq!(hsl_to_hex("hsl(360, 100%, 50%)"), "#ff0000");
    }
}
