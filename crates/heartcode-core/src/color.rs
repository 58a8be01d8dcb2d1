//! Validated RGB colors parsed at the API boundary.
//!
//! Styles only accept [`Color`] values, so malformed hex strings are
//! rejected up front instead of surfacing as a drawing failure halfway
//! through a render.

use std::fmt;
use std::str::FromStr;

use image::{Rgb, Rgba};

use crate::Error;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const HOT_PINK: Color = Color::rgb(255, 105, 180);
    pub const DEEP_PINK: Color = Color::rgb(255, 20, 147);

    /// Create a color from raw channel values.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to an opaque `image` RGB pixel.
    pub fn to_rgb(self) -> Rgb<u8> {
        Rgb([self.r, self.g, self.b])
    }

    /// Convert to an `image` RGBA pixel with the given alpha.
    pub fn to_rgba(self, alpha: u8) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, alpha])
    }
}

/// Color names accepted alongside hex notation.
const NAMED: &[(&str, Color)] = &[
    ("black", Color::BLACK),
    ("white", Color::WHITE),
    ("red", Color::RED),
    ("hotpink", Color::HOT_PINK),
    ("deeppink", Color::DEEP_PINK),
];

impl FromStr for Color {
    type Err = Error;

    /// Parse `#RRGGBB`, `#RGB`, or one of the supported color names.
    fn from_str(s: &str) -> Result<Self, Error> {
        let trimmed = s.trim();
        if let Some(digits) = trimmed.strip_prefix('#') {
            return parse_hex(s, digits);
        }
        let lower = trimmed.to_ascii_lowercase();
        NAMED
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, color)| *color)
            .ok_or_else(|| invalid(s, "unknown color name, expected #RRGGBB or #RGB"))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

fn parse_hex(value: &str, digits: &str) -> Result<Color, Error> {
    let nibbles: Option<Vec<u8>> = digits
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect();
    let Some(nibbles) = nibbles else {
        return Err(invalid(value, "contains a non-hex digit"));
    };
    match nibbles.len() {
        6 => Ok(Color::rgb(
            nibbles[0] * 16 + nibbles[1],
            nibbles[2] * 16 + nibbles[3],
            nibbles[4] * 16 + nibbles[5],
        )),
        // Short form: each digit doubles, 0xF -> 0xFF.
        3 => Ok(Color::rgb(nibbles[0] * 17, nibbles[1] * 17, nibbles[2] * 17)),
        n => Err(invalid(value, &format!("expected 3 or 6 hex digits, got {n}"))),
    }
}

fn invalid(value: &str, reason: &str) -> Error {
    Error::InvalidColor {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_hex() {
        assert_eq!("#FF1493".parse::<Color>().unwrap(), Color::DEEP_PINK);
        assert_eq!("#ffe4e6".parse::<Color>().unwrap(), Color::rgb(255, 228, 230));
    }

    #[test]
    fn parses_short_hex() {
        assert_eq!("#f09".parse::<Color>().unwrap(), Color::rgb(255, 0, 153));
        assert_eq!("#000".parse::<Color>().unwrap(), Color::BLACK);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("HotPink".parse::<Color>().unwrap(), Color::HOT_PINK);
        assert_eq!(" white ".parse::<Color>().unwrap(), Color::WHITE);
    }

    #[test]
    fn rejects_bad_input() {
        for bad in ["", "plaid", "#12345", "#GGGGGG", "#"] {
            let err = bad.parse::<Color>().unwrap_err();
            assert!(matches!(err, Error::InvalidColor { .. }), "input {bad:?}");
        }
    }

    #[test]
    fn displays_as_hex() {
        assert_eq!(Color::DEEP_PINK.to_string(), "#FF1493");
        assert_eq!(Color::rgb(1, 2, 3).to_string(), "#010203");
    }

    #[test]
    fn converts_to_pixels() {
        assert_eq!(Color::RED.to_rgb(), Rgb([255, 0, 0]));
        assert_eq!(Color::RED.to_rgba(180), Rgba([255, 0, 0, 180]));
    }
}
