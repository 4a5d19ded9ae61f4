//! Chat colors carried by the `color` tag.
//!
//! Twitch sends user colors as strict `#RRGGBB` hex strings. Anything else,
//! including an absent tag, decodes to the [`Color::Empty`] sentinel rather
//! than an error.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// An RGB chat color, or the empty sentinel for absent/unparsable values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// No color was present, or the value failed validation.
    #[default]
    Empty,
    /// A decoded `#RRGGBB` color.
    Rgb {
        /// Red component.
        r: u8,
        /// Green component.
        g: u8,
        /// Blue component.
        b: u8,
    },
}

fn hex_pattern() -> &'static Regex {
    static HEX: OnceLock<Regex> = OnceLock::new();
    HEX.get_or_init(|| Regex::new("^#[0-9A-Fa-f]{6}$").expect("valid regex"))
}

impl Color {
    /// Parse a strict `#RRGGBB` string.
    ///
    /// Returns [`Color::Empty`] for anything that does not match; shorthand
    /// forms, named colors, and alpha channels are all rejected.
    pub fn parse(value: &str) -> Color {
        if !hex_pattern().is_match(value) {
            return Color::Empty;
        }
        let r = u8::from_str_radix(&value[1..3], 16).unwrap_or(0);
        let g = u8::from_str_radix(&value[3..5], 16).unwrap_or(0);
        let b = u8::from_str_radix(&value[5..7], 16).unwrap_or(0);
        Color::Rgb { r, g, b }
    }

    /// Whether this is the empty sentinel.
    pub fn is_empty(self) -> bool {
        self == Color::Empty
    }

    /// The RGB components, if any.
    pub fn rgb(self) -> Option<(u8, u8, u8)> {
        match self {
            Color::Empty => None,
            Color::Rgb { r, g, b } => Some((r, g, b)),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Empty => Ok(()),
            Color::Rgb { r, g, b } => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(
            Color::parse("#1E90FF"),
            Color::Rgb {
                r: 30,
                g: 144,
                b: 255
            }
        );
        assert_eq!(Color::parse("#000000"), Color::Rgb { r: 0, g: 0, b: 0 });
        assert_eq!(
            Color::parse("#ffffff"),
            Color::Rgb {
                r: 255,
                g: 255,
                b: 255
            }
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(Color::parse(""), Color::Empty);
        assert_eq!(Color::parse("1E90FF"), Color::Empty);
        assert_eq!(Color::parse("#1E90F"), Color::Empty);
        assert_eq!(Color::parse("#1E90FF0"), Color::Empty);
        assert_eq!(Color::parse("#GGGGGG"), Color::Empty);
        assert_eq!(Color::parse("blue"), Color::Empty);
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::parse("#1e90ff").to_string(), "#1E90FF");
        assert_eq!(Color::Empty.to_string(), "");
    }

    #[test]
    fn test_rgb_accessor() {
        assert_eq!(Color::parse("#1E90FF").rgb(), Some((30, 144, 255)));
        assert_eq!(Color::Empty.rgb(), None);
        assert!(Color::Empty.is_empty());
        assert!(!Color::parse("#1E90FF").is_empty());
    }
}
