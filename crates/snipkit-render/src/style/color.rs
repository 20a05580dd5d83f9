//! Color values as written in theme documents.
//!
//! Supported formats:
//!
//! - Named colors: `red`, `green`, `blue`, etc. (8 ANSI colors)
//! - Bright variants: `bright_red`, `bright_green`, etc.
//! - 256-color palette index as a string: `"0"` through `"255"`
//! - RGB hex: `"#ff6b35"` or `"#fff"` (3 or 6 digit)
//! - The empty string, meaning "no color"
//!
//! # Example
//!
//! ```rust
//! use snipkit_render::{ColorCapability, ThemeColor};
//!
//! let accent = ThemeColor::parse("#ff6b35").unwrap();
//! assert_eq!(accent, ThemeColor::Rgb(255, 107, 53));
//!
//! // Nothing is emitted on a terminal without color support.
//! assert_eq!(accent.to_console_color(ColorCapability::None), None);
//! ```

use console::Color;

use crate::capability::ColorCapability;
use crate::util::{ansi256_to_rgb, rgb_to_ansi16, rgb_to_ansi256};

/// A parsed theme color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeColor {
    /// No color: the terminal default is used.
    #[default]
    Unset,
    /// ANSI palette index (0-15 basic, 16-255 extended).
    Ansi(u8),
    /// True color RGB.
    Rgb(u8, u8, u8),
}

impl ThemeColor {
    /// Parses a color specification string.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();

        if s.is_empty() {
            return Ok(ThemeColor::Unset);
        }

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        if s.bytes().all(|b| b.is_ascii_digit()) {
            return s
                .parse::<u8>()
                .map(ThemeColor::Ansi)
                .map_err(|_| format!("Color palette index {} out of range (0-255)", s));
        }

        Self::parse_named(s)
    }

    /// Parses a color, degrading unrecognized values to [`ThemeColor::Unset`].
    pub fn parse_lenient(slot: &str, s: &str) -> Self {
        match Self::parse(s) {
            Ok(color) => color,
            Err(reason) => {
                tracing::debug!(slot, value = s, %reason, "ignoring unparseable theme color");
                ThemeColor::Unset
            }
        }
    }

    /// Parses a hex color code (without the # prefix).
    fn parse_hex(hex: &str) -> Result<Self, String> {
        let component = |range: std::ops::Range<usize>, scale: u8| {
            u8::from_str_radix(&hex[range], 16)
                .map(|v| v * scale)
                .map_err(|_| format!("Invalid hex: {}", hex))
        };

        if !hex.is_ascii() {
            return Err(format!("Invalid hex: {}", hex));
        }

        match hex.len() {
            // 3-digit hex: #rgb -> #rrggbb
            3 => Ok(ThemeColor::Rgb(
                component(0..1, 17)?,
                component(1..2, 17)?,
                component(2..3, 17)?,
            )),
            6 => Ok(ThemeColor::Rgb(
                component(0..2, 1)?,
                component(2..4, 1)?,
                component(4..6, 1)?,
            )),
            _ => Err(format!(
                "Invalid hex color: #{} (must be 3 or 6 digits)",
                hex
            )),
        }
    }

    /// Parses a named color (including bright variants).
    fn parse_named(name: &str) -> Result<Self, String> {
        let name_lower = name.to_lowercase();

        let (base, offset) = match name_lower.strip_prefix("bright_") {
            Some(base) => (base, 8),
            None => (name_lower.as_str(), 0),
        };

        let index = match base {
            "black" => 0,
            "red" => 1,
            "green" => 2,
            "yellow" => 3,
            "blue" => 4,
            "magenta" => 5,
            "cyan" => 6,
            "white" => 7,
            "gray" | "grey" if offset == 0 => 7,
            _ => return Err(format!("Unknown color name: {}", name)),
        };

        Ok(ThemeColor::Ansi(index + offset))
    }

    /// True when the color is [`ThemeColor::Unset`].
    pub fn is_unset(&self) -> bool {
        matches!(self, ThemeColor::Unset)
    }

    /// Downsamples this color to what the terminal can show.
    ///
    /// Returns `None` when nothing should be emitted: the color is unset or
    /// the terminal has no color support. RGB colors pass through unchanged
    /// on true-color terminals and map to the 256-color palette otherwise.
    pub fn to_console_color(&self, capability: ColorCapability) -> Option<Color> {
        let index = match (capability, *self) {
            (ColorCapability::None, _) | (_, ThemeColor::Unset) => return None,
            (ColorCapability::TrueColor, ThemeColor::Rgb(r, g, b)) => {
                return Some(Color::TrueColor(r, g, b))
            }
            (ColorCapability::Basic, ThemeColor::Ansi(n)) if n < 16 => n,
            (ColorCapability::Basic, ThemeColor::Ansi(n)) => rgb_to_ansi16(ansi256_to_rgb(n)),
            (ColorCapability::Basic, ThemeColor::Rgb(r, g, b)) => rgb_to_ansi16((r, g, b)),
            (_, ThemeColor::Ansi(n)) => n,
            (_, ThemeColor::Rgb(r, g, b)) => rgb_to_ansi256((r, g, b)),
        };

        Some(match index {
            0 => Color::Black,
            1 => Color::Red,
            2 => Color::Green,
            3 => Color::Yellow,
            4 => Color::Blue,
            5 => Color::Magenta,
            6 => Color::Cyan,
            7 => Color::White,
            n => Color::Color256(n),
        })
    }
}
