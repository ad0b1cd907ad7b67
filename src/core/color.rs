use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Hex codes of the standard dataset palette, in pick order.
pub const STANDARD_PALETTE_HEX: [&str; 16] = [
    "9BA4B2", "F1D651", "9F5D6B", "343D68", "94BFDE", "AA3C55", "255C35", "AA9E9B", "38323D",
    "84817E", "A19B9A", "88BCAA", "787FCC", "2F6192", "A2795B", "2C1B2E",
];

/// RGBA color with 8-bit channels, rendered as a CSS `rgba(...)` string.
///
/// A color only counts as configured once it is marked valid: parsing a
/// well-formed hex code, a named constructor, or any channel setter does that.
/// Builders skip invalid colors when they export their JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
    valid: bool,
}

impl Default for Color {
    fn default() -> Self {
        Self {
            red: u8::MAX,
            green: u8::MAX,
            blue: u8::MAX,
            alpha: u8::MAX,
            valid: false,
        }
    }
}

impl Color {
    /// Builds a valid color from explicit channels.
    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
            valid: true,
        }
    }

    /// Builds a valid, fully opaque color.
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, u8::MAX)
    }

    /// Parses a six-digit `RRGGBB` hex code.
    ///
    /// Any other length leaves the color at its invalid default. A pair that
    /// is not fully hexadecimal keeps its leading hex digit, or becomes 0 when
    /// there is none; whitespace and signs count as non-hex.
    #[must_use]
    pub fn from_hex(hex_code: &str) -> Self {
        let bytes = hex_code.as_bytes();
        if bytes.len() != 6 {
            debug!(hex_code, len = bytes.len(), "ignoring hex color with invalid length");
            return Self::default();
        }

        Self::rgb(
            parse_hex_pair(bytes[0], bytes[1]),
            parse_hex_pair(bytes[2], bytes[3]),
            parse_hex_pair(bytes[4], bytes[5]),
        )
    }

    #[must_use]
    pub const fn red(value: u8) -> Self {
        Self::rgb(value, 0, 0)
    }

    #[must_use]
    pub const fn green(value: u8) -> Self {
        Self::rgb(0, value, 0)
    }

    #[must_use]
    pub const fn blue(value: u8) -> Self {
        Self::rgb(0, 0, value)
    }

    #[must_use]
    pub const fn gray(value: u8) -> Self {
        Self::rgb(value, value, value)
    }

    #[must_use]
    pub const fn white() -> Self {
        Self::rgb(u8::MAX, u8::MAX, u8::MAX)
    }

    #[must_use]
    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    /// White with zero alpha.
    #[must_use]
    pub const fn transparent() -> Self {
        Self::rgba(u8::MAX, u8::MAX, u8::MAX, 0)
    }

    /// Returns palette entry `idx % 16`.
    #[must_use]
    pub fn standard(idx: usize) -> Self {
        Self::from_hex(STANDARD_PALETTE_HEX[idx % STANDARD_PALETTE_HEX.len()])
    }

    #[must_use]
    pub fn standard_palette() -> Vec<Self> {
        STANDARD_PALETTE_HEX
            .iter()
            .map(|hex_code| Self::from_hex(hex_code))
            .collect()
    }

    #[must_use]
    pub fn with_red(mut self, value: u8) -> Self {
        self.red = value;
        self.valid = true;
        self
    }

    #[must_use]
    pub fn with_green(mut self, value: u8) -> Self {
        self.green = value;
        self.valid = true;
        self
    }

    #[must_use]
    pub fn with_blue(mut self, value: u8) -> Self {
        self.blue = value;
        self.valid = true;
        self
    }

    #[must_use]
    pub fn with_alpha(mut self, value: u8) -> Self {
        self.alpha = value;
        self.valid = true;
        self
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.valid
    }

    #[must_use]
    pub const fn red_channel(self) -> u8 {
        self.red
    }

    #[must_use]
    pub const fn green_channel(self) -> u8 {
        self.green
    }

    #[must_use]
    pub const fn blue_channel(self) -> u8 {
        self.blue
    }

    #[must_use]
    pub const fn alpha_channel(self) -> u8 {
        self.alpha
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({},{},{},{:.2})",
            self.red,
            self.green,
            self.blue,
            f64::from(self.alpha) / f64::from(u8::MAX)
        )
    }
}

fn hex_digit(byte: u8) -> Option<u8> {
    char::from(byte).to_digit(16).and_then(|d| u8::try_from(d).ok())
}

fn parse_hex_pair(high: u8, low: u8) -> u8 {
    match (hex_digit(high), hex_digit(low)) {
        (Some(high), Some(low)) => (high << 4) | low,
        (Some(high), None) => high,
        (None, _) => 0,
    }
}
