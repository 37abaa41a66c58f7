//! Color representation and hex/rgb conversions

use crate::error::ColorError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// 3- or 6-digit hex, `#` optional, any case.
static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("Invalid hex color regex")
});

/// An opaque sRGB color with 8-bit channels.
///
/// The canonical text form is `#RRGGBB`, uppercase, always seven characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    /// Builds a color from integer channels, clamping each into `0..=255`.
    pub fn from_rgb_clamped(r: i32, g: i32, b: i32) -> Self {
        let clamp = |c: i32| c.clamp(0, 255) as u8;
        Self(clamp(r), clamp(g), clamp(b))
    }

    /// Builds a color from unit-interval channels, rounding to the nearest
    /// 8-bit value.
    pub fn from_unit_rgb(r: f64, g: f64, b: f64) -> Self {
        let quantize = |c: f64| (c * 255.0).round().clamp(0.0, 255.0) as u8;
        Self(quantize(r), quantize(g), quantize(b))
    }

    /// Parses `#RGB`, `#RRGGBB`, `RGB` or `RRGGBB` (case-insensitive).
    ///
    /// The leading `#` is optional here. Shorthand expands by doubling each
    /// nibble, so `#F80` is `#FF8800`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let caps = HEX_PATTERN
            .captures(hex)
            .ok_or_else(|| ColorError::InvalidFormat(hex.to_string()))?;
        let digits = &caps[1];
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorError::InvalidFormat(hex.to_string()))?;

        let color = if digits.len() == 3 {
            let expand = |nibble: u32| ((nibble & 0xF) * 0x11) as u8;
            Self(expand(value >> 8), expand(value >> 4), expand(value))
        } else {
            Self(
                ((value >> 16) & 0xFF) as u8,
                ((value >> 8) & 0xFF) as u8,
                (value & 0xFF) as u8,
            )
        };
        Ok(color)
    }

    /// Returns true when `hex` is accepted by [`Color::from_hex`] and carries
    /// the leading `#`, which is what the manual hex field requires.
    pub fn is_valid_hex(hex: &str) -> bool {
        hex.starts_with('#') && HEX_PATTERN.is_match(hex)
    }

    pub fn r(&self) -> u8 {
        self.0
    }

    pub fn g(&self) -> u8 {
        self.1
    }

    pub fn b(&self) -> u8 {
        self.2
    }

    /// Channels scaled into `0.0..=1.0`.
    pub fn to_unit_rgb(&self) -> (f64, f64, f64) {
        (
            self.0 as f64 / 255.0,
            self.1 as f64 / 255.0,
            self.2 as f64 / 255.0,
        )
    }

    /// Canonical `#RRGGBB` form.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }

    /// The `rgb(r, g, b)` form shown next to each swatch.
    pub fn rgb_string(&self) -> String {
        format!("rgb({}, {}, {})", self.0, self.1, self.2)
    }

    // Common color constants
    pub const BLACK: Color = Color(0, 0, 0);
    pub const WHITE: Color = Color(255, 255, 255);
    pub const RED: Color = Color(255, 0, 0);
    pub const GREEN: Color = Color(0, 255, 0);
    pub const BLUE: Color = Color(0, 0, 255);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Free-function form of [`Color::from_hex`].
pub fn hex_to_rgb(hex: &str) -> Result<Color, ColorError> {
    Color::from_hex(hex)
}

/// Free-function form of [`Color::to_hex`].
pub fn rgb_to_hex(color: Color) -> String {
    color.to_hex()
}

#[cfg(test)]
#[path = "tests/color_tests.rs"]
mod tests;
