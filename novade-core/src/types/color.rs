//! Color representation for compositor drawing.
//!
//! [`Color`] stores RGBA components as `f32` in `[0.0, 1.0]`. It parses from
//! and serializes to hex strings (`#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`) so it
//! can appear directly in TOML configuration, and converts to the packed
//! `0xAARRGGBB` pixels used by framebuffers.
//!
//! ```
//! use novade_core::types::Color;
//!
//! let focus_blue = Color::from_hex("#0080ff").unwrap();
//! assert_eq!(focus_blue.to_rgba8(), (0, 128, 255, 255));
//! assert_eq!(focus_blue.to_argb_u32(), 0xFF0080FF);
//! ```

use serde::de::Error as SerdeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for color parsing operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Missing the leading '#' or containing non-ASCII characters.
    #[error("Invalid hex color string format: '{0}'. Expected #RGB, #RGBA, #RRGGBB, or #RRGGBBAA.")]
    InvalidHexFormat(String),

    /// A character after the leading '#' is not a hexadecimal digit.
    #[error("Invalid hex digit '{digit}' in '{input_str}'")]
    InvalidHexDigit { input_str: String, digit: char },

    /// Wrong number of characters after the leading '#'.
    #[error("Invalid hex color string length: '{0}'. Expected 3, 4, 6, or 8 characters after '#'.")]
    InvalidHexLength(String),
}

/// Represents a color in RGBA format with `f32` components in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// `0.0` is fully transparent, `1.0` is fully opaque.
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
    pub const TRANSPARENT: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

    /// Creates a new `Color`, clamping each component to `[0.0, 1.0]`.
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Creates a new opaque `Color`.
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Color::new(r, g, b, 1.0)
    }

    /// Creates a new opaque `Color` from 8-bit components.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Color::from_rgba8(r, g, b, 255)
    }

    /// Creates a new `Color` from 8-bit RGBA components.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    }

    /// Creates a new `Color` from a hexadecimal string.
    ///
    /// Supported: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`, case-insensitive.
    pub fn from_hex(hex_str: &str) -> Result<Self, ColorParseError> {
        let input = match hex_str.strip_prefix('#') {
            Some(rest) if rest.is_ascii() => rest,
            _ => return Err(ColorParseError::InvalidHexFormat(hex_str.to_string())),
        };

        // Every character must be a hex digit; signs and whitespace are rejected.
        let nibbles = input
            .chars()
            .map(|c| {
                c.to_digit(16).map(|d| d as u8).ok_or_else(|| ColorParseError::InvalidHexDigit {
                    input_str: hex_str.to_string(),
                    digit: c,
                })
            })
            .collect::<Result<Vec<u8>, _>>()?;

        let byte = |i: usize| (nibbles[i] << 4) | nibbles[i + 1];
        // Expands a single hex digit `f` to `ff`.
        let short = |i: usize| (nibbles[i] << 4) | nibbles[i];

        match nibbles.len() {
            3 => Ok(Color::from_rgb8(short(0), short(1), short(2))),
            4 => Ok(Color::from_rgba8(short(0), short(1), short(2), short(3))),
            6 => Ok(Color::from_rgb8(byte(0), byte(2), byte(4))),
            8 => Ok(Color::from_rgba8(byte(0), byte(2), byte(4), byte(6))),
            _ => Err(ColorParseError::InvalidHexLength(hex_str.to_string())),
        }
    }

    /// Converts to 8-bit `(r, g, b, a)`.
    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            (self.a * 255.0).round() as u8,
        )
    }

    /// Packs the color into an ARGB8888 pixel (`0xAARRGGBB`).
    pub fn to_argb_u32(&self) -> u32 {
        let (r, g, b, a) = self.to_rgba8();
        u32::from_be_bytes([a, r, g, b])
    }

    /// Formats as `#rrggbb`, ignoring alpha.
    pub fn to_hex(&self) -> String {
        let (r, g, b, _) = self.to_rgba8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Formats as `#rrggbbaa`.
    pub fn to_hex_with_alpha(&self) -> String {
        let (r, g, b, a) = self.to_rgba8();
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex_with_alpha())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(SerdeError::custom)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s.trim())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            write!(f, "{}", self.to_hex())
        } else {
            write!(f, "{}", self.to_hex_with_alpha())
        }
    }
}
