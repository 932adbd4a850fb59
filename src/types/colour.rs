//! Colour type and parsing.
//!
//! Colours are opaque to the rasterizers: they are carried from the caller
//! to the surface untouched. Only [`Colour::shade`] interprets the channels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RasterError, Result};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Named colours accepted in scene files and on the command line.
const NAMED: &[(&str, Colour)] = &[
    ("black", Colour::rgb(0, 0, 0)),
    ("white", Colour::rgb(255, 255, 255)),
    ("red", Colour::rgb(255, 0, 0)),
    ("green", Colour::rgb(0, 128, 0)),
    ("darkgreen", Colour::rgb(0, 100, 0)),
    ("blue", Colour::rgb(0, 0, 255)),
    ("lightblue", Colour::rgb(173, 216, 230)),
    ("steelblue", Colour::rgb(70, 130, 180)),
    ("yellow", Colour::rgb(255, 255, 0)),
    ("orange", Colour::rgb(255, 165, 0)),
    ("pink", Colour::rgb(255, 192, 203)),
    ("brown", Colour::rgb(165, 42, 42)),
    ("saddlebrown", Colour::rgb(139, 69, 19)),
    ("darkred", Colour::rgb(139, 0, 0)),
    ("gray", Colour::rgb(128, 128, 128)),
    ("grey", Colour::rgb(128, 128, 128)),
    ("darkgray", Colour::rgb(169, 169, 169)),
    ("darkgrey", Colour::rgb(169, 169, 169)),
    ("magenta", Colour::rgb(255, 0, 255)),
    ("transparent", Colour::new(0, 0, 0, 0)),
];

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Look up a colour by name (case-insensitive).
    pub fn named(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        NAMED
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, colour)| colour)
    }

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RGBA` (4 digits, expanded to 8)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid_hex(s));
        }

        let nibble = |i: usize| parse_hex_digit(&hex[i..i + 1]);
        let byte = |i: usize| parse_hex_byte(&hex[i..i + 2]);

        match hex.len() {
            3 => {
                let (r, g, b) = (nibble(0)?, nibble(1)?, nibble(2)?);
                Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            4 => {
                let (r, g, b, a) = (nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?);
                Ok(Self::new(r << 4 | r, g << 4 | g, b << 4 | b, a << 4 | a))
            }
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(invalid_hex(s)),
        }
    }

    /// Convert to RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Scale the colour's HSL lightness by `intensity`.
    ///
    /// `1.0` leaves the colour unchanged, `0.0` yields black. Values above
    /// `1.0` brighten toward white. Alpha is preserved.
    pub fn shade(self, intensity: f32) -> Self {
        use palette::{Hsl, IntoColor, Srgb};

        let rgb: Srgb<f32> = Srgb::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        );

        let mut hsl: Hsl = rgb.into_color();

        let intensity = intensity.max(0.0);
        if intensity <= 1.0 {
            hsl.lightness *= intensity;
        } else {
            hsl.lightness += (1.0 - hsl.lightness) * (intensity - 1.0).min(1.0);
        }
        hsl.lightness = hsl.lightness.clamp(0.0, 1.0);

        let out: Srgb<f32> = hsl.into_color();
        Self::new(
            (out.red * 255.0).round() as u8,
            (out.green * 255.0).round() as u8,
            (out.blue * 255.0).round() as u8,
            self.a,
        )
    }
}

impl FromStr for Colour {
    type Err = RasterError;

    /// Accepts either a hex form (`#RGB`, `#RRGGBB`, ...) or a colour name.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.starts_with('#') {
            return Self::from_hex(s);
        }
        Self::named(s).ok_or_else(|| RasterError::Parse {
            message: format!("Unknown colour: {}", s),
            help: Some("Use a hex value like #8B4513 or a name like saddlebrown".to_string()),
        })
    }
}

impl TryFrom<String> for Colour {
    type Error = RasterError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Colour> for String {
    fn from(colour: Colour) -> Self {
        colour.to_string()
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

fn invalid_hex(s: &str) -> RasterError {
    RasterError::Parse {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
    }
}

fn parse_hex_digit(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| RasterError::Parse {
        message: format!("Invalid hex digit: {}", s),
        help: None,
    })
}

fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| RasterError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
