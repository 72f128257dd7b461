/// Color values used by the screenshot configuration
///
/// Colors are stored as 8-bit RGBA (components in 0..=255) and travel
/// through JSON as `#RRGGBB` or `#RRGGBBAA` hex strings.

use std::fmt;
use std::str::FromStr;

use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// An 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub Rgba<u8>);

impl Color {
    /// Mid gray, the default canvas background
    pub const GRAY: Color = Color(Rgba([128, 128, 128, 255]));

    /// Opaque white, the default caption color
    pub const WHITE: Color = Color(Rgba([255, 255, 255, 255]));

    /// Create an opaque color from 8-bit components
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Color(Rgba([r, g, b, 255]))
    }

    /// Create a color from 8-bit components including alpha
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(Rgba([r, g, b, a]))
    }

    /// Create a color from normalized components in 0.0..=1.0
    ///
    /// Out-of-range values are clamped.
    pub fn from_unit(r: f32, g: f32, b: f32, a: f32) -> Self {
        let to_byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color(Rgba([to_byte(r), to_byte(g), to_byte(b), to_byte(a)]))
    }

    /// The underlying pixel value
    pub fn rgba_pixel(&self) -> Rgba<u8> {
        self.0
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(Error::Config(format!("invalid color: {s}")));
        }

        let byte = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| Error::Config(format!("invalid color: {s}")))
        };

        let alpha = if hex.len() == 8 { byte(6)? } else { 255 };
        Ok(Color::rgba(byte(0)?, byte(2)?, byte(4)?, alpha))
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0 .0;
        if a == 255 {
            write!(f, "#{r:02X}{g:02X}{b:02X}")
        } else {
            write!(f, "#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}
