//! 8-bit RGB color type with hex parsing and the darken adjustment.
//!
//! Colors travel as hex strings (`"#rrggbb"`) at every boundary: JSON
//! configs, the control surface and the parameter schema. Internally they are
//! held as an explicit [`Rgb`] triple so that the renderer never re-parses.

use crate::error::AvatarError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// sRGB color with 8-bit channels.
///
/// Serializes as a lowercase hex string `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a packed `0xRRGGBB` value. The top byte is ignored.
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    /// Parses `"#rrggbb"`, `"rrggbb"` or the short form `"#rgb"` (case insensitive).
    ///
    /// Returns `AvatarError::InvalidColor` for anything else.
    pub fn from_hex(hex: &str) -> Result<Rgb, AvatarError> {
        let digits = hex.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if !digits.is_ascii() {
            return Err(AvatarError::InvalidColor(format!(
                "non-ascii color string: {hex:?}"
            )));
        }
        match digits.len() {
            6 => Ok(Rgb {
                r: hex_channel(&digits[0..2], "red")?,
                g: hex_channel(&digits[2..4], "green")?,
                b: hex_channel(&digits[4..6], "blue")?,
            }),
            3 => {
                let r = hex_channel(&digits[0..1], "red")?;
                let g = hex_channel(&digits[1..2], "green")?;
                let b = hex_channel(&digits[2..3], "blue")?;
                Ok(Rgb {
                    r: r * 17,
                    g: g * 17,
                    b: b * 17,
                })
            }
            n => Err(AvatarError::InvalidColor(format!(
                "expected 3 or 6 hex digits, got {n}"
            ))),
        }
    }

    /// Formats the color as lowercase `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Darkens every channel by `round(2.55 * percent)`.
    ///
    /// Rounding is half-up (`floor(x + 0.5)`), and each channel result is
    /// saturated: anything at or above 255 becomes 255, anything below 1
    /// becomes 0. A negative `percent` therefore lightens.
    pub fn darken(self, percent: f64) -> Rgb {
        // Past ±255 every channel saturates anyway.
        let amount = (2.55 * percent + 0.5).floor().clamp(-255.0, 255.0) as i32;
        let channel = |c: u8| -> u8 {
            match i32::from(c) - amount {
                v if v >= 255 => 255,
                v if v < 1 => 0,
                v => v as u8,
            }
        };
        Rgb {
            r: channel(self.r),
            g: channel(self.g),
            b: channel(self.b),
        }
    }
}

/// Hex-in, hex-out form of [`Rgb::darken`].
pub fn darken_hex(hex: &str, percent: f64) -> Result<String, AvatarError> {
    Ok(Rgb::from_hex(hex)?.darken(percent).to_hex())
}

fn hex_channel(digits: &str, name: &str) -> Result<u8, AvatarError> {
    u8::from_str_radix(digits, 16)
        .map_err(|e| AvatarError::InvalidColor(format!("invalid {name} component: {e}")))
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = AvatarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
