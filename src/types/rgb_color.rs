// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB color type with hex parsing and formatting.
//!
//! Channels are gamma-encoded sRGB floats in [0.0, 1.0]. Hex strings quantize
//! each channel to a byte with `round(v * 255)`.
//!
//! # Device Methods
//!
//! Use [`RgbColor`] with these [`Lamp`](crate::Lamp) methods:
//! - [`set_color_rgb()`](crate::Lamp::set_color_rgb) - Set color using RGB values
//! - [`get_color_rgb()`](crate::Lamp::get_color_rgb) - Read the current color as RGB

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// RGB color with floating point channels (0.0-1.0).
///
/// # Examples
///
/// ```
/// use bluelamp_lib::types::RgbColor;
///
/// let orange = RgbColor::new(1.0, 0.5, 0.0);
/// assert_eq!(orange.to_hex(), "#FF8000");
///
/// // Parse from hex string
/// let red = RgbColor::from_hex("#FF0000").unwrap();
/// assert_eq!(red.to_bytes(), (255, 0, 0));
///
/// // Channels are clamped on construction
/// let c = RgbColor::new(1.5, -0.2, 0.5);
/// assert_eq!(c.to_bytes(), (255, 0, 128));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RgbColor {
    red: f64,
    green: f64,
    blue: f64,
}

impl RgbColor {
    /// Creates a new RGB color, clamping each channel to [0.0, 1.0].
    ///
    /// `NaN` channels become 0.0.
    #[must_use]
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red: unit(red),
            green: unit(green),
            blue: unit(blue),
        }
    }

    /// Creates a color from 8-bit channels.
    #[must_use]
    pub fn from_bytes(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: f64::from(red) / 255.0,
            green: f64::from(green) / 255.0,
            blue: f64::from(blue) / 255.0,
        }
    }

    /// Parses an RGB color from a hex string.
    ///
    /// Accepts formats: `#RRGGBB`, `RRGGBB`, `#RGB`, `RGB`
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidHexColor` if the hex string is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use bluelamp_lib::types::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF5733").unwrap();
    /// assert_eq!(color.to_bytes(), (255, 87, 51));
    ///
    /// // Short format
    /// let color = RgbColor::from_hex("#F00").unwrap();
    /// assert_eq!(color.to_bytes(), (255, 0, 0));
    ///
    /// assert!(RgbColor::from_hex("#GG0000").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ValueError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValueError::InvalidHexColor(hex.to_string()));
        }

        match digits.len() {
            3 => {
                let mut chars = digits.chars();
                let mut next = || {
                    chars
                        .next()
                        .ok_or_else(|| ValueError::InvalidHexColor(hex.to_string()))
                        .and_then(parse_hex_char)
                };
                let (r, g, b) = (next()?, next()?, next()?);
                Ok(Self::from_bytes(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = parse_hex_pair(&digits[0..2])?;
                let g = parse_hex_pair(&digits[2..4])?;
                let b = parse_hex_pair(&digits[4..6])?;
                Ok(Self::from_bytes(r, g, b))
            }
            _ => Err(ValueError::InvalidHexColor(hex.to_string())),
        }
    }

    /// Returns the red channel.
    #[must_use]
    pub const fn red(&self) -> f64 {
        self.red
    }

    /// Returns the green channel.
    #[must_use]
    pub const fn green(&self) -> f64 {
        self.green
    }

    /// Returns the blue channel.
    #[must_use]
    pub const fn blue(&self) -> f64 {
        self.blue
    }

    /// Quantizes the channels to bytes with `round(v * 255)`.
    #[must_use]
    pub fn to_bytes(&self) -> (u8, u8, u8) {
        (
            quantize(self.red),
            quantize(self.green),
            quantize(self.blue),
        )
    }

    /// Returns the color as an uppercase `#RRGGBB` string.
    ///
    /// # Examples
    ///
    /// ```
    /// use bluelamp_lib::types::RgbColor;
    ///
    /// assert_eq!(RgbColor::from_bytes(0, 15, 255).to_hex(), "#000FFF");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_bytes();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// Returns the largest channel value.
    #[must_use]
    pub fn max_channel(&self) -> f64 {
        self.red.max(self.green).max(self.blue)
    }

    /// Pure red.
    #[must_use]
    pub fn red_color() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Pure green.
    #[must_use]
    pub fn green_color() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// Pure blue.
    #[must_use]
    pub fn blue_color() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// White.
    #[must_use]
    pub fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// Black.
    #[must_use]
    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl Default for RgbColor {
    fn default() -> Self {
        Self::white()
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<&str> for RgbColor {
    type Error = ValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_hex(value)
    }
}

impl From<(f64, f64, f64)> for RgbColor {
    fn from((red, green, blue): (f64, f64, f64)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::from_bytes(red, green, blue)
    }
}

fn unit(value: f64) -> f64 {
    // f64::max drops NaN
    value.max(0.0).min(1.0)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn quantize(channel: f64) -> u8 {
    (channel * 255.0).round() as u8
}

fn parse_hex_char(c: char) -> Result<u8, ValueError> {
    c.to_digit(16)
        .and_then(|d| u8::try_from(d).ok())
        .ok_or_else(|| ValueError::InvalidHexColor(c.to_string()))
}

fn parse_hex_pair(s: &str) -> Result<u8, ValueError> {
    u8::from_str_radix(s, 16).map_err(|_| ValueError::InvalidHexColor(s.to_string()))
}
