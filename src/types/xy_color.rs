// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CIE 1931 chromaticity coordinates.

use std::fmt;

/// A point in the CIE xy chromaticity diagram.
///
/// This is the color format the lamp stores in its color characteristic, and
/// the interchange format between the raw buffer and RGB or hex colors.
/// Both coordinates are conceptually in [0.0, 1.0]; no range check is made
/// here; the gamut decides what the lamp can render.
///
/// # Examples
///
/// ```
/// use bluelamp_lib::types::XyColor;
///
/// let white = XyColor::new(0.3127, 0.3290);
/// assert!((white.x() - 0.3127).abs() < f64::EPSILON);
/// assert!((white.y() - 0.3290).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct XyColor {
    x: f64,
    y: f64,
}

impl XyColor {
    /// D65 white point.
    pub const D65: Self = Self::new(0.3127, 0.3290);

    /// Creates a new chromaticity point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x coordinate.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Squared euclidean distance to another point.
    #[must_use]
    pub fn distance_squared(&self, other: &Self) -> f64 {
        (self.x - other.x).powi(2) + (self.y - other.y).powi(2)
    }
}

impl fmt::Display for XyColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "xy({:.4}, {:.4})", self.x, self.y)
    }
}

impl From<(f64, f64)> for XyColor {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<XyColor> for (f64, f64) {
    fn from(color: XyColor) -> Self {
        (color.x, color.y)
    }
}
