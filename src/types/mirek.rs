// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color temperature in mireds.

use std::fmt;

use crate::error::ValueError;

/// Color temperature in mireds (153-454).
///
/// Lower values are cooler (bluer), higher values warmer.
///
/// - 153 (~6500K) - Cool daylight
/// - 250 (4000K) - Neutral white
/// - 454 (~2200K) - Warm white
///
/// # Examples
///
/// ```
/// use bluelamp_lib::types::Mirek;
///
/// let ct = Mirek::new(250).unwrap();
/// assert_eq!(ct.value(), 250);
/// assert_eq!(ct.to_kelvin(), 4000);
///
/// assert!(Mirek::new(500).is_err());
/// assert_eq!(Mirek::clamped(500), Mirek::WARMEST);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u16")]
pub struct Mirek(u16);

impl Mirek {
    /// Minimum value accepted by the lamp.
    pub const MIN: u16 = 153;

    /// Maximum value accepted by the lamp.
    pub const MAX: u16 = 454;

    /// Width of the range, used for normalization.
    pub const SPAN: u16 = Self::MAX - Self::MIN;

    /// Coolest white.
    pub const COOLEST: Self = Self(Self::MIN);

    /// Neutral white (4000K).
    pub const NEUTRAL: Self = Self(250);

    /// Warmest white.
    pub const WARMEST: Self = Self(Self::MAX);

    /// Creates a new color temperature.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside [153, 454].
    pub fn new(value: u16) -> Result<Self, ValueError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValueError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Creates a color temperature, clamping to the valid range.
    #[must_use]
    pub const fn clamped(value: u16) -> Self {
        if value < Self::MIN {
            Self(Self::MIN)
        } else if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    /// Returns the value in mireds.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// Returns the position in the range as a float, 0.0 coolest, 1.0 warmest.
    #[must_use]
    pub fn to_normalized(&self) -> f64 {
        f64::from(self.0 - Self::MIN) / f64::from(Self::SPAN)
    }

    /// Returns the approximate color temperature in Kelvin.
    #[must_use]
    pub fn to_kelvin(&self) -> u16 {
        #[allow(clippy::cast_possible_truncation)]
        let kelvin = (1_000_000 / u32::from(self.0)) as u16;
        kelvin
    }

    /// Creates a color temperature from Kelvin.
    ///
    /// # Errors
    ///
    /// Returns error if the resulting mired value is outside the valid range.
    pub fn from_kelvin(kelvin: u16) -> Result<Self, ValueError> {
        if kelvin == 0 {
            return Err(ValueError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: 0,
            });
        }
        let mireds = 1_000_000 / u32::from(kelvin);
        Self::new(u16::try_from(mireds).unwrap_or(u16::MAX))
    }
}

impl Default for Mirek {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for Mirek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mired", self.0)
    }
}

impl TryFrom<u16> for Mirek {
    type Error = ValueError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
