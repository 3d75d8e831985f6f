// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! GATT characteristics exposed by the lamp.
//!
//! The set is fixed: the lamp firmware publishes one standard characteristic
//! (the model number string) and four vendor characteristics for light
//! control.

use std::fmt;

use uuid::Uuid;

/// A GATT characteristic of the lamp.
///
/// # Examples
///
/// ```
/// use bluelamp_lib::Characteristic;
///
/// let c = Characteristic::Brightness;
/// assert_eq!(c.expected_len(), Some(1));
/// assert_eq!(
///     c.uuid().to_string(),
///     "932c32bd-0003-47a2-835a-a8d455b859dd"
/// );
/// assert_eq!(Characteristic::from_uuid(c.uuid()), Some(c));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Characteristic {
    /// Model number string (Device Information service).
    Model,
    /// Power state, 1 byte.
    Power,
    /// Brightness level, 1 byte.
    Brightness,
    /// Color temperature in mireds, 2 bytes little-endian.
    Temperature,
    /// XY chromaticity, two little-endian `u16` values.
    Color,
}

impl Characteristic {
    /// Every characteristic, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Model,
        Self::Power,
        Self::Brightness,
        Self::Temperature,
        Self::Color,
    ];

    /// Returns the GATT UUID of the characteristic.
    #[must_use]
    pub const fn uuid(&self) -> Uuid {
        match self {
            Self::Model => Uuid::from_u128(0x0000_2a24_0000_1000_8000_0080_5f9b_34fb),
            Self::Power => Uuid::from_u128(0x932c_32bd_0002_47a2_835a_a8d4_55b8_59dd),
            Self::Brightness => Uuid::from_u128(0x932c_32bd_0003_47a2_835a_a8d4_55b8_59dd),
            Self::Temperature => Uuid::from_u128(0x932c_32bd_0004_47a2_835a_a8d4_55b8_59dd),
            Self::Color => Uuid::from_u128(0x932c_32bd_0005_47a2_835a_a8d4_55b8_59dd),
        }
    }

    /// Finds the characteristic with the given UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.uuid() == uuid)
    }

    /// Returns the fixed buffer length in bytes.
    ///
    /// The model string has no fixed length and returns `None`.
    #[must_use]
    pub const fn expected_len(&self) -> Option<usize> {
        match self {
            Self::Model => None,
            Self::Power | Self::Brightness => Some(1),
            Self::Temperature => Some(2),
            Self::Color => Some(4),
        }
    }

    /// Returns a short lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Power => "power",
            Self::Brightness => "brightness",
            Self::Temperature => "temperature",
            Self::Color => "color",
        }
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
