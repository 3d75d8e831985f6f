// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::characteristic::Characteristic;
use crate::error::DecodeError;

/// Lowest raw brightness. 0 is refused by the lamp.
const RAW_MIN: f64 = 1.0;

/// Highest raw brightness accepted by the lamp.
const RAW_MAX: f64 = 254.0;

/// Encodes a brightness in [0.0, 1.0] as `round(v * 255)` clamped to 1-254,
/// with halves rounded to even.
///
/// Values outside the range (and `NaN`) are clamped, never rejected.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn encode_brightness(brightness: f64) -> [u8; 1] {
    // max/min rather than clamp so that NaN lands on RAW_MIN
    let raw = (brightness * 255.0).round_ties_even().max(RAW_MIN).min(RAW_MAX);
    [raw as u8]
}

/// Decodes a brightness byte as `raw / 255`.
///
/// # Errors
///
/// Returns `DecodeError::InvalidLength` unless the buffer is 1 byte.
pub fn decode_brightness(buf: &[u8]) -> Result<f64, DecodeError> {
    let [raw] = super::fixed(Characteristic::Brightness, buf)?;
    Ok(f64::from(raw) / 255.0)
}
