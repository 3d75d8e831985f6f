// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::characteristic::Characteristic;
use crate::error::DecodeError;
use crate::types::XyColor;

const SCALE: f64 = 65535.0;

/// Encodes a chromaticity as two little-endian `u16`, x then y, each
/// `round(v * 65535)`.
///
/// No clamping is done; keep coordinates in [0.0, 1.0] (the color converter
/// always does). Outside that range the conversion saturates at 0 or 65535.
#[must_use]
pub fn encode_xy(color: XyColor) -> [u8; 4] {
    let [x0, x1] = scale(color.x()).to_le_bytes();
    let [y0, y1] = scale(color.y()).to_le_bytes();
    [x0, x1, y0, y1]
}

/// Decodes a color buffer into a chromaticity in [0.0, 1.0].
///
/// # Errors
///
/// Returns `DecodeError::InvalidLength` unless the buffer is 4 bytes.
pub fn decode_xy(buf: &[u8]) -> Result<XyColor, DecodeError> {
    let [x0, x1, y0, y1] = super::fixed(Characteristic::Color, buf)?;
    let x = u16::from_le_bytes([x0, x1]);
    let y = u16::from_le_bytes([y0, y1]);
    Ok(XyColor::new(f64::from(x) / SCALE, f64::from(y) / SCALE))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale(v: f64) -> u16 {
    (v * SCALE).round() as u16
}
