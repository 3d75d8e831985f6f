// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::characteristic::Characteristic;
use crate::error::DecodeError;
use crate::types::Mirek;

/// Encodes a normalized color temperature (0.0 coolest, 1.0 warmest).
///
/// The raw value is `min(round(max(v, 0) * 301) + 153, 454)`, sent as a
/// little-endian `u16`, with halves rounded to even. Only the lower bound of
/// the input and the upper bound of the raw value are enforced.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn encode_temperature(temperature: f64) -> [u8; 2] {
    let scaled = (temperature.max(0.0) * f64::from(Mirek::SPAN)).round_ties_even();
    let raw = (scaled + f64::from(Mirek::MIN)).min(f64::from(Mirek::MAX));
    (raw as u16).to_le_bytes()
}

/// Encodes a typed color temperature.
#[must_use]
pub fn encode_mirek(mirek: Mirek) -> [u8; 2] {
    mirek.value().to_le_bytes()
}

/// Decodes a temperature buffer as a typed value, clamping raw values outside
/// 153-454.
///
/// # Errors
///
/// Returns `DecodeError::InvalidLength` unless the buffer is 2 bytes.
pub fn decode_mirek(buf: &[u8]) -> Result<Mirek, DecodeError> {
    let raw = u16::from_le_bytes(super::fixed(Characteristic::Temperature, buf)?);
    Ok(Mirek::clamped(raw))
}

/// Decodes a temperature buffer as `(raw - 153) / 301`.
///
/// Raw values outside 153-454 decode outside [0.0, 1.0].
///
/// # Errors
///
/// Returns `DecodeError::InvalidLength` unless the buffer is 2 bytes.
pub fn decode_temperature(buf: &[u8]) -> Result<f64, DecodeError> {
    let raw = u16::from_le_bytes(super::fixed(Characteristic::Temperature, buf)?);
    Ok((f64::from(raw) - f64::from(Mirek::MIN)) / f64::from(Mirek::SPAN))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(buf: [u8; 2]) -> u16 {
        u16::from_le_bytes(buf)
    }

    #[test]
    fn encode_bounds() {
        assert_eq!(encode_temperature(0.0), [0x99, 0x00]);
        assert_eq!(encode_temperature(1.0), [0xC6, 0x01]);
    }

    #[test]
    fn encode_clamps_low_input() {
        assert_eq!(raw(encode_temperature(-0.5)), 153);
        assert_eq!(raw(encode_temperature(f64::NAN)), 153);
    }

    #[test]
    fn encode_clamps_high_raw() {
        assert_eq!(raw(encode_temperature(1.5)), 454);
        assert_eq!(raw(encode_temperature(f64::INFINITY)), 454);
    }

    #[test]
    fn encode_midpoint_rounds_half_to_even() {
        // 0.5 * 301 = 150.5
        assert_eq!(raw(encode_temperature(0.5)), 303);
        // 1.5 / 301 * 301 = 1.5, rounds up to the even 2
        assert_eq!(raw(encode_temperature(1.5 / 301.0)), 155);
    }

    #[test]
    fn encode_typed() {
        assert_eq!(encode_mirek(Mirek::NEUTRAL), [250, 0]);
        assert_eq!(encode_mirek(Mirek::WARMEST), [0xC6, 0x01]);
    }

    #[test]
    fn decode() {
        assert!(decode_temperature(&[0x99, 0x00]).unwrap().abs() < f64::EPSILON);
        assert!((decode_temperature(&[0xC6, 0x01]).unwrap() - 1.0).abs() < f64::EPSILON);
        assert!(decode_temperature(&[0, 0]).unwrap() < 0.0);
        assert!(decode_temperature(&[0x99]).is_err());
    }

    #[test]
    fn decode_typed() {
        assert_eq!(decode_mirek(&[250, 0]).unwrap(), Mirek::NEUTRAL);
        assert_eq!(decode_mirek(&[0, 0]).unwrap(), Mirek::COOLEST);
        assert_eq!(decode_mirek(&[0xFF, 0xFF]).unwrap(), Mirek::WARMEST);
        assert!(decode_mirek(&[250]).is_err());
    }

    #[test]
    fn roundtrip_every_mirek() {
        for m in Mirek::MIN..=Mirek::MAX {
            let normalized = f64::from(m - Mirek::MIN) / f64::from(Mirek::SPAN);
            let decoded = decode_temperature(&encode_temperature(normalized)).unwrap();
            let back = decoded * f64::from(Mirek::SPAN) + f64::from(Mirek::MIN);
            assert!((back - f64::from(m)).abs() <= 1.0, "mirek {m} came back as {back}");
            assert_eq!(raw(encode_temperature(decoded)), m);
        }
    }
}
