// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Encoding and decoding of characteristic buffers.
//!
//! Every characteristic has a fixed byte layout. The functions here convert
//! between those buffers and the values exposed to callers. They are pure and
//! synchronous.
//!
//! | Characteristic | Layout | Value |
//! |----------------|--------|-------|
//! | Power | 1 byte, `0` or `1` | `bool` |
//! | Brightness | 1 byte, 1-254 | `f64` in [0.0, 1.0] |
//! | Temperature | `u16` LE, 153-454 mireds | `f64` in [0.0, 1.0] |
//! | Color | two `u16` LE, x then y, scaled by 65535 | [`XyColor`](crate::types::XyColor) |
//! | Model | ASCII string | `String` |
//!
//! Encoders never fail: out-of-range input is clamped. Decoders reject
//! buffers whose length does not match the characteristic.
//!
//! # Examples
//!
//! ```
//! use bluelamp_lib::codec;
//!
//! assert_eq!(codec::encode_brightness(0.5), [128]);
//! assert_eq!(codec::encode_brightness(0.0), [1]);
//! assert_eq!(codec::encode_temperature(1.0), [0xC6, 0x01]);
//!
//! let on = codec::decode_power(&[1]).unwrap();
//! assert!(on);
//! assert!(codec::decode_power(&[1, 0]).is_err());
//! ```

mod brightness;
mod color;
mod model;
mod power;
mod temperature;

pub use brightness::{decode_brightness, encode_brightness};
pub use color::{decode_xy, encode_xy};
pub use model::decode_model;
pub use power::{decode_power, encode_power};
pub use temperature::{decode_mirek, decode_temperature, encode_mirek, encode_temperature};

use crate::characteristic::Characteristic;
use crate::error::DecodeError;

/// Checks that `buf` has exactly the fixed length of `characteristic` and
/// returns it as an array.
fn fixed<const N: usize>(
    characteristic: Characteristic,
    buf: &[u8],
) -> Result<[u8; N], DecodeError> {
    <[u8; N]>::try_from(buf).map_err(|_| DecodeError::InvalidLength {
        characteristic,
        expected: N,
        actual: buf.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_accepts_exact_length() {
        assert_eq!(fixed::<2>(Characteristic::Temperature, &[1, 2]), Ok([1, 2]));
    }

    #[test]
    fn fixed_rejects_other_lengths() {
        for buf in [&[][..], &[1][..], &[1, 2, 3][..]] {
            assert_eq!(
                fixed::<2>(Characteristic::Temperature, buf),
                Err(DecodeError::InvalidLength {
                    characteristic: Characteristic::Temperature,
                    expected: 2,
                    actual: buf.len(),
                })
            );
        }
    }

    #[test]
    fn fixed_lengths_match_characteristics() {
        for c in Characteristic::ALL {
            let Some(len) = c.expected_len() else {
                continue;
            };
            let buf = vec![0u8; len];
            let decoded = match c {
                Characteristic::Power => decode_power(&buf).map(|_| ()),
                Characteristic::Brightness => decode_brightness(&buf).map(|_| ()),
                Characteristic::Temperature => decode_temperature(&buf).map(|_| ()),
                Characteristic::Color => decode_xy(&buf).map(|_| ()),
                Characteristic::Model => unreachable!(),
            };
            assert!(decoded.is_ok(), "{c} rejected a {len}-byte buffer");
        }
    }
}
