// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::characteristic::Characteristic;
use crate::error::DecodeError;

/// Encodes the power state: `[1]` for on, `[0]` for off.
#[must_use]
pub fn encode_power(on: bool) -> [u8; 1] {
    [u8::from(on)]
}

/// Decodes the power state. Any non-zero byte means on.
///
/// # Errors
///
/// Returns `DecodeError::InvalidLength` unless the buffer is 1 byte.
pub fn decode_power(buf: &[u8]) -> Result<bool, DecodeError> {
    let [state] = super::fixed(Characteristic::Power, buf)?;
    Ok(state != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode() {
        assert_eq!(encode_power(true), [1]);
        assert_eq!(encode_power(false), [0]);
    }

    #[test]
    fn decode() {
        assert!(decode_power(&[1]).unwrap());
        assert!(!decode_power(&[0]).unwrap());
        assert!(decode_power(&[0xFF]).unwrap());
    }

    #[test]
    fn decode_wrong_length() {
        assert!(decode_power(&[]).is_err());
        assert!(decode_power(&[1, 1]).is_err());
    }
}
