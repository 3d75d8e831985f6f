// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::DecodeError;

/// Decodes the model number string.
///
/// Trailing NUL padding is dropped.
///
/// # Errors
///
/// Returns `DecodeError::InvalidModel` if the bytes are not ASCII.
pub fn decode_model(buf: &[u8]) -> Result<String, DecodeError> {
    let end = buf.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    let trimmed = &buf[..end];
    if !trimmed.is_ascii() {
        return Err(DecodeError::InvalidModel(
            String::from_utf8_lossy(trimmed).into_owned(),
        ));
    }
    Ok(trimmed.iter().map(|&b| char::from(b)).collect())
}
