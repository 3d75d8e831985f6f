// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `BlueLamp` library.
//!
//! This module provides the error hierarchy for failures across the library:
//! value validation, decoding of characteristic buffers, and transport
//! communication with the lamp.
//!
//! Out-of-range numbers passed to the setters are never errors; they are
//! clamped by the codec. Unknown lamp models are not errors either; the
//! session falls back to the default gamut.

use thiserror::Error;

use crate::characteristic::Characteristic;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// A characteristic buffer read from the lamp could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Error reported by the BLE transport.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// A hex color string could not be parsed.
    #[error("invalid hex color: {0}")]
    InvalidHexColor(String),

    /// The gamut vertices do not span a triangle.
    #[error("degenerate gamut: {0}")]
    DegenerateGamut(String),
}

/// Errors raised while decoding a raw characteristic buffer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The buffer does not have the fixed size of its characteristic.
    #[error("{characteristic} expects {expected} bytes, got {actual}")]
    InvalidLength {
        /// The characteristic the buffer was read from.
        characteristic: Characteristic,
        /// Expected buffer length in bytes.
        expected: usize,
        /// Actual buffer length in bytes.
        actual: usize,
    },

    /// The model characteristic does not hold printable ASCII.
    #[error("model string is not ASCII: {0}")]
    InvalidModel(String),
}

/// Errors reported by a [`Transport`](crate::transport::Transport).
///
/// The session never retries; these are handed back to the caller as-is.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Error from the `btleplug` stack that has no finer mapping.
    #[cfg(feature = "btleplug")]
    #[error("BLE error: {0}")]
    Ble(#[from] btleplug::Error),

    /// The peripheral is not connected.
    #[error("peripheral is not connected")]
    NotConnected,

    /// Connection to the peripheral failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// The peripheral does not expose the characteristic.
    #[error("characteristic not found: {0}")]
    CharacteristicNotFound(Characteristic),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
