// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transports carrying characteristic reads and writes to the lamp.
//!
//! The library does not talk to a Bluetooth stack directly. A [`Transport`]
//! reads and writes raw buffers by [`Characteristic`]; the session does the
//! encoding on top of it.
//!
//! # Implementations
//!
//! - [`MemoryTransport`]: an in-memory peripheral, for tests and simulations
//! - `BtleplugTransport`: a connected `btleplug` peripheral (requires the
//!   `btleplug` feature)

#[cfg(feature = "btleplug")]
mod ble;
mod memory;

#[cfg(feature = "btleplug")]
pub use ble::BtleplugTransport;
pub use memory::{MemoryTransport, WriteRecord};

use std::sync::Arc;

use crate::characteristic::Characteristic;
use crate::error::TransportError;

/// How a write is delivered to the peripheral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WriteMode {
    /// Wait for the peripheral to acknowledge the write.
    #[default]
    WithResponse,
    /// Fire and forget.
    WithoutResponse,
}

impl WriteMode {
    /// Returns whether the write waits for acknowledgment.
    #[must_use]
    pub const fn waits_for_ack(&self) -> bool {
        matches!(self, Self::WithResponse)
    }
}

impl From<bool> for WriteMode {
    fn from(wait_for_ack: bool) -> Self {
        if wait_for_ack {
            Self::WithResponse
        } else {
            Self::WithoutResponse
        }
    }
}

/// Raw access to the characteristics of one connected lamp.
///
/// Errors are returned to the caller unchanged; the session adds no retry or
/// timeout of its own.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Reads the current value of a characteristic.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the read fails.
    async fn read(&self, characteristic: Characteristic) -> Result<Vec<u8>, TransportError>;

    /// Writes a value to a characteristic.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the write fails.
    async fn write(
        &self,
        characteristic: Characteristic,
        data: &[u8],
        mode: WriteMode,
    ) -> Result<(), TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    async fn read(&self, characteristic: Characteristic) -> Result<Vec<u8>, TransportError> {
        (**self).read(characteristic).await
    }

    async fn write(
        &self,
        characteristic: Characteristic,
        data: &[u8],
        mode: WriteMode,
    ) -> Result<(), TransportError> {
        (**self).write(characteristic, data, mode).await
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn read(&self, characteristic: Characteristic) -> Result<Vec<u8>, TransportError> {
        (**self).read(characteristic).await
    }

    async fn write(
        &self,
        characteristic: Characteristic,
        data: &[u8],
        mode: WriteMode,
    ) -> Result<(), TransportError> {
        (**self).write(characteristic, data, mode).await
    }
}
