// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport over a `btleplug` peripheral.

use std::collections::HashMap;

use btleplug::api::{Characteristic as GattCharacteristic, Peripheral, WriteType};

use crate::characteristic::Characteristic;
use crate::error::TransportError;

use super::{Transport, WriteMode};

/// Transport backed by a `btleplug` peripheral.
///
/// Finding the peripheral (scanning, filtering by address or name) is left to
/// the application; this type takes over once a peripheral is at hand.
///
/// # Examples
///
/// ```ignore
/// use bluelamp_lib::Lamp;
/// use bluelamp_lib::transport::BtleplugTransport;
///
/// # async fn example(peripheral: btleplug::platform::Peripheral) -> bluelamp_lib::Result<()> {
/// let transport = BtleplugTransport::connect(peripheral).await?;
/// let lamp = Lamp::builder(transport).connect().await?;
///
/// lamp.set_power(true).await?;
/// lamp.into_transport().disconnect().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct BtleplugTransport<P: Peripheral> {
    peripheral: P,
    characteristics: HashMap<Characteristic, GattCharacteristic>,
}

impl<P: Peripheral> BtleplugTransport<P> {
    /// Connects to the peripheral (unless already connected) and discovers
    /// its characteristics.
    ///
    /// Characteristics the lamp does not expose are reported later, when they
    /// are first used.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if connecting or service discovery fails.
    pub async fn connect(peripheral: P) -> Result<Self, TransportError> {
        if !peripheral.is_connected().await.map_err(from_ble)? {
            tracing::debug!(id = ?peripheral.id(), "Connecting to peripheral");
            peripheral.connect().await.map_err(from_ble)?;
        }
        peripheral.discover_services().await.map_err(from_ble)?;

        let characteristics: HashMap<_, _> = peripheral
            .characteristics()
            .into_iter()
            .filter_map(|gatt| Characteristic::from_uuid(gatt.uuid).map(|c| (c, gatt)))
            .collect();

        tracing::debug!(
            id = ?peripheral.id(),
            found = characteristics.len(),
            "Discovered lamp characteristics"
        );

        Ok(Self {
            peripheral,
            characteristics,
        })
    }

    /// Disconnects from the peripheral.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the stack reports a failure.
    pub async fn disconnect(&self) -> Result<(), TransportError> {
        tracing::debug!(id = ?self.peripheral.id(), "Disconnecting from peripheral");
        self.peripheral.disconnect().await.map_err(from_ble)
    }

    /// Returns whether the peripheral is still connected.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the stack reports a failure.
    pub async fn is_connected(&self) -> Result<bool, TransportError> {
        self.peripheral.is_connected().await.map_err(from_ble)
    }

    /// Returns the underlying peripheral.
    #[must_use]
    pub fn peripheral(&self) -> &P {
        &self.peripheral
    }

    fn gatt(&self, characteristic: Characteristic) -> Result<&GattCharacteristic, TransportError> {
        self.characteristics
            .get(&characteristic)
            .ok_or(TransportError::CharacteristicNotFound(characteristic))
    }
}

impl<P: Peripheral> Transport for BtleplugTransport<P> {
    async fn read(&self, characteristic: Characteristic) -> Result<Vec<u8>, TransportError> {
        let gatt = self.gatt(characteristic)?;
        self.peripheral.read(gatt).await.map_err(from_ble)
    }

    async fn write(
        &self,
        characteristic: Characteristic,
        data: &[u8],
        mode: WriteMode,
    ) -> Result<(), TransportError> {
        let gatt = self.gatt(characteristic)?;
        let write_type = match mode {
            WriteMode::WithResponse => WriteType::WithResponse,
            WriteMode::WithoutResponse => WriteType::WithoutResponse,
        };
        self.peripheral
            .write(gatt, data, write_type)
            .await
            .map_err(from_ble)
    }
}

/// Maps connection and timeout failures onto the matching transport errors;
/// everything else is wrapped as is.
fn from_ble(err: btleplug::Error) -> TransportError {
    match err {
        btleplug::Error::NotConnected => TransportError::NotConnected,
        btleplug::Error::TimedOut(elapsed) => {
            TransportError::Timeout(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
        }
        other => TransportError::Ble(other),
    }
}
