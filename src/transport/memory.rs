// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory transport.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::characteristic::Characteristic;
use crate::error::TransportError;

use super::{Transport, WriteMode};

/// A write received by a [`MemoryTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRecord {
    /// Target characteristic.
    pub characteristic: Characteristic,
    /// Bytes written.
    pub data: Vec<u8>,
    /// Requested delivery mode.
    pub mode: WriteMode,
}

#[derive(Debug)]
struct State {
    values: HashMap<Characteristic, Vec<u8>>,
    writes: Vec<WriteRecord>,
    connected: bool,
}

/// A simulated lamp that keeps characteristic values in memory.
///
/// Writes are recorded and stored, so a following read returns the written
/// bytes. Reading a characteristic that was never set fails with
/// [`TransportError::CharacteristicNotFound`]. While disconnected, every call
/// fails with [`TransportError::NotConnected`].
///
/// # Examples
///
/// ```
/// use bluelamp_lib::Characteristic;
/// use bluelamp_lib::transport::{MemoryTransport, Transport, WriteMode};
///
/// # async fn example() -> Result<(), bluelamp_lib::TransportError> {
/// let transport = MemoryTransport::new().with_model("LCT015");
///
/// transport.write(Characteristic::Power, &[1], WriteMode::WithResponse).await?;
/// assert_eq!(transport.read(Characteristic::Power).await?, vec![1]);
/// assert_eq!(transport.writes().len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MemoryTransport {
    state: Mutex<State>,
}

impl MemoryTransport {
    /// Creates a connected transport with no characteristic values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                values: HashMap::new(),
                writes: Vec::new(),
                connected: true,
            }),
        }
    }

    /// Sets the model string reported by the lamp.
    #[must_use]
    pub fn with_model(self, model: &str) -> Self {
        self.with_value(Characteristic::Model, model.as_bytes())
    }

    /// Sets the initial value of a characteristic.
    #[must_use]
    pub fn with_value(self, characteristic: Characteristic, data: &[u8]) -> Self {
        self.set_value(characteristic, data);
        self
    }

    /// Replaces the value of a characteristic, as if the lamp changed it.
    pub fn set_value(&self, characteristic: Characteristic, data: &[u8]) {
        self.state
            .lock()
            .values
            .insert(characteristic, data.to_vec());
    }

    /// Returns the stored value of a characteristic.
    #[must_use]
    pub fn value(&self, characteristic: Characteristic) -> Option<Vec<u8>> {
        self.state.lock().values.get(&characteristic).cloned()
    }

    /// Returns every write received so far, oldest first.
    #[must_use]
    pub fn writes(&self) -> Vec<WriteRecord> {
        self.state.lock().writes.clone()
    }

    /// Returns the most recent write.
    #[must_use]
    pub fn last_write(&self) -> Option<WriteRecord> {
        self.state.lock().writes.last().cloned()
    }

    /// Forgets recorded writes. Stored values are kept.
    pub fn clear_writes(&self) {
        self.state.lock().writes.clear();
    }

    /// Simulates the link going down or coming back.
    pub fn set_connected(&self, connected: bool) {
        self.state.lock().connected = connected;
    }

    /// Returns whether the simulated link is up.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.state.lock().connected
    }
}

impl Default for MemoryTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for MemoryTransport {
    async fn read(&self, characteristic: Characteristic) -> Result<Vec<u8>, TransportError> {
        let state = self.state.lock();
        if !state.connected {
            return Err(TransportError::NotConnected);
        }
        state
            .values
            .get(&characteristic)
            .cloned()
            .ok_or(TransportError::CharacteristicNotFound(characteristic))
    }

    async fn write(
        &self,
        characteristic: Characteristic,
        data: &[u8],
        mode: WriteMode,
    ) -> Result<(), TransportError> {
        let mut state = self.state.lock();
        if !state.connected {
            return Err(TransportError::NotConnected);
        }
        state.values.insert(characteristic, data.to_vec());
        state.writes.push(WriteRecord {
            characteristic,
            data: data.to_vec(),
            mode,
        });
        Ok(())
    }
}
