// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Session configuration.

use crate::transport::WriteMode;
use crate::types::Gamut;

/// Settings applied to every operation of a [`Lamp`](super::Lamp).
///
/// # Examples
///
/// ```
/// use bluelamp_lib::{LampConfig, WriteMode};
/// use bluelamp_lib::types::Gamut;
///
/// let config = LampConfig::new()
///     .with_write_mode(WriteMode::WithoutResponse)
///     .with_fallback_gamut(Gamut::B);
///
/// assert_eq!(config.write_mode(), WriteMode::WithoutResponse);
/// assert_eq!(config.fallback_gamut(), Gamut::B);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LampConfig {
    write_mode: WriteMode,
    fallback_gamut: Gamut,
}

impl LampConfig {
    /// Default write mode: wait for the lamp to acknowledge.
    pub const DEFAULT_WRITE_MODE: WriteMode = WriteMode::WithResponse;
    /// Gamut used for models the catalog does not know.
    pub const DEFAULT_FALLBACK_GAMUT: Gamut = Gamut::DEFAULT;

    /// Creates a configuration with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            write_mode: Self::DEFAULT_WRITE_MODE,
            fallback_gamut: Self::DEFAULT_FALLBACK_GAMUT,
        }
    }

    /// Sets how writes are delivered.
    #[must_use]
    pub const fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    /// Sets the gamut used when the model is unknown.
    #[must_use]
    pub const fn with_fallback_gamut(mut self, gamut: Gamut) -> Self {
        self.fallback_gamut = gamut;
        self
    }

    /// Returns the write mode.
    #[must_use]
    pub const fn write_mode(&self) -> WriteMode {
        self.write_mode
    }

    /// Returns the fallback gamut.
    #[must_use]
    pub const fn fallback_gamut(&self) -> Gamut {
        self.fallback_gamut
    }
}

impl Default for LampConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = LampConfig::default();
        assert_eq!(config.write_mode(), WriteMode::WithResponse);
        assert_eq!(config.fallback_gamut(), Gamut::C);
    }

    #[test]
    fn builder_methods() {
        let config = LampConfig::new()
            .with_write_mode(WriteMode::WithoutResponse)
            .with_fallback_gamut(Gamut::A);
        assert_eq!(config.write_mode(), WriteMode::WithoutResponse);
        assert_eq!(config.fallback_gamut(), Gamut::A);
    }
}
