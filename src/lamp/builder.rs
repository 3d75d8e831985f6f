// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lamp builder.

use std::fmt;

use crate::characteristic::Characteristic;
use crate::codec;
use crate::color::{GamutCatalog, HueModelTable, resolve_gamut};
use crate::error::Error;
use crate::transport::{Transport, WriteMode};
use crate::types::Gamut;

use super::{Lamp, LampConfig};

/// Builder for a [`Lamp`] whose gamut is not resolved yet.
///
/// The builder owns the transport until the gamut is known. It becomes a
/// [`Lamp`] in one of two ways:
/// - [`connect`](Self::connect) reads the model from the lamp and resolves
///   its gamut through the catalog
/// - [`build_with_model`](Self::build_with_model) resolves a model string
///   known in advance, without touching the transport
///
/// # Examples
///
/// ```
/// use bluelamp_lib::{Lamp, MemoryTransport, WriteMode};
/// use bluelamp_lib::types::Gamut;
///
/// # async fn example() -> bluelamp_lib::Result<()> {
/// let transport = MemoryTransport::new().with_model("LCT001");
///
/// let lamp = Lamp::builder(transport)
///     .with_write_mode(WriteMode::WithoutResponse)
///     .connect()
///     .await?;
///
/// assert_eq!(lamp.model(), "LCT001");
/// assert_eq!(lamp.gamut(), Gamut::B);
/// # Ok(())
/// # }
/// ```
pub struct LampBuilder<T> {
    transport: T,
    config: LampConfig,
    catalog: Box<dyn GamutCatalog + Send + Sync>,
}

impl<T: Transport> LampBuilder<T> {
    /// Creates a builder with the default configuration and the built-in
    /// Hue model table.
    pub(crate) fn new(transport: T) -> Self {
        Self {
            transport,
            config: LampConfig::default(),
            catalog: Box::new(HueModelTable),
        }
    }

    /// Replaces the whole configuration.
    #[must_use]
    pub fn with_config(mut self, config: LampConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets how writes are delivered.
    #[must_use]
    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.config = self.config.with_write_mode(write_mode);
        self
    }

    /// Sets the gamut used when the catalog does not know the model.
    #[must_use]
    pub fn with_fallback_gamut(mut self, gamut: Gamut) -> Self {
        self.config = self.config.with_fallback_gamut(gamut);
        self
    }

    /// Sets the catalog used to look up the gamut of the model.
    ///
    /// Defaults to [`HueModelTable`].
    #[must_use]
    pub fn with_catalog<C>(mut self, catalog: C) -> Self
    where
        C: GamutCatalog + Send + Sync + 'static,
    {
        self.catalog = Box::new(catalog);
        self
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &LampConfig {
        &self.config
    }

    /// Reads the model from the lamp, resolves its gamut and builds the lamp.
    ///
    /// An unknown model is not an error: the fallback gamut is used.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The model characteristic cannot be read
    /// - The model string is not ASCII
    pub async fn connect(self) -> Result<Lamp<T>, Error> {
        let raw = self.transport.read(Characteristic::Model).await?;
        tracing::trace!(characteristic = %Characteristic::Model, data = ?raw, "Read characteristic");
        let model = codec::decode_model(&raw)?;

        Ok(self.build_with_model(model))
    }

    /// Builds the lamp from a model string known in advance.
    ///
    /// Nothing is read from the transport.
    #[must_use]
    pub fn build_with_model(self, model: impl Into<String>) -> Lamp<T> {
        let model = model.into();
        let gamut = resolve_gamut(self.catalog.as_ref(), &model, self.config.fallback_gamut());
        tracing::debug!(model = %model, write_mode = ?self.config.write_mode(), "Lamp session ready");

        Lamp::new(self.transport, self.config, model, gamut)
    }
}

impl<T: fmt::Debug> fmt::Debug for LampBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LampBuilder")
            .field("transport", &self.transport)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
