// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lamp session.
//!
//! A [`Lamp`] pairs a [`Transport`] with the gamut of the connected model.
//! Every setter encodes its value and writes it; every getter reads and
//! decodes. Color getters and setters also go through the lamp's
//! [`ColorConverter`].
//!
//! ```
//! use bluelamp_lib::{Lamp, MemoryTransport};
//!
//! # async fn example() -> bluelamp_lib::Result<()> {
//! let lamp = Lamp::builder(MemoryTransport::new().with_model("LCT015"))
//!     .connect()
//!     .await?;
//!
//! lamp.set_power(true).await?;
//! lamp.set_brightness(0.5).await?;
//! lamp.set_color_hex("#FF8000").await?;
//!
//! assert!(lamp.get_power().await?);
//! assert_eq!(lamp.get_color_hex().await?, "#FF8000");
//! # Ok(())
//! # }
//! ```

mod builder;
mod config;

pub use builder::LampBuilder;
pub use config::LampConfig;

use crate::characteristic::Characteristic;
use crate::codec;
use crate::color::ColorConverter;
use crate::error::Error;
use crate::transport::Transport;
use crate::types::{Gamut, Mirek, RgbColor, XyColor};

/// A connected lamp with a resolved gamut.
///
/// Created through [`Lamp::builder`]. The gamut never changes afterwards.
///
/// # Type Parameter
///
/// `T` is the transport carrying reads and writes, for instance
/// [`MemoryTransport`](crate::MemoryTransport) or, with the `btleplug`
/// feature, `BtleplugTransport`.
#[derive(Debug)]
pub struct Lamp<T: Transport> {
    transport: T,
    config: LampConfig,
    model: String,
    converter: ColorConverter,
}

impl<T: Transport> Lamp<T> {
    /// Starts building a lamp session over `transport`.
    pub fn builder(transport: T) -> LampBuilder<T> {
        LampBuilder::new(transport)
    }

    pub(crate) fn new(transport: T, config: LampConfig, model: String, gamut: Gamut) -> Self {
        Self {
            transport,
            config,
            model,
            converter: ColorConverter::new(gamut),
        }
    }

    /// Returns the model string read when the session was built.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the gamut in use.
    #[must_use]
    pub fn gamut(&self) -> Gamut {
        self.converter.gamut()
    }

    /// Returns the session configuration.
    #[must_use]
    pub fn config(&self) -> &LampConfig {
        &self.config
    }

    /// Returns the color converter for the lamp's gamut.
    #[must_use]
    pub fn converter(&self) -> &ColorConverter {
        &self.converter
    }

    /// Returns the transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Ends the session and returns the transport, e.g. to disconnect it.
    pub fn into_transport(self) -> T {
        self.transport
    }

    async fn read(&self, characteristic: Characteristic) -> Result<Vec<u8>, Error> {
        let data = self.transport.read(characteristic).await?;
        tracing::trace!(characteristic = %characteristic, data = ?data, "Read characteristic");
        Ok(data)
    }

    async fn write(&self, characteristic: Characteristic, data: &[u8]) -> Result<(), Error> {
        let mode = self.config.write_mode();
        tracing::trace!(characteristic = %characteristic, data = ?data, mode = ?mode, "Writing characteristic");
        self.transport.write(characteristic, data, mode).await?;
        Ok(())
    }

    // ========== Model ==========

    /// Reads the model string from the lamp.
    ///
    /// # Errors
    ///
    /// Returns error if the read fails or the string is not ASCII.
    pub async fn get_model(&self) -> Result<String, Error> {
        let raw = self.read(Characteristic::Model).await?;
        Ok(codec::decode_model(&raw)?)
    }

    // ========== Power ==========

    /// Reads whether the lamp is on.
    ///
    /// # Errors
    ///
    /// Returns error if the read fails or the buffer is not 1 byte.
    pub async fn get_power(&self) -> Result<bool, Error> {
        let raw = self.read(Characteristic::Power).await?;
        Ok(codec::decode_power(&raw)?)
    }

    /// Turns the lamp on or off.
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    pub async fn set_power(&self, on: bool) -> Result<(), Error> {
        self.write(Characteristic::Power, &codec::encode_power(on)).await
    }

    // ========== Brightness ==========

    /// Reads the brightness in [0.0, 1.0].
    ///
    /// # Errors
    ///
    /// Returns error if the read fails or the buffer is not 1 byte.
    pub async fn get_brightness(&self) -> Result<f64, Error> {
        let raw = self.read(Characteristic::Brightness).await?;
        Ok(codec::decode_brightness(&raw)?)
    }

    /// Sets the brightness.
    ///
    /// Values are clamped to what the lamp accepts (1-254 raw), so 0.0 dims
    /// to the minimum without turning the lamp off.
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    pub async fn set_brightness(&self, brightness: f64) -> Result<(), Error> {
        self.write(Characteristic::Brightness, &codec::encode_brightness(brightness)).await
    }

    // ========== Temperature ==========

    /// Reads the color temperature, 0.0 coolest and 1.0 warmest.
    ///
    /// # Errors
    ///
    /// Returns error if the read fails or the buffer is not 2 bytes.
    pub async fn get_temperature(&self) -> Result<f64, Error> {
        let raw = self.read(Characteristic::Temperature).await?;
        Ok(codec::decode_temperature(&raw)?)
    }

    /// Sets the color temperature, 0.0 coolest and 1.0 warmest.
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    pub async fn set_temperature(&self, temperature: f64) -> Result<(), Error> {
        self.write(Characteristic::Temperature, &codec::encode_temperature(temperature)).await
    }

    /// Reads the color temperature in mireds.
    ///
    /// # Errors
    ///
    /// Returns error if the read fails or the buffer is not 2 bytes.
    pub async fn get_temperature_mirek(&self) -> Result<Mirek, Error> {
        let raw = self.read(Characteristic::Temperature).await?;
        Ok(codec::decode_mirek(&raw)?)
    }

    /// Sets the color temperature in mireds.
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    pub async fn set_temperature_mirek(&self, mirek: Mirek) -> Result<(), Error> {
        self.write(Characteristic::Temperature, &codec::encode_mirek(mirek)).await
    }

    // ========== Color ==========

    /// Reads the color as xy chromaticity.
    ///
    /// # Errors
    ///
    /// Returns error if the read fails or the buffer is not 4 bytes.
    pub async fn get_color_xy(&self) -> Result<XyColor, Error> {
        let raw = self.read(Characteristic::Color).await?;
        Ok(codec::decode_xy(&raw)?)
    }

    /// Writes an xy chromaticity as is.
    ///
    /// The point is not clipped to the gamut; the lamp does that itself.
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    pub async fn set_color_xy(&self, xy: XyColor) -> Result<(), Error> {
        self.write(Characteristic::Color, &codec::encode_xy(xy)).await
    }

    /// Reads the color as RGB at full brightness.
    ///
    /// # Errors
    ///
    /// Returns error if the read fails or the buffer is not 4 bytes.
    pub async fn get_color_rgb(&self) -> Result<RgbColor, Error> {
        let xy = self.get_color_xy().await?;
        Ok(self.converter.xy_to_rgb(xy))
    }

    /// Sets the color from RGB, clipped to the lamp's gamut.
    ///
    /// Only the hue and saturation are kept; use
    /// [`set_brightness`](Self::set_brightness) for the level.
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    pub async fn set_color_rgb(&self, rgb: RgbColor) -> Result<(), Error> {
        let xy = self.converter.rgb_to_xy(rgb);
        self.set_color_xy(xy).await
    }

    /// Reads the color as an uppercase `#RRGGBB` string.
    ///
    /// # Errors
    ///
    /// Returns error if the read fails or the buffer is not 4 bytes.
    pub async fn get_color_hex(&self) -> Result<String, Error> {
        let xy = self.get_color_xy().await?;
        Ok(self.converter.xy_to_hex(xy))
    }

    /// Sets the color from a hex string (`#RRGGBB`, `RRGGBB`, `#RGB` or
    /// `RGB`).
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string is not a valid hex color (nothing is written)
    /// - The write fails
    pub async fn set_color_hex(&self, hex: &str) -> Result<(), Error> {
        let xy = self.converter.hex_to_xy(hex)?;
        self.set_color_xy(xy).await
    }

    /// Sets a random color inside the gamut and returns it.
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    pub async fn set_color_random(&self) -> Result<XyColor, Error> {
        let xy = self.converter.random_xy();
        tracing::debug!(color = %xy, "Picked random color");
        self.set_color_xy(xy).await?;
        Ok(xy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DecodeError, TransportError, ValueError};
    use crate::transport::{MemoryTransport, WriteMode, WriteRecord};

    fn lamp() -> Lamp<MemoryTransport> {
        Lamp::builder(MemoryTransport::new()).build_with_model("LCT015")
    }

    #[tokio::test]
    async fn power_roundtrip() {
        let lamp = lamp();
        lamp.set_power(true).await.unwrap();
        assert!(lamp.get_power().await.unwrap());

        lamp.set_power(false).await.unwrap();
        assert!(!lamp.get_power().await.unwrap());
        assert_eq!(lamp.transport().value(Characteristic::Power), Some(vec![0]));
    }

    #[tokio::test]
    async fn writes_use_configured_mode() {
        let lamp = Lamp::builder(MemoryTransport::new())
            .with_write_mode(WriteMode::WithoutResponse)
            .build_with_model("LCT015");

        lamp.set_brightness(1.0).await.unwrap();
        assert_eq!(
            lamp.transport().last_write(),
            Some(WriteRecord {
                characteristic: Characteristic::Brightness,
                data: vec![254],
                mode: WriteMode::WithoutResponse,
            })
        );
    }

    #[tokio::test]
    async fn mirek_roundtrip() {
        let lamp = lamp();
        lamp.set_temperature_mirek(Mirek::NEUTRAL).await.unwrap();
        assert_eq!(
            lamp.transport().value(Characteristic::Temperature),
            Some(vec![250, 0])
        );
        assert_eq!(lamp.get_temperature_mirek().await.unwrap(), Mirek::NEUTRAL);
    }

    #[tokio::test]
    async fn rgb_is_clipped_to_gamut() {
        let lamp = Lamp::builder(MemoryTransport::new()).build_with_model("LCT001");
        lamp.set_color_rgb(RgbColor::green_color()).await.unwrap();

        let xy = lamp.get_color_xy().await.unwrap();
        // Stored with 1/65535 resolution, so allow for quantization
        assert!(Gamut::B.contains(xy) || Gamut::B.distance_to_edge(xy) < 1e-4);
    }

    #[tokio::test]
    async fn invalid_hex_writes_nothing() {
        let lamp = lamp();
        let err = lamp.set_color_hex("#GG0000").await.unwrap_err();

        assert!(matches!(err, Error::Value(ValueError::InvalidHexColor(_))));
        assert!(lamp.transport().writes().is_empty());
    }

    #[tokio::test]
    async fn short_color_buffer() {
        let lamp = lamp();
        lamp.transport().set_value(Characteristic::Color, &[0, 0, 0]);

        let err = lamp.get_color_rgb().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Decode(DecodeError::InvalidLength {
                characteristic: Characteristic::Color,
                expected: 4,
                actual: 3,
            })
        ));
    }

    #[tokio::test]
    async fn get_model_reads_live_value() {
        let lamp = lamp();
        lamp.transport().set_value(Characteristic::Model, b"LCT016");

        assert_eq!(lamp.get_model().await.unwrap(), "LCT016");
        // The captured model and gamut stay as they were
        assert_eq!(lamp.model(), "LCT015");
        assert_eq!(lamp.gamut(), Gamut::C);
    }

    #[tokio::test]
    async fn disconnected_transport() {
        let lamp = lamp();
        lamp.transport().set_connected(false);

        assert!(matches!(
            lamp.set_power(true).await,
            Err(Error::Transport(TransportError::NotConnected))
        ));
        assert!(matches!(
            lamp.get_brightness().await,
            Err(Error::Transport(TransportError::NotConnected))
        ));
    }

    #[test]
    fn into_transport_returns_it() {
        let transport = lamp().into_transport();
        assert!(transport.writes().is_empty());
    }
}
