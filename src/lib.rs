// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `BlueLamp` Lib - A Rust library to control Philips Hue Bluetooth lamps.
//!
//! The lamps expose their state as GATT characteristics. This library turns
//! normalized values (power, brightness, color temperature, xy, RGB and hex
//! colors) into the raw bytes the lamp expects, and back.
//!
//! # Supported Features
//!
//! - **Power control**: Turn the lamp on/off
//! - **Light control**: Brightness, color temperature, color as xy, RGB or hex
//! - **Gamut handling**: Colors are clipped to the triangle of the lamp model
//! - **Random colors**: Uniformly picked inside the gamut
//!
//! # Layers
//!
//! - [`codec`] - Pure conversions between values and characteristic buffers
//! - [`color`] - Color conversion for a gamut, model to gamut lookup
//! - [`transport`] - Raw characteristic access, in memory or over `btleplug`
//! - [`Lamp`] - The session tying a transport to a resolved gamut
//!
//! # Quick Start
//!
//! ```
//! use bluelamp_lib::{Lamp, MemoryTransport};
//!
//! #[tokio::main]
//! async fn main() -> bluelamp_lib::Result<()> {
//!     // Any `Transport` works; the in-memory one simulates a lamp
//!     let transport = MemoryTransport::new().with_model("LCT015");
//!
//!     // Reads the model and picks its gamut
//!     let lamp = Lamp::builder(transport).connect().await?;
//!
//!     lamp.set_power(true).await?;
//!     lamp.set_brightness(0.75).await?;
//!     lamp.set_color_hex("#3366FF").await?;
//!
//!     assert_eq!(lamp.get_color_hex().await?, "#3366FF");
//!     Ok(())
//! }
//! ```
//!
//! ## Bluetooth Lamps
//!
//! With the `btleplug` feature, `BtleplugTransport` wraps a peripheral found
//! by the application's own scan:
//!
//! ```ignore
//! use bluelamp_lib::Lamp;
//! use bluelamp_lib::transport::BtleplugTransport;
//!
//! # async fn example(peripheral: btleplug::platform::Peripheral) -> bluelamp_lib::Result<()> {
//! let lamp = Lamp::builder(BtleplugTransport::connect(peripheral).await?)
//!     .connect()
//!     .await?;
//!
//! lamp.set_temperature(0.2).await?;
//! # Ok(())
//! # }
//! ```

mod characteristic;
pub mod codec;
pub mod color;
pub mod error;
mod lamp;
pub mod transport;
pub mod types;

pub use characteristic::Characteristic;
pub use color::{ColorConverter, GamutCatalog, GamutLookup, HueModelTable};
pub use error::{DecodeError, Error, Result, TransportError, ValueError};
pub use lamp::{Lamp, LampBuilder, LampConfig};
pub use transport::{MemoryTransport, Transport, WriteMode, WriteRecord};
pub use types::{Gamut, Mirek, RgbColor, XyColor};
