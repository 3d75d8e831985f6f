// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Gamut-aware color conversion.
//!
//! The lamp stores colors as CIE xy chromaticity. [`ColorConverter`] maps
//! between that and sRGB or hex strings, keeping every result inside the
//! gamut of the lamp model. [`GamutCatalog`] resolves the gamut from the model
//! string the lamp reports.
//!
//! # Examples
//!
//! ```
//! use bluelamp_lib::color::{ColorConverter, GamutCatalog, HueModelTable};
//! use bluelamp_lib::types::Gamut;
//!
//! let gamut = HueModelTable.lookup("LCT001").unwrap_or(Gamut::DEFAULT);
//! assert_eq!(gamut, Gamut::B);
//!
//! let converter = ColorConverter::new(Gamut::C);
//! let xy = converter.hex_to_xy("#FF8000").unwrap();
//! assert_eq!(converter.xy_to_hex(xy), "#FF8000");
//! ```

mod converter;
mod lookup;

pub use converter::ColorConverter;
pub use lookup::{GamutCatalog, GamutLookup, HueModelTable, resolve_gamut};
