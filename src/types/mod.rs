// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for lamp control.
//!
//! # Types
//!
//! - [`XyColor`] - CIE xy chromaticity, the lamp's native color format
//! - [`RgbColor`] - sRGB color with hex parsing and formatting
//! - [`Gamut`] - Triangle of chromaticities a lamp model can reproduce
//! - [`Mirek`] - Color temperature in mireds (153-454)

mod gamut;
mod mirek;
mod rgb_color;
mod xy_color;

pub use gamut::Gamut;
pub use mirek::Mirek;
pub use rgb_color::RgbColor;
pub use xy_color::XyColor;
