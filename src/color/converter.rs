// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Conversion between xy chromaticity, RGB and hex for a given gamut.

use rand::Rng;

use crate::error::ValueError;
use crate::types::{Gamut, RgbColor, XyColor};

// sRGB (D65) linear RGB -> XYZ
const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
];

// XYZ -> sRGB (D65) linear RGB
const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [3.2406, -1.5372, -0.4986],
    [-0.9689, 1.8758, 0.0415],
    [0.0557, -0.2040, 1.0570],
];

/// Converts colors for one lamp gamut.
///
/// Chromaticity carries no brightness, so RGB colors produced here are
/// normalized to full brightness: the largest channel is 1.0. Converting an
/// RGB color to xy and back therefore returns the same color scaled so that
/// its largest channel is 1.0.
///
/// # Examples
///
/// ```
/// use bluelamp_lib::color::ColorConverter;
/// use bluelamp_lib::types::{Gamut, RgbColor, XyColor};
///
/// let converter = ColorConverter::new(Gamut::C);
///
/// let xy = converter.rgb_to_xy(RgbColor::red_color());
/// assert!(Gamut::C.contains(xy));
/// assert_eq!(converter.xy_to_rgb(xy).to_hex(), "#FF0000");
///
/// // Points outside the gamut are clipped before conversion
/// let outside = XyColor::new(0.9, 0.9);
/// assert_eq!(
///     converter.xy_to_hex(outside),
///     converter.xy_to_hex(Gamut::C.clip(outside))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorConverter {
    gamut: Gamut,
}

impl ColorConverter {
    /// Creates a converter for the given gamut.
    #[must_use]
    pub const fn new(gamut: Gamut) -> Self {
        Self { gamut }
    }

    /// Returns the gamut colors are clipped to.
    #[must_use]
    pub const fn gamut(&self) -> Gamut {
        self.gamut
    }

    /// Converts a chromaticity to a full brightness RGB color.
    ///
    /// Points outside the gamut are first projected onto its boundary.
    #[must_use]
    pub fn xy_to_rgb(&self, xy: XyColor) -> RgbColor {
        self.xy_to_rgb_with_brightness(xy, 1.0)
    }

    /// Converts a chromaticity to an RGB color scaled by `brightness`
    /// (0.0-1.0, applied to linear light).
    #[must_use]
    pub fn xy_to_rgb_with_brightness(&self, xy: XyColor, brightness: f64) -> RgbColor {
        let xy = self.gamut.clip(xy);

        // Y = 1; every gamut vertex has y > 0 so the division is safe
        let big_x = xy.x() / xy.y();
        let big_z = (1.0 - xy.x() - xy.y()) / xy.y();
        let [r, g, b] = mul(XYZ_TO_RGB, [big_x, 1.0, big_z]).map(|c| c.max(0.0));

        let max = r.max(g).max(b);
        if max <= 0.0 {
            return RgbColor::black();
        }

        let scale = brightness.max(0.0).min(1.0) / max;
        RgbColor::new(
            gamma_encode(r * scale),
            gamma_encode(g * scale),
            gamma_encode(b * scale),
        )
    }

    /// Converts an RGB color to a chromaticity inside the gamut.
    ///
    /// Black has no chromaticity; it maps to the D65 white point (clipped to
    /// the gamut).
    #[must_use]
    pub fn rgb_to_xy(&self, rgb: RgbColor) -> XyColor {
        let linear = [
            gamma_decode(rgb.red()),
            gamma_decode(rgb.green()),
            gamma_decode(rgb.blue()),
        ];
        let [big_x, big_y, big_z] = mul(RGB_TO_XYZ, linear);

        let sum = big_x + big_y + big_z;
        let xy = if sum > 0.0 {
            XyColor::new(big_x / sum, big_y / sum)
        } else {
            XyColor::D65
        };
        self.gamut.clip(xy)
    }

    /// Converts a chromaticity to an uppercase `#RRGGBB` string.
    #[must_use]
    pub fn xy_to_hex(&self, xy: XyColor) -> String {
        self.xy_to_rgb(xy).to_hex()
    }

    /// Parses a hex color and converts it to a chromaticity.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidHexColor` if the string cannot be parsed.
    pub fn hex_to_xy(&self, hex: &str) -> Result<XyColor, ValueError> {
        RgbColor::from_hex(hex).map(|rgb| self.rgb_to_xy(rgb))
    }

    /// Returns a random chromaticity inside the gamut, using the thread-local
    /// generator.
    #[must_use]
    pub fn random_xy(&self) -> XyColor {
        self.random_xy_with(&mut rand::rng())
    }

    /// Returns a random chromaticity inside the gamut.
    ///
    /// Two uniform draws are used as barycentric weights; when their sum
    /// exceeds 1 both are reflected, which keeps the point in the triangle and
    /// the distribution uniform over its area.
    pub fn random_xy_with<R: Rng + ?Sized>(&self, rng: &mut R) -> XyColor {
        let mut u: f64 = rng.random();
        let mut v: f64 = rng.random();
        if u + v > 1.0 {
            u = 1.0 - u;
            v = 1.0 - v;
        }
        self.gamut.interpolate(u, v)
    }
}

impl Default for ColorConverter {
    fn default() -> Self {
        Self::new(Gamut::DEFAULT)
    }
}

fn mul(m: [[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    m.map(|row| row[0] * v[0] + row[1] * v[1] + row[2] * v[2])
}

/// sRGB transfer function, linear to encoded.
fn gamma_encode(channel: f64) -> f64 {
    if channel <= 0.003_130_8 {
        channel * 12.92
    } else {
        1.055 * channel.powf(1.0 / 2.4) - 0.055
    }
}

/// sRGB transfer function, encoded to linear.
fn gamma_decode(channel: f64) -> f64 {
    if channel > 0.040_45 {
        ((channel + 0.055) / 1.055).powf(2.4)
    } else {
        channel / 12.92
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    const TOLERANCE: f64 = 1e-3;

    fn assert_rgb_close(actual: RgbColor, expected: RgbColor) {
        let close = (actual.red() - expected.red()).abs() < TOLERANCE
            && (actual.green() - expected.green()).abs() < TOLERANCE
            && (actual.blue() - expected.blue()).abs() < TOLERANCE;
        assert!(close, "expected {expected:?}, got {actual:?}");
    }

    #[test]
    fn gamma_roundtrip() {
        for i in 0..=100 {
            let v = f64::from(i) / 100.0;
            assert!((gamma_encode(gamma_decode(v)) - v).abs() < 1e-9);
        }
    }

    #[test]
    fn rgb_to_xy_known_values() {
        let converter = ColorConverter::new(Gamut::C);
        let magenta = converter.rgb_to_xy(RgbColor::new(1.0, 0.0, 1.0));
        assert!((magenta.x() - 0.320_920_162_381_596_76).abs() < 1e-9);
        assert!((magenta.y() - 0.154_154_262_516_914_75).abs() < 1e-9);

        let white = converter.rgb_to_xy(RgbColor::white());
        assert!((white.x() - 0.3127).abs() < 1e-3);
        assert!((white.y() - 0.3290).abs() < 1e-3);
    }

    #[test]
    fn rgb_to_xy_clips_into_gamut() {
        // sRGB blue lies just outside gamut C, green lies outside gamut B
        let c = ColorConverter::new(Gamut::C);
        let blue = c.rgb_to_xy(RgbColor::blue_color());
        assert!(Gamut::C.distance_to_edge(blue) < 1e-9);

        let b = ColorConverter::new(Gamut::B);
        let green = b.rgb_to_xy(RgbColor::green_color());
        assert!((green.x() - Gamut::B.green().x()).abs() < 1e-9);
        assert!((green.y() - Gamut::B.green().y()).abs() < 1e-9);
    }

    #[test]
    fn rgb_to_xy_black() {
        let converter = ColorConverter::new(Gamut::C);
        assert_eq!(converter.rgb_to_xy(RgbColor::black()), XyColor::D65);

        let b = ColorConverter::new(Gamut::B);
        let xy = b.rgb_to_xy(RgbColor::black());
        assert!(Gamut::B.distance_to_edge(xy) < 1e-9);
    }

    #[test]
    fn roundtrip_in_gamut_colors() {
        let converter = ColorConverter::new(Gamut::C);
        let colors = [
            RgbColor::red_color(),
            RgbColor::green_color(),
            RgbColor::white(),
            RgbColor::new(1.0, 0.5, 0.0),
            RgbColor::new(0.2, 0.4, 1.0),
            RgbColor::new(1.0, 0.0, 1.0),
            RgbColor::new(0.0, 0.5, 1.0),
            RgbColor::new(1.0, 0.8, 0.2),
        ];
        for rgb in colors {
            let back = converter.xy_to_rgb(converter.rgb_to_xy(rgb));
            assert_rgb_close(back, rgb);
        }
    }

    #[test]
    fn roundtrip_normalizes_brightness() {
        let converter = ColorConverter::new(Gamut::C);
        let dim = RgbColor::new(0.5, 0.25, 0.0);
        let back = converter.xy_to_rgb(converter.rgb_to_xy(dim));
        assert!((back.max_channel() - 1.0).abs() < TOLERANCE);
        assert!(back.blue() < TOLERANCE);
    }

    #[test]
    fn xy_to_rgb_outside_equals_projection() {
        let converter = ColorConverter::new(Gamut::C);
        for outside in [
            XyColor::new(0.9, 0.9),
            XyColor::new(0.0, 0.0),
            XyColor::new(0.8, 0.1),
            XyColor::new(0.05, 0.5),
        ] {
            assert!(!Gamut::C.contains(outside));
            let projected = Gamut::C.closest_point(outside);
            assert_rgb_close(converter.xy_to_rgb(outside), converter.xy_to_rgb(projected));
        }
    }

    #[test]
    fn xy_to_rgb_vertex() {
        let converter = ColorConverter::new(Gamut::C);
        let rgb = converter.xy_to_rgb(Gamut::C.red());
        assert!((rgb.red() - 1.0).abs() < TOLERANCE);
        assert!(rgb.green() < TOLERANCE);
        assert!(rgb.blue() < TOLERANCE);
    }

    #[test]
    fn xy_to_rgb_with_brightness_scales() {
        let converter = ColorConverter::new(Gamut::C);
        let xy = converter.rgb_to_xy(RgbColor::white());
        let full = converter.xy_to_rgb_with_brightness(xy, 1.0);
        let dark = converter.xy_to_rgb_with_brightness(xy, 0.0);
        let half = converter.xy_to_rgb_with_brightness(xy, 0.5);
        assert!((full.max_channel() - 1.0).abs() < TOLERANCE);
        assert!(dark.max_channel() < TOLERANCE);
        // linear 0.5 is about 0.735 once gamma encoded
        assert!((half.max_channel() - 0.735).abs() < 0.01);
    }

    #[test]
    fn hex_roundtrip() {
        let converter = ColorConverter::new(Gamut::C);
        for hex in ["#FF0000", "#00FF00", "#FFFFFF", "#FF8000", "#3366FF", "#FF00FF"] {
            let xy = converter.hex_to_xy(hex).unwrap();
            assert_eq!(converter.xy_to_hex(xy), hex);
        }
    }

    #[test]
    fn hex_invalid() {
        let converter = ColorConverter::default();
        assert!(matches!(
            converter.hex_to_xy("#XYZXYZ"),
            Err(ValueError::InvalidHexColor(_))
        ));
    }

    #[test]
    fn random_stays_in_gamut() {
        let mut rng = StdRng::seed_from_u64(7);
        for gamut in [Gamut::A, Gamut::B, Gamut::C] {
            let converter = ColorConverter::new(gamut);
            for _ in 0..1000 {
                let xy = converter.random_xy_with(&mut rng);
                assert!(gamut.contains(xy), "{xy} escaped {gamut}");
            }
        }
    }

    #[test]
    fn random_thread_rng_stays_in_gamut() {
        let converter = ColorConverter::default();
        for _ in 0..1000 {
            assert!(Gamut::C.contains(converter.random_xy()));
        }
    }
}
