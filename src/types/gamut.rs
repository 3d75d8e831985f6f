// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color gamut triangles.
//!
//! A gamut is the triangle spanned by the three primaries of a lamp in the
//! CIE xy diagram. Colors outside the triangle cannot be reproduced and are
//! projected onto its boundary.

use std::fmt;

use crate::error::ValueError;

use super::XyColor;

/// The triangle of reproducible chromaticities of a lamp.
///
/// # Examples
///
/// ```
/// use bluelamp_lib::types::{Gamut, XyColor};
///
/// let gamut = Gamut::C;
/// assert!(gamut.contains(XyColor::D65));
///
/// // Points outside are moved onto the closest edge
/// let outside = XyColor::new(0.9, 0.9);
/// assert!(!gamut.contains(outside));
/// let clipped = gamut.clip(outside);
/// assert!(gamut.contains(clipped) || gamut.distance_to_edge(clipped) < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vertices")]
pub struct Gamut {
    red: XyColor,
    green: XyColor,
    blue: XyColor,
}

impl Gamut {
    /// Gamut A: early LivingColors and LightStrips.
    pub const A: Self = Self::new(
        XyColor::new(0.704, 0.296),
        XyColor::new(0.2151, 0.7106),
        XyColor::new(0.138, 0.08),
    );

    /// Gamut B: first generation color bulbs.
    pub const B: Self = Self::new(
        XyColor::new(0.675, 0.322),
        XyColor::new(0.4091, 0.518),
        XyColor::new(0.167, 0.04),
    );

    /// Gamut C: current color bulbs, the widest of the three.
    pub const C: Self = Self::new(
        XyColor::new(0.692, 0.308),
        XyColor::new(0.17, 0.7),
        XyColor::new(0.153, 0.048),
    );

    /// Gamut used when the lamp model is not recognized.
    pub const DEFAULT: Self = Self::C;

    /// Creates a gamut from its red, green and blue primaries.
    ///
    /// The primaries must span a triangle with a non-zero area. On collinear
    /// points [`contains`](Self::contains) is `false` everywhere; use
    /// [`try_new`](Self::try_new) for primaries that are not known in advance.
    #[must_use]
    pub const fn new(red: XyColor, green: XyColor, blue: XyColor) -> Self {
        Self { red, green, blue }
    }

    /// Creates a gamut, checking that the primaries span a triangle.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::DegenerateGamut` if the points are collinear (or
    /// not finite).
    pub fn try_new(red: XyColor, green: XyColor, blue: XyColor) -> Result<Self, ValueError> {
        let gamut = Self::new(red, green, blue);
        if gamut.area() > f64::EPSILON {
            Ok(gamut)
        } else {
            Err(ValueError::DegenerateGamut(gamut.to_string()))
        }
    }

    /// Area of the triangle.
    #[must_use]
    pub fn area(&self) -> f64 {
        cross(sub(self.green, self.red), sub(self.blue, self.red)).abs() / 2.0
    }

    /// Returns the red primary.
    #[must_use]
    pub const fn red(&self) -> XyColor {
        self.red
    }

    /// Returns the green primary.
    #[must_use]
    pub const fn green(&self) -> XyColor {
        self.green
    }

    /// Returns the blue primary.
    #[must_use]
    pub const fn blue(&self) -> XyColor {
        self.blue
    }

    /// Returns whether the point lies inside the triangle or on its edges.
    #[must_use]
    pub fn contains(&self, point: XyColor) -> bool {
        let v1 = sub(self.green, self.red);
        let v2 = sub(self.blue, self.red);
        let q = sub(point, self.red);

        let denom = cross(v1, v2);
        let s = cross(q, v2) / denom;
        let t = cross(v1, q) / denom;

        s >= 0.0 && t >= 0.0 && s + t <= 1.0
    }

    /// Returns the closest point on the triangle boundary.
    #[must_use]
    pub fn closest_point(&self, point: XyColor) -> XyColor {
        let candidates = [
            closest_point_on_segment(self.red, self.green, point),
            closest_point_on_segment(self.green, self.blue, point),
            closest_point_on_segment(self.blue, self.red, point),
        ];

        let mut closest = candidates[0];
        for candidate in &candidates[1..] {
            if point.distance_squared(candidate) < point.distance_squared(&closest) {
                closest = *candidate;
            }
        }
        closest
    }

    /// Returns `point` unchanged when inside, otherwise its projection onto
    /// the boundary.
    #[must_use]
    pub fn clip(&self, point: XyColor) -> XyColor {
        if self.contains(point) {
            point
        } else {
            self.closest_point(point)
        }
    }

    /// Distance from the point to the nearest edge.
    #[must_use]
    pub fn distance_to_edge(&self, point: XyColor) -> f64 {
        point.distance_squared(&self.closest_point(point)).sqrt()
    }

    /// Maps barycentric weights `(u, v)` to a point of the triangle.
    ///
    /// The result is `red + u * (green - red) + v * (blue - red)`, which is
    /// inside the gamut whenever `u >= 0`, `v >= 0` and `u + v <= 1`.
    #[must_use]
    pub fn interpolate(&self, u: f64, v: f64) -> XyColor {
        let g = sub(self.green, self.red);
        let b = sub(self.blue, self.red);
        XyColor::new(
            self.red.x() + u * g.x() + v * b.x(),
            self.red.y() + u * g.y() + v * b.y(),
        )
    }
}

impl Default for Gamut {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Gamut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{} G{} B{}", self.red, self.green, self.blue)
    }
}

#[derive(serde::Deserialize)]
struct Vertices {
    red: XyColor,
    green: XyColor,
    blue: XyColor,
}

impl TryFrom<Vertices> for Gamut {
    type Error = ValueError;

    fn try_from(v: Vertices) -> Result<Self, Self::Error> {
        Self::try_new(v.red, v.green, v.blue)
    }
}

fn sub(a: XyColor, b: XyColor) -> XyColor {
    XyColor::new(a.x() - b.x(), a.y() - b.y())
}

fn cross(a: XyColor, b: XyColor) -> f64 {
    a.x() * b.y() - a.y() * b.x()
}

fn closest_point_on_segment(a: XyColor, b: XyColor, p: XyColor) -> XyColor {
    let ap = sub(p, a);
    let ab = sub(b, a);
    let ab2 = ab.x() * ab.x() + ab.y() * ab.y();
    let t = ((ap.x() * ab.x() + ap.y() * ab.y()) / ab2).clamp(0.0, 1.0);
    XyColor::new(a.x() + ab.x() * t, a.y() + ab.y() * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(a: XyColor, b: XyColor) {
        assert!(
            a.distance_squared(&b).sqrt() < EPS,
            "expected {b}, got {a}"
        );
    }

    #[test]
    fn primaries_are_inside() {
        for gamut in [Gamut::A, Gamut::B, Gamut::C] {
            assert!(gamut.contains(gamut.red()));
            assert!(gamut.contains(gamut.green()));
            assert!(gamut.contains(gamut.blue()));
        }
    }

    #[test]
    fn white_point() {
        assert!(Gamut::A.contains(XyColor::D65));
        assert!(Gamut::C.contains(XyColor::D65));
        // D65 sits just left of the green-blue edge of gamut B
        assert!(!Gamut::B.contains(XyColor::D65));
    }

    #[test]
    fn far_points_are_outside() {
        assert!(!Gamut::C.contains(XyColor::new(0.0, 0.0)));
        assert!(!Gamut::C.contains(XyColor::new(0.9, 0.9)));
        assert!(!Gamut::C.contains(XyColor::new(0.8, 0.1)));
    }

    #[test]
    fn clip_keeps_inside_points() {
        let p = XyColor::new(0.4, 0.35);
        assert_eq!(Gamut::C.clip(p), p);
    }

    #[test]
    fn clip_projects_onto_vertex() {
        // Beyond the blue corner, both adjacent edges clamp to the vertex
        assert_close(Gamut::C.clip(XyColor::new(0.0, 0.0)), Gamut::C.blue());
        assert_close(Gamut::C.clip(XyColor::new(0.1, 0.9)), Gamut::C.green());
        assert_close(Gamut::C.clip(XyColor::new(0.8, 0.1)), Gamut::C.red());
    }

    #[test]
    fn clip_projects_onto_edge() {
        // Perpendicular projection onto the red-green edge
        let clipped = Gamut::C.clip(XyColor::new(0.9, 0.9));
        assert_close(clipped, XyColor::new(0.540_736_270_028_253, 0.421_592_686_109_051_3));
        assert!(Gamut::C.distance_to_edge(clipped) < EPS);
    }

    #[test]
    fn interpolate_corners() {
        assert_close(Gamut::C.interpolate(0.0, 0.0), Gamut::C.red());
        assert_close(Gamut::C.interpolate(1.0, 0.0), Gamut::C.green());
        assert_close(Gamut::C.interpolate(0.0, 1.0), Gamut::C.blue());
        assert!(Gamut::C.contains(Gamut::C.interpolate(0.3, 0.3)));
    }

    #[test]
    fn try_new_rejects_collinear_primaries() {
        let line = Gamut::try_new(
            XyColor::new(0.1, 0.1),
            XyColor::new(0.3, 0.3),
            XyColor::new(0.5, 0.5),
        );
        assert!(matches!(line, Err(ValueError::DegenerateGamut(_))));

        let nan = Gamut::try_new(
            XyColor::new(f64::NAN, 0.1),
            XyColor::new(0.3, 0.3),
            XyColor::new(0.5, 0.1),
        );
        assert!(nan.is_err());

        assert_eq!(
            Gamut::try_new(Gamut::C.red(), Gamut::C.green(), Gamut::C.blue()).unwrap(),
            Gamut::C
        );
    }

    #[test]
    fn serde_checks_triangle() {
        let json = serde_json::to_string(&Gamut::B).unwrap();
        assert_eq!(serde_json::from_str::<Gamut>(&json).unwrap(), Gamut::B);

        let collinear = r#"{
            "red": {"x": 0.1, "y": 0.1},
            "green": {"x": 0.3, "y": 0.3},
            "blue": {"x": 0.5, "y": 0.5}
        }"#;
        assert!(serde_json::from_str::<Gamut>(collinear).is_err());
    }

    #[test]
    fn default_is_gamut_c() {
        assert_eq!(Gamut::default(), Gamut::C);
    }
}
