// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Gamut resolution from the lamp model string.

use crate::types::Gamut;

/// Outcome of looking up the gamut of a lamp model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GamutLookup {
    /// The model is known and uses this gamut.
    Found(Gamut),
    /// The model is not known to the catalog.
    NotFound,
}

impl GamutLookup {
    /// Returns the found gamut or `fallback`.
    #[must_use]
    pub fn unwrap_or(self, fallback: Gamut) -> Gamut {
        match self {
            Self::Found(gamut) => gamut,
            Self::NotFound => fallback,
        }
    }

    /// Returns `true` if a gamut was found.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl From<Option<Gamut>> for GamutLookup {
    fn from(value: Option<Gamut>) -> Self {
        value.map_or(Self::NotFound, Self::Found)
    }
}

/// Source of gamut information for lamp models.
///
/// Any `Fn(&str) -> GamutLookup` closure is a catalog, which makes it easy to
/// plug in custom model tables:
///
/// ```
/// use bluelamp_lib::color::{GamutCatalog, GamutLookup};
/// use bluelamp_lib::types::Gamut;
///
/// let catalog = |model: &str| {
///     if model.starts_with("MY") {
///         GamutLookup::Found(Gamut::A)
///     } else {
///         GamutLookup::NotFound
///     }
/// };
/// assert_eq!(catalog.lookup("MY-LAMP"), GamutLookup::Found(Gamut::A));
/// assert_eq!(catalog.lookup("LCT015"), GamutLookup::NotFound);
/// ```
pub trait GamutCatalog {
    /// Looks up the gamut of `model`.
    fn lookup(&self, model: &str) -> GamutLookup;
}

impl<F> GamutCatalog for F
where
    F: Fn(&str) -> GamutLookup,
{
    fn lookup(&self, model: &str) -> GamutLookup {
        self(model)
    }
}

/// Built-in table of Philips Hue model identifiers.
///
/// Models not listed here, including most Bluetooth era bulbs, are reported
/// as [`GamutLookup::NotFound`] and end up on the default gamut C.
#[derive(Debug, Clone, Copy, Default)]
pub struct HueModelTable;

impl HueModelTable {
    const GAMUT_A: &'static [&'static str] = &[
        "LST001", "LLC005", "LLC006", "LLC007", "LLC010", "LLC011", "LLC012", "LLC013", "LLC014",
    ];

    const GAMUT_B: &'static [&'static str] = &["LCT001", "LCT007", "LCT002", "LCT003", "LLM001"];

    const GAMUT_C: &'static [&'static str] = &[
        "LCT010", "LCT011", "LCT012", "LCT014", "LCT015", "LCT016", "LLC020", "LST002",
    ];
}

impl GamutCatalog for HueModelTable {
    fn lookup(&self, model: &str) -> GamutLookup {
        let model = model.trim();
        if Self::GAMUT_A.contains(&model) {
            GamutLookup::Found(Gamut::A)
        } else if Self::GAMUT_B.contains(&model) {
            GamutLookup::Found(Gamut::B)
        } else if Self::GAMUT_C.contains(&model) {
            GamutLookup::Found(Gamut::C)
        } else {
            GamutLookup::NotFound
        }
    }
}

/// Resolves the gamut of `model`, falling back to `fallback` when the
/// catalog does not know it.
///
/// An unknown model is not an error; it is logged at `warn` level.
pub fn resolve_gamut<C>(catalog: &C, model: &str, fallback: Gamut) -> Gamut
where
    C: GamutCatalog + ?Sized,
{
    match catalog.lookup(model) {
        GamutLookup::Found(gamut) => {
            tracing::debug!(model = %model, gamut = %gamut, "Resolved lamp gamut");
            gamut
        }
        GamutLookup::NotFound => {
            tracing::warn!(model = %model, gamut = %fallback, "Unknown lamp model, using fallback gamut");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_table_known_models() {
        assert_eq!(HueModelTable.lookup("LST001"), GamutLookup::Found(Gamut::A));
        assert_eq!(HueModelTable.lookup("LLC014"), GamutLookup::Found(Gamut::A));
        assert_eq!(HueModelTable.lookup("LCT001"), GamutLookup::Found(Gamut::B));
        assert_eq!(HueModelTable.lookup("LLM001"), GamutLookup::Found(Gamut::B));
        assert_eq!(HueModelTable.lookup("LCT015"), GamutLookup::Found(Gamut::C));
        assert_eq!(HueModelTable.lookup("LST002"), GamutLookup::Found(Gamut::C));
    }

    #[test]
    fn hue_table_trims_whitespace() {
        assert_eq!(HueModelTable.lookup(" LCT003 "), GamutLookup::Found(Gamut::B));
    }

    #[test]
    fn hue_table_unknown_models() {
        assert_eq!(HueModelTable.lookup("LCA001"), GamutLookup::NotFound);
        assert_eq!(HueModelTable.lookup(""), GamutLookup::NotFound);
        assert_eq!(HueModelTable.lookup("lct015"), GamutLookup::NotFound);
    }

    #[test]
    fn resolve_uses_found_gamut() {
        assert_eq!(resolve_gamut(&HueModelTable, "LCT001", Gamut::C), Gamut::B);
    }

    #[test]
    fn resolve_falls_back_on_unknown_model() {
        assert_eq!(resolve_gamut(&HueModelTable, "XYZ999", Gamut::C), Gamut::C);
        assert_eq!(resolve_gamut(&HueModelTable, "XYZ999", Gamut::A), Gamut::A);
    }

    #[test]
    fn closure_catalog() {
        let never = |_: &str| GamutLookup::NotFound;
        assert_eq!(resolve_gamut(&never, "LCT001", Gamut::DEFAULT), Gamut::DEFAULT);
    }

    #[test]
    fn lookup_helpers() {
        assert!(GamutLookup::Found(Gamut::A).is_found());
        assert!(!GamutLookup::NotFound.is_found());
        assert_eq!(GamutLookup::from(Some(Gamut::B)), GamutLookup::Found(Gamut::B));
        assert_eq!(GamutLookup::from(None), GamutLookup::NotFound);
        assert_eq!(GamutLookup::NotFound.unwrap_or(Gamut::A), Gamut::A);
    }
}
