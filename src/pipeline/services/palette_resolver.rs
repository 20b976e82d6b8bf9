use crate::pipeline::domain::palettes::{DEFAULT_PALETTE, PALETTES};
use crate::pipeline::types::{Palette, Season, Subtype};
use serde::Serialize;
use tracing::debug;

/// Which level of the lookup produced the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteSource {
    Subtype,
    Season,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaletteSelection {
    #[serde(flatten)]
    pub palette: &'static Palette,
    pub source: PaletteSource,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteResolver;

impl PaletteResolver {
    pub fn new() -> Self {
        Self
    }

    /// Look up by subtype name, then by the season's signature subtype, then the default.
    pub fn resolve(&self, season: &str, subtype: &str) -> PaletteSelection {
        if let Some(subtype) = Subtype::from_name(subtype) {
            return PaletteSelection {
                palette: palette_for(subtype),
                source: PaletteSource::Subtype,
            };
        }

        if let Some(season) = Season::from_name(season) {
            debug!(subtype, %season, "unknown subtype, using season palette");
            return PaletteSelection {
                palette: palette_for(Subtype::signature_of(season)),
                source: PaletteSource::Season,
            };
        }

        debug!(season, subtype, "unknown season and subtype, using default palette");
        PaletteSelection {
            palette: &DEFAULT_PALETTE,
            source: PaletteSource::Default,
        }
    }
}

fn palette_for(subtype: Subtype) -> &'static Palette {
    &PALETTES[subtype.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_hex(value: &str) -> bool {
        value.len() == 7
            && value.starts_with('#')
            && value[1..].chars().all(|c| c.is_ascii_hexdigit())
    }

    #[test]
    fn every_subtype_has_core_and_worst_colors() {
        let resolver = PaletteResolver::new();
        for subtype in Subtype::ALL {
            let selection = resolver.resolve(subtype.season().name(), subtype.name());
            assert_eq!(selection.source, PaletteSource::Subtype);
            assert!(!selection.palette.core.is_empty(), "{subtype}");
            assert!(!selection.palette.worst.is_empty(), "{subtype}");
        }
    }

    #[test]
    fn every_swatch_is_a_hex_color() {
        for palette in PALETTES.iter().chain(std::iter::once(&DEFAULT_PALETTE)) {
            for list in palette.lists() {
                for swatch in list {
                    assert!(is_hex(swatch.hex), "{} -> {}", swatch.name, swatch.hex);
                }
            }
        }
    }

    #[test]
    fn unknown_subtype_uses_season_signature() {
        let selection = PaletteResolver::new().resolve("Autumn", "Dark Autumn");
        assert_eq!(selection.source, PaletteSource::Season);
        assert_eq!(selection.palette, &PALETTES[Subtype::TrueAutumn.index()]);
        assert!(!selection.palette.core.is_empty());
    }

    #[test]
    fn unknown_season_uses_default() {
        let selection = PaletteResolver::new().resolve("Monsoon", "");
        assert_eq!(selection.source, PaletteSource::Default);
        assert!(!selection.palette.core.is_empty());
        assert!(!selection.palette.worst.is_empty());
    }

    #[test]
    fn palette_view_uses_collaborator_field_names() {
        let selection = PaletteResolver::new().resolve("Winter", "True Winter");
        let value = serde_json::to_value(selection).unwrap();
        assert!(value["best_colors"].is_array());
        assert!(value["worst_colors"].is_array());
        assert_eq!(value["source"], "subtype");
        assert_eq!(value["best_colors"][0]["hex"], "#000000");
    }
}
