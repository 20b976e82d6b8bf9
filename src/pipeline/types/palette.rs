use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorSwatch {
    pub name: &'static str,
    pub hex: &'static str,
}

/// Curated color lists for one subtype.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Palette {
    #[serde(rename = "best_colors")]
    pub core: &'static [ColorSwatch],
    #[serde(rename = "accent_colors")]
    pub accent: &'static [ColorSwatch],
    #[serde(rename = "neutral_colors")]
    pub neutral: &'static [ColorSwatch],
    #[serde(rename = "luxury_colors")]
    pub luxury: &'static [ColorSwatch],
    #[serde(rename = "worst_colors")]
    pub worst: &'static [ColorSwatch],
}

impl Palette {
    pub fn lists(&self) -> [&'static [ColorSwatch]; 5] {
        [self.core, self.accent, self.neutral, self.luxury, self.worst]
    }
}

pub(crate) const fn swatch(name: &'static str, hex: &'static str) -> ColorSwatch {
    ColorSwatch { name, hex }
}
