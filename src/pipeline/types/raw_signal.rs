use super::season::Undertone;
use serde::{Deserialize, Serialize};

/// Perceptual color signal for one face. Lightness values are CIE L* in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawSignal {
    pub skin_l: f64,
    pub skin_a: f64,
    pub skin_b: f64,
    pub hair_l: f64,
    pub eye_l: f64,
    pub chroma: f64,
    pub contrast: f64,
}

impl RawSignal {
    /// Build a signal from measured skin L*a*b* plus hair and eye lightness.
    pub fn from_measurements(skin_lab: [f64; 3], hair_l: f64, eye_l: f64) -> Self {
        let [skin_l, skin_a, skin_b] = skin_lab;
        Self {
            skin_l,
            skin_a,
            skin_b,
            hair_l,
            eye_l,
            chroma: skin_a.hypot(skin_b),
            contrast: lightness_contrast(skin_l, hair_l, eye_l),
        }
    }

    pub fn undertone(&self) -> Undertone {
        Undertone::from_skin_b(self.skin_b)
    }
}

/// Weighted lightness separation: skin/hair 50%, skin/eyes 30%, hair/eyes 20%.
pub fn lightness_contrast(skin_l: f64, hair_l: f64, eye_l: f64) -> f64 {
    0.5 * (skin_l - hair_l).abs() + 0.3 * (skin_l - eye_l).abs() + 0.2 * (hair_l - eye_l).abs()
}

/// Hand-entered signal used for testing and offline runs. Chroma is raised to at least |b*|.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManualSignal {
    pub skin_l: f64,
    pub skin_b: f64,
    pub chroma: f64,
    pub hair_l: f64,
    pub eye_l: f64,
}

impl Default for ManualSignal {
    fn default() -> Self {
        Self {
            skin_l: 70.0,
            skin_b: 10.0,
            chroma: 40.0,
            hair_l: 30.0,
            eye_l: 30.0,
        }
    }
}

impl From<ManualSignal> for RawSignal {
    fn from(manual: ManualSignal) -> Self {
        // chroma can never be below |b*|
        let chroma = manual.chroma.max(manual.skin_b.abs());
        // a* is whatever remains of the chroma once b* is accounted for
        let skin_a = (chroma * chroma - manual.skin_b * manual.skin_b)
            .max(0.0)
            .sqrt();
        RawSignal {
            skin_l: manual.skin_l,
            skin_a,
            skin_b: manual.skin_b,
            hair_l: manual.hair_l,
            eye_l: manual.eye_l,
            chroma,
            contrast: lightness_contrast(manual.skin_l, manual.hair_l, manual.eye_l),
        }
    }
}
