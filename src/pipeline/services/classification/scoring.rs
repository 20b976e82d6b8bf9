use crate::pipeline::domain::archetypes::Archetype;
use crate::pipeline::types::{RawSignal, Subtype};

/// Per-feature weights for the archetype distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceWeights {
    pub skin_l: f64,
    pub skin_b: f64,
    pub hair_l: f64,
    pub eye_l: f64,
    pub chroma: f64,
    pub contrast: f64,
}

pub const DISTANCE_WEIGHTS: DistanceWeights = DistanceWeights {
    skin_l: 1.0,
    skin_b: 3.0,
    hair_l: 1.0,
    eye_l: 1.0,
    chroma: 2.0,
    contrast: 2.0,
};

/// Weighted Euclidean distance between a signal and an archetype reference.
pub fn distance(signal: &RawSignal, archetype: &Archetype) -> f64 {
    let w = DISTANCE_WEIGHTS;
    [
        w.skin_l * (signal.skin_l - archetype.skin_l),
        w.skin_b * (signal.skin_b - archetype.skin_b),
        w.hair_l * (signal.hair_l - archetype.hair_l),
        w.eye_l * (signal.eye_l - archetype.eye_l),
        w.chroma * (signal.chroma - archetype.chroma),
        w.contrast * (signal.contrast - archetype.contrast),
    ]
    .iter()
    .map(|term| term * term)
    .sum::<f64>()
    .sqrt()
}

/// Ranking adjustment for archetypes whose defining trait the signal shows strongly.
/// Never exceeds 5 in magnitude.
pub fn bias(signal: &RawSignal, subtype: Subtype) -> f64 {
    match subtype {
        Subtype::LightSpring | Subtype::LightSummer if signal.skin_l > 80.0 => -4.0,
        Subtype::BrightSpring | Subtype::BrightWinter
            if signal.chroma > 55.0 && signal.contrast > 40.0 =>
        {
            -5.0
        }
        Subtype::DeepAutumn | Subtype::DeepWinter if signal.skin_l < 50.0 => -4.0,
        _ => 0.0,
    }
}

pub fn biased_distance(signal: &RawSignal, archetype: &Archetype) -> f64 {
    distance(signal, archetype) + bias(signal, archetype.subtype)
}
