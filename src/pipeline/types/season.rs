use serde::{Deserialize, Serialize};
use std::fmt;

/// Undertone bounds on skin b*. Above `WARM_UNDERTONE_MIN_B` reads warm, below
/// `COOL_UNDERTONE_MAX_B` reads cool, anything between is neutral.
pub const WARM_UNDERTONE_MIN_B: f64 = 4.0;
pub const COOL_UNDERTONE_MAX_B: f64 = -2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [
        Season::Spring,
        Season::Summer,
        Season::Autumn,
        Season::Winter,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|season| season.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The twelve canonical subtypes, three per season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subtype {
    #[serde(rename = "True Winter")]
    TrueWinter,
    #[serde(rename = "Deep Winter")]
    DeepWinter,
    #[serde(rename = "Bright Winter")]
    BrightWinter,
    #[serde(rename = "True Summer")]
    TrueSummer,
    #[serde(rename = "Light Summer")]
    LightSummer,
    #[serde(rename = "Soft Summer")]
    SoftSummer,
    #[serde(rename = "True Autumn")]
    TrueAutumn,
    #[serde(rename = "Deep Autumn")]
    DeepAutumn,
    #[serde(rename = "Soft Autumn")]
    SoftAutumn,
    #[serde(rename = "True Spring")]
    TrueSpring,
    #[serde(rename = "Light Spring")]
    LightSpring,
    #[serde(rename = "Bright Spring")]
    BrightSpring,
}

impl Subtype {
    pub const ALL: [Subtype; 12] = [
        Subtype::TrueWinter,
        Subtype::DeepWinter,
        Subtype::BrightWinter,
        Subtype::TrueSummer,
        Subtype::LightSummer,
        Subtype::SoftSummer,
        Subtype::TrueAutumn,
        Subtype::DeepAutumn,
        Subtype::SoftAutumn,
        Subtype::TrueSpring,
        Subtype::LightSpring,
        Subtype::BrightSpring,
    ];

    pub fn season(self) -> Season {
        match self {
            Subtype::TrueWinter | Subtype::DeepWinter | Subtype::BrightWinter => Season::Winter,
            Subtype::TrueSummer | Subtype::LightSummer | Subtype::SoftSummer => Season::Summer,
            Subtype::TrueAutumn | Subtype::DeepAutumn | Subtype::SoftAutumn => Season::Autumn,
            Subtype::TrueSpring | Subtype::LightSpring | Subtype::BrightSpring => Season::Spring,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Subtype::TrueWinter => "True Winter",
            Subtype::DeepWinter => "Deep Winter",
            Subtype::BrightWinter => "Bright Winter",
            Subtype::TrueSummer => "True Summer",
            Subtype::LightSummer => "Light Summer",
            Subtype::SoftSummer => "Soft Summer",
            Subtype::TrueAutumn => "True Autumn",
            Subtype::DeepAutumn => "Deep Autumn",
            Subtype::SoftAutumn => "Soft Autumn",
            Subtype::TrueSpring => "True Spring",
            Subtype::LightSpring => "Light Spring",
            Subtype::BrightSpring => "Bright Spring",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|subtype| subtype.name().eq_ignore_ascii_case(name.trim()))
    }

    /// The "True" subtype that stands in for the whole season.
    pub fn signature_of(season: Season) -> Self {
        match season {
            Season::Winter => Subtype::TrueWinter,
            Season::Summer => Subtype::TrueSummer,
            Season::Autumn => Subtype::TrueAutumn,
            Season::Spring => Subtype::TrueSpring,
        }
    }

    /// Position in `ALL`, used to index the static tables.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Subtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Undertone {
    Warm,
    Cool,
    Neutral,
}

impl Undertone {
    pub fn from_skin_b(skin_b: f64) -> Self {
        if skin_b > WARM_UNDERTONE_MIN_B {
            Undertone::Warm
        } else if skin_b < COOL_UNDERTONE_MAX_B {
            Undertone::Cool
        } else {
            Undertone::Neutral
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Undertone::Warm => "Warm",
            Undertone::Cool => "Cool",
            Undertone::Neutral => "Neutral",
        }
    }
}
