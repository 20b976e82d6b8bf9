//! Canonical archetype references and gating windows.
//!
//! This is the only place thresholds for the classifier live. The reference signals are the
//! "ideal" profile of each subtype; the gates decide which subtypes a signal may be matched to at
//! all. Reference contrast values follow the weighted lightness-contrast formula.

use crate::pipeline::types::{RawSignal, Season, Subtype, Undertone};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Archetype {
    pub season: Season,
    pub subtype: Subtype,
    pub skin_l: f64,
    pub skin_b: f64,
    pub hair_l: f64,
    pub eye_l: f64,
    pub chroma: f64,
    pub contrast: f64,
}

const fn archetype(
    subtype: Subtype,
    season: Season,
    [skin_l, skin_b, hair_l, eye_l, chroma, contrast]: [f64; 6],
) -> Archetype {
    Archetype {
        season,
        subtype,
        skin_l,
        skin_b,
        hair_l,
        eye_l,
        chroma,
        contrast,
    }
}

/// Reference profiles in `Subtype::ALL` order: skin_l, skin_b, hair_l, eye_l, chroma, contrast.
pub static ARCHETYPES: [Archetype; 12] = [
    archetype(Subtype::TrueWinter, Season::Winter, [60.0, -4.0, 15.0, 25.0, 45.0, 35.0]),
    archetype(Subtype::DeepWinter, Season::Winter, [42.0, -1.0, 10.0, 18.0, 40.0, 25.0]),
    archetype(Subtype::BrightWinter, Season::Winter, [72.0, -5.0, 14.0, 55.0, 55.0, 42.0]),
    archetype(Subtype::TrueSummer, Season::Summer, [70.0, -4.0, 55.0, 50.0, 25.0, 15.0]),
    archetype(Subtype::LightSummer, Season::Summer, [82.0, -3.0, 72.0, 65.0, 20.0, 12.0]),
    archetype(Subtype::SoftSummer, Season::Summer, [64.0, 1.0, 48.0, 45.0, 18.0, 14.0]),
    archetype(Subtype::TrueAutumn, Season::Autumn, [60.0, 18.0, 32.0, 35.0, 32.0, 22.0]),
    archetype(Subtype::DeepAutumn, Season::Autumn, [45.0, 15.0, 20.0, 25.0, 30.0, 20.0]),
    archetype(Subtype::SoftAutumn, Season::Autumn, [66.0, 9.0, 48.0, 45.0, 20.0, 16.0]),
    archetype(Subtype::TrueSpring, Season::Spring, [72.0, 18.0, 55.0, 55.0, 40.0, 14.0]),
    archetype(Subtype::LightSpring, Season::Spring, [85.0, 12.0, 75.0, 68.0, 30.0, 12.0]),
    archetype(Subtype::BrightSpring, Season::Spring, [70.0, 14.0, 25.0, 60.0, 50.0, 32.0]),
];

pub fn archetype_for(subtype: Subtype) -> &'static Archetype {
    &ARCHETYPES[subtype.index()]
}

// Season-level constraints.
pub const WINTER_MIN_CHROMA: f64 = 30.0;
pub const SUMMER_MAX_CONTRAST: f64 = 25.0;
pub const SPRING_MIN_CONTRAST: f64 = 10.0;
pub const SPRING_MIN_SKIN_L: f64 = 55.0;

/// Inclusive numeric window; an open side is `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Window {
    pub const ANY: Window = Window {
        min: None,
        max: None,
    };

    pub const fn at_least(min: f64) -> Self {
        Window {
            min: Some(min),
            max: None,
        }
    }

    pub const fn at_most(max: f64) -> Self {
        Window {
            min: None,
            max: Some(max),
        }
    }

    pub const fn between(min: f64, max: f64) -> Self {
        Window {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

/// Per-subtype windows checked after the season constraints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubtypeGate {
    pub subtype: Subtype,
    pub skin_l: Window,
    pub skin_b: Window,
    pub hair_l: Window,
    pub chroma: Window,
    pub contrast: Window,
}

const fn gate(subtype: Subtype) -> SubtypeGate {
    SubtypeGate {
        subtype,
        skin_l: Window::ANY,
        skin_b: Window::ANY,
        hair_l: Window::ANY,
        chroma: Window::ANY,
        contrast: Window::ANY,
    }
}

pub static SUBTYPE_GATES: [SubtypeGate; 12] = [
    SubtypeGate {
        contrast: Window::at_least(28.0),
        chroma: Window::at_least(38.0),
        skin_b: Window::at_most(0.0),
        ..gate(Subtype::TrueWinter)
    },
    SubtypeGate {
        skin_l: Window::at_most(50.0),
        hair_l: Window::at_most(25.0),
        ..gate(Subtype::DeepWinter)
    },
    SubtypeGate {
        skin_l: Window::at_least(62.0),
        chroma: Window::at_least(50.0),
        contrast: Window::at_least(38.0),
        ..gate(Subtype::BrightWinter)
    },
    SubtypeGate {
        skin_l: Window::between(55.0, 80.0),
        chroma: Window::at_most(35.0),
        skin_b: Window::at_most(0.0),
        ..gate(Subtype::TrueSummer)
    },
    SubtypeGate {
        skin_l: Window::at_least(75.0),
        chroma: Window::at_most(30.0),
        ..gate(Subtype::LightSummer)
    },
    SubtypeGate {
        chroma: Window::at_most(25.0),
        ..gate(Subtype::SoftSummer)
    },
    SubtypeGate {
        skin_l: Window::between(50.0, 72.0),
        skin_b: Window::at_least(14.0),
        ..gate(Subtype::TrueAutumn)
    },
    SubtypeGate {
        skin_l: Window::at_most(55.0),
        hair_l: Window::at_most(30.0),
        ..gate(Subtype::DeepAutumn)
    },
    SubtypeGate {
        chroma: Window::at_most(28.0),
        contrast: Window::at_most(25.0),
        ..gate(Subtype::SoftAutumn)
    },
    SubtypeGate {
        skin_l: Window::between(60.0, 80.0),
        chroma: Window::at_least(35.0),
        hair_l: Window::at_least(40.0),
        ..gate(Subtype::TrueSpring)
    },
    SubtypeGate {
        skin_l: Window::at_least(76.0),
        chroma: Window::at_least(20.0),
        contrast: Window::at_most(25.0),
        ..gate(Subtype::LightSpring)
    },
    SubtypeGate {
        chroma: Window::at_least(45.0),
        contrast: Window::at_least(25.0),
        ..gate(Subtype::BrightSpring)
    },
];

pub fn gate_for(subtype: Subtype) -> &'static SubtypeGate {
    &SUBTYPE_GATES[subtype.index()]
}

/// Season-level constraint failures for `signal`; empty means the season is open.
pub fn season_failures(season: Season, signal: &RawSignal) -> Vec<&'static str> {
    let undertone = signal.undertone();
    let mut failures = Vec::new();
    match season {
        Season::Winter => {
            if undertone == Undertone::Warm {
                failures.push("winter: warm undertone");
            }
            if signal.chroma < WINTER_MIN_CHROMA {
                failures.push("winter: chroma below floor");
            }
        }
        Season::Summer => {
            if undertone == Undertone::Warm {
                failures.push("summer: warm undertone");
            }
            if signal.contrast > SUMMER_MAX_CONTRAST {
                failures.push("summer: contrast too high");
            }
        }
        Season::Spring => {
            if undertone == Undertone::Cool {
                failures.push("spring: cool undertone");
            }
            if signal.contrast < SPRING_MIN_CONTRAST {
                failures.push("spring: contrast too low");
            }
            if signal.skin_l < SPRING_MIN_SKIN_L {
                failures.push("spring: skin too deep");
            }
        }
        Season::Autumn => {
            if undertone == Undertone::Cool {
                failures.push("autumn: cool undertone");
            }
        }
    }
    failures
}

impl SubtypeGate {
    /// Window failures for `signal`; empty means every window holds.
    pub fn failures(&self, signal: &RawSignal) -> Vec<&'static str> {
        let checks = [
            (self.skin_l, signal.skin_l, "skin_l outside window"),
            (self.skin_b, signal.skin_b, "skin_b outside window"),
            (self.hair_l, signal.hair_l, "hair_l outside window"),
            (self.chroma, signal.chroma, "chroma outside window"),
            (self.contrast, signal.contrast, "contrast outside window"),
        ];
        checks
            .into_iter()
            .filter(|(window, value, _)| !window.contains(*value))
            .map(|(_, _, reason)| reason)
            .collect()
    }
}
