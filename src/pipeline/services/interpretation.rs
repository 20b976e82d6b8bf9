//! Human-readable labels and explanation sentences for a classified signal.

use crate::pipeline::services::classification::reinforcement::Rule;
use crate::pipeline::types::{RawSignal, Selection, Subtype, Undertone};
use serde::Serialize;

/// Named bin for a single feature's lightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureLabel {
    pub name: &'static str,
    pub hex: &'static str,
    pub depth: &'static str,
}

const fn label(name: &'static str, hex: &'static str, depth: &'static str) -> FeatureLabel {
    FeatureLabel { name, hex, depth }
}

// (upper bound exclusive, label); the last entry catches everything above.
const SKIN_BINS: [(f64, FeatureLabel); 5] = [
    (45.0, label("Deep", "#5C3A21", "deep")),
    (60.0, label("Medium-Deep", "#8D5524", "medium-deep")),
    (75.0, label("Medium", "#C68642", "medium")),
    (88.0, label("Medium-Light", "#E0AC69", "medium-light")),
    (f64::INFINITY, label("Light", "#F1C27D", "light")),
];

const HAIR_BINS: [(f64, FeatureLabel); 5] = [
    (20.0, label("Soft Black", "#1C1C1C", "deep")),
    (40.0, label("Dark Brown", "#3B2F2F", "medium-deep")),
    (60.0, label("Medium Brown", "#6A4E42", "medium")),
    (80.0, label("Light Brown / Dark Blonde", "#A67B5B", "medium-light")),
    (f64::INFINITY, label("Blonde", "#D6B370", "light")),
];

const EYE_BINS: [(f64, FeatureLabel); 4] = [
    (25.0, label("Deep Brown", "#3D2314", "deep")),
    (45.0, label("Medium Brown", "#634E34", "medium")),
    (65.0, label("Light Brown / Hazel", "#8E7618", "light")),
    (f64::INFINITY, label("Light Blue / Green", "#6CA0B8", "light")),
];

fn bin(bins: &[(f64, FeatureLabel)], lightness: f64) -> FeatureLabel {
    bins.iter()
        .find(|(upper, _)| lightness < *upper)
        .or(bins.last())
        .map(|(_, found)| *found)
        .unwrap_or(label("Unknown", "#808080", "medium"))
}

pub fn skin_label(skin_l: f64) -> FeatureLabel {
    bin(&SKIN_BINS, skin_l)
}

pub fn hair_label(hair_l: f64) -> FeatureLabel {
    bin(&HAIR_BINS, hair_l)
}

pub fn eye_label(eye_l: f64) -> FeatureLabel {
    bin(&EYE_BINS, eye_l)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interpretation {
    pub skin: FeatureLabel,
    pub hair: FeatureLabel,
    pub eyes: FeatureLabel,
}

impl Interpretation {
    pub fn of(signal: &RawSignal) -> Self {
        Self {
            skin: skin_label(signal.skin_l),
            hair: hair_label(signal.hair_l),
            eyes: eye_label(signal.eye_l),
        }
    }
}

/// Explanation lines in a fixed order: undertone, depth, contrast, chroma, closest
/// archetype, then any fallback or correction notes.
pub fn explain(
    signal: &RawSignal,
    subtype: Subtype,
    selection: Selection,
    corrections: &[&Rule],
) -> Vec<String> {
    let mut lines = Vec::with_capacity(6 + corrections.len());

    lines.push(
        match signal.undertone() {
            Undertone::Warm => "Warm undertone: golden or peachy skin cast",
            Undertone::Cool => "Cool undertone: pink or bluish skin cast",
            Undertone::Neutral => "Neutral undertone: balanced between warm and cool",
        }
        .to_string(),
    );

    lines.push(
        if signal.skin_l < 50.0 {
            "Deep overall coloring"
        } else if signal.skin_l > 80.0 {
            "Light overall coloring"
        } else {
            "Medium overall depth"
        }
        .to_string(),
    );

    lines.push(
        if signal.contrast > 40.0 {
            "High contrast between skin, hair and eyes"
        } else if signal.contrast < 20.0 {
            "Low contrast between skin, hair and eyes"
        } else {
            "Medium contrast between skin, hair and eyes"
        }
        .to_string(),
    );

    lines.push(
        if signal.chroma > 50.0 {
            "Clear, saturated coloring"
        } else if signal.chroma < 25.0 {
            "Soft, muted coloring"
        } else {
            "Moderately saturated coloring"
        }
        .to_string(),
    );

    lines.push(format!("Profile closest to {subtype} archetype"));

    if selection == Selection::NearestFallback {
        lines.push(
            "No archetype matched every constraint; nearest profile used with low confidence"
                .to_string(),
        );
    }
    lines.extend(corrections.iter().map(|rule| format!("Adjusted: {}", rule.note)));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::services::classification::reinforcement::RULES;

    #[test]
    fn bins_use_inclusive_lower_bounds() {
        assert_eq!(skin_label(44.9).name, "Deep");
        assert_eq!(skin_label(45.0).name, "Medium-Deep");
        assert_eq!(skin_label(88.0).name, "Light");
        assert_eq!(hair_label(19.9).name, "Soft Black");
        assert_eq!(hair_label(80.0).name, "Blonde");
        assert_eq!(eye_label(25.0).name, "Medium Brown");
        assert_eq!(eye_label(99.0).name, "Light Blue / Green");
    }

    #[test]
    fn explanation_order_is_fixed() {
        let signal = RawSignal::from_measurements([60.0, 44.8, -4.0], 15.0, 25.0);
        let lines = explain(&signal, Subtype::TrueWinter, Selection::Gated, &[]);
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Cool undertone"));
        assert_eq!(lines[1], "Medium overall depth");
        assert_eq!(lines[2], "Medium contrast between skin, hair and eyes");
        assert_eq!(lines[3], "Moderately saturated coloring");
        assert_eq!(lines[4], "Profile closest to True Winter archetype");
    }

    #[test]
    fn fallback_and_corrections_append_notes() {
        let signal = RawSignal::from_measurements([52.0, 4.0, 8.0], 28.0, 35.0);
        let lines = explain(
            &signal,
            Subtype::DeepAutumn,
            Selection::NearestFallback,
            &[&RULES[0]],
        );
        assert_eq!(lines.len(), 7);
        assert!(lines[5].contains("nearest profile"));
        assert!(lines[6].starts_with("Adjusted:"));
    }
}
