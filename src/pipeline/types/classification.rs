use super::raw_signal::RawSignal;
use super::season::{Season, Subtype, Undertone};
use serde::{Deserialize, Serialize};

/// How the subtype was picked before corrections ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// Minimum-distance archetype among those that passed every gate.
    Gated,
    /// No archetype passed the gates; nearest archetype overall.
    NearestFallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub season: Season,
    #[serde(rename = "season_subtype")]
    pub subtype: Subtype,
    pub undertone: Undertone,
    #[serde(rename = "confidence_score")]
    pub confidence: f64,
    pub explanation: Vec<String>,
    #[serde(rename = "debug_info")]
    pub signal: RawSignal,
    pub selection: Selection,
    pub corrections: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_collaborator_field_names() {
        let result = ClassificationResult {
            season: Season::Winter,
            subtype: Subtype::TrueWinter,
            undertone: Undertone::Cool,
            confidence: 0.95,
            explanation: vec!["reason".to_string()],
            signal: RawSignal::from_measurements([60.0, 10.0, -4.0], 15.0, 25.0),
            selection: Selection::Gated,
            corrections: Vec::new(),
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["season"], "Winter");
        assert_eq!(value["season_subtype"], "True Winter");
        assert_eq!(value["undertone"], "Cool");
        assert_eq!(value["confidence_score"], 0.95);
        assert_eq!(value["debug_info"]["hair_l"], 15.0);
        assert_eq!(value["selection"], "gated");
    }
}
