use super::gating::gate;
use super::reinforcement::reinforce;
use super::scoring::{biased_distance, distance};
use crate::pipeline::domain::archetypes::{archetype_for, Archetype, ARCHETYPES};
use crate::pipeline::services::interpretation::explain;
use crate::pipeline::types::{ClassificationResult, RawSignal, Selection, Subtype};
use tracing::{debug, info};

pub const GATED_CONFIDENCE: f64 = 0.95;
pub const FALLBACK_CONFIDENCE: f64 = 0.30;

/// Gate, score, select and correct a season/subtype for one signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArchetypeClassifier;

impl ArchetypeClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, signal: &RawSignal) -> ClassificationResult {
        let (selected, selection, confidence) = self.select(signal);
        let reinforced = reinforce(signal, selected, confidence);

        let explanation = explain(signal, reinforced.subtype, selection, &reinforced.applied);
        let corrections = reinforced
            .applied
            .iter()
            .map(|rule| rule.name.to_string())
            .collect();

        info!(
            subtype = %reinforced.subtype,
            confidence = reinforced.confidence,
            ?selection,
            "signal classified"
        );

        ClassificationResult {
            season: reinforced.subtype.season(),
            subtype: reinforced.subtype,
            undertone: signal.undertone(),
            confidence: reinforced.confidence,
            explanation,
            signal: *signal,
            selection,
            corrections,
        }
    }

    fn select(&self, signal: &RawSignal) -> (Subtype, Selection, f64) {
        let gating = gate(signal);

        let gated = nearest(
            gating.survivors().map(archetype_for),
            |archetype| biased_distance(signal, archetype),
        );
        if let Some(archetype) = gated {
            return (archetype.subtype, Selection::Gated, GATED_CONFIDENCE);
        }

        debug!(
            failures = ?gating.verdicts(),
            "every archetype gated out, using nearest overall"
        );
        // ARCHETYPES is never empty
        let fallback = nearest(ARCHETYPES.iter(), |archetype| distance(signal, archetype))
            .map_or(Subtype::ALL[0], |archetype| archetype.subtype);
        (fallback, Selection::NearestFallback, FALLBACK_CONFIDENCE)
    }
}

/// Lowest-scoring archetype; the first one wins a tie.
fn nearest<'a>(
    candidates: impl Iterator<Item = &'a Archetype>,
    score: impl Fn(&Archetype) -> f64,
) -> Option<&'a Archetype> {
    candidates
        .map(|archetype| (archetype, score(archetype)))
        .fold(None, |best, (archetype, value)| match best {
            Some((_, best_value)) if best_value <= value => best,
            _ => Some((archetype, value)),
        })
        .map(|(archetype, _)| archetype)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::types::{ManualSignal, Season, Undertone};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn signal(skin_l: f64, skin_b: f64, chroma: f64, hair_l: f64, eye_l: f64) -> RawSignal {
        RawSignal::from(ManualSignal {
            skin_l,
            skin_b,
            chroma,
            hair_l,
            eye_l,
        })
    }

    #[test]
    fn cool_contrasty_profile_is_true_winter() {
        let result = ArchetypeClassifier::new().classify(&signal(60.0, -4.0, 45.0, 15.0, 25.0));
        assert_eq!(result.season, Season::Winter);
        assert_eq!(result.subtype, Subtype::TrueWinter);
        assert_eq!(result.confidence, 0.95);
        assert_eq!(result.undertone, Undertone::Cool);
        assert_eq!(result.selection, Selection::Gated);
        assert!(result.corrections.is_empty());
    }

    #[test]
    fn warm_deep_profile_is_deep_autumn() {
        let result = ArchetypeClassifier::new().classify(&signal(45.0, 15.0, 30.0, 20.0, 25.0));
        assert_eq!(result.season, Season::Autumn);
        assert_eq!(result.subtype, Subtype::DeepAutumn);
        assert!([0.88, 0.92, 0.95].contains(&result.confidence));
    }

    #[test]
    fn contradictory_profile_falls_back_to_nearest() {
        let s = signal(70.0, -6.0, 10.0, 30.0, 40.0);
        let result = ArchetypeClassifier::new().classify(&s);

        let expected = ARCHETYPES
            .iter()
            .min_by(|a, b| distance(&s, a).total_cmp(&distance(&s, b)))
            .unwrap();
        assert_eq!(result.selection, Selection::NearestFallback);
        assert_eq!(result.subtype, expected.subtype);
        assert_eq!(result.confidence, 0.30);
        assert!(result
            .explanation
            .iter()
            .any(|line| line.contains("nearest profile")));
    }

    #[test]
    fn soft_autumn_pick_is_corrected_to_deep_autumn() {
        let result = ArchetypeClassifier::new().classify(&signal(52.0, 8.0, 20.0, 28.0, 35.0));
        assert_eq!(result.subtype, Subtype::DeepAutumn);
        assert_eq!(result.confidence, 0.88);
        assert_eq!(result.corrections, vec!["soft_autumn_depth".to_string()]);
    }

    #[test]
    fn cool_leaning_bright_spring_is_moved_to_bright_winter() {
        let classifier = ArchetypeClassifier::new();
        let result = classifier.classify(&signal(70.0, -1.0, 48.0, 15.0, 80.0));
        assert_eq!(result.selection, Selection::Gated);
        assert_eq!(result.subtype, Subtype::BrightWinter);
        assert_eq!(result.confidence, 0.88);
        assert_eq!(result.corrections, vec!["bright_spring_cool_contrast".to_string()]);

        let warm_side = classifier.classify(&signal(70.0, 0.5, 48.0, 15.0, 80.0));
        assert_eq!(warm_side.subtype, Subtype::BrightSpring);
        assert_eq!(warm_side.confidence, 0.95);
        assert!(warm_side.corrections.is_empty());
    }

    #[test]
    fn cool_leaning_saturated_deep_autumn_is_moved_to_true_winter() {
        let classifier = ArchetypeClassifier::new();
        let result = classifier.classify(&signal(53.0, -1.0, 52.0, 25.0, 30.0));
        assert_eq!(result.selection, Selection::Gated);
        assert_eq!(result.subtype, Subtype::TrueWinter);
        assert_eq!(result.confidence, 0.88);
        assert_eq!(result.corrections, vec!["deep_autumn_cool_chroma".to_string()]);

        let warm_side = classifier.classify(&signal(53.0, 0.5, 52.0, 25.0, 30.0));
        assert_eq!(warm_side.subtype, Subtype::DeepAutumn);
        assert!(warm_side.corrections.is_empty());
    }

    #[test]
    fn light_profiles_land_in_light_subtypes() {
        let classifier = ArchetypeClassifier::new();
        let spring = classifier.classify(&signal(86.0, 12.0, 30.0, 76.0, 68.0));
        assert_eq!(spring.subtype, Subtype::LightSpring);
        assert_eq!(spring.confidence, 0.95);

        let summer = classifier.classify(&signal(84.0, -3.0, 18.0, 72.0, 65.0));
        assert_eq!(summer.subtype, Subtype::LightSummer);
    }

    #[test]
    fn classification_is_total_and_deterministic() {
        let classifier = ArchetypeClassifier::new();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..2_000 {
            let s = signal(
                rng.random_range(0.0..100.0),
                rng.random_range(-20.0..40.0),
                rng.random_range(0.0..80.0),
                rng.random_range(0.0..100.0),
                rng.random_range(0.0..100.0),
            );
            let first = classifier.classify(&s);
            let second = classifier.classify(&s);
            assert_eq!(first, second);
            assert_eq!(first.season, first.subtype.season());
            assert!((0.0..=1.0).contains(&first.confidence));
        }
    }

    #[test]
    fn ties_go_to_table_order() {
        let first = &ARCHETYPES[0];
        let second = &ARCHETYPES[1];
        let picked = nearest([first, second].into_iter(), |_| 1.0).unwrap();
        assert_eq!(picked.subtype, first.subtype);
    }
}
