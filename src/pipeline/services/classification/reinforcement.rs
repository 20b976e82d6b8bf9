//! Ordered correction rules applied after selection.
//!
//! Each rule sees the subtype left by the rules before it. A rule never fires when the current
//! subtype already equals its target, so a second pass over a corrected result changes nothing.

use crate::pipeline::types::{RawSignal, Season, Subtype, Undertone};
use tracing::info;

/// Which current selections a rule looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    Subtype(Subtype),
    OutsideSeason(Season),
    Any,
}

impl RuleScope {
    fn matches(self, current: Subtype) -> bool {
        match self {
            RuleScope::Subtype(subtype) => current == subtype,
            RuleScope::OutsideSeason(season) => current.season() != season,
            RuleScope::Any => true,
        }
    }
}

pub struct Rule {
    pub name: &'static str,
    pub scope: RuleScope,
    pub predicate: fn(&RawSignal) -> bool,
    pub target: Subtype,
    pub confidence: f64,
    pub note: &'static str,
}

impl Rule {
    pub fn fires(&self, current: Subtype, signal: &RawSignal) -> bool {
        current != self.target && self.scope.matches(current) && (self.predicate)(signal)
    }
}

pub static RULES: [Rule; 8] = [
    Rule {
        name: "soft_autumn_depth",
        scope: RuleScope::Subtype(Subtype::SoftAutumn),
        predicate: |s| s.skin_l < 55.0 && s.hair_l < 30.0,
        target: Subtype::DeepAutumn,
        confidence: 0.88,
        note: "Deep skin and dark hair point to Deep Autumn rather than Soft Autumn",
    },
    Rule {
        name: "bright_spring_cool_contrast",
        scope: RuleScope::Subtype(Subtype::BrightSpring),
        // neutral-cool side; the Spring gate already keeps b* >= -2
        predicate: |s| s.skin_b < 0.0 && s.contrast > 40.0,
        target: Subtype::BrightWinter,
        confidence: 0.88,
        note: "Cool-leaning skin with high contrast points to Bright Winter",
    },
    Rule {
        name: "deep_autumn_cool_chroma",
        scope: RuleScope::Subtype(Subtype::DeepAutumn),
        predicate: |s| s.skin_b < 0.0 && s.chroma > 50.0,
        target: Subtype::TrueWinter,
        confidence: 0.88,
        note: "Cool-leaning, saturated coloring points to True Winter",
    },
    Rule {
        name: "overexposure_rescue",
        scope: RuleScope::Subtype(Subtype::SoftAutumn),
        predicate: |s| s.contrast < 20.0 && s.skin_b.abs() < 6.0 && s.skin_l > 75.0,
        target: Subtype::TrueWinter,
        confidence: 0.75,
        note: "Washed-out, near-neutral reading suggests overexposure; treated as True Winter",
    },
    Rule {
        name: "auburn_rescue",
        scope: RuleScope::Subtype(Subtype::LightSpring),
        predicate: |s| s.undertone() == Undertone::Warm && (30.0..=45.0).contains(&s.hair_l),
        target: Subtype::TrueAutumn,
        confidence: 0.88,
        note: "Warm mid-depth hair reads as auburn, pointing to True Autumn",
    },
    Rule {
        name: "cool_high_contrast",
        scope: RuleScope::OutsideSeason(Season::Winter),
        predicate: |s| s.undertone() == Undertone::Cool && s.contrast > 45.0,
        target: Subtype::TrueWinter,
        confidence: 0.90,
        note: "Cool undertone with very high contrast is characteristic of Winter",
    },
    Rule {
        name: "warm_dark_hair",
        scope: RuleScope::Any,
        predicate: |s| s.undertone() == Undertone::Warm && s.hair_l < 20.0 && s.contrast > 35.0,
        target: Subtype::DeepAutumn,
        confidence: 0.92,
        note: "Warm undertone with very dark hair and strong contrast points to Deep Autumn",
    },
    Rule {
        name: "soft_autumn_warmth",
        scope: RuleScope::Subtype(Subtype::SoftAutumn),
        predicate: |s| s.skin_b > 12.0,
        target: Subtype::TrueAutumn,
        confidence: 0.85,
        note: "Strong golden warmth is beyond Soft Autumn; True Autumn fits better",
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct Reinforced {
    pub subtype: Subtype,
    pub confidence: f64,
    pub applied: Vec<&'static Rule>,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("scope", &self.scope)
            .field("target", &self.target)
            .field("confidence", &self.confidence)
            .finish()
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Run the rule chain once over `subtype`.
pub fn reinforce(signal: &RawSignal, subtype: Subtype, confidence: f64) -> Reinforced {
    let mut reinforced = Reinforced {
        subtype,
        confidence,
        applied: Vec::new(),
    };

    for rule in &RULES {
        if rule.fires(reinforced.subtype, signal) {
            info!(
                rule = rule.name,
                from = %reinforced.subtype,
                to = %rule.target,
                "correction rule applied"
            );
            reinforced.subtype = rule.target;
            reinforced.confidence = rule.confidence;
            reinforced.applied.push(rule);
        }
    }

    reinforced
}
