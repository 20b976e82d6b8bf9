use crate::pipeline::domain::archetypes::{season_failures, SUBTYPE_GATES};
use crate::pipeline::types::{RawSignal, Subtype};

/// Gate outcome for a single archetype.
#[derive(Debug, Clone, PartialEq)]
pub struct GateVerdict {
    pub subtype: Subtype,
    pub failures: Vec<&'static str>,
}

impl GateVerdict {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Result of running every archetype through the season constraints and subtype windows.
#[derive(Debug, Clone)]
pub struct GatingOutcome {
    verdicts: Vec<GateVerdict>,
}

impl GatingOutcome {
    /// Surviving subtypes, in table order.
    pub fn survivors(&self) -> impl Iterator<Item = Subtype> + '_ {
        self.verdicts
            .iter()
            .filter(|verdict| verdict.passed())
            .map(|verdict| verdict.subtype)
    }

    pub fn is_exhausted(&self) -> bool {
        !self.verdicts.iter().any(GateVerdict::passed)
    }

    pub fn verdicts(&self) -> &[GateVerdict] {
        &self.verdicts
    }
}

pub fn gate(signal: &RawSignal) -> GatingOutcome {
    let verdicts = SUBTYPE_GATES
        .iter()
        .map(|subtype_gate| {
            let mut failures = season_failures(subtype_gate.subtype.season(), signal);
            failures.extend(subtype_gate.failures(signal));
            GateVerdict {
                subtype: subtype_gate.subtype,
                failures,
            }
        })
        .collect();

    GatingOutcome { verdicts }
}
