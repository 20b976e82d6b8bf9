pub mod classifier;
pub mod gating;
pub mod reinforcement;
pub mod scoring;

pub use classifier::{ArchetypeClassifier, FALLBACK_CONFIDENCE, GATED_CONFIDENCE};
pub use reinforcement::{Rule, RuleScope, RULES};
