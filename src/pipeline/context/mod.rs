pub mod analysis_context;
pub mod metrics;
pub mod state;

pub use analysis_context::AnalysisContext;
pub use metrics::{StageMetrics, StageTimings};
pub use state::{ClassifiedState, ProcessingState, QualityCheckedState, ReceivedState};
