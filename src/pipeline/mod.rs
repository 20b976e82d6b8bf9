pub mod context;
pub mod domain;
pub mod orchestration;
pub mod services;
pub mod types;

pub use orchestration::{AnalysisOutcome, AnalysisPipeline, AnalysisRequest, ClassificationService};
pub use types::{ClassificationResult, RawSignal, Season, Subtype, Undertone};
