pub mod analysis_pipeline;
pub mod guidelines;
pub mod outcome;
pub mod request;
pub mod service;

pub use analysis_pipeline::{adjust_confidence, AnalysisPipeline};
pub use guidelines::UserGuidelines;
pub use outcome::{AnalysisFailure, AnalysisOutcome, AnalysisReport, FailureKind, SignalSource};
pub use request::AnalysisRequest;
pub use service::ClassificationService;
