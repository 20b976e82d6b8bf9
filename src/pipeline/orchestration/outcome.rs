use crate::pipeline::context::StageTimings;
use crate::pipeline::services::image::analysis::ExtractionNote;
use crate::pipeline::services::interpretation::Interpretation;
use crate::pipeline::services::palette_resolver::PaletteSelection;
use crate::pipeline::types::{ClassificationResult, QualityReport, Season};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalSource {
    Photo,
    Manual,
    Synthetic { cohort: Season },
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub request_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub source: SignalSource,
    #[serde(flatten)]
    pub classification: ClassificationResult,
    /// Classifier confidence before the photo-quality adjustment.
    pub original_confidence: Option<f64>,
    pub interpretation: Interpretation,
    pub palette: PaletteSelection,
    pub quality: Option<QualityReport>,
    pub extraction_notes: Vec<ExtractionNote>,
    pub timings: StageTimings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    LowQualityPhoto,
    NoFaceDetected,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisFailure {
    pub request_id: Uuid,
    pub kind: FailureKind,
    pub message: String,
    pub quality: QualityReport,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    Success(Box<AnalysisReport>),
    Rejected(AnalysisFailure),
}

impl AnalysisOutcome {
    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            AnalysisOutcome::Success(report) => Some(report),
            AnalysisOutcome::Rejected(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&AnalysisFailure> {
        match self {
            AnalysisOutcome::Success(_) => None,
            AnalysisOutcome::Rejected(failure) => Some(failure),
        }
    }
}
