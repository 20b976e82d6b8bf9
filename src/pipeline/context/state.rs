use crate::pipeline::services::image::FeatureExtraction;
use crate::pipeline::types::{ClassificationResult, QualityReport};

// Markers to track the stage of a photo analysis
pub struct ReceivedState;

pub struct QualityCheckedState {
    pub(super) quality: QualityReport,
}

pub struct ExtractedState {
    pub(super) quality: QualityReport,
    pub(super) extraction: FeatureExtraction,
}

pub struct ClassifiedState {
    pub quality: QualityReport,
    pub extraction: FeatureExtraction,
    pub classification: ClassificationResult,
}

pub trait ProcessingState: 'static {
    fn state_name() -> &'static str;
}

impl ProcessingState for ReceivedState {
    fn state_name() -> &'static str {
        "Received"
    }
}

impl ProcessingState for QualityCheckedState {
    fn state_name() -> &'static str {
        "QualityChecked"
    }
}

impl ProcessingState for ExtractedState {
    fn state_name() -> &'static str {
        "Extracted"
    }
}

impl ProcessingState for ClassifiedState {
    fn state_name() -> &'static str {
        "Classified"
    }
}
