use crate::common::Photo;
use crate::pipeline::context::metrics::StageMetrics;
use crate::pipeline::context::state::{
    ClassifiedState, ExtractedState, QualityCheckedState, ReceivedState,
};
use crate::pipeline::services::image::FeatureExtraction;
use crate::pipeline::types::{ClassificationResult, QualityReport};
use std::time::{Duration, Instant};

// AnalysisContext with compile-time stage tracking via the state parameter
pub struct AnalysisContext<S> {
    photo: Photo,
    metrics: StageMetrics,
    processing_start: Instant,
    stage_start: Instant,
    state: S,
}

impl<S> AnalysisContext<S> {
    pub fn photo(&self) -> &Photo {
        &self.photo
    }

    pub fn metrics(&self) -> &StageMetrics {
        &self.metrics
    }

    pub fn elapsed(&self) -> Duration {
        self.processing_start.elapsed()
    }

    fn advance<T>(
        self,
        next: impl FnOnce(S) -> T,
        record: fn(&mut StageMetrics, Duration),
    ) -> AnalysisContext<T> {
        let mut metrics = self.metrics;
        record(&mut metrics, self.stage_start.elapsed());
        AnalysisContext {
            photo: self.photo,
            metrics,
            processing_start: self.processing_start,
            stage_start: Instant::now(),
            state: next(self.state),
        }
    }
}

impl AnalysisContext<ReceivedState> {
    pub fn new(photo: Photo) -> Self {
        let now = Instant::now();
        Self {
            photo,
            metrics: StageMetrics::default(),
            processing_start: now,
            stage_start: now,
            state: ReceivedState,
        }
    }

    pub fn into_quality_checked(
        self,
        quality: QualityReport,
    ) -> AnalysisContext<QualityCheckedState> {
        self.advance(
            |_| QualityCheckedState { quality },
            StageMetrics::record_quality_check,
        )
    }
}

impl AnalysisContext<QualityCheckedState> {
    pub fn quality(&self) -> &QualityReport {
        &self.state.quality
    }

    /// Give up on the photo, keeping the quality report.
    pub fn into_quality(self) -> (QualityReport, StageMetrics) {
        (self.state.quality, self.metrics)
    }

    pub fn into_extracted(self, extraction: FeatureExtraction) -> AnalysisContext<ExtractedState> {
        self.advance(
            |checked| ExtractedState {
                quality: checked.quality,
                extraction,
            },
            StageMetrics::record_extraction,
        )
    }
}

impl AnalysisContext<ExtractedState> {
    pub fn quality(&self) -> &QualityReport {
        &self.state.quality
    }

    pub fn extraction(&self) -> &FeatureExtraction {
        &self.state.extraction
    }

    pub fn into_classified(
        self,
        classification: ClassificationResult,
    ) -> AnalysisContext<ClassifiedState> {
        self.advance(
            |extracted| ClassifiedState {
                quality: extracted.quality,
                extraction: extracted.extraction,
                classification,
            },
            StageMetrics::record_classification,
        )
    }
}

impl AnalysisContext<ClassifiedState> {
    pub fn classification(&self) -> &ClassificationResult {
        &self.state.classification
    }

    pub fn into_parts(self) -> (Photo, ClassifiedState, StageMetrics) {
        (self.photo, self.state, self.metrics)
    }
}
