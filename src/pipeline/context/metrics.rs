use serde::Serialize;
use std::time::Duration;

/// Time spent in each stage of a photo analysis
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StageMetrics {
    pub quality_check: Option<Duration>,
    pub extraction: Option<Duration>,
    pub classification: Option<Duration>,
}

impl StageMetrics {
    pub fn record_quality_check(&mut self, duration: Duration) {
        self.quality_check = Some(duration);
    }

    pub fn record_extraction(&mut self, duration: Duration) {
        self.extraction = Some(duration);
    }

    pub fn record_classification(&mut self, duration: Duration) {
        self.classification = Some(duration);
    }

    pub fn timings(&self) -> StageTimings {
        let ms = |duration: Option<Duration>| duration.map(|d| d.as_secs_f64() * 1000.0);
        StageTimings {
            quality_ms: ms(self.quality_check),
            extraction_ms: ms(self.extraction),
            classification_ms: ms(self.classification),
        }
    }
}

/// Serializable view of `StageMetrics` in milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StageTimings {
    pub quality_ms: Option<f64>,
    pub extraction_ms: Option<f64>,
    pub classification_ms: Option<f64>,
}
