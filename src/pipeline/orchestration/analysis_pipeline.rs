use super::guidelines::UserGuidelines;
use super::outcome::{AnalysisFailure, AnalysisOutcome, AnalysisReport, FailureKind, SignalSource};
use super::request::AnalysisRequest;
use crate::common::Photo;
use crate::config::{Configuration, PipelineSettings};
use crate::error::{AppError, ExtractionError};
use crate::pipeline::context::{AnalysisContext, StageTimings};
use crate::pipeline::services::classification::ArchetypeClassifier;
use crate::pipeline::services::image::analysis::{
    ExtractionNote, FaceDetector, SkinToneFaceDetector,
};
use crate::pipeline::services::image::quality::NO_FACE_ISSUE;
use crate::pipeline::services::image::{FeatureExtractor, PhotoQualityChecker};
use crate::pipeline::services::interpretation::Interpretation;
use crate::pipeline::services::palette_resolver::PaletteResolver;
use crate::pipeline::services::synthetic::SyntheticSignalGenerator;
use crate::pipeline::types::{ClassificationResult, QualityReport, RawSignal};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Scale classifier confidence down for photos scoring under `pivot`.
pub fn adjust_confidence(raw: f64, quality_score: f64, pivot: f64) -> f64 {
    raw * (1.0 - (pivot - quality_score).max(0.0) / 100.0)
}

/// Owns every analysis component; built once and shared read-only.
pub struct AnalysisPipeline {
    quality: PhotoQualityChecker,
    extractor: FeatureExtractor,
    classifier: ArchetypeClassifier,
    palettes: PaletteResolver,
    synthetic: SyntheticSignalGenerator,
    settings: PipelineSettings,
    apply_lighting_correction: bool,
}

impl AnalysisPipeline {
    pub fn new(configuration: &Configuration) -> Self {
        let faces: Arc<dyn FaceDetector> = Arc::new(SkinToneFaceDetector::new());
        Self::with_components(
            PhotoQualityChecker::new(configuration.quality.clone(), faces.clone()),
            FeatureExtractor::from_settings(&configuration.extraction, faces),
            configuration.pipeline.clone(),
            configuration.extraction.apply_lighting_correction,
        )
    }

    pub fn with_components(
        quality: PhotoQualityChecker,
        extractor: FeatureExtractor,
        settings: PipelineSettings,
        apply_lighting_correction: bool,
    ) -> Self {
        Self {
            quality,
            extractor,
            classifier: ArchetypeClassifier::new(),
            palettes: PaletteResolver::new(),
            synthetic: SyntheticSignalGenerator::new(),
            settings,
            apply_lighting_correction,
        }
    }

    pub fn user_guidelines() -> UserGuidelines {
        UserGuidelines::standard()
    }

    pub fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisOutcome, AppError> {
        match request {
            AnalysisRequest::Image { bytes, force } => {
                let photo = Photo::decode(&bytes)?;
                self.analyze_photo(photo, force)
            }
            AnalysisRequest::Path { path, force } => {
                let bytes = std::fs::read(&path)?;
                debug!(path = %path.display(), len = bytes.len(), "image read");
                let photo = Photo::decode(&bytes)?;
                self.analyze_photo(photo, force)
            }
            AnalysisRequest::Photo { photo, force } => self.analyze_photo(photo, force),
            AnalysisRequest::Manual(manual) => Ok(AnalysisOutcome::Success(Box::new(
                self.analyze_signal(RawSignal::from(manual), SignalSource::Manual),
            ))),
            AnalysisRequest::Synthetic { key } => {
                let synthetic = self.synthetic.generate(&key);
                debug!(key, cohort = %synthetic.cohort, "synthetic signal generated");
                Ok(AnalysisOutcome::Success(Box::new(self.analyze_signal(
                    synthetic.signal,
                    SignalSource::Synthetic {
                        cohort: synthetic.cohort,
                    },
                ))))
            }
        }
    }

    /// Classify a signal that did not come from a photo.
    pub fn analyze_signal(&self, signal: RawSignal, source: SignalSource) -> AnalysisReport {
        let classification = self.classifier.classify(&signal);
        self.report(Uuid::new_v4(), source, classification)
    }

    pub fn analyze_photo(&self, photo: Photo, force: bool) -> Result<AnalysisOutcome, AppError> {
        let request_id = photo.id();
        let context = AnalysisContext::new(photo);
        let quality = self.quality.check(context.photo().image());
        let context = context.into_quality_checked(quality);

        let acceptable = context.quality().is_valid
            || context.quality().quality_score >= self.settings.min_quality_score
            || force;
        if !acceptable {
            let (quality, _) = context.into_quality();
            warn!(%request_id, score = quality.quality_score, "photo rejected for low quality");
            return Ok(self.rejected(request_id, FailureKind::LowQualityPhoto, quality));
        }

        let extracted = self
            .extractor
            .extract(context.photo().image(), self.apply_lighting_correction);
        let extraction = match extracted {
            Ok(extraction) => extraction,
            Err(ExtractionError::NoFaceDetected) => {
                let (quality, _) = context.into_quality();
                warn!(%request_id, "photo rejected, no face found");
                return Ok(self.rejected(request_id, FailureKind::NoFaceDetected, quality));
            }
            Err(err) => return Err(err.into()),
        };
        let context = context.into_extracted(extraction);

        let classification = self.classifier.classify(&context.extraction().signal);
        let context = context.into_classified(classification);
        let (_, state, metrics) = context.into_parts();
        debug!(%request_id, timings = ?metrics, "photo analyzed");

        let mut classification = state.classification;
        let quality = state.quality;
        let original_confidence = classification.confidence;
        classification.confidence = adjust_confidence(
            original_confidence,
            quality.quality_score,
            self.settings.confidence_quality_pivot,
        );

        if !quality.warnings.is_empty() {
            let mut explanation = Vec::with_capacity(1 + quality.warnings.len());
            explanation.push(format!(
                "Photo quality: {:.0}/100 - results may vary with better lighting",
                quality.quality_score
            ));
            explanation.extend(quality.warnings.iter().cloned());
            explanation.append(&mut classification.explanation);
            classification.explanation = explanation;
        }

        let mut report = self.report(request_id, SignalSource::Photo, classification);
        report.original_confidence = Some(original_confidence);
        report.quality = Some(quality);
        report.extraction_notes = state.extraction.notes;
        report.timings = metrics.timings();
        Ok(AnalysisOutcome::Success(Box::new(report)))
    }

    fn report(
        &self,
        request_id: Uuid,
        source: SignalSource,
        classification: ClassificationResult,
    ) -> AnalysisReport {
        let palette = self.palettes.resolve(
            classification.season.name(),
            classification.subtype.name(),
        );
        info!(
            %request_id,
            subtype = %classification.subtype,
            confidence = classification.confidence,
            "analysis complete"
        );
        AnalysisReport {
            request_id,
            analyzed_at: Utc::now(),
            source,
            interpretation: Interpretation::of(&classification.signal),
            classification,
            original_confidence: None,
            palette,
            quality: None,
            extraction_notes: Vec::<ExtractionNote>::new(),
            timings: StageTimings::default(),
        }
    }

    fn rejected(
        &self,
        request_id: Uuid,
        kind: FailureKind,
        quality: QualityReport,
    ) -> AnalysisOutcome {
        let message = match kind {
            FailureKind::LowQualityPhoto => format!(
                "Photo quality too low for analysis ({:.0}/100): {}",
                quality.quality_score,
                quality.issues.join("; ")
            ),
            FailureKind::NoFaceDetected => NO_FACE_ISSUE.to_string(),
        };
        AnalysisOutcome::Rejected(AnalysisFailure {
            request_id,
            kind,
            message,
            quality,
            recommendations: self.quality.recommendations(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::services::image::analysis::detectors::tests::portrait;
    use crate::pipeline::types::{ManualSignal, Season, Subtype};
    use image::{DynamicImage, ImageBuffer, Rgb};
    use std::io::Cursor;

    fn pipeline() -> AnalysisPipeline {
        AnalysisPipeline::new(&Configuration::default())
    }

    fn black_photo() -> Photo {
        Photo::new(DynamicImage::ImageRgb8(ImageBuffer::from_pixel(
            800,
            600,
            Rgb([0, 0, 0]),
        )))
    }

    #[test]
    fn confidence_scales_below_the_pivot() {
        assert!((adjust_confidence(0.95, 50.0, 70.0) - 0.76).abs() < 1e-9);
        assert_eq!(adjust_confidence(0.95, 90.0, 70.0), 0.95);
        assert_eq!(adjust_confidence(0.30, 70.0, 70.0), 0.30);
    }

    #[test]
    fn manual_signal_skips_photo_stages() {
        let outcome = pipeline()
            .analyze(AnalysisRequest::Manual(ManualSignal {
                skin_l: 60.0,
                skin_b: -4.0,
                chroma: 45.0,
                hair_l: 15.0,
                eye_l: 25.0,
            }))
            .unwrap();
        let report = outcome.report().unwrap();

        assert_eq!(report.classification.season, Season::Winter);
        assert_eq!(report.classification.subtype, Subtype::TrueWinter);
        assert_eq!(report.classification.confidence, 0.95);
        assert_eq!(report.source, SignalSource::Manual);
        assert!(report.quality.is_none());
        assert!(report.original_confidence.is_none());
        assert!(!report.palette.palette.core.is_empty());
        assert_eq!(report.interpretation.hair.name, "Soft Black");
    }

    #[test]
    fn synthetic_requests_are_repeatable() {
        let pipeline = pipeline();
        let request = || AnalysisRequest::Synthetic {
            key: "user-42".to_string(),
        };
        let first = pipeline.analyze(request()).unwrap();
        let second = pipeline.analyze(request()).unwrap();
        let (first, second) = (first.report().unwrap(), second.report().unwrap());
        assert_eq!(first.classification, second.classification);
        assert!(matches!(first.source, SignalSource::Synthetic { .. }));
    }

    #[test]
    fn black_photo_is_rejected_for_quality() {
        let outcome = pipeline().analyze_photo(black_photo(), false).unwrap();
        let failure = outcome.failure().unwrap();
        assert_eq!(failure.kind, FailureKind::LowQualityPhoto);
        assert_eq!(failure.quality.quality_score, 0.0);
        assert!(!failure.recommendations.is_empty());
    }

    #[test]
    fn forced_black_photo_has_no_face() {
        let outcome = pipeline().analyze_photo(black_photo(), true).unwrap();
        assert_eq!(outcome.failure().unwrap().kind, FailureKind::NoFaceDetected);
    }

    #[test]
    fn undecodable_bytes_are_an_error() {
        let err = pipeline()
            .analyze(AnalysisRequest::Image {
                bytes: vec![0, 1, 2, 3],
                force: false,
            })
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Extraction(ExtractionError::ImageDecode(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = pipeline()
            .analyze(AnalysisRequest::Path {
                path: std::env::temp_dir().join("color-season-missing").join("face.png"),
                force: false,
            })
            .unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn image_file_is_read_and_analyzed() {
        let path = std::env::temp_dir().join(format!("color-season-{}.png", Uuid::new_v4()));
        DynamicImage::ImageRgb8(ImageBuffer::from_pixel(800, 600, Rgb([0, 0, 0])))
            .save(&path)
            .unwrap();

        let outcome = pipeline().analyze(AnalysisRequest::Path {
            path: path.clone(),
            force: false,
        });
        std::fs::remove_file(&path).unwrap();

        let outcome = outcome.unwrap();
        assert_eq!(outcome.failure().unwrap().kind, FailureKind::LowQualityPhoto);
    }

    #[test]
    fn portrait_photo_is_classified_with_quality_adjustment() {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(portrait())
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        let outcome = pipeline()
            .analyze(AnalysisRequest::Image { bytes, force: true })
            .unwrap();
        let report = outcome.report().unwrap();
        let quality = report.quality.as_ref().unwrap();
        let original = report.original_confidence.unwrap();

        assert_eq!(report.source, SignalSource::Photo);
        assert_eq!(
            report.classification.confidence,
            adjust_confidence(original, quality.quality_score, 70.0)
        );
        if !quality.warnings.is_empty() {
            assert!(report.classification.explanation[0].starts_with("Photo quality:"));
            assert_eq!(report.classification.explanation[1], quality.warnings[0]);
        }
        assert!(report.timings.extraction_ms.is_some());
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let outcome = pipeline().analyze_photo(black_photo(), false).unwrap();
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["status"], "rejected");
        assert_eq!(value["kind"], "low_quality_photo");

        let outcome = pipeline()
            .analyze(AnalysisRequest::Manual(ManualSignal::default()))
            .unwrap();
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["status"], "success");
        assert!(value["season_subtype"].is_string());
        assert!(value["palette"]["best_colors"].is_array());
    }

    #[test]
    fn guidelines_cover_every_section() {
        let guidelines = AnalysisPipeline::user_guidelines();
        assert!(!guidelines.photo_recommendations.is_empty());
        assert!(!guidelines.what_to_wear.is_empty());
        assert!(!guidelines.lighting_tips.is_empty());
        assert!(!guidelines.camera_tips.is_empty());
    }
}
