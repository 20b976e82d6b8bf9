use super::analysis::core::FaceDetector;
use crate::config::QualityThresholds;
use crate::pipeline::types::{QualityMetrics, QualityReport};
use image::{DynamicImage, RgbImage};
use std::sync::Arc;
use tracing::debug;

const ISSUE_PENALTY: f64 = 25.0;
const WARNING_PENALTY: f64 = 10.0;
const BONUS: f64 = 5.0;

pub const NO_FACE_ISSUE: &str = "No face detected - ensure face is clearly visible";

pub const PHOTO_RECOMMENDATIONS: [&str; 6] = [
    "Use natural daylight from a window, facing the light",
    "Remove makeup, glasses and color filters",
    "Keep some hair visible around the face",
    "Keep the face centered, filling about a third of the frame",
    "Use a plain, neutral background",
    "Hold the camera steady at eye level",
];

/// Scores a photo before any color is read from it.
pub struct PhotoQualityChecker {
    thresholds: QualityThresholds,
    faces: Arc<dyn FaceDetector>,
}

impl PhotoQualityChecker {
    pub fn new(thresholds: QualityThresholds, faces: Arc<dyn FaceDetector>) -> Self {
        Self { thresholds, faces }
    }

    pub fn recommendations(&self) -> Vec<String> {
        PHOTO_RECOMMENDATIONS.iter().map(|s| s.to_string()).collect()
    }

    pub fn check(&self, image: &DynamicImage) -> QualityReport {
        let rgb = image.to_rgb8();
        let (width, height) = rgb.dimensions();
        let luma = luma_plane(&rgb);

        let (brightness, contrast_std) = mean_and_std(&luma);
        let faces = self.faces.detect_faces(&rgb);
        let image_area = f64::from(width) * f64::from(height);
        let face_coverage = faces
            .iter()
            .map(|face| f64::from(face.region.area()))
            .reduce(f64::max)
            .filter(|_| image_area > 0.0)
            .map(|area| area / image_area);

        let metrics = QualityMetrics {
            brightness,
            contrast_std,
            sharpness: laplacian_variance(&luma, width, height),
            saturation: mean_saturation(&rgb),
            lighting_uniformity: contrast_std,
            faces_detected: faces.len(),
            face_coverage,
        };

        let t = &self.thresholds;
        let mut issues = Vec::new();
        let mut warnings = Vec::new();

        if metrics.brightness < t.min_brightness {
            issues.push("Photo is too dark - use brighter, natural lighting".to_string());
        } else if metrics.brightness > t.max_brightness {
            issues.push("Photo is overexposed - reduce direct light".to_string());
        } else if metrics.brightness < t.warn_dark_brightness {
            warnings.push("Lighting is slightly dim".to_string());
        } else if metrics.brightness > t.warn_bright_brightness {
            warnings.push("Lighting is slightly bright".to_string());
        }

        if metrics.contrast_std < t.min_contrast {
            issues.push("Image contrast is too low - avoid flat or hazy lighting".to_string());
        } else if metrics.contrast_std < t.warn_contrast {
            warnings.push("Contrast is on the low side".to_string());
        }

        if metrics.sharpness < t.min_sharpness {
            issues.push("Image is blurry - hold the camera steady and focus on the face".to_string());
        } else if metrics.sharpness < t.warn_sharpness {
            warnings.push("Image could be sharper".to_string());
        }

        if metrics.saturation < t.min_saturation {
            warnings.push("Colors look washed out - avoid filters".to_string());
        }

        if metrics.lighting_uniformity > t.max_lighting_variation {
            warnings.push("Uneven lighting - face the light source directly".to_string());
        }

        match (metrics.faces_detected, metrics.face_coverage) {
            (0, _) => issues.push(NO_FACE_ISSUE.to_string()),
            (1, Some(coverage)) if coverage < t.min_face_coverage => {
                warnings.push("Face is too small in the frame - move closer".to_string())
            }
            (1, Some(coverage)) if coverage > t.max_face_coverage => {
                warnings.push("Face is too close - step back slightly".to_string())
            }
            (1, _) => {}
            _ => warnings.push("Multiple faces detected - the largest one is analyzed".to_string()),
        }

        let mut bonus = 0.0;
        if (100.0..=180.0).contains(&metrics.brightness) {
            bonus += BONUS;
        }
        if metrics.contrast_std >= 50.0 {
            bonus += BONUS;
        }
        if metrics.sharpness >= 200.0 {
            bonus += BONUS;
        }

        let quality_score = (100.0
            - ISSUE_PENALTY * issues.len() as f64
            - WARNING_PENALTY * warnings.len() as f64
            + bonus)
            .clamp(0.0, 100.0);

        debug!(
            quality_score,
            issues = issues.len(),
            warnings = warnings.len(),
            "photo quality checked"
        );

        QualityReport {
            is_valid: issues.is_empty(),
            quality_score,
            issues,
            warnings,
            metrics,
        }
    }
}

/// Rec. 601 luma, 0-255.
fn luma_plane(rgb: &RgbImage) -> Vec<f64> {
    rgb.pixels()
        .map(|p| {
            let [r, g, b] = p.0;
            0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)
        })
        .collect()
}

fn mean_and_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

/// Variance of the 4-neighbour Laplacian over interior pixels.
fn laplacian_variance(luma: &[f64], width: u32, height: u32) -> f64 {
    if width < 3 || height < 3 {
        return 0.0;
    }
    let w = width as usize;
    let h = height as usize;
    let mut responses = Vec::with_capacity((w - 2) * (h - 2));
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let at = |x: usize, y: usize| luma[y * w + x];
            responses.push(
                at(x - 1, y) + at(x + 1, y) + at(x, y - 1) + at(x, y + 1) - 4.0 * at(x, y),
            );
        }
    }
    let (_, std) = mean_and_std(&responses);
    std * std
}

/// Mean HSV saturation scaled to 0-255.
fn mean_saturation(rgb: &RgbImage) -> f64 {
    let count = rgb.pixels().len();
    if count == 0 {
        return 0.0;
    }
    let total: f64 = rgb
        .pixels()
        .map(|p| {
            let max = p.0.iter().copied().max().unwrap_or(0);
            let min = p.0.iter().copied().min().unwrap_or(0);
            if max == 0 {
                0.0
            } else {
                f64::from(max - min) / f64::from(max) * 255.0
            }
        })
        .sum();
    total / count as f64
}

#[cfg(test)]
mod tests {
    use super::super::analysis::core::FaceBox;
    use super::super::analysis::detectors::SkinToneFaceDetector;
    use super::super::analysis::ImageRegion;
    use super::*;
    use image::{ImageBuffer, Rgb};

    fn checker() -> PhotoQualityChecker {
        PhotoQualityChecker::new(
            QualityThresholds::default(),
            Arc::new(SkinToneFaceDetector::new()),
        )
    }

    struct OneFace(ImageRegion);

    impl FaceDetector for OneFace {
        fn detect_faces(&self, _image: &RgbImage) -> Vec<FaceBox> {
            vec![FaceBox {
                region: self.0,
                confidence: 1.0,
            }]
        }

        fn name(&self) -> &'static str {
            "OneFace"
        }
    }

    #[test]
    fn mid_grey_without_face_is_rejected() {
        let grey = DynamicImage::ImageRgb8(ImageBuffer::from_pixel(320, 240, Rgb([128, 128, 128])));
        let report = checker().check(&grey);

        assert!(!report.is_valid);
        assert!(report.has_issue_containing("no face detected"));
        assert!(report.quality_score <= 75.0);
        assert_eq!(report.quality_score, 20.0);
        assert_eq!(report.metrics.faces_detected, 0);
        assert!((report.metrics.brightness - 128.0).abs() < 0.5);
    }

    #[test]
    fn solid_black_photo_is_dark_and_faceless() {
        let black = DynamicImage::ImageRgb8(ImageBuffer::from_pixel(800, 600, Rgb([0, 0, 0])));
        let report = checker().check(&black);

        assert!(report.metrics.brightness.abs() < 1e-9);
        assert!(report.has_issue_containing("too dark"));
        assert!(report.has_issue_containing("no face"));
        assert!(!report.is_valid);
        assert_eq!(report.quality_score, 0.0);
    }

    #[test]
    fn sharp_checkerboard_passes_contrast_and_sharpness() {
        let board = DynamicImage::ImageRgb8(ImageBuffer::from_fn(64, 64, |x, y| {
            if (x / 2 + y / 2) % 2 == 0 {
                Rgb([220, 60, 60])
            } else {
                Rgb([30, 30, 160])
            }
        }));
        let checker = PhotoQualityChecker::new(
            QualityThresholds::default(),
            Arc::new(OneFace(ImageRegion::new(16, 16, 24, 24))),
        );
        let report = checker.check(&board);

        assert!(!report.has_issue_containing("contrast"));
        assert!(!report.has_issue_containing("blurry"));
        assert!(report.is_valid, "{:?}", report.issues);
        assert_eq!(report.metrics.face_coverage, Some(576.0 / 4096.0));
        assert!(report
            .warnings
            .iter()
            .any(|warning| warning.contains("too small")));
    }

    #[test]
    fn laplacian_of_flat_plane_is_zero() {
        let flat = vec![90.0; 25];
        assert_eq!(laplacian_variance(&flat, 5, 5), 0.0);
        assert_eq!(laplacian_variance(&flat[..4], 2, 2), 0.0);
    }
}
