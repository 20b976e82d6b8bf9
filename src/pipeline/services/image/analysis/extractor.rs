use super::color::{dominant_color, rgb_to_lab, KMeansClusterer};
use super::core::{
    ColorClusterer, FaceDetector, FaceLandmarks, ImageRegion, LandmarkDetector, CHEEK_POLYGON,
    CROWN, LEFT_IRIS, LEFT_TEMPLE, RIGHT_TEMPLE,
};
use super::detectors::TemplateLandmarkDetector;
use super::normalization::LightingNormalizer;
use crate::config::{ExtractionSettings, HairSelection};
use crate::error::ExtractionError;
use crate::pipeline::types::RawSignal;
use image::{DynamicImage, RgbImage};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

const FALLBACK_CROP: u32 = 40;
const IRIS_RADIUS: i64 = 5;
const DEFAULT_HAIR_L: f64 = 20.0;
const MIN_HAIR_MEAN: f64 = 5.0;
const SKIN_CLUSTERS: usize = 3;
const HAIR_CLUSTERS: usize = 3;
const IRIS_CLUSTERS: usize = 2;

/// Recoverable oddities met while extracting; the signal is still usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractionNote {
    /// The named region held no usable pixels; a centred crop was sampled instead.
    EmptyRegionFallback { region: &'static str },
    /// No hair sample passed the checks; a default hair lightness was used.
    HairSamplesMissing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureExtraction {
    pub signal: RawSignal,
    pub notes: Vec<ExtractionNote>,
}

/// Reduces a face photo to a perceptual color signal.
pub struct FeatureExtractor {
    landmarks: Arc<dyn LandmarkDetector>,
    clusterer: Arc<dyn ColorClusterer>,
    normalizer: LightingNormalizer,
    hair_selection: HairSelection,
}

impl FeatureExtractor {
    pub fn new(
        landmarks: Arc<dyn LandmarkDetector>,
        clusterer: Arc<dyn ColorClusterer>,
        hair_selection: HairSelection,
    ) -> Self {
        Self {
            landmarks,
            clusterer,
            normalizer: LightingNormalizer::default(),
            hair_selection,
        }
    }

    pub fn from_settings(settings: &ExtractionSettings, faces: Arc<dyn FaceDetector>) -> Self {
        let clusterer = KMeansClusterer::new(settings.kmeans_seed)
            .with_restarts(settings.kmeans_restarts)
            .with_max_iterations(settings.kmeans_max_iterations)
            .with_max_samples(settings.max_cluster_samples);
        Self::new(
            Arc::new(TemplateLandmarkDetector::new(faces)),
            Arc::new(clusterer),
            settings.hair_selection,
        )
    }

    pub fn extract(
        &self,
        image: &DynamicImage,
        normalize_lighting: bool,
    ) -> Result<FeatureExtraction, ExtractionError> {
        let raw = image.to_rgb8();
        let landmarks = self
            .landmarks
            .detect_landmarks(&raw)
            .ok_or(ExtractionError::NoFaceDetected)?;

        let rgb = if normalize_lighting {
            self.normalizer.normalize(&raw)
        } else {
            raw
        };

        let mut notes = Vec::new();

        let cheek = cheek_pixels(&rgb, &landmarks).ok_or(ExtractionError::NoFaceDetected)?;
        let cheek = self.or_center_crop(&rgb, cheek, "cheek", &mut notes);
        let skin_lab = self.dominant_lab(&cheek, SKIN_CLUSTERS);

        let iris = iris_pixels(&rgb, &landmarks).ok_or(ExtractionError::NoFaceDetected)?;
        let iris = self.or_center_crop(&rgb, iris, "iris", &mut notes);
        let eye_l = self.dominant_lab(&iris, IRIS_CLUSTERS)[0];

        let hair_samples: Vec<f64> = hair_regions(&rgb, &landmarks)
            .into_iter()
            .filter(|pixels| usable_hair(pixels))
            .map(|pixels| self.dominant_lab(&pixels, HAIR_CLUSTERS)[0])
            .collect();
        let hair_l = match select_hair(&hair_samples, skin_lab[0], self.hair_selection) {
            Some(hair_l) => hair_l,
            None => {
                warn!("no usable hair sample, using default hair lightness");
                notes.push(ExtractionNote::HairSamplesMissing);
                DEFAULT_HAIR_L
            }
        };

        let signal = RawSignal::from_measurements(skin_lab, hair_l, eye_l);
        debug!(?signal, hair_samples = hair_samples.len(), "features extracted");
        Ok(FeatureExtraction { signal, notes })
    }

    fn or_center_crop(
        &self,
        rgb: &RgbImage,
        pixels: Vec<[u8; 3]>,
        region: &'static str,
        notes: &mut Vec<ExtractionNote>,
    ) -> Vec<[u8; 3]> {
        if !pixels.is_empty() {
            return pixels;
        }
        warn!(region, "sampling region is empty, falling back to centre crop");
        notes.push(ExtractionNote::EmptyRegionFallback { region });
        let (width, height) = rgb.dimensions();
        ImageRegion::centered(width, height, FALLBACK_CROP).pixels(rgb)
    }

    fn dominant_lab(&self, pixels: &[[u8; 3]], k: usize) -> [f64; 3] {
        let rgb = dominant_color(self.clusterer.as_ref(), pixels, k).unwrap_or([0.0; 3]);
        rgb_to_lab(rgb)
    }
}

/// Non-black pixels whose centres fall inside the cheek polygon.
fn cheek_pixels(rgb: &RgbImage, landmarks: &FaceLandmarks) -> Option<Vec<[u8; 3]>> {
    let (width, height) = rgb.dimensions();
    let polygon: Vec<(f64, f64)> = CHEEK_POLYGON
        .iter()
        .map(|&index| {
            landmarks
                .pixel(index, width, height)
                .map(|(x, y)| (x as f64, y as f64))
        })
        .collect::<Option<_>>()?;

    let xs = polygon.iter().map(|p| p.0);
    let ys = polygon.iter().map(|p| p.1);
    let bounds = ImageRegion::from_corners(
        xs.clone().fold(f64::MAX, f64::min).floor() as i64,
        ys.clone().fold(f64::MAX, f64::min).floor() as i64,
        xs.fold(f64::MIN, f64::max).ceil() as i64 + 1,
        ys.fold(f64::MIN, f64::max).ceil() as i64 + 1,
        width,
        height,
    );

    let mut pixels = Vec::new();
    for y in bounds.y..bounds.y + bounds.height {
        for x in bounds.x..bounds.x + bounds.width {
            let pixel = rgb.get_pixel(x, y).0;
            if pixel != [0, 0, 0] && inside(&polygon, x as f64 + 0.5, y as f64 + 0.5) {
                pixels.push(pixel);
            }
        }
    }
    Some(pixels)
}

/// Even-odd ray casting.
fn inside(polygon: &[(f64, f64)], x: f64, y: f64) -> bool {
    let mut result = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (xi, yi) = polygon[i];
        let (xj, yj) = polygon[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            result = !result;
        }
        j = i;
    }
    result
}

fn iris_pixels(rgb: &RgbImage, landmarks: &FaceLandmarks) -> Option<Vec<[u8; 3]>> {
    let (width, height) = rgb.dimensions();
    let (x, y) = landmarks.pixel(LEFT_IRIS, width, height)?;
    let region = ImageRegion::from_corners(
        x - IRIS_RADIUS,
        y - IRIS_RADIUS,
        x + IRIS_RADIUS + 1,
        y + IRIS_RADIUS + 1,
        width,
        height,
    );
    Some(region.pixels(rgb))
}

/// Crops beside each temple and above the crown, in that order. Missing landmarks are skipped.
fn hair_regions(rgb: &RgbImage, landmarks: &FaceLandmarks) -> Vec<Vec<[u8; 3]>> {
    let (width, height) = rgb.dimensions();
    let left = landmarks.pixel(LEFT_TEMPLE, width, height);
    let right = landmarks.pixel(RIGHT_TEMPLE, width, height);
    let span = match (left, right) {
        (Some(l), Some(r)) => (((r.0 - l.0).abs() as f64) * 0.3).max(8.0) as i64,
        _ => i64::from(width / 20).max(8),
    };
    let half = span / 2;

    let mut regions = Vec::with_capacity(3);
    if let Some((x, y)) = left {
        regions.push(ImageRegion::from_corners(x - span, y - half, x, y + half, width, height));
    }
    if let Some((x, y)) = right {
        regions.push(ImageRegion::from_corners(x, y - half, x + span, y + half, width, height));
    }
    if let Some((x, y)) = landmarks.pixel(CROWN, width, height) {
        regions.push(ImageRegion::from_corners(x - half, y - span, x + half, y, width, height));
    }

    regions.into_iter().map(|region| region.pixels(rgb)).collect()
}

fn usable_hair(pixels: &[[u8; 3]]) -> bool {
    if pixels.is_empty() {
        return false;
    }
    let total: u64 = pixels
        .iter()
        .flat_map(|p| p.iter())
        .map(|&channel| u64::from(channel))
        .sum();
    total as f64 / (pixels.len() * 3) as f64 > MIN_HAIR_MEAN
}

/// Pick one hair lightness from the samples.
pub fn select_hair(samples: &[f64], skin_l: f64, strategy: HairSelection) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    match strategy {
        HairSelection::MedianNearest => {
            let mut sorted = samples.to_vec();
            sorted.sort_by(f64::total_cmp);
            let mid = sorted.len() / 2;
            let median = if sorted.len() % 2 == 0 {
                (sorted[mid - 1] + sorted[mid]) / 2.0
            } else {
                sorted[mid]
            };
            samples
                .iter()
                .copied()
                .fold(None, |best: Option<f64>, sample| match best {
                    Some(current) if (current - median).abs() <= (sample - median).abs() => {
                        Some(current)
                    }
                    _ => Some(sample),
                })
        }
        HairSelection::DepthMatched if skin_l > 70.0 => {
            samples.iter().copied().max_by(f64::total_cmp)
        }
        HairSelection::DepthMatched => samples.iter().copied().min_by(f64::total_cmp),
    }
}

#[cfg(test)]
mod tests {
    use super::super::core::LandmarkPoint;
    use super::super::detectors::tests::portrait;
    use super::super::detectors::SkinToneFaceDetector;
    use super::*;
    use image::{ImageBuffer, Rgb};

    fn extractor() -> FeatureExtractor {
        FeatureExtractor::from_settings(
            &ExtractionSettings::default(),
            Arc::new(SkinToneFaceDetector::new()),
        )
    }

    struct FixedLandmarks;

    impl LandmarkDetector for FixedLandmarks {
        fn detect_landmarks(&self, _image: &RgbImage) -> Option<FaceLandmarks> {
            let mut landmarks = FaceLandmarks::new();
            for (index, x, y) in [
                (CHEEK_POLYGON[0], 0.1, 0.1),
                (CHEEK_POLYGON[1], 0.2, 0.1),
                (CHEEK_POLYGON[2], 0.2, 0.2),
                (CHEEK_POLYGON[3], 0.1, 0.2),
                (LEFT_IRIS, 0.5, 0.5),
                (LEFT_TEMPLE, 0.3, 0.4),
                (RIGHT_TEMPLE, 0.7, 0.4),
                (CROWN, 0.5, 0.2),
            ] {
                landmarks.insert(index, LandmarkPoint { x, y });
            }
            Some(landmarks)
        }

        fn name(&self) -> &'static str {
            "FixedLandmarks"
        }
    }

    #[test]
    fn portrait_yields_light_skin_and_dark_hair() {
        let image = DynamicImage::ImageRgb8(portrait());
        let extraction = extractor().extract(&image, false).unwrap();
        let signal = extraction.signal;

        assert!(extraction.notes.is_empty(), "{:?}", extraction.notes);
        assert!((65.0..85.0).contains(&signal.skin_l), "{signal:?}");
        assert!(signal.skin_b > 4.0);
        assert!(signal.hair_l < 20.0, "{signal:?}");
        assert!((signal.chroma - signal.skin_a.hypot(signal.skin_b)).abs() < 1e-9);
    }

    #[test]
    fn extraction_is_deterministic() {
        let image = DynamicImage::ImageRgb8(portrait());
        let extractor = extractor();
        assert_eq!(
            extractor.extract(&image, true).unwrap(),
            extractor.extract(&image, true).unwrap()
        );
    }

    #[test]
    fn faceless_image_is_an_error() {
        let grey = DynamicImage::ImageRgb8(ImageBuffer::from_pixel(120, 120, Rgb([128, 128, 128])));
        assert_eq!(
            extractor().extract(&grey, true).unwrap_err(),
            ExtractionError::NoFaceDetected
        );
    }

    #[test]
    fn black_regions_fall_back_and_note_it() {
        let black = DynamicImage::ImageRgb8(ImageBuffer::from_pixel(100, 100, Rgb([0, 0, 0])));
        let extractor = FeatureExtractor::new(
            Arc::new(FixedLandmarks),
            Arc::new(KMeansClusterer::default()),
            HairSelection::MedianNearest,
        );
        let extraction = extractor.extract(&black, false).unwrap();
        assert!(extraction
            .notes
            .contains(&ExtractionNote::EmptyRegionFallback { region: "cheek" }));
        assert!(extraction.notes.contains(&ExtractionNote::HairSamplesMissing));
        assert_eq!(extraction.signal.hair_l, DEFAULT_HAIR_L);
    }

    #[test]
    fn median_nearest_prefers_the_middle_sample() {
        assert_eq!(select_hair(&[12.0, 40.0, 18.0], 60.0, HairSelection::MedianNearest), Some(18.0));
        // median 25, both 20 and 30 are 5 away: earliest wins
        assert_eq!(select_hair(&[20.0, 30.0], 60.0, HairSelection::MedianNearest), Some(20.0));
        assert_eq!(select_hair(&[], 60.0, HairSelection::MedianNearest), None);
    }

    #[test]
    fn depth_matched_follows_skin_depth() {
        let samples = [12.0, 40.0, 18.0];
        assert_eq!(select_hair(&samples, 75.0, HairSelection::DepthMatched), Some(40.0));
        assert_eq!(select_hair(&samples, 60.0, HairSelection::DepthMatched), Some(12.0));
    }
}
