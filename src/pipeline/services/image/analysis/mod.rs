pub mod color;
pub mod core;
pub mod detectors;
pub mod extractor;
pub mod normalization;

pub use color::{dominant_color, rgb_to_lab, KMeansClusterer};
pub use core::{
    ColorCluster, ColorClusterer, FaceBox, FaceDetector, FaceLandmarks, ImageRegion,
    LandmarkDetector, LandmarkPoint,
};
pub use detectors::{SkinToneFaceDetector, TemplateLandmarkDetector};
pub use extractor::{ExtractionNote, FeatureExtraction, FeatureExtractor};
pub use normalization::LightingNormalizer;
