pub mod analysis; // face location, sampling and color reduction
pub mod quality;

pub use analysis::{FeatureExtraction, FeatureExtractor};
pub use quality::PhotoQualityChecker;
