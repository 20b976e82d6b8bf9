use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub brightness: f64,
    pub contrast_std: f64,
    pub sharpness: f64,
    pub saturation: f64,
    pub lighting_uniformity: f64,
    pub faces_detected: usize,
    pub face_coverage: Option<f64>,
}

/// Usability verdict for one photo. `issues` block analysis, `warnings` only lower the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    pub is_valid: bool,
    pub quality_score: f64,
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
    pub metrics: QualityMetrics,
}

impl QualityReport {
    pub fn has_issue_containing(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.issues
            .iter()
            .any(|issue| issue.to_lowercase().contains(&needle))
    }
}
