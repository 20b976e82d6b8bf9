use crate::common::Photo;
use crate::pipeline::types::ManualSignal;
use std::path::PathBuf;

/// One unit of work for the analysis pipeline.
#[derive(Debug, Clone)]
pub enum AnalysisRequest {
    /// Encoded image bytes, decoded inside the pipeline.
    Image { bytes: Vec<u8>, force: bool },
    /// Image file, read when the request runs.
    Path { path: PathBuf, force: bool },
    /// An already decoded photo.
    Photo { photo: Photo, force: bool },
    /// Hand-entered signal; skips quality checks and extraction.
    Manual(ManualSignal),
    /// Deterministic stand-in signal derived from `key`.
    Synthetic { key: String },
}
