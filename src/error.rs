use thiserror::Error;

// Main Application Error Type

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Extraction Error: {0}")]
    Extraction(#[from] ExtractionError),
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Analysis task failed: {0}")]
    Task(String),
}

// Vision Error Type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractionError {
    #[error("Failed to decode image: {0}")]
    ImageDecode(String),
    #[error("No face detected")]
    NoFaceDetected,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
