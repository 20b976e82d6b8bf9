use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

const ENV_PREFIX: &str = "COLOR_SEASON";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub log_level: String,
    pub quality: QualityThresholds,
    pub extraction: ExtractionSettings,
    pub pipeline: PipelineSettings,
    pub batch: BatchSettings,
}

/// Photo quality limits; issues are hard failures, the `warn_*` values only produce warnings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityThresholds {
    pub min_brightness: f64,
    pub max_brightness: f64,
    pub warn_dark_brightness: f64,
    pub warn_bright_brightness: f64,
    pub min_contrast: f64,
    pub warn_contrast: f64,
    pub min_sharpness: f64,
    pub warn_sharpness: f64,
    pub min_saturation: f64,
    pub max_lighting_variation: f64,
    pub min_face_coverage: f64,
    pub max_face_coverage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HairSelection {
    /// Sample whose lightness is closest to the median of all samples.
    MedianNearest,
    /// Lightest sample for light skin, darkest otherwise.
    DepthMatched,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionSettings {
    pub apply_lighting_correction: bool,
    pub hair_selection: HairSelection,
    pub kmeans_seed: u64,
    pub kmeans_restarts: usize,
    pub kmeans_max_iterations: usize,
    pub max_cluster_samples: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSettings {
    pub min_quality_score: f64,
    pub confidence_quality_pivot: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchSettings {
    pub workers: usize,
    pub request_timeout_ms: u64,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            quality: QualityThresholds::default(),
            extraction: ExtractionSettings::default(),
            pipeline: PipelineSettings::default(),
            batch: BatchSettings::default(),
        }
    }
}

impl Default for QualityThresholds {
    fn default() -> Self {
        Self {
            min_brightness: 40.0,
            max_brightness: 220.0,
            warn_dark_brightness: 60.0,
            warn_bright_brightness: 200.0,
            min_contrast: 30.0,
            warn_contrast: 40.0,
            min_sharpness: 100.0,
            warn_sharpness: 150.0,
            min_saturation: 30.0,
            max_lighting_variation: 70.0,
            min_face_coverage: 0.15,
            max_face_coverage: 0.7,
        }
    }
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            apply_lighting_correction: true,
            hair_selection: HairSelection::MedianNearest,
            kmeans_seed: 42,
            kmeans_restarts: 4,
            kmeans_max_iterations: 50,
            max_cluster_samples: 4096,
        }
    }
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            min_quality_score: 40.0,
            confidence_quality_pivot: 70.0,
        }
    }
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            workers: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            request_timeout_ms: 30_000,
        }
    }
}

impl Configuration {
    /// Layer an optional TOML file and `COLOR_SEASON__*` environment variables over the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        let configuration: Configuration = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        configuration.validate()?;
        Ok(configuration)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        let q = &self.quality;
        if q.min_brightness >= q.max_brightness {
            return Err(invalid("min_brightness must be below max_brightness"));
        }
        if q.warn_dark_brightness < q.min_brightness
            || q.warn_bright_brightness > q.max_brightness
        {
            return Err(invalid("brightness warning band must sit inside the hard limits"));
        }
        if q.warn_contrast < q.min_contrast || q.warn_sharpness < q.min_sharpness {
            return Err(invalid("warning thresholds must not be below hard thresholds"));
        }
        if !(0.0..=1.0).contains(&q.min_face_coverage)
            || !(0.0..=1.0).contains(&q.max_face_coverage)
            || q.min_face_coverage >= q.max_face_coverage
        {
            return Err(invalid("face coverage bounds must be ordered fractions in [0, 1]"));
        }

        let e = &self.extraction;
        if e.kmeans_restarts == 0 || e.kmeans_max_iterations == 0 {
            return Err(invalid("k-means restarts and iterations must be greater than 0"));
        }
        if e.max_cluster_samples < 16 {
            return Err(invalid("max_cluster_samples must be at least 16"));
        }

        let p = &self.pipeline;
        if !(0.0..=100.0).contains(&p.min_quality_score) {
            return Err(invalid("min_quality_score must be between 0 and 100"));
        }
        if !(0.0..=100.0).contains(&p.confidence_quality_pivot) {
            return Err(invalid("confidence_quality_pivot must be between 0 and 100"));
        }

        if self.batch.workers == 0 {
            return Err(invalid("batch.workers must be greater than 0"));
        }

        Ok(())
    }
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::Invalid(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let configuration = Configuration::default();
        assert!(configuration.validate().is_ok());
        assert_eq!(configuration.pipeline.min_quality_score, 40.0);
        assert_eq!(
            configuration.extraction.hair_selection,
            HairSelection::MedianNearest
        );
    }

    #[test]
    fn rejects_inverted_brightness_limits() {
        let mut configuration = Configuration::default();
        configuration.quality.min_brightness = 230.0;
        assert!(matches!(
            configuration.validate(),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_zero_workers() {
        let mut configuration = Configuration::default();
        configuration.batch.workers = 0;
        assert!(configuration.validate().is_err());
    }

    #[test]
    fn load_without_file_uses_defaults() {
        let configuration = Configuration::load(None).unwrap();
        assert_eq!(configuration.quality.min_contrast, 30.0);
        assert_eq!(configuration.extraction.kmeans_seed, 42);
    }
}
