pub mod classification;
pub mod image;
pub mod interpretation;
pub mod palette_resolver;
pub mod synthetic;

pub use classification::ArchetypeClassifier;
pub use image::{FeatureExtractor, PhotoQualityChecker};
pub use interpretation::Interpretation;
pub use palette_resolver::{PaletteResolver, PaletteSelection, PaletteSource};
pub use synthetic::SyntheticSignalGenerator;
