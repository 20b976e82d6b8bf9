mod classification;
mod palette;
mod quality_report;
mod raw_signal;
mod season;

pub use classification::{ClassificationResult, Selection};
pub(crate) use palette::swatch;
pub use palette::{ColorSwatch, Palette};
pub use quality_report::{QualityMetrics, QualityReport};
pub use raw_signal::{lightness_contrast, ManualSignal, RawSignal};
pub use season::{Season, Subtype, Undertone, COOL_UNDERTONE_MAX_B, WARM_UNDERTONE_MIN_B};
