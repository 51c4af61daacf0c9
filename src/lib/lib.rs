pub mod config;
pub mod confidence;
pub mod design;
pub mod effect;
pub mod error;
pub mod grid;
pub mod guard;
pub mod interval;
pub mod model;
pub mod report;
#[cfg(feature = "python")]
pub mod python;

pub use confidence::ConfidenceLevel;
pub use design::DesignType;
pub use effect::{minimum_detectable_difference, minimum_directional_difference};
pub use error::PrecisionError;
pub use grid::generate_sample_sizes;
pub use guard::{validate_number, validate_value};
pub use interval::{credible_interval, credible_interval_with, CredibleInterval, IntervalMethod};
