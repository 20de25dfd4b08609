//! difteri-result
//!
//! Display derivations for a prediction: confidence and similarity
//! percentages, severity tier, vital-sign status badges, chart slices and
//! the assembled result view. Everything here is pure.

pub mod case;
pub mod chart;
pub mod metrics;
pub mod status;
pub mod view;

pub use case::SimilarCaseCard;
pub use chart::ChartSlice;
pub use metrics::{Severity, confidence_percentage, round_half_up, similarity_percentage};
pub use status::{BloodPressureStatus, TemperatureStatus};
pub use view::ResultView;
