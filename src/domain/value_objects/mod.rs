pub mod metric;
pub mod severity;
pub mod status_level;
pub mod thresholds;

pub use metric::Metric;
pub use severity::Severity;
pub use status_level::StatusLevel;
pub use thresholds::{MetricThresholds, ThresholdSet};
