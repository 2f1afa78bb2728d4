use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::metric::Metric;
use crate::domain::value_objects::severity::Severity;

/// A threshold crossing detected on one metric of one sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub metric: Metric,
    /// Observed percentage
    pub value: f64,
    /// The threshold that was reached
    pub threshold: f64,
    pub message: String,
}

impl Alert {
    #[must_use]
    pub fn new(
        timestamp: DateTime<Utc>,
        severity: Severity,
        metric: Metric,
        value: f64,
        threshold: f64,
    ) -> Self {
        Self {
            timestamp,
            severity,
            metric,
            value,
            threshold,
            message: format!("{metric} usage {}: {value:.1}%", severity.qualifier()),
        }
    }
}

impl std::fmt::Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}
