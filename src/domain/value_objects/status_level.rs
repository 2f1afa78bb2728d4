use serde::{Deserialize, Serialize};

use super::severity::Severity;

/// Where a metric value sits relative to its warning and critical thresholds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Nominal,
    Warning,
    Critical,
}

impl StatusLevel {
    /// Critical is tested first; a value equal to a threshold reaches it.
    #[must_use]
    pub fn classify(value: f64, warning: f64, critical: f64) -> Self {
        if value >= critical {
            Self::Critical
        } else if value >= warning {
            Self::Warning
        } else {
            Self::Nominal
        }
    }

    /// Alert severity for this level, `None` when nominal.
    #[must_use]
    pub const fn severity(&self) -> Option<Severity> {
        match self {
            Self::Nominal => None,
            Self::Warning => Some(Severity::Warning),
            Self::Critical => Some(Severity::Critical),
        }
    }

    #[must_use]
    pub const fn indicator(&self) -> &'static str {
        match self {
            Self::Nominal => "🟢",
            Self::Warning => "🟡",
            Self::Critical => "🔴",
        }
    }
}
