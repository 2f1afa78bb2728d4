use serde::{Deserialize, Serialize};

/// Severity level of a threshold alert
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "WARNING"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl Severity {
    #[must_use]
    pub const fn emoji(&self) -> &str {
        match self {
            Self::Warning => "⚠️",
            Self::Critical => "🚨",
        }
    }

    /// Word used in alert messages: "CPU usage high" vs "CPU usage critical".
    #[must_use]
    pub const fn qualifier(&self) -> &'static str {
        match self {
            Self::Warning => "high",
            Self::Critical => "critical",
        }
    }
}
