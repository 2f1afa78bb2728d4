use serde::{Deserialize, Serialize};

use super::sample::NetworkCounters;

/// Min/max/mean of one metric over the retained history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl MetricStats {
    #[must_use]
    pub const fn new(min: f64, max: f64, mean: f64) -> Self {
        Self { min, max, mean }
    }
}

/// Summary of the samples currently held in the history buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryStats {
    /// Number of samples summarized.
    pub sample_count: usize,
    /// Seconds between the oldest and newest sample.
    pub span_secs: i64,
    pub cpu: MetricStats,
    pub memory: MetricStats,
    pub disk: MetricStats,
    /// Counter growth between the oldest and newest sample.
    pub network_delta: NetworkCounters,
}
