use serde::{Deserialize, Serialize};

use super::metric::Metric;
use super::status_level::StatusLevel;

/// Warning and critical percentages for monitored resources.
///
/// `warning <= critical` is expected per metric but not enforced here: the
/// engine checks critical first whatever the values are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSet {
    /// CPU usage percentage that triggers a warning
    pub cpu_warning: f64,
    /// CPU usage percentage that triggers a critical alert
    pub cpu_critical: f64,
    /// Memory usage percentage that triggers a warning
    pub memory_warning: f64,
    /// Memory usage percentage that triggers a critical alert
    pub memory_critical: f64,
    /// Disk usage percentage that triggers a warning
    pub disk_warning: f64,
    /// Disk usage percentage that triggers a critical alert
    pub disk_critical: f64,
}

/// The pair of thresholds that apply to a single metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricThresholds {
    pub warning: f64,
    pub critical: f64,
}

impl MetricThresholds {
    #[must_use]
    pub fn classify(&self, value: f64) -> StatusLevel {
        StatusLevel::classify(value, self.warning, self.critical)
    }

    #[must_use]
    pub const fn for_level(&self, level: StatusLevel) -> Option<f64> {
        match level {
            StatusLevel::Nominal => None,
            StatusLevel::Warning => Some(self.warning),
            StatusLevel::Critical => Some(self.critical),
        }
    }
}

impl ThresholdSet {
    #[must_use]
    pub const fn for_metric(&self, metric: Metric) -> MetricThresholds {
        match metric {
            Metric::Cpu => MetricThresholds {
                warning: self.cpu_warning,
                critical: self.cpu_critical,
            },
            Metric::Memory => MetricThresholds {
                warning: self.memory_warning,
                critical: self.memory_critical,
            },
            Metric::Disk => MetricThresholds {
                warning: self.disk_warning,
                critical: self.disk_critical,
            },
        }
    }

    /// Metrics whose warning threshold lies above the critical one.
    #[must_use]
    pub fn inverted_metrics(&self) -> Vec<Metric> {
        Metric::ALL
            .into_iter()
            .filter(|&m| {
                let t = self.for_metric(m);
                t.warning > t.critical
            })
            .collect()
    }
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self {
            cpu_warning: 70.0,
            cpu_critical: 90.0,
            memory_warning: 80.0,
            memory_critical: 95.0,
            disk_warning: 85.0,
            disk_critical: 95.0,
        }
    }
}
