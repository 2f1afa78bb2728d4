use crate::domain::entities::alert::Alert;
use crate::domain::entities::sample::Sample;
use crate::domain::value_objects::metric::Metric;
use crate::domain::value_objects::thresholds::ThresholdSet;

use super::Rule;

/// Percentage-usage rule for a single metric.
///
/// Emits at most one alert: critical when `value >= critical`, otherwise
/// warning when `value >= warning`.
pub struct UsageRule {
    metric: Metric,
}

impl UsageRule {
    #[must_use]
    pub const fn new(metric: Metric) -> Self {
        Self { metric }
    }
}

impl Rule for UsageRule {
    fn name(&self) -> &'static str {
        match self.metric {
            Metric::Cpu => "cpu_usage",
            Metric::Memory => "memory_usage",
            Metric::Disk => "disk_usage",
        }
    }

    fn evaluate(&self, sample: &Sample, thresholds: &ThresholdSet) -> Option<Alert> {
        let value = sample.value_of(self.metric);
        let limits = thresholds.for_metric(self.metric);
        let level = limits.classify(value);

        let severity = level.severity()?;
        let threshold = limits.for_level(level)?;

        Some(Alert::new(
            sample.timestamp,
            severity,
            self.metric,
            value,
            threshold,
        ))
    }
}
