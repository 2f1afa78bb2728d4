use crate::domain::entities::alert::Alert;
use crate::domain::entities::sample::Sample;
use crate::domain::rules::RuleEngine;
use crate::domain::value_objects::thresholds::ThresholdSet;
use crate::infrastructure::persistence::AlertLog;

/// Evaluates samples against thresholds and remembers what fired.
#[derive(Default)]
pub struct AlertEngine {
    rules: RuleEngine,
    log: AlertLog,
}

impl AlertEngine {
    #[must_use]
    pub fn new(rules: RuleEngine) -> Self {
        Self {
            rules,
            log: AlertLog::new(),
        }
    }

    /// Alerts for `sample` in CPU, memory, disk order, also appended to the log.
    pub fn evaluate(&mut self, sample: &Sample, thresholds: &ThresholdSet) -> Vec<Alert> {
        let alerts = self.rules.analyze(sample, thresholds);
        self.log.extend(alerts.iter().cloned());
        alerts
    }

    /// The last `count` logged alerts, oldest first.
    #[must_use]
    pub fn recent(&self, count: usize) -> Vec<Alert> {
        self.log.recent(count)
    }

    #[must_use]
    pub const fn log(&self) -> &AlertLog {
        &self.log
    }

    pub fn clear_history(&mut self) {
        self.log.clear();
    }
}
