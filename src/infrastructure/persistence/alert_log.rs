use crate::domain::entities::alert::Alert;

use super::bounded_log::BoundedLog;

/// Maximum number of alerts retained.
pub const ALERT_LOG_CAPACITY: usize = 100;

/// Chronological record of emitted alerts, capped at [`ALERT_LOG_CAPACITY`].
#[derive(Debug, Clone)]
pub struct AlertLog {
    alerts: BoundedLog<Alert>,
}

impl AlertLog {
    #[must_use]
    pub fn new() -> Self {
        Self {
            alerts: BoundedLog::new(ALERT_LOG_CAPACITY),
        }
    }

    pub fn record(&mut self, alert: Alert) {
        self.alerts.push(alert);
    }

    /// The last `count` alerts in insertion order (oldest of them first).
    #[must_use]
    pub fn recent(&self, count: usize) -> Vec<Alert> {
        self.alerts.tail(count)
    }

    #[must_use]
    pub fn all(&self) -> Vec<Alert> {
        self.alerts.to_vec()
    }

    pub fn clear(&mut self) {
        self.alerts.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}

impl Default for AlertLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Alert> for AlertLog {
    fn extend<I: IntoIterator<Item = Alert>>(&mut self, iter: I) {
        self.alerts.extend(iter);
    }
}
