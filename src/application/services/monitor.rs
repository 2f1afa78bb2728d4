use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use anyhow::{Context, anyhow};
use chrono::{DateTime, TimeDelta, Utc};

use super::alert_engine::AlertEngine;
use super::stats::summarize;
use crate::domain::entities::alert::Alert;
use crate::domain::entities::history_stats::HistoryStats;
use crate::domain::entities::sample::Sample;
use crate::domain::entities::system_info::SystemInfo;
use crate::domain::ports::notifier::Notifier;
use crate::domain::ports::sampler::{MetricsSampler, SamplerError};
use crate::domain::value_objects::thresholds::ThresholdSet;
use crate::infrastructure::persistence::HistoryBuffer;

/// Number of alerts shown in the recent-alerts view.
pub const RECENT_ALERTS_SHOWN: usize = 10;

/// A session shared between the tick loop and readers.
pub type SharedSession = Arc<Mutex<MonitoringSession>>;

/// Thresholds that may be replaced between ticks.
pub type SharedThresholds = Arc<RwLock<ThresholdSet>>;

/// Result of a single tick.
#[derive(Debug, Clone)]
pub struct TickOutcome {
    pub sample: Sample,
    pub alerts: Vec<Alert>,
}

/// Owns the sampler, history and alert engine of one monitored host.
///
/// Thresholds are not stored: every tick reads the ones it is handed.
pub struct MonitoringSession {
    sampler: Arc<dyn MetricsSampler>,
    history: HistoryBuffer,
    engine: AlertEngine,
    notifier: Box<dyn Notifier>,
    started_at: DateTime<Utc>,
}

impl MonitoringSession {
    #[must_use]
    pub fn new(
        sampler: Arc<dyn MetricsSampler>,
        notifier: Box<dyn Notifier>,
        history_points: usize,
    ) -> Self {
        Self {
            sampler,
            history: HistoryBuffer::new(history_points),
            engine: AlertEngine::default(),
            notifier,
            started_at: Utc::now(),
        }
    }

    /// Wraps the session for sharing across tasks.
    #[must_use]
    pub fn into_shared(self) -> SharedSession {
        Arc::new(Mutex::new(self))
    }

    /// Sample, append, evaluate, notify.
    ///
    /// # Errors
    ///
    /// Returns the sampler error when the sample could not be taken; the tick
    /// is then skipped and neither history nor alert log change.
    pub fn tick(
        &mut self,
        thresholds: &ThresholdSet,
        window: Duration,
    ) -> Result<TickOutcome, SamplerError> {
        let sample = self.sampler.sample(window).inspect_err(|e| {
            tracing::warn!("Tick skipped: {e}");
        })?;
        Ok(self.record(sample, thresholds))
    }

    /// Appends an already-taken sample and evaluates it.
    pub fn record(&mut self, sample: Sample, thresholds: &ThresholdSet) -> TickOutcome {
        self.history.append(sample.clone());
        let alerts = self.engine.evaluate(&sample, thresholds);

        if alerts.is_empty() {
            tracing::debug!(
                "System OK: cpu {:.1}% mem {:.1}% disk {:.1}%",
                sample.cpu_percent,
                sample.memory.percent,
                sample.disk.percent
            );
        } else {
            tracing::warn!("{} alert(s) detected", alerts.len());
        }

        for alert in &alerts {
            if let Err(e) = self.notifier.notify(alert) {
                tracing::warn!("Alert notification failed: {e}");
            }
        }

        TickOutcome { sample, alerts }
    }

    /// Empties history and alert log. Thresholds are untouched.
    pub fn clear(&mut self) {
        self.history.clear();
        self.engine.clear_history();
        tracing::info!("Session history cleared");
    }

    #[must_use]
    pub const fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    #[must_use]
    pub fn recent_alerts(&self, count: usize) -> Vec<Alert> {
        self.engine.recent(count)
    }

    #[must_use]
    pub fn alert_count(&self) -> usize {
        self.engine.log().len()
    }

    pub fn set_history_capacity(&mut self, capacity: usize) {
        self.history.set_capacity(capacity);
    }

    #[must_use]
    pub fn system_info(&self) -> SystemInfo {
        self.sampler.system_info()
    }

    #[must_use]
    pub fn sampler(&self) -> Arc<dyn MetricsSampler> {
        Arc::clone(&self.sampler)
    }

    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Time elapsed since the session started, clamped at zero.
    #[must_use]
    pub fn monitoring_duration(&self, now: DateTime<Utc>) -> TimeDelta {
        (now - self.started_at).max(TimeDelta::zero())
    }

    #[must_use]
    pub fn stats(&self) -> Option<HistoryStats> {
        summarize(&self.history)
    }
}

/// Runs one tick on a shared session.
///
/// The sample is taken without holding the session lock, so readers are not
/// blocked for the CPU observation window. Append and evaluation happen
/// under the lock with the thresholds current at that moment.
///
/// Concurrent calls may append in lock order rather than timestamp order.
///
/// # Errors
///
/// Returns an error if sampling fails or a lock is poisoned.
pub fn tick_shared(
    session: &SharedSession,
    thresholds: &SharedThresholds,
    window: Duration,
) -> anyhow::Result<TickOutcome> {
    let sampler = session
        .lock()
        .map_err(|e| anyhow!("session lock poisoned: {e}"))?
        .sampler();

    let sample = sampler
        .sample(window)
        .inspect_err(|e| tracing::warn!("Tick skipped: {e}"))
        .context("Failed to sample host metrics")?;

    let current = thresholds
        .read()
        .map_err(|e| anyhow!("threshold lock poisoned: {e}"))?
        .clone();

    let mut guard = session
        .lock()
        .map_err(|e| anyhow!("session lock poisoned: {e}"))?;
    Ok(guard.record(sample, &current))
}
