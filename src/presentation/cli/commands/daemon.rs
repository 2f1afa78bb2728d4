use std::time::Duration;

use anyhow::{Context, anyhow};
use chrono::Utc;
use colored::Colorize;
use tokio::sync::mpsc;
use tokio::time::{Instant, Interval, MissedTickBehavior};

use crate::application::config::{AppConfig, ConfigWatcher};
use crate::application::services::monitor::{
    RECENT_ALERTS_SHOWN, SharedSession, SharedThresholds, tick_shared,
};
use crate::domain::value_objects::thresholds::ThresholdSet;
use crate::presentation::cli::formatters::alert_fmt::print_recent_alerts;
use crate::presentation::cli::formatters::status_fmt::{
    format_duration, format_tick_line, print_section_header,
};

/// Loop settings for [`run_daemon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchOptions {
    pub interval: Duration,
    pub sample_window: Duration,
    /// Stop after the first tick
    pub once: bool,
}

impl WatchOptions {
    /// Interval and sample window taken from a reloaded config.
    #[must_use]
    pub const fn reloaded(self, config: &AppConfig) -> Self {
        Self {
            interval: config.settings.interval(),
            sample_window: config.settings.sample_window(),
            once: self.once,
        }
    }
}

/// Run the monitoring loop at the configured interval.
///
/// The loop runs until it receives Ctrl+C via [`tokio::signal::ctrl_c()`]
/// (or after one tick with `once`), then prints a session summary. Each tick
/// samples on a blocking thread so the CPU observation window does not stall
/// the runtime.
///
/// When a `watcher` is given, the config file is re-read before each tick:
/// new thresholds and sample window apply to that tick, a changed
/// `history_points` resizes the history immediately and a changed
/// `refresh_interval` restarts the timer.
///
/// Every message on `clear_requests` empties history and alert log.
///
/// Sampling failures are logged and the tick is skipped; the loop continues.
///
/// # Errors
///
/// Returns an error if a lock is poisoned or the blocking task panics.
pub async fn run_daemon(
    session: SharedSession,
    thresholds: SharedThresholds,
    mut watcher: Option<ConfigWatcher>,
    mut clear_requests: Option<mpsc::Receiver<()>>,
    mut options: WatchOptions,
) -> anyhow::Result<()> {
    tracing::info!(
        "Monitoring started (interval: {}s)",
        options.interval.as_secs()
    );
    let mut interval = ticker(options.interval, Instant::now());

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                if let Some(config) = watcher.as_mut().and_then(ConfigWatcher::poll) {
                    apply_config(&session, &thresholds, &config)?;
                    let reloaded = options.reloaded(&config);
                    if reloaded.interval != options.interval {
                        tracing::info!(
                            "Refresh interval {}s -> {}s",
                            options.interval.as_secs(),
                            reloaded.interval.as_secs()
                        );
                        interval = ticker(reloaded.interval, Instant::now() + reloaded.interval);
                    }
                    options = reloaded;
                }

                run_tick(&session, &thresholds, options.sample_window).await?;

                if options.once {
                    break;
                }
            }
            Some(()) = next_clear_request(&mut clear_requests) => {
                session
                    .lock()
                    .map_err(|e| anyhow!("session lock poisoned: {e}"))?
                    .clear();
                println!("{}", "History and alerts cleared".dimmed());
            }
            _ = &mut shutdown => {
                tracing::info!("Shutdown signal received");
                println!("\nStopping hostwatch...");
                break;
            }
        }
    }

    print_summary(&session)?;
    Ok(())
}

fn ticker(period: Duration, start: Instant) -> Interval {
    let mut interval = tokio::time::interval_at(start, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    interval
}

/// Waits for the next clear request; pends forever without a channel.
async fn next_clear_request(requests: &mut Option<mpsc::Receiver<()>>) -> Option<()> {
    match requests {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}

/// Forwards every SIGUSR1 to `requests` as a clear request.
///
/// # Errors
///
/// Returns an error if the signal handler cannot be installed.
#[cfg(unix)]
pub fn forward_clear_signal(requests: mpsc::Sender<()>) -> anyhow::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};
    use tokio::sync::mpsc::error::TrySendError;

    let mut usr1 =
        signal(SignalKind::user_defined1()).context("Failed to install SIGUSR1 handler")?;
    tokio::spawn(async move {
        while usr1.recv().await.is_some() {
            // A full channel already holds a pending clear
            if let Err(TrySendError::Closed(())) = requests.try_send(()) {
                break;
            }
        }
    });
    tracing::info!(
        "Send SIGUSR1 to clear history (kill -USR1 {})",
        std::process::id()
    );
    Ok(())
}

async fn run_tick(
    session: &SharedSession,
    thresholds: &SharedThresholds,
    window: Duration,
) -> anyhow::Result<()> {
    let (task_session, task_thresholds) = (session.clone(), thresholds.clone());
    let result =
        tokio::task::spawn_blocking(move || tick_shared(&task_session, &task_thresholds, window))
            .await
            .context("Tick task failed")?;

    match result {
        Ok(outcome) => {
            let current = read_thresholds(thresholds)?;
            println!("{}", format_tick_line(&outcome.sample, &current));
        }
        Err(e) => tracing::error!("Monitoring tick failed: {e:#}"),
    }
    Ok(())
}

fn read_thresholds(thresholds: &SharedThresholds) -> anyhow::Result<ThresholdSet> {
    Ok(thresholds
        .read()
        .map_err(|e| anyhow!("threshold lock poisoned: {e}"))?
        .clone())
}

/// Replaces the live thresholds and resizes history from a reloaded config.
///
/// # Errors
///
/// Returns an error if a lock is poisoned.
pub fn apply_config(
    session: &SharedSession,
    thresholds: &SharedThresholds,
    config: &AppConfig,
) -> anyhow::Result<()> {
    *thresholds
        .write()
        .map_err(|e| anyhow!("threshold lock poisoned: {e}"))? =
        ThresholdSet::from(&config.thresholds);

    let mut guard = session
        .lock()
        .map_err(|e| anyhow!("session lock poisoned: {e}"))?;
    if guard.history().capacity() != config.settings.history_points {
        tracing::info!(
            "History capacity {} -> {}",
            guard.history().capacity(),
            config.settings.history_points
        );
        guard.set_history_capacity(config.settings.history_points);
    }
    Ok(())
}

fn print_summary(session: &SharedSession) -> anyhow::Result<()> {
    let guard = session
        .lock()
        .map_err(|e| anyhow!("session lock poisoned: {e}"))?;

    println!();
    print_section_header("📊 Session summary");
    println!(
        "  Monitored for {} · {} sample(s) retained · {} alert(s) logged",
        format_duration(guard.monitoring_duration(Utc::now())),
        guard.history().len(),
        guard.alert_count()
    );

    if let Some(stats) = guard.stats() {
        for (name, metric) in [
            ("CPU", stats.cpu),
            ("Memory", stats.memory),
            ("Disk", stats.disk),
        ] {
            println!(
                "  {name:<7} min {:>5.1}%  avg {:>5.1}%  max {:>5.1}%",
                metric.min, metric.mean, metric.max
            );
        }
        println!(
            "  {}",
            format!(
                "Network over {}s: ↑ {:.1} MB ↓ {:.1} MB",
                stats.span_secs,
                stats.network_delta.sent_mb(),
                stats.network_delta.recv_mb()
            )
            .dimmed()
        );
    }

    println!();
    print_section_header("🔔 Recent alerts");
    print_recent_alerts(&guard.recent_alerts(RECENT_ALERTS_SHOWN));
    Ok(())
}
