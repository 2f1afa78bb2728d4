use colored::Colorize;

use crate::domain::entities::alert::Alert;
use crate::domain::value_objects::severity::Severity;

pub const NO_ALERTS_MESSAGE: &str = "No alerts generated yet";

/// One display line: `HH:MM:SS 🚨 CRITICAL CPU usage critical: 95.0%`.
#[must_use]
pub fn format_alert(alert: &Alert) -> String {
    let label = format!("{} {}", alert.severity.emoji(), alert.severity);
    let label = match alert.severity {
        Severity::Critical => label.red().bold(),
        Severity::Warning => label.yellow().bold(),
    };
    format!(
        "{} {} {}",
        alert.timestamp.format("%H:%M:%S").to_string().dimmed(),
        label,
        alert.message
    )
}

/// Lines for the recent-alerts view, newest first.
///
/// `alerts` is expected in chronological order as returned by the log.
#[must_use]
pub fn recent_alert_lines(alerts: &[Alert]) -> Vec<String> {
    if alerts.is_empty() {
        return vec![NO_ALERTS_MESSAGE.to_string()];
    }
    alerts.iter().rev().map(format_alert).collect()
}

pub fn print_recent_alerts(alerts: &[Alert]) {
    for line in recent_alert_lines(alerts) {
        println!("  {line}");
    }
}
