use colored::Colorize;

use crate::domain::entities::alert::Alert;
use crate::domain::ports::notifier::{NotificationError, Notifier};
use crate::domain::value_objects::severity::Severity;

/// Prints each alert on stdout as a coloured, timestamped line.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl TerminalNotifier {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, alert: &Alert) -> Result<(), NotificationError> {
        println!("{}", format_alert_line(alert));
        Ok(())
    }
}

/// `HH:MM:SS <badge> <message> (threshold N%)`
#[must_use]
pub fn format_alert_line(alert: &Alert) -> String {
    let time = alert.timestamp.format("%H:%M:%S").to_string();
    let message = match alert.severity {
        Severity::Critical => alert.message.red().bold().to_string(),
        Severity::Warning => alert.message.yellow().to_string(),
    };
    format!(
        "{} {} {} {}",
        time.dimmed(),
        severity_badge(alert.severity),
        message,
        format!("(threshold {:.0}%)", alert.threshold).dimmed()
    )
}

#[must_use]
pub fn severity_badge(severity: Severity) -> String {
    let label = format!(" {} {} ", severity.emoji(), severity);
    match severity {
        Severity::Critical => label.on_red().white().bold().to_string(),
        Severity::Warning => label.on_yellow().black().bold().to_string(),
    }
}
