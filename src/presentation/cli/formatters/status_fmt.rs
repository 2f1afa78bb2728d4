use colored::{ColoredString, Colorize};

use chrono::TimeDelta;

use crate::domain::entities::sample::Sample;
use crate::domain::value_objects::metric::Metric;
use crate::domain::value_objects::status_level::StatusLevel;
use crate::domain::value_objects::thresholds::ThresholdSet;

/// Level of `metric` in `sample` against the live thresholds.
#[must_use]
pub fn level_of(sample: &Sample, metric: Metric, thresholds: &ThresholdSet) -> StatusLevel {
    thresholds
        .for_metric(metric)
        .classify(sample.value_of(metric))
}

fn paint(text: String, level: StatusLevel) -> ColoredString {
    match level {
        StatusLevel::Critical => text.red().bold(),
        StatusLevel::Warning => text.yellow(),
        StatusLevel::Nominal => text.green(),
    }
}

#[must_use]
pub fn progress_bar(value: f64, width: usize, level: StatusLevel) -> String {
    let ratio = (value / 100.0).clamp(0.0, 1.0);
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);

    let bar_filled = paint("█".repeat(filled), level);
    let bar_empty = "░".repeat(empty);

    format!("{bar_filled}{bar_empty}")
}

#[must_use]
pub fn colorize_percent(value: f64, level: StatusLevel) -> ColoredString {
    paint(format!("{value:.1}%"), level)
}

/// `"<days>d <hours>h"`, negative spans shown as zero.
#[must_use]
pub fn format_uptime(uptime: TimeDelta) -> String {
    let hours = uptime.num_hours().max(0);
    format!("{}d {}h", hours / 24, hours % 24)
}

/// `"1h 02m 03s"`, or `"2m 03s"` under an hour.
#[must_use]
pub fn format_duration(duration: TimeDelta) -> String {
    let secs = duration.num_seconds().max(0);
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        format!("{h}h {m:02}m {s:02}s")
    } else {
        format!("{m}m {s:02}s")
    }
}

/// One-line summary printed for every tick of `watch`.
#[must_use]
pub fn format_tick_line(sample: &Sample, thresholds: &ThresholdSet) -> String {
    let metrics = Metric::ALL
        .into_iter()
        .map(|metric| {
            let level = level_of(sample, metric, thresholds);
            format!(
                "{} {} {}",
                level.indicator(),
                metric.name(),
                colorize_percent(sample.value_of(metric), level)
            )
        })
        .collect::<Vec<_>>()
        .join("  ");

    format!(
        "{} {}  {}",
        sample.timestamp.format("%H:%M:%S").to_string().dimmed(),
        metrics,
        format!(
            "↑ {:.1} MB ↓ {:.1} MB",
            sample.network.sent_mb(),
            sample.network.recv_mb()
        )
        .dimmed()
    )
}

pub fn print_section_header(title: &str) {
    println!("{}", title.bold().cyan());
    let display_width = title.chars().count();
    println!("{}", "─".repeat(display_width).cyan());
}

/// Bar, percentage and level indicator for one metric, with a detail line.
pub fn print_metric(sample: &Sample, metric: Metric, thresholds: &ThresholdSet, detail: &str) {
    let value = sample.value_of(metric);
    let level = level_of(sample, metric, thresholds);
    println!(
        "  {} {} {}",
        level.indicator(),
        progress_bar(value, 30, level),
        colorize_percent(value, level)
    );
    println!("  {detail}");
}
