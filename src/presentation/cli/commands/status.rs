use std::time::Duration;

use anyhow::Context;
use chrono::Utc;
use colored::Colorize;
use serde::Serialize;

use crate::application::services::monitor::MonitoringSession;
use crate::domain::entities::alert::Alert;
use crate::domain::entities::sample::Sample;
use crate::domain::entities::system_info::SystemInfo;
use crate::domain::value_objects::metric::Metric;
use crate::domain::value_objects::status_level::StatusLevel;
use crate::domain::value_objects::thresholds::ThresholdSet;
use crate::presentation::cli::formatters::alert_fmt::print_recent_alerts;
use crate::presentation::cli::formatters::status_fmt::{
    format_uptime, level_of, print_metric, print_section_header,
};

/// Everything `status` shows, also its JSON form.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub system: SystemInfo,
    pub uptime_secs: i64,
    pub sample: Sample,
    pub levels: Vec<(Metric, StatusLevel)>,
    pub alerts: Vec<Alert>,
}

/// Takes one sample through `session` and evaluates it.
///
/// # Errors
///
/// Returns an error if the sample cannot be taken.
pub fn build_report(
    session: &mut MonitoringSession,
    thresholds: &ThresholdSet,
    window: Duration,
) -> anyhow::Result<StatusReport> {
    let outcome = session
        .tick(thresholds, window)
        .context("Failed to sample host metrics")?;
    let system = session.system_info();
    let levels = Metric::ALL
        .into_iter()
        .map(|m| (m, level_of(&outcome.sample, m, thresholds)))
        .collect();

    Ok(StatusReport {
        uptime_secs: system.uptime_at(outcome.sample.timestamp).num_seconds(),
        system,
        sample: outcome.sample,
        levels,
        alerts: outcome.alerts,
    })
}

/// # Errors
///
/// Returns an error if sampling or JSON serialization fails.
pub fn run_status(
    session: &mut MonitoringSession,
    thresholds: &ThresholdSet,
    window: Duration,
    json: bool,
) -> anyhow::Result<()> {
    let report = build_report(session, thresholds, window)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let system = &report.system;
    let sample = &report.sample;

    println!("{}", "hostwatch: System Status".bold().cyan());
    println!("{}", "━".repeat(50));
    println!(
        "  {} · {} · {} CPU(s) · up {}",
        system.hostname.bold(),
        system.os_name,
        system.cpu_count,
        format_uptime(system.uptime_at(Utc::now()))
    );

    print_section_header("\n🖥️  CPU");
    print_metric(sample, Metric::Cpu, thresholds, "Global usage");

    print_section_header("\n💾 Memory");
    print_metric(
        sample,
        Metric::Memory,
        thresholds,
        &format!(
            "Used: {:.1} GB / {:.1} GB",
            sample.memory.used_gb(),
            sample.memory.total_gb()
        ),
    );

    print_section_header("\n💿 Disk");
    print_metric(
        sample,
        Metric::Disk,
        thresholds,
        &format!(
            "Used: {:.1} GB / {:.1} GB ({:.1} GB free)",
            sample.disk.used_gb(),
            sample.disk.total_gb(),
            sample.disk.free_gb()
        ),
    );

    print_section_header("\n🌐 Network (since boot)");
    println!(
        "  Sent: {:.1} MB · Received: {:.1} MB",
        sample.network.sent_mb(),
        sample.network.recv_mb()
    );
    println!(
        "  Packets: {} sent · {} received",
        sample.network.packets_sent, sample.network.packets_recv
    );

    print_section_header("\n🔔 Alerts");
    print_recent_alerts(&report.alerts);

    Ok(())
}
