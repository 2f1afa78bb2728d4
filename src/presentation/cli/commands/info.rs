use chrono::Utc;
use colored::Colorize;
use serde::Serialize;

use crate::domain::entities::system_info::SystemInfo;
use crate::domain::ports::sampler::MetricsSampler;
use crate::presentation::cli::formatters::status_fmt::format_uptime;

#[derive(Debug, Serialize)]
struct InfoReport<'a> {
    #[serde(flatten)]
    system: &'a SystemInfo,
    uptime_secs: i64,
}

/// Text lines for the `info` command.
#[must_use]
pub fn info_lines(system: &SystemInfo) -> Vec<String> {
    vec![
        format!("Hostname:  {}", system.hostname),
        format!("OS:        {}", system.os_name),
        format!("CPUs:      {}", system.cpu_count),
        format!(
            "Boot time: {}",
            system.boot_time.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        format!("Uptime:    {}", format_uptime(system.uptime_at(Utc::now()))),
    ]
}

/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run_info(sampler: &dyn MetricsSampler, json: bool) -> anyhow::Result<()> {
    let system = sampler.system_info();

    if json {
        let report = InfoReport {
            system: &system,
            uptime_secs: system.uptime_at(Utc::now()).num_seconds(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "hostwatch: Host Information".bold().cyan());
    println!("{}", "━".repeat(50));
    for line in info_lines(&system) {
        println!("  {line}");
    }
    Ok(())
}
