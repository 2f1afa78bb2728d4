use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use hostwatch::application::config::{AppConfig, ConfigWatcher};
use hostwatch::application::services::monitor::MonitoringSession;
use hostwatch::domain::ports::notifier::Notifier;
use hostwatch::domain::ports::sampler::MetricsSampler;
use hostwatch::domain::value_objects::thresholds::ThresholdSet;
use hostwatch::infrastructure::collectors::SysinfoSampler;
use hostwatch::infrastructure::notifications::composite::CompositeNotifier;
use hostwatch::infrastructure::notifications::log_file::LogFileNotifier;
use hostwatch::infrastructure::notifications::terminal::TerminalNotifier;
use hostwatch::presentation::cli::app::{Cli, Commands};
use hostwatch::presentation::cli::commands::config::run_config;
#[cfg(unix)]
use hostwatch::presentation::cli::commands::daemon::forward_clear_signal;
use hostwatch::presentation::cli::commands::daemon::{WatchOptions, run_daemon};
use hostwatch::presentation::cli::commands::info::run_info;
use hostwatch::presentation::cli::commands::status::run_status;

fn print_banner() {
    println!("{}", "━".repeat(40).cyan());
    println!("{}", "  HOSTWATCH: Host Resource Monitor".bold().cyan());
    println!("{}", "━".repeat(40).cyan());
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_config(path: &Path, explicit: bool) -> anyhow::Result<AppConfig> {
    if explicit {
        AppConfig::load_from(path)
    } else {
        AppConfig::load_or_create(path)
    }
}

fn build_notifier(config: &AppConfig) -> CompositeNotifier {
    let mut notifiers: Vec<Box<dyn Notifier>> = Vec::new();
    if config.notifications.terminal {
        notifiers.push(Box::new(TerminalNotifier::new()));
    }
    if let Some(ref path) = config.notifications.log_file {
        notifiers.push(Box::new(LogFileNotifier::new(path)));
    }
    CompositeNotifier::new(notifiers)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    let explicit = cli.config.is_some();
    let config_path: PathBuf = match cli.config {
        Some(ref path) => path.clone(),
        None => AppConfig::config_path()?,
    };

    match cli.command {
        Some(Commands::Config { init }) => run_config(&config_path, init)?,
        Some(Commands::Info { json }) => {
            let config = load_config(&config_path, explicit)?;
            run_info(build_sampler(&config).as_ref(), json)?;
        }
        Some(Commands::Status { json }) => {
            let config = load_config(&config_path, explicit)?;
            let mut session = MonitoringSession::new(
                build_sampler(&config),
                Box::new(CompositeNotifier::default()),
                1,
            );
            let thresholds = ThresholdSet::from(&config.thresholds);
            run_status(
                &mut session,
                &thresholds,
                config.settings.sample_window(),
                json,
            )?;
        }
        Some(Commands::Watch {
            interval,
            history_points,
            once,
        }) => {
            let mut config = load_config(&config_path, explicit)?;
            if let Some(secs) = interval {
                config.settings.refresh_interval = secs;
            }
            if let Some(points) = history_points {
                config.settings.history_points = points;
            }
            config.validate()?;
            watch(&config, &config_path, once).await?;
        }
        None => {
            let config = load_config(&config_path, explicit)?;
            watch(&config, &config_path, false).await?;
        }
    }

    Ok(())
}

// Manual DI: main.rs is the only place that knows concrete types
fn build_sampler(config: &AppConfig) -> Arc<dyn MetricsSampler> {
    Arc::new(SysinfoSampler::new(&config.settings.disk_path))
}

async fn watch(config: &AppConfig, config_path: &Path, once: bool) -> anyhow::Result<()> {
    print_banner();
    let sampler = build_sampler(config);
    let system = sampler.system_info();
    tracing::info!(
        "Watching {} ({}, {} CPU(s)), disk {}",
        system.hostname,
        system.os_name,
        system.cpu_count,
        config.settings.disk_path
    );

    let session = MonitoringSession::new(
        sampler,
        Box::new(build_notifier(config)),
        config.settings.history_points,
    )
    .into_shared();
    let thresholds = Arc::new(RwLock::new(ThresholdSet::from(&config.thresholds)));
    let watcher = config_path
        .exists()
        .then(|| ConfigWatcher::new(config_path));

    #[cfg(unix)]
    let clear_requests = {
        let (requests, receiver) = tokio::sync::mpsc::channel(1);
        forward_clear_signal(requests)?;
        Some(receiver)
    };
    #[cfg(not(unix))]
    let clear_requests = None;

    run_daemon(
        session,
        thresholds,
        watcher,
        clear_requests,
        WatchOptions {
            interval: config.settings.interval(),
            sample_window: config.settings.sample_window(),
            once,
        },
    )
    .await
}
