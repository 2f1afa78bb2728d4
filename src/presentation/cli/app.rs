use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// hostwatch: host resource monitor
///
/// Samples CPU, memory, disk and network usage, keeps a rolling history,
/// and raises alerts when usage crosses configured thresholds.
#[derive(Parser, Debug)]
#[command(name = "hostwatch")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to custom config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sample continuously and report alerts (default)
    #[command(alias = "w")]
    Watch {
        /// Seconds between samples (default: config)
        #[arg(short, long)]
        interval: Option<u64>,

        /// Number of samples kept in history (default: config)
        #[arg(long)]
        history_points: Option<usize>,

        /// Run a single tick and exit
        #[arg(long)]
        once: bool,
    },

    /// Take one sample and show current status
    #[command(alias = "s")]
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show host identity
    #[command(alias = "i")]
    Info {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration
    #[command(alias = "c")]
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_status_command() {
        let cli = Cli::try_parse_from(["hostwatch", "status"]).unwrap_or_else(|e| panic!("{e}"));
        assert!(matches!(cli.command, Some(Commands::Status { json: false })));
    }

    #[test]
    fn parse_status_with_json() {
        let cli = Cli::try_parse_from(["hostwatch", "status", "--json"])
            .unwrap_or_else(|e| panic!("{e}"));
        assert!(matches!(cli.command, Some(Commands::Status { json: true })));
    }

    #[test]
    fn parse_status_alias() {
        let cli = Cli::try_parse_from(["hostwatch", "s"]).unwrap_or_else(|e| panic!("{e}"));
        assert!(matches!(cli.command, Some(Commands::Status { .. })));
    }

    #[test]
    fn parse_global_verbose() {
        let cli = Cli::try_parse_from(["hostwatch", "--verbose", "status"])
            .unwrap_or_else(|e| panic!("{e}"));
        assert!(cli.verbose);
    }

    #[test]
    fn parse_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["hostwatch", "info", "--config", "/tmp/test.toml"])
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/test.toml")));
    }

    #[test]
    fn no_command_returns_none() {
        let cli = Cli::try_parse_from(["hostwatch"]).unwrap_or_else(|e| panic!("{e}"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_watch_defaults() {
        let cli = Cli::try_parse_from(["hostwatch", "watch"]).unwrap_or_else(|e| panic!("{e}"));
        assert!(matches!(
            cli.command,
            Some(Commands::Watch {
                interval: None,
                history_points: None,
                once: false
            })
        ));
    }

    #[test]
    fn parse_watch_with_options() {
        let cli = Cli::try_parse_from([
            "hostwatch",
            "w",
            "--interval",
            "2",
            "--history-points",
            "30",
            "--once",
        ])
        .unwrap_or_else(|e| panic!("{e}"));
        assert!(matches!(
            cli.command,
            Some(Commands::Watch {
                interval: Some(2),
                history_points: Some(30),
                once: true
            })
        ));
    }

    #[test]
    fn parse_info_json() {
        let cli = Cli::try_parse_from(["hostwatch", "i", "--json"])
            .unwrap_or_else(|e| panic!("{e}"));
        assert!(matches!(cli.command, Some(Commands::Info { json: true })));
    }

    #[test]
    fn parse_config_init() {
        let cli = Cli::try_parse_from(["hostwatch", "config", "--init"])
            .unwrap_or_else(|e| panic!("{e}"));
        assert!(matches!(cli.command, Some(Commands::Config { init: true })));
    }

    #[test]
    fn rejects_negative_interval() {
        assert!(Cli::try_parse_from(["hostwatch", "watch", "--interval", "-1"]).is_err());
    }
}
