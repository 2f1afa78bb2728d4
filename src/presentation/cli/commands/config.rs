use std::path::Path;

use anyhow::Context;
use colored::Colorize;

use crate::application::config::AppConfig;

/// Prints the effective configuration, creating a default file first when
/// `init` is set and none exists.
///
/// # Errors
///
/// Returns an error if the file cannot be written, read or serialized.
pub fn run_config(path: &Path, init: bool) -> anyhow::Result<()> {
    if init {
        if path.exists() {
            println!("Config already exists at {}", path.display());
        } else {
            AppConfig::default().save_to(path)?;
            println!("{} {}", "Wrote default config to".green(), path.display());
        }
    }

    let config = if path.exists() {
        AppConfig::load_from(path)?
    } else {
        println!(
            "{}",
            format!("No config at {}, showing defaults", path.display()).dimmed()
        );
        AppConfig::default()
    };

    println!("{}", format!("# {}", path.display()).dimmed());
    println!(
        "{}",
        toml::to_string_pretty(&config).context("Failed to serialize config")?
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn init_writes_defaults_once() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("hostwatch").join("config.toml");

        run_config(&path, true).expect("init");
        assert!(path.exists());

        std::fs::write(&path, "[settings]\nhistory_points = 7\n").expect("edit");
        run_config(&path, true).expect("second init");
        let config = AppConfig::load_from(&path).expect("load");
        assert_eq!(config.settings.history_points, 7);
    }

    #[test]
    fn without_init_missing_file_is_not_created() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        run_config(&path, false).expect("show");
        assert!(!path.exists());
    }

    #[test]
    fn invalid_file_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[thresholds]\ndisk_critical = 101.0\n").expect("write");
        assert!(run_config(&path, false).is_err());
    }
}
