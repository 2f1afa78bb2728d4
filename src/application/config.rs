use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use crate::domain::value_objects::thresholds::ThresholdSet;

/// Rejected configuration values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level application configuration loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub thresholds: ThresholdConfig,
    #[serde(default)]
    pub settings: SettingsConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// Warning and critical percentages per metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    #[serde(default = "default_cpu_warning")]
    pub cpu_warning: f64,
    #[serde(default = "default_cpu_critical")]
    pub cpu_critical: f64,
    #[serde(default = "default_memory_warning")]
    pub memory_warning: f64,
    #[serde(default = "default_memory_critical")]
    pub memory_critical: f64,
    #[serde(default = "default_disk_warning")]
    pub disk_warning: f64,
    #[serde(default = "default_disk_critical")]
    pub disk_critical: f64,
}

/// Sampling cadence, history size and the filesystem to watch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsConfig {
    /// Seconds between ticks
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval: u64,
    #[serde(default = "default_history_points")]
    pub history_points: usize,
    /// CPU observation window in milliseconds
    #[serde(default = "default_sample_window_ms")]
    pub sample_window_ms: u64,
    #[serde(default = "default_disk_path")]
    pub disk_path: String,
}

/// Alert channels: terminal and an optional JSON-lines log file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_true")]
    pub terminal: bool,
    #[serde(default)]
    pub log_file: Option<String>,
}

// --- Defaults ---

const fn default_cpu_warning() -> f64 {
    70.0
}

const fn default_cpu_critical() -> f64 {
    90.0
}

const fn default_memory_warning() -> f64 {
    80.0
}

const fn default_memory_critical() -> f64 {
    95.0
}

const fn default_disk_warning() -> f64 {
    85.0
}

const fn default_disk_critical() -> f64 {
    95.0
}

const fn default_refresh_interval() -> u64 {
    5
}

const fn default_history_points() -> usize {
    60
}

const fn default_sample_window_ms() -> u64 {
    1000
}

fn default_disk_path() -> String {
    "/".into()
}

const fn default_true() -> bool {
    true
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            cpu_warning: default_cpu_warning(),
            cpu_critical: default_cpu_critical(),
            memory_warning: default_memory_warning(),
            memory_critical: default_memory_critical(),
            disk_warning: default_disk_warning(),
            disk_critical: default_disk_critical(),
        }
    }
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            refresh_interval: default_refresh_interval(),
            history_points: default_history_points(),
            sample_window_ms: default_sample_window_ms(),
            disk_path: default_disk_path(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            terminal: default_true(),
            log_file: None,
        }
    }
}

impl SettingsConfig {
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval)
    }

    #[must_use]
    pub const fn sample_window(&self) -> Duration {
        Duration::from_millis(self.sample_window_ms)
    }
}

// --- AppConfig methods ---

impl AppConfig {
    /// Load from a specific path, or create a default config file if missing
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is invalid,
    /// or the default config file cannot be written.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            tracing::info!("Created default config at {}", path.display());
            Ok(config)
        }
    }

    /// Load and validate from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is invalid,
    /// or a value is out of range.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        let config: Self = toml::from_str(&content).context("Failed to parse config file")?;
        config
            .validate()
            .with_context(|| format!("Rejected config file {}", path.display()))?;
        Ok(config)
    }

    /// Save config to a specific path, creating parent directories if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created,
    /// serialization fails, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    /// Default location: `<config dir>/hostwatch/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform has no config directory.
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("hostwatch").join("config.toml"))
    }

    /// Checks value ranges. A warning threshold above its critical one is
    /// accepted and only logged.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.thresholds;
        let percentages = [
            ("cpu_warning", t.cpu_warning),
            ("cpu_critical", t.cpu_critical),
            ("memory_warning", t.memory_warning),
            ("memory_critical", t.memory_critical),
            ("disk_warning", t.disk_warning),
            ("disk_critical", t.disk_critical),
        ];
        for (name, value) in percentages {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "thresholds.{name} must be between 0 and 100, got {value}"
                )));
            }
        }

        if self.settings.refresh_interval == 0 {
            return Err(ConfigError::Invalid(
                "settings.refresh_interval must be at least 1 second".into(),
            ));
        }
        if self.settings.history_points == 0 {
            return Err(ConfigError::Invalid(
                "settings.history_points must be at least 1".into(),
            ));
        }

        for metric in ThresholdSet::from(t).inverted_metrics() {
            tracing::warn!("{metric} warning threshold is above its critical threshold");
        }
        Ok(())
    }
}

impl From<&ThresholdConfig> for ThresholdSet {
    fn from(config: &ThresholdConfig) -> Self {
        Self {
            cpu_warning: config.cpu_warning,
            cpu_critical: config.cpu_critical,
            memory_warning: config.memory_warning,
            memory_critical: config.memory_critical,
            disk_warning: config.disk_warning,
            disk_critical: config.disk_critical,
        }
    }
}

/// Re-reads a config file whenever its modification time changes.
#[derive(Debug)]
pub struct ConfigWatcher {
    path: PathBuf,
    last_modified: Option<SystemTime>,
}

impl ConfigWatcher {
    /// Starts watching `path`, remembering its current modification time.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let last_modified = modified_at(&path);
        Self {
            path,
            last_modified,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the new config when the file changed and loads cleanly.
    ///
    /// A file that fails to parse or validate is logged and skipped until
    /// it changes again.
    pub fn poll(&mut self) -> Option<AppConfig> {
        let modified = modified_at(&self.path)?;
        if self.last_modified == Some(modified) {
            return None;
        }
        self.last_modified = Some(modified);

        match AppConfig::load_from(&self.path) {
            Ok(config) => {
                tracing::info!("Reloaded config from {}", self.path.display());
                Some(config)
            }
            Err(e) => {
                tracing::warn!("Ignoring config change: {e:#}");
                None
            }
        }
    }
}

fn modified_at(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}
