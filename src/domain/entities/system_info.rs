use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Host identity facts, static for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    pub hostname: String,
    pub os_name: String,
    pub cpu_count: usize,
    pub boot_time: DateTime<Utc>,
}

impl SystemInfo {
    /// Time since boot, clamped at zero if the clock went backwards.
    #[must_use]
    pub fn uptime_at(&self, now: DateTime<Utc>) -> TimeDelta {
        (now - self.boot_time).max(TimeDelta::zero())
    }
}
