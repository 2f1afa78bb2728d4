use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::metric::Metric;

pub const BYTES_PER_MB: u64 = 1_048_576;
pub const BYTES_PER_GB: u64 = 1_073_741_824;

/// One timestamped snapshot of host resource usage.
///
/// Fields other than `timestamp` default to zero when absent from a serialized
/// form, so a partial sample evaluates as nominal instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub cpu_percent: f64,
    #[serde(default)]
    pub memory: MemoryUsage,
    #[serde(default)]
    pub disk: DiskUsage,
    #[serde(default)]
    pub network: NetworkCounters,
}

/// Physical memory usage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryUsage {
    pub percent: f64,
    pub used_bytes: u64,
    pub total_bytes: u64,
    pub available_bytes: u64,
}

/// Usage of the filesystem holding the monitored path
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiskUsage {
    pub percent: f64,
    pub used_bytes: u64,
    pub total_bytes: u64,
    pub free_bytes: u64,
}

/// Cumulative interface counters since boot, summed over all interfaces.
///
/// These are raw OS totals, not rates: diff two samples to get throughput.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkCounters {
    pub bytes_sent: u64,
    pub bytes_recv: u64,
    pub packets_sent: u64,
    pub packets_recv: u64,
}

#[allow(clippy::cast_precision_loss)]
fn to_unit(bytes: u64, unit: u64) -> f64 {
    bytes as f64 / unit as f64
}

impl Sample {
    /// Percentage compared against thresholds for `metric`.
    #[must_use]
    pub const fn value_of(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Cpu => self.cpu_percent,
            Metric::Memory => self.memory.percent,
            Metric::Disk => self.disk.percent,
        }
    }
}

impl MemoryUsage {
    #[must_use]
    pub fn used_gb(&self) -> f64 {
        to_unit(self.used_bytes, BYTES_PER_GB)
    }

    #[must_use]
    pub fn total_gb(&self) -> f64 {
        to_unit(self.total_bytes, BYTES_PER_GB)
    }
}

impl DiskUsage {
    #[must_use]
    pub fn used_gb(&self) -> f64 {
        to_unit(self.used_bytes, BYTES_PER_GB)
    }

    #[must_use]
    pub fn total_gb(&self) -> f64 {
        to_unit(self.total_bytes, BYTES_PER_GB)
    }

    #[must_use]
    pub fn free_gb(&self) -> f64 {
        to_unit(self.free_bytes, BYTES_PER_GB)
    }
}

impl NetworkCounters {
    #[must_use]
    pub fn sent_mb(&self) -> f64 {
        to_unit(self.bytes_sent, BYTES_PER_MB)
    }

    #[must_use]
    pub fn recv_mb(&self) -> f64 {
        to_unit(self.bytes_recv, BYTES_PER_MB)
    }

    /// Counter growth since `earlier`. Saturates at zero if counters were reset.
    #[must_use]
    pub const fn since(&self, earlier: &Self) -> Self {
        Self {
            bytes_sent: self.bytes_sent.saturating_sub(earlier.bytes_sent),
            bytes_recv: self.bytes_recv.saturating_sub(earlier.bytes_recv),
            packets_sent: self.packets_sent.saturating_sub(earlier.packets_sent),
            packets_recv: self.packets_recv.saturating_sub(earlier.packets_recv),
        }
    }
}
