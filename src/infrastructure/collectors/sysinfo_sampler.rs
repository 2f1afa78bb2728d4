use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, Utc};
use sysinfo::{CpuRefreshKind, Disks, MemoryRefreshKind, Networks, RefreshKind, System};

use crate::domain::entities::sample::{DiskUsage, MemoryUsage, NetworkCounters, Sample};
use crate::domain::entities::system_info::SystemInfo;
use crate::domain::ports::sampler::{MetricsSampler, SamplerError};

/// Returns `(numerator / denominator) * 100.0`, or `0.0` when `denominator` is zero.
#[allow(clippy::cast_precision_loss)]
fn safe_percent(numerator: u64, denominator: u64) -> f64 {
    if denominator > 0 {
        ((numerator as f64 / denominator as f64) * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Picks the mount point holding `path`: the longest mount that is a prefix of it.
fn select_mount<'a, I>(path: &Path, mounts: I) -> Option<&'a Path>
where
    I: IntoIterator<Item = &'a Path>,
{
    mounts
        .into_iter()
        .filter(|mount| path.starts_with(mount))
        .max_by_key(|mount| mount.components().count())
}

/// Maps a failure to stat the configured disk path.
fn disk_path_error(path: &Path, err: &io::Error) -> SamplerError {
    match err.kind() {
        io::ErrorKind::PermissionDenied => {
            SamplerError::PermissionDenied(path.display().to_string())
        }
        _ => SamplerError::Unavailable(format!("{}: {err}", path.display())),
    }
}

/// Sums `(bytes_sent, bytes_recv, packets_sent, packets_recv)` over interfaces.
fn sum_counters<I>(interfaces: I) -> NetworkCounters
where
    I: IntoIterator<Item = (u64, u64, u64, u64)>,
{
    interfaces.into_iter().fold(
        NetworkCounters::default(),
        |acc, (bytes_sent, bytes_recv, packets_sent, packets_recv)| NetworkCounters {
            bytes_sent: acc.bytes_sent.saturating_add(bytes_sent),
            bytes_recv: acc.bytes_recv.saturating_add(bytes_recv),
            packets_sent: acc.packets_sent.saturating_add(packets_sent),
            packets_recv: acc.packets_recv.saturating_add(packets_recv),
        },
    )
}

/// Samples host metrics using the `sysinfo` crate.
///
/// Uses `Mutex` for interior mutability since `MetricsSampler` takes `&self`
/// but `sysinfo` needs `&mut self` to refresh. Holding the CPU lock for the
/// whole observation window serializes concurrent samples.
pub struct SysinfoSampler {
    sys: Mutex<System>,
    disks: Mutex<Disks>,
    networks: Mutex<Networks>,
    disk_path: PathBuf,
}

impl SysinfoSampler {
    /// Creates a sampler reporting the filesystem that contains `disk_path`.
    #[must_use]
    pub fn new(disk_path: impl Into<PathBuf>) -> Self {
        let mut sys = System::new_with_specifics(
            RefreshKind::new()
                .with_cpu(CpuRefreshKind::new().with_cpu_usage())
                .with_memory(MemoryRefreshKind::new().with_ram()),
        );
        sys.refresh_cpu_usage();
        Self {
            sys: Mutex::new(sys),
            disks: Mutex::new(Disks::new_with_refreshed_list()),
            networks: Mutex::new(Networks::new_with_refreshed_list()),
            disk_path: disk_path.into(),
        }
    }

    fn measure_cpu(&self, window: Duration) -> Result<f64, SamplerError> {
        let mut sys = self
            .sys
            .lock()
            .map_err(|e| SamplerError::Unavailable(format!("system lock poisoned: {e}")))?;

        sys.refresh_cpu_usage();
        std::thread::sleep(window.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL));
        sys.refresh_cpu_usage();

        if sys.cpus().is_empty() {
            return Err(SamplerError::Unavailable("no CPU statistics".into()));
        }
        Ok(f64::from(sys.global_cpu_usage()).clamp(0.0, 100.0))
    }

    fn read_memory(&self) -> Result<MemoryUsage, SamplerError> {
        let mut sys = self
            .sys
            .lock()
            .map_err(|e| SamplerError::Unavailable(format!("system lock poisoned: {e}")))?;
        sys.refresh_memory();

        let total = sys.total_memory();
        if total == 0 {
            return Err(SamplerError::Unavailable("memory statistics".into()));
        }
        let used = sys.used_memory();

        Ok(MemoryUsage {
            percent: safe_percent(used, total),
            used_bytes: used,
            total_bytes: total,
            available_bytes: sys.available_memory(),
        })
    }

    fn read_disk(&self) -> Result<DiskUsage, SamplerError> {
        std::fs::metadata(&self.disk_path).map_err(|e| disk_path_error(&self.disk_path, &e))?;

        let mut disks = self
            .disks
            .lock()
            .map_err(|e| SamplerError::Unavailable(format!("disk lock poisoned: {e}")))?;
        disks.refresh_list();

        let mount = select_mount(
            &self.disk_path,
            disks.list().iter().map(sysinfo::Disk::mount_point),
        )
        .ok_or_else(|| {
            SamplerError::Unavailable(format!(
                "no disk mounted at {}",
                self.disk_path.display()
            ))
        })?;

        let disk = disks
            .list()
            .iter()
            .find(|d| d.mount_point() == mount)
            .ok_or_else(|| {
                SamplerError::Unavailable(format!("disk at {} vanished", mount.display()))
            })?;

        let total = disk.total_space();
        if total == 0 {
            return Err(SamplerError::Unavailable(format!(
                "disk at {} reports no capacity",
                mount.display()
            )));
        }
        let free = disk.available_space();
        let used = total.saturating_sub(free);

        Ok(DiskUsage {
            percent: safe_percent(used, total),
            used_bytes: used,
            total_bytes: total,
            free_bytes: free,
        })
    }

    fn read_network(&self) -> Result<NetworkCounters, SamplerError> {
        let mut networks = self
            .networks
            .lock()
            .map_err(|e| SamplerError::Unavailable(format!("network lock poisoned: {e}")))?;
        networks.refresh_list();

        if networks.list().is_empty() {
            return Err(SamplerError::Unavailable("no network interfaces".into()));
        }

        Ok(sum_counters(networks.list().values().map(|data| {
            (
                data.total_transmitted(),
                data.total_received(),
                data.total_packets_transmitted(),
                data.total_packets_received(),
            )
        })))
    }
}

impl Default for SysinfoSampler {
    fn default() -> Self {
        Self::new("/")
    }
}

impl MetricsSampler for SysinfoSampler {
    fn sample(&self, window: Duration) -> Result<Sample, SamplerError> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(SamplerError::Unavailable(
                "platform not supported by sysinfo".into(),
            ));
        }

        let timestamp = Utc::now();
        let cpu_percent = self.measure_cpu(window)?;
        let memory = self.read_memory()?;
        let disk = self.read_disk()?;
        let network = self.read_network()?;

        Ok(Sample {
            timestamp,
            cpu_percent,
            memory,
            disk,
            network,
        })
    }

    fn system_info(&self) -> SystemInfo {
        let cpu_count = match self.sys.lock() {
            Ok(sys) => sys.cpus().len(),
            Err(poisoned) => poisoned.into_inner().cpus().len(),
        };
        let boot_time = i64::try_from(System::boot_time())
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .unwrap_or_default();

        SystemInfo {
            hostname: System::host_name().unwrap_or_else(|| "unknown".to_string()),
            os_name: System::name().unwrap_or_else(|| "unknown".to_string()),
            cpu_count,
            boot_time,
        }
    }
}
