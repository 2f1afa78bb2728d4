use std::time::Duration;

use thiserror::Error;

use crate::domain::entities::sample::Sample;
use crate::domain::entities::system_info::SystemInfo;

/// CPU observation window used when the caller has no preference.
pub const DEFAULT_OBSERVATION_WINDOW: Duration = Duration::from_secs(1);

#[derive(Error, Debug)]
pub enum SamplerError {
    #[error("metrics source unavailable: {0}")]
    Unavailable(String),
    #[error("permission denied: {0}")]
    PermissionDenied(String),
}

pub trait MetricsSampler: Send + Sync {
    /// Take one sample of CPU, memory, disk and network usage.
    ///
    /// Blocks for `window` while CPU activity is observed. Either every
    /// subsystem is read or the call fails; no partial sample is returned.
    ///
    /// # Errors
    ///
    /// Returns `SamplerError` if any metric source cannot be read on this host.
    fn sample(&self, window: Duration) -> Result<Sample, SamplerError>;

    /// Hostname, OS name, logical CPU count and boot time.
    fn system_info(&self) -> SystemInfo;
}
