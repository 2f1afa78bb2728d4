use std::collections::VecDeque;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use hostwatch::domain::entities::alert::Alert;
use hostwatch::domain::entities::sample::{DiskUsage, MemoryUsage, NetworkCounters, Sample};
use hostwatch::domain::entities::system_info::SystemInfo;
use hostwatch::domain::ports::notifier::{NotificationError, Notifier};
use hostwatch::domain::ports::sampler::{MetricsSampler, SamplerError};

pub fn fixture_text(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    std::fs::read_to_string(&path).expect("Failed to read fixture")
}

pub fn load_samples(name: &str) -> Vec<Sample> {
    serde_json::from_str(&fixture_text(name)).expect("Failed to parse fixture")
}

pub fn make_sample(index: u32, cpu: f64, memory: f64, disk: f64) -> Sample {
    let base = DateTime::from_timestamp(1_714_564_800, 0).expect("valid timestamp");
    Sample {
        timestamp: base + TimeDelta::seconds(i64::from(index) * 5),
        cpu_percent: cpu,
        memory: MemoryUsage {
            percent: memory,
            ..MemoryUsage::default()
        },
        disk: DiskUsage {
            percent: disk,
            ..DiskUsage::default()
        },
        network: NetworkCounters::default(),
    }
}

/// Returns queued samples in order, then reports the source as unavailable.
pub struct ReplaySampler {
    queue: Mutex<VecDeque<Result<Sample, SamplerError>>>,
}

impl ReplaySampler {
    pub fn new(samples: Vec<Sample>) -> Arc<Self> {
        Self::scripted(samples.into_iter().map(Ok).collect())
    }

    pub fn scripted(script: Vec<Result<Sample, SamplerError>>) -> Arc<Self> {
        Arc::new(Self {
            queue: Mutex::new(script.into()),
        })
    }
}

impl MetricsSampler for ReplaySampler {
    fn sample(&self, _window: Duration) -> Result<Sample, SamplerError> {
        self.queue
            .lock()
            .expect("queue lock")
            .pop_front()
            .unwrap_or_else(|| Err(SamplerError::Unavailable("replay exhausted".into())))
    }

    fn system_info(&self) -> SystemInfo {
        SystemInfo {
            hostname: "replay".into(),
            os_name: "Linux".into(),
            cpu_count: 8,
            boot_time: Utc::now() - TimeDelta::days(3),
        }
    }
}

/// Records every alert it is handed.
#[derive(Clone, Default)]
pub struct TrackingNotifier {
    pub received: Arc<Mutex<Vec<Alert>>>,
}

impl TrackingNotifier {
    pub fn received(&self) -> Vec<Alert> {
        self.received.lock().expect("tracking lock").clone()
    }
}

impl Notifier for TrackingNotifier {
    fn notify(&self, alert: &Alert) -> Result<(), NotificationError> {
        self.received
            .lock()
            .map_err(|e| NotificationError::SendFailed(e.to_string()))?
            .push(alert.clone());
        Ok(())
    }
}
