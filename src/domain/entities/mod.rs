pub mod alert;
pub mod history_stats;
pub mod sample;
pub mod system_info;

pub use alert::Alert;
pub use history_stats::{HistoryStats, MetricStats};
pub use sample::{DiskUsage, MemoryUsage, NetworkCounters, Sample};
pub use system_info::SystemInfo;
