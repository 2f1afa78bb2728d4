pub mod alert_engine;
pub mod monitor;
pub mod stats;

pub use alert_engine::AlertEngine;
pub use monitor::{
    MonitoringSession, RECENT_ALERTS_SHOWN, SharedSession, SharedThresholds, TickOutcome,
    tick_shared,
};
pub use stats::summarize;
