pub mod alert_log;
pub mod bounded_log;
pub mod history_buffer;

pub use alert_log::{ALERT_LOG_CAPACITY, AlertLog};
pub use bounded_log::BoundedLog;
pub use history_buffer::HistoryBuffer;
