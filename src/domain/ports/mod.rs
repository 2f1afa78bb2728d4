pub mod notifier;
pub mod sampler;

pub use notifier::{NotificationError, Notifier};
pub use sampler::{DEFAULT_OBSERVATION_WINDOW, MetricsSampler, SamplerError};
