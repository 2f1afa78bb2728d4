use crate::domain::entities::history_stats::{HistoryStats, MetricStats};
use crate::domain::entities::sample::Sample;
use crate::domain::value_objects::metric::Metric;
use crate::infrastructure::persistence::HistoryBuffer;

/// Summarizes the retained history. Returns `None` for an empty buffer.
///
/// `span_secs` is never negative, even when concurrent ticks appended samples
/// out of timestamp order.
#[must_use]
pub fn summarize(history: &HistoryBuffer) -> Option<HistoryStats> {
    let oldest = history.oldest()?;
    let newest = history.latest()?;

    Some(HistoryStats {
        sample_count: history.len(),
        span_secs: (newest.timestamp - oldest.timestamp).num_seconds().max(0),
        cpu: metric_stats(history.iter(), Metric::Cpu)?,
        memory: metric_stats(history.iter(), Metric::Memory)?,
        disk: metric_stats(history.iter(), Metric::Disk)?,
        network_delta: newest.network.since(&oldest.network),
    })
}

/// Min/max and running mean of one metric, updated incrementally.
#[allow(clippy::cast_precision_loss)]
fn metric_stats<'a>(
    samples: impl Iterator<Item = &'a Sample>,
    metric: Metric,
) -> Option<MetricStats> {
    let mut stats: Option<MetricStats> = None;
    for (index, sample) in samples.enumerate() {
        let value = sample.value_of(metric);
        stats = Some(match stats {
            None => MetricStats::new(value, value, value),
            Some(s) => {
                let count = (index + 1) as f64;
                MetricStats::new(
                    s.min.min(value),
                    s.max.max(value),
                    s.mean + (value - s.mean) / count,
                )
            }
        });
    }
    stats
}
