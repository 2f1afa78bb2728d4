use crate::domain::entities::sample::Sample;

use super::bounded_log::BoundedLog;

/// Rolling window of the most recent samples, oldest first.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    samples: BoundedLog<Sample>,
}

impl HistoryBuffer {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: BoundedLog::new(capacity),
        }
    }

    pub fn append(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// Copy of every retained sample in append order.
    #[must_use]
    pub fn all(&self) -> Vec<Sample> {
        self.samples.to_vec()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Sample> + ExactSizeIterator {
        self.samples.iter()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Sample> {
        self.samples.last()
    }

    #[must_use]
    pub fn oldest(&self) -> Option<&Sample> {
        self.samples.first()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.samples.capacity()
    }

    pub fn set_capacity(&mut self, capacity: usize) {
        let before = self.samples.len();
        self.samples.set_capacity(capacity);
        let evicted = before - self.samples.len();
        if evicted > 0 {
            tracing::debug!("History capacity lowered to {capacity}, evicted {evicted} sample(s)");
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
