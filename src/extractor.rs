use chrono::{DateTime, Utc};

use crate::config::WorkerConfig;

/// ID component extractor
#[derive(Debug, Copy, Clone)]
pub struct IdExtractor {
    config: WorkerConfig,
}

impl IdExtractor {
    /// Create a new extractor for IDs built with the given configuration
    pub fn new(config: WorkerConfig) -> Self {
        Self { config }
    }

    /// Extract elapsed time units since the epoch
    #[inline(always)]
    pub fn elapsed(&self, id: i64) -> i64 {
        ((id as u64) >> self.config.timestamp_shift()) as i64
    }

    /// Extract the absolute timestamp (epoch + elapsed) in the worker's unit
    #[inline(always)]
    pub fn timestamp(&self, id: i64) -> i64 {
        self.config.epoch() + self.elapsed(id)
    }

    /// Extract node component
    #[inline(always)]
    pub fn node(&self, id: i64) -> u64 {
        ((id as u64) >> self.config.node_shift()) & self.config.node_mask()
    }

    /// Extract sequence component
    #[inline(always)]
    pub fn sequence(&self, id: i64) -> u64 {
        (id as u64) & self.config.sequence_mask()
    }

    /// Decompose an ID into elapsed time, node ID and sequence
    #[inline]
    pub fn decompose(&self, id: i64) -> (i64, u64, u64) {
        (self.elapsed(id), self.node(id), self.sequence(id))
    }

    /// Wall-clock instant encoded in an ID
    pub fn datetime(&self, id: i64) -> DateTime<Utc> {
        let nanos = self.config.precision().to_nanos(self.timestamp(id));
        DateTime::<Utc>::from_timestamp_nanos(nanos)
    }
}
