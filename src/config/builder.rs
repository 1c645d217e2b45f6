//! WorkerConfig builder; `build` is the configuration validator

use super::{
    Precision, WorkerConfig, DEFAULT_EPOCH, DEFAULT_NODE_BITS, DEFAULT_PRECISION,
    DEFAULT_SEQUENCE_BITS, DEFAULT_SPIN_YIELD_EVERY, USABLE_BITS,
};
use crate::error::ConfigError;

/// Builder for WorkerConfig
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerConfigBuilder {
    pub(super) epoch: i64,
    pub(super) node_bits: u8,
    pub(super) sequence_bits: u8,
    pub(super) spin_yield_every: u32,
    pub(super) wait_limit: Option<u64>,
    // Set when the epoch came from `WorkerDefaults` and is already resolved
    pub(super) precision: Option<Precision>,
}

impl WorkerConfigBuilder {
    /// Create a new WorkerConfigBuilder with default values
    pub fn new() -> Self {
        Self {
            epoch: 0,
            node_bits: DEFAULT_NODE_BITS,
            sequence_bits: DEFAULT_SEQUENCE_BITS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
            wait_limit: None,
            precision: None,
        }
    }

    /// Set the epoch. Its precision is inferred from its digit count
    /// (10 = seconds, 13 = milliseconds, 16 = microseconds); `0` selects the
    /// default epoch.
    pub const fn epoch(mut self, epoch: i64) -> Self {
        self.epoch = epoch;
        self.precision = None;
        self
    }

    pub const fn node_bits(mut self, bits: u8) -> Self {
        self.node_bits = bits;
        self
    }

    pub const fn sequence_bits(mut self, bits: u8) -> Self {
        self.sequence_bits = bits;
        self
    }

    /// Yield the thread every N busy-spin iterations; 0 disables yielding
    pub const fn spin_yield_every(mut self, n: u32) -> Self {
        self.spin_yield_every = n;
        self
    }

    /// Give up waiting for the clock after this many re-reads
    pub const fn wait_limit(mut self, limit: Option<u64>) -> Self {
        self.wait_limit = limit;
        self
    }

    /// Validate the settings and derive masks, shifts and time unit
    pub fn build(self) -> Result<WorkerConfig, ConfigError> {
        let (epoch, precision) = match (self.epoch, self.precision) {
            (0, _) => (DEFAULT_EPOCH, DEFAULT_PRECISION),
            (epoch, Some(precision)) => (epoch, precision),
            (epoch, None) => (epoch, Precision::from_epoch(epoch)?),
        };

        check_bits(self.node_bits, self.sequence_bits)?;

        Ok(WorkerConfig::from_parts(
            epoch,
            precision,
            self.node_bits,
            self.sequence_bits,
            self.spin_yield_every,
            self.wait_limit,
        ))
    }
}

impl Default for WorkerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a builder, returning the derived configuration
pub fn validate(builder: WorkerConfigBuilder) -> Result<WorkerConfig, ConfigError> {
    builder.build()
}

pub(super) fn check_bits(node_bits: u8, sequence_bits: u8) -> Result<(), ConfigError> {
    if u16::from(node_bits) + u16::from(sequence_bits) > u16::from(USABLE_BITS) {
        return Err(ConfigError::BitsOverflow {
            node_bits,
            sequence_bits,
        });
    }
    Ok(())
}
