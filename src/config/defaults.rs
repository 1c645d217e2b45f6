//! Default epoch and bit widths used when building new configurations
//!
//! `WorkerDefaults` is an ordinary value: callers own it and pass it (or a
//! builder seeded from it) to whatever constructs workers. Changing it never
//! affects a worker that already exists.

use chrono::{DateTime, Utc};
use tracing::debug;

use super::builder::check_bits;
use super::{
    Precision, WorkerConfigBuilder, DEFAULT_EPOCH, DEFAULT_NODE_BITS, DEFAULT_PRECISION,
    DEFAULT_SEQUENCE_BITS,
};
use crate::error::ConfigError;
use crate::generator::{SystemClock, TimeSource};

/// Defaults applied to configurations built from [`WorkerDefaults::builder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerDefaults {
    epoch: i64,
    precision: Precision,
    node_bits: u8,
    sequence_bits: u8,
}

impl WorkerDefaults {
    pub const fn new() -> Self {
        Self {
            epoch: DEFAULT_EPOCH,
            precision: DEFAULT_PRECISION,
            node_bits: DEFAULT_NODE_BITS,
            sequence_bits: DEFAULT_SEQUENCE_BITS,
        }
    }

    #[inline(always)]
    pub const fn epoch(&self) -> i64 {
        self.epoch
    }

    #[inline(always)]
    pub const fn precision(&self) -> Precision {
        self.precision
    }

    #[inline(always)]
    pub const fn node_bits(&self) -> u8 {
        self.node_bits
    }

    #[inline(always)]
    pub const fn sequence_bits(&self) -> u8 {
        self.sequence_bits
    }

    /// Replace the default epoch, checked against the system clock
    pub fn set_epoch(&mut self, epoch: i64) -> Result<(), ConfigError> {
        self.set_epoch_with(epoch, &SystemClock)
    }

    /// Replace the default epoch, checked against `clock`.
    ///
    /// The epoch must be in the past, and the time elapsed since it must fit
    /// in the bits left over by the current node and sequence widths. On
    /// error the previous epoch stays in effect.
    pub fn set_epoch_with<C: TimeSource>(&mut self, epoch: i64, clock: &C) -> Result<(), ConfigError> {
        let precision = Precision::from_epoch(epoch)?;
        let now = clock.now(precision);
        let elapsed = now.checked_sub(epoch).unwrap_or(i64::MAX);
        if elapsed < 0 {
            return Err(ConfigError::EpochInFuture { epoch, now });
        }

        let max_elapsed = i64::MAX >> (self.node_bits + self.sequence_bits);
        if elapsed > max_elapsed {
            let min_epoch = now.saturating_sub(max_elapsed);
            debug!(
                epoch,
                min_epoch,
                earliest = %describe(min_epoch, precision),
                "rejected default epoch"
            );
            return Err(ConfigError::EpochOutOfRange { epoch, min_epoch });
        }

        self.epoch = epoch;
        self.precision = precision;
        debug!(epoch, %precision, "default epoch updated");
        Ok(())
    }

    /// Replace the default node and sequence widths
    pub fn set_bit_widths(&mut self, node_bits: u8, sequence_bits: u8) -> Result<(), ConfigError> {
        check_bits(node_bits, sequence_bits)?;
        self.node_bits = node_bits;
        self.sequence_bits = sequence_bits;
        debug!(node_bits, sequence_bits, "default bit widths updated");
        Ok(())
    }

    /// A configuration builder seeded with these defaults
    pub fn builder(&self) -> WorkerConfigBuilder {
        WorkerConfigBuilder {
            epoch: self.epoch,
            node_bits: self.node_bits,
            sequence_bits: self.sequence_bits,
            precision: Some(self.precision),
            ..WorkerConfigBuilder::new()
        }
    }
}

impl Default for WorkerDefaults {
    fn default() -> Self {
        Self::new()
    }
}

// Human-readable UTC rendering of an epoch value for log output
fn describe(value: i64, precision: Precision) -> String {
    DateTime::<Utc>::from_timestamp_nanos(precision.to_nanos(value)).to_rfc3339()
}
