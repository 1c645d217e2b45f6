//! Core worker implementation
//!
//! Split into modules for testability:
//! - `state` - Last issued timestamp + sequence and how a reading advances them
//! - `time` - Clock capability and the wall-clock implementation
//! - `wait` - Busy-spin and sleeping catch-up loops
//! - `generate` - ID production under the worker lock

mod generate;
mod state;
mod time;
mod wait;

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::config::WorkerConfig;
use crate::error::{ConfigError, WorkerError};
use crate::extractor::IdExtractor;

use state::State;
pub use time::{SystemClock, TimeSource};

/// Snowflake ID worker
///
/// One worker per node id. All production calls on a worker are serialized
/// by a single mutex covering the clock read, the state update and the ID
/// composition. Share it between threads with an `Arc`.
#[derive(Debug)]
pub struct Worker<C = SystemClock> {
    state: Mutex<State>,
    node_prefix: u64,
    node_id: u64,
    config: WorkerConfig,
    extract: IdExtractor,
    clock: C,
}

impl Worker<SystemClock> {
    /// Create with default configuration
    pub fn new(node_id: u64) -> Result<Self, ConfigError> {
        Self::with_config(node_id, WorkerConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(node_id: u64, config: WorkerConfig) -> Result<Self, ConfigError> {
        Self::with_clock(node_id, config, SystemClock)
    }
}

impl<C: TimeSource> Worker<C> {
    /// Create with custom configuration and time source
    pub fn with_clock(node_id: u64, config: WorkerConfig, clock: C) -> Result<Self, ConfigError> {
        Self::validate_node_id(node_id, &config)?;
        debug!(
            node_id,
            node_bits = config.node_bits(),
            sequence_bits = config.sequence_bits(),
            epoch = config.epoch(),
            precision = %config.precision(),
            "worker created"
        );
        Ok(Self {
            state: Mutex::new(State::new()),
            node_prefix: node_id << config.node_shift(),
            node_id,
            config,
            extract: IdExtractor::new(config),
            clock,
        })
    }

    fn validate_node_id(node_id: u64, config: &WorkerConfig) -> Result<(), ConfigError> {
        let max = config.max_node_id();
        if node_id > max {
            return Err(ConfigError::InvalidNodeId { node_id, max });
        }
        Ok(())
    }

    /// Epoch of this worker, in units of its configured precision
    #[inline(always)]
    pub fn epoch(&self) -> i64 {
        self.config.epoch()
    }

    #[inline(always)]
    pub fn node_id(&self) -> u64 {
        self.node_id
    }

    #[inline(always)]
    pub fn config(&self) -> &WorkerConfig {
        &self.config
    }

    /// Decoder for IDs produced by this worker
    #[inline(always)]
    pub fn extract(&self) -> &IdExtractor {
        &self.extract
    }

    #[inline(always)]
    pub(crate) fn now(&self) -> i64 {
        self.clock.now(self.config.precision())
    }

    // State is only written by `State::commit`, so a panic elsewhere while
    // the lock was held cannot leave it inconsistent.
    #[inline]
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Compose an ID from an absolute timestamp and a sequence value
    #[inline]
    pub(crate) fn assemble_id(&self, timestamp: i64, sequence: u64) -> Result<i64, WorkerError> {
        let epoch = self.config.epoch();
        if timestamp < epoch {
            return Err(WorkerError::ClockBeforeEpoch {
                now: timestamp,
                epoch,
            });
        }
        let elapsed = timestamp - epoch;
        let max = self.config.max_elapsed();
        if elapsed > max {
            return Err(WorkerError::TimestampOverflow { elapsed, max });
        }
        // Both prefix and sequence are below 2^timestamp_shift
        Ok((elapsed << self.config.timestamp_shift()) | (self.node_prefix | sequence) as i64)
    }
}
