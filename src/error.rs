use thiserror::Error;

use crate::config::Precision;

/// Errors raised while validating a configuration or constructing a worker
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Epoch literal is not 10, 13 or 16 digits long
    #[error("Epoch {epoch} has {digits} digits. Epoch length must be 10, 13, or 16 digits")]
    InvalidEpochLength { epoch: i64, digits: usize },
    /// Node and sequence bits do not fit in the 63 usable bits
    #[error("Sum of node bits ({node_bits}) and sequence bits ({sequence_bits}) can't be greater than 63")]
    BitsOverflow { node_bits: u8, sequence_bits: u8 },
    /// Error when node ID exceeds the maximum allowed value
    #[error("Node ID {node_id} is invalid. Maximum allowed value is {max}")]
    InvalidNodeId { node_id: u64, max: u64 },
    /// Epoch lies after the current time
    #[error("Epoch {epoch} is in the future (now is {now})")]
    EpochInFuture { epoch: i64, now: i64 },
    /// Time elapsed since the epoch would not fit in the timestamp bits
    #[error("Epoch {epoch} is too old for the configured bit widths. You can't set epoch time before {min_epoch}")]
    EpochOutOfRange { epoch: i64, min_epoch: i64 },
}

/// Errors raised by a single ID production call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkerError {
    /// Error when clock moves backwards (system time issue)
    #[error("Clock moved backwards. Refusing to generate id for {delta} {precision}")]
    ClockMovedBackwards { delta: i64, precision: Precision },
    /// Current time is earlier than the configured epoch
    #[error("Clock reading {now} is before epoch {epoch}")]
    ClockBeforeEpoch { now: i64, epoch: i64 },
    /// Elapsed time no longer fits in the timestamp bits
    #[error("Elapsed time {elapsed} exceeds the maximum of {max} for this layout")]
    TimestampOverflow { elapsed: i64, max: i64 },
    /// Clock did not advance within the configured wait limit
    #[error("Clock did not advance past {last} after {attempts} reads")]
    ClockStalled { last: i64, attempts: u64 },
}
