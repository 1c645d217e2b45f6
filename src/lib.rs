//! # snowflake-worker
//!
//! A Snowflake-style ID worker producing 63-bit identifiers.
//!
//! Each ID packs, from most to least significant bit:
//! - 1 sign bit, always zero
//! - elapsed time units since a configurable epoch
//! - node ID (`node_bits` wide)
//! - per-time-unit sequence (`sequence_bits` wide)
//!
//! IDs from one worker are unique and non-decreasing. Uniqueness across
//! workers relies on callers assigning distinct node IDs.
//!
//! ```
//! use snowflake_worker::{Worker, WorkerConfig};
//!
//! let config = WorkerConfig::builder()
//!     .node_bits(10)
//!     .sequence_bits(12)
//!     .build()
//!     .unwrap();
//! let worker = Worker::with_config(5, config).unwrap();
//! let id = worker.next().unwrap();
//! assert_eq!(worker.extract().node(id), 5);
//! ```

#![forbid(unsafe_code)]

mod config;
mod error;
mod extractor;
mod generator;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{
    validate, Precision, WorkerConfig, WorkerConfigBuilder, WorkerDefaults, DEFAULT_EPOCH,
    DEFAULT_NODE_BITS, DEFAULT_PRECISION, DEFAULT_SEQUENCE_BITS, USABLE_BITS,
};
pub use error::{ConfigError, WorkerError};
pub use extractor::IdExtractor;
pub use generator::{SystemClock, TimeSource, Worker};
