//! Configuration for the ID worker

mod builder;
mod defaults;
mod precision;

pub use builder::{validate, WorkerConfigBuilder};
pub use defaults::WorkerDefaults;
pub use precision::Precision;

/// Bits available to an ID once the sign bit is reserved
pub const USABLE_BITS: u8 = 63;
pub const DEFAULT_NODE_BITS: u8 = 10;
pub const DEFAULT_SEQUENCE_BITS: u8 = 12;
/// 2020-01-01T00:00:00.000 UTC in milliseconds
pub const DEFAULT_EPOCH: i64 = 1_577_836_800_000;
pub const DEFAULT_PRECISION: Precision = Precision::Millis;
pub(crate) const DEFAULT_SPIN_YIELD_EVERY: u32 = 16;

/// Validated worker configuration
///
/// Only obtainable through [`WorkerConfigBuilder::build`], so every value of
/// this type already satisfies `node_bits + sequence_bits <= 63` and carries
/// an epoch whose precision is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerConfig {
    epoch: i64,
    precision: Precision,
    node_bits: u8,
    sequence_bits: u8,
    node_shift: u8,
    timestamp_shift: u8,
    node_mask: u64,
    sequence_mask: u64,
    max_elapsed: i64,
    spin_yield_every: u32,
    wait_limit: Option<u64>,
}

impl WorkerConfig {
    /// Calculate mask for given number of bits (`bits` must be at most 63)
    #[inline]
    pub(crate) const fn calculate_mask(bits: u8) -> u64 {
        (1u64 << bits) - 1
    }

    /// Assemble a config from values the builder has already checked
    pub(crate) fn from_parts(
        epoch: i64,
        precision: Precision,
        node_bits: u8,
        sequence_bits: u8,
        spin_yield_every: u32,
        wait_limit: Option<u64>,
    ) -> Self {
        let timestamp_shift = node_bits + sequence_bits;
        Self {
            epoch,
            precision,
            node_bits,
            sequence_bits,
            node_shift: sequence_bits,
            timestamp_shift,
            node_mask: Self::calculate_mask(node_bits),
            sequence_mask: Self::calculate_mask(sequence_bits),
            max_elapsed: i64::MAX >> timestamp_shift,
            spin_yield_every,
            wait_limit,
        }
    }

    /// Create a new configuration builder
    pub fn builder() -> WorkerConfigBuilder {
        WorkerConfigBuilder::new()
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

    /// Bits left for the elapsed time component
    #[inline(always)]
    pub const fn timestamp_bits(&self) -> u8 {
        USABLE_BITS - self.timestamp_shift
    }

    #[inline(always)]
    pub const fn max_node_id(&self) -> u64 {
        self.node_mask
    }

    #[inline(always)]
    pub const fn max_sequence_id(&self) -> u64 {
        self.sequence_mask
    }

    /// Largest elapsed time (in units of [`Self::precision`]) an ID can hold
    #[inline(always)]
    pub const fn max_elapsed(&self) -> i64 {
        self.max_elapsed
    }

    #[inline(always)]
    pub const fn spin_yield_every(&self) -> u32 {
        self.spin_yield_every
    }

    #[inline(always)]
    pub const fn wait_limit(&self) -> Option<u64> {
        self.wait_limit
    }

    #[inline(always)]
    pub(crate) const fn timestamp_shift(&self) -> u8 {
        self.timestamp_shift
    }

    #[inline(always)]
    pub(crate) const fn node_shift(&self) -> u8 {
        self.node_shift
    }

    #[inline(always)]
    pub(crate) const fn node_mask(&self) -> u64 {
        self.node_mask
    }

    #[inline(always)]
    pub(crate) const fn sequence_mask(&self) -> u64 {
        self.sequence_mask
    }
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self::from_parts(
            DEFAULT_EPOCH,
            DEFAULT_PRECISION,
            DEFAULT_NODE_BITS,
            DEFAULT_SEQUENCE_BITS,
            DEFAULT_SPIN_YIELD_EVERY,
            None,
        )
    }
}
