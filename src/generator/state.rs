//! Mutable worker state: last issued timestamp + sequence
//!
//! Kept as plain integers behind the worker's mutex. Deciding what a clock
//! reading means is separated from committing it, so a failed call never
//! leaves the state half-updated.

/// Outcome of comparing a clock reading with the last issued timestamp
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Advance {
    /// Reading is earlier than the last issued timestamp
    Backwards { delta: i64 },
    /// Time unit advanced; sequence restarts at zero
    NewUnit,
    /// Same time unit, next free sequence value
    SameUnit { sequence: u64 },
    /// Same time unit and every sequence value has been used
    Exhausted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct State {
    last_timestamp: i64,
    sequence: u64,
}

impl State {
    /// Lower than any reading a clock can report after the Unix epoch
    pub(crate) const NEVER_ISSUED: i64 = -1;

    pub(crate) const fn new() -> Self {
        Self {
            last_timestamp: Self::NEVER_ISSUED,
            sequence: 0,
        }
    }

    #[inline(always)]
    pub(crate) const fn last_timestamp(&self) -> i64 {
        self.last_timestamp
    }

    #[inline(always)]
    #[allow(dead_code)] // Used in state tests
    pub(crate) const fn sequence(&self) -> u64 {
        self.sequence
    }

    #[inline]
    pub(crate) fn advance(&self, now: i64, sequence_mask: u64) -> Advance {
        if now < self.last_timestamp {
            return Advance::Backwards {
                delta: self.last_timestamp - now,
            };
        }
        if now > self.last_timestamp {
            return Advance::NewUnit;
        }
        match self.sequence.wrapping_add(1) & sequence_mask {
            0 => Advance::Exhausted,
            sequence => Advance::SameUnit { sequence },
        }
    }

    #[inline(always)]
    pub(crate) fn commit(&mut self, timestamp: i64, sequence: u64) {
        self.last_timestamp = timestamp;
        self.sequence = sequence;
    }
}
