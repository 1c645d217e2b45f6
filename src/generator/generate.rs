//! ID generation logic
//!
//! `next` busy-spins when the sequence space of the current time unit is
//! used up; `next_blocking` sleeps one time unit between clock reads
//! instead. Both hold the worker lock while waiting, so other callers queue
//! behind a waiting call.

use tracing::{trace, warn};

use super::state::Advance;
use super::time::TimeSource;
use super::wait::{sleep_until_after, spin_until_after};
use super::Worker;
use crate::error::WorkerError;

impl<C: TimeSource> Worker<C> {
    /// Generate a new ID, busy-spinning if the sequence is exhausted
    #[inline]
    pub fn next(&self) -> Result<i64, WorkerError> {
        self.produce(|last| {
            spin_until_after(
                &self.clock,
                self.config.precision(),
                last,
                self.config.spin_yield_every(),
                self.config.wait_limit(),
            )
        })
    }

    /// Generate a new ID, sleeping one time unit per retry if the sequence
    /// is exhausted
    pub fn next_blocking(&self) -> Result<i64, WorkerError> {
        self.produce(|last| {
            sleep_until_after(
                &self.clock,
                self.config.precision(),
                last,
                self.config.wait_limit(),
            )
        })
    }

    fn produce<W>(&self, wait_next_unit: W) -> Result<i64, WorkerError>
    where
        W: FnOnce(i64) -> Result<i64, WorkerError>,
    {
        let mut state = self.lock();
        let now = self.now();

        let (timestamp, sequence) = match state.advance(now, self.config.sequence_mask()) {
            Advance::Backwards { delta } => {
                warn!(
                    node_id = self.node_id,
                    last = state.last_timestamp(),
                    now,
                    delta,
                    "clock moved backwards"
                );
                return Err(WorkerError::ClockMovedBackwards {
                    delta,
                    precision: self.config.precision(),
                });
            }
            Advance::NewUnit => (now, 0),
            Advance::SameUnit { sequence } => (now, sequence),
            Advance::Exhausted => {
                trace!(
                    node_id = self.node_id,
                    last = state.last_timestamp(),
                    "sequence exhausted, waiting for next time unit"
                );
                (wait_next_unit(state.last_timestamp())?, 0)
            }
        };

        let id = self.assemble_id(timestamp, sequence).inspect_err(|err| {
            warn!(node_id = self.node_id, timestamp, %err, "refusing to compose id");
        })?;
        state.commit(timestamp, sequence);
        Ok(id)
    }
}
