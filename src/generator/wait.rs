//! Catch-up loops for sequence exhaustion
//!
//! Both loops return the first reading strictly after `last`. They stop early
//! with [`WorkerError::ClockStalled`] once `limit` reads have been spent.

use std::thread;

use crate::config::Precision;
use crate::error::WorkerError;

use super::time::TimeSource;

#[inline(always)]
fn stalled(attempts: u64, limit: Option<u64>) -> bool {
    limit.is_some_and(|limit| attempts >= limit)
}

/// Busy-spin on the clock until it passes `last`
pub(crate) fn spin_until_after<C: TimeSource>(
    clock: &C,
    precision: Precision,
    last: i64,
    yield_every: u32,
    limit: Option<u64>,
) -> Result<i64, WorkerError> {
    let mut attempts = 0u64;
    loop {
        let now = clock.now(precision);
        attempts += 1;
        if now > last {
            return Ok(now);
        }
        if stalled(attempts, limit) {
            return Err(WorkerError::ClockStalled { last, attempts });
        }

        std::hint::spin_loop();

        if yield_every != 0 && attempts % u64::from(yield_every) == 0 {
            thread::yield_now();
        }
    }
}

/// Sleep one time unit between clock reads until it passes `last`
pub(crate) fn sleep_until_after<C: TimeSource>(
    clock: &C,
    precision: Precision,
    last: i64,
    limit: Option<u64>,
) -> Result<i64, WorkerError> {
    let mut now = clock.now(precision);
    let mut attempts = 1u64;
    while now <= last {
        if stalled(attempts, limit) {
            return Err(WorkerError::ClockStalled { last, attempts });
        }
        clock.sleep(precision);
        now = clock.now(precision);
        attempts += 1;
    }
    Ok(now)
}
