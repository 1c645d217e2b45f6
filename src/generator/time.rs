//! Time sources for ID generation
//!
//! Workers read the clock through [`TimeSource`] so the catch-up loops can be
//! driven by a deterministic clock in tests.

use std::thread;

use chrono::Utc;

use crate::config::Precision;

/// Source of the current time in a worker's time unit
pub trait TimeSource {
    /// Current time since the Unix epoch, truncated to `precision`
    fn now(&self, precision: Precision) -> i64;

    /// Block for one unit of `precision`
    fn sleep(&self, precision: Precision) {
        thread::sleep(precision.unit());
    }
}

/// Wall-clock time source
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    #[inline(always)]
    fn now(&self, precision: Precision) -> i64 {
        let now = Utc::now();
        match precision {
            Precision::Seconds => now.timestamp(),
            Precision::Millis => now.timestamp_millis(),
            Precision::Micros => now.timestamp_micros(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_time_is_reasonable() {
        let now = SystemClock.now(Precision::Millis);
        // Should be after 2024-01-01
        assert!(now > 1_704_067_200_000);
        // Should be before 2100-01-01
        assert!(now < 4_102_444_800_000);
    }

    #[test]
    fn test_precisions_agree() {
        let clock = SystemClock;
        let secs = clock.now(Precision::Seconds);
        let millis = clock.now(Precision::Millis);
        let micros = clock.now(Precision::Micros);

        assert!(millis / 1000 - secs <= 1);
        assert!(micros / 1000 - millis <= 1);
    }

    #[test]
    fn test_sleep_advances_clock() {
        let clock = SystemClock;
        let before = clock.now(Precision::Millis);
        clock.sleep(Precision::Millis);
        assert!(clock.now(Precision::Millis) > before);
    }
}
