//! Time unit of a worker, inferred from how an epoch literal is written

use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

/// Resolution at which elapsed time since the epoch is tracked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    Seconds,
    Millis,
    Micros,
}

impl Precision {
    /// Infer the precision from the decimal length of an epoch literal.
    ///
    /// 10 digits are seconds, 13 milliseconds and 16 microseconds. This is a
    /// plain length check: epochs outside those digit bands (e.g. before
    /// 2001-09-09 in seconds, or anything negative) are rejected even when
    /// they describe a real instant.
    pub fn from_epoch(epoch: i64) -> Result<Self, ConfigError> {
        let digits = epoch.to_string().len();
        if epoch < 0 {
            return Err(ConfigError::InvalidEpochLength { epoch, digits });
        }
        match digits {
            10 => Ok(Self::Seconds),
            13 => Ok(Self::Millis),
            16 => Ok(Self::Micros),
            _ => Err(ConfigError::InvalidEpochLength { epoch, digits }),
        }
    }

    /// Nanoseconds in one unit; divides a nanosecond clock reading
    #[inline(always)]
    pub const fn nanos_per_unit(self) -> i64 {
        match self {
            Self::Seconds => 1_000_000_000,
            Self::Millis => 1_000_000,
            Self::Micros => 1_000,
        }
    }

    /// Length of one unit
    #[inline]
    pub const fn unit(self) -> Duration {
        Duration::from_nanos(self.nanos_per_unit() as u64)
    }

    /// Convert a value in this unit to nanoseconds, saturating on overflow
    #[inline]
    pub const fn to_nanos(self, value: i64) -> i64 {
        value.saturating_mul(self.nanos_per_unit())
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Seconds => "seconds",
            Self::Millis => "milliseconds",
            Self::Micros => "microseconds",
        };
        f.write_str(name)
    }
}
