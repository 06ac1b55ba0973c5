//! Time utilities for Snowflake generation
//!
//! Resolves points in time to milliseconds since the Unix epoch

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use chrono::{DateTime, TimeZone, Utc};

use crate::error::SnowflakeError;

/// A point in time or an already-numeric millisecond count
pub trait IntoTimestamp {
    /// Milliseconds since the Unix epoch
    fn into_timestamp_millis(self) -> Result<i64, SnowflakeError>;
}

impl IntoTimestamp for i64 {
    #[inline(always)]
    fn into_timestamp_millis(self) -> Result<i64, SnowflakeError> {
        Ok(self)
    }
}

impl<Tz: TimeZone> IntoTimestamp for DateTime<Tz> {
    #[inline]
    fn into_timestamp_millis(self) -> Result<i64, SnowflakeError> {
        Ok(self.timestamp_millis())
    }
}

impl<Tz: TimeZone> IntoTimestamp for &DateTime<Tz> {
    #[inline]
    fn into_timestamp_millis(self) -> Result<i64, SnowflakeError> {
        Ok(self.timestamp_millis())
    }
}

/// Floors to whole milliseconds in both directions, like `DateTime::timestamp_millis`
impl IntoTimestamp for SystemTime {
    fn into_timestamp_millis(self) -> Result<i64, SnowflakeError> {
        match self.duration_since(UNIX_EPOCH) {
            Ok(after) => i64::try_from(after.as_millis()).map_err(|_| SnowflakeError::TimestampOutOfRange),
            Err(err) => {
                let before = err.duration();
                let partial = before.subsec_nanos() % 1_000_000 != 0;
                let millis = before.as_millis() + partial as u128;
                i64::try_from(millis)
                    .ok()
                    .and_then(i64::checked_neg)
                    .ok_or(SnowflakeError::TimestampOutOfRange)
            }
        }
    }
}

impl IntoTimestamp for Duration {
    /// Offset from the Unix epoch
    fn into_timestamp_millis(self) -> Result<i64, SnowflakeError> {
        i64::try_from(self.as_millis()).map_err(|_| SnowflakeError::TimestampOutOfRange)
    }
}

/// Resolve a date or millisecond count to milliseconds since the Unix epoch
#[inline]
pub fn timestamp_millis<T: IntoTimestamp>(t: T) -> Result<i64, SnowflakeError> {
    t.into_timestamp_millis()
}

/// Get current wall-clock time in milliseconds since Unix epoch
#[inline(always)]
pub fn unix_time_ms() -> i64 {
    Utc::now().timestamp_millis()
}
