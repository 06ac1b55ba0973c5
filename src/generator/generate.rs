//! ID generation logic

use crate::error::SnowflakeError;
use crate::id::Snowflake;

use super::time::{unix_time_ms, IntoTimestamp};
use super::SnowflakeGenerator;

impl SnowflakeGenerator {
    /// Generate a new Snowflake stamped with the current time
    #[inline]
    pub fn generate(&self) -> Result<Snowflake, SnowflakeError> {
        self.generate_at(unix_time_ms())
    }

    /// Generate a new Snowflake stamped with `timestamp`
    ///
    /// The sequence counter wraps to 0 after `max_sequence()` without waiting
    /// for the next millisecond. More than `max_sequence() + 1` ids in the
    /// same millisecond for the same machine id will therefore repeat.
    ///
    /// A failed call leaves the sequence counter untouched, including when
    /// `timestamp` cannot be expressed as `i64` milliseconds.
    pub fn generate_at<T: IntoTimestamp>(&self, timestamp: T) -> Result<Snowflake, SnowflakeError> {
        let machine_id = self.machine_id_for_packing()?;
        let delta = self.delta_since_epoch(timestamp.into_timestamp_millis()?)?;

        let sequence = self.sequence.claim();
        let id = Snowflake::from_raw(self.layout.pack(delta, machine_id, sequence));

        tracing::trace!(%id, delta, sequence, "generated snowflake");
        Ok(id)
    }

    /// Machine id bits to pack; 0 contributes nothing when the field is absent
    #[inline]
    fn machine_id_for_packing(&self) -> Result<u64, SnowflakeError> {
        Ok(self.machine_id()?.unwrap_or(0))
    }

    #[inline]
    fn delta_since_epoch(&self, timestamp: i64) -> Result<u64, SnowflakeError> {
        let epoch = self.layout.epoch();
        let delta = timestamp as i128 - epoch as i128;
        u64::try_from(delta).map_err(|_| SnowflakeError::TimestampBeforeEpoch { timestamp, epoch })
    }
}
