use chrono::{DateTime, Utc};

use crate::config::{BitLayout, LayoutConfig};
use crate::error::SnowflakeError;
use crate::id::Snowflake;

/// Components of an unpacked Snowflake
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Deconstructed {
    /// Milliseconds since the layout epoch
    pub timestamp: u128,
    /// `epoch + timestamp`, `None` if outside chrono's representable range
    pub date: Option<DateTime<Utc>>,
    /// `None` when the layout has no machine id field
    pub machine_id: Option<u64>,
    pub sequence: u64,
    /// High-order bits above the machine id field, empty when the delta is 0
    pub timestamp_bits: String,
    /// Machine id field bits, `None` when the field is absent
    pub machine_id_bits: Option<String>,
    /// Lowest `sequence_bits` bits
    pub sequence_bits: String,
    /// Natural binary form of the id, equal to
    /// `timestamp_bits + machine_id_bits + sequence_bits`
    pub all_bits: String,
}

/// Snowflake component extractor
#[derive(Debug, Copy, Clone)]
pub struct SnowflakeExtractor {
    layout: BitLayout,
}

impl SnowflakeExtractor {
    /// Create an extractor for `config`, independent of any generator
    pub fn new(config: LayoutConfig) -> Result<Self, SnowflakeError> {
        Ok(Self::from_layout(config.validate()?))
    }

    pub(crate) const fn from_layout(layout: BitLayout) -> Self {
        Self { layout }
    }

    #[inline(always)]
    pub const fn layout(&self) -> &BitLayout {
        &self.layout
    }

    /// Extract timestamp delta from a Snowflake
    #[inline(always)]
    pub fn timestamp(&self, id: Snowflake) -> u128 {
        id.to_raw() >> self.layout.timestamp_shift()
    }

    /// Extract machine id from a Snowflake
    #[inline(always)]
    pub fn machine_id(&self, id: Snowflake) -> Option<u64> {
        self.layout.has_machine_id().then(|| {
            ((id.to_raw() >> self.layout.machine_id_shift()) & self.layout.max_machine_id() as u128)
                as u64
        })
    }

    /// Extract sequence from a Snowflake
    #[inline(always)]
    pub fn sequence(&self, id: Snowflake) -> u64 {
        (id.to_raw() & self.layout.max_sequence() as u128) as u64
    }

    /// Decompose a Snowflake into timestamp delta, machine id and sequence
    #[inline]
    pub fn decompose(&self, id: Snowflake) -> (u128, Option<u64>, u64) {
        (self.timestamp(id), self.machine_id(id), self.sequence(id))
    }

    /// Absolute time of a timestamp delta under this layout's epoch
    pub fn date(&self, timestamp: u128) -> Option<DateTime<Utc>> {
        let millis = i64::try_from(timestamp)
            .ok()?
            .checked_add(self.layout.epoch())?;
        DateTime::<Utc>::from_timestamp_millis(millis)
    }

    /// Unpack a Snowflake into values and bit strings
    ///
    /// Bit segments are cut from the right of the id's natural binary form, so
    /// small ids yield segments shorter than their field widths and an empty
    /// timestamp segment.
    pub fn deconstruct(&self, id: Snowflake) -> Deconstructed {
        let (timestamp, machine_id, sequence) = self.decompose(id);

        let all_bits = id.to_binary_string();
        let (rest, sequence_bits) = split_low(&all_bits, self.layout.sequence_bits());
        let (timestamp_bits, machine_id_bits) = if self.layout.has_machine_id() {
            let (high, bits) = split_low(rest, self.layout.machine_id_bits());
            (high, Some(bits.to_string()))
        } else {
            (rest, None)
        };

        Deconstructed {
            timestamp,
            date: self.date(timestamp),
            machine_id,
            sequence,
            timestamp_bits: timestamp_bits.to_string(),
            machine_id_bits,
            sequence_bits: sequence_bits.to_string(),
            all_bits,
        }
    }

    /// Parse a decimal Snowflake and unpack it
    pub fn deconstruct_str(&self, id: &str) -> Result<Deconstructed, SnowflakeError> {
        let id: Snowflake = id.parse()?;
        Ok(self.deconstruct(id))
    }
}

/// Split off the lowest `width` binary digits (fewer if `bits` is shorter)
fn split_low(bits: &str, width: u8) -> (&str, &str) {
    bits.split_at(bits.len().saturating_sub(width as usize))
}
