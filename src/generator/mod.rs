//! Core Snowflake generator implementation
//!
//! Split into modules for testability:
//! - `machine_id` - Write-once machine id
//! - `sequence` - Wrapping sequence counter
//! - `time` - Timestamp resolution
//! - `generate` - ID packing

mod generate;
mod machine_id;
mod sequence;
mod time;

use once_cell::sync::OnceCell;

use crate::config::{BitLayout, LayoutConfig};
use crate::error::SnowflakeError;
use crate::extractor::{Deconstructed, SnowflakeExtractor};
use crate::id::Snowflake;

pub use time::{timestamp_millis, unix_time_ms, IntoTimestamp};

use sequence::Sequence;

/// Snowflake generator for one bit layout
///
/// All operations take `&self`; share it behind an `Arc` to generate from
/// several threads.
#[derive(Debug)]
pub struct SnowflakeGenerator {
    layout: BitLayout,
    machine_id: OnceCell<u64>,
    sequence: Sequence,

    pub extract: SnowflakeExtractor,
}

impl SnowflakeGenerator {
    /// Validate `config` and create a generator with no machine id and
    /// sequence 0
    pub fn new(config: LayoutConfig) -> Result<Self, SnowflakeError> {
        let layout = config.validate()?;
        tracing::debug!(
            epoch = layout.epoch(),
            machine_id_bits = layout.machine_id_bits(),
            sequence_bits = layout.sequence_bits(),
            "created snowflake generator"
        );
        Ok(Self::build(layout))
    }

    /// Create a generator and assign its machine id in one step
    pub fn with_machine_id<T: Into<i128>>(
        config: LayoutConfig,
        machine_id: T,
    ) -> Result<Self, SnowflakeError> {
        let generator = Self::new(config)?;
        generator.set_machine_id(machine_id)?;
        Ok(generator)
    }

    fn build(layout: BitLayout) -> Self {
        Self {
            layout,
            machine_id: OnceCell::new(),
            sequence: Sequence::new(layout.max_sequence()),
            extract: SnowflakeExtractor::from_layout(layout),
        }
    }

    #[inline(always)]
    pub const fn config(&self) -> LayoutConfig {
        self.layout.config()
    }

    #[inline(always)]
    pub const fn layout(&self) -> &BitLayout {
        &self.layout
    }

    #[inline(always)]
    pub const fn epoch(&self) -> i64 {
        self.layout.epoch()
    }

    #[inline(always)]
    pub const fn machine_id_bits(&self) -> u8 {
        self.layout.machine_id_bits()
    }

    #[inline(always)]
    pub const fn sequence_bits(&self) -> u8 {
        self.layout.sequence_bits()
    }

    #[inline(always)]
    pub const fn max_machine_id(&self) -> u64 {
        self.layout.max_machine_id()
    }

    #[inline(always)]
    pub const fn max_sequence(&self) -> u64 {
        self.layout.max_sequence()
    }

    /// Sequence value the next generated id will carry
    #[inline]
    pub fn next_sequence(&self) -> u64 {
        self.sequence.peek()
    }

    /// Unpack an id produced under this generator's layout
    #[inline]
    pub fn deconstruct(&self, id: Snowflake) -> Deconstructed {
        self.extract.deconstruct(id)
    }

    /// Parse a decimal id and unpack it
    pub fn deconstruct_str(&self, id: &str) -> Result<Deconstructed, SnowflakeError> {
        self.extract.deconstruct_str(id)
    }
}
