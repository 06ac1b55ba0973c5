//! Bit-layout configuration for Snowflake generators

mod builder;
mod env;
mod layout;

use thiserror::Error;

pub use builder::LayoutConfigBuilder;
pub(crate) use builder::{DEFAULT_EPOCH, DEFAULT_MACHINE_ID_BITS, DEFAULT_SEQUENCE_BITS};
pub use env::{ENV_EPOCH, ENV_MACHINE_ID_BITS, ENV_SEQUENCE_BITS};
pub use layout::BitLayout;

/// Widest machine id + sequence region that still leaves a 64-bit timestamp
/// delta representable inside a `u128` identifier
pub const MAX_LOW_BITS: u8 = 64;

/// Errors raised while validating a layout
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutConfigError {
    /// A bit width was negative
    #[error("\"{field}\" cannot be negative (got {value})")]
    NegativeBits { field: &'static str, value: i64 },
    /// At least one sequence bit is required for unique ids within a millisecond
    #[error("At least one bit must be reserved for the sequence number")]
    ZeroSequenceBits,
    /// Machine id and sequence fields together exceed [`MAX_LOW_BITS`]
    #[error("Machine id bits ({machine_id_bits}) plus sequence bits ({sequence_bits}) exceed {max}")]
    LayoutTooWide {
        machine_id_bits: u8,
        sequence_bits: u8,
        max: u8,
    },
    /// Configuration value could not be parsed
    #[error("Invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Layout for a Snowflake generator
///
/// Identifiers are laid out most-significant first as
/// `[timestamp delta][machine id][sequence]`. The timestamp field has no
/// fixed width and grows as time moves away from `epoch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LayoutConfig {
    epoch: i64,
    machine_id_bits: u8,
    sequence_bits: u8,
}

impl LayoutConfig {
    /// Create a layout from its raw parts. Validation happens when a
    /// generator or extractor is built from it.
    pub const fn new(epoch: i64, machine_id_bits: u8, sequence_bits: u8) -> Self {
        Self {
            epoch,
            machine_id_bits,
            sequence_bits,
        }
    }

    /// Create config from builder
    pub(crate) const fn from_builder(b: LayoutConfigBuilder) -> Self {
        Self::new(b.epoch, b.machine_id_bits, b.sequence_bits)
    }

    /// Create a new configuration builder
    pub fn builder() -> LayoutConfigBuilder {
        LayoutConfigBuilder::new()
    }

    #[inline(always)]
    pub const fn epoch(&self) -> i64 {
        self.epoch
    }

    #[inline(always)]
    pub const fn machine_id_bits(&self) -> u8 {
        self.machine_id_bits
    }

    #[inline(always)]
    pub const fn sequence_bits(&self) -> u8 {
        self.sequence_bits
    }

    /// Check the layout and compute its derived constants
    pub fn validate(&self) -> Result<BitLayout, LayoutConfigError> {
        BitLayout::new(*self)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(DEFAULT_EPOCH, DEFAULT_MACHINE_ID_BITS, DEFAULT_SEQUENCE_BITS)
    }
}
