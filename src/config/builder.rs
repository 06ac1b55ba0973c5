//! LayoutConfig builder for constructing configuration

use super::{LayoutConfig, LayoutConfigError};

/// Default configuration values
pub(crate) const DEFAULT_EPOCH: i64 = 1577836800000; // January 1, 2020 UTC
pub(crate) const DEFAULT_MACHINE_ID_BITS: u8 = 10;
pub(crate) const DEFAULT_SEQUENCE_BITS: u8 = 12;

/// Builder for LayoutConfig
#[derive(Debug, Clone, Copy)]
pub struct LayoutConfigBuilder {
    pub(super) epoch: i64,
    pub(super) machine_id_bits: u8,
    pub(super) sequence_bits: u8,
}

impl LayoutConfigBuilder {
    /// Create a new LayoutConfigBuilder with default values
    pub const fn new() -> Self {
        Self {
            epoch: DEFAULT_EPOCH,
            machine_id_bits: DEFAULT_MACHINE_ID_BITS,
            sequence_bits: DEFAULT_SEQUENCE_BITS,
        }
    }

    /// Set a custom epoch in milliseconds since the Unix epoch
    pub const fn epoch(mut self, epoch: i64) -> Self {
        self.epoch = epoch;
        self
    }

    /// Set the width of the machine id field. 0 removes the field entirely
    pub const fn machine_id_bits(mut self, bits: u8) -> Self {
        self.machine_id_bits = bits;
        self
    }

    /// Set the width of the sequence field (at least 1)
    pub const fn sequence_bits(mut self, bits: u8) -> Self {
        self.sequence_bits = bits;
        self
    }

    /// Build the final LayoutConfig without validating it
    pub const fn build(self) -> LayoutConfig {
        LayoutConfig::from_builder(self)
    }

    /// Build the final LayoutConfig, rejecting layouts a generator would refuse
    pub fn try_build(self) -> Result<LayoutConfig, LayoutConfigError> {
        let config = self.build();
        config.validate()?;
        Ok(config)
    }
}

impl Default for LayoutConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
