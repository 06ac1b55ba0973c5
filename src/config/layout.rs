//! Frozen shifts and limits derived from a validated [`LayoutConfig`]

use super::{LayoutConfig, LayoutConfigError, MAX_LOW_BITS};

/// Validated layout with precomputed constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitLayout {
    config: LayoutConfig,
    timestamp_shift: u8,
    machine_id_shift: u8,
    max_machine_id: u64,
    max_sequence: u64,
}

impl BitLayout {
    /// Calculate mask for given number of bits
    #[inline]
    pub(crate) const fn calculate_mask(bits: u8) -> u64 {
        ((1u128 << bits) - 1) as u64
    }

    pub(crate) fn new(config: LayoutConfig) -> Result<Self, LayoutConfigError> {
        let machine_id_bits = config.machine_id_bits();
        let sequence_bits = config.sequence_bits();

        if sequence_bits == 0 {
            return Err(LayoutConfigError::ZeroSequenceBits);
        }

        let low_bits = machine_id_bits as u16 + sequence_bits as u16;
        if low_bits > MAX_LOW_BITS as u16 {
            return Err(LayoutConfigError::LayoutTooWide {
                machine_id_bits,
                sequence_bits,
                max: MAX_LOW_BITS,
            });
        }

        Ok(Self {
            config,
            timestamp_shift: machine_id_bits + sequence_bits,
            // The machine id always sits directly above the sequence field
            machine_id_shift: sequence_bits,
            max_machine_id: Self::calculate_mask(machine_id_bits),
            max_sequence: Self::calculate_mask(sequence_bits),
        })
    }

    #[inline(always)]
    pub const fn config(&self) -> LayoutConfig {
        self.config
    }

    #[inline(always)]
    pub const fn epoch(&self) -> i64 {
        self.config.epoch()
    }

    #[inline(always)]
    pub const fn machine_id_bits(&self) -> u8 {
        self.config.machine_id_bits()
    }

    #[inline(always)]
    pub const fn sequence_bits(&self) -> u8 {
        self.config.sequence_bits()
    }

    /// Whether the layout reserves a machine id field at all
    #[inline(always)]
    pub const fn has_machine_id(&self) -> bool {
        self.config.machine_id_bits() != 0
    }

    #[inline(always)]
    pub const fn max_machine_id(&self) -> u64 {
        self.max_machine_id
    }

    #[inline(always)]
    pub const fn max_sequence(&self) -> u64 {
        self.max_sequence
    }

    #[inline(always)]
    pub const fn timestamp_shift(&self) -> u8 {
        self.timestamp_shift
    }

    #[inline(always)]
    pub const fn machine_id_shift(&self) -> u8 {
        self.machine_id_shift
    }

    /// Pack the three fields. Callers guarantee each value fits its field
    #[inline(always)]
    pub(crate) const fn pack(&self, delta: u64, machine_id: u64, sequence: u64) -> u128 {
        ((delta as u128) << self.timestamp_shift)
            | ((machine_id as u128) << self.machine_id_shift)
            | (sequence as u128)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_mask() {
        assert_eq!(BitLayout::calculate_mask(0), 0);
        assert_eq!(BitLayout::calculate_mask(1), 1);
        assert_eq!(BitLayout::calculate_mask(12), 0xFFF);
        assert_eq!(BitLayout::calculate_mask(64), u64::MAX);
    }

    #[test]
    fn test_shifts_independent_of_field_order() {
        for (m, s) in [(5, 16), (16, 5), (16, 16), (0, 2)] {
            let layout = LayoutConfig::new(0, m, s).validate().unwrap();
            assert_eq!(layout.machine_id_shift(), s);
            assert_eq!(layout.timestamp_shift(), m + s);
        }
    }

    #[test]
    fn test_pack_widest_layout() {
        let layout = LayoutConfig::new(0, 0, 64).validate().unwrap();
        let packed = layout.pack(u64::MAX, 0, u64::MAX);
        assert_eq!(packed, u128::MAX);
    }
}
