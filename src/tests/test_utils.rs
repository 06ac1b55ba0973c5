//! Shared test utilities for Snowflake tests

use std::collections::HashSet;

use crate::{LayoutConfig, Snowflake, SnowflakeGenerator};

/// 2020-01-01T00:00:00Z
pub const EXAMPLE_EPOCH: i64 = 1577836800000;

/// Generator over `EXAMPLE_EPOCH` with the machine id already assigned
pub fn generator_with(machine_id_bits: u8, sequence_bits: u8, machine_id: u64) -> SnowflakeGenerator {
    let config = LayoutConfig::new(EXAMPLE_EPOCH, machine_id_bits, sequence_bits);
    SnowflakeGenerator::with_machine_id(config, machine_id).unwrap()
}

/// Assert that all IDs in the collection are unique
pub fn assert_unique_ids(ids: &[Snowflake], expected_count: usize) {
    let set: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(
        set.len(),
        expected_count,
        "Expected {} unique IDs, but got {} (duplicates detected)",
        expected_count,
        set.len()
    );
}

/// Assert that the sequence values form one run `0, 1, ..` per wrap cycle
pub fn assert_sequence_cycles(sequences: &[u64], max_sequence: u64) {
    let cycle = max_sequence as u128 + 1;
    for (i, &seq) in sequences.iter().enumerate() {
        let expected = (i as u128 % cycle) as u64;
        assert_eq!(
            seq, expected,
            "Sequence at position {} was {}, expected {}",
            i, seq, expected
        );
    }
}
