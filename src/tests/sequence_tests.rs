use crate::tests::test_utils::{assert_sequence_cycles, generator_with, EXAMPLE_EPOCH};
use crate::*;

#[test]
fn test_sequence_rollover() {
    let g = generator_with(10, 12, 0);
    let max = g.max_sequence();

    let mut sequences = Vec::with_capacity(max as usize + 2);
    for _ in 0..=max {
        let id = g.generate().unwrap();
        sequences.push(g.extract.sequence(id));
    }
    assert_eq!(sequences.last(), Some(&4095));

    // Call k carries sequence k - 1, so after 4096 calls (0..=4095) the
    // 4097th wraps to 0 without waiting for the clock
    let id = g.generate().unwrap();
    assert_eq!(g.deconstruct(id).sequence, 0);
}

#[test]
fn test_sequence_wraps_within_same_millisecond() {
    let g = generator_with(10, 12, 0);
    let at = EXAMPLE_EPOCH + 1;

    let sequences: Vec<u64> = (0..4096 * 2 + 5)
        .map(|_| g.extract.sequence(g.generate_at(at).unwrap()))
        .collect();

    assert_eq!(sequences[4095], 4095);
    assert_eq!(sequences[4096], 0);
    assert_sequence_cycles(&sequences, g.max_sequence());
}

#[test]
fn test_sequence_independent_of_time() {
    let g = generator_with(2, 2, 1);
    let sequences: Vec<u64> = (0..10)
        .map(|i| g.extract.sequence(g.generate_at(EXAMPLE_EPOCH + i * 1000).unwrap()))
        .collect();
    assert_eq!(sequences, vec![0, 1, 2, 3, 0, 1, 2, 3, 0, 1]);
}

#[test]
fn test_failed_generate_does_not_advance() {
    let g = generator_with(2, 2, 1);
    g.generate_at(EXAMPLE_EPOCH).unwrap();
    assert!(g.generate_at(EXAMPLE_EPOCH - 10).is_err());
    let id = g.generate_at(EXAMPLE_EPOCH).unwrap();
    assert_eq!(g.extract.sequence(id), 1);
}

#[test]
fn test_full_width_sequence_cycles() {
    let g = SnowflakeGenerator::new(LayoutConfig::new(EXAMPLE_EPOCH, 0, 64)).unwrap();
    assert_eq!(g.max_sequence(), u64::MAX);

    let sequences: Vec<u64> = (0..5)
        .map(|_| g.extract.sequence(g.generate_at(EXAMPLE_EPOCH).unwrap()))
        .collect();
    assert_sequence_cycles(&sequences, g.max_sequence());
}

#[test]
fn test_single_sequence_bit() {
    let g = SnowflakeGenerator::new(LayoutConfig::new(EXAMPLE_EPOCH, 0, 1)).unwrap();
    let sequences: Vec<u64> = (0..5)
        .map(|_| g.extract.sequence(g.generate().unwrap()))
        .collect();
    assert_eq!(sequences, vec![0, 1, 0, 1, 0]);
}
