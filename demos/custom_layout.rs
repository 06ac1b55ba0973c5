use flakeid::{LayoutConfig, SnowflakeGenerator};

fn main() {
    // Layout from FLAKEID_EPOCH / FLAKEID_MACHINE_ID_BITS / FLAKEID_SEQUENCE_BITS,
    // falling back to 16 machine id bits and 5 sequence bits
    let config = if std::env::var_os(flakeid::ENV_MACHINE_ID_BITS).is_some() {
        LayoutConfig::from_env().unwrap()
    } else {
        LayoutConfig::builder()
            .machine_id_bits(16)
            .sequence_bits(5)
            .build()
    };

    let generator = SnowflakeGenerator::new(config).unwrap();

    println!("Generator configuration:");
    println!("  Epoch: {}", generator.epoch());
    println!("  Machine ID bits: {}", generator.machine_id_bits());
    println!("  Sequence bits: {}", generator.sequence_bits());
    println!("  Max machine ID: {}", generator.max_machine_id());
    println!("  Max sequence per ms: {}", generator.max_sequence());

    if generator.machine_id_bits() > 0 {
        generator.set_machine_id(generator.max_machine_id()).unwrap();
    }

    let id = generator.generate().unwrap();
    let (ts, machine_id, seq) = generator.extract.decompose(id);

    println!("\nGenerated ID: {}", id);
    println!("Components:");
    println!("  Timestamp: {} ms since epoch", ts);
    println!("  Machine ID: {:?} (of {})", machine_id, generator.max_machine_id());
    println!("  Sequence: {} (of {})", seq, generator.max_sequence());
}
