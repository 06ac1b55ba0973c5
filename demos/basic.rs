use flakeid::{LayoutConfig, SnowflakeGenerator};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 10 machine id bits, 12 sequence bits, epoch 2020-01-01
    let generator = SnowflakeGenerator::with_machine_id(LayoutConfig::default(), 642).unwrap();

    println!("Generated IDs:");
    for _ in 0..3 {
        let id = generator.generate().unwrap();
        let parts = generator.deconstruct(id);
        let date = parts
            .date
            .map(|d| d.to_rfc3339())
            .unwrap_or_else(|| "out of range".to_string());
        println!(
            "  ID: {id}, Timestamp: {} ms since epoch, Human date: {date}, Machine ID: {:?}, Sequence: {}",
            parts.timestamp, parts.machine_id, parts.sequence
        );
    }

    // Ids travel as decimal strings
    let text = generator.generate().unwrap().to_string();
    let parts = generator.deconstruct_str(&text).unwrap();
    println!("\nBits of {text}:");
    println!("  Timestamp:  {}", parts.timestamp_bits);
    println!("  Machine ID: {}", parts.machine_id_bits.unwrap_or_default());
    println!("  Sequence:   {}", parts.sequence_bits);
    println!("  All:        {}", parts.all_bits);
}
