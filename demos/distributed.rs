use flakeid::{LayoutConfig, SnowflakeGenerator};
use rand::Rng;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = LayoutConfig::default();
    let mut handles = vec![];

    // One generator per simulated node, each with its own machine id
    for machine_id in 0..4u64 {
        handles.push(thread::spawn(move || {
            let generator = SnowflakeGenerator::with_machine_id(config, machine_id).unwrap();
            let mut ids = HashSet::new();
            let mut rng = rand::rng();

            for i in 0..5 {
                let id = generator.generate().unwrap();
                let (ts, node, seq) = generator.extract.decompose(id);

                println!(
                    "Machine {} generated ID {} = {} (ts={}, node={:?}, seq={})",
                    machine_id, i, id, ts, node, seq
                );

                assert!(ids.insert(id), "Duplicate ID generated!");

                let delay = rng.random_range(0..=9);
                thread::sleep(Duration::from_millis(delay));
            }
            ids
        }));
    }

    // A shared generator is Sync and needs no Mutex
    let shared = Arc::new(SnowflakeGenerator::with_machine_id(config, 1000u64).unwrap());
    let shared_handles: Vec<_> = (0..4)
        .map(|_| {
            let g = Arc::clone(&shared);
            thread::spawn(move || (0..5).map(|_| g.generate().unwrap()).collect::<HashSet<_>>())
        })
        .collect();

    let mut all_ids = HashSet::new();
    for handle in handles.into_iter().chain(shared_handles) {
        let thread_ids = handle.join().unwrap();
        all_ids.extend(thread_ids);
    }

    println!("\nTotal unique IDs generated: {}", all_ids.len());
    assert_eq!(all_ids.len(), 40);
    println!("All IDs are unique!");
}
