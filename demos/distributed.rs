use rand::{rng, Rng};
use snowflake_worker::{Worker, WorkerDefaults};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() {
    // Every node in the cluster shares one layout; node ids are assigned by us
    let mut defaults = WorkerDefaults::new();
    defaults.set_bit_widths(6, 16).unwrap();
    let config = defaults.builder().build().unwrap();

    let mut handles = vec![];
    for node_id in 0..4u64 {
        let worker = Arc::new(Worker::with_config(node_id, config).unwrap());

        // Two threads per node share that node's worker
        for thread_id in 0..2 {
            let worker = Arc::clone(&worker);
            handles.push(thread::spawn(move || {
                let mut rng = rng();
                let mut ids = Vec::new();
                for _ in 0..5 {
                    let id = worker.next().unwrap();
                    let (ts, node, seq) = worker.extract().decompose(id);
                    println!("Node {node_id}/thread {thread_id} generated {id} (ts={ts}, node={node}, seq={seq})");
                    ids.push(id);

                    thread::sleep(Duration::from_millis(rng.random_range(0..=9)));
                }
                ids
            }));
        }
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(all_ids.insert(id), "Duplicate ID generated!");
        }
    }
    println!("\nTotal unique IDs generated: {}", all_ids.len());
}
