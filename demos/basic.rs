use chrono::{DateTime, Utc};
use snowflake_worker::{Worker, WorkerConfig, WorkerError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Node 1 with the default layout: 41-bit time, 10-bit node, 12-bit sequence
    let worker = Worker::new(1)?;

    println!("Generated IDs (epoch {}):", worker.epoch());
    for _ in 0..3 {
        let id = worker.next()?;
        print_id(id, &worker);
    }

    // A coarser worker: seconds since 2020-01-01, 16 nodes, 8 sequence bits
    let config = WorkerConfig::builder()
        .epoch(1_577_836_800)
        .node_bits(4)
        .sequence_bits(8)
        .build()?;
    let coarse = Worker::with_config(15, config)?;
    match coarse.next_blocking() {
        Ok(id) => print_id(id, &coarse),
        Err(WorkerError::ClockMovedBackwards { delta, precision }) => {
            eprintln!("clock went back {delta} {precision}, try again later");
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

fn print_id(id: i64, worker: &Worker) {
    let (elapsed, node, sequence) = worker.extract().decompose(id);
    let datetime: DateTime<Utc> = worker.extract().datetime(id);

    println!("  ID: {id}, Elapsed: {elapsed}, Human date: {datetime}, Node ID: {node}, Sequence: {sequence}");
}
