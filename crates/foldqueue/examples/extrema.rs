//! Min, max, and sum queues over the same inputs.
//!
//! Run with `cargo run --example extrema`.

use foldqueue::{EmptyQueueError, FoldQueue};

fn main() -> Result<(), EmptyQueueError> {
    let mut min_queue = FoldQueue::new(|a: &i64, b: &i64| *a.min(b));
    let mut max_queue = FoldQueue::new(|a: &i64, b: &i64| *a.max(b));
    let mut sum_queue = FoldQueue::new(|a: &i64, b: &i64| a + b);

    for value in [5, 3, 1, 7] {
        min_queue.enqueue(value);
        max_queue.enqueue(value);
        sum_queue.enqueue(value);
    }

    println!("minimum: {}", min_queue.aggregate()?);
    println!("maximum: {}", max_queue.aggregate()?);

    let dropped = sum_queue.dequeue()?;
    println!("sum without {dropped}: {}", sum_queue.aggregate()?);

    Ok(())
}
