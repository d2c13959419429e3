//! FIFO queue with O(1) retrieval of an associative fold over everything
//! currently queued.
//!
//! [`FoldQueue`] is the classic two-stack queue, with each stack shadowed by
//! running fold values of a caller-supplied operator (min, max, sum, gcd,
//! concatenation, …). Enqueue, peeks, and aggregate reads are O(1); dequeue
//! is amortized O(1).
#![warn(unreachable_pub)]

mod error;
mod queue;
mod stack;

pub use error::EmptyQueueError;
pub use queue::{FoldQueue, Iter};

///
/// TESTS
///

#[cfg(test)]
mod tests;
