use thiserror::Error as ThisError;

///
/// EmptyQueueError
///
/// Returned by every fallible queue operation invoked while no elements are
/// queued. Failed calls perform no mutation, so the queue is safe to keep
/// using after one.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[error("queue is empty")]
pub struct EmptyQueueError;
