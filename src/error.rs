//! Error types for heap operations.

use thiserror::Error;

/// Error returned by fallible heap operations.
///
/// Both conditions are recoverable: the heap is left untouched and the
/// caller decides what to do (the command driver simply skips statistics
/// for the failed call).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The new key is not strictly less than the current key.
    #[error("new key is not less than the current key")]
    KeyNotDecreased,
    /// The handle does not refer to a live node in this heap, e.g. the
    /// node was already extracted by a delete-minimum.
    #[error("handle no longer refers to a node in this heap")]
    InvalidHandle,
}
