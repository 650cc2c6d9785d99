//! Fibonacci heap with operation step counting
//!
//! This crate provides a Fibonacci heap — a priority queue built as a
//! forest of heap-ordered multi-way trees with circular sibling rings —
//! together with the benchmark harness that drives it from textual command
//! streams and reports per-heap step statistics.
//!
//! # Complexity
//!
//! - **Insert**: O(1)
//! - **Decrease-key**: O(1) amortized (standard variant, cascading cuts)
//! - **Delete-minimum**: O(log n) amortized, O(n) worst case
//!
//! A **naive** variant disables cascading cuts: the same structure with a
//! simpler cut policy and a weaker amortized bound, useful as a baseline in
//! step-count experiments.
//!
//! Nodes live in an index-stable arena; callers address them through
//! generational [`NodeKey`] handles, so a handle kept across the node's
//! extraction is detected as stale instead of being undefined behavior.
//! The heap is single-threaded: every operation runs to completion and no
//! partial mutation is observable.
//!
//! # Example
//!
//! ```rust
//! use fibheap::FibonacciHeap;
//!
//! let mut heap = FibonacciHeap::standard();
//! heap.insert(1usize, 10);
//! heap.insert(2, 5);
//! heap.insert(3, 20);
//!
//! assert_eq!(heap.delete_min(), Some((2, 5)));
//! assert_eq!(heap.minimum(), Some((&1, &10)));
//! ```

pub mod commands;
mod consolidate;
pub mod driver;
pub mod error;
pub mod heap;
mod node;
mod ring;
pub mod stats;

pub use commands::{Command, CommandError};
pub use driver::{CommandDriver, DriverError};
pub use error::HeapError;
pub use heap::FibonacciHeap;
pub use node::NodeKey;
