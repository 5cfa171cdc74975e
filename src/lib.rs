//! # ordbag
//!
//! An insertion-ordered hash multiset plus two companion in-place
//! algorithms, each an independent core consumed directly by callers:
//!
//! - [`OrderedMultiset`]: an open-addressed hash table (linear probing,
//!   tombstone deletion, amortized doubling) threaded with an intrusive
//!   doubly-linked list so iteration follows first-insertion order, with
//!   elements stored once per distinct value alongside a repetition count.
//! - [`heap`]: quaternary (4-ary) max-heap maintenance and heapsort over a
//!   flat mutable slice.
//! - [`tree`]: completeness and strong-heap predicates over caller-owned
//!   binary trees, and a lexicographic three-way tree comparison.
//!
//! The multiset only requires `Hash + Eq` of its elements; a total order is
//! needed solely by the heap and tree components.
//!
//! Everything here is single-threaded and synchronous: no locks, no
//! internal mutability, and all operations run to completion. Use external
//! synchronization to share a multiset across threads.
//!
//! ## Example
//!
//! ```
//! use ordbag::OrderedMultiset;
//!
//! let mut bag = OrderedMultiset::new(4);
//! bag.add("b");
//! bag.add_count("a", 2);
//!
//! // Removing the last occurrence and re-adding moves "b" to the tail.
//! bag.remove(&"b")?;
//! bag.add("b");
//!
//! let order: Vec<_> = bag.iter().copied().collect();
//! assert_eq!(order, ["a", "a", "b"]);
//! # Ok::<(), ordbag::MultisetError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod heap;
pub mod multiset;
pub mod tree;

// Re-exports for convenience
pub use multiset::{MultisetError, OrderedMultiset};
pub use tree::{compare, is_complete, is_strong_heap, BinaryNode};
