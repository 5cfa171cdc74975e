//! Binary tree node type, shape predicates, and ordering
//!
//! The node type is an owned strict tree (each node owned by at most one
//! parent), supplied by the caller; the predicates and the comparator only
//! ever read it.

mod compare;
mod node;
mod predicates;

pub use compare::compare;
pub use node::BinaryNode;
pub use predicates::{is_complete, is_strong_heap};
