//! Completeness and strong-heap predicates
//!
//! Both checks use explicit worklists instead of recursion, so degenerate
//! trees cannot exhaust the call stack.

use std::ops::Add;

use super::BinaryNode;

/// Returns true when the tree is a complete binary tree: every level fully
/// filled except possibly the last, whose nodes sit as far left as possible.
///
/// Characterization checked per node: a leaf is complete; a missing left
/// child (with any right child) is immediately incomplete; a missing right
/// child is acceptable only when the left child is itself a leaf; otherwise
/// both subtrees must satisfy the same predicate.
pub fn is_complete<T>(root: &BinaryNode<T>) -> bool {
    let mut pending = vec![root];
    while let Some(node) = pending.pop() {
        if node.is_leaf() {
            continue;
        }
        let Some(left) = node.left.as_deref() else {
            // A right child with no left sibling leaves a gap.
            return false;
        };
        match node.right.as_deref() {
            None => {
                if !left.is_leaf() {
                    return false;
                }
            }
            Some(right) => {
                pending.push(left);
                pending.push(right);
            }
        }
    }
    true
}

/// Returns true when the tree is a strong heap: complete, every node
/// strictly less than its parent, and, where a grandparent exists, the sum
/// of a node and its parent strictly less than the grandparent's value.
///
/// A single node is trivially a strong heap. Completeness is established
/// first; a non-complete tree is rejected regardless of its values.
pub fn is_strong_heap<T>(root: &BinaryNode<T>) -> bool
where
    T: Copy + Ord + Add<Output = T>,
{
    is_complete(root) && strong_order_holds(root)
}

/// Top-down value check, carrying the parent's value so each child can be
/// compared against both its parent and its grandparent.
fn strong_order_holds<T>(root: &BinaryNode<T>) -> bool
where
    T: Copy + Ord + Add<Output = T>,
{
    let mut pending: Vec<(&BinaryNode<T>, Option<T>)> = vec![(root, None)];
    while let Some((node, parent)) = pending.pop() {
        let children = [node.left.as_deref(), node.right.as_deref()];
        for child in children.into_iter().flatten() {
            if child.value >= node.value {
                return false;
            }
            if let Some(grandvalue) = parent {
                if child.value + node.value >= grandvalue {
                    return false;
                }
            }
            pending.push((child, Some(node.value)));
        }
    }
    true
}
