//! Lexicographic three-way comparison of binary trees

use std::cmp::Ordering;

use super::BinaryNode;

/// Compare two optional trees.
///
/// An absent tree sorts before any present tree and two absent trees are
/// equal. Present trees compare lexicographically: left subtree first, then
/// the node value, then the right subtree.
pub fn compare<T: Ord>(a: Option<&BinaryNode<T>>, b: Option<&BinaryNode<T>>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => compare(a.left.as_deref(), b.left.as_deref())
            .then_with(|| a.value.cmp(&b.value))
            .then_with(|| compare(a.right.as_deref(), b.right.as_deref())),
    }
}

impl<T: Ord> Ord for BinaryNode<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(Some(self), Some(other))
    }
}

impl<T: Ord> PartialOrd for BinaryNode<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
