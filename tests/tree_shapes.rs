use std::cmp::Ordering;

use ordbag::{compare, is_complete, is_strong_heap, BinaryNode};
use test_case::test_case;

fn leaf(value: i32) -> BinaryNode<i32> {
    BinaryNode::leaf(value)
}

fn node(value: i32, left: BinaryNode<i32>, right: BinaryNode<i32>) -> BinaryNode<i32> {
    BinaryNode::new(value, Some(left.boxed()), Some(right.boxed()))
}

/// Three full levels: root, two equal mid nodes, four leaves.
fn three_levels(root: i32, mid: i32, leaves: [i32; 4]) -> BinaryNode<i32> {
    node(
        root,
        node(mid, leaf(leaves[0]), leaf(leaves[1])),
        node(mid, leaf(leaves[2]), leaf(leaves[3])),
    )
}

#[test_case(100, 50, [49, 49, 49, 49], true ; "every leaf plus mid sums below the root")]
#[test_case(99, 50, [49, 49, 49, 49], false ; "leaf plus mid ties the root")]
#[test_case(100, 50, [49, 49, 49, 51], false ; "one leaf exceeds its parent")]
#[test_case(100, 100, [49, 49, 49, 49], false ; "mid value ties the root")]
#[test_case(10, 5, [4, 4, 4, 4], true ; "small strong heap")]
#[test_case(-1, -2, [-3, -3, -3, -3], true ; "negative sums stay below the root")]
fn strong_heap_over_three_levels(root: i32, mid: i32, leaves: [i32; 4], expected: bool) {
    let tree = three_levels(root, mid, leaves);
    assert!(is_complete(&tree));
    assert_eq!(is_strong_heap(&tree), expected);
}

#[test]
fn shape_alone_disqualifies_a_strong_heap() {
    // Perfect ordering, but the left child is missing.
    let tree = BinaryNode::new(100, None, Some(leaf(1).boxed()));
    assert!(!is_complete(&tree));
    assert!(!is_strong_heap(&tree));
}

#[test]
fn completeness_checks_each_subtree_independently() {
    let left_leaning = node(10, node(5, leaf(1), leaf(2)), leaf(4));
    assert!(is_complete(&left_leaning));

    // With both children present the check recurses into each subtree
    // independently, so a leaf left child next to a deeper right subtree
    // is accepted by the per-node characterization.
    let right_heavy = node(10, leaf(4), node(5, leaf(1), leaf(2)));
    assert!(is_complete(&right_heavy));

    // The shapes it does reject: a gap where the left child should be,
    // and a lone left child that is not a leaf.
    let gapped = BinaryNode::new(10, None, Some(leaf(4).boxed()));
    assert!(!is_complete(&gapped));

    let ragged = BinaryNode::new(10, Some(node(5, leaf(1), leaf(2)).boxed()), None);
    assert!(!is_complete(&ragged));
}

#[test]
fn trees_sort_with_absent_roots_first() {
    let small = leaf(1);
    let big = node(1, leaf(0), leaf(2));
    let mut roots = vec![Some(&big), None, Some(&small)];
    roots.sort_by(|a, b| compare(*a, *b));
    assert_eq!(roots, vec![None, Some(&small), Some(&big)]);
}

#[test]
fn comparison_is_lexicographic_left_value_right() {
    // Identical left subtrees and values; the right subtree decides.
    let a = node(5, leaf(1), leaf(2));
    let b = node(5, leaf(1), leaf(3));
    assert_eq!(compare(Some(&a), Some(&b)), Ordering::Less);

    // A smaller left subtree wins no matter the root values.
    let c = node(9, leaf(0), leaf(9));
    let d = node(1, leaf(2), leaf(0));
    assert_eq!(compare(Some(&c), Some(&d)), Ordering::Less);
}
