//! Owned binary tree node

/// A binary tree node owning its (optional) children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryNode<T> {
    /// Value stored at this node.
    pub value: T,

    /// Left child, if any.
    pub left: Option<Box<BinaryNode<T>>>,

    /// Right child, if any.
    pub right: Option<Box<BinaryNode<T>>>,
}

impl<T> BinaryNode<T> {
    /// Create a node with the given children.
    pub fn new(
        value: T,
        left: Option<Box<BinaryNode<T>>>,
        right: Option<Box<BinaryNode<T>>>,
    ) -> Self {
        Self { value, left, right }
    }

    /// Create a childless node.
    pub fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Box this node, for use as a child of another node.
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// True when the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
