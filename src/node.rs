/// A single vertex of a [`Tree`][crate::Tree]. It holds a value and
/// exclusively owns up to two children.
///
/// Nodes are only ever created by the tree that owns them, so the only way to
/// get one is by reference through a lookup such as
/// [`Tree::find_closest_node`][crate::Tree::find_closest_node].
#[derive(Debug)]
pub struct Node {
    pub(crate) value: i64,
    pub(crate) left: Option<Box<Node>>,
    pub(crate) right: Option<Box<Node>>,
}

impl Node {
    /// Construct a new leaf `Node` with the given `value`.
    pub(crate) fn new(value: i64) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub(crate) fn new_boxed(value: i64) -> Box<Self> {
        Box::new(Self::new(value))
    }

    /// The value stored in this node.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// The root of this node's left subtree, if any. Every value in it is
    /// smaller than [`value`][Node::value].
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// The root of this node's right subtree, if any. Every value in it is
    /// larger than [`value`][Node::value].
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
