//! An unbalanced BST over `i64` values that always has a root.
//!
//! # Examples
//!
//! ```
//! use int_bst::Tree;
//!
//! let mut tree = Tree::new(10);
//! for value in [1, 4, 6, 8, 23, 99, 50, 303, 33, 25] {
//!     tree.insert(value);
//! }
//!
//! // Where 34 would be attached if it were inserted.
//! assert_eq!(tree.find_closest_node(34).value(), 33);
//!
//! // A copy is a brand new tree with the same shape.
//! let mut copy = tree.copy();
//! assert_eq!(copy, tree);
//!
//! copy.insert(34);
//! assert_ne!(copy, tree);
//! assert!(!tree.contains(34));
//! ```

use std::cmp::Ordering;
use std::str::FromStr;

use tracing::{instrument, trace};

use crate::error::TreeError;
use crate::level::{self, Slot};
use crate::node::Node;

/// A Binary Search Tree of distinct `i64` values. It never rebalances and
/// never shrinks, so it always has at least its root.
#[derive(Debug)]
pub struct Tree {
    root: Node,
    count: usize,
}

impl Drop for Tree {
    // Boxed children would otherwise be dropped recursively, which overflows
    // the stack on long chains.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = Vec::new();
        pending.extend(self.root.left.take());
        pending.extend(self.root.right.take());

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl Clone for Tree {
    /// Deep copies every node. The copy shares nothing with `self`.
    fn clone(&self) -> Self {
        let mut root = Node::new(self.root.value);
        {
            let mut pending: Vec<(&Node, &mut Node)> = vec![(&self.root, &mut root)];
            while let Some((from, to)) = pending.pop() {
                let Node { left, right, .. } = to;
                if let Some(from_left) = from.left() {
                    let to_left = left.insert(Node::new_boxed(from_left.value));
                    pending.push((from_left, &mut **to_left));
                }
                if let Some(from_right) = from.right() {
                    let to_right = right.insert(Node::new_boxed(from_right.value));
                    pending.push((from_right, &mut **to_right));
                }
            }
        }

        Self {
            root,
            count: self.count,
        }
    }
}

impl PartialEq for Tree {
    /// Two trees are equal when they have the same shape and the same value
    /// at every position. Holding the same set of values is not enough.
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(&self.root, &other.root)];
        while let Some((a, b)) = pending.pop() {
            if a.value != b.value {
                return false;
            }

            for pair in [(a.left(), b.left()), (a.right(), b.right())] {
                match pair {
                    (None, None) => {}
                    (Some(left), Some(right)) => pending.push((left, right)),
                    _ => return false,
                }
            }
        }

        true
    }
}

impl Eq for Tree {}

impl Tree {
    /// Generates a new `Tree` whose root holds `value`.
    pub fn new(value: i64) -> Self {
        Self {
            root: Node::new(value),
            count: 1,
        }
    }

    /// Builds a tree from a sequence of values. The first value becomes the
    /// root and the rest are inserted in order; repeated values are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::{Tree, TreeError};
    ///
    /// let tree = Tree::from_values([10, 5, 15, 5]).unwrap();
    /// assert_eq!(tree.size(), 3);
    ///
    /// assert_eq!(Tree::from_values([]).unwrap_err(), TreeError::Empty);
    /// ```
    pub fn from_values<I>(values: I) -> Result<Self, TreeError>
    where
        I: IntoIterator<Item = i64>,
    {
        let mut values = values.into_iter();
        let root = values.next().ok_or(TreeError::Empty)?;

        let mut tree = Self::new(root);
        tree.extend(values);
        Ok(tree)
    }

    /// The root of the tree.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// How many nodes are in the tree.
    pub fn size(&self) -> usize {
        self.count
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> i64 {
        let mut node = &self.root;
        while let Some(left) = node.left() {
            node = left;
        }
        node.value
    }

    /// The largest value in the tree.
    pub fn max(&self) -> i64 {
        let mut node = &self.root;
        while let Some(right) = node.right() {
            node = right;
        }
        node.value
    }

    /// Whether `value` is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::Tree;
    ///
    /// let mut tree = Tree::new(10);
    /// tree.insert(15);
    ///
    /// assert!(tree.contains(15));
    /// assert!(!tree.contains(12));
    /// ```
    pub fn contains(&self, value: i64) -> bool {
        self.find_closest_node(value).value == value
    }

    /// The number of nodes on the longest path from the root to a leaf. A
    /// tree holding only its root has a depth of 1.
    #[instrument(level = "trace", skip(self))]
    pub fn depth(&self) -> usize {
        let mut deepest = 1;
        let mut pending = vec![(&self.root, 1)];
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.right().map(|right| (right, depth + 1)));
            pending.extend(node.left().map(|left| (left, depth + 1)));
        }
        deepest
    }

    /// Inserts `value` as a new leaf. Returns `false` and leaves the tree
    /// untouched if `value` is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::Tree;
    ///
    /// let mut tree = Tree::new(0);
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(0));
    /// assert_eq!(tree.size(), 2);
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, value: i64) -> bool {
        let mut node = &mut self.root;
        loop {
            let slot = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    trace!(value, "value already present");
                    return false;
                }
            };

            match slot {
                Some(child) => node = &mut **child,
                None => {
                    *slot = Some(Node::new_boxed(value));
                    self.count += 1;
                    trace!(value, size = self.count, "inserted");
                    return true;
                }
            }
        }
    }

    /// Finds the node `value` would be attached to if it were inserted, or
    /// the node already holding `value`.
    ///
    /// The search follows BST ordering from the root and stops at the first
    /// node equal to `value` or at the first node without a child on the
    /// side `value` falls.
    pub fn find_closest_node(&self, value: i64) -> &Node {
        let mut node = &self.root;
        loop {
            let next = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => None,
            };

            match next {
                Some(child) => node = child,
                None => return node,
            }
        }
    }

    /// Finds a node whose value is near `value` by greedy descent.
    ///
    /// From the root, move to the left child if it is strictly closer to
    /// `value` than the current node, else to the right child if that is
    /// strictly closer, else stop. An exact match stops immediately. The
    /// search never backtracks, so it can settle on a node that is not the
    /// globally nearest one.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::Tree;
    ///
    /// let tree = Tree::from_values([10, 0, 20, 25]).unwrap();
    ///
    /// assert_eq!(tree.find_closest_value_node(-5).value(), 0);
    /// assert_eq!(tree.find_closest_value_node(6).value(), 10);
    /// assert_eq!(tree.find_closest_value_node(16).value(), 20);
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn find_closest_value_node(&self, value: i64) -> &Node {
        let mut node = &self.root;
        loop {
            let distance = node.value.abs_diff(value);
            if distance == 0 {
                return node;
            }

            let closer = |child: &Node| child.value.abs_diff(value) < distance;
            let next = node
                .left()
                .filter(|left| closer(*left))
                .or_else(|| node.right().filter(|right| closer(*right)));

            match next {
                Some(child) => node = child,
                None => return node,
            }
        }
    }

    /// Lists every position `depth` levels below the root (the root is level
    /// 0), left to right. Positions without a node are [`Slot::Vacant`], so
    /// the result always has `2^depth` entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::{Slot, Tree};
    ///
    /// let tree = Tree::from_values([10, 15, 13]).unwrap();
    ///
    /// assert_eq!(tree.values_at_depth(0), vec![Slot::Occupied(10)]);
    /// assert_eq!(
    ///     tree.values_at_depth(2),
    ///     vec![Slot::Vacant, Slot::Vacant, Slot::Occupied(13), Slot::Vacant]
    /// );
    /// ```
    pub fn values_at_depth(&self, depth: usize) -> Vec<Slot> {
        let mut slots = Vec::with_capacity(1 << depth.min(16));
        level::collect(Some(&self.root), 0, depth, &mut slots);
        slots
    }

    /// Every level of the tree as produced by
    /// [`values_at_depth`][Tree::values_at_depth], from the root level down
    /// to the deepest. There are [`depth`][Tree::depth] rows.
    pub fn level_grid(&self) -> Vec<Vec<Slot>> {
        (0..self.depth())
            .map(|depth| self.values_at_depth(depth))
            .collect()
    }

    /// The tree drawn as centered rows of text, one row per level. Same as
    /// `to_string()`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// An independent deep copy of this tree. Same as `clone()`.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Structural equality with `other`. Same as `==`.
    pub fn is_equal(&self, other: &Self) -> bool {
        self == other
    }

    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.root)
    }
}

impl Extend<i64> for Tree {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, values: I) {
        for value in values {
            self.insert(value);
        }
    }
}

/// Parses integers separated by commas and/or whitespace. The first one is
/// the root.
///
/// ```
/// use int_bst::Tree;
///
/// let tree: Tree = "10, 5 15".parse().unwrap();
/// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![5, 10, 15]);
/// ```
impl FromStr for Tree {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse().map_err(|source| TreeError::InvalidValue {
                    token: token.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<i64>, _>>()?;

        Self::from_values(values)
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = i64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`Tree`]'s values. Created by [`Tree::iter`].
pub struct Iter<'a> {
    // Nodes whose left subtree has been visited but which haven't been yielded.
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn new(root: &'a Node) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(Some(root));
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.value)
    }
}
