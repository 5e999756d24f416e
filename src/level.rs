//! Level-by-level enumeration of a tree's logical positions.
//!
//! Level `d` of a tree has exactly `2^d` positions whether or not nodes occupy
//! them. Positions are listed left to right, so index `i` at level `d` has its
//! children at indices `2i` and `2i + 1` at level `d + 1`.

use std::fmt;

use crate::node::Node;

/// One position of a tree level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// A node with this value sits at the position.
    Occupied(i64),
    /// No node sits at the position.
    Vacant,
}

impl Slot {
    /// The value at this position, if a node is there.
    pub fn value(self) -> Option<i64> {
        match self {
            Self::Occupied(value) => Some(value),
            Self::Vacant => None,
        }
    }

    /// Whether a node is at this position.
    pub fn is_occupied(self) -> bool {
        matches!(self, Self::Occupied(_))
    }
}

impl From<Option<i64>> for Slot {
    fn from(value: Option<i64>) -> Self {
        value.map_or(Self::Vacant, Self::Occupied)
    }
}

/// Renders the value, or `-` for a vacant slot. Width and alignment flags are
/// honored for both.
impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Occupied(value) => fmt::Display::fmt(value, f),
            Self::Vacant => f.pad("-"),
        }
    }
}

/// Pushes every position `target - level` levels below `node` onto `out`.
///
/// Absent nodes still recurse into both of their (absent) children so that
/// the number of slots emitted is always `2^(target - level)`. Recursion is
/// bounded by `target`, not by the height of the tree.
pub(crate) fn collect(node: Option<&Node>, level: usize, target: usize, out: &mut Vec<Slot>) {
    if level == target {
        out.push(node.map(Node::value).into());
        return;
    }

    collect(node.and_then(Node::left), level + 1, target, out);
    collect(node.and_then(Node::right), level + 1, target, out);
}
