//! This crate exposes an unbalanced Binary Search Tree (BST) over `i64` keys
//! along with a handful of inspection tools: nearest-value lookup, per-level
//! enumeration and a centered text rendering of the tree's shape.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored values. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores a value and may have child
//! `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! This tree never rebalances, so inserting values in sorted order produces a
//! chain whose height equals its size. Every traversal that could follow such
//! a chain is written against an explicit stack rather than the call stack.
//!
//! # Examples
//!
//! ```
//! use int_bst::{Slot, Tree};
//!
//! let mut tree = Tree::new(10);
//! assert!(tree.insert(15));
//! assert!(tree.insert(13));
//! assert!(!tree.insert(10));
//!
//! assert_eq!(tree.size(), 3);
//! assert_eq!(tree.depth(), 3);
//! assert_eq!(tree.values_at_depth(1), vec![Slot::Vacant, Slot::Occupied(15)]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod level;
mod node;
mod render;
mod tree;


pub use error::TreeError;
pub use level::Slot;
pub use node::Node;
pub use tree::{Iter, Tree};
