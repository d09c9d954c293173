//! An unbalanced Binary Search Tree (BST) over single comparable payloads.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! has up to two child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)` where `height` is the longest path
//! from the root `Node` to a leaf `Node`. The tree in this crate never
//! rebalances, so its height depends only on the order values were inserted
//! and deleted in: sorted input produces a chain. BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! ## Layout
//!
//! - [`tree`] holds [`Tree`][tree::Tree] with search, insertion and the
//!   swap-based deletion.
//! - [`node`] holds the [`Node`][node::Node] records the tree is made of.
//! - [`traverse`] holds the four walks (pre-, post-, in- and level-order) and
//!   the structural queries, all starting from any node.
//!
//! The library emits [`tracing`] events at `TRACE` level for insertions and
//! deletions and never installs a subscriber itself.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod node;
pub mod traverse;
pub mod tree;
