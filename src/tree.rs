//! An unbalanced Binary Search Tree of single comparable payloads.
//!
//! The shape of the tree is decided entirely by the order of insertions and
//! deletions; nothing is ever rotated or rebalanced.
//!
//! # Examples
//!
//! ```
//! use bst::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&1));
//!
//! tree.insert(1);
//! assert!(tree.search(&1));
//!
//! // Inserting a value that is already present does nothing.
//! tree.insert(1);
//! assert_eq!(tree.len(), 1);
//!
//! // Deleting a value hands it back.
//! assert_eq!(tree.delete(&1), Some(1));
//! assert!(!tree.search(&1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::trace;

use crate::node::{self, Link, Node};
use crate::traverse::{self, InOrder, LevelOrder, PostOrder, PreOrder};

/// A Binary Search Tree. Every payload in a node's left subtree compares less
/// than the node's payload and every payload in its right subtree compares
/// greater. Inserting a payload equal to one already found in the tree is a
/// no-op.
///
/// Cloning, dropping and walking a `Tree` never recurse, so degenerate chains
/// are safe. `Debug` lists the payloads in pre-order.
pub struct Tree<T> {
    root: Link<T>,
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        Self {
            root: node::clone_link(&self.root),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.pre_order()).finish()
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Dropping the boxes one by one keeps a degenerate chain from
        // recursing once per level.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Wraps an already built subtree. The caller is responsible for `root`
    /// respecting the search tree ordering; nothing here checks it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::node::Node;
    /// use bst::tree::Tree;
    ///
    /// let mut root = Node::new(2);
    /// root.set_left(Some(Box::new(Node::new(1))));
    ///
    /// let tree = Tree::from_root(root);
    /// assert!(tree.search(&1));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn from_root(root: Node<T>) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }

    /// The top node, or `None` for an empty tree. This is the usual start
    /// node for the functions in [`traverse`].
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// `true` when the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        traverse::node_count(self.root())
    }

    /// Number of nodes without children.
    pub fn leaf_count(&self) -> usize {
        traverse::leaf_count(self.root())
    }

    /// Number of edges on the longest path from the root to a leaf. Zero for
    /// both an empty tree and a tree with a single node.
    pub fn height(&self) -> usize {
        traverse::height(self.root())
    }

    /// Payloads in pre-order (node, left, right).
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        traverse::pre_order(self.root())
    }

    /// Payloads in post-order (left, right, node).
    pub fn post_order(&self) -> PostOrder<'_, T> {
        traverse::post_order(self.root())
    }

    /// Payloads in-order (left, node, right). Ascending for a tree built only
    /// by insertions.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::tree::Tree;
    ///
    /// let tree: Tree<_> = [6, 8, 4, 2, 5, 7, 12, 1].into_iter().collect();
    /// let sorted: Vec<_> = tree.in_order().copied().collect();
    /// assert_eq!(sorted, [1, 2, 4, 5, 6, 7, 8, 12]);
    /// ```
    pub fn in_order(&self) -> InOrder<'_, T> {
        traverse::in_order(self.root())
    }

    /// Payloads level by level from the root, left to right within a level.
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        traverse::level_order(self.root())
    }

    /// Returns whether `value` is found by descending from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(12);
    ///
    /// assert!(tree.search(&12));
    /// assert!(!tree.search(&34));
    /// ```
    pub fn search(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.payload) {
                Ordering::Less => node.left(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right(),
            };
        }

        false
    }

    /// Inserts `value` as a new leaf. If an equal payload is already in the
    /// tree nothing changes and `value` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(6);
    /// tree.insert(4);
    /// tree.insert(4);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.root().and_then(|n| n.left()).map(|n| *n.payload()), Some(4));
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        let mut depth = 0usize;
        while let Some(node) = slot {
            slot = match value.cmp(&node.payload) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => {
                    trace!(depth, "insert rejected duplicate");
                    return;
                }
                Ordering::Greater => &mut node.right,
            };
            depth += 1;
        }

        trace!(depth, "insert added leaf");
        *slot = Some(Node::new_boxed(value));
    }

    /// Same contract as [`Tree::insert`], implemented by recursively
    /// rebuilding the links along the search path. Recurses once per level, so
    /// prefer [`Tree::insert`] for trees that may degenerate into long chains.
    pub fn insert_recursive(&mut self, value: T)
    where
        T: Ord,
    {
        let root = self.root.take();
        self.root = Self::relink(root, value);
    }

    fn relink(link: Link<T>, value: T) -> Link<T>
    where
        T: Ord,
    {
        let mut node = match link {
            Some(node) => node,
            None => {
                trace!("insert added leaf");
                return Some(Node::new_boxed(value));
            }
        };

        match value.cmp(&node.payload) {
            Ordering::Less => node.left = Self::relink(node.left.take(), value),
            Ordering::Equal => trace!("insert rejected duplicate"),
            Ordering::Greater => node.right = Self::relink(node.right.take(), value),
        }

        Some(node)
    }

    /// Deletes every node holding `value` and returns the payload of the
    /// first one met in pre-order. Returns `None` and leaves the tree alone
    /// when `value` is not present.
    ///
    /// Rather than splicing in a successor, the value to delete is pushed
    /// down one level at a time: it trades payloads with the left child if
    /// there is one, otherwise with the right child, until it reaches a node
    /// without children. That node is then unlinked.
    ///
    /// Each trade lifts a child's payload one level up without moving the
    /// subtrees around it, so a lifted payload can end up above larger values
    /// on its left. [`Tree::search`] may then no longer find those values,
    /// which is why the node to delete is located by walking the whole tree.
    /// It also lets [`Tree::insert`] add a second node equal to a displaced
    /// one; both go.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::tree::Tree;
    ///
    /// let mut tree: Tree<_> = [6, 8, 4, 2, 5, 7, 12, 1].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(&6), Some(6));
    /// assert_eq!(tree.delete(&6), None);
    ///
    /// // 6 traded places with 4, then 2, then 1 before being unlinked.
    /// let pre_order: Vec<_> = tree.pre_order().copied().collect();
    /// assert_eq!(pre_order, [4, 2, 1, 5, 8, 7, 12]);
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let removed = match Self::find_link_mut(&mut self.root, value) {
            Some(target) => Self::sink_and_unlink(target),
            None => {
                trace!("delete found no match");
                return None;
            }
        };

        while let Some(target) = Self::find_link_mut(&mut self.root, value) {
            trace!("delete removing duplicate");
            Self::sink_and_unlink(target);
        }

        removed
    }

    /// Finds the link holding the first node in pre-order whose payload is
    /// equal to `value`.
    fn find_link_mut<'a>(root: &'a mut Link<T>, value: &T) -> Option<&'a mut Link<T>>
    where
        T: Ord,
    {
        let mut stack = vec![(root, 0usize)];
        while let Some((link, depth)) = stack.pop() {
            if link.as_deref().is_some_and(|n| n.payload == *value) {
                trace!(depth, "delete located value");
                return Some(link);
            }

            if let Some(node) = link {
                let Node { left, right, .. } = &mut **node;
                stack.push((right, depth + 1));
                stack.push((left, depth + 1));
            }
        }

        None
    }

    /// Pushes the payload stored at `link` down to a leaf and unlinks that
    /// leaf, returning the payload.
    fn sink_and_unlink(mut link: &mut Link<T>) -> Option<T> {
        let mut swaps = 0usize;
        while let Some(side) = link.as_deref().and_then(Node::sink_side) {
            if let Some(node) = link {
                let (payload, child) = node.payload_and_link_mut(side);
                if let Some(child_node) = child.as_deref_mut() {
                    mem::swap(payload, &mut child_node.payload);
                }
                link = child;
                swaps += 1;
                trace!(swaps, ?side, "delete sank value");
            }
        }

        trace!(swaps, "delete unlinked leaf");
        link.take().map(|leaf| leaf.payload)
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}


#[cfg(test)]
mod quicktests {
    use super::*;
    use crate::test::quick::Op;

    /// Applies the operations to `tree` and to a plain list of the payloads the
    /// tree should hold, checking every step against the list.
    fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, payloads: &mut Vec<T>) -> bool
    where
        T: Ord + Clone,
    {
        for op in ops {
            match op {
                Op::Insert(x) => {
                    let len = tree.len();
                    let found = tree.search(x);
                    tree.insert(x.clone());
                    if found {
                        if tree.len() != len {
                            return false;
                        }
                    } else {
                        payloads.push(x.clone());
                        if tree.len() != len + 1 || !tree.search(x) {
                            return false;
                        }
                    }
                }
                Op::Remove(x) => {
                    let expected = payloads.iter().find(|p| *p == x).cloned();
                    payloads.retain(|p| p != x);
                    if tree.delete(x) != expected {
                        return false;
                    }
                }
                Op::Iter => {
                    let mut walked: Vec<_> = tree.pre_order().cloned().collect();
                    walked.sort();
                    payloads.sort();
                    if walked != *payloads {
                        return false;
                    }
                }
            }
        }

        tree.len() == payloads.len()
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut payloads = Vec::new();

            do_ops(&ops, &mut tree, &mut payloads)
        }
    }

    quickcheck::quickcheck! {
        fn node_kinds_add_up(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
            let mut tree: Tree<_> = xs.into_iter().collect();
            for x in &deletes {
                tree.delete(x);
            }

            let (mut one_child, mut two_children) = (0, 0);
            for node in traverse::Nodes::new(tree.root()) {
                match (node.left().is_some(), node.right().is_some()) {
                    (true, true) => two_children += 1,
                    (false, false) => {}
                    _ => one_child += 1,
                }
            }

            tree.leaf_count() + one_child + two_children == tree.len()
        }
    }

    quickcheck::quickcheck! {
        fn insert_recursive_builds_same_shape(xs: Vec<i8>) -> bool {
            let iterative: Tree<_> = xs.iter().copied().collect();
            let mut recursive = Tree::new();
            for x in xs {
                recursive.insert_recursive(x);
            }

            iterative.pre_order().eq(recursive.pre_order())
        }
    }
}
