//! The vertices of a [`Tree`][crate::tree::Tree].
//!
//! A [`Node`] owns its payload and, through [`Link`]s, its children. Nothing
//! else points at a child: dropping or replacing a link drops the whole
//! subtree behind it.
//!
//! # Examples
//!
//! ```
//! use bst::node::Node;
//!
//! let mut node = Node::new(6);
//! node.set_left(Some(Box::new(Node::new(4))));
//!
//! assert_eq!(node.payload(), &6);
//! assert_eq!(node.left().map(Node::payload), Some(&4));
//! assert!(node.right().is_none());
//! ```

use std::mem;

/// An owned, possibly absent, child subtree.
pub type Link<T> = Option<Box<Node<T>>>;

/// Which child of a [`Node`] to follow.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// A single vertex of the tree: a payload and two optional children.
///
/// `Clone` is a deep clone. For a copy that shares its children with the
/// original see [`Node::shallow_copy`]. `Clone` and `PartialEq` walk the
/// subtree with an explicit stack; the derived `Debug` recurses once per
/// level.
#[derive(Debug)]
pub struct Node<T> {
    pub(crate) payload: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Creates a node with no children.
    pub fn new(payload: T) -> Self {
        Self {
            payload,
            left: None,
            right: None,
        }
    }

    /// Creates a boxed node with no children, ready to be stored in a [`Link`].
    pub(crate) fn new_boxed(payload: T) -> Box<Self> {
        Box::new(Self::new(payload))
    }

    /// The value stored in this node.
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Replaces the stored value, returning the old one.
    ///
    /// Nothing checks that the new value still respects the ordering of the
    /// surrounding tree.
    pub fn set_payload(&mut self, payload: T) -> T {
        mem::replace(&mut self.payload, payload)
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Puts `left` in the left slot and hands back whatever subtree was there
    /// before. Dropping the returned link discards that subtree.
    pub fn set_left(&mut self, left: Link<T>) -> Link<T> {
        mem::replace(&mut self.left, left)
    }

    /// Puts `right` in the right slot and hands back whatever subtree was
    /// there before. Dropping the returned link discards that subtree.
    pub fn set_right(&mut self, right: Link<T>) -> Link<T> {
        mem::replace(&mut self.right, right)
    }

    /// Detaches and returns the left subtree.
    pub fn take_left(&mut self) -> Link<T> {
        self.left.take()
    }

    /// Detaches and returns the right subtree.
    pub fn take_right(&mut self) -> Link<T> {
        self.right.take()
    }

    /// `true` when this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Makes a new node-like value with a copy of this payload and the *same*
    /// children as `self`.
    ///
    /// The children are borrowed, not cloned, so the copy and the original
    /// alias one another's subtrees. The borrow keeps `self` frozen for as
    /// long as the copy lives. Only the copy's payload is its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::node::Node;
    ///
    /// let mut eight = Node::new(8);
    /// eight.set_left(Some(Box::new(Node::new(7))));
    ///
    /// let mut copy = eight.shallow_copy();
    /// copy.set_payload(10);
    ///
    /// assert_eq!(copy.payload(), &10);
    /// assert_eq!(eight.payload(), &8);
    /// assert!(std::ptr::eq(copy.left().unwrap(), eight.left().unwrap()));
    /// ```
    pub fn shallow_copy(&self) -> ShallowNode<'_, T>
    where
        T: Clone,
    {
        ShallowNode {
            payload: self.payload.clone(),
            left: self.left(),
            right: self.right(),
        }
    }

    /// Splits the node into its payload and the child slot on `side` so both
    /// can be borrowed mutably at once.
    pub(crate) fn payload_and_link_mut(&mut self, side: Side) -> (&mut T, &mut Link<T>) {
        match side {
            Side::Left => (&mut self.payload, &mut self.left),
            Side::Right => (&mut self.payload, &mut self.right),
        }
    }

    /// The child a value being deleted sinks into: the left one when present,
    /// otherwise the right one. `None` for a leaf.
    pub(crate) fn sink_side(&self) -> Option<Side> {
        if self.left.is_some() {
            Some(Side::Left)
        } else if self.right.is_some() {
            Some(Side::Right)
        } else {
            None
        }
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self {
            payload: self.payload.clone(),
            left: clone_link(&self.left),
            right: clone_link(&self.right),
        }
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.payload != b.payload {
                return false;
            }
            for pair in [(a.left(), b.left()), (a.right(), b.right())] {
                match pair {
                    (Some(a), Some(b)) => stack.push((a, b)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }

        true
    }
}

impl<T: Eq> Eq for Node<T> {}

/// Deep clones the subtree behind `link` without recursing.
///
/// Nodes are rebuilt in post-order, so by the time a node is rebuilt its
/// children sit on top of `built`, right above left.
pub(crate) fn clone_link<T: Clone>(link: &Link<T>) -> Link<T> {
    let mut built: Vec<Box<Node<T>>> = Vec::new();
    let mut stack: Vec<(&Node<T>, bool)> =
        link.as_deref().map(|n| (n, false)).into_iter().collect();
    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            let right = if node.right.is_some() { built.pop() } else { None };
            let left = if node.left.is_some() { built.pop() } else { None };
            built.push(Box::new(Node {
                payload: node.payload.clone(),
                left,
                right,
            }));
        } else {
            stack.push((node, true));
            stack.extend(node.right().map(|n| (n, false)));
            stack.extend(node.left().map(|n| (n, false)));
        }
    }

    built.pop()
}

/// A node that shares its children with another [`Node`].
///
/// Produced by [`Node::shallow_copy`]. It owns its payload and borrows the
/// children of the node it was copied from.
#[derive(Debug)]
pub struct ShallowNode<'a, T> {
    payload: T,
    left: Option<&'a Node<T>>,
    right: Option<&'a Node<T>>,
}

impl<'a, T> ShallowNode<'a, T> {
    /// The copied value.
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Replaces the copied value, leaving the source node untouched.
    pub fn set_payload(&mut self, payload: T) -> T {
        mem::replace(&mut self.payload, payload)
    }

    /// The left child shared with the source node.
    pub fn left(&self) -> Option<&'a Node<T>> {
        self.left
    }

    /// The right child shared with the source node.
    pub fn right(&self) -> Option<&'a Node<T>> {
        self.right
    }

    /// Turns the view into an independent [`Node`] by deep-cloning the shared
    /// children.
    pub fn to_owned_node(&self) -> Node<T>
    where
        T: Clone,
    {
        Node {
            payload: self.payload.clone(),
            left: self.left.map(|n| Box::new(n.clone())),
            right: self.right.map(|n| Box::new(n.clone())),
        }
    }
}
