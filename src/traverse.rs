//! Walks and structural queries over a subtree.
//!
//! Every function here takes the node to start from (`None` for an empty
//! subtree) so the same walks work on a whole [`Tree`][crate::tree::Tree] or
//! on any node inside it. The iterators are lazy and keep their own explicit
//! stack or queue, so a long degenerate chain (e.g. from inserting sorted
//! input) never grows the call stack.
//!
//! # Examples
//!
//! ```
//! use bst::traverse;
//! use bst::tree::Tree;
//!
//! let mut tree = Tree::new();
//! for x in [6, 8, 4, 2, 5, 7, 12, 1] {
//!     tree.insert(x);
//! }
//!
//! let in_order: Vec<_> = traverse::in_order(tree.root()).copied().collect();
//! assert_eq!(in_order, [1, 2, 4, 5, 6, 7, 8, 12]);
//!
//! // Any node can be the start of a walk.
//! let left = tree.root().and_then(|root| root.left());
//! let pre_order: Vec<_> = traverse::pre_order(left).copied().collect();
//! assert_eq!(pre_order, [4, 2, 1, 5]);
//! assert_eq!(traverse::height(left), 2);
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::Node;

/// Pre-order walk (node, left, right) starting at `start`.
pub fn pre_order<T>(start: Option<&Node<T>>) -> PreOrder<'_, T> {
    PreOrder(Nodes::new(start))
}

/// Post-order walk (left, right, node) starting at `start`.
pub fn post_order<T>(start: Option<&Node<T>>) -> PostOrder<'_, T> {
    PostOrder {
        stack: start.into_iter().map(|n| (n, false)).collect(),
    }
}

/// In-order walk (left, node, right) starting at `start`. On a well-formed
/// search tree this yields payloads in ascending order.
pub fn in_order<T>(start: Option<&Node<T>>) -> InOrder<'_, T> {
    let mut iter = InOrder { stack: Vec::new() };
    iter.push_left_spine(start);
    iter
}

/// Breadth-first walk starting at `start`: depth 0 first, then each deeper
/// level from left to right. Missing children are skipped without ending the
/// walk.
pub fn level_order<T>(start: Option<&Node<T>>) -> LevelOrder<'_, T> {
    LevelOrder {
        queue: start.into_iter().map(|n| (0, n)).collect(),
    }
}

/// Number of edges on the longest downward path from `start`. Both an empty
/// subtree and a lone node have height 0.
pub fn height<T>(start: Option<&Node<T>>) -> usize {
    // The last node a level-order walk reaches sits on the deepest level.
    level_order(start)
        .with_depth()
        .last()
        .map_or(0, |(depth, _)| depth)
}

/// Number of nodes in the subtree rooted at `start`.
pub fn node_count<T>(start: Option<&Node<T>>) -> usize {
    Nodes::new(start).count()
}

/// Number of nodes without children in the subtree rooted at `start`.
pub fn leaf_count<T>(start: Option<&Node<T>>) -> usize {
    Nodes::new(start).filter(|n| n.is_leaf()).count()
}

/// Pre-order walk over the nodes themselves. Backs [`PreOrder`] and the
/// counting queries.
pub(crate) struct Nodes<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Nodes<'a, T> {
    pub(crate) fn new(start: Option<&'a Node<T>>) -> Self {
        Self {
            stack: start.into_iter().collect(),
        }
    }
}

impl<'a, T> Clone for Nodes<'a, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree is popped first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node)
    }
}

/// Iterator returned by [`pre_order`].
pub struct PreOrder<'a, T>(Nodes<'a, T>);

impl<'a, T> Clone for PreOrder<'a, T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Node::payload)
    }
}

impl<'a, T> FusedIterator for PreOrder<'a, T> {}

/// Iterator returned by [`post_order`].
pub struct PostOrder<'a, T> {
    /// Each entry records whether the node's children were already pushed.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> Clone for PostOrder<'a, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node.payload());
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
    }
}

impl<'a, T> FusedIterator for PostOrder<'a, T> {}

/// Iterator returned by [`in_order`].
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Clone for InOrder<'a, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.payload())
    }
}

impl<'a, T> FusedIterator for InOrder<'a, T> {}

/// Iterator returned by [`level_order`].
pub struct LevelOrder<'a, T> {
    queue: VecDeque<(usize, &'a Node<T>)>,
}

impl<'a, T> LevelOrder<'a, T> {
    /// Pairs every payload with its depth below the start node.
    ///
    /// ```
    /// use bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in [2, 1, 3] {
    ///     tree.insert(x);
    /// }
    ///
    /// let levels: Vec<_> = tree.level_order().with_depth().collect();
    /// assert_eq!(levels, [(0, &2), (1, &1), (1, &3)]);
    /// ```
    pub fn with_depth(self) -> WithDepth<'a, T> {
        WithDepth(self)
    }

    fn next_node(&mut self) -> Option<(usize, &'a Node<T>)> {
        let (depth, node) = self.queue.pop_front()?;
        self.queue.extend(node.left().map(|n| (depth + 1, n)));
        self.queue.extend(node.right().map(|n| (depth + 1, n)));
        Some((depth, node))
    }
}

impl<'a, T> Clone for LevelOrder<'a, T> {
    fn clone(&self) -> Self {
        Self {
            queue: self.queue.clone(),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_node().map(|(_, node)| node.payload())
    }
}

impl<'a, T> FusedIterator for LevelOrder<'a, T> {}

/// Iterator returned by [`LevelOrder::with_depth`].
pub struct WithDepth<'a, T>(LevelOrder<'a, T>);

impl<'a, T> Iterator for WithDepth<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.0
            .next_node()
            .map(|(depth, node)| (depth, node.payload()))
    }
}

impl<'a, T> FusedIterator for WithDepth<'a, T> {}
