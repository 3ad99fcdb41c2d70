//! Wrapper module for the [`PositionalTree`] iterator type -- [`Iter`]
//!
//! [`PositionalTree`]: crate::PositionalTree

use super::node::{Link, Node};
use std::iter::FusedIterator;

/// An iterator over the elements of a [`PositionalTree`], in sequence order
///
/// This iterator is double-ended, and never recurses: each end keeps an explicit stack of the
/// nodes it still has to visit, so memory use is bounded by the depth of the tree.
///
/// This type is produced by the [`iter`] method on [`PositionalTree`].
///
/// [`PositionalTree`]: crate::PositionalTree
/// [`iter`]: crate::PositionalTree::iter
pub struct Iter<'t, T> {
    /// Nodes whose value and right subtree are still to be yielded from the front
    fwd: Vec<&'t Node<T>>,
    /// Nodes whose value and left subtree are still to be yielded from the back
    bkwd: Vec<&'t Node<T>>,
    /// Elements not yet yielded from either end
    ///
    /// The two stacks overlap once the ends get close to each other; this is what stops them from
    /// yielding the same element twice.
    remaining: usize,
}

impl<'t, T> Iter<'t, T> {
    pub(super) fn new(root: &'t Link<T>) -> Self {
        let mut this = Iter {
            fwd: Vec::new(),
            bkwd: Vec::new(),
            remaining: super::node::size(root),
        };

        this.push_left_spine(root.as_deref());
        this.push_right_spine(root.as_deref());
        this
    }

    fn push_left_spine(&mut self, mut node: Option<&'t Node<T>>) {
        while let Some(n) = node {
            self.fwd.push(n);
            node = n.left.as_deref();
        }
    }

    fn push_right_spine(&mut self, mut node: Option<&'t Node<T>>) {
        while let Some(n) = node {
            self.bkwd.push(n);
            node = n.right.as_deref();
        }
    }
}

impl<'t, T> Iterator for Iter<'t, T> {
    type Item = &'t T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.fwd.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'t, T> DoubleEndedIterator for Iter<'t, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.bkwd.pop()?;
        self.push_right_spine(node.left.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<'t, T> ExactSizeIterator for Iter<'t, T> {}

impl<'t, T> FusedIterator for Iter<'t, T> {}

impl<'t, T> Clone for Iter<'t, T> {
    fn clone(&self) -> Self {
        Iter {
            fwd: self.fwd.clone(),
            bkwd: self.bkwd.clone(),
            remaining: self.remaining,
        }
    }
}
