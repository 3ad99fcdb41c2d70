//! The [`Node`] type and the [`Link`]s between them

/// An owned, possibly-empty subtree
///
/// Every subtree has exactly one owner. Structural operations take `Link`s by value and return
/// new ones; nothing is ever shared between two live trees.
pub(super) type Link<T> = Option<Box<Node<T>>>;

/// A single element of the sequence, along with the bookkeeping to place it
///
/// A node's position in the sequence isn't stored anywhere. It's recovered from the `size` fields
/// on the way down from the root.
#[derive(Debug, Clone)]
pub(super) struct Node<T> {
    pub(super) value: T,
    /// Heap priority, only used by [`merge`](super::merge::merge) and [`build`]
    ///
    /// [`build`]: super::build::build
    pub(super) priority: u64,
    /// Number of nodes in the subtree rooted here, including this one
    pub(super) size: usize,
    pub(super) left: Link<T>,
    pub(super) right: Link<T>,
}

impl<T> Node<T> {
    /// Creates a new leaf node
    pub(super) fn new(value: T, priority: u64) -> Box<Self> {
        Box::new(Node {
            value,
            priority,
            size: 1,
            left: None,
            right: None,
        })
    }

    /// Recomputes `size` from the children
    ///
    /// Must be called after any change to `left` or `right`, once the children themselves are up
    /// to date.
    pub(super) fn update(&mut self) {
        self.size = 1 + size(&self.left) + size(&self.right);
    }

    /// The number of elements before this one, within this subtree
    pub(super) fn rank(&self) -> usize {
        size(&self.left)
    }
}

/// Returns the number of nodes in the subtree, or zero if there isn't one
pub(super) fn size<T>(link: &Link<T>) -> usize {
    link.as_ref().map(|n| n.size).unwrap_or(0)
}

/// Releases every node in the subtree without recursing
///
/// The default recursive drop of `Box<Node<T>>` is bounded by the depth of the tree, which is only
/// *expected* to be logarithmic. This keeps destruction safe for any shape.
pub(super) fn destruct<T>(link: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = link.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
        // `node` drops here, with no children left to recurse into
    }
}
