//! Positional splitting of a subtree

use super::node::{size, Link};

/// Splits `link` into the first `position` elements and everything after
///
/// Only the nodes along the path to the cut are touched; every subtree hanging off that path is
/// moved into one of the outputs whole.
///
/// `position` must be at most `size(&link)`. Callers check this; here it's only asserted in debug
/// builds.
pub(super) fn split<T>(link: Link<T>, position: usize) -> (Link<T>, Link<T>) {
    debug_assert!(position <= size(&link));

    let mut node = match link {
        None => return (None, None),
        Some(n) => n,
    };

    let rank = node.rank();
    if position <= rank {
        // The cut is inside the left subtree. Everything from `node` onwards goes right.
        let (lhs, rhs) = split(node.left.take(), position);
        node.left = rhs;
        node.update();
        (lhs, Some(node))
    } else {
        // `node` and its left subtree go left; the cut is somewhere in the right subtree.
        let (lhs, rhs) = split(node.right.take(), position - rank - 1);
        node.right = lhs;
        node.update();
        (Some(node), rhs)
    }
}
