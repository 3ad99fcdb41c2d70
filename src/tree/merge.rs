//! Order-preserving concatenation of two subtrees

use super::node::Link;

/// Joins `lhs` and `rhs` into a single subtree, with every element of `lhs` before every element
/// of `rhs`
///
/// This is the only place priorities are compared: the root with the higher priority stays on top
/// (ties go to `lhs`), and the other subtree is merged into its inner child. Because of that, the
/// result is a max-heap on priority whenever both inputs are.
pub(super) fn merge<T>(lhs: Link<T>, rhs: Link<T>) -> Link<T> {
    match (lhs, rhs) {
        (None, rhs) => rhs,
        (lhs, None) => lhs,
        (Some(mut l), Some(mut r)) => {
            if l.priority >= r.priority {
                l.right = merge(l.right.take(), Some(r));
                l.update();
                Some(l)
            } else {
                r.left = merge(Some(l), r.left.take());
                r.update();
                Some(r)
            }
        }
    }
}
