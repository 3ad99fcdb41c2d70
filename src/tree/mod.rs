//! Wrapper module containing the tree itself

use crate::range::{self, RangeBounds, StartBound};
use crate::Error;
use rand::Rng;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Range;

mod build;
mod iter;
mod merge;
mod node;
mod split;
#[cfg(test)]
mod tests;

pub use iter::Iter;

use node::{destruct, size, Link};
#[cfg(any(test, feature = "fuzz"))]
use node::Node;

/// *Raison d'être of the crate*: a sequence that can move any range to its front in `O(log n)`
///
/// Conceptually, a `PositionalTree<T>` is just a `Vec<T>` with one extra operation,
/// [`move_range_to_front`], that takes the elements at some contiguous range of positions and
/// moves them -- in order -- to the start of the sequence. Everything that was before them ends up
/// right after them, and everything that was after them stays where it was.
///
/// With a `Vec`, that costs `O(n)`. Here, it's `O(log n)` expected: the tree is an implicit-key
/// treap, so positions are recovered from subtree sizes and the whole operation is two
/// [`split`]s and two [`merge`]s, each touching only a single root-to-leaf path.
///
/// The size of the sequence is fixed once it's been built. Trees can be cut apart and glued back
/// together, but there's no way to insert or remove individual elements.
///
/// ## Examples
///
/// ```
/// use hyperion::PositionalTree;
///
/// let mut tree = PositionalTree::build([1, 2, 3, 4, 5]);
/// tree.move_range_to_front(2, 4).unwrap();
/// assert_eq!(tree.to_sequence(), [2, 3, 4, 1, 5]);
///
/// // Ranges that don't fit the sequence are rejected, and leave the tree as it was:
/// assert!(tree.move_range_to_front(4, 6).is_err());
/// assert_eq!(tree.to_string(), "2 3 4 1 5");
/// ```
///
/// ## Randomness
///
/// Every node gets a random priority when the tree is built, and the tree's shape (though never
/// its contents) depends on those priorities. [`build`] uses the thread-local RNG; to get a
/// reproducible shape, use [`build_with_rng`] with a seeded RNG instead.
///
/// [`move_range_to_front`]: Self::move_range_to_front
/// [`split`]: Self::split
/// [`merge`]: Self::merge
/// [`build`]: Self::build
/// [`build_with_rng`]: Self::build_with_rng
pub struct PositionalTree<T> {
    root: Link<T>,
}

impl<T> Drop for PositionalTree<T> {
    fn drop(&mut self) {
        destruct(self.root.take())
    }
}

impl<T> PositionalTree<T> {
    /// Creates a new, empty `PositionalTree`
    pub const fn new_empty() -> Self {
        PositionalTree { root: None }
    }

    /// Builds a tree containing `values`, in order
    ///
    /// Node priorities are drawn from [`rand::thread_rng`]. This takes `O(n)` time.
    pub fn build<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::build_with_rng(values, &mut rand::thread_rng())
    }

    /// Builds a tree containing `values`, in order, drawing node priorities from `rng`
    ///
    /// This takes `O(n)` time.
    ///
    /// ```
    /// use hyperion::PositionalTree;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let tree = PositionalTree::build_with_rng('a'..='e', &mut rng);
    /// assert_eq!(tree.to_sequence(), ['a', 'b', 'c', 'd', 'e']);
    /// ```
    pub fn build_with_rng<I, R>(values: I, rng: &mut R) -> Self
    where
        I: IntoIterator<Item = T>,
        R: Rng,
    {
        PositionalTree {
            root: build::build(values, rng),
        }
    }

    /// Returns the number of elements in the tree
    pub fn len(&self) -> usize {
        size(&self.root)
    }

    /// Returns `true` if the tree contains no elements
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns a reference to the element at the zero-indexed `position`, or `None` if it's out of
    /// bounds
    pub fn get(&self, position: usize) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        let mut position = position;

        loop {
            let rank = node.rank();
            if position < rank {
                node = node.left.as_deref()?;
            } else if position == rank {
                return Some(&node.value);
            } else {
                position -= rank + 1;
                node = node.right.as_deref()?;
            }
        }
    }

    /// Returns an iterator over the elements of the tree, in order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root)
    }

    /// Returns the current sequence as a `Vec`
    ///
    /// This is a plain in-order traversal, and doesn't modify the tree.
    pub fn to_sequence(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Splits the tree into the first `position` elements and everything after them
    ///
    /// The tree is consumed; all of its nodes are moved into the two results. This takes
    /// `O(log n)` expected time.
    ///
    /// ## Panics
    ///
    /// This method panics if `position` is greater than [`self.len()`](Self::len). For a version
    /// that doesn't panic, see [`split_off`](Self::split_off).
    #[track_caller]
    pub fn split(mut self, position: usize) -> (Self, Self) {
        let len = self.len();
        if position > len {
            panic!("split position {position} out of bounds for length {len}");
        }

        let (lhs, rhs) = split::split(self.root.take(), position);
        (PositionalTree { root: lhs }, PositionalTree { root: rhs })
    }

    /// Splits off everything from the zero-indexed `position` onwards, returning it as a new tree
    ///
    /// On success, `self` is left holding the first `position` elements. If `position` is greater
    /// than [`self.len()`](Self::len), this returns [`Error::EmptyTreeUnderflow`] and leaves `self`
    /// untouched.
    pub fn split_off(&mut self, position: usize) -> Result<Self, Error> {
        let len = self.len();
        if position > len {
            return Err(Error::EmptyTreeUnderflow { position, len });
        }

        let (lhs, rhs) = split::split(self.root.take(), position);
        self.root = lhs;
        Ok(PositionalTree { root: rhs })
    }

    /// Joins two trees into one, with all of `lhs` before all of `rhs`
    ///
    /// Both trees are consumed. This takes `O(log(n + m))` expected time.
    pub fn merge(mut lhs: Self, mut rhs: Self) -> Self {
        PositionalTree {
            root: merge::merge(lhs.root.take(), rhs.root.take()),
        }
    }

    /// Moves all of `other` onto the end of `self`
    ///
    /// This is the in-place version of [`merge`](Self::merge), and the inverse of
    /// [`split_off`](Self::split_off).
    pub fn append(&mut self, mut other: Self) {
        self.root = merge::merge(self.root.take(), other.root.take());
    }

    /// Moves the elements at the 1-indexed, inclusive positions `left..=right` to the front of the
    /// sequence
    ///
    /// The moved elements keep their relative order, and so does everything else: the result is
    /// `S[left..=right] ++ S[1..left] ++ S[right+1..]`. This takes `O(log n)` expected time.
    ///
    /// ## Errors
    ///
    /// * [`Error::EmptyTreeUnderflow`] if the tree is empty
    /// * [`Error::InvalidRange`] unless `1 <= left <= right <= self.len()`
    ///
    /// The bounds are never clamped, and on error the tree is left unmodified.
    ///
    /// ```
    /// use hyperion::{Error, PositionalTree};
    ///
    /// let mut tree = PositionalTree::build([1, 2, 3]);
    /// tree.move_range_to_front(3, 3).unwrap();
    /// assert_eq!(tree.to_sequence(), [3, 1, 2]);
    ///
    /// assert_eq!(
    ///     tree.move_range_to_front(2, 1),
    ///     Err(Error::InvalidRange { left: 2, right: 1, len: 3 }),
    /// );
    /// assert_eq!(tree.to_sequence(), [3, 1, 2]);
    /// ```
    pub fn move_range_to_front(&mut self, left: usize, right: usize) -> Result<(), Error> {
        let len = self.len();
        if len == 0 {
            return Err(Error::EmptyTreeUnderflow {
                position: left,
                len,
            });
        }

        if left < 1 || left > right || right > len {
            return Err(Error::InvalidRange { left, right, len });
        }

        self.rotate_to_front(left - 1..right);
        Ok(())
    }

    /// Moves the elements in the zero-indexed `range` to the front of the sequence
    ///
    /// This is the same operation as [`move_range_to_front`], but accepts any of the standard
    /// range types (`2..5`, `..=3`, `4..`, etc). Empty ranges within the sequence are allowed, and
    /// do nothing.
    ///
    /// ## Errors
    ///
    /// * [`Error::EmptyTreeUnderflow`] if the tree is empty
    /// * [`Error::InvalidRange`] if the range starts after it ends, or extends past the end of
    ///   the sequence
    ///
    /// ```
    /// use hyperion::PositionalTree;
    ///
    /// let mut tree = PositionalTree::build(0..6);
    /// tree.move_to_front(4..).unwrap();
    /// assert_eq!(tree.to_sequence(), [4, 5, 0, 1, 2, 3]);
    /// ```
    ///
    /// [`move_range_to_front`]: Self::move_range_to_front
    pub fn move_to_front<R>(&mut self, range: R) -> Result<(), Error>
    where
        R: RangeBounds<usize>,
    {
        if self.is_empty() {
            let position = match range.start_bound() {
                StartBound::Included(&s) => s,
                StartBound::Unbounded => 0,
            };
            return Err(Error::EmptyTreeUnderflow { position, len: 0 });
        }

        let range = range::resolve(&range, self.len())?;
        self.rotate_to_front(range);
        Ok(())
    }

    /// (*Internal*) Moves an already-validated range to the front
    fn rotate_to_front(&mut self, range: Range<usize>) {
        debug_println!("rotate_to_front: {range:?} of {}", self.len());

        // Nothing to do if the range is already at the front. Skipping the splits here also keeps
        // the tree's shape as-is.
        if range.start == 0 || range.is_empty() {
            return;
        }

        let (before, rest) = split::split(self.root.take(), range.start);
        let (middle, after) = split::split(rest, range.len());
        self.root = merge::merge(merge::merge(middle, before), after);
    }
}

#[cfg(any(test, feature = "fuzz"))]
#[derive(Debug, Copy, Clone)]
enum Side {
    Left,
    Right,
}

#[cfg(any(test, feature = "fuzz"))]
impl<T> PositionalTree<T> {
    /// Checks the size and heap invariants at every node, panicking if either is broken
    pub fn validate(&self) {
        if let Some(root) = self.root.as_deref() {
            Self::validate_node(root, &mut Vec::new());
        }
    }

    fn validate_node(node: &Node<T>, path: &mut Vec<Side>) {
        valid_assert_eq!(path: node.size, 1 + size(&node.left) + size(&node.right));

        if let Some(left) = node.left.as_deref() {
            valid_assert!(path: left.priority <= node.priority);
            path.push(Side::Left);
            Self::validate_node(left, path);
            path.pop();
        }

        if let Some(right) = node.right.as_deref() {
            valid_assert!(path: right.priority <= node.priority);
            path.push(Side::Right);
            Self::validate_node(right, path);
            path.pop();
        }
    }
}

impl<T> Default for PositionalTree<T> {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl<T: Clone> Clone for PositionalTree<T> {
    fn clone(&self) -> Self {
        PositionalTree {
            root: self.root.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for PositionalTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for PositionalTree<T> {}

impl<T> FromIterator<T> for PositionalTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<'t, T> IntoIterator for &'t PositionalTree<T> {
    type Item = &'t T;
    type IntoIter = Iter<'t, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Debug> Debug for PositionalTree<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Writes the elements in order, separated by single spaces
impl<T: Display> Display for PositionalTree<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            Display::fmt(value, f)?;
        }
        Ok(())
    }
}
