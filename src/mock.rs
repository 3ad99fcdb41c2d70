//! Mock implementation with essentially the same API as [`PositionalTree`], but backed by a vector
//!
//! [`PositionalTree`]: crate::PositionalTree

use crate::range::{self, RangeBounds, StartBound};
use crate::Error;

/// A mock, inefficient implementation of the [`PositionalTree`](crate::PositionalTree) interface
///
/// Every operation is done directly on a `Vec`, so there's not much room for it to be wrong. Tests
/// and the fuzzer compare the real tree against this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mock<T> {
    values: Vec<T>,
}

impl<T> Mock<T> {
    pub fn new_empty() -> Self {
        Mock { values: Vec::new() }
    }

    pub fn build(values: impl IntoIterator<Item = T>) -> Self {
        Mock {
            values: values.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&T> {
        self.values.get(position)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    #[track_caller]
    pub fn split(mut self, position: usize) -> (Self, Self) {
        if position > self.values.len() {
            panic!("index out of bounds");
        }

        let rhs = self.values.split_off(position);
        (self, Mock { values: rhs })
    }

    pub fn merge(mut lhs: Self, rhs: Self) -> Self {
        lhs.values.extend(rhs.values);
        lhs
    }

    pub fn move_range_to_front(&mut self, left: usize, right: usize) -> Result<(), Error> {
        let len = self.values.len();
        if len == 0 {
            return Err(Error::EmptyTreeUnderflow {
                position: left,
                len,
            });
        } else if left < 1 || left > right || right > len {
            return Err(Error::InvalidRange { left, right, len });
        }

        self.values[..right].rotate_left(left - 1);
        Ok(())
    }

    pub fn move_to_front<R: RangeBounds<usize>>(&mut self, range: R) -> Result<(), Error> {
        if self.values.is_empty() {
            let position = match range.start_bound() {
                StartBound::Included(&s) => s,
                StartBound::Unbounded => 0,
            };
            return Err(Error::EmptyTreeUnderflow { position, len: 0 });
        }

        let range = range::resolve(&range, self.values.len())?;
        self.values[..range.end].rotate_left(range.start);
        Ok(())
    }
}

impl<T: Clone> Mock<T> {
    pub fn to_sequence(&self) -> Vec<T> {
        self.values.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::Mock;
    use crate::Error;

    #[test]
    fn rotate_matches_definition() {
        let mut mock = Mock::build(1..=5);
        mock.move_range_to_front(2, 4).unwrap();
        assert_eq!(mock.as_slice(), [2, 3, 4, 1, 5]);

        mock.move_range_to_front(1, 2).unwrap();
        assert_eq!(mock.as_slice(), [2, 3, 4, 1, 5]);

        mock.move_range_to_front(5, 5).unwrap();
        assert_eq!(mock.as_slice(), [5, 2, 3, 4, 1]);
    }

    #[test]
    fn empty_range_is_noop() {
        let mut mock = Mock::build(0..4);
        mock.move_to_front(3..3).unwrap();
        assert_eq!(mock.as_slice(), [0, 1, 2, 3]);
        mock.move_to_front(4..).unwrap();
        assert_eq!(mock.as_slice(), [0, 1, 2, 3]);
    }

    #[test]
    fn errors_leave_values_alone() {
        let mut mock = Mock::build(1..=3);
        assert_eq!(
            mock.move_range_to_front(0, 2),
            Err(Error::InvalidRange { left: 0, right: 2, len: 3 })
        );
        assert_eq!(
            mock.move_range_to_front(2, 4),
            Err(Error::InvalidRange { left: 2, right: 4, len: 3 })
        );
        assert_eq!(mock.as_slice(), [1, 2, 3]);

        let mut empty: Mock<u8> = Mock::new_empty();
        assert_eq!(
            empty.move_range_to_front(1, 1),
            Err(Error::EmptyTreeUnderflow { position: 1, len: 0 })
        );
    }

    #[test]
    fn split_then_merge() {
        let (lhs, rhs) = Mock::build(0..5).split(2);
        assert_eq!(lhs.as_slice(), [0, 1]);
        assert_eq!(rhs.as_slice(), [2, 3, 4]);
        assert_eq!(Mock::merge(rhs, lhs).as_slice(), [2, 3, 4, 0, 1]);

        assert!(std::panic::catch_unwind(|| Mock::build(0..5).split(6)).is_err());
    }
}
