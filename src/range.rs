//! Types to go with a custom [`std::ops::RangeBounds`] trait
//!
//! [`PositionalTree::move_to_front`] accepts any of the standard library's range types, but a
//! range with an exclusive *start* bound would need an increment before it could be used as a
//! split position. So this module redefines [`RangeBounds`] without that possibility, and provides
//! implementations for all the range types in [`std::ops`] (none of which have exclusive start
//! bounds).
//!
//! It also contains distinct [`StartBound`] and [`EndBound`] types adapted from the standard
//! library's [`Bound`](std::ops::Bound).
//!
//! [`PositionalTree::move_to_front`]: crate::PositionalTree::move_to_front

use crate::Error;
#[cfg(feature = "fuzz")]
use arbitrary::Arbitrary;
use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

/// The starting bound of a range
///
/// Refer to the [module documentation](self) for more information.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "fuzz", derive(Arbitrary))]
pub enum StartBound<T> {
    Included(T),
    Unbounded,
}

/// The ending bound of a range
///
/// Refer to the [module documentation](self) for more information.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "fuzz", derive(Arbitrary))]
pub enum EndBound<T> {
    Included(T),
    Excluded(T),
    Unbounded,
}

/// A `std::ops::RangeBounds`-like trait that disallows exclusive start bounds
///
/// Aside from disallowing exclusive starting bounds, this trait is essentially the same as the
/// standard library's version.
pub trait RangeBounds<T> {
    /// Returns the starting bound of the range
    fn start_bound(&self) -> StartBound<&T>;
    /// Returns the ending bound of the range
    fn end_bound(&self) -> EndBound<&T>;
}

/// Resolves `range` into a concrete, zero-indexed `start..end` within a sequence of length `len`
///
/// Fails with [`Error::InvalidRange`] if the range starts after it ends, or if it extends past
/// `len`. The error carries the equivalent 1-indexed inclusive bounds. Empty ranges that lie within the sequence are returned as-is.
pub(crate) fn resolve<R>(range: &R, len: usize) -> Result<Range<usize>, Error>
where
    R: ?Sized + RangeBounds<usize>,
{
    let start = match range.start_bound() {
        StartBound::Included(&s) => s,
        StartBound::Unbounded => 0,
    };

    let end = match range.end_bound() {
        EndBound::Included(&e) => match e.checked_add(1) {
            Some(e) => e,
            None => {
                return Err(Error::InvalidRange {
                    left: start.saturating_add(1),
                    right: usize::MAX,
                    len,
                })
            }
        },
        EndBound::Excluded(&e) => e,
        EndBound::Unbounded => len,
    };

    if start > end || end > len {
        return Err(Error::InvalidRange {
            left: start.saturating_add(1),
            right: end,
            len,
        });
    }

    Ok(start..end)
}

impl<T> StartBound<T> {
    fn as_ref(&self) -> StartBound<&T> {
        match self {
            StartBound::Included(v) => StartBound::Included(v),
            StartBound::Unbounded => StartBound::Unbounded,
        }
    }
}

impl<T> EndBound<T> {
    fn as_ref(&self) -> EndBound<&T> {
        match self {
            EndBound::Included(v) => EndBound::Included(v),
            EndBound::Excluded(v) => EndBound::Excluded(v),
            EndBound::Unbounded => EndBound::Unbounded,
        }
    }
}

// Blanket implementation for references
impl<T, R> RangeBounds<T> for &R
where
    R: RangeBounds<T>,
{
    fn start_bound(&self) -> StartBound<&T> {
        (*self).start_bound()
    }
    fn end_bound(&self) -> EndBound<&T> {
        (*self).end_bound()
    }
}

impl<T> RangeBounds<T> for (StartBound<T>, EndBound<T>) {
    fn start_bound(&self) -> StartBound<&T> {
        self.0.as_ref()
    }
    fn end_bound(&self) -> EndBound<&T> {
        self.1.as_ref()
    }
}

impl<T> RangeBounds<T> for RangeInclusive<T> {
    fn start_bound(&self) -> StartBound<&T> {
        StartBound::Included(self.start())
    }
    fn end_bound(&self) -> EndBound<&T> {
        EndBound::Included(self.end())
    }
}

impl<T> RangeBounds<T> for RangeFull {
    fn start_bound(&self) -> StartBound<&T> {
        StartBound::Unbounded
    }
    fn end_bound(&self) -> EndBound<&T> {
        EndBound::Unbounded
    }
}

// Helper macro to implement `RangeBounds` for the ranges with `start` and `end` fields that we can
// use.
macro_rules! impl_rangebounds {
    ( $base_ty:ident: $start:ident .. $end:ident ) => {
        impl<T> RangeBounds<T> for $base_ty<T> {
            impl_rangebounds!(@bound start_bound StartBound start $start);
            impl_rangebounds!(@bound end_bound EndBound end $end);
        }
    };

    (@bound $method:ident $ty:ident $field:ident Included) => {
        fn $method(&self) -> $ty<&T> {
            $ty::Included(&self.$field)
        }
    };
    (@bound $method:ident $ty:ident $field:ident Excluded) => {
        fn $method(&self) -> $ty<&T> {
            $ty::Excluded(&self.$field)
        }
    };
    (@bound $method:ident $ty:ident $get:ident Unbounded) => {
        fn $method(&self) -> $ty<&T> {
            $ty::Unbounded
        }
    };
}

impl_rangebounds!(Range: Included..Excluded);
impl_rangebounds!(RangeFrom: Included..Unbounded);
impl_rangebounds!(RangeTo: Unbounded..Excluded);
impl_rangebounds!(RangeToInclusive: Unbounded..Included);

#[cfg(test)]
mod tests {
    use super::{resolve, EndBound, StartBound};
    use crate::Error;

    #[test]
    fn resolve_std_ranges() {
        assert_eq!(resolve(&(1..4), 5), Ok(1..4));
        assert_eq!(resolve(&(1..=4), 5), Ok(1..5));
        assert_eq!(resolve(&(2..), 5), Ok(2..5));
        assert_eq!(resolve(&(..3), 5), Ok(0..3));
        assert_eq!(resolve(&(..=0), 5), Ok(0..1));
        assert_eq!(resolve(&(..), 5), Ok(0..5));
        assert_eq!(resolve(&(..), 0), Ok(0..0));
        assert_eq!(resolve(&(5..5), 5), Ok(5..5));
    }

    #[test]
    fn resolve_rejects_bad_ranges() {
        assert_eq!(
            resolve(&(3..2), 5),
            Err(Error::InvalidRange { left: 4, right: 2, len: 5 })
        );
        assert_eq!(
            resolve(&(0..=5), 5),
            Err(Error::InvalidRange { left: 1, right: 6, len: 5 })
        );
        assert_eq!(
            resolve(&(6..), 5),
            Err(Error::InvalidRange { left: 7, right: 5, len: 5 })
        );
        assert_eq!(
            resolve(&(0..=usize::MAX), 5),
            Err(Error::InvalidRange { left: 1, right: usize::MAX, len: 5 })
        );
        assert_eq!(
            resolve(&(usize::MAX..), 5),
            Err(Error::InvalidRange { left: usize::MAX, right: 5, len: 5 })
        );
    }

    #[test]
    fn bound_pairs() {
        let range = (StartBound::Included(2_usize), EndBound::Excluded(4_usize));
        assert_eq!(resolve(&range, 4), Ok(2..4));
        assert_eq!(resolve(&&range, 4), Ok(2..4));

        let backwards = (StartBound::Included(4_usize), EndBound::Excluded(2_usize));
        assert!(resolve(&backwards, 5).is_err());

        let prefix = (StartBound::Unbounded, EndBound::Included(0_usize));
        assert_eq!(resolve(&prefix, 1), Ok(0..1));
    }
}
