//! Error type for fallible positional operations

/// Errors produced by operations on a [`PositionalTree`](crate::PositionalTree)
///
/// Neither of these is ever recovered from internally. A failed operation leaves the tree exactly
/// as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested range doesn't describe a non-empty run of positions within the sequence
    ///
    /// `left` and `right` are always 1-indexed and inclusive. For [`move_range_to_front`] they're
    /// exactly as given. A zero-indexed `start..end` passed to [`move_to_front`] is reported as
    /// `left = start + 1` and `right = end`, which names the same positions.
    ///
    /// [`move_range_to_front`]: crate::PositionalTree::move_range_to_front
    /// [`move_to_front`]: crate::PositionalTree::move_to_front
    #[error("invalid 1-indexed range [{left}, {right}] for a sequence of length {len}")]
    InvalidRange {
        left: usize,
        right: usize,
        len: usize,
    },

    /// A positional operation was attempted on an empty tree, or at a position past its end
    #[error("position {position} out of bounds for a sequence of length {len}")]
    EmptyTreeUnderflow { position: usize, len: usize },
}
