//! # Hyperion -- a tree for shuffling sequences around
//!
//! Some problems boil down to the same loop: take a long sequence, then repeatedly pick a
//! contiguous range of it and move that range to the very front. With a plain `Vec`, every one of
//! those moves costs `O(n)`. This crate primarily exports a single type -- [`PositionalTree`] --
//! which does each move in `O(log n)` expected time.
//!
//! ### How it works
//!
//! [`PositionalTree`] is an *implicit-key treap*: a binary search tree where the "key" of each
//! element is never stored. Instead, it's the element's position under in-order traversal,
//! recovered on demand from the subtree sizes kept in each node. Balance comes from a random
//! priority assigned to every node when it's created; the tree is always a max-heap on those
//! priorities, which keeps the expected depth logarithmic.
//!
//! Everything is built out of two primitives, [`split`] and [`merge`]. Moving a range to the front
//! is just two splits followed by two merges in a different order.
//!
//! [`split`]: PositionalTree::split
//! [`merge`]: PositionalTree::merge
//!
//! ### Feature flags
//!
//! * `serde` -- implements `Serialize` and `Deserialize` for [`PositionalTree`], as a plain
//!   sequence of its elements
//! * `fuzz` -- exposes the [`mock`] module and `validate` methods, and derives `Arbitrary` for the
//!   types in [`range`]. Used by the fuzzing harness
//!
//! ### Naming
//!
//! This library is named after [Hyperion], a coast redwood in Redwood National Park that's the
//! current tallest tree on Earth.
//!
//! [Hyperion]: https://en.wikipedia.org/wiki/Hyperion_(tree)

#![deny(unsafe_code)]

#[macro_use]
mod macros;

pub mod io;
pub mod range;

mod error;
#[cfg(feature = "serde")]
mod serde;
mod tree;

#[cfg(any(test, feature = "fuzz"))]
pub mod mock;

pub use error::Error;
pub use tree::{Iter, PositionalTree};
