use std::ops::RangeInclusive;

use derive_more::{Display, Error, IsVariant};

/// The error returned when a positional access falls outside of a collection.
///
/// An empty collection has no valid index at all, so it gets its own variant instead of a range
/// `[0, len - 1]` that would underflow.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum IndexOutOfBounds {
    /// The collection was empty, so no index is valid.
    #[display("Index {index} out of bounds for an empty collection!")]
    Empty { index: usize },
    /// The index was past the end of the collection. Valid indices are `0..=last`.
    #[display("Index {index} out of range [0, {last}]!")]
    Range { index: usize, last: usize },
}

impl IndexOutOfBounds {
    /// Creates the error for `index` against a collection of length `len`.
    pub(crate) const fn new(index: usize, len: usize) -> IndexOutOfBounds {
        match len.checked_sub(1) {
            Some(last) => IndexOutOfBounds::Range { index, last },
            None => IndexOutOfBounds::Empty { index },
        }
    }

    /// Returns the index that was rejected.
    pub const fn index(&self) -> usize {
        match *self {
            IndexOutOfBounds::Empty { index } | IndexOutOfBounds::Range { index, .. } => index,
        }
    }

    /// Returns the range of valid indices, or [`None`] if the collection was empty.
    pub const fn bounds(&self) -> Option<RangeInclusive<usize>> {
        match *self {
            IndexOutOfBounds::Empty { .. } => None,
            IndexOutOfBounds::Range { last, .. } => Some(0..=last),
        }
    }
}
