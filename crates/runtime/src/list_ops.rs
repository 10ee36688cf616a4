//! List operations for REDLINE
//!
//! Generic operations over a [`Sequence`], the language's ordered, resizable,
//! single-type list. Each operation asks only for the capability it needs:
//! equality for [`find`], ordering for [`sort`]. Everything is resolved at
//! compile time.
//!
//! None of these operations fail. On an empty sequence `sort` and `reverse`
//! are no-ops and `find` returns -1.
//!
//! # Examples
//!
//! ```
//! use redline_runtime::list_ops::{append, find, len, reverse, sort};
//!
//! let mut scores = vec![30, 10, 20];
//! append(&mut scores, 5);
//! sort(&mut scores);
//! assert_eq!(scores, [5, 10, 20, 30]);
//!
//! reverse(&mut scores);
//! assert_eq!(find(&scores, &20), 1);
//! assert_eq!(len(&scores), 4);
//! ```

use std::cmp::Ordering;

/// REDLINE's list type: owns its elements, insertion-ordered
pub type Sequence<T> = Vec<T>;

/// Returned by [`find`] when no element matches
pub const NOT_FOUND: i64 = -1;

/// Number of elements
pub fn len<T>(seq: &[T]) -> i64 {
    seq.len() as i64
}

/// Check if a list has no elements
pub fn is_empty<T>(seq: &[T]) -> bool {
    seq.is_empty()
}

/// Add `value` at the end (amortized O(1))
pub fn append<T>(seq: &mut Sequence<T>, value: T) {
    seq.push(value);
}

/// Sort ascending, in place
///
/// The sort is stable: equal elements keep their relative order. Elements
/// that do not compare at all (a float NaN) are treated as equal to their
/// neighbours, so the sort never panics.
pub fn sort<T: PartialOrd>(seq: &mut [T]) {
    seq.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
}

/// Reverse element order, in place
pub fn reverse<T>(seq: &mut [T]) {
    seq.reverse();
}

/// Index of the first element equal to `value`, or [`NOT_FOUND`]
pub fn find<T: PartialEq>(seq: &[T], value: &T) -> i64 {
    seq.iter()
        .position(|item| item == value)
        .map(|i| i as i64)
        .unwrap_or(NOT_FOUND)
}

/// Element at `index`, or `None` when the index is negative or past the end
pub fn get<T>(seq: &[T], index: i64) -> Option<&T> {
    usize::try_from(index).ok().and_then(|i| seq.get(i))
}
