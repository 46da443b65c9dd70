//! Slicing and searching ordered sequences.

use crate::collection::each;

/// Returns the first element, or `None` for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use toolbelt::sequence::first;
///
/// assert_eq!(first(&[1, 2, 3]), Some(&1));
/// assert_eq!(first::<i32>(&[]), None);
/// ```
#[inline]
pub fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// Returns the first `count` elements.
///
/// A `count` at or beyond the length yields the whole sequence; a `count` of
/// zero yields an empty slice.
///
/// # Examples
///
/// ```rust
/// use toolbelt::sequence::first_n;
///
/// assert_eq!(first_n(&[1, 2, 3], 2), &[1, 2]);
/// assert_eq!(first_n(&[1, 2, 3], 10), &[1, 2, 3]);
/// assert!(first_n(&[1, 2, 3], 0).is_empty());
/// ```
#[inline]
pub fn first_n<T>(sequence: &[T], count: usize) -> &[T] {
    &sequence[..count.min(sequence.len())]
}

/// Returns the last element, or `None` for an empty sequence.
#[inline]
pub fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// Returns the last `count` elements.
///
/// A `count` of zero yields an empty slice, which is distinct from asking for
/// the last element with [`last`].
///
/// # Examples
///
/// ```rust
/// use toolbelt::sequence::last_n;
///
/// assert_eq!(last_n(&[1, 2, 3], 2), &[2, 3]);
/// assert_eq!(last_n(&[1, 2, 3], 5), &[1, 2, 3]);
/// assert!(last_n(&[1, 2, 3], 0).is_empty());
/// ```
#[inline]
pub fn last_n<T>(sequence: &[T], count: usize) -> &[T] {
    &sequence[sequence.len().saturating_sub(count)..]
}

/// Returns the index of the first element equal to `target`.
///
/// Walks the sequence with [`each`]; `None` means the target is absent.
///
/// # Examples
///
/// ```rust
/// use toolbelt::sequence::index_of;
///
/// assert_eq!(index_of(&[10, 20, 30, 20], &20), Some(1));
/// assert_eq!(index_of(&[10, 20, 30], &40), None);
/// ```
pub fn index_of<T: PartialEq>(sequence: &[T], target: &T) -> Option<usize> {
    let mut found = None;
    each(sequence, |value, key, _| {
        if found.is_none() && value == target {
            found = key.index();
        }
    });
    found
}
