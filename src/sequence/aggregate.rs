//! Folding a collection down to a single value.
//!
//! [`reduce`] is the only function here that touches [`each`] directly;
//! membership and the boolean quantifiers are all expressed as folds.

use crate::collection::{AsCollection, Truthy, each};

/// Left-folds `collection` with `iterator`, starting from `initial`.
///
/// Each step computes `accumulator = iterator(accumulator, value)`.
///
/// # Examples
///
/// ```rust
/// use toolbelt::sequence::reduce;
///
/// let sum = reduce(&[1, 2, 3], |total, number| total + number, 0);
/// assert_eq!(sum, 6);
///
/// let joined = reduce(&["a", "b"], |text: String, part| text + *part, String::new());
/// assert_eq!(joined, "ab");
/// ```
pub fn reduce<C, F, U>(collection: &C, mut iterator: F, initial: U) -> U
where
    C: AsCollection + ?Sized,
    F: FnMut(U, &C::Item) -> U,
{
    let mut accumulator = Some(initial);
    each(collection, |value, _, _| {
        accumulator = accumulator.take().map(|current| iterator(current, value));
    });
    accumulator.unwrap_or_else(|| unreachable!("accumulator is restored after every step"))
}

/// Left-folds `collection` starting from numeric zero.
///
/// This is the form of [`reduce`] with the initial value omitted. The
/// accumulator must be numeric; non-numeric folds pass an explicit initial
/// value to [`reduce`].
///
/// # Examples
///
/// ```rust
/// use toolbelt::sequence::reduce_from_zero;
///
/// let sum: i64 = reduce_from_zero(&[4_i64, 5, 6], |total: i64, number| total + number);
/// assert_eq!(sum, 15);
///
/// let empty: Vec<i64> = Vec::new();
/// assert_eq!(reduce_from_zero(&empty, |total: i64, number| total + number), 0);
/// ```
pub fn reduce_from_zero<C, F, U>(collection: &C, iterator: F) -> U
where
    C: AsCollection + ?Sized,
    F: FnMut(U, &C::Item) -> U,
    U: From<u8>,
{
    reduce(collection, iterator, U::from(0))
}

/// Returns `true` if any value equals `target`.
///
/// Expressed as a fold: once found, the result stays `true` for the rest of
/// the traversal.
///
/// # Examples
///
/// ```rust
/// use toolbelt::sequence::contains;
///
/// assert!(contains(&[1, 2, 3], &2));
/// assert!(!contains(&[1, 2, 3], &4));
/// ```
pub fn contains<C>(collection: &C, target: &C::Item) -> bool
where
    C: AsCollection + ?Sized,
    C::Item: PartialEq,
{
    reduce(
        collection,
        |was_found, item| was_found || item == target,
        false,
    )
}

/// Returns `true` if `predicate` is truthy for every value.
///
/// Once a value fails, the predicate is not called again. An empty collection
/// yields `true`.
///
/// # Examples
///
/// ```rust
/// use toolbelt::sequence::every;
///
/// assert!(every(&[2, 4, 6], |number| number % 2 == 0));
/// assert!(!every(&[2, 3, 6], |number| number % 2 == 0));
/// ```
pub fn every<C, P, R>(collection: &C, mut predicate: P) -> bool
where
    C: AsCollection + ?Sized,
    P: FnMut(&C::Item) -> R,
    R: Truthy,
{
    reduce(
        collection,
        |all_passed, item| all_passed && predicate(item).is_truthy(),
        true,
    )
}

/// Returns `true` if every value is itself truthy.
///
/// # Examples
///
/// ```rust
/// use toolbelt::sequence::every_truthy;
///
/// assert!(every_truthy(&[1_i32, 2, 3]));
/// assert!(!every_truthy(&[1_i32, 0, 3]));
/// ```
pub fn every_truthy<C>(collection: &C) -> bool
where
    C: AsCollection + ?Sized,
    C::Item: Truthy,
{
    every(collection, Truthy::is_truthy)
}

/// Returns `true` if `predicate` is truthy for at least one value.
///
/// Defined as the negation of [`every`] with the negated predicate, so an
/// empty collection yields `false`.
///
/// # Examples
///
/// ```rust
/// use toolbelt::sequence::some;
///
/// assert!(some(&[1, 3, 4], |number| number % 2 == 0));
/// assert!(!some(&[1, 3, 5], |number| number % 2 == 0));
/// ```
pub fn some<C, P, R>(collection: &C, mut predicate: P) -> bool
where
    C: AsCollection + ?Sized,
    P: FnMut(&C::Item) -> R,
    R: Truthy,
{
    !every(collection, |item| !predicate(item).is_truthy())
}

/// Returns `true` if at least one value is itself truthy.
pub fn some_truthy<C>(collection: &C) -> bool
where
    C: AsCollection + ?Sized,
    C::Item: Truthy,
{
    some(collection, Truthy::is_truthy)
}
