//! Selecting values from collections.
//!
//! `reject`, `intersection` and `difference` are compositions of `filter`,
//! `every`, `some` and `contains`; none of them walks its input directly.

use crate::collection::{AsCollection, Truthy, each};

use super::aggregate::{contains, every, some};

/// Returns the values for which `predicate` is truthy, in order.
///
/// # Examples
///
/// ```rust
/// use toolbelt::sequence::filter;
///
/// let evens = filter(&[1, 2, 3, 4, 5, 6], |number| number % 2 == 0);
/// assert_eq!(evens, vec![2, 4, 6]);
/// ```
pub fn filter<C, P, R>(collection: &C, mut predicate: P) -> Vec<C::Item>
where
    C: AsCollection + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> R,
    R: Truthy,
{
    let mut result = Vec::new();
    each(collection, |value, _, _| {
        if predicate(value).is_truthy() {
            result.push(value.clone());
        }
    });
    result
}

/// Returns the values for which `predicate` is falsy, in order.
///
/// The complement of [`filter`]: together they partition the input.
///
/// # Examples
///
/// ```rust
/// use toolbelt::sequence::reject;
///
/// let odds = reject(&[1, 2, 3, 4, 5, 6], |number| number % 2 == 0);
/// assert_eq!(odds, vec![1, 3, 5]);
/// ```
pub fn reject<C, P, R>(collection: &C, mut predicate: P) -> Vec<C::Item>
where
    C: AsCollection + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> R,
    R: Truthy,
{
    filter(collection, |value| !predicate(value).is_truthy())
}

/// Removes duplicates, keeping the first occurrence of each value.
///
/// # Examples
///
/// ```rust
/// use toolbelt::sequence::uniq;
///
/// assert_eq!(uniq(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
/// ```
pub fn uniq<T>(sequence: &[T]) -> Vec<T>
where
    T: Clone + PartialEq,
{
    let mut result: Vec<T> = Vec::new();
    each(sequence, |value, _, _| {
        if !contains(&result, value) {
            result.push(value.clone());
        }
    });
    result
}

/// Removes values whose derived key was already seen.
///
/// With `is_sorted` set, only the key of the immediately preceding element is
/// compared, which is enough when equal keys are adjacent. Otherwise every
/// key kept so far is compared.
///
/// # Examples
///
/// ```rust
/// use toolbelt::sequence::uniq_by;
///
/// let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
/// let by_initial = uniq_by(&words, true, |word| word.chars().next());
/// assert_eq!(by_initial, vec!["apple", "banana", "cherry"]);
///
/// let parity = uniq_by(&[1, 2, 3, 4], false, |number| number % 2);
/// assert_eq!(parity, vec![1, 2]);
/// ```
pub fn uniq_by<T, K, F>(sequence: &[T], is_sorted: bool, mut key_fn: F) -> Vec<T>
where
    T: Clone,
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    let mut result = Vec::new();
    if is_sorted {
        let mut previous: Option<K> = None;
        each(sequence, |value, _, _| {
            let key = key_fn(value);
            if previous.as_ref() != Some(&key) {
                result.push(value.clone());
            }
            previous = Some(key);
        });
    } else {
        let mut seen: Vec<K> = Vec::new();
        each(sequence, |value, _, _| {
            let key = key_fn(value);
            if !contains(&seen, &key) {
                seen.push(key);
                result.push(value.clone());
            }
        });
    }
    result
}

/// Returns the values present in every sequence.
///
/// The result is de-duplicated and ordered by first occurrence in the first
/// sequence. No sequences at all yields an empty result.
///
/// # Examples
///
/// ```rust
/// use toolbelt::sequence::intersection;
///
/// assert_eq!(intersection(&[vec![1, 2, 3], vec![2, 3, 4]]), vec![2, 3]);
/// assert_eq!(intersection(&[vec![1, 1, 2], vec![1]]), vec![1]);
/// ```
pub fn intersection<T, S>(sequences: &[S]) -> Vec<T>
where
    T: Clone + PartialEq,
    S: AsRef<[T]>,
{
    let Some((first, others)) = sequences.split_first() else {
        return Vec::new();
    };
    let mut result: Vec<T> = Vec::new();
    each(first.as_ref(), |value, _, _| {
        if !contains(&result, value) && every(others, |other| contains(other.as_ref(), value)) {
            result.push(value.clone());
        }
    });
    result
}

/// Returns the values of `sequence` that occur in none of `others`.
///
/// The order of `sequence` is preserved; every occurrence of an excluded
/// value is removed.
///
/// # Examples
///
/// ```rust
/// use toolbelt::sequence::difference;
///
/// assert_eq!(difference(&[1, 2, 3], &[vec![2]]), vec![1, 3]);
/// assert_eq!(difference(&[1, 2, 3, 4, 5], &[vec![5, 2], vec![10]]), vec![1, 3, 4]);
/// ```
pub fn difference<T, S>(sequence: &[T], others: &[S]) -> Vec<T>
where
    T: Clone + PartialEq,
    S: AsRef<[T]>,
{
    reject(sequence, |value| {
        some(others, |other| contains(other.as_ref(), value))
    })
}
