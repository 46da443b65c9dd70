//! Reordering and regrouping sequences.
//!
//! `sort_by` and `sort_by_field` return a new `Vec`; the input is never
//! sorted in place.

use std::cmp::Ordering;

use crate::collection::Record;
use crate::error::ToolkitError;

use super::aggregate::reduce;
use super::transform::map;

/// Orders two keys, placing keys that are not comparable with themselves
/// (such as `NaN`) after all others so that the ordering stays total.
fn compare_keys<K: PartialOrd>(left: &K, right: &K) -> Ordering {
    let left_unordered = left.partial_cmp(left).is_none();
    let right_unordered = right.partial_cmp(right).is_none();
    match (left_unordered, right_unordered) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => left.partial_cmp(right).unwrap_or(Ordering::Equal),
    }
}

fn sort_keyed<'a, T, K, F>(
    sequence: &'a [T],
    operation: &'static str,
    mut key_fn: F,
) -> Result<Vec<T>, ToolkitError>
where
    T: Clone,
    K: PartialOrd,
    F: FnMut(&'a T) -> K,
{
    if sequence.is_empty() {
        return Err(ToolkitError::empty_sequence(operation));
    }
    let mut keyed = map(sequence, |value, _, _| (key_fn(value), value));
    keyed.sort_by(|(left, _), (right, _)| compare_keys(left, right));
    Ok(keyed.into_iter().map(|(_, value)| value.clone()).collect())
}

/// Sorts by the key `key_fn` extracts from each value.
///
/// The sort is stable, so values with equal keys keep their input order.
///
/// # Errors
///
/// Returns [`ToolkitError::InvalidArgument`] if `sequence` is empty.
///
/// # Examples
///
/// ```rust
/// use toolbelt::sequence::sort_by;
///
/// let words = ["pear", "fig", "banana"];
/// assert_eq!(sort_by(&words, |word| word.len()), Ok(vec!["fig", "pear", "banana"]));
/// assert!(sort_by(&Vec::<i32>::new(), |number| *number).is_err());
/// ```
pub fn sort_by<'a, T, K, F>(sequence: &'a [T], key_fn: F) -> Result<Vec<T>, ToolkitError>
where
    T: Clone,
    K: PartialOrd,
    F: FnMut(&'a T) -> K,
{
    sort_keyed(sequence, "sort_by", key_fn)
}

/// Sorts records by the field called `name`.
///
/// Records without the field sort before records that have it.
///
/// # Errors
///
/// Returns [`ToolkitError::InvalidArgument`] if `records` is empty.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use toolbelt::sequence::sort_by_field;
///
/// let people = vec![
///     HashMap::from([("age".to_string(), 41)]),
///     HashMap::from([("age".to_string(), 36)]),
/// ];
/// let sorted = sort_by_field(&people, "age").unwrap();
/// assert_eq!(sorted[0]["age"], 36);
/// ```
pub fn sort_by_field<R>(records: &[R], name: &str) -> Result<Vec<R>, ToolkitError>
where
    R: Record + Clone,
    R::Field: PartialOrd,
{
    sort_keyed(records, "sort_by_field", |record| record.field(name))
}

/// Returns a random permutation of `sequence` drawn from `rng`.
///
/// Values are picked uniformly from a shrinking work list, so every
/// permutation is equally likely. The input is left untouched.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use toolbelt::sequence::shuffle_with;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let mut shuffled = shuffle_with(&[1, 2, 3, 4], &mut rng);
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, vec![1, 2, 3, 4]);
/// ```
#[cfg(feature = "shuffle")]
pub fn shuffle_with<T, G>(sequence: &[T], rng: &mut G) -> Vec<T>
where
    T: Clone,
    G: rand::Rng + ?Sized,
{
    let mut work = map(sequence, |value, _, _| value);
    let mut shuffled = Vec::with_capacity(work.len());
    while !work.is_empty() {
        let pick = rng.gen_range(0..work.len());
        shuffled.push(work.swap_remove(pick).clone());
    }
    shuffled
}

/// Returns a random permutation of `sequence` using the thread-local RNG.
#[cfg(feature = "shuffle")]
pub fn shuffle<T: Clone>(sequence: &[T]) -> Vec<T> {
    shuffle_with(sequence, &mut rand::thread_rng())
}

/// Groups the values at each index across all sequences.
///
/// The result is as long as the longest sequence; a shorter sequence
/// contributes `None` at the indexes it lacks.
///
/// # Examples
///
/// ```rust
/// use toolbelt::sequence::zip;
///
/// let zipped = zip(&[vec!["a", "b", "c", "d"], vec!["1", "2", "3"]]);
/// assert_eq!(zipped[3], vec![Some("d"), None]);
/// ```
pub fn zip<T, S>(sequences: &[S]) -> Vec<Vec<Option<T>>>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let length = reduce(
        sequences,
        |longest, sequence| longest.max(sequence.as_ref().len()),
        0_usize,
    );
    (0..length)
        .map(|index| map(sequences, |sequence, _, _| sequence.as_ref().get(index).cloned()))
        .collect()
}

/// Pairs up two sequences of possibly different element types.
///
/// Like [`zip`], the result is as long as the longer input and the shorter
/// side is padded with `None`.
///
/// # Examples
///
/// ```rust
/// use toolbelt::sequence::zip2;
///
/// let pairs = zip2(&['a', 'b', 'c', 'd'], &[1, 2, 3]);
/// assert_eq!(pairs[0], (Some('a'), Some(1)));
/// assert_eq!(pairs[3], (Some('d'), None));
/// ```
pub fn zip2<A, B>(left: &[A], right: &[B]) -> Vec<(Option<A>, Option<B>)>
where
    A: Clone,
    B: Clone,
{
    let length = left.len().max(right.len());
    (0..length)
        .map(|index| (left.get(index).cloned(), right.get(index).cloned()))
        .collect()
}
