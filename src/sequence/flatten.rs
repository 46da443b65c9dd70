//! Arbitrarily nested sequences.

use crate::collection::each;

/// A value or a sequence of further nested values.
///
/// With the `serde` feature this type is untagged, so the JSON document
/// `[1, [2, [3]]]` deserializes into nested lists of leaves.
///
/// # Examples
///
/// ```rust
/// use toolbelt::sequence::Nested;
///
/// let nested = Nested::list([Nested::Leaf(1), Nested::list([Nested::Leaf(2)])]);
/// assert_eq!(nested.depth(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Nested<T> {
    /// A plain value.
    Leaf(T),
    /// A sequence that is expanded in place when flattened.
    List(Vec<Self>),
}

impl<T> Nested<T> {
    /// Builds a `List` from any iterable of nested values.
    pub fn list<I: IntoIterator<Item = Self>>(items: I) -> Self {
        Self::List(items.into_iter().collect())
    }

    /// Returns the deepest list nesting; a leaf has depth `0`.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 0,
            Self::List(items) => 1 + items.iter().map(Self::depth).max().unwrap_or(0),
        }
    }
}

/// Flattens nested sequences into one newly allocated sequence.
///
/// Leaves are kept in depth-first order; the input is left untouched.
///
/// # Examples
///
/// ```rust
/// use toolbelt::sequence::{flatten, Nested};
///
/// let nested = [
///     Nested::Leaf(1),
///     Nested::list([Nested::Leaf(2), Nested::list([Nested::Leaf(3)])]),
///     Nested::list([]),
///     Nested::Leaf(4),
/// ];
/// assert_eq!(flatten(&nested), vec![1, 2, 3, 4]);
/// ```
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Vec<T> {
    fn flatten_into<T: Clone>(nested: &[Nested<T>], result: &mut Vec<T>) {
        each(nested, |value, _, _| match value {
            Nested::Leaf(leaf) => result.push(leaf.clone()),
            Nested::List(items) => flatten_into(items, result),
        });
    }

    let mut result = Vec::new();
    flatten_into(nested, &mut result);
    result
}
