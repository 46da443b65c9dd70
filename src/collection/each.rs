//! The iteration primitive.
//!
//! Every derived operation in this crate walks its input through [`each`].
//! The shape of the input (ordered sequence or keyed mapping) is decided once,
//! when the argument is turned into a [`Collection`], and each shape then has
//! its own static traversal path.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// The position of a value inside a [`Collection`].
///
/// Ordered sequences report the element index, keyed mappings report the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Key<'a> {
    /// Index of an element in an ordered sequence.
    Index(usize),
    /// Key of an entry in a keyed mapping.
    Name(&'a str),
}

impl<'a> Key<'a> {
    /// Returns the index if this key addresses a sequence element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbelt::collection::Key;
    ///
    /// assert_eq!(Key::Index(3).index(), Some(3));
    /// assert_eq!(Key::Name("age").index(), None);
    /// ```
    #[inline]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Name(_) => None,
        }
    }

    /// Returns the name if this key addresses a mapping entry.
    #[inline]
    pub const fn name(&self) -> Option<&'a str> {
        match self {
            Self::Index(_) => None,
            Self::Name(name) => Some(name),
        }
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(formatter, "{index}"),
            Self::Name(name) => write!(formatter, "{name}"),
        }
    }
}

/// A borrowed view of either an ordered sequence or a keyed mapping.
///
/// Values of this type are produced by [`AsCollection::as_collection`] and
/// handed to every iterator callback as its third argument.
#[derive(Debug)]
pub enum Collection<'a, V> {
    /// An ordered, index-addressable sequence.
    Sequence(&'a [V]),
    /// A hash-ordered keyed mapping.
    Mapping(&'a HashMap<String, V>),
    /// A key-ordered keyed mapping.
    OrderedMapping(&'a BTreeMap<String, V>),
}

impl<V> Clone for Collection<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Collection<'_, V> {}

impl<V> Collection<'_, V> {
    /// Returns the number of elements or entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbelt::collection::{AsCollection, Collection};
    ///
    /// let values = vec![1, 2, 3];
    /// assert_eq!(values.as_collection().len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(values) => values.len(),
            Self::Mapping(entries) => entries.len(),
            Self::OrderedMapping(entries) => entries.len(),
        }
    }

    /// Returns `true` if there is nothing to visit.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` for the ordered-sequence shape.
    #[inline]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }
}

/// Types that can be viewed as a [`Collection`].
///
/// Implemented for slices, vectors, arrays, and string-keyed `HashMap` and
/// `BTreeMap`. The associated `Item` fixes the value type as soon as the
/// argument type is known, so iterator callbacks need no annotations.
pub trait AsCollection {
    /// The type of the values visited.
    type Item;

    /// Borrows `self` as a collection.
    fn as_collection(&self) -> Collection<'_, Self::Item>;
}

impl<V> AsCollection for [V] {
    type Item = V;

    #[inline]
    fn as_collection(&self) -> Collection<'_, V> {
        Collection::Sequence(self)
    }
}

impl<V> AsCollection for Vec<V> {
    type Item = V;

    #[inline]
    fn as_collection(&self) -> Collection<'_, V> {
        Collection::Sequence(self.as_slice())
    }
}

impl<V, const N: usize> AsCollection for [V; N] {
    type Item = V;

    #[inline]
    fn as_collection(&self) -> Collection<'_, V> {
        Collection::Sequence(self.as_slice())
    }
}

impl<V> AsCollection for HashMap<String, V> {
    type Item = V;

    #[inline]
    fn as_collection(&self) -> Collection<'_, V> {
        Collection::Mapping(self)
    }
}

impl<V> AsCollection for BTreeMap<String, V> {
    type Item = V;

    #[inline]
    fn as_collection(&self) -> Collection<'_, V> {
        Collection::OrderedMapping(self)
    }
}

impl<V> AsCollection for Collection<'_, V> {
    type Item = V;

    #[inline]
    fn as_collection(&self) -> Collection<'_, V> {
        *self
    }
}

/// Calls `iterator(value, key, collection)` once for every element.
///
/// Ordered sequences are visited from index `0` to `len - 1`. Keyed mappings
/// are visited once per entry in the map's own iteration order, which is
/// stable within a single pass and unspecified otherwise for `HashMap`.
///
/// Values and keys borrow from `collection` for its whole lifetime, so a
/// callback may keep them after it returns.
///
/// # Examples
///
/// ```rust
/// use toolbelt::collection::{each, Key};
///
/// let mut seen = Vec::new();
/// each(&["a", "b"], |value, key, _| seen.push((key.index(), *value)));
/// assert_eq!(seen, vec![(Some(0), "a"), (Some(1), "b")]);
/// ```
pub fn each<'a, C, F>(collection: &'a C, mut iterator: F)
where
    C: AsCollection + ?Sized,
    F: FnMut(&'a C::Item, Key<'a>, &Collection<'a, C::Item>),
{
    let collection = collection.as_collection();
    match collection {
        Collection::Sequence(values) => {
            for (index, value) in values.iter().enumerate() {
                iterator(value, Key::Index(index), &collection);
            }
        }
        Collection::Mapping(entries) => {
            for (name, value) in entries {
                iterator(value, Key::Name(name), &collection);
            }
        }
        Collection::OrderedMapping(entries) => {
            for (name, value) in entries {
                iterator(value, Key::Name(name), &collection);
            }
        }
    }
}

/// Like [`each`], but tolerates a missing callback.
///
/// Passing `None` returns immediately without visiting anything.
///
/// # Examples
///
/// ```rust
/// use toolbelt::collection::{each_optional, Collection, Key};
///
/// let mut total = 0;
/// each_optional(&[1, 2, 3], Some(|value: &i32, _: Key<'_>, _: &Collection<'_, i32>| total += value));
/// assert_eq!(total, 6);
///
/// each_optional(&[1, 2, 3], None::<fn(&i32, Key<'_>, &Collection<'_, i32>)>);
/// ```
pub fn each_optional<'a, C, F>(collection: &'a C, iterator: Option<F>)
where
    C: AsCollection + ?Sized,
    F: FnMut(&'a C::Item, Key<'a>, &Collection<'a, C::Item>),
{
    if let Some(iterator) = iterator {
        each(collection, iterator);
    }
}
