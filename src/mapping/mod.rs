//! Merging keyed mappings.
//!
//! [`extend`] and [`defaults`] copy entries from a list of sources into a
//! target mapping, traversing each source with
//! [`each`](crate::collection::each). Unlike every other operation in this
//! crate, they mutate their target in place and return it.
//!
//! Sources may be any [`AsCollection`]: a sequence source contributes its
//! elements under their decimal index (`"0"`, `"1"`, ...).
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use toolbelt::mapping::{defaults, extend};
//!
//! let mut settings = HashMap::from([("theme".to_string(), "dark")]);
//! let overrides = HashMap::from([("font".to_string(), "mono")]);
//! extend(&mut settings, &[overrides]);
//! assert_eq!(settings["font"], "mono");
//!
//! let fallback = HashMap::from([("theme".to_string(), "light")]);
//! defaults(&mut settings, &[fallback]);
//! assert_eq!(settings["theme"], "dark");
//! ```

use std::collections::{BTreeMap, HashMap};

use crate::collection::{AsCollection, each};

/// A keyed mapping that entries can be merged into.
pub trait MergeTarget<V> {
    /// Returns `true` if the mapping already defines `key`.
    fn defines(&self, key: &str) -> bool;

    /// Sets `key` to `value`, replacing any previous value.
    fn assign(&mut self, key: String, value: V);
}

impl<V> MergeTarget<V> for HashMap<String, V> {
    fn defines(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn assign(&mut self, key: String, value: V) {
        self.insert(key, value);
    }
}

impl<V> MergeTarget<V> for BTreeMap<String, V> {
    fn defines(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn assign(&mut self, key: String, value: V) {
        self.insert(key, value);
    }
}

/// Copies every entry of every source into `target`.
///
/// Sources are applied in order, so a later source overwrites an earlier one,
/// and every source overwrites the target.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use toolbelt::mapping::extend;
///
/// let mut target = BTreeMap::from([("a".to_string(), 1)]);
/// let first = BTreeMap::from([("a".to_string(), 2), ("b".to_string(), 2)]);
/// let second = BTreeMap::from([("b".to_string(), 3)]);
///
/// extend(&mut target, &[first, second]);
/// assert_eq!(target, BTreeMap::from([("a".to_string(), 2), ("b".to_string(), 3)]));
/// ```
pub fn extend<'t, M, V, S>(target: &'t mut M, sources: &[S]) -> &'t mut M
where
    M: MergeTarget<V> + ?Sized,
    V: Clone,
    S: AsCollection<Item = V>,
{
    each(sources, |source, _, _| {
        each(source, |value, key, _| target.assign(key.to_string(), value.clone()));
    });
    target
}

/// Fills in the keys `target` does not define yet.
///
/// Existing keys are never overwritten; among sources competing for the same
/// missing key, the first one wins.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use toolbelt::mapping::defaults;
///
/// let mut order = HashMap::from([("size".to_string(), "large")]);
/// let house = HashMap::from([
///     ("size".to_string(), "medium"),
///     ("milk".to_string(), "oat"),
/// ]);
/// let fallback = HashMap::from([("milk".to_string(), "whole")]);
///
/// defaults(&mut order, &[house, fallback]);
/// assert_eq!(order["size"], "large");
/// assert_eq!(order["milk"], "oat");
/// ```
pub fn defaults<'t, M, V, S>(target: &'t mut M, sources: &[S]) -> &'t mut M
where
    M: MergeTarget<V> + ?Sized,
    V: Clone,
    S: AsCollection<Item = V>,
{
    each(sources, |source, _, _| {
        each(source, |value, key, _| {
            let key = key.to_string();
            if !target.defines(&key) {
                target.assign(key, value.clone());
            }
        });
    });
    target
}
