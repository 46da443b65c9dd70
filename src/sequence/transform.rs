//! Mapping values to new values.

use std::fmt;

use crate::collection::{AsCollection, Collection, Invocable, Key, Record, each};
use crate::error::ToolkitError;

/// Applies `iterator(value, key, collection)` to every value.
///
/// The result has exactly one entry per visited value, in visiting order.
///
/// # Examples
///
/// ```rust
/// use toolbelt::sequence::map;
///
/// let doubled = map(&[1, 2, 3], |number, _, _| number * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
///
/// let positions = map(&["a", "b"], |letter, key, _| format!("{key}:{letter}"));
/// assert_eq!(positions, vec!["0:a", "1:b"]);
/// ```
pub fn map<'a, C, F, U>(collection: &'a C, mut iterator: F) -> Vec<U>
where
    C: AsCollection + ?Sized,
    F: FnMut(&'a C::Item, Key<'a>, &Collection<'a, C::Item>) -> U,
{
    let mut result = Vec::with_capacity(collection.as_collection().len());
    each(collection, |value, key, collection| {
        result.push(iterator(value, key, collection));
    });
    result
}

/// Extracts the field called `name` from every record.
///
/// Records without the field contribute `None`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use toolbelt::sequence::pluck;
///
/// let people: Vec<HashMap<String, u32>> = vec![
///     HashMap::from([("age".to_string(), 36)]),
///     HashMap::from([("height".to_string(), 180)]),
/// ];
/// assert_eq!(pluck(&people, "age"), vec![Some(36), None]);
/// ```
pub fn pluck<R>(records: &[R], name: &str) -> Vec<Option<R::Field>>
where
    R: Record,
    R::Field: Clone,
{
    map(records, |record, _, _| record.field(name).cloned())
}

/// The method `invoke` calls on every record.
pub enum Method<'f, R, A, U> {
    /// A method looked up on the record through [`Invocable`].
    ByName(&'f str),
    /// A function called with the record as its receiver.
    ByCallable(&'f dyn Fn(&R, &A) -> U),
}

impl<R, A, U> Clone for Method<'_, R, A, U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, A, U> Copy for Method<'_, R, A, U> {}

impl<R, A, U> fmt::Debug for Method<'_, R, A, U> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByName(name) => formatter.debug_tuple("ByName").field(name).finish(),
            Self::ByCallable(_) => formatter.write_str("ByCallable(<function>)"),
        }
    }
}

/// Calls `method` on every record with `arguments` and collects the results.
///
/// # Errors
///
/// Returns [`ToolkitError::UnknownMethod`] if `method` is a name and some
/// record does not expose a method of that name.
///
/// # Examples
///
/// ```rust
/// use toolbelt::collection::Invocable;
/// use toolbelt::sequence::{invoke, Method};
///
/// struct Counter(i32);
///
/// impl Invocable<i32> for Counter {
///     type Output = i32;
///
///     fn invoke_method(&self, name: &str, step: &i32) -> Option<i32> {
///         match name {
///             "advance" => Some(self.0 + step),
///             _ => None,
///         }
///     }
/// }
///
/// let counters = [Counter(1), Counter(5)];
/// assert_eq!(invoke(&counters, Method::ByName("advance"), &10), Ok(vec![11, 15]));
///
/// let scale = |counter: &Counter, factor: &i32| counter.0 * factor;
/// assert_eq!(invoke(&counters, Method::ByCallable(&scale), &3), Ok(vec![3, 15]));
///
/// assert!(invoke(&counters, Method::ByName("rewind"), &1).is_err());
/// ```
pub fn invoke<R, A, U>(
    records: &[R],
    method: Method<'_, R, A, U>,
    arguments: &A,
) -> Result<Vec<U>, ToolkitError>
where
    R: Invocable<A, Output = U>,
{
    match method {
        Method::ByName(name) => map(records, |record, _, _| {
            record.invoke_method(name, arguments)
        })
        .into_iter()
        .collect::<Option<Vec<U>>>()
        .ok_or_else(|| ToolkitError::UnknownMethod {
            name: name.to_string(),
        }),
        Method::ByCallable(function) => Ok(map(records, |record, _, _| function(record, arguments))),
    }
}
