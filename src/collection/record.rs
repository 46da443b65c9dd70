//! Property and method lookup on records.
//!
//! `pluck`, `sort_by_field` and `invoke` address the elements of a sequence
//! by name. [`Record`] provides named field access and [`Invocable`] provides
//! named method dispatch.

use std::collections::{BTreeMap, HashMap};

/// A value whose fields can be looked up by name.
///
/// Implemented for string-keyed `HashMap` and `BTreeMap`; user types
/// implement it to take part in `pluck` and `sort_by_field`.
///
/// # Examples
///
/// ```rust
/// use toolbelt::collection::Record;
///
/// struct Person {
///     name: String,
/// }
///
/// impl Record for Person {
///     type Field = String;
///
///     fn field(&self, name: &str) -> Option<&String> {
///         (name == "name").then_some(&self.name)
///     }
/// }
///
/// let person = Person { name: "Ada".to_string() };
/// assert_eq!(person.field("name").map(String::as_str), Some("Ada"));
/// assert_eq!(person.field("age"), None);
/// ```
pub trait Record {
    /// The type of every field value.
    type Field;

    /// Returns the field called `name`, or `None` if there is no such field.
    fn field(&self, name: &str) -> Option<&Self::Field>;
}

impl<V> Record for HashMap<String, V> {
    type Field = V;

    #[inline]
    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<V> Record for BTreeMap<String, V> {
    type Field = V;

    #[inline]
    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

/// A value exposing methods that can be called by name.
///
/// `A` is the argument bundle passed to every method (use a tuple for more
/// than one argument).
pub trait Invocable<A> {
    /// The result type shared by all named methods.
    type Output;

    /// Calls the method called `name` with `arguments`.
    ///
    /// Returns `None` if the value has no such method.
    fn invoke_method(&self, name: &str, arguments: &A) -> Option<Self::Output>;
}
