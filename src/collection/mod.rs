//! Collections and the iteration primitive.
//!
//! This module provides the vocabulary every other module is written in:
//!
//! - [`Collection`]: a borrowed ordered sequence or keyed mapping
//! - [`Key`]: the index or name of a visited value
//! - [`AsCollection`]: conversion of slices, vectors, arrays and maps
//! - [`each`] / [`each_optional`]: the iteration primitive
//! - [`Truthy`]: coercion of predicate results to `bool`
//! - [`Record`] / [`Invocable`]: named field and method lookup
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use toolbelt::collection::each;
//!
//! let mut ages = BTreeMap::new();
//! ages.insert("ada".to_string(), 36);
//! ages.insert("alan".to_string(), 41);
//!
//! let mut total = 0;
//! each(&ages, |age, _, _| total += age);
//! assert_eq!(total, 77);
//! ```

mod each;
mod record;
mod truthy;

pub use each::{AsCollection, Collection, Key, each, each_optional};
pub use record::{Invocable, Record};
pub use truthy::Truthy;
