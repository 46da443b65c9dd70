//! Operations on ordered sequences and collections.
//!
//! Every operation here is derived from [`each`](crate::collection::each),
//! directly or through [`map`], [`filter`] and [`reduce`]:
//!
//! ```text
//! each
//!  ├── index_of, map, filter, reduce, uniq, flatten
//!  ├── map    ──> pluck, invoke, sort_by, sort_by_field, shuffle, zip
//!  ├── filter ──> reject ──> difference
//!  └── reduce ──> contains, every ──> some, intersection
//! ```
//!
//! # Search and slicing
//!
//! - [`first`], [`first_n`], [`last`], [`last_n`], [`index_of`]
//!
//! # Filtering
//!
//! - [`filter`], [`reject`], [`uniq`], [`uniq_by`], [`intersection`],
//!   [`difference`], [`flatten`]
//!
//! # Transformation and aggregation
//!
//! - [`map`], [`pluck`], [`invoke`], [`reduce`], [`reduce_from_zero`],
//!   [`contains`], [`every`], [`every_truthy`], [`some`], [`some_truthy`]
//!
//! # Reordering
//!
//! - [`sort_by`], [`sort_by_field`], `shuffle`, `shuffle_with`, [`zip`], [`zip2`]
//!
//! # Examples
//!
//! ```rust
//! use toolbelt::sequence::{filter, map, reduce};
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//! let squares_of_odds = map(&filter(&numbers, |n| n % 2 == 1), |n, _, _| n * n);
//! assert_eq!(squares_of_odds, vec![1, 9, 25]);
//! assert_eq!(reduce(&squares_of_odds, |total, n| total + n, 0), 35);
//! ```

mod aggregate;
mod filter;
mod flatten;
mod reorder;
mod search;
mod transform;

pub use aggregate::{contains, every, every_truthy, reduce, reduce_from_zero, some, some_truthy};
pub use filter::{difference, filter, intersection, reject, uniq, uniq_by};
pub use flatten::{Nested, flatten};
#[cfg(feature = "shuffle")]
pub use reorder::{shuffle, shuffle_with};
pub use reorder::{sort_by, sort_by_field, zip, zip2};
pub use search::{first, first_n, index_of, last, last_n};
pub use transform::{Method, invoke, map, pluck};
