//! # toolbelt
//!
//! A functional utility belt for Rust: generic helpers for iterating,
//! transforming, filtering, and reducing collections, plus function
//! decorators for memoization, one-shot execution, delay, and throttling.
//!
//! ## Overview
//!
//! Every collection operation is built from a single iteration primitive,
//! [`collection::each`], either directly or through `map`, `filter` and
//! `reduce`. The library includes:
//!
//! - **Collections**: `each` over ordered sequences and keyed mappings
//! - **Sequences**: search, filtering, transformation, aggregation, reordering
//! - **Mappings**: `extend` and `defaults` for merging keyed mappings
//! - **Function decorators**: `once` and `memoize`
//! - **Timing decorators**: `delay` and `throttle` on the tokio runtime
//!
//! ## Feature Flags
//!
//! - `collection`: The iteration primitive and collection vocabulary
//! - `sequence`: Sequence and collection operations
//! - `mapping`: Mapping merge helpers
//! - `function`: `once` and `memoize`
//! - `timing`: `delay` and `throttle` (pulls in tokio)
//! - `shuffle`: Random permutations (pulls in rand)
//! - `serde`: Serialization of nested sequences
//! - `fxhash` / `ahash`: Faster hashers for the memoization cache
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use toolbelt::prelude::*;
//!
//! let numbers = vec![3, 1, 4, 1, 5, 9, 2, 6];
//! let distinct = uniq(&numbers);
//! let evens = filter(&distinct, |number| number % 2 == 0);
//! assert_eq!(evens, vec![4, 2, 6]);
//! assert_eq!(reduce(&evens, |total, number| total + number, 0), 12);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits, and functions.
///
/// # Usage
///
/// ```rust
/// use toolbelt::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "mapping")]
    pub use crate::mapping::*;

    #[cfg(feature = "function")]
    pub use crate::function::*;

    #[cfg(feature = "timing")]
    pub use crate::timing::*;
}

pub mod error;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "mapping")]
pub mod mapping;

#[cfg(feature = "function")]
pub mod function;

#[cfg(feature = "timing")]
pub mod timing;
