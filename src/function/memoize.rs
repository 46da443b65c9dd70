//! Result caching keyed by argument.
//!
//! The cache is unbounded and never evicted. With the `fxhash` feature it is
//! an `FxHashMap`, with `ahash` an `AHashMap`, otherwise a std `HashMap`.

use std::cell::RefCell;
use std::fmt;
use std::hash::Hash;

#[cfg(feature = "fxhash")]
type Cache<A, R> = rustc_hash::FxHashMap<A, R>;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type Cache<A, R> = ahash::AHashMap<A, R>;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type Cache<A, R> = std::collections::HashMap<A, R>;

/// A function wrapper that caches one result per distinct argument.
///
/// On each [`call`](Memoize::call), a previously seen argument returns its
/// cached result; a new argument runs the function and caches the result.
///
/// # Thread Safety
///
/// This type is NOT thread-safe; the cache lives in a `RefCell`.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use toolbelt::function::memoize;
///
/// let calls = Cell::new(0);
/// let square = memoize(|number: u64| {
///     calls.set(calls.get() + 1);
///     number * number
/// });
///
/// assert_eq!(square.call(12), 144);
/// assert_eq!(square.call(12), 144);
/// assert_eq!(square.call(3), 9);
/// assert_eq!(calls.get(), 2);
/// ```
pub struct Memoize<A, R, F> {
    function: F,
    cache: RefCell<Cache<A, R>>,
}

impl<A, R, F> Memoize<A, R, F>
where
    A: Hash + Eq + Clone,
    R: Clone,
    F: Fn(A) -> R,
{
    /// Wraps `function` with an empty cache.
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: RefCell::new(Cache::default()),
        }
    }

    /// Returns the cached result for `argument`, computing it on first use.
    ///
    /// # Panics
    ///
    /// If the function calls this same wrapper while it runs.
    pub fn call(&self, argument: A) -> R {
        if let Some(cached) = self.cache.borrow().get(&argument) {
            return cached.clone();
        }
        let result = (self.function)(argument.clone());
        self.cache.borrow_mut().insert(argument, result.clone());
        result
    }

    /// Returns `true` if a result for `argument` is cached.
    pub fn is_cached(&self, argument: &A) -> bool {
        self.cache.borrow().contains_key(argument)
    }
}

impl<A, R, F> Memoize<A, R, F> {
    /// Returns the number of cached results.
    pub fn cache_len(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<A, R, F> fmt::Debug for Memoize<A, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoize")
            .field("cache_len", &self.cache_len())
            .finish_non_exhaustive()
    }
}

/// Wraps `function` with an unbounded result cache.
///
/// Shorthand for [`Memoize::new`].
pub fn memoize<A, R, F>(function: F) -> Memoize<A, R, F>
where
    A: Hash + Eq + Clone,
    R: Clone,
    F: Fn(A) -> R,
{
    Memoize::new(function)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memoize_distinguishes_arguments() {
        let shout = memoize(|word: String| word.to_uppercase());
        assert_eq!(shout.call("hi".to_string()), "HI");
        assert_eq!(shout.call("yo".to_string()), "YO");
        assert_eq!(shout.cache_len(), 2);
        assert!(shout.is_cached(&"hi".to_string()));
        assert!(!shout.is_cached(&"hey".to_string()));
    }

    #[test]
    fn test_memoize_debug() {
        let identity = memoize(|value: u8| value);
        identity.call(1);
        assert_eq!(format!("{identity:?}"), "Memoize { cache_len: 1, .. }");
    }
}
