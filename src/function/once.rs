//! One-shot execution.
//!
//! # Examples
//!
//! ```rust
//! use toolbelt::function::once;
//!
//! let initialize = once(|name: &str| format!("initialized by {name}"));
//!
//! assert_eq!(initialize.call("first"), "initialized by first");
//! // Later calls return the first result, whatever their argument.
//! assert_eq!(initialize.call("second"), "initialized by first");
//! ```

use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;

/// The internal state of a [`Once`] wrapper.
#[derive(Debug)]
pub enum OnceState<F, R> {
    /// The function has not run yet.
    /// Contains the function.
    Pending(F),
    /// The function has run.
    /// Contains its result.
    Called(R),
    /// The function panicked.
    /// The wrapper is now unusable.
    Poisoned,
}

/// A function wrapper that runs its function at most once.
///
/// The first [`call`](Once::call) runs the function with its argument and
/// caches the result. Every later call returns a clone of that result and
/// ignores its argument. The cached state lives exactly as long as the
/// wrapper; two wrappers around the same function do not share it.
///
/// # Type Parameters
///
/// * `A` - The argument type (use a tuple for several arguments)
/// * `R` - The result type
/// * `F` - The wrapped function
///
/// # Thread Safety
///
/// This type is NOT thread-safe. For concurrent one-shot initialization,
/// consider `std::sync::OnceLock`.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use toolbelt::function::once;
///
/// let calls = Cell::new(0);
/// let add_once = once(|(left, right): (i32, i32)| {
///     calls.set(calls.get() + 1);
///     left + right
/// });
///
/// assert_eq!(add_once.call((1, 2)), 3);
/// assert_eq!(add_once.call((10, 20)), 3);
/// assert_eq!(calls.get(), 1);
/// ```
pub struct Once<A, R, F> {
    state: RefCell<OnceState<F, R>>,
    argument: PhantomData<fn(A)>,
}

impl<A, R, F> Once<A, R, F>
where
    R: Clone,
    F: FnOnce(A) -> R,
{
    /// Wraps `function` so that it runs at most once.
    #[inline]
    pub const fn new(function: F) -> Self {
        Self {
            state: RefCell::new(OnceState::Pending(function)),
            argument: PhantomData,
        }
    }

    /// Runs the function on the first call, then returns its cached result.
    ///
    /// # Panics
    ///
    /// - If the function panics, the wrapper becomes poisoned and the panic
    ///   propagates. Every later call panics as well.
    /// - If the function calls this same wrapper while it runs.
    pub fn call(&self, argument: A) -> R {
        let function = {
            let mut state = self.state.borrow_mut();
            match std::mem::replace(&mut *state, OnceState::Poisoned) {
                OnceState::Pending(function) => function,
                OnceState::Called(result) => {
                    let cached = result.clone();
                    *state = OnceState::Called(result);
                    return cached;
                }
                OnceState::Poisoned => panic!("Once instance has been poisoned"),
            }
        };
        // The state stays `Poisoned` if the function unwinds.
        let result = function(argument);
        *self.state.borrow_mut() = OnceState::Called(result.clone());
        result
    }
}

impl<A, R, F> Once<A, R, F> {
    /// Returns `true` once the function has run to completion.
    #[inline]
    pub fn is_called(&self) -> bool {
        matches!(*self.state.borrow(), OnceState::Called(_))
    }

    /// Returns `true` if the function panicked.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(*self.state.borrow(), OnceState::Poisoned)
    }

    /// Consumes the wrapper and returns the cached result, if any.
    pub fn into_result(self) -> Option<R> {
        match self.state.into_inner() {
            OnceState::Called(result) => Some(result),
            OnceState::Pending(_) | OnceState::Poisoned => None,
        }
    }
}

impl<A, R: fmt::Debug, F> fmt::Debug for Once<A, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            OnceState::Pending(_) => formatter.write_str("Once(<pending>)"),
            OnceState::Called(result) => formatter.debug_tuple("Once").field(result).finish(),
            OnceState::Poisoned => formatter.write_str("Once(<poisoned>)"),
        }
    }
}

/// Wraps `function` so that it runs at most once.
///
/// Shorthand for [`Once::new`].
#[inline]
pub const fn once<A, R, F>(function: F) -> Once<A, R, F>
where
    R: Clone,
    F: FnOnce(A) -> R,
{
    Once::new(function)
}
