//! Synchronous function decorators.
//!
//! Each decorator takes a function and returns a wrapper object whose `call`
//! method runs the function with modified semantics. The wrapper owns its
//! private state; nothing is shared between wrappers.
//!
//! - [`once`]: run at most once, then replay the first result
//! - [`memoize`]: cache one result per distinct argument
//!
//! Multi-argument functions take their arguments as a tuple.
//!
//! For the timer-based decorators `delay` and `throttle`, see the `timing`
//! module.

mod memoize;
mod once;

pub use memoize::{Memoize, memoize};
pub use once::{Once, OnceState, once};
