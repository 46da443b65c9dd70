//! Timer-based function decorators.
//!
//! These decorators defer work onto the ambient tokio runtime, so they must
//! be used from inside one:
//!
//! - [`delay`]: run a function once, no earlier than a given wait
//! - [`throttle`]: run a function at most once per window, with a trailing call
//!
//! Timer activity is reported through `tracing` at `debug` and `trace` level.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use toolbelt::timing::{delay, throttle};
//!
//! # tokio::runtime::Builder::new_current_thread().enable_time().start_paused(true).build().unwrap().block_on(async {
//! let save = throttle(|document: &'static str| document.len(), Duration::from_secs(1));
//! assert_eq!(save.call("draft"), Some(5));
//!
//! let reminder = delay(|_: ()| "stand up", Duration::from_secs(60), ());
//! assert_eq!(reminder.await, Ok("stand up"));
//! # });
//! ```

mod delay;
mod throttle;

pub use delay::{Delayed, delay};
pub use throttle::{Throttle, throttle};
