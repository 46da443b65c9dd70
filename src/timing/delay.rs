//! Deferred one-shot calls.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::trace;

use crate::error::DelayError;

/// A handle to a call scheduled with [`delay`].
///
/// Awaiting the handle yields the function's result once it has run.
/// Dropping the handle does not cancel the call; use [`cancel`](Self::cancel)
/// for that.
#[derive(Debug)]
pub struct Delayed<R> {
    handle: JoinHandle<R>,
}

impl<R> Delayed<R> {
    /// Cancels the call if it has not run yet.
    ///
    /// Awaiting a cancelled handle yields [`DelayError::Cancelled`].
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Returns `true` once the call has run, panicked, or been cancelled.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl<R> Future for Delayed<R> {
    type Output = Result<R, DelayError>;

    fn poll(mut self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.handle).poll(context).map(|outcome| {
            outcome.map_err(|error| {
                if error.is_cancelled() {
                    DelayError::Cancelled
                } else {
                    DelayError::Panicked
                }
            })
        })
    }
}

/// Runs `function(arguments)` no earlier than `wait` from now.
///
/// Returns immediately; the call happens on a task spawned onto the current
/// tokio runtime. Pass several arguments as a tuple.
///
/// # Panics
///
/// If called outside a tokio runtime.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use toolbelt::timing::delay;
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let greeting = delay(
///     |(greeting, name): (&str, &str)| format!("{greeting}, {name}"),
///     Duration::from_millis(10),
///     ("hello", "world"),
/// );
/// assert_eq!(greeting.await, Ok("hello, world".to_string()));
/// # });
/// ```
pub fn delay<A, R, F>(function: F, wait: Duration, arguments: A) -> Delayed<R>
where
    A: Send + 'static,
    R: Send + 'static,
    F: FnOnce(A) -> R + Send + 'static,
{
    trace!(?wait, "scheduling delayed call");
    let handle = tokio::spawn(async move {
        tokio::time::sleep(wait).await;
        trace!("running delayed call");
        function(arguments)
    });
    Delayed { handle }
}
