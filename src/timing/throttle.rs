//! Rate limiting with a trailing call.
//!
//! A [`Throttle`] moves between two phases:
//!
//! ```text
//!            call: run now, arm timer
//!   Idle ─────────────────────────────> WindowOpen ──┐ call: remember argument
//!    ^                                   │    ^      │
//!    │ timer, nothing pending            │    └──────┘
//!    └───────────────────────────────────┘
//!                                        timer, argument pending:
//!                                        run it, re-arm timer
//! ```
//!
//! The wrapped function is never run while the state lock is held.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    WindowOpen,
}

struct ThrottleState<A, R> {
    phase: Phase,
    pending: Option<A>,
    last: Option<R>,
}

type SharedFunction<A, R> = Arc<dyn Fn(A) -> R + Send + Sync>;

/// Closes the window if the wrapped function unwinds, so that a panicking
/// call does not leave the throttle open forever.
struct IdleOnUnwind<'s, A, R> {
    state: &'s Mutex<ThrottleState<A, R>>,
}

impl<A, R> Drop for IdleOnUnwind<'_, A, R> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            let mut state = self.state.lock();
            state.phase = Phase::Idle;
            state.pending = None;
        }
    }
}

/// A function wrapper that runs its function at most once per window.
///
/// The first call in a quiet period runs the function immediately and opens a
/// window of `wait`. Calls that arrive while the window is open do not run the
/// function; the latest of their arguments is kept. When the window closes
/// with an argument pending, the function runs again with it and a new window
/// opens. Every call returns the most recently computed result.
///
/// Clones share the same window and result.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use toolbelt::timing::throttle;
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().start_paused(true).build().unwrap().block_on(async {
/// let double = throttle(|number: i32| number * 2, Duration::from_millis(100));
///
/// assert_eq!(double.call(1), Some(2));
/// // Inside the window: the previous result comes back, 5 is kept for later.
/// assert_eq!(double.call(5), Some(2));
///
/// tokio::time::sleep(Duration::from_millis(150)).await;
/// assert_eq!(double.last_result(), Some(10));
/// # });
/// ```
pub struct Throttle<A, R> {
    function: SharedFunction<A, R>,
    state: Arc<Mutex<ThrottleState<A, R>>>,
    wait: Duration,
}

impl<A, R> Clone for Throttle<A, R> {
    fn clone(&self) -> Self {
        Self {
            function: Arc::clone(&self.function),
            state: Arc::clone(&self.state),
            wait: self.wait,
        }
    }
}

impl<A, R> Throttle<A, R>
where
    A: Send + 'static,
    R: Clone + Send + 'static,
{
    /// Wraps `function` so that it runs at most once per `wait`.
    pub fn new<F>(function: F, wait: Duration) -> Self
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        Self {
            function: Arc::new(function),
            state: Arc::new(Mutex::new(ThrottleState {
                phase: Phase::Idle,
                pending: None,
                last: None,
            })),
            wait,
        }
    }

    /// Calls the function now, or schedules a trailing call.
    ///
    /// Returns the most recently computed result, which is `Some` whenever
    /// the function has run at least once. Inside an open window the result
    /// may lag behind the arguments of the latest call.
    ///
    /// # Panics
    ///
    /// If called outside a tokio runtime.
    pub fn call(&self, argument: A) -> Option<R> {
        {
            let mut state = self.state.lock();
            if state.phase == Phase::WindowOpen {
                trace!("throttled call deferred to end of window");
                state.pending = Some(argument);
                return state.last.clone();
            }
            state.phase = Phase::WindowOpen;
        }

        debug!(wait = ?self.wait, "throttle window opened");
        let result = {
            let _guard = IdleOnUnwind { state: &self.state };
            (self.function)(argument)
        };
        self.state.lock().last = Some(result.clone());
        self.arm_timer();
        Some(result)
    }

    fn arm_timer(&self) {
        let function = Arc::clone(&self.function);
        let state = Arc::clone(&self.state);
        let wait = self.wait;
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(wait).await;
                let pending = {
                    let mut guard = state.lock();
                    let pending = guard.pending.take();
                    if pending.is_none() {
                        guard.phase = Phase::Idle;
                    }
                    pending
                };
                let Some(argument) = pending else {
                    debug!("throttle window closed");
                    break;
                };
                trace!("running trailing throttled call");
                let result = {
                    let _guard = IdleOnUnwind { state: &state };
                    function(argument)
                };
                state.lock().last = Some(result);
            }
        });
    }
}

impl<A, R: Clone> Throttle<A, R> {
    /// Returns the most recently computed result without calling.
    pub fn last_result(&self) -> Option<R> {
        self.state.lock().last.clone()
    }
}

impl<A, R> Throttle<A, R> {
    /// Returns the window length.
    pub const fn wait(&self) -> Duration {
        self.wait
    }

    /// Returns `true` while a window is open.
    pub fn is_window_open(&self) -> bool {
        self.state.lock().phase == Phase::WindowOpen
    }

    /// Returns `true` if a trailing call is waiting for the window to close.
    pub fn has_pending_call(&self) -> bool {
        self.state.lock().pending.is_some()
    }
}

impl<A, R> fmt::Debug for Throttle<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        formatter
            .debug_struct("Throttle")
            .field("wait", &self.wait)
            .field("phase", &state.phase)
            .field("pending", &state.pending.is_some())
            .finish_non_exhaustive()
    }
}

/// Wraps `function` so that it runs at most once per `wait`.
///
/// Shorthand for [`Throttle::new`].
pub fn throttle<A, R, F>(function: F, wait: Duration) -> Throttle<A, R>
where
    A: Send + 'static,
    R: Clone + Send + 'static,
    F: Fn(A) -> R + Send + Sync + 'static,
{
    Throttle::new(function, wait)
}

static_assertions::assert_impl_all!(Throttle<i32, String>: Send, Sync, Clone);
