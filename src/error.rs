//! Error types for the toolbelt.
//!
//! Almost every operation in this crate is total over well-typed input, so the
//! error surface is deliberately small:
//!
//! - [`ToolkitError`]: failures of the synchronous collection operations
//! - [`DelayError`]: the outcome of awaiting a [`Delayed`](crate::timing::Delayed)
//!   handle whose call never produced a value

use std::fmt;

/// Represents errors raised by the collection operations.
///
/// # Examples
///
/// ```rust
/// use toolbelt::error::ToolkitError;
///
/// let error = ToolkitError::InvalidArgument {
///     operation: "sort_by",
///     reason: "cannot sort an empty sequence",
/// };
/// assert_eq!(
///     format!("{error}"),
///     "sort_by: invalid argument: cannot sort an empty sequence"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolkitError {
    /// An argument was outside the domain of the operation.
    InvalidArgument {
        /// The name of the operation that rejected the argument.
        operation: &'static str,
        /// Why the argument was rejected.
        reason: &'static str,
    },
    /// `invoke` was asked to call a method the record does not expose.
    UnknownMethod {
        /// The requested method name.
        name: String,
    },
}

impl ToolkitError {
    pub(crate) const fn empty_sequence(operation: &'static str) -> Self {
        Self::InvalidArgument {
            operation,
            reason: "cannot sort an empty sequence",
        }
    }
}

impl fmt::Display for ToolkitError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { operation, reason } => {
                write!(formatter, "{operation}: invalid argument: {reason}")
            }
            Self::UnknownMethod { name } => {
                write!(formatter, "invoke: record has no method named `{name}`")
            }
        }
    }
}

impl std::error::Error for ToolkitError {}

/// Represents why a delayed call did not produce a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayError {
    /// The call was cancelled before it ran.
    Cancelled,
    /// The delayed function panicked.
    Panicked,
}

impl fmt::Display for DelayError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => write!(formatter, "delayed call was cancelled before it ran"),
            Self::Panicked => write!(formatter, "delayed call panicked"),
        }
    }
}

impl std::error::Error for DelayError {}
