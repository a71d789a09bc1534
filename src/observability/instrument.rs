//! Entry/exit/error logging wrappers.
//!
//! # Responsibilities
//! - Emit a debug event (name + arguments) before a wrapped call
//! - Emit a debug event after it returns
//! - For fallible calls, emit an error event and hand the error back
//!   to the caller unchanged
//!
//! # Design Decisions
//! - Plain generic combinators over `FnOnce`; no state
//! - Arguments are captured via their `Debug` rendering

use std::fmt::Debug;
use std::fmt::Display;

/// Wrap an infallible call with entry and exit debug events.
pub fn logged<A, R, F>(name: &str, args: &A, f: F) -> R
where
    A: Debug + ?Sized,
    F: FnOnce() -> R,
{
    tracing::debug!(function = name, args = ?args, "entering");
    let result = f();
    tracing::debug!(function = name, "exiting");
    result
}

/// Wrap a fallible call: entry and exit debug events on success, an
/// error event on failure. The error is returned unchanged.
pub fn try_logged<A, T, E, F>(name: &str, args: &A, f: F) -> Result<T, E>
where
    A: Debug + ?Sized,
    E: Display,
    F: FnOnce() -> Result<T, E>,
{
    tracing::debug!(function = name, args = ?args, "entering");
    match f() {
        Ok(value) => {
            tracing::debug!(function = name, "exiting");
            Ok(value)
        }
        Err(err) => {
            tracing::error!(function = name, error = %err, "call failed");
            Err(err)
        }
    }
}
