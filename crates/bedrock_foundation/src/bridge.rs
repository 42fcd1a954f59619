//! Bridging between panics and ordinary results.
//!
//! [`capture`] runs a computation and turns both returned errors and
//! recovered panics into an `Err`. [`try_or`] and [`try_recoverable`] build
//! the "try with a fallback handler" pattern on top of it, and [`raise`]
//! re-raises an error as a panic.
//!
//! A panic whose payload is already an [`Error`] comes back as that error.
//! A [`StateError`] or a boxed [`Cause`] payload comes back as an
//! [`ErrorKind::InvalidState`] error wrapping it. Any other payload is
//! wrapped in an [`ErrorKind::Panic`] error that keeps the raw value, so
//! re-raising it unwinds with the exact payload the computation panicked
//! with.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::error::{Cause, Error, ErrorKind, Result, StateError, is_panic};

/// Substitute-result producer for a failed computation.
pub type ErrHandler<'a, O> = Box<dyn FnOnce(Error) -> O + 'a>;

/// Runs `f`, converting a panic into an error.
///
/// # Errors
///
/// Returns the error `f` returned, the [`Error`] it panicked with, or a
/// Panic-kind error wrapping any other panic payload.
pub fn capture<O, F>(f: F) -> Result<O>
where
    F: FnOnce() -> Result<O>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => {
            tracing::debug!(error = %err, "captured error");
            Err(err)
        }
        Err(payload) => {
            let err = recover(payload);
            tracing::debug!(error = %err, "captured panic");
            Err(err)
        }
    }
}

fn recover(payload: Box<dyn Any + Send>) -> Error {
    let payload = match payload.downcast::<Error>() {
        Ok(err) => return *err,
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<StateError>() {
        Ok(state) => return Error::new(ErrorKind::InvalidState, *state),
        Err(payload) => payload,
    };
    match payload.downcast::<Cause>() {
        Ok(cause) => Error::new(ErrorKind::InvalidState, *cause),
        Err(payload) => Error::panic(payload),
    }
}

/// Runs `f` and substitutes the handler's result on failure.
///
/// The handler sees every failure, including unexpected panics. Without a
/// handler the failure is re-raised through [`raise`].
pub fn try_or<O, F>(f: F, handler: Option<ErrHandler<'_, O>>) -> O
where
    F: FnOnce() -> Result<O>,
{
    match capture(f) {
        Ok(value) => value,
        Err(err) => match handler {
            Some(handler) => {
                tracing::debug!(error = %err, "handler substituting result");
                handler(err)
            }
            None => raise(err),
        },
    }
}

/// Like [`try_or`], but only recoverable errors reach the handler.
///
/// A Panic-kind failure always re-raises its original payload, handler or
/// not.
pub fn try_recoverable<O, F>(f: F, handler: Option<ErrHandler<'_, O>>) -> O
where
    F: FnOnce() -> Result<O>,
{
    match capture(f) {
        Ok(value) => value,
        Err(err) if is_panic(&err).is_some() => raise(err),
        Err(err) => match handler {
            Some(handler) => {
                tracing::debug!(error = %err, "handler substituting result");
                handler(err)
            }
            None => raise(err),
        },
    }
}

/// Re-raises `err` as a panic.
///
/// A Panic-kind error whose payload is still present resumes unwinding with
/// that raw payload. Every other error panics with the [`Error`] itself as
/// the payload, which [`capture`] turns back into the same error.
pub fn raise(err: Error) -> ! {
    if let Some(payload) = is_panic(&err).and_then(|p| p.take_payload()) {
        tracing::trace!(error = %err, "resuming original panic");
        panic::resume_unwind(payload);
    }
    tracing::trace!(error = %err, "raising error");
    panic::panic_any(err)
}
