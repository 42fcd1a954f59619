//! Error types for the Bedrock system.
//!
//! Uses `thiserror` for ergonomic error definition. Every error carries a
//! closed [`ErrorKind`], the cause it wraps, and any number of suggestions.

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

/// The underlying cause of an [`Error`]: another error or a bare message.
pub type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// Result alias used across Bedrock.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Bedrock operations.
#[derive(Debug, Error)]
#[error("{kind}: {cause}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// What went wrong, exposed through [`StdError::source`].
    #[source]
    pub cause: Cause,
    /// Human hints, one entry per [`Error::add_suggestion`] call.
    pub suggestions: Vec<String>,
}

impl Error {
    /// Creates a new error with the given kind and cause.
    #[must_use]
    pub fn new(kind: ErrorKind, cause: impl Into<Cause>) -> Self {
        Self {
            kind,
            cause: cause.into(),
            suggestions: Vec::new(),
        }
    }

    /// An absent operand reached an equality check.
    #[must_use]
    pub fn nil_comparison(name: &str) -> Self {
        tracing::debug!(operand = name, "nil comparison");
        Self::new(ErrorKind::NilComparison, "nil values cannot be compared")
            .add_suggestion(&[format!("ensure that data entity ({name}) is not nil").as_str()])
    }

    /// An argument violates a precondition.
    #[must_use]
    pub fn invalid_call(name: &str, cause: impl Into<Cause>) -> Self {
        Self::new(ErrorKind::InvalidCall, cause)
            .add_suggestion(&[format!("ensure that data entity ({name}) is valid").as_str()])
    }

    /// A required value is absent.
    #[must_use]
    pub fn nil_value() -> Self {
        Self::new(ErrorKind::NilValue, "value expected to be non-nil")
    }

    /// An object's own invariant is broken.
    #[must_use]
    pub fn invalid_state(state: &str, cause: impl Into<Cause>) -> Self {
        Self::new(
            ErrorKind::InvalidState,
            StateError {
                state: state.to_string(),
                reason: cause.into(),
            },
        )
    }

    /// A value lies outside its valid domain.
    #[must_use]
    pub fn illegal_argument(cause: impl Into<Cause>) -> Self {
        Self::new(ErrorKind::IllegalArgument, cause)
    }

    /// Wraps a value recovered from an unexpected panic.
    #[must_use]
    pub fn panic(payload: Box<dyn Any + Send>) -> Self {
        Self::new(ErrorKind::Panic, PanicError::new(payload))
    }

    /// Appends one suggestion; the parts are joined by a space.
    #[must_use]
    pub fn add_suggestion(mut self, parts: &[&str]) -> Self {
        self.suggestions.push(parts.join(" "));
        self
    }

    /// Replaces the cause of this error.
    #[must_use]
    pub fn with_reason(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = cause.into();
        self
    }

    /// Renders the error followed by its suggestions, one per line.
    #[must_use]
    pub fn report(&self) -> String {
        let mut out = self.to_string();
        for suggestion in &self.suggestions {
            out.push_str("\nhint: ");
            out.push_str(suggestion);
        }
        out
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An absent value was used in a comparison.
    NilComparison,
    /// A function was called with an invalid argument.
    InvalidCall,
    /// A value was absent where one was required.
    NilValue,
    /// An object is in a state that breaks its invariants.
    InvalidState,
    /// An argument is outside its valid domain.
    IllegalArgument,
    /// An arbitrary value was recovered from a panic.
    Panic,
}

impl ErrorKind {
    /// The fixed code label of this kind.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NilComparison => "NilComparison",
            Self::InvalidCall => "InvalidCall",
            Self::NilValue => "NilValue",
            Self::InvalidState => "InvalidState",
            Self::IllegalArgument => "IllegalArgument",
            Self::Panic => "Panic",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cause of an [`ErrorKind::InvalidState`] error.
#[derive(Debug, Error)]
#[error("state ({state}) is invalid: {reason}")]
pub struct StateError {
    /// Name of the offending state.
    pub state: String,
    /// Why the state is invalid.
    #[source]
    pub reason: Cause,
}

/// A panic recovered by a bridging combinator.
///
/// Keeps the raw payload so it can be re-raised unchanged.
#[derive(Error)]
#[error("panic: {message}")]
pub struct PanicError {
    message: String,
    payload: Mutex<Option<Box<dyn Any + Send>>>,
}

impl PanicError {
    /// Wraps a raw panic payload.
    #[must_use]
    pub fn new(payload: Box<dyn Any + Send>) -> Self {
        Self {
            message: panic_message(payload.as_ref()),
            payload: Mutex::new(Some(payload)),
        }
    }

    /// Textual form of the recovered value.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Takes the raw payload out. Returns `None` once taken.
    #[must_use]
    pub fn take_payload(&self) -> Option<Box<dyn Any + Send>> {
        self.payload
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl fmt::Debug for PanicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanicError")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Returns the recovered panic if `err` is a Panic-kind error.
#[must_use]
pub fn is_panic(err: &Error) -> Option<&PanicError> {
    if err.kind != ErrorKind::Panic {
        return None;
    }
    err.cause.downcast_ref::<PanicError>()
}

/// Best-effort text of a panic payload.
#[must_use]
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}

/// Message of an optional error.
///
/// An absent error reads as "something went wrong".
#[must_use]
pub fn error_message(err: Option<&dyn StdError>) -> String {
    err.map_or_else(|| "something went wrong".to_string(), ToString::to_string)
}
