//! Core contract, errors, scalar wrappers, and panic bridging for Bedrock.
//!
//! This crate provides:
//! - [`Type`] - The behavioral contract every Bedrock value satisfies
//! - [`Error`] - Categorized errors with causes and suggestions
//! - Scalar wrappers ([`Bool`], [`Int`], [`Enum`], [`Wrap`])
//! - Bridging combinators ([`capture`], [`try_or`], [`try_recoverable`], [`raise`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bridge;
pub mod contract;
pub mod error;
pub mod scalar;

pub use bridge::{ErrHandler, capture, raise, try_or, try_recoverable};
pub use contract::{
    AsAny, Type, clean, clean_slice, contains, deep_copy, ensure, equals, index_of,
};
pub use error::{
    Cause, Error, ErrorKind, PanicError, Result, StateError, error_message, is_panic,
    panic_message,
};
pub use scalar::{Bool, BoolCursor, Enum, Enumer, Int, Wrap};
