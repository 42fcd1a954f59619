//! Integration tests for panic bridging
//!
//! Tests capture, try_or, try_recoverable, and raise.

use std::panic;

use bedrock_foundation::{
    Error, ErrorKind, Result, capture, is_panic, panic_message, raise, try_or, try_recoverable,
};

fn plain_panic() -> Result<i32> {
    panic!("plain string")
}

fn contract_failure() -> Result<i32> {
    Err(Error::illegal_argument("bad input"))
}

// =============================================================================
// Capture
// =============================================================================

#[test]
fn capture_passes_success_through() {
    assert_eq!(capture(|| Ok(3)).unwrap(), 3);
}

#[test]
fn capture_wraps_plain_panic() {
    let err = capture(plain_panic).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Panic);
    assert_eq!(is_panic(&err).unwrap().message(), "plain string");
}

#[test]
fn capture_recovers_raised_error_unchanged() {
    let err = capture(|| -> Result<()> { raise(Error::nil_value()) }).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NilValue);
    assert!(is_panic(&err).is_none());
}

// =============================================================================
// Try
// =============================================================================

#[test]
fn try_without_handler_reraises_raw_payload() {
    let payload = panic::catch_unwind(|| try_or(plain_panic, None)).unwrap_err();
    assert_eq!(panic_message(payload.as_ref()), "plain string");
    assert!(payload.downcast_ref::<Error>().is_none());
}

#[test]
fn try_without_handler_reraises_error() {
    let payload = panic::catch_unwind(|| try_or(contract_failure, None)).unwrap_err();
    let err = payload.downcast_ref::<Error>().unwrap();
    assert_eq!(err.kind, ErrorKind::IllegalArgument);
}

#[test]
fn try_with_handler_substitutes() {
    let value = try_or(plain_panic, Some(Box::new(|_: Error| -1)));
    assert_eq!(value, -1);

    let value = try_or(contract_failure, Some(Box::new(|err: Error| {
        assert_eq!(err.kind, ErrorKind::IllegalArgument);
        0
    })));
    assert_eq!(value, 0);
}

#[test]
fn try_success_ignores_handler() {
    let value = try_or(|| Ok(9), Some(Box::new(|_: Error| 0)));
    assert_eq!(value, 9);
}

// =============================================================================
// Try Recoverable
// =============================================================================

#[test]
fn try_recoverable_handles_contract_errors() {
    let value = try_recoverable(contract_failure, Some(Box::new(|_: Error| 11)));
    assert_eq!(value, 11);
}

#[test]
fn try_recoverable_reraises_panics_despite_handler() {
    let payload = panic::catch_unwind(|| {
        try_recoverable(plain_panic, Some(Box::new(|_: Error| 0)))
    })
    .unwrap_err();
    assert_eq!(panic_message(payload.as_ref()), "plain string");
}
