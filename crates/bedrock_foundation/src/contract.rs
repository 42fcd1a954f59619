//! The Type contract every Bedrock value satisfies, plus generic helpers.
//!
//! A value that implements [`Type`] can validate its own invariants, release
//! what it owns, compare itself structurally against any other contract
//! value, and produce an independent copy of itself.

use std::any::Any;
use std::fmt;

use crate::error::{Error, Result};

/// Dynamic-typing support for [`Type`].
///
/// Blanket-implemented for every `'static` type; never implement it by hand.
pub trait AsAny: Any {
    /// Borrows `self` as [`Any`] for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Converts a boxed value into a boxed [`Any`].
    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Name of the concrete type, for diagnostics.
    fn type_name(&self) -> &'static str;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// The behavioral contract shared by all values and containers.
pub trait Type: AsAny + fmt::Display {
    /// Validates internal invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidState`](crate::ErrorKind::InvalidState)
    /// when an invariant is broken.
    fn ensure(&self) -> Result<()>;

    /// Releases owned resources. Must be idempotent.
    fn clean(&mut self);

    /// Structural equality.
    ///
    /// A value of a different concrete type is never equal; this never fails.
    fn equals(&self, other: &dyn Type) -> bool;

    /// Returns a new, fully independent instance equal to `self`.
    ///
    /// # Errors
    ///
    /// Fails when a part of the value cannot be copied.
    fn deep_copy(&self) -> Result<Box<dyn Type>>;
}

/// Cleans `x`, doing nothing when it is absent.
pub fn clean<T: Type + ?Sized>(x: Option<&mut T>) {
    if let Some(x) = x {
        x.clean();
    }
}

/// Validates `x`.
///
/// # Errors
///
/// Fails with [`ErrorKind::InvalidCall`](crate::ErrorKind::InvalidCall)
/// wrapping a nil value when `x` is absent and `allow_nil` is false, and with
/// whatever `x.ensure()` reports otherwise.
pub fn ensure<T: Type + ?Sized>(allow_nil: bool, x: Option<&T>) -> Result<()> {
    match x {
        Some(x) => x.ensure(),
        None if allow_nil => Ok(()),
        None => Err(Error::invalid_call("x", Error::nil_value())),
    }
}

/// Compares two optional contract values.
///
/// # Errors
///
/// Fails with [`ErrorKind::NilComparison`](crate::ErrorKind::NilComparison)
/// if either operand is absent.
pub fn equals(a: Option<&dyn Type>, b: Option<&dyn Type>) -> Result<bool> {
    let a = a.ok_or_else(|| Error::nil_comparison("a"))?;
    let b = b.ok_or_else(|| Error::nil_comparison("b"))?;
    Ok(a.equals(b))
}

/// Deep-copies `x` and checks the copy has the same concrete type.
///
/// # Errors
///
/// Propagates the copy's own failure, and fails with
/// [`ErrorKind::InvalidState`](crate::ErrorKind::InvalidState) when the copy
/// is of another type.
pub fn deep_copy<T: Type>(x: &T) -> Result<T> {
    let copy = x.deep_copy()?;
    let found = (*copy).type_name();
    copy.into_any().downcast::<T>().map(|b| *b).map_err(|_| {
        Error::invalid_state(
            "copy",
            format!("invalid type: expected {}, got {found}", x.type_name()),
        )
    })
}

/// Cleans every element and hands back a detached, empty vector.
///
/// The input is consumed; callers keep only the returned handle.
#[must_use]
pub fn clean_slice<T: Type>(mut elems: Vec<T>) -> Vec<T> {
    for elem in &mut elems {
        elem.clean();
    }
    Vec::new()
}

/// Returns true if any element equals `elem` under the contract.
#[must_use]
pub fn contains<T: Type>(elems: &[T], elem: &T) -> bool {
    index_of(elems, elem).is_some()
}

/// Position of the first element equal to `elem` under the contract.
#[must_use]
pub fn index_of<T: Type>(elems: &[T], elem: &T) -> Option<usize> {
    elems.iter().position(|e| e.equals(elem))
}
