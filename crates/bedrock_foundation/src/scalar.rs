//! Single-value wrappers implementing the Type contract.
//!
//! Equality between wrappers requires the same concrete wrapper type and the
//! same value. None of these own anything beyond their value, so `clean` is a
//! no-op and `ensure` always succeeds.

use std::fmt;

use crate::contract::Type;
use crate::error::Result;

// =============================================================================
// Bool
// =============================================================================

/// A boolean flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bool {
    value: bool,
}

impl Bool {
    /// Creates a flag set to false.
    #[must_use]
    pub const fn new() -> Self {
        Self { value: false }
    }

    /// Returns a flag holding `value`.
    #[must_use]
    pub const fn with_value(self, value: bool) -> Self {
        Self { value }
    }

    /// The flag value.
    #[must_use]
    pub const fn value(self) -> bool {
        self.value
    }

    /// Overwrites the flag value.
    pub fn set(&mut self, value: bool) {
        self.value = value;
    }

    /// Starts a cursor over a copy of this flag.
    ///
    /// The cursor keeps yielding the same handle while the flag is true. The
    /// consumer stops it by setting the yielded handle to false; there is no
    /// other limit.
    #[must_use]
    pub const fn each(self) -> BoolCursor {
        BoolCursor { flag: self }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Type for Bool {
    fn ensure(&self) -> Result<()> {
        Ok(())
    }

    fn clean(&mut self) {}

    fn equals(&self, other: &dyn Type) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|o| o.value == self.value)
    }

    fn deep_copy(&self) -> Result<Box<dyn Type>> {
        Ok(Box::new(*self))
    }
}

/// Lending cursor produced by [`Bool::each`].
///
/// Every step hands out the same mutable flag. Mutating it through the
/// handle is how the loop terminates:
///
/// ```
/// use bedrock_foundation::Bool;
///
/// let mut cursor = Bool::new().with_value(true).each();
/// let mut steps = 0;
/// while let Some(flag) = cursor.next() {
///     steps += 1;
///     flag.set(steps != 3);
/// }
/// assert_eq!(steps, 3);
/// ```
#[derive(Debug)]
pub struct BoolCursor {
    flag: Bool,
}

impl BoolCursor {
    /// Yields the shared flag while it is true.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&mut Bool> {
        if self.flag.value {
            Some(&mut self.flag)
        } else {
            None
        }
    }

    /// Current state of the shared flag.
    #[must_use]
    pub const fn flag(&self) -> Bool {
        self.flag
    }
}

// =============================================================================
// Int
// =============================================================================

/// A 64-bit signed integer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Int {
    value: i64,
}

impl Int {
    /// Creates an integer holding zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { value: 0 }
    }

    /// Returns an integer holding `value`.
    #[must_use]
    pub const fn with_value(self, value: i64) -> Self {
        Self { value }
    }

    /// The integer value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.value
    }

    /// Overwrites the value.
    pub fn set(&mut self, value: i64) {
        self.value = value;
    }
}

impl From<i64> for Int {
    fn from(value: i64) -> Self {
        Self { value }
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Type for Int {
    fn ensure(&self) -> Result<()> {
        Ok(())
    }

    fn clean(&mut self) {}

    fn equals(&self, other: &dyn Type) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|o| o.value == self.value)
    }

    fn deep_copy(&self) -> Result<Box<dyn Type>> {
        Ok(Box::new(*self))
    }
}

// =============================================================================
// Enum
// =============================================================================

/// A value usable inside [`Enum`]: a small copyable type with a literal form.
pub trait Enumer: Copy + Eq + fmt::Debug + fmt::Display + 'static {}

impl<E: Copy + Eq + fmt::Debug + fmt::Display + 'static> Enumer for E {}

/// An enum-backed value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Enum<E: Enumer> {
    value: E,
}

impl<E: Enumer> Enum<E> {
    /// Creates a wrapper holding `value`.
    #[must_use]
    pub const fn new(value: E) -> Self {
        Self { value }
    }

    /// The wrapped variant.
    #[must_use]
    pub const fn value(&self) -> E {
        self.value
    }

    /// Overwrites the variant.
    pub fn set(&mut self, value: E) {
        self.value = value;
    }
}

impl<E: Enumer> fmt::Display for Enum<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<E: Enumer> Type for Enum<E> {
    fn ensure(&self) -> Result<()> {
        Ok(())
    }

    fn clean(&mut self) {}

    fn equals(&self, other: &dyn Type) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|o| o.value == self.value)
    }

    fn deep_copy(&self) -> Result<Box<dyn Type>> {
        Ok(Box::new(*self))
    }
}

// =============================================================================
// Wrap
// =============================================================================

/// Wraps an arbitrary comparable value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Wrap<T> {
    value: T,
}

impl<T: PartialEq + Clone + fmt::Debug + 'static> Wrap<T> {
    /// Creates a wrapper holding `value`.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Borrows the wrapped value.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Overwrites the wrapped value.
    pub fn set(&mut self, value: T) {
        self.value = value;
    }

    /// Unwraps the value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: fmt::Debug> fmt::Display for Wrap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.value)
    }
}

impl<T: PartialEq + Clone + fmt::Debug + 'static> Type for Wrap<T> {
    fn ensure(&self) -> Result<()> {
        Ok(())
    }

    fn clean(&mut self) {}

    fn equals(&self, other: &dyn Type) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|o| o.value == self.value)
    }

    fn deep_copy(&self) -> Result<Box<dyn Type>> {
        Ok(Box::new(self.clone()))
    }
}
