//! Bounded cursors into a [`Slice`].
//!
//! An [`Index`] does not own or borrow the slice it points into. It records
//! the slice's [`SliceId`] and is checked against the slice on every use, so
//! a handle can never reach into a slice it was not created for and can
//! outlive its slice without dangling.

use std::fmt;
use std::marker::PhantomData;

use bedrock_foundation::{Error, Result, Type};

use crate::slice::{Slice, SliceId};

/// Cursor position into a [`Slice`] with an optional upper bound.
///
/// Without an explicit bound the cursor tracks the slice's live size.
/// Two indexes are equal when they point at the same position of the same
/// slice; the bound does not take part.
pub struct Index<T> {
    value: usize,
    max: Option<usize>,
    owner: Option<SliceId>,
    _elem: PhantomData<fn() -> T>,
}

impl<T> Clone for Index<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Index<T> {}

impl<T> fmt::Debug for Index<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Index")
            .field("value", &self.value)
            .field("max", &self.max)
            .field("owner", &self.owner)
            .finish()
    }
}

impl<T: Type> Index<T> {
    /// Creates an index at position 0 of `slice`, without a bound.
    #[must_use]
    pub fn new(slice: &Slice<T>) -> Self {
        Self {
            value: 0,
            max: None,
            owner: Some(slice.id()),
            _elem: PhantomData,
        }
    }

    /// The slice this index was created from, until cleaned.
    #[must_use]
    pub const fn owner(&self) -> Option<SliceId> {
        self.owner
    }

    /// Current position.
    #[must_use]
    pub const fn value(&self) -> usize {
        self.value
    }

    /// Returns this index moved to `value`.
    ///
    /// # Errors
    ///
    /// Fails with `IllegalArgument` unless `value` is below the effective
    /// bound, and with `InvalidCall` if `slice` is not this index's slice.
    pub fn with_value(mut self, slice: &Slice<T>, value: usize) -> Result<Self> {
        self.set(slice, value)?;
        Ok(self)
    }

    /// Moves this index to `value`.
    ///
    /// # Errors
    ///
    /// Same as [`Index::with_value`].
    pub fn set(&mut self, slice: &Slice<T>, value: usize) -> Result<()> {
        let bound = self.bound(slice)?;
        if value >= bound {
            return Err(Error::illegal_argument(format!(
                "value {value} must be less than {bound}"
            )));
        }
        self.value = value;
        Ok(())
    }

    /// Returns this index with an explicit bound.
    ///
    /// # Errors
    ///
    /// Fails with `IllegalArgument` if `max` exceeds the slice's size.
    pub fn with_bound(mut self, slice: &Slice<T>, max: usize) -> Result<Self> {
        self.check(slice)?;
        if max > slice.len() {
            return Err(Error::illegal_argument(format!(
                "max {max} must not exceed slice size {}",
                slice.len()
            )));
        }
        self.max = Some(max);
        Ok(self)
    }

    /// Returns this index tracking the slice's size again.
    #[must_use]
    pub fn without_bound(mut self) -> Self {
        self.max = None;
        self
    }

    /// The effective bound: the explicit one, or the slice's current size.
    ///
    /// # Errors
    ///
    /// Fails if `slice` is not this index's slice.
    pub fn bound(&self, slice: &Slice<T>) -> Result<usize> {
        self.check(slice)?;
        Ok(self.max.unwrap_or_else(|| slice.len()))
    }

    /// Starts a cursor from the current position up to the bound.
    ///
    /// # Errors
    ///
    /// Fails if `slice` is not this index's slice.
    pub fn each(&self, slice: &Slice<T>) -> Result<IndexCursor<T>> {
        self.check(slice)?;
        Ok(IndexCursor {
            index: *self,
            started: false,
        })
    }

    /// Position to read in `slice`, after checking ownership.
    pub(crate) fn position(&self, slice: &Slice<T>) -> Result<usize> {
        self.check(slice)?;
        Ok(self.value)
    }

    fn check(&self, slice: &Slice<T>) -> Result<()> {
        match self.owner {
            None => Err(Error::invalid_state("idx.ref", Error::nil_value())),
            Some(id) if id != slice.id() => Err(Error::invalid_call(
                "idx",
                format!("index refers to a different slice: {id}"),
            )),
            Some(_) => Ok(()),
        }
    }
}

impl<T> fmt::Display for Index<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Index[value={}, max=", self.value)?;
        match self.max {
            Some(max) => write!(f, "{max}")?,
            None => f.write_str("+Inf")?,
        }
        match self.owner {
            Some(id) => write!(f, ", ref={id}]"),
            None => f.write_str(", ref=nil]"),
        }
    }
}

impl<T: Type> Type for Index<T> {
    fn ensure(&self) -> Result<()> {
        match self.owner {
            Some(_) => Ok(()),
            None => Err(Error::invalid_state("idx.ref", Error::nil_value())),
        }
    }

    fn clean(&mut self) {
        self.owner = None;
    }

    fn equals(&self, other: &dyn Type) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|o| o.value == self.value && o.owner == self.owner)
    }

    fn deep_copy(&self) -> Result<Box<dyn Type>> {
        Ok(Box::new(*self))
    }
}

/// Lending cursor produced by [`Index::each`].
///
/// Every step hands out the same mutable index, starting at the position the
/// index had when the cursor was created. The cursor advances by one from
/// whatever position the handle holds, so a consumer that moves the handle
/// (for instance to skip ahead) continues from there. Iteration ends when
/// the position reaches the bound, or when the consumer stops asking.
///
/// ```
/// use bedrock_collections::Slice;
/// use bedrock_foundation::Int;
///
/// let slice: Slice<Int> = (0..6).map(|v| Int::new().with_value(v)).collect();
/// let mut cursor = slice.index().each(&slice).unwrap();
/// let mut seen = Vec::new();
/// while let Some(idx) = cursor.next(&slice).unwrap() {
///     seen.push(slice.elem_at(idx).unwrap().value());
///     if idx.value() == 1 {
///         idx.set(&slice, 3).unwrap();
///     }
/// }
/// assert_eq!(seen, vec![0, 1, 4, 5]);
/// ```
#[derive(Debug)]
pub struct IndexCursor<T> {
    index: Index<T>,
    started: bool,
}

impl<T: Type> IndexCursor<T> {
    /// Advances and yields the shared index, or `None` past the bound.
    ///
    /// # Errors
    ///
    /// Fails if `slice` is not the cursor's slice.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self, slice: &Slice<T>) -> Result<Option<&mut Index<T>>> {
        let bound = self.index.bound(slice)?;
        if self.started {
            self.index.value = self.index.value.saturating_add(1);
        }
        self.started = true;

        if self.index.value < bound {
            Ok(Some(&mut self.index))
        } else {
            Ok(None)
        }
    }

    /// The shared index in its current state.
    #[must_use]
    pub const fn index(&self) -> &Index<T> {
        &self.index
    }
}
