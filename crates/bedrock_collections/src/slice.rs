//! Owned, ordered sequence of contract values.

use std::collections::VecDeque;
use std::collections::vec_deque;
use std::fmt;
use std::iter::FromIterator;
use std::sync::atomic::{AtomicU64, Ordering};

use bedrock_foundation::{Error, Result, Type, deep_copy};

use crate::index::Index;

/// Identity of a [`Slice`], carried by every [`Index`] created from it.
///
/// Each slice gets a fresh identity on construction, copy, and deep copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SliceId(u64);

impl SliceId {
    fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SliceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owned sequence of `T`, kept in insertion order.
///
/// Elements are addressed through [`Index`] handles; a handle is only
/// accepted by the slice that created it.
#[derive(Debug)]
pub struct Slice<T> {
    id: SliceId,
    values: VecDeque<T>,
}

impl<T: Type> Default for Slice<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Type> Slice<T> {
    /// Creates an empty slice.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: SliceId::fresh(),
            values: VecDeque::new(),
        }
    }

    /// Cleans the current contents and adopts `values` instead.
    #[must_use]
    pub fn with_value(mut self, values: Vec<T>) -> Self {
        self.clean();
        self.values = values.into();
        self
    }

    /// Identity checked against every [`Index`] handed to this slice.
    #[must_use]
    pub const fn id(&self) -> SliceId {
        self.id
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the slice is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Appends an element.
    pub fn append(&mut self, elem: T) {
        self.values.push_back(elem);
    }

    /// Moves every element of `other` onto the end. No-op when absent.
    pub fn merge(&mut self, other: Option<Slice<T>>) {
        if let Some(other) = other {
            self.values.extend(other.values);
        }
    }

    /// Drops every element, keeping the allocated storage.
    pub fn reset(&mut self) {
        self.values.clear();
    }

    /// Creates an index at position 0 that tracks this slice's size.
    #[must_use]
    pub fn index(&self) -> Index<T> {
        Index::new(self)
    }

    /// Element at `idx`.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidCall` if `idx` belongs to another slice, and with
    /// `IllegalArgument` if its position is past the end.
    pub fn elem_at(&self, idx: &Index<T>) -> Result<&T> {
        let at = idx.position(self)?;
        self.values
            .get(at)
            .ok_or_else(|| Error::illegal_argument("index out of range"))
    }

    /// Replaces the element at `idx`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Same as [`Slice::elem_at`].
    pub fn set_at(&mut self, idx: &Index<T>, elem: T) -> Result<T> {
        let at = idx.position(self)?;
        let slot = self
            .values
            .get_mut(at)
            .ok_or_else(|| Error::illegal_argument("index out of range"))?;
        Ok(std::mem::replace(slot, elem))
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Fails with `IllegalArgument` when the slice is empty.
    pub fn delete_first(&mut self) -> Result<T> {
        self.values
            .pop_front()
            .ok_or_else(|| Error::illegal_argument("slice is empty"))
    }

    /// Returns true if some element equals `elem` under the contract.
    #[must_use]
    pub fn has(&self, elem: &T) -> bool {
        self.values.iter().any(|e| e.equals(elem))
    }

    /// Iterates the elements present at call time, in insertion order.
    pub fn each(&self) -> vec_deque::Iter<'_, T> {
        self.values.iter()
    }
}

impl<T: Type + Clone> Slice<T> {
    /// Copies the elements (not deeply) into a new, independent slice.
    #[must_use]
    pub fn copy(&self) -> Self {
        Self {
            id: SliceId::fresh(),
            values: self.values.clone(),
        }
    }
}

impl<T: Type> fmt::Display for Slice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Slice[")?;
        for (i, elem) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{elem}")?;
        }
        f.write_str("]")
    }
}

impl<T: Type> Type for Slice<T> {
    fn ensure(&self) -> Result<()> {
        self.values.iter().try_for_each(|e| e.ensure())
    }

    fn clean(&mut self) {
        for elem in &mut self.values {
            elem.clean();
        }
        self.values = VecDeque::new();
        tracing::trace!(slice = %self.id, "cleaned slice");
    }

    fn equals(&self, other: &dyn Type) -> bool {
        let Some(other) = other.as_any().downcast_ref::<Self>() else {
            return false;
        };
        self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| a.equals(b))
    }

    fn deep_copy(&self) -> Result<Box<dyn Type>> {
        let values = self
            .values
            .iter()
            .map(deep_copy)
            .collect::<Result<VecDeque<T>>>()?;
        Ok(Box::new(Self {
            id: SliceId::fresh(),
            values,
        }))
    }
}

impl<T: Type> FromIterator<T> for Slice<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            id: SliceId::fresh(),
            values: iter.into_iter().collect(),
        }
    }
}

impl<T: Type> From<Vec<T>> for Slice<T> {
    fn from(values: Vec<T>) -> Self {
        Self {
            id: SliceId::fresh(),
            values: values.into(),
        }
    }
}

impl<'a, T: Type> IntoIterator for &'a Slice<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
