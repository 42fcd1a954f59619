//! Insertion-ordered collection of contract-unique values.

use std::fmt;
use std::iter::FromIterator;
use std::slice;

use bedrock_foundation::{Error, Result, Type, clean_slice, contains, deep_copy};

/// Collection in which no two elements are equal under [`Type::equals`].
///
/// Membership is a linear scan: each insertion is O(n).
#[derive(Debug)]
pub struct Set<T> {
    values: Vec<T>,
}

impl<T: Type> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Type> Set<T> {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Builds a set from `values`, keeping the first of any duplicates.
    #[must_use]
    pub fn from_values(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if an equal element is stored.
    #[must_use]
    pub fn contains(&self, elem: &T) -> bool {
        contains(&self.values, elem)
    }

    /// Adds `elem` unless an equal element is present.
    ///
    /// Returns whether it was added.
    pub fn add(&mut self, elem: T) -> bool {
        if self.contains(&elem) {
            return false;
        }
        self.values.push(elem);
        true
    }

    /// Adds every element of `other` not already present. No-op when absent.
    ///
    /// Returns how many elements were added.
    pub fn union(&mut self, other: Option<Set<T>>) -> usize {
        other.map_or(0, |other| {
            other
                .values
                .into_iter()
                .map(|elem| self.add(elem))
                .filter(|&added| added)
                .count()
        })
    }

    /// Drops every element, keeping the allocated storage.
    pub fn reset(&mut self) {
        self.values.clear();
    }

    /// Iterates the elements present at call time, in insertion order.
    pub fn each(&self) -> slice::Iter<'_, T> {
        self.values.iter()
    }
}

impl<T: Type> fmt::Display for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Set{")?;
        for (i, elem) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{elem}")?;
        }
        f.write_str("}")
    }
}

impl<T: Type> Type for Set<T> {
    fn ensure(&self) -> Result<()> {
        for (i, elem) in self.values.iter().enumerate() {
            elem.ensure()?;
            if contains(&self.values[..i], elem) {
                return Err(Error::invalid_state(
                    "set",
                    format!("duplicate element {elem}"),
                ));
            }
        }
        Ok(())
    }

    fn clean(&mut self) {
        self.values = clean_slice(std::mem::take(&mut self.values));
        tracing::trace!("cleaned set");
    }

    /// Sets are equal when they hold equal elements, in any order.
    fn equals(&self, other: &dyn Type) -> bool {
        let Some(other) = other.as_any().downcast_ref::<Self>() else {
            return false;
        };
        self.values.len() == other.values.len()
            && self.values.iter().all(|elem| other.contains(elem))
    }

    fn deep_copy(&self) -> Result<Box<dyn Type>> {
        let values = self
            .values
            .iter()
            .map(deep_copy)
            .collect::<Result<Vec<T>>>()?;
        Ok(Box::new(Self { values }))
    }
}

impl<T: Type> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for elem in iter {
            set.add(elem);
        }
        set
    }
}

impl<'a, T: Type> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
