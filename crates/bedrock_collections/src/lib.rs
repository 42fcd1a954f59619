//! Contract-driven containers for Bedrock.
//!
//! This crate provides:
//! - [`Slice`] - Owned, ordered sequence addressed through [`Index`] handles
//! - [`Index`] - Bounded, non-owning cursor into a slice, with [`IndexCursor`]
//! - [`Set`] - Insertion-ordered collection of contract-unique values

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod index;
pub mod set;
pub mod slice;

pub use index::{Index, IndexCursor};
pub use set::Set;
pub use slice::{Slice, SliceId};
