//! Bedrock - Generic-type foundation library
//!
//! This crate re-exports all layers of the Bedrock system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: bedrock_tree        - TreeNode, Tree, DFS traversal, printing
//! Layer 1: bedrock_collections - Slice, Index (+ cursor), Set
//! Layer 0: bedrock_foundation  - Type contract, Error, scalars, panic bridging
//! ```

pub use bedrock_collections as collections;
pub use bedrock_foundation as foundation;
pub use bedrock_tree as tree;
