//! Rooted trees over Bedrock values.
//!
//! This crate provides:
//! - [`TreeNode`] - What a node must offer to live in a tree
//! - [`Node`] - A general node holding a value and ordered children
//! - [`Tree`] - The rooted tree shell
//! - [`apply_dfs`] and [`Visitor`] - Depth-first traversal
//! - [`PrintVisitor`] and [`PrintConfig`] - Text rendering of trees

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod node;
pub mod traversal;
pub mod tree;

pub use config::PrintConfig;
pub use node::{Node, TreeNode};
pub use traversal::{PrintVisitor, Printed, Visitor, apply_dfs, print_visitor};
pub use tree::Tree;
