//! Rooted tree shell.

use std::fmt;

use bedrock_foundation::{Result, Type, deep_copy, raise};

use crate::config::PrintConfig;
use crate::node::TreeNode;
use crate::traversal::{apply_dfs, print_visitor};

/// A tree, held through its root.
///
/// A tree always has a root. Validation, cleanup and structural equality
/// beyond the root are the node type's job.
#[derive(Debug, Clone)]
pub struct Tree<N> {
    root: N,
}

impl<N: TreeNode> Tree<N> {
    /// Creates a tree rooted at `root`.
    #[must_use]
    pub const fn new(root: N) -> Self {
        Self { root }
    }

    /// The root node.
    #[must_use]
    pub const fn root(&self) -> &N {
        &self.root
    }

    /// Mutable access to the root node.
    pub fn root_mut(&mut self) -> &mut N {
        &mut self.root
    }

    /// Consumes the tree, returning its root.
    #[must_use]
    pub fn into_root(self) -> N {
        self.root
    }

    /// Prints the tree with the given configuration.
    ///
    /// # Errors
    ///
    /// Fails if the tree does not pass [`Type::ensure`].
    pub fn render(&self, config: &PrintConfig) -> Result<String> {
        apply_dfs(self, print_visitor(config.clone())).map(crate::Printed::into_string)
    }
}

/// Prints with the default [`PrintConfig`].
///
/// # Panics
///
/// Panics with the traversal error if the tree does not pass
/// [`Type::ensure`]. Use [`Tree::render`] to get the error instead.
impl<N: TreeNode> fmt::Display for Tree<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match apply_dfs(self, print_visitor(PrintConfig::default())) {
            Ok(printed) => write!(f, "{printed}"),
            Err(err) => raise(err),
        }
    }
}

impl<N: TreeNode> Type for Tree<N> {
    fn ensure(&self) -> Result<()> {
        self.root.ensure()
    }

    fn clean(&mut self) {
        self.root.clean();
    }

    /// Compares roots only.
    fn equals(&self, other: &dyn Type) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| self.root.equals(&other.root))
    }

    fn deep_copy(&self) -> Result<Box<dyn Type>> {
        Ok(Box::new(Self {
            root: deep_copy(&self.root)?,
        }))
    }
}
