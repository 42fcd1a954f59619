//! Depth-first traversal engine and the print visitor.
//!
//! [`apply_dfs`] walks a [`Tree`] in pre-order and hands every node to a
//! [`Visitor`]. When the walk completes, the visitor is turned into its
//! output collector.
//!
//! ```
//! use bedrock_foundation::Int;
//! use bedrock_tree::{Node, PrintConfig, Tree, apply_dfs, print_visitor};
//!
//! let tree = Tree::new(
//!     Node::new(Int::new().with_value(1))
//!         .with_child(Node::new(Int::new().with_value(2)))
//!         .with_child(Node::new(Int::new().with_value(3))),
//! );
//! let printed = apply_dfs(&tree, print_visitor(PrintConfig::default())).unwrap();
//! assert_eq!(printed.to_string(), "1\n  2\n  3");
//! ```

use std::fmt;

use bedrock_foundation::{Result, Type};

use crate::config::PrintConfig;
use crate::node::TreeNode;
use crate::tree::Tree;

/// Receives nodes from [`apply_dfs`] and builds an output.
pub trait Visitor<N> {
    /// What the visitor produces once the walk is complete.
    type Output: fmt::Display;

    /// Visits `node` found at `depth` (the root is at depth 0).
    ///
    /// Returns whether the walk should descend into the node's children.
    ///
    /// # Errors
    ///
    /// An error aborts the walk and is returned from [`apply_dfs`].
    fn visit(&mut self, node: &N, depth: usize) -> Result<bool>;

    /// Consumes the visitor, yielding its output.
    fn finish(self) -> Self::Output;
}

/// Walks `tree` depth first, visiting parents before children and siblings
/// first to last.
///
/// # Errors
///
/// Fails if the tree does not pass [`Type::ensure`], or if the visitor fails.
pub fn apply_dfs<N, V>(tree: &Tree<N>, mut visitor: V) -> Result<V::Output>
where
    N: TreeNode,
    V: Visitor<N>,
{
    tree.ensure()?;

    let mut stack = vec![(tree.root(), 0_usize)];
    let mut visited = 0_usize;
    while let Some((node, depth)) = stack.pop() {
        visited += 1;
        if visitor.visit(node, depth)? && !node.is_leaf() {
            // Last child goes in first so the first child is popped next.
            stack.extend(node.backward_children().map(|child| (child, depth + 1)));
        }
    }

    tracing::trace!(visited, "dfs traversal complete");
    Ok(visitor.finish())
}

/// Builds a visitor that prints one line per node.
#[must_use]
pub fn print_visitor(config: PrintConfig) -> PrintVisitor {
    PrintVisitor {
        config,
        text: String::new(),
        lines: 0,
    }
}

/// Visitor that renders each node's [`Display`](fmt::Display) form on its
/// own line, indented by depth.
#[derive(Debug)]
pub struct PrintVisitor {
    config: PrintConfig,
    text: String,
    lines: usize,
}

impl PrintVisitor {
    fn push_line(&mut self, depth: usize, content: &str) {
        if self.lines > 0 {
            self.text.push('\n');
        }
        for _ in 0..depth {
            self.text.push_str(&self.config.indent);
        }
        self.text.push_str(content);
        self.lines += 1;
    }
}

impl<N: TreeNode> Visitor<N> for PrintVisitor {
    type Output = Printed;

    fn visit(&mut self, node: &N, depth: usize) -> Result<bool> {
        let leaf = node.is_leaf();
        let marker = if leaf {
            &self.config.leaf_marker
        } else {
            &self.config.branch_marker
        };
        let content = format!("{marker}{node}");
        self.push_line(depth, &content);

        if !leaf && self.config.max_depth.is_some_and(|max| depth >= max) {
            self.push_line(depth + 1, "...");
            return Ok(false);
        }
        Ok(true)
    }

    fn finish(self) -> Printed {
        Printed {
            text: self.text,
            lines: self.lines,
        }
    }
}

/// Output of a [`PrintVisitor`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Printed {
    text: String,
    lines: usize,
}

impl Printed {
    /// The rendered text, lines separated by `\n`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of lines written, elision markers included.
    #[must_use]
    pub const fn lines(&self) -> usize {
        self.lines
    }

    /// Consumes the collector, returning the rendered text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Printed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
