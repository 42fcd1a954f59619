//! Configuration for tree printing.

/// Configuration for the print visitor.
///
/// Controls indentation, node prefixes, and how deep printing goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrintConfig {
    /// Repeated once per depth level before each line.
    pub indent: String,

    /// Prefix for nodes with children.
    pub branch_marker: String,

    /// Prefix for leaf nodes.
    pub leaf_marker: String,

    /// Deepest level printed; deeper subtrees collapse into `...`.
    pub max_depth: Option<usize>,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            branch_marker: String::new(),
            leaf_marker: String::new(),
            max_depth: None,
        }
    }
}

impl PrintConfig {
    /// Creates a configuration with ASCII guides, like `|  + root`.
    #[must_use]
    pub fn ascii() -> Self {
        Self {
            indent: "|  ".to_string(),
            branch_marker: "+ ".to_string(),
            leaf_marker: "- ".to_string(),
            max_depth: None,
        }
    }

    /// Creates a configuration that only prints the root and its children.
    #[must_use]
    pub fn shallow() -> Self {
        Self {
            max_depth: Some(1),
            ..Self::default()
        }
    }

    /// Builder method to set the indent unit.
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Builder method to set the branch and leaf prefixes.
    #[must_use]
    pub fn with_markers(mut self, branch: impl Into<String>, leaf: impl Into<String>) -> Self {
        self.branch_marker = branch.into();
        self.leaf_marker = leaf.into();
        self
    }

    /// Builder method to limit the printed depth.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Builder method to print every level.
    #[must_use]
    pub fn without_max_depth(mut self) -> Self {
        self.max_depth = None;
        self
    }
}
