//! Node capabilities required by [`Tree`](crate::Tree), and a general node.

use std::fmt;
use std::slice;

use bedrock_foundation::{Result, Type, deep_copy};

/// What a tree node must offer: the Type contract, a leaf test, and
/// iteration over its children in both directions.
///
/// A node's own [`Type`] implementation is responsible for its descendants:
/// `ensure`, `equals`, `clean` and `deep_copy` must cover every child.
pub trait TreeNode: Type + Sized {
    /// Returns true if the node has no children.
    fn is_leaf(&self) -> bool;

    /// Children, first to last.
    fn children(&self) -> impl Iterator<Item = &Self>;

    /// Children, last to first.
    fn backward_children(&self) -> impl Iterator<Item = &Self> {
        let mut children: Vec<&Self> = self.children().collect();
        children.reverse();
        children.into_iter()
    }
}

/// A node holding a contract value and an ordered list of children.
///
/// The contract operations, [`Node::size`] and dropping work at any depth.
/// The derived `Clone` and `Debug` recurse, so prefer
/// [`deep_copy`](bedrock_foundation::deep_copy) for very deep chains.
#[derive(Debug, Clone)]
pub struct Node<V> {
    value: V,
    children: Vec<Node<V>>,
}

impl<V: Type> Node<V> {
    /// Creates a leaf holding `value`.
    #[must_use]
    pub const fn new(value: V) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    /// Returns this node with `child` appended.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Appends a child.
    pub fn push(&mut self, child: Self) {
        self.children.push(child);
    }

    /// The node's value.
    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Mutable access to the node's value.
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Mutable access to the children.
    pub fn children_mut(&mut self) -> slice::IterMut<'_, Self> {
        self.children.iter_mut()
    }

    /// Number of nodes in this subtree, including this one.
    #[must_use]
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(&node.children);
        }
        count
    }
}

impl<V: Type> fmt::Display for Node<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

// Walks use explicit stacks so deep chains do not exhaust the call stack.
impl<V: Type> Type for Node<V> {
    fn ensure(&self) -> Result<()> {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            node.value.ensure()?;
            stack.extend(node.children.iter().rev());
        }
        Ok(())
    }

    fn clean(&mut self) {
        self.value.clean();
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            node.value.clean();
            pending.append(&mut node.children);
        }
    }

    fn equals(&self, other: &dyn Type) -> bool {
        let Some(other) = other.as_any().downcast_ref::<Self>() else {
            return false;
        };
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if !a.value.equals(&b.value) || a.children.len() != b.children.len() {
                return false;
            }
            stack.extend(a.children.iter().zip(&b.children));
        }
        true
    }

    fn deep_copy(&self) -> Result<Box<dyn Type>> {
        let mut root = Self::new(deep_copy(&self.value)?);
        for child in &self.children {
            // (source, next child to copy, copy under construction)
            let mut stack = vec![(child, 0_usize, Self::new(deep_copy(&child.value)?))];
            while let Some((source, next, _)) = stack.last_mut() {
                let source = *source;
                if let Some(grandchild) = source.children.get(*next) {
                    *next += 1;
                    stack.push((grandchild, 0, Self::new(deep_copy(&grandchild.value)?)));
                } else if let Some((_, _, copy)) = stack.pop() {
                    match stack.last_mut() {
                        Some((_, _, parent)) => parent.children.push(copy),
                        None => root.children.push(copy),
                    }
                }
            }
        }
        Ok(Box::new(root))
    }
}

impl<V> Drop for Node<V> {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl<V: Type> TreeNode for Node<V> {
    fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    fn children(&self) -> impl Iterator<Item = &Self> {
        self.children.iter()
    }

    fn backward_children(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().rev()
    }
}
