//! Integration tests for Tree
//!
//! Tests root delegation for the contract operations and textual form.

use bedrock_collections::{Set, Slice};
use bedrock_foundation::{ErrorKind, Int, Type, Wrap, capture, deep_copy};
use bedrock_tree::{Node, PrintConfig, Tree};

fn leaf(v: i64) -> Node<Int> {
    Node::new(Int::new().with_value(v))
}

// =============================================================================
// Contract Delegation
// =============================================================================

#[test]
fn equality_is_root_to_root() {
    let a = Tree::new(leaf(1).with_child(leaf(2)));
    let b = Tree::new(leaf(1).with_child(leaf(2)));
    assert!(a.equals(&b));
    assert!(b.equals(&a));
    assert!(!a.equals(&Tree::new(leaf(1).with_child(leaf(3)))));
}

#[test]
fn deep_copy_then_mutate() {
    let a = Tree::new(leaf(1).with_child(leaf(2)));
    let mut b = deep_copy(&a).unwrap();
    b.root_mut().value_mut().set(10);
    assert_eq!(a.root().value().value(), 1);
    assert!(!a.equals(&b));
}

#[test]
fn nodes_can_hold_containers() {
    let names: Slice<Wrap<&str>> = vec![Wrap::new("a"), Wrap::new("b")].into();
    let tree = Tree::new(Node::new(names));
    assert!(tree.ensure().is_ok());
    assert_eq!(tree.to_string(), "Slice[\"a\", \"b\"]");

    let sets = Tree::new(
        Node::new(Set::from_values(vec![Int::new().with_value(1)]))
            .with_child(Node::new(Set::new())),
    );
    assert_eq!(sets.to_string(), "Set{1}\n  Set{}");
}

#[test]
fn clean_releases_descendants() {
    let mut tree = Tree::new(leaf(1).with_child(leaf(2).with_child(leaf(3))));
    tree.clean();
    assert_eq!(tree.root().size(), 1);
}

// =============================================================================
// Textual Form
// =============================================================================

#[test]
fn display_is_indented_pre_order() {
    let tree = Tree::new(
        leaf(1)
            .with_child(leaf(2).with_child(leaf(3)))
            .with_child(leaf(4)),
    );
    assert_eq!(tree.to_string(), "1\n  2\n    3\n  4");
}

#[test]
fn render_with_configuration() {
    let tree = Tree::new(leaf(1).with_child(leaf(2).with_child(leaf(3))));
    let config = PrintConfig::default()
        .with_indent("--")
        .with_markers("* ", "")
        .with_max_depth(1);
    assert_eq!(tree.render(&config).unwrap(), "* 1\n--* 2\n----...");
}

#[test]
fn display_of_invalid_tree_is_fatal() {
    let s: Slice<Int> = Slice::new();
    let mut idx = s.index();
    idx.clean();
    let tree = Tree::new(Node::new(idx));

    assert_eq!(
        tree.render(&PrintConfig::default()).unwrap_err().kind,
        ErrorKind::InvalidState
    );
    let err = capture(|| Ok(tree.to_string())).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidState);
}
