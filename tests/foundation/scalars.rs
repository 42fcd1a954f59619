//! Integration tests for scalar wrappers
//!
//! Tests Bool, Int, Enum, and Wrap, including the boolean cursor.

use std::fmt;

use bedrock_foundation::{Bool, Enum, Int, Type, Wrap, deep_copy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Red,
    Green,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => f.write_str("red"),
            Self::Green => f.write_str("green"),
        }
    }
}

// =============================================================================
// Bool Cursor
// =============================================================================

#[test]
fn bool_cursor_stops_after_fifth_value() {
    let mut cursor = Bool::new().with_value(true).each();
    let mut produced = Vec::new();
    while let Some(flag) = cursor.next() {
        produced.push(produced.len());
        if produced.len() == 5 {
            flag.set(false);
        }
    }
    assert_eq!(produced, vec![0, 1, 2, 3, 4]);
    assert!(!cursor.flag().value());
}

#[test]
fn bool_cursor_on_false_yields_nothing() {
    let mut cursor = Bool::new().each();
    assert!(cursor.next().is_none());
}

// =============================================================================
// Value Holders
// =============================================================================

#[test]
fn int_set_and_display() {
    let mut i = Int::from(7);
    assert_eq!(i.value(), 7);
    i.set(-3);
    assert_eq!(i.to_string(), "-3");
}

#[test]
fn enum_holds_variant() {
    let mut e = Enum::new(Color::Red);
    assert_eq!(e.to_string(), "red");
    e.set(Color::Green);
    assert_eq!(e.value(), Color::Green);
    assert!(e.equals(&Enum::new(Color::Green)));
    assert!(!e.equals(&Enum::new(Color::Red)));
}

#[test]
fn wrap_holds_any_value() {
    let w = Wrap::new(String::from("hello"));
    assert_eq!(w.to_string(), "\"hello\"");
    assert!(!w.equals(&Wrap::new(5_i32)));
    assert_eq!(w.into_inner(), "hello");
}

#[test]
fn scalars_never_equal_across_types() {
    let i = Int::new().with_value(1);
    let b = Bool::new().with_value(true);
    assert!(!i.equals(&b));
    assert!(!b.equals(&i));
}

#[test]
fn scalar_deep_copies_are_independent() {
    let b = Bool::new().with_value(true);
    let mut copy = deep_copy(&b).unwrap();
    copy.set(false);
    assert!(b.value());

    let e = Enum::new(Color::Red);
    let mut copy = deep_copy(&e).unwrap();
    copy.set(Color::Green);
    assert_eq!(e.value(), Color::Red);
}
