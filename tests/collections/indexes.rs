//! Integration tests for Index and its cursor
//!
//! Tests bounds, cursor aliasing, and cleaned handles.

use bedrock_collections::Slice;
use bedrock_foundation::{ErrorKind, Int, Type};

fn ints(n: i64) -> Slice<Int> {
    (0..n).map(|v| Int::new().with_value(v)).collect()
}

// =============================================================================
// Bounds
// =============================================================================

#[test]
fn with_value_checks_effective_bound() {
    let s = ints(3);
    assert!(s.index().with_value(&s, 2).is_ok());
    assert_eq!(
        s.index().with_value(&s, 3).unwrap_err().kind,
        ErrorKind::IllegalArgument
    );

    let bounded = s.index().with_bound(&s, 1).unwrap();
    assert_eq!(bounded.bound(&s).unwrap(), 1);
    assert_eq!(
        bounded.with_value(&s, 1).unwrap_err().kind,
        ErrorKind::IllegalArgument
    );
}

#[test]
fn unbounded_index_tracks_slice_growth() {
    let mut s = ints(1);
    let mut idx = s.index();
    assert!(idx.set(&s, 1).is_err());
    s.append(Int::new().with_value(1));
    idx.set(&s, 1).unwrap();
    assert_eq!(s.elem_at(&idx).unwrap().value(), 1);
}

#[test]
fn bound_cannot_exceed_size() {
    let s = ints(2);
    assert_eq!(
        s.index().with_bound(&s, 3).unwrap_err().kind,
        ErrorKind::IllegalArgument
    );
    let idx = s.index().with_bound(&s, 2).unwrap().without_bound();
    assert_eq!(idx.to_string(), format!("Index[value=0, max=+Inf, ref={}]", s.id()));
}

// =============================================================================
// Cursor
// =============================================================================

#[test]
fn cursor_walks_to_bound() {
    let s = ints(5);
    let idx = s.index().with_value(&s, 1).unwrap().with_bound(&s, 4).unwrap();
    let mut cursor = idx.each(&s).unwrap();
    let mut seen = Vec::new();
    while let Some(i) = cursor.next(&s).unwrap() {
        seen.push(i.value());
    }
    assert_eq!(seen, vec![1, 2, 3]);
}

#[test]
fn cursor_continues_from_mutated_value() {
    let s = ints(10);
    let mut cursor = s.index().each(&s).unwrap();
    let mut seen = Vec::new();
    while let Some(i) = cursor.next(&s).unwrap() {
        seen.push(i.value());
        if i.value() == 2 {
            i.set(&s, 7).unwrap();
        }
    }
    assert_eq!(seen, vec![0, 1, 2, 8, 9]);
}

#[test]
fn cursor_on_empty_slice_yields_nothing() {
    let s = ints(0);
    let mut cursor = s.index().each(&s).unwrap();
    assert!(cursor.next(&s).unwrap().is_none());
}

#[test]
fn cursor_rejects_other_slice() {
    let a = ints(3);
    let b = ints(3);
    let mut cursor = a.index().each(&a).unwrap();
    assert_eq!(cursor.next(&b).unwrap_err().kind, ErrorKind::InvalidCall);
}

// =============================================================================
// Contract
// =============================================================================

#[test]
fn cleaned_index_is_invalid() {
    let s = ints(2);
    let mut idx = s.index();
    assert!(idx.ensure().is_ok());
    idx.clean();
    assert_eq!(idx.ensure().unwrap_err().kind, ErrorKind::InvalidState);
    assert_eq!(s.elem_at(&idx).unwrap_err().kind, ErrorKind::InvalidState);
    assert!(idx.to_string().ends_with("ref=nil]"));
}

#[test]
fn index_equality_includes_owner() {
    let a = ints(2);
    let b = ints(2);
    assert!(a.index().equals(&a.index()));
    assert!(!a.index().equals(&b.index()));
    assert!(!a.index().equals(&a.index().with_value(&a, 1).unwrap()));
}
