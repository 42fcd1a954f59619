//! Integration tests for Set
//!
//! Tests uniqueness, union, and order-insensitive equality.

use bedrock_collections::Set;
use bedrock_foundation::{Int, Type, Wrap, deep_copy};
use proptest::prelude::*;

fn ints(values: &[i64]) -> Set<Int> {
    values.iter().map(|&v| Int::new().with_value(v)).collect()
}

// =============================================================================
// Membership
// =============================================================================

#[test]
fn second_add_is_rejected() {
    let mut s = Set::new();
    assert!(s.add(Wrap::new("x")));
    assert!(!s.add(Wrap::new("x")));
    assert_eq!(s.len(), 1);
    assert!(s.contains(&Wrap::new("x")));
}

#[test]
fn union_scenario() {
    let mut s = ints(&[1, 2, 3]);
    assert_eq!(s.union(Some(ints(&[3, 4]))), 1);
    assert_eq!(s.len(), 4);
    assert!(s.contains(&Int::new().with_value(4)));
    assert_eq!(s.to_string(), "Set{1, 2, 3, 4}");
}

#[test]
fn union_with_absent_is_noop() {
    let mut s = ints(&[1]);
    assert_eq!(s.union(None), 0);
    assert_eq!(s.len(), 1);
}

// =============================================================================
// Contract
// =============================================================================

#[test]
fn equality_ignores_insertion_order() {
    assert!(ints(&[1, 2, 3]).equals(&ints(&[3, 1, 2])));
    assert!(!ints(&[1, 2]).equals(&ints(&[1, 2, 3])));
}

#[test]
fn deep_copy_is_independent() {
    let s = ints(&[1, 2]);
    let mut copy = deep_copy(&s).unwrap();
    assert!(s.equals(&copy));
    copy.add(Int::new().with_value(3));
    assert!(!s.equals(&copy));
    assert!(s.ensure().is_ok());
}

#[test]
fn each_keeps_insertion_order() {
    let s = Set::from_values(vec![
        Int::new().with_value(3),
        Int::new().with_value(1),
        Int::new().with_value(3),
        Int::new().with_value(2),
    ]);
    let order: Vec<i64> = s.each().map(|i| i.value()).collect();
    assert_eq!(order, vec![3, 1, 2]);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn union_adds_only_missing_elements(
        left in prop::collection::vec(-20i64..20, 0..30),
        right in prop::collection::vec(-20i64..20, 0..30),
    ) {
        let mut s = ints(&left);
        let before = s.len();
        let added = s.union(Some(ints(&right)));

        let mut all = left.clone();
        all.extend(&right);
        all.sort_unstable();
        all.dedup();

        prop_assert_eq!(s.len(), all.len());
        prop_assert_eq!(before + added, s.len());
        prop_assert!(s.ensure().is_ok());
    }
}
