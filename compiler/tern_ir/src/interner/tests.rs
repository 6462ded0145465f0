#![allow(clippy::unwrap_used)]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_intern_is_idempotent() {
    let mut interner = StringInterner::new();
    let a = interner.intern("x");
    let b = interner.intern("x");
    assert_eq!(a, b);
    assert_eq!(interner.len(), 1);
}

#[test]
fn test_distinct_strings_get_distinct_names() {
    let mut interner = StringInterner::new();
    let x = interner.intern("x");
    let y = interner.intern("y");
    assert_ne!(x, y);
    assert_eq!(interner.lookup(x), "x");
    assert_eq!(interner.lookup(y), "y");
}

#[test]
fn test_get_does_not_insert() {
    let mut interner = StringInterner::new();
    assert_eq!(interner.get("print"), None);
    assert!(interner.is_empty());
    let print = interner.intern("print");
    assert_eq!(interner.get("print"), Some(print));
}

#[test]
fn test_lookup_foreign_name() {
    let interner = StringInterner::new();
    assert_eq!(interner.lookup(Name::from_raw(42)), "<unknown>");
}

#[test]
fn test_vec_roundtrip_preserves_names() {
    let mut interner = StringInterner::new();
    let a = interner.intern("alpha");
    let b = interner.intern("beta");

    let strings: Vec<String> = interner.clone().into();
    assert_eq!(strings, vec!["alpha".to_string(), "beta".to_string()]);

    let rebuilt = StringInterner::try_from(strings).unwrap();
    assert_eq!(rebuilt.get("alpha"), Some(a));
    assert_eq!(rebuilt.get("beta"), Some(b));
}

#[test]
fn test_duplicate_entries_are_rejected() {
    let strings = vec!["a".to_string(), "a".to_string(), "print".to_string()];
    let err = StringInterner::try_from(strings).unwrap_err();
    assert_eq!(
        err,
        DuplicateIdentifier {
            name: "a".to_string(),
            index: 1
        }
    );
    assert_eq!(err.to_string(), "duplicate identifier 'a' at position 1");
}
