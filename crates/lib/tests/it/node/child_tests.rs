//! Tests for the Child lookup result and the undefined marker.

use structpath::{Child, Node};

#[test]
fn test_undefined_is_not_null() {
    let null = Child::Found(Node::Null);
    assert!(!null.is_undefined());
    assert_ne!(null, Child::Undefined);
    assert_ne!(Child::Undefined, Node::Null);
}

#[test]
fn test_undefined_never_equals_a_value() {
    let undefined = Child::Undefined;
    assert!(undefined != 0);
    assert!(undefined != "");
    assert!(undefined != false);
    assert!(undefined != Node::list(Vec::new()));
}

#[test]
fn test_child_conversions() {
    let found = Child::from(Some(Node::Int(1)));
    assert_eq!(found.as_node(), Some(&Node::Int(1)));
    assert_eq!(found.clone().into_node(), Some(Node::Int(1)));
    assert_eq!(found, 1);

    let missing = Child::from(None::<Node>);
    assert!(missing.is_undefined());
    assert_eq!(missing.into_node(), None);
}
