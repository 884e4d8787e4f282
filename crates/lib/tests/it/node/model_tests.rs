//! Tests for the Node enum: type names, equality, identity, and JSON decoding.

use std::sync::Arc;

use serde_json::json;
use structpath::Node;

use crate::helpers::*;

// ===== TYPE NAME TESTS =====

#[test]
fn test_node_type_names() {
    assert_eq!(Node::Null.type_name(), "null");
    assert_eq!(Node::Bool(true).type_name(), "bool");
    assert_eq!(Node::Int(42).type_name(), "int");
    assert_eq!(Node::Float(1.5).type_name(), "float");
    assert_eq!(Node::from("hello").type_name(), "text");
    assert_eq!(Node::list(Vec::new()).type_name(), "list");
    assert_eq!(Node::map(Vec::<(&str, Node)>::new()).type_name(), "map");
}

#[test]
fn test_record_and_array_report_their_own_types() {
    let record = node(&Arc::new(FooBarBaz::new("a", 1, true)));
    assert_eq!(record.type_name(), "FooBarBaz");

    let array = Node::array([1i64, 2, 3]);
    assert!(array.type_name().contains("i64"));
}

// ===== JSON DECODING TESTS =====

#[test]
fn test_decoded_json_is_canonical() {
    let node = Node::from(json!({
        "name": "Alice",
        "age": 30,
        "score": 9.5,
        "active": true,
        "tags": ["a", "b"],
        "spouse": null
    }));

    let Node::Map(map) = &node else {
        panic!("Expected canonical map, got {node:?}");
    };
    assert_eq!(map["name"], "Alice");
    assert_eq!(map["age"], 30);
    assert_eq!(map["score"], Node::Float(9.5));
    assert_eq!(map["active"], true);
    assert_eq!(map["tags"], Node::list([Node::from("a"), Node::from("b")]));
    assert!(map["spouse"].is_null());
}

#[test]
fn test_large_unsigned_json_numbers_become_floats() {
    let node = Node::from(json!(u64::MAX));
    assert_eq!(node, Node::Float(u64::MAX as f64));
}

// ===== EQUALITY AND IDENTITY TESTS =====

#[test]
fn test_records_compare_by_identity() {
    let a = Arc::new(FooBarBaz::new("same", 1, true));
    let b = Arc::new(FooBarBaz::new("same", 1, true));

    assert_eq!(node(&a), node(&a));
    assert_ne!(node(&a), node(&b));
    assert_same_record(&node(&a), &node(&a));
}

#[test]
fn test_arrays_compare_by_elements() {
    assert_eq!(Node::array([1i64, 2]), Node::array(vec![1i64, 2]));
    assert_ne!(Node::array([1i64, 2]), Node::array([2i64, 1]));
    assert!(!Node::array([1i64, 2]).same(&Node::array([1i64, 2])));
}

#[test]
fn test_scalars_never_share_identity() {
    let value = Node::Int(1);
    assert!(!value.same(&value.clone()));
    assert_eq!(value, value.clone());
}

#[test]
fn test_clone_shares_containers() {
    let list = Node::list([Node::Int(1)]);
    assert!(list.same(&list.clone()));
}

// ===== ACCESSOR TESTS =====

#[test]
fn test_node_accessors() {
    assert_eq!(Node::Bool(true).as_bool(), Some(true));
    assert_eq!(Node::Int(3).as_int(), Some(3));
    assert_eq!(Node::Int(3).as_float(), Some(3.0));
    assert_eq!(Node::from("x").as_text(), Some("x"));
    assert_eq!(Node::from("x").as_int(), None);
    assert!(Node::Int(1).is_scalar());
    assert!(!Node::Null.is_scalar());
}

#[test]
fn test_downcast_record() {
    let record = Arc::new(FooBarBaz::new("a", 7, false));
    let node = node(&record);

    let back = node.downcast_record::<FooBarBaz>().unwrap();
    assert!(Arc::ptr_eq(&back, &record));
    assert!(node.downcast_record::<FooAggregate>().is_none());
    assert!(Node::Int(1).downcast_record::<FooBarBaz>().is_none());
}

#[test]
fn test_display() {
    let node = Node::from(json!({ "a": [1, "two", null] }));
    assert_eq!(node.to_string(), "{a: [1, two, null]}");

    let record = node_display_fixture();
    assert_eq!(record.to_string(), "<FooBarBaz>");
}

fn node_display_fixture() -> Node {
    node(&Arc::new(FooBarBaz::new("a", 1, true)))
}
