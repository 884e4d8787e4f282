//! Shape classification tests.

use std::sync::Arc;

use serde_json::json;
use structpath::{Node, NodeProvider, provider::CanonicalProvider};

use crate::helpers::*;

/// One node of every shape the providers can see
fn sample_nodes() -> Vec<Node> {
    let aggregate = prepare_foo_aggregate();
    vec![
        Node::Null,
        Node::Bool(true),
        Node::Int(1),
        Node::Float(2.5),
        Node::from("text"),
        Node::from(json!([1, 2])),
        Node::from(json!([])),
        Node::from(json!({ "a": 1 })),
        Node::array([4i64, 8, 16]),
        Node::array(Vec::<i64>::new()),
        node(&aggregate),
        node(&FooBarBaz::self_referencing("loop", 1)),
    ]
}

#[test]
fn test_native_array_is_sequence() {
    let provider = test_provider();
    let arr = Node::array([4i64, 8, 16]);
    assert!(provider.is_sequence(&arr));
    assert!(!provider.is_map(&arr));
}

#[test]
fn test_empty_native_array_is_sequence() {
    let provider = test_provider();
    assert!(provider.is_sequence(&Node::array(Vec::<bool>::new())));
}

#[test]
fn test_canonical_list_is_sequence() {
    let provider = test_provider();
    assert!(provider.is_sequence(&Node::from(json!(["a"]))));
}

#[test]
fn test_records_and_canonical_maps_are_maps() {
    let provider = test_provider();
    assert!(provider.is_map(&node(&prepare_foo_aggregate())));
    assert!(provider.is_map(&Node::from(json!({ "a": 1 }))));
}

#[test]
fn test_scalars_and_null_are_reported_as_maps() {
    let provider = test_provider();
    for node in [Node::Null, Node::Int(1), Node::from("s"), Node::Bool(true)] {
        assert!(provider.is_map(&node), "{node:?} should classify as map");
        assert!(!provider.is_sequence(&node));
    }
}

#[test]
fn test_map_and_sequence_are_mutually_exclusive() {
    let provider = test_provider();
    for node in sample_nodes() {
        assert_eq!(
            provider.is_map(&node),
            !provider.is_sequence(&node),
            "classification overlap for {node:?}"
        );
    }
}

#[test]
fn test_canonical_provider_does_not_see_arrays_or_records() {
    let provider = CanonicalProvider;
    let record = node(&Arc::new(FooBarBaz::new("a", 1, true)));
    let array = Node::array([1i64]);

    assert!(!provider.is_sequence(&array));
    assert!(!provider.is_map(&record));
    assert!(test_provider().is_map(&record));
    assert!(test_provider().is_sequence(&array));
}

#[test]
fn test_classification_follows_current_field_value() {
    let provider = test_provider();
    let mutable = Arc::new(Mutable {
        items: std::sync::RwLock::new(vec![1, 2]),
    });
    let root = node(&mutable);

    let items = provider.get_child(&root, "items").into_node().unwrap();
    assert!(provider.is_sequence(&items));
    assert_eq!(provider.length(&items).unwrap(), 2);

    mutable.items.write().unwrap().clear();
    let items = provider.get_child(&root, "items").into_node().unwrap();
    assert!(provider.is_sequence(&items));
    assert_eq!(provider.length(&items).unwrap(), 0);
}
