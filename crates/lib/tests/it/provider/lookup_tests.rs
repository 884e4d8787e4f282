//! Child lookup tests for records, canonical maps, and their mixtures.

use std::{
    panic::{self, AssertUnwindSafe},
    sync::{Arc, Mutex},
};

use serde_json::json;
use structpath::{
    Child, Node, NodeProvider, RecordProvider,
    provider::{CanonicalProvider, ProviderConfig},
    record,
};

use crate::helpers::*;

// ===== RECORD FIELD TESTS =====

#[test]
fn test_record_fields_resolve() {
    let provider = test_provider();
    let root = node(&Arc::new(FooBarBaz::new("hello", 7, true)));

    assert_eq!(provider.get_child(&root, "foo"), "hello");
    assert_eq!(provider.get_child(&root, "bar"), 7);
    assert_eq!(provider.get_child(&root, "baz"), true);
}

#[test]
fn test_unknown_key_is_undefined() {
    let provider = test_provider();
    let root = node(&Arc::new(FooBarBaz::new("a", 1, false)));

    let child = provider.get_child(&root, "nope");
    assert!(child.is_undefined());
    assert_ne!(child, Child::Found(Node::Null));
}

#[test]
fn test_unset_fields_are_null_not_undefined() {
    let provider = test_provider();
    let root = node(&Arc::new(FooBarBaz::new("a", 1, false)));

    assert_eq!(provider.get_child(&root, "recursive"), Node::Null);
    assert_eq!(provider.get_child(&root, "map"), Node::Null);
}

#[test]
fn test_self_reference_keeps_identity() {
    let provider = test_provider();
    let record = FooBarBaz::self_referencing("loop", 9);
    let root = node(&record);

    let mut current = root.clone();
    for _ in 0..100 {
        current = provider
            .get_child(&current, "recursive")
            .into_node()
            .unwrap();
        assert_same_record(&current, &root);
    }
    assert_eq!(provider.get_child(&current, "foo"), "loop");
}

#[test]
fn test_record_elements_keep_identity() {
    let provider = test_provider();
    let aggregate = prepare_foo_aggregate();
    let root = node(&aggregate);

    let values = provider.get_child(&root, "values").into_node().unwrap();
    let second = provider.get_element(&values, 1).unwrap();
    assert_same_record(&second, &node(&aggregate.values[1]));
}

// ===== CANONICAL DELEGATION TESTS =====

#[test]
fn test_json_field_is_delegated_to_canonical_provider() {
    let provider = test_provider();
    let root = node(&prepare_foo_aggregate());

    let meta = provider.get_child(&root, "meta").into_node().unwrap();
    assert!(matches!(meta, Node::Map(_)));
    assert_eq!(provider.get_child(&meta, "version"), 1);
    assert!(provider.get_child(&meta, "missing").is_undefined());

    let labels = provider.get_child(&meta, "labels").into_node().unwrap();
    assert!(provider.is_sequence(&labels));
    assert_eq!(provider.get_element(&labels, 1).unwrap(), "y");
}

#[test]
fn test_nested_json_lookup() {
    let provider = test_provider();
    let root = Node::from(json!({ "info": { "a": "x", "b": { "c": "z" } } }));

    let info = provider.get_child(&root, "info").into_node().unwrap();
    let b = provider.get_child(&info, "b").into_node().unwrap();
    assert_eq!(provider.get_child(&b, "c"), "z");
}

#[test]
fn test_map_field_inside_record_element() {
    let provider = test_provider();
    let root = node(&prepare_foo_aggregate());

    let values = provider.get_child(&root, "values").into_node().unwrap();
    let third = provider.get_element(&values, 2).unwrap();
    let map = provider.get_child(&third, "map").into_node().unwrap();

    assert_eq!(provider.get_child(&map, "adf"), 621);
    let boo = provider.get_child(&map, "boo").into_node().unwrap();
    assert_eq!(provider.get_child(&boo, "kuu"), "kuu");
}

#[test]
fn test_lookup_on_sequences_and_scalars_is_undefined() {
    let provider = test_provider();
    let root = node(&prepare_foo_aggregate());
    let arr = provider.get_child(&root, "arr").into_node().unwrap();

    assert!(provider.get_child(&arr, "0").is_undefined());
    assert!(provider.get_child(&arr, "length").is_undefined());
    assert!(provider.get_child(&Node::Int(5), "x").is_undefined());
    assert!(provider.get_child(&Node::Null, "x").is_undefined());
}

// ===== SCOPE TESTS =====

#[test]
fn test_declared_scope_hides_base_fields() {
    let provider = test_provider();
    let root = node(&derived());

    assert_eq!(provider.get_child(&root, "name"), "derived");
    assert_eq!(provider.get_child(&root, "id"), 2);
    assert!(provider.get_child(&root, "created").is_undefined());
}

#[test]
fn test_inherited_scope_reads_base_fields() {
    let provider = inheriting_provider();
    let root = node(&derived());

    assert_eq!(provider.get_child(&root, "created"), "yesterday");
    // Own fields shadow the base
    assert_eq!(provider.get_child(&root, "id"), 2);
}

// ===== DENIED READ TESTS =====

struct Guarded {
    value: Mutex<i64>,
}

record!(Guarded { value });

#[test]
fn test_poisoned_field_is_undefined() {
    let provider = test_provider();
    let guarded = Arc::new(Guarded {
        value: Mutex::new(5),
    });
    let root = node(&guarded);
    assert_eq!(provider.get_child(&root, "value"), 5);

    let _ = panic::catch_unwind(AssertUnwindSafe(|| {
        let _guard = guarded.value.lock().unwrap();
        panic!("poison the lock");
    }));
    assert!(guarded.value.is_poisoned());

    assert!(provider.get_child(&root, "value").is_undefined());
    assert_eq!(provider.list_keys(&root).unwrap(), vec!["value"]);
}

#[test]
fn test_field_locked_by_the_querying_thread_is_undefined() {
    let provider = test_provider();
    let mutable = Arc::new(Mutable {
        items: std::sync::RwLock::new(vec![1, 2]),
    });
    let root = node(&mutable);

    {
        let _writer = mutable.items.write().unwrap();
        assert!(provider.get_child(&root, "items").is_undefined());
    }
    let items = provider.get_child(&root, "items").into_node().unwrap();
    assert_eq!(provider.length(&items), Ok(2));
}

// ===== INJECTED PROVIDER TESTS =====

struct Pair {
    foo: &'static str,
    bar: i64,
}

record!(Pair { foo, bar });

#[test]
fn test_two_field_record() {
    let provider = test_provider();
    let root = node(&Arc::new(Pair { foo: "x", bar: 10 }));

    assert_eq!(provider.get_child(&root, "foo"), "x");
    assert_eq!(provider.get_child(&root, "bar"), 10);
    assert!(provider.get_child(&root, "baz").is_undefined());
}

#[test]
fn test_injected_inner_provider_handles_canonical_values() {
    let provider = RecordProvider::with_inner(CanonicalProvider, ProviderConfig::default());
    let nested = RecordProvider::with_inner(&provider, ProviderConfig::default());
    let root = Node::from(json!({ "pair": { "foo": "y" } }));

    let pair = nested.get_child(&root, "pair").into_node().unwrap();
    assert_eq!(nested.get_child(&pair, "foo"), "y");
    assert!(nested.is_map(&pair));
}
