//! Provider for values already in canonical JSON shape.

use super::{NodeProvider, ProviderError, ProviderResult};
use crate::{Child, Node, node::SequenceView};

/// Baseline provider for canonical nodes.
///
/// Only [`Node::List`] is a sequence and only [`Node::Map`] is a map. Native
/// arrays and records are treated as opaque: they are neither sequences nor maps
/// and have no children here. Wrap this provider in a
/// [`RecordProvider`](super::RecordProvider) to see inside them.
///
/// ```
/// # use structpath::{Child, Node, NodeProvider, provider::CanonicalProvider};
/// let provider = CanonicalProvider;
/// let node = Node::from(serde_json::json!({ "name": "Alice", "tags": ["a", "b"] }));
///
/// assert!(provider.is_map(&node));
/// assert_eq!(provider.get_child(&node, "name"), "Alice");
/// assert_eq!(provider.get_child(&node, "age"), Child::Undefined);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalProvider;

impl NodeProvider for CanonicalProvider {
    fn is_sequence(&self, node: &Node) -> bool {
        matches!(node, Node::List(_))
    }

    fn is_map(&self, node: &Node) -> bool {
        matches!(node, Node::Map(_))
    }

    fn get_child(&self, node: &Node, key: &str) -> Child {
        match node {
            Node::Map(map) => map.get(key).cloned().into(),
            _ => Child::Undefined,
        }
    }

    fn list_keys(&self, node: &Node) -> ProviderResult<Vec<String>> {
        match node {
            Node::Map(map) => Ok(map.keys().cloned().collect()),
            _ => Err(ProviderError::UnsupportedOperation {
                operation: "list_keys",
                type_name: node.type_name(),
            }),
        }
    }

    fn to_sequence_view(&self, node: &Node) -> ProviderResult<SequenceView> {
        match node {
            Node::List(items) => Ok(SequenceView::shared(items.clone())),
            _ => Err(ProviderError::NotASequence {
                type_name: node.type_name(),
            }),
        }
    }

    fn length(&self, node: &Node) -> ProviderResult<usize> {
        match node {
            Node::List(items) => Ok(items.len()),
            Node::Map(map) => Ok(map.len()),
            Node::Text(text) => Ok(text.chars().count()),
            _ => Err(ProviderError::NoLength {
                type_name: node.type_name(),
            }),
        }
    }
}
