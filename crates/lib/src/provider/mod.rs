//! Node providers: the capability a path-query engine consumes.
//!
//! A query engine never inspects [`Node`]s itself. It asks a [`NodeProvider`]
//! whether a node is a sequence or a map, then asks for keys, children, or
//! elements. Two providers are supplied:
//!
//! - [`CanonicalProvider`] - handles values already in canonical JSON shape
//!   ([`Node::List`], [`Node::Map`], scalars)
//! - [`RecordProvider`] - wraps another provider and adds native arrays and
//!   opaque records through the [`record`](crate::record) capabilities
//!
//! # Contract
//!
//! | Operation | Failure mode |
//! |---|---|
//! | `is_sequence`, `is_map` | total, `is_map == !is_sequence` |
//! | `get_child` | [`Child::Undefined`] on any miss, never an error |
//! | `list_keys` | [`ProviderError::UnsupportedOperation`] for sequences |
//! | `get_element` | [`ProviderError::IndexOutOfBounds`] past the end |
//! | `iterate` | [`ProviderError::NotIterable`] / [`ProviderError::AbsentNode`] |
//!
//! Providers keep no state between calls and perform no cycle detection: a
//! caller that follows a cyclic graph must bound its own traversal, as
//! [`Walker`](crate::walk::Walker) does.

use crate::{
    Child, Node,
    node::{Elements, SequenceView},
};

mod canonical;
mod config;
mod errors;
mod reflective;

pub use canonical::CanonicalProvider;
pub use config::{KeyScope, ProviderConfig};
pub use errors::ProviderError;
pub use reflective::RecordProvider;

/// Result type for provider operations.
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// Structural introspection over [`Node`]s.
///
/// Implementations must be safe to share across threads: every operation only
/// reads the node it is given.
pub trait NodeProvider: Send + Sync {
    /// Returns true if the node has ordered, index-addressable children.
    fn is_sequence(&self, node: &Node) -> bool;

    /// Returns true if the node should be treated as having keyed children.
    fn is_map(&self, node: &Node) -> bool;

    /// Resolves `key` against a map-shaped node.
    fn get_child(&self, node: &Node, key: &str) -> Child;

    /// Lists the keys of a map-shaped node.
    fn list_keys(&self, node: &Node) -> ProviderResult<Vec<String>>;

    /// Builds the ordered view that index and iteration operations read from.
    fn to_sequence_view(&self, node: &Node) -> ProviderResult<SequenceView>;

    /// Number of children (sequence elements, map entries) or characters (text).
    fn length(&self, node: &Node) -> ProviderResult<usize>;

    /// Reads the element at `index` of a sequence-shaped node.
    fn get_element(&self, node: &Node, index: usize) -> ProviderResult<Node> {
        let view = self.to_sequence_view(node)?;
        view.get(index)
            .cloned()
            .ok_or(ProviderError::IndexOutOfBounds {
                index,
                len: view.len(),
            })
    }

    /// Iterates the elements of a sequence-shaped node.
    ///
    /// Every call builds a new iterator, so iteration can be restarted by calling
    /// again.
    fn iterate(&self, node: &Node) -> ProviderResult<Elements> {
        if node.is_null() {
            return Err(ProviderError::AbsentNode {
                operation: "iterate",
            });
        }
        if !self.is_sequence(node) {
            return Err(ProviderError::NotIterable {
                type_name: node.type_name(),
            });
        }
        Ok(self.to_sequence_view(node)?.into_iter())
    }
}

impl<P: NodeProvider + ?Sized> NodeProvider for &P {
    fn is_sequence(&self, node: &Node) -> bool {
        (**self).is_sequence(node)
    }

    fn is_map(&self, node: &Node) -> bool {
        (**self).is_map(node)
    }

    fn get_child(&self, node: &Node, key: &str) -> Child {
        (**self).get_child(node, key)
    }

    fn list_keys(&self, node: &Node) -> ProviderResult<Vec<String>> {
        (**self).list_keys(node)
    }

    fn to_sequence_view(&self, node: &Node) -> ProviderResult<SequenceView> {
        (**self).to_sequence_view(node)
    }

    fn length(&self, node: &Node) -> ProviderResult<usize> {
        (**self).length(node)
    }

    fn get_element(&self, node: &Node, index: usize) -> ProviderResult<Node> {
        (**self).get_element(node, index)
    }

    fn iterate(&self, node: &Node) -> ProviderResult<Elements> {
        (**self).iterate(node)
    }
}
