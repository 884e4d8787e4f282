//! Provider that sees inside native arrays and opaque records.
//!
//! [`RecordProvider`] layers over a generic provider. Canonical values are
//! delegated to the inner provider unchanged; [`Node::Array`] and
//! [`Node::Record`] are handled here through the [`FixedArray`] and
//! [`Record`](crate::record::Record) capabilities.
//!
//! # Classification
//!
//! A node is a sequence if it is a native array or if the inner provider says
//! it is one. Everything else is reported as a map, including scalars and
//! absent nodes. This keeps classification open to record types the provider
//! has never seen; lookups against values with no fields simply come back
//! [`Child::Undefined`].
//!
//! # Arrays
//!
//! Index and iteration operations on a native array go through a fresh
//! [`SequenceView`] built on every call. The view is a snapshot: it never
//! aliases the array's storage.

use super::{CanonicalProvider, NodeProvider, ProviderConfig, ProviderError, ProviderResult};
use crate::{
    Child, Node,
    node::SequenceView,
    record::{self, FieldRead},
};

/// Introspecting provider for object graphs.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use structpath::{Node, NodeProvider, RecordProvider, record};
///
/// struct Aggregate {
///     arr: [i64; 3],
/// }
///
/// record!(Aggregate { arr });
///
/// let provider = RecordProvider::new();
/// let root = Node::record(Arc::new(Aggregate { arr: [4, 8, 16] }));
/// let arr = provider.get_child(&root, "arr").into_node().unwrap();
///
/// assert!(provider.is_sequence(&arr));
/// assert_eq!(provider.get_element(&arr, 1)?, 8);
/// assert_eq!(provider.iterate(&arr)?.collect::<Vec<_>>(), vec![4, 8, 16]);
/// # Ok::<(), structpath::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordProvider<P = CanonicalProvider> {
    inner: P,
    config: ProviderConfig,
}

impl RecordProvider<CanonicalProvider> {
    /// Creates a provider over [`CanonicalProvider`] with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider over [`CanonicalProvider`] with the given settings.
    pub fn with_config(config: ProviderConfig) -> Self {
        Self {
            inner: CanonicalProvider,
            config,
        }
    }
}

impl<P: NodeProvider> RecordProvider<P> {
    /// Creates a provider that delegates canonical values to `inner`.
    pub fn with_inner(inner: P, config: ProviderConfig) -> Self {
        Self { inner, config }
    }

    /// Returns the generic provider canonical values are delegated to
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Returns the active configuration
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn read_record_field(&self, record: &dyn record::Record, key: &str) -> Child {
        match record::read_visible_field(record, key, self.config.include_inherited()) {
            FieldRead::Value(node) => Child::Found(node),
            FieldRead::Missing => {
                tracing::trace!(
                    key,
                    type_name = record.type_name(),
                    "Field not found on record"
                );
                Child::Undefined
            }
            FieldRead::Denied => {
                tracing::debug!(
                    key,
                    type_name = record.type_name(),
                    "Field read denied, resolving as undefined"
                );
                Child::Undefined
            }
        }
    }
}

impl<P: NodeProvider> NodeProvider for RecordProvider<P> {
    fn is_sequence(&self, node: &Node) -> bool {
        matches!(node, Node::Array(_)) || self.inner.is_sequence(node)
    }

    fn is_map(&self, node: &Node) -> bool {
        !self.is_sequence(node)
    }

    fn get_child(&self, node: &Node, key: &str) -> Child {
        match node {
            Node::Record(record) => self.read_record_field(record.as_ref(), key),
            _ if self.inner.is_map(node) => self.inner.get_child(node, key),
            _ => {
                tracing::trace!(key, type_name = node.type_name(), "No fields to look up");
                Child::Undefined
            }
        }
    }

    fn list_keys(&self, node: &Node) -> ProviderResult<Vec<String>> {
        if self.is_sequence(node) {
            return Err(ProviderError::UnsupportedOperation {
                operation: "list_keys",
                type_name: node.type_name(),
            });
        }

        match node {
            Node::Record(record) => Ok(record::visible_fields(
                record.as_ref(),
                self.config.include_inherited(),
            )),
            _ if self.inner.is_map(node) => self.inner.list_keys(node),
            _ => Ok(Vec::new()),
        }
    }

    fn to_sequence_view(&self, node: &Node) -> ProviderResult<SequenceView> {
        match node {
            Node::Array(array) => Ok(SequenceView::materialize(array.as_ref())),
            _ => self.inner.to_sequence_view(node),
        }
    }

    fn length(&self, node: &Node) -> ProviderResult<usize> {
        match node {
            Node::Array(array) => Ok(array.len()),
            _ => self.inner.length(node),
        }
    }
}
