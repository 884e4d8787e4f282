//! Constants used throughout the structpath library.

/// Default bound on how deep a [`Walker`](crate::walk::Walker) descends below its root.
///
/// Object graphs may be cyclic, so recursive steps need a hard stop.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Name reported by [`Node::type_name`](crate::Node::type_name) for absent nodes.
pub const NULL_TYPE_NAME: &str = "null";
