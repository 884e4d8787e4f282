//!
//! structpath: traverse arbitrary in-memory object graphs as JSON-like node trees.
//! This library provides the introspection layer a path-query engine needs to walk
//! values it knows nothing about.
//!
//! ## Core Concepts
//!
//! * **Nodes (`node::Node`)**: A tagged view over a caller-supplied value: scalars, canonical
//!   lists and maps (as produced by decoding JSON), native arrays, and opaque records.
//! * **Records (`record::Record`)**: The capability a caller's type implements so its stored
//!   fields can be listed and read by name. The `record!` macro derives it from a field list.
//! * **Providers (`provider::NodeProvider`)**: The contract a query engine consumes:
//!   classification, key lookup, key enumeration, element access, and iteration.
//!     * **CanonicalProvider**: Handles values already in canonical JSON shape.
//!     * **RecordProvider**: Layers over a generic provider and adds arrays and records.
//! * **Walker (`walk::Walker`)**: A minimal step-list evaluator that drives any provider and
//!   bounds recursive traversal of cyclic graphs.
//!
//! Missing keys never fail: they resolve to [`Child::Undefined`]. Asking a node for an
//! operation its shape does not support (the keys of a sequence, iterating a record) fails
//! with a [`provider::ProviderError`] naming the node's type.

pub mod constants;
pub mod node;
pub mod provider;
pub mod record;
pub mod walk;

pub use node::{Child, Node};
pub use provider::{NodeProvider, RecordProvider};

/// Result type used throughout the structpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the structpath library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration could not be decoded
    #[error("Configuration error: {0}")]
    Config(#[source] serde_json::Error),

    /// Structured provider errors from the provider module
    #[error(transparent)]
    Provider(provider::ProviderError),

    /// Structured walker errors from the walk module
    #[error(transparent)]
    Walk(walk::WalkError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Config(_) => "config",
            Error::Provider(_) => "provider",
            Error::Walk(_) => "walk",
        }
    }

    /// Check if this error reports a node of the wrong shape.
    ///
    /// Operations on an absent node are not shape mismatches.
    pub fn is_shape_mismatch(&self) -> bool {
        match self {
            Error::Provider(provider_err) => provider_err.is_shape_mismatch(),
            _ => false,
        }
    }

    /// Check if this error is an unsupported-operation condition.
    pub fn is_unsupported(&self) -> bool {
        match self {
            Error::Provider(provider_err) => provider_err.is_unsupported(),
            _ => false,
        }
    }

    /// Check if this error is an out-of-range index.
    pub fn is_out_of_bounds(&self) -> bool {
        match self {
            Error::Provider(provider_err) => provider_err.is_out_of_bounds(),
            _ => false,
        }
    }

    /// Check if this error stopped a traversal at its depth bound.
    pub fn is_depth_exceeded(&self) -> bool {
        match self {
            Error::Walk(walk_err) => walk_err.is_depth_exceeded(),
            _ => false,
        }
    }

    /// Check if this error is configuration-related.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}
