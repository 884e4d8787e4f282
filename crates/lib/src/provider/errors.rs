//! Error types for node provider operations.
//!
//! Only shape mismatches are errors. A key that does not resolve, including a
//! field whose read was denied, is reported through
//! [`Child::Undefined`](crate::Child::Undefined) and never shows up here.

use thiserror::Error;

/// Structured error types for provider operations.
///
/// Shape errors carry the offending node's type name (see
/// [`Node::type_name`](crate::Node::type_name)) so the query engine can report
/// which value it tripped over.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The operation has no meaning for this node's shape
    #[error("Unsupported operation '{operation}' on {type_name}")]
    UnsupportedOperation {
        operation: &'static str,
        type_name: &'static str,
    },

    /// Iteration was requested on a node that is not sequence-shaped
    #[error("Cannot iterate over {type_name}")]
    NotIterable { type_name: &'static str },

    /// The operation was given an absent node
    #[error("Cannot {operation} an absent node")]
    AbsentNode { operation: &'static str },

    /// A sequence view was requested for a node that is not sequence-shaped
    #[error("Expected a sequence, found {type_name}")]
    NotASequence { type_name: &'static str },

    /// Element index past the end of the sequence
    #[error("Index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Length was requested for a node that has none
    #[error("{type_name} has no length")]
    NoLength { type_name: &'static str },
}

impl ProviderError {
    /// Check if this error reports a node of the wrong shape
    ///
    /// An absent node has no shape at all, so [`ProviderError::AbsentNode`] is
    /// not a shape mismatch; see [`ProviderError::is_absent`].
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(
            self,
            ProviderError::UnsupportedOperation { .. }
                | ProviderError::NotIterable { .. }
                | ProviderError::NotASequence { .. }
                | ProviderError::NoLength { .. }
        )
    }

    /// Check if this error is an unsupported-operation condition
    pub fn is_unsupported(&self) -> bool {
        matches!(self, ProviderError::UnsupportedOperation { .. })
    }

    /// Check if this error is an out-of-range index
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, ProviderError::IndexOutOfBounds { .. })
    }

    /// Check if this error was caused by an absent node
    pub fn is_absent(&self) -> bool {
        matches!(self, ProviderError::AbsentNode { .. })
    }

    /// Get the offending node's type name, if the error carries one
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            ProviderError::UnsupportedOperation { type_name, .. }
            | ProviderError::NotIterable { type_name }
            | ProviderError::NotASequence { type_name }
            | ProviderError::NoLength { type_name } => Some(*type_name),
            ProviderError::AbsentNode { .. } | ProviderError::IndexOutOfBounds { .. } => None,
        }
    }

    /// Get the operation name if this is an operation-specific error
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            ProviderError::UnsupportedOperation { operation, .. }
            | ProviderError::AbsentNode { operation } => Some(*operation),
            _ => None,
        }
    }
}

// Conversion from ProviderError to the main Error type
impl From<ProviderError> for crate::Error {
    fn from(err: ProviderError) -> Self {
        crate::Error::Provider(err)
    }
}
