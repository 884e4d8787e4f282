//! Error types for walker operations.

use thiserror::Error;

/// Structured error types for selector evaluation.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalkError {
    /// Traversal went deeper than the configured bound
    #[error("Traversal exceeded maximum depth of {limit}")]
    DepthLimitExceeded { limit: usize },

    /// A single-result read was given a selector that can match many nodes
    #[error("Selector step {position} ({step}) can match more than one node")]
    IndefiniteSelector { position: usize, step: String },
}

impl WalkError {
    /// Check if this error is a depth bound violation
    pub fn is_depth_exceeded(&self) -> bool {
        matches!(self, WalkError::DepthLimitExceeded { .. })
    }

    /// Check if this error rejected an indefinite selector
    pub fn is_indefinite(&self) -> bool {
        matches!(self, WalkError::IndefiniteSelector { .. })
    }
}

// Conversion from WalkError to the main Error type
impl From<WalkError> for crate::Error {
    fn from(err: WalkError) -> Self {
        crate::Error::Walk(err)
    }
}
