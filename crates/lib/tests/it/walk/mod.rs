//! Walker integration tests
//!
//! This module drives the Walker over record graphs the way a path-query engine
//! would, covering definite reads, multi-match selections, and depth bounds.
