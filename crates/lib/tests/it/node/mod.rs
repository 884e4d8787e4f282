//! Node model integration tests
//!
//! This module tests the Node enum, the Child marker, and conversions from
//! decoded JSON and stored field values.

mod child_tests;
mod model_tests;
