//! Provider integration tests
//!
//! This module tests CanonicalProvider and RecordProvider against record graphs,
//! native arrays, and decoded JSON. Tests are organized by operation.

mod classify_tests;
mod lookup_tests;
