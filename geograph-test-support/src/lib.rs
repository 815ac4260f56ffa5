//! Shared test utilities used across geograph crates.
//!
//! Triple helpers take plain `(head, relation, tail)` tuples because this
//! crate is itself a dev-dependency of `geograph-core`.

pub mod proptest_profile;
pub mod tracing;
pub mod triples;
