//! Benchmark support crate for geograph.
//!
//! Provides the scaled topology workloads and parameter types used by the
//! Criterion benchmarks for triple generation and dataset construction.

pub mod error;
pub mod params;
pub mod workload;
