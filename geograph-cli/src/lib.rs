//! Support library for the geograph CLI binary.
//!
//! Exposes the command pipeline, the Graphviz backend and the benchmark
//! harness so doctests and unit tests can drive them without spawning the
//! binary.

pub mod benchmark;
pub mod cli;
pub mod draw;
pub mod logging;
