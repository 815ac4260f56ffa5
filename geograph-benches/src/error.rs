//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of `.expect()`.

use geograph_core::{MappedTriplesError, RegistryError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// The topology could not be built from its scaled arguments.
    #[error("topology construction failed: {0}")]
    Registry(#[from] RegistryError),
    /// The generated triples could not form a dataset.
    #[error("dataset construction failed: {0}")]
    Dataset(#[from] MappedTriplesError),
    /// No scaling rule exists for the topology.
    #[error("no benchmark workload is defined for topology `{topology}`")]
    UnknownWorkload {
        /// Requested topology name.
        topology: String,
    },
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// A description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
}
