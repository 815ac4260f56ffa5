//! Benchmark harness for knowledge-graph embedding models on generated graphs.
//!
//! Each experiment names a topology, its keyword arguments and whether
//! inverse triples should be trained. For every experiment, model and trial
//! the harness writes the triples to disk, asks a [`Trainer`] for a results
//! document and caches it under a content-addressed directory:
//!
//! ```text
//! <directory>/<digest>/<model>/trials/<trial:03>/{triples.tsv,results.json}
//! ```
//!
//! The collated scores land in `<directory>/results.tsv`.

mod experiment;
mod harness;
mod trainer;


use std::{env, io, path::PathBuf, process::ExitStatus};

use geograph_core::{MappedTriplesError, RegistryError};
use thiserror::Error;

pub use self::{
    experiment::{Experiment, default_experiments, load_experiments, normalize_model},
    harness::{BenchmarkSettings, Harness, ResultRow, TrialOutcome, extract_metric, write_results},
    trainer::{ExternalTrainer, Trainer, TrainingRequest},
};

/// Trials run per experiment and model unless overridden.
pub const DEFAULT_TRIALS: usize = 13;
/// Device passed to the trainer unless overridden.
pub const DEFAULT_DEVICE: &str = "cpu";
/// Metric extracted from each results document unless overridden.
pub const DEFAULT_METRIC: &str = "adjusted_arithmetic_mean_rank_index";
/// Models evaluated on every experiment.
pub const MODELS: [&str; 4] = ["TransE", "TransD", "PairRE", "FixedModel"];

const HOME_ENV: &str = "GEOGRAPH_HOME";

/// Errors raised while running benchmarks.
#[derive(Debug, Error)]
pub enum BenchmarkError {
    /// The experiment's generator could not be built.
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// The generated graph could not be turned into a dataset.
    #[error(transparent)]
    Dataset(#[from] MappedTriplesError),
    /// Reading or writing benchmark files failed.
    #[error("benchmark I/O failed for `{path}`: {source}")]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A JSON document on disk did not parse.
    #[error("invalid JSON in `{path}`: {source}")]
    Json {
        /// Path of the document.
        path: PathBuf,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// The trainer could not be started.
    #[error("failed to launch trainer `{program}`: {source}")]
    TrainerLaunch {
        /// Trainer program.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The trainer exited unsuccessfully.
    #[error("trainer `{program}` exited with {status}: {stderr}")]
    TrainerFailed {
        /// Trainer program.
        program: String,
        /// Exit status.
        status: ExitStatus,
        /// Captured standard error.
        stderr: String,
    },
    /// The trainer's standard output was not a JSON document.
    #[error("trainer `{program}` printed invalid JSON: {source}")]
    TrainerOutput {
        /// Trainer program.
        program: String,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// A results document lacked `metrics.<metric>.both.realistic`.
    #[error("results document has no numeric `metrics.{metric}.both.realistic`")]
    MissingMetric {
        /// Metric that was looked up.
        metric: String,
    },
    /// `GEOGRAPH_HOME` is unset and no home directory could be determined.
    #[error("cannot locate a home directory; set GEOGRAPH_HOME or pass --directory")]
    NoHomeDirectory,
}

/// Directory holding cached benchmark results.
///
/// Uses `$GEOGRAPH_HOME/benchmark` when set, otherwise
/// `~/.data/geograph/benchmark`.
///
/// # Errors
/// Returns [`BenchmarkError::NoHomeDirectory`] when neither location can be
/// determined.
pub fn default_directory() -> Result<PathBuf, BenchmarkError> {
    if let Some(root) = env::var_os(HOME_ENV).filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(root).join("benchmark"));
    }
    home::home_dir()
        .map(|home| home.join(".data").join("geograph").join("benchmark"))
        .ok_or(BenchmarkError::NoHomeDirectory)
}
