use std::{
    ffi::OsString,
    path::Path,
    process::{Command, Stdio},
};

use serde_json::Value;
use tracing::{debug, instrument};

use super::BenchmarkError;

/// Everything a trainer needs for one trial.
#[derive(Clone, Copy, Debug)]
pub struct TrainingRequest<'a> {
    /// Tab-separated `head relation tail` rows.
    pub triples: &'a Path,
    /// Model name as given in the experiment list.
    pub model: &'a str,
    /// Random seed, equal to the trial index.
    pub seed: usize,
    /// Device identifier, for example `cpu` or `cuda:0`.
    pub device: &'a str,
    /// Metric used for early stopping and reporting.
    pub metric: &'a str,
    /// Whether inverse triples should be added before training.
    pub create_inverse_triples: bool,
}

/// Trains and evaluates one model on one dataset.
pub trait Trainer {
    /// Runs the trial and returns its results document.
    ///
    /// # Errors
    /// Returns [`BenchmarkError`] when training cannot complete.
    fn train(&self, request: &TrainingRequest<'_>) -> Result<Value, BenchmarkError>;
}

/// Trainer that delegates to an external program.
///
/// The program is invoked as
/// `program [args...] --triples <tsv> --model <m> --seed <s> --device <d> --metric <metric>`,
/// with `--create-inverse-triples` appended when requested, and must print
/// the JSON results document on standard output.
#[derive(Clone, Debug)]
pub struct ExternalTrainer {
    program: OsString,
    args: Vec<OsString>,
}

impl ExternalTrainer {
    /// Wraps `program`.
    #[must_use]
    pub fn new(program: impl Into<OsString>) -> Self {
        Self::with_args(program, Vec::<OsString>::new())
    }

    /// Wraps `program`, passing `args` ahead of the trial arguments, for
    /// example an interpreter and its script.
    #[must_use]
    pub fn with_args<I>(program: impl Into<OsString>, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    fn label(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    fn command(&self, request: &TrainingRequest<'_>) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg("--triples")
            .arg(request.triples)
            .args(["--model", request.model])
            .arg("--seed")
            .arg(request.seed.to_string())
            .args(["--device", request.device])
            .args(["--metric", request.metric]);
        if request.create_inverse_triples {
            command.arg("--create-inverse-triples");
        }
        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        command
    }
}

impl Trainer for ExternalTrainer {
    #[instrument(
        name = "benchmark.train",
        err,
        skip(self, request),
        fields(model = request.model, seed = request.seed),
    )]
    fn train(&self, request: &TrainingRequest<'_>) -> Result<Value, BenchmarkError> {
        let output = self
            .command(request)
            .output()
            .map_err(|source| BenchmarkError::TrainerLaunch {
                program: self.label(),
                source,
            })?;
        if !output.status.success() {
            return Err(BenchmarkError::TrainerFailed {
                program: self.label(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }
        let results = serde_json::from_slice(&output.stdout).map_err(|source| {
            BenchmarkError::TrainerOutput {
                program: self.label(),
                source,
            }
        })?;
        debug!(bytes = output.stdout.len(), "trainer finished");
        Ok(results)
    }
}
