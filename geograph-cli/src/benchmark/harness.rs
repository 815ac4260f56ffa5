use std::{
    fs,
    path::{Path, PathBuf},
};

use geograph_core::{MappedTriples, Triple, to_dataset};
use serde_json::Value;
use tracing::{Span, debug, field, info, instrument};

use super::{
    BenchmarkError, DEFAULT_DEVICE, DEFAULT_METRIC, DEFAULT_TRIALS, MODELS,
    experiment::{Experiment, normalize_model},
    trainer::{Trainer, TrainingRequest},
};

const RESULTS_FILE: &str = "results.json";
const TRIPLES_FILE: &str = "triples.tsv";
const TABLE_FILE: &str = "results.tsv";

/// Knobs shared by every run of the harness.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchmarkSettings {
    /// Trials per experiment and model.
    pub trials: usize,
    /// Device passed to the trainer.
    pub device: String,
    /// Metric extracted from results documents.
    pub metric: String,
    /// Re-run trials even when cached results exist.
    pub force: bool,
    /// Root of the results cache.
    pub directory: PathBuf,
}

impl BenchmarkSettings {
    /// Default settings rooted at `directory`.
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            device: DEFAULT_DEVICE.to_owned(),
            metric: DEFAULT_METRIC.to_owned(),
            force: false,
            directory: directory.into(),
        }
    }

    fn trial_directory(&self, digest: &str, model: &str, trial: usize) -> PathBuf {
        self.directory
            .join(digest)
            .join(model)
            .join("trials")
            .join(format!("{trial:03}"))
    }
}

/// Results document for one trial.
#[derive(Clone, Debug, PartialEq)]
pub struct TrialOutcome {
    /// Digest of the experiment.
    pub digest: String,
    /// Zero-based trial index, also used as the seed.
    pub trial: usize,
    /// Whether the document came from the cache.
    pub cached: bool,
    /// The trainer's results document.
    pub results: Value,
}

/// One line of the collated results table.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultRow {
    /// Digest of the experiment.
    pub digest: String,
    /// Normalised model name.
    pub model: String,
    /// Metric value rounded to three decimals.
    pub score: f64,
}

/// Reads `metrics.<metric>.both.realistic` from a results document, rounded
/// to three decimals.
///
/// # Errors
/// Returns [`BenchmarkError::MissingMetric`] when the path is absent or not a
/// number.
///
/// # Examples
/// ```
/// use geograph_cli::benchmark::extract_metric;
/// use serde_json::json;
///
/// let results = json!({"metrics": {"mrr": {"both": {"realistic": 0.87654}}}});
/// assert_eq!(extract_metric(&results, "mrr")?, 0.877);
/// # Ok::<(), geograph_cli::benchmark::BenchmarkError>(())
/// ```
pub fn extract_metric(results: &Value, metric: &str) -> Result<f64, BenchmarkError> {
    results
        .get("metrics")
        .and_then(|metrics| metrics.get(metric))
        .and_then(|entry| entry.get("both"))
        .and_then(|both| both.get("realistic"))
        .and_then(Value::as_f64)
        .map(|value| (value * 1000.0).round() / 1000.0)
        .ok_or_else(|| BenchmarkError::MissingMetric {
            metric: metric.to_owned(),
        })
}

/// Writes `rows` as a tab-separated table with a `digest, model, <metric>`
/// header.
///
/// # Errors
/// Returns [`BenchmarkError::Io`] when the file cannot be written.
pub fn write_results(path: &Path, metric: &str, rows: &[ResultRow]) -> Result<(), BenchmarkError> {
    let header = format!("digest\tmodel\t{metric}\n");
    let table: String = std::iter::once(header)
        .chain(
            rows.iter()
                .map(|row| format!("{}\t{}\t{}\n", row.digest, row.model, row.score)),
        )
        .collect();
    write_file(path, table)
}

fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<(), BenchmarkError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| BenchmarkError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, contents).map_err(|source| BenchmarkError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_cached(path: &Path) -> Result<Value, BenchmarkError> {
    let raw = fs::read_to_string(path).map_err(|source| BenchmarkError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| BenchmarkError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn render_triples(triples: &[Triple]) -> String {
    triples.iter().map(|triple| format!("{triple}\n")).collect()
}

/// Runs experiments through a [`Trainer`] with on-disk caching.
#[derive(Debug)]
pub struct Harness<T> {
    settings: BenchmarkSettings,
    trainer: T,
}

impl<T: Trainer> Harness<T> {
    /// Creates a harness.
    #[must_use]
    pub const fn new(settings: BenchmarkSettings, trainer: T) -> Self {
        Self { settings, trainer }
    }

    /// Settings in use.
    #[must_use]
    pub const fn settings(&self) -> &BenchmarkSettings {
        &self.settings
    }

    /// The wrapped trainer.
    #[must_use]
    pub const fn trainer(&self) -> &T {
        &self.trainer
    }

    /// Runs every trial of `experiment` for `model`.
    ///
    /// Cached `results.json` files are reused unless the settings force a
    /// re-run.
    ///
    /// # Errors
    /// Returns [`BenchmarkError`] when the generator cannot be built, files
    /// cannot be read or written, or the trainer fails.
    #[instrument(
        name = "benchmark.run",
        err,
        skip(self, experiment),
        fields(digest = field::Empty, generator = %experiment.generator, trials = self.settings.trials),
    )]
    pub fn run(
        &self,
        experiment: &Experiment,
        model: &str,
    ) -> Result<Vec<TrialOutcome>, BenchmarkError> {
        let digest = experiment.digest();
        Span::current().record("digest", field::display(&digest));
        let model_key = normalize_model(model);
        let generator = experiment.generator()?;
        let dataset = to_dataset(&generator, &MappedTriples::consumer(), experiment.inverse)?;
        let rendered = render_triples(dataset.triples());

        let mut outcomes = Vec::with_capacity(self.settings.trials);
        for trial in 0..self.settings.trials {
            let directory = self.settings.trial_directory(&digest, &model_key, trial);
            let results_path = directory.join(RESULTS_FILE);
            if results_path.is_file() && !self.settings.force {
                debug!(trial, path = %results_path.display(), "reusing cached results");
                outcomes.push(TrialOutcome {
                    digest: digest.clone(),
                    trial,
                    cached: true,
                    results: read_cached(&results_path)?,
                });
                continue;
            }

            let triples_path = directory.join(TRIPLES_FILE);
            write_file(&triples_path, &rendered)?;
            let results = self.trainer.train(&TrainingRequest {
                triples: &triples_path,
                model,
                seed: trial,
                device: &self.settings.device,
                metric: &self.settings.metric,
                create_inverse_triples: dataset.create_inverse_triples(),
            })?;
            let document = serde_json::to_string_pretty(&results).map_err(|source| {
                BenchmarkError::Json {
                    path: results_path.clone(),
                    source,
                }
            })?;
            write_file(&results_path, document)?;
            info!(trial, model = %model_key, "trial completed");
            outcomes.push(TrialOutcome {
                digest: digest.clone(),
                trial,
                cached: false,
                results,
            });
        }
        Ok(outcomes)
    }

    /// Runs every experiment against every model in [`MODELS`] and writes the
    /// collated table to `<directory>/results.tsv`.
    ///
    /// # Errors
    /// Propagates the first failure from [`Harness::run`], a missing metric,
    /// or a failure writing the table.
    #[instrument(
        name = "benchmark.run_many",
        err,
        skip_all,
        fields(experiments = experiments.len(), models = MODELS.len()),
    )]
    pub fn run_many(&self, experiments: &[Experiment]) -> Result<Vec<ResultRow>, BenchmarkError> {
        let mut rows = Vec::new();
        for experiment in experiments {
            for model in MODELS {
                for outcome in self.run(experiment, model)? {
                    rows.push(ResultRow {
                        digest: outcome.digest,
                        model: normalize_model(model),
                        score: extract_metric(&outcome.results, &self.settings.metric)?,
                    });
                }
            }
        }
        let table = self.settings.directory.join(TABLE_FILE);
        write_results(&table, &self.settings.metric, &rows)?;
        info!(rows = rows.len(), path = %table.display(), "benchmark results written");
        Ok(rows)
    }
}
