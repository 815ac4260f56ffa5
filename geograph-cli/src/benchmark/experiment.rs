use std::{collections::BTreeMap, fs, path::Path};

use geograph_core::{Generator, Kwargs, registry};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

use super::BenchmarkError;

const DIGEST_BYTES: usize = 4;
const MODEL_SUFFIX: &str = "model";

/// One benchmark configuration: a topology and whether to train inverses.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Experiment {
    /// Registry name of the topology.
    pub generator: String,
    /// Keyword arguments for the topology.
    #[serde(default)]
    pub generator_kwargs: Kwargs,
    /// Whether the trainer should add inverse triples.
    #[serde(default)]
    pub inverse: bool,
}

impl Experiment {
    /// Creates an experiment from a topology name and its arguments.
    #[must_use]
    pub fn new(generator: impl Into<String>, generator_kwargs: Kwargs, inverse: bool) -> Self {
        Self {
            generator: generator.into(),
            generator_kwargs,
            inverse,
        }
    }

    /// First eight hex characters of the SHA-256 of the experiment as
    /// compact JSON with sorted keys.
    ///
    /// # Examples
    /// ```
    /// use geograph_cli::benchmark::default_experiments;
    ///
    /// let digest = default_experiments()[0].digest();
    /// assert_eq!(digest.len(), 8);
    /// assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    /// ```
    #[must_use]
    pub fn digest(&self) -> String {
        let document = sorted(Value::Object(self.to_document()));
        let hash = Sha256::digest(document.to_string().as_bytes());
        hex::encode(&hash[..DIGEST_BYTES])
    }

    /// Builds the experiment's generator through the registry.
    ///
    /// # Errors
    /// Propagates [`geograph_core::RegistryError`] as
    /// [`BenchmarkError::Registry`].
    pub fn generator(&self) -> Result<Box<dyn Generator>, BenchmarkError> {
        Ok(registry().make(&self.generator, &self.generator_kwargs)?)
    }

    fn to_document(&self) -> Kwargs {
        let mut document = Kwargs::new();
        document.insert("generator".to_owned(), Value::from(self.generator.as_str()));
        document.insert(
            "generator_kwargs".to_owned(),
            Value::Object(self.generator_kwargs.clone()),
        );
        document.insert("inverse".to_owned(), Value::from(self.inverse));
        document
    }
}

/// Rebuilds every object with its keys in sorted order.
fn sorted(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered: BTreeMap<String, Value> =
                map.into_iter().map(|(key, value)| (key, sorted(value))).collect();
            Value::Object(ordered.into_iter().collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sorted).collect()),
        other => other,
    }
}

fn grid(size: usize, inverse: bool) -> Experiment {
    let mut kwargs = Kwargs::new();
    kwargs.insert("rows".to_owned(), Value::from(size));
    kwargs.insert("columns".to_owned(), Value::from(size));
    Experiment::new("SquareGrid2D", kwargs, inverse)
}

/// The built-in square-grid experiments.
#[must_use]
pub fn default_experiments() -> Vec<Experiment> {
    vec![
        grid(5, false),
        grid(30, true),
        grid(30, false),
        grid(45, true),
    ]
}

/// Reads a JSON array of experiments from `path`.
///
/// # Errors
/// Returns [`BenchmarkError::Io`] when the file cannot be read and
/// [`BenchmarkError::Json`] when it is not a valid experiment list.
pub fn load_experiments(path: &Path) -> Result<Vec<Experiment>, BenchmarkError> {
    let raw = fs::read_to_string(path).map_err(|source| BenchmarkError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| BenchmarkError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Canonical directory name for a model: lowercase alphanumerics without a
/// trailing `model` suffix.
///
/// # Examples
/// ```
/// use geograph_cli::benchmark::normalize_model;
///
/// assert_eq!(normalize_model("TransE"), "transe");
/// assert_eq!(normalize_model("FixedModel"), "fixed");
/// ```
#[must_use]
pub fn normalize_model(model: &str) -> String {
    let compact: String = model
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    match compact.strip_suffix(MODEL_SUFFIX) {
        Some(stem) if !stem.is_empty() => stem.to_owned(),
        _ => compact,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use serde_json::json;
    use tempfile::TempDir;

    fn kwargs(value: Value) -> Kwargs {
        match value {
            Value::Object(map) => map,
            other => panic!("kwargs must be an object, got {other}"),
        }
    }

    #[rstest]
    fn digest_ignores_key_order() {
        let forward = Experiment::new("Line", kwargs(json!({"n": 3, "m": 1})), false);
        let mut reversed = Kwargs::new();
        reversed.insert("m".to_owned(), Value::from(1));
        reversed.insert("n".to_owned(), Value::from(3));
        let backward = Experiment::new("Line", reversed, false);
        assert_eq!(forward.digest(), backward.digest());
    }

    #[rstest]
    fn digest_is_stable_sha256_prefix() {
        let experiment = Experiment::new("Line", kwargs(json!({"n": 3})), false);
        let expected = Sha256::digest(
            br#"{"generator":"Line","generator_kwargs":{"n":3},"inverse":false}"#,
        );
        assert_eq!(experiment.digest(), hex::encode(&expected[..4]));
    }

    #[rstest]
    fn default_experiments_have_distinct_digests() {
        let experiments = default_experiments();
        let digests: std::collections::BTreeSet<_> =
            experiments.iter().map(Experiment::digest).collect();
        assert_eq!(experiments.len(), 4);
        assert_eq!(digests.len(), 4);
        assert!(experiments.iter().all(|e| e.generator == "SquareGrid2D"));
    }

    #[rstest]
    fn experiments_load_from_json() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("experiments.json");
        fs::write(
            &path,
            r#"[{"generator": "Star", "generator_kwargs": {"spokes": 4}, "inverse": true},
                {"generator": "Line", "generator_kwargs": {"n": 3}}]"#,
        )
        .expect("write experiments");
        let experiments = load_experiments(&path).expect("experiments parse");
        assert_eq!(experiments.len(), 2);
        assert!(experiments[0].inverse);
        assert!(!experiments[1].inverse);
        let star = experiments[0].generator().expect("star builds");
        assert_eq!(star.number_of_edges(), Some(4));
    }

    #[rstest]
    fn malformed_experiment_files_are_reported() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("experiments.json");
        fs::write(&path, r#"[{"topology": "Line"}]"#).expect("write experiments");
        let err = load_experiments(&path).expect_err("unknown field must fail");
        assert!(matches!(err, BenchmarkError::Json { .. }));
    }

    #[rstest]
    #[case("TransE", "transe")]
    #[case("PairRE", "pairre")]
    #[case("FixedModel", "fixed")]
    #[case("model", "model")]
    fn model_names_normalise(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_model(raw), expected);
    }
}
