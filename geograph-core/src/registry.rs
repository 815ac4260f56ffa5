//! Name-based construction of generators.
//!
//! The registry maps canonical topology names to constructor functions that
//! decode a keyword-argument object into the topology's parameters. Lookups
//! are forgiving about case, punctuation and a trailing `Generator` suffix so
//! configuration files can say `SquareGrid2D`, `square_grid_2d` or
//! `SquareGrid2DGenerator` interchangeably.

use std::{collections::BTreeMap, sync::OnceLock};

use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{Span, debug, field, instrument};

use crate::{
    error::{GeneratorError, RegistryError},
    generator::Generator,
    generators::{
        Barbell, Chain, Circle, HexLabels, HexagonalGrid2D, Line, Lollipop, SquareGrid2D, Star,
        Tadpole, Wheel,
    },
};

/// Keyword arguments accepted by [`Registry::make`].
pub type Kwargs = serde_json::Map<String, Value>;

/// Builds a generator from decoded keyword arguments.
pub type Constructor = fn(&Kwargs) -> Result<Box<dyn Generator>, RegistryError>;

const SUFFIX: &str = "generator";

static BUILTIN: OnceLock<Registry> = OnceLock::new();

/// Returns the process-wide registry of built-in topologies.
///
/// # Examples
/// ```
/// use geograph_core::registry;
///
/// assert!(registry().contains("SquareGrid2D"));
/// ```
pub fn registry() -> &'static Registry {
    BUILTIN.get_or_init(Registry::builtin)
}

/// Normalises a topology name for lookup.
///
/// # Examples
/// ```
/// use geograph_core::normalize_name;
///
/// assert_eq!(normalize_name("SquareGrid2DGenerator"), "squaregrid2d");
/// assert_eq!(normalize_name("square_grid-2d"), "squaregrid2d");
/// ```
#[must_use]
pub fn normalize_name(name: &str) -> String {
    let compact: String = name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    match compact.strip_suffix(SUFFIX) {
        Some(stem) if !stem.is_empty() => stem.to_owned(),
        _ => compact,
    }
}

/// Static table of topology constructors keyed by canonical name.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    constructors: BTreeMap<&'static str, Constructor>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in topology.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("line", make_line);
        registry.register("circle", make_circle);
        registry.register("squaregrid2d", make_square_grid);
        registry.register("hexagonalgrid2d", make_hex_grid);
        registry.register("chain", make_chain);
        registry.register("star", make_star);
        registry.register("wheel", make_wheel);
        registry.register("barbell", make_barbell);
        registry.register("tadpole", make_tadpole);
        registry.register("lollipop", make_lollipop);
        registry
    }

    /// Adds or replaces the constructor for `name`, which must already be in
    /// normalised form.
    pub fn register(&mut self, name: &'static str, constructor: Constructor) {
        self.constructors.insert(name, constructor);
    }

    /// Registered canonical names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.constructors.keys().copied().collect()
    }

    /// Whether `name` resolves to a registered topology.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_ok()
    }

    /// Resolves `name` to its canonical form.
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownTopology`] when nothing matches.
    pub fn resolve(&self, name: &str) -> Result<&'static str, RegistryError> {
        self.lookup(name).map(|(canonical, _)| canonical)
    }

    fn lookup(&self, name: &str) -> Result<(&'static str, Constructor), RegistryError> {
        let normalized = normalize_name(name);
        self.constructors
            .get_key_value(normalized.as_str())
            .map(|(canonical, constructor)| (*canonical, *constructor))
            .ok_or_else(|| RegistryError::UnknownTopology {
                name: name.to_owned(),
                available: self.names().join(", "),
            })
    }

    /// Constructs the topology called `name` from `kwargs`.
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownTopology`] for unrecognised names,
    /// [`RegistryError::InvalidArguments`] when `kwargs` has unknown or
    /// ill-typed keys or lacks a required one, and
    /// [`RegistryError::Generator`] when the topology rejects the values.
    ///
    /// # Examples
    /// ```
    /// use geograph_core::{Kwargs, registry};
    /// use serde_json::json;
    ///
    /// let kwargs: Kwargs = serde_json::from_value(json!({"rows": 2, "columns": 3}))?;
    /// let grid = registry().make("SquareGrid2D", &kwargs)?;
    /// assert_eq!(grid.name(), "squaregrid2d");
    /// assert_eq!(grid.number_of_nodes(), Some(6));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[instrument(
        name = "registry.make",
        err,
        skip(self, kwargs),
        fields(topology = field::Empty, arguments = kwargs.len()),
    )]
    pub fn make(&self, name: &str, kwargs: &Kwargs) -> Result<Box<dyn Generator>, RegistryError> {
        let (canonical, constructor) = self.lookup(name)?;
        Span::current().record("topology", field::display(canonical));
        let generator = constructor(kwargs)?;
        debug!(
            topology = canonical,
            nodes = ?generator.number_of_nodes(),
            edges = ?generator.number_of_edges(),
            "generator constructed"
        );
        Ok(generator)
    }
}

fn decode<P: DeserializeOwned>(topology: &'static str, kwargs: &Kwargs) -> Result<P, RegistryError> {
    serde_json::from_value(Value::Object(kwargs.clone())).map_err(|err| {
        RegistryError::InvalidArguments {
            topology,
            reason: err.to_string(),
        }
    })
}

fn validated<G: Generator + 'static>(
    topology: &'static str,
    built: Result<G, GeneratorError>,
) -> Result<Box<dyn Generator>, RegistryError> {
    built
        .map(|generator| Box::new(generator) as Box<dyn Generator>)
        .map_err(|error| RegistryError::Generator { topology, error })
}

const fn yes() -> bool {
    true
}

const fn one() -> usize {
    1
}

const fn two() -> usize {
    2
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SizeArgs {
    n: usize,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct GridArgs {
    rows: usize,
    columns: usize,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct HexArgs {
    rows: usize,
    columns: usize,
    #[serde(default)]
    labels: HexLabels,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ChainArgs {
    length: usize,
    #[serde(default = "one")]
    width: usize,
    #[serde(default = "two")]
    leaves: usize,
    #[serde(default = "yes")]
    heterogeneous: bool,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SpokeArgs {
    spokes: usize,
    #[serde(default)]
    sink: bool,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct StickArgs {
    m: usize,
    n: usize,
    #[serde(default)]
    sink: bool,
}

fn make_line(kwargs: &Kwargs) -> Result<Box<dyn Generator>, RegistryError> {
    let SizeArgs { n } = decode("line", kwargs)?;
    Ok(Box::new(Line::new(n)))
}

fn make_circle(kwargs: &Kwargs) -> Result<Box<dyn Generator>, RegistryError> {
    let SizeArgs { n } = decode("circle", kwargs)?;
    Ok(Box::new(Circle::new(n)))
}

fn make_square_grid(kwargs: &Kwargs) -> Result<Box<dyn Generator>, RegistryError> {
    let GridArgs { rows, columns } = decode("squaregrid2d", kwargs)?;
    Ok(Box::new(SquareGrid2D::new(rows, columns)))
}

fn make_hex_grid(kwargs: &Kwargs) -> Result<Box<dyn Generator>, RegistryError> {
    let HexArgs {
        rows,
        columns,
        labels,
    } = decode("hexagonalgrid2d", kwargs)?;
    Ok(Box::new(HexagonalGrid2D::with_labels(rows, columns, labels)))
}

fn make_chain(kwargs: &Kwargs) -> Result<Box<dyn Generator>, RegistryError> {
    let ChainArgs {
        length,
        width,
        leaves,
        heterogeneous,
    } = decode("chain", kwargs)?;
    validated("chain", Chain::new(length, width, leaves, heterogeneous))
}

fn make_star(kwargs: &Kwargs) -> Result<Box<dyn Generator>, RegistryError> {
    let SpokeArgs { spokes, sink } = decode("star", kwargs)?;
    validated("star", Star::new(spokes, sink))
}

fn make_wheel(kwargs: &Kwargs) -> Result<Box<dyn Generator>, RegistryError> {
    let SpokeArgs { spokes, sink } = decode("wheel", kwargs)?;
    validated("wheel", Wheel::new(spokes, sink))
}

fn make_barbell(kwargs: &Kwargs) -> Result<Box<dyn Generator>, RegistryError> {
    let SizeArgs { n } = decode("barbell", kwargs)?;
    Ok(Box::new(Barbell::new(n)))
}

fn make_tadpole(kwargs: &Kwargs) -> Result<Box<dyn Generator>, RegistryError> {
    let StickArgs { m, n, sink } = decode("tadpole", kwargs)?;
    Ok(Box::new(Tadpole::new(m, n, sink)))
}

fn make_lollipop(kwargs: &Kwargs) -> Result<Box<dyn Generator>, RegistryError> {
    let StickArgs { m, n, sink } = decode("lollipop", kwargs)?;
    Ok(Box::new(Lollipop::new(m, n, sink)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use serde_json::json;

    use crate::error::RegistryErrorCode;

    fn kwargs(value: Value) -> Kwargs {
        match value {
            Value::Object(map) => map,
            other => panic!("kwargs must be an object, got {other}"),
        }
    }

    fn make(name: &str, value: Value) -> Result<Box<dyn Generator>, RegistryError> {
        registry().make(name, &kwargs(value))
    }

    #[rstest]
    #[case("Line", "line")]
    #[case("CircleGenerator", "circle")]
    #[case("square_grid_2d", "squaregrid2d")]
    #[case("HexagonalGrid2D", "hexagonalgrid2d")]
    #[case("LOLLIPOP", "lollipop")]
    fn resolves_spelling_variants(#[case] name: &str, #[case] canonical: &str) {
        assert_eq!(registry().resolve(name), Ok(canonical));
    }

    #[rstest]
    fn lists_all_builtin_topologies() {
        assert_eq!(
            registry().names(),
            vec![
                "barbell",
                "chain",
                "circle",
                "hexagonalgrid2d",
                "line",
                "lollipop",
                "squaregrid2d",
                "star",
                "tadpole",
                "wheel",
            ]
        );
    }

    #[rstest]
    #[case::line("line", json!({"n": 4}), 3)]
    #[case::circle("circle", json!({"n": 4}), 4)]
    #[case::grid("SquareGrid2D", json!({"rows": 2, "columns": 2}), 4)]
    #[case::hex("HexagonalGrid2D", json!({"rows": 1, "columns": 1}), 6)]
    #[case::hex_labels("HexagonalGrid2D", json!({"rows": 1, "columns": 1, "labels": [3, 4, 5]}), 6)]
    #[case::chain("chain", json!({"length": 3}), 8)]
    #[case::chain_full("chain", json!({"length": 3, "width": 2, "leaves": 2, "heterogeneous": false}), 12)]
    #[case::star("star", json!({"spokes": 3}), 3)]
    #[case::wheel("wheel", json!({"spokes": 3, "sink": true}), 6)]
    #[case::barbell("barbell", json!({"n": 3}), 7)]
    #[case::tadpole("tadpole", json!({"m": 3, "n": 2}), 5)]
    #[case::lollipop("lollipop", json!({"m": 3, "n": 2, "sink": true}), 5)]
    fn builds_each_topology(#[case] name: &str, #[case] value: Value, #[case] triples: usize) {
        let generator = match make(name, value) {
            Ok(generator) => generator,
            Err(err) => panic!("{name} must build: {err}"),
        };
        assert_eq!(generator.get_triples().len(), triples);
    }

    #[rstest]
    fn chain_defaults_are_heterogeneous() {
        let generator = match make("chain", json!({"length": 2})) {
            Ok(generator) => generator,
            Err(err) => panic!("chain must build: {err}"),
        };
        let relations: Vec<_> = generator.iterate_triples().map(|t| t.relation).collect();
        assert_eq!(relations, vec![0, 0, 2, 2]);
    }

    #[rstest]
    fn unknown_names_are_rejected() {
        let err = make("pentagon", json!({})).err();
        assert!(matches!(
            err,
            Some(RegistryError::UnknownTopology { ref name, .. }) if name == "pentagon"
        ));
        assert_eq!(
            err.map(|err| err.code()),
            Some(RegistryErrorCode::UnknownTopology)
        );
    }

    #[rstest]
    #[case::missing("line", json!({}))]
    #[case::unknown_key("line", json!({"n": 3, "m": 2}))]
    #[case::wrong_type("star", json!({"spokes": "three"}))]
    #[case::negative("circle", json!({"n": -1}))]
    fn bad_arguments_are_rejected(#[case] name: &str, #[case] value: Value) {
        assert!(matches!(
            make(name, value),
            Err(RegistryError::InvalidArguments { .. })
        ));
    }

    #[rstest]
    fn validation_failures_are_wrapped() {
        let err = make("star", json!({"spokes": 2})).err();
        assert_eq!(
            err,
            Some(RegistryError::Generator {
                topology: "star",
                error: GeneratorError::TooFewSpokes { got: 2 },
            })
        );
    }

    #[rstest]
    fn custom_registrations_are_resolvable() {
        let mut custom = Registry::new();
        custom.register("line", make_line);
        assert!(custom.contains("LineGenerator"));
        assert!(!custom.contains("circle"));
    }

    #[rstest]
    fn lookup_pairs_names_with_their_constructors() {
        let mut custom = Registry::new();
        custom.register("ring", make_circle);
        custom.register("path", make_line);

        let (canonical, constructor) = match custom.lookup("RingGenerator") {
            Ok(found) => found,
            Err(err) => panic!("ring is registered: {err}"),
        };
        assert_eq!(canonical, "ring");
        let built = match constructor(&kwargs(json!({"n": 3}))) {
            Ok(generator) => generator,
            Err(err) => panic!("three nodes are valid: {err}"),
        };
        assert_eq!(built.name(), "circle");

        let err = custom.make("square", &Kwargs::new()).err();
        assert!(matches!(
            err,
            Some(RegistryError::UnknownTopology { ref available, .. }) if available == "path, ring"
        ));
    }

    #[rstest]
    #[case("generator", "generator")]
    #[case("", "")]
    fn normalisation_keeps_bare_suffix(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_name(raw), expected);
    }
}
