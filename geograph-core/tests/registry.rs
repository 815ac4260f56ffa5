//! Registry lookups, error codes and instrumentation.

use geograph_core::{
    GeneratorError, GeneratorErrorCode, Kwargs, MappedTriples, RegistryError, RegistryErrorCode,
    registry, to_dataset,
};
use geograph_test_support::tracing::RecordingLayer;
use rstest::rstest;
use serde_json::{Value, json};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

fn make_err(name: &str, kwargs: &Kwargs) -> RegistryError {
    match registry().make(name, kwargs) {
        Ok(generator) => panic!("{} must not build", generator.name()),
        Err(err) => err,
    }
}

fn kwargs(value: Value) -> Kwargs {
    match value {
        Value::Object(map) => map,
        other => panic!("kwargs must be a JSON object, got {other}"),
    }
}

#[rstest]
#[case(GeneratorError::ChainLengthTooShort { got: 1 }, GeneratorErrorCode::ChainLengthTooShort)]
#[case(GeneratorError::ChainWidthTooSmall { got: 0 }, GeneratorErrorCode::ChainWidthTooSmall)]
#[case(GeneratorError::ChainLeavesTooFew { got: 1 }, GeneratorErrorCode::ChainLeavesTooFew)]
#[case(GeneratorError::TooFewSpokes { got: 2 }, GeneratorErrorCode::TooFewSpokes)]
#[case(
    GeneratorError::NotDivisibleByThree { k: 4 },
    GeneratorErrorCode::NotDivisibleByThree,
)]
fn generator_errors_expose_stable_codes(
    #[case] error: GeneratorError,
    #[case] expected: GeneratorErrorCode,
) {
    assert_eq!(error.code(), expected);
    assert!(error.code().as_str().starts_with("GEOGRAPH_"));
    assert_eq!(error.code().to_string(), expected.as_str());
}

#[rstest]
#[case("pentagon", json!({}), RegistryErrorCode::UnknownTopology, None)]
#[case("Line", json!({"length": 3}), RegistryErrorCode::InvalidArguments, None)]
#[case(
    "Wheel",
    json!({"spokes": 1}),
    RegistryErrorCode::GeneratorFailure,
    Some(GeneratorErrorCode::TooFewSpokes),
)]
#[case(
    "ChainGenerator",
    json!({"length": 4, "leaves": 1}),
    RegistryErrorCode::GeneratorFailure,
    Some(GeneratorErrorCode::ChainLeavesTooFew),
)]
fn registry_failures_carry_codes(
    #[case] name: &str,
    #[case] value: Value,
    #[case] expected: RegistryErrorCode,
    #[case] inner: Option<GeneratorErrorCode>,
) {
    let err = make_err(name, &kwargs(value));
    assert_eq!(err.code(), expected);
    assert_eq!(err.generator_code(), inner);
}

#[rstest]
fn unknown_topology_lists_alternatives() {
    let err = make_err("dodecahedron", &Kwargs::new());
    let RegistryError::UnknownTopology { available, .. } = &err else {
        panic!("expected an unknown-topology error, got {err:?}");
    };
    assert!(available.contains("squaregrid2d"));
    assert!(err.to_string().contains("dodecahedron"));
}

#[rstest]
fn every_listed_name_resolves_to_itself() {
    for name in registry().names() {
        assert_eq!(registry().resolve(name), Ok(name));
        assert_eq!(registry().resolve(&name.to_uppercase()), Ok(name));
    }
}

#[rstest]
fn make_and_adapt_are_instrumented() {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let dataset = tracing::subscriber::with_default(subscriber, || {
        let grid = registry()
            .make("square_grid_2d", &kwargs(json!({"rows": 3, "columns": 3})))
            .expect("grid must build");
        to_dataset(&grid, &MappedTriples::consumer(), true).expect("grid must map")
    });
    assert_eq!(dataset.num_entities(), 9);

    let make = layer.span("registry.make").expect("registry span recorded");
    assert_eq!(
        make.fields.get("topology").map(String::as_str),
        Some("squaregrid2d")
    );
    assert_eq!(make.fields.get("arguments").map(String::as_str), Some("2"));

    let adapt = layer.span("adapter.to_dataset").expect("adapter span recorded");
    assert_eq!(adapt.fields.get("triples").map(String::as_str), Some("12"));
    assert_eq!(adapt.fields.get("inverse").map(String::as_str), Some("true"));
    assert!(layer.has_message("mapped triples created"));
}

#[rstest]
fn failed_lookups_log_the_error() {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    tracing::subscriber::with_default(subscriber, || {
        let _ = registry().make("nonexistent", &Kwargs::new());
    });
    let errors = layer.events_at(Level::ERROR);
    assert_eq!(errors.len(), 1);
    let rendered = errors[0].fields.get("error").cloned().unwrap_or_default();
    assert!(rendered.contains("nonexistent"), "unexpected error field: {rendered}");
}
