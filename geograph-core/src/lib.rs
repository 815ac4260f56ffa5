//! Geometric knowledge graph generators.
//!
//! Every topology is described by a small, validated configuration record
//! implementing [`Generator`]. Generators produce deterministic, restartable
//! streams of [`Triple`]s whose node numbering is part of the public contract,
//! so downstream datasets and drawings stay reproducible between runs.
//!
//! # Examples
//! ```
//! use geograph_core::{Circle, Generator, Triple};
//!
//! let circle = Circle::new(3);
//! assert_eq!(
//!     circle.get_triples(),
//!     vec![Triple::new(0, 0, 1), Triple::new(1, 0, 2), Triple::new(2, 0, 0)],
//! );
//! assert_eq!(circle.number_of_edges(), Some(3));
//! ```

mod adapter;
mod error;
mod factories;
mod generator;
mod generators;
mod registry;
mod triple;

pub use crate::{
    adapter::{MappedTriples, MappedTriplesConsumer, TripleConsumer, to_dataset},
    error::{
        FactoryError, GeneratorError, GeneratorErrorCode, MappedTriplesError,
        MappedTriplesErrorCode, RegistryError, RegistryErrorCode, Result,
    },
    factories::{
        barbell_factory, chain_factory, circle_factory, hex_grid_factory, line_factory,
        lollipop_factory, square_grid_factory, star_factory, tadpole_factory, wheel_factory,
    },
    generator::{Generator, TripleIter},
    generators::{
        Barbell, Chain, Circle, HexLabels, HexagonalGrid2D, Line, Lollipop, SquareGrid2D, Star,
        Tadpole, Wheel, hex_grid_rows,
    },
    registry::{Constructor, Kwargs, Registry, normalize_name, registry},
    triple::Triple,
};
