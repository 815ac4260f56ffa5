//! One-call constructors from topology parameters to [`MappedTriples`].

use crate::{
    adapter::{MappedTriples, to_dataset},
    error::FactoryError,
    generator::Generator,
    generators::{
        Barbell, Chain, Circle, HexLabels, HexagonalGrid2D, Line, Lollipop, SquareGrid2D, Star,
        Tadpole, Wheel,
    },
};

fn mapped<G: Generator>(
    generator: &G,
    create_inverse_triples: bool,
) -> Result<MappedTriples, FactoryError> {
    Ok(to_dataset(
        generator,
        &MappedTriples::consumer(),
        create_inverse_triples,
    )?)
}

/// Maps a [`Line`] of `n` nodes.
///
/// # Errors
/// Fails with [`FactoryError::Dataset`] when `n < 2` leaves no edges.
pub fn line_factory(n: usize, create_inverse_triples: bool) -> Result<MappedTriples, FactoryError> {
    mapped(&Line::new(n), create_inverse_triples)
}

/// Maps a [`Circle`] of `n` nodes.
///
/// # Errors
/// Fails with [`FactoryError::Dataset`] when `n == 0`.
pub fn circle_factory(
    n: usize,
    create_inverse_triples: bool,
) -> Result<MappedTriples, FactoryError> {
    mapped(&Circle::new(n), create_inverse_triples)
}

/// Maps a [`SquareGrid2D`].
///
/// # Errors
/// Fails with [`FactoryError::Dataset`] when the grid has no edges.
///
/// # Examples
/// ```
/// use geograph_core::square_grid_factory;
///
/// let grid = square_grid_factory(3, 3, false)?;
/// assert_eq!(grid.num_entities(), 9);
/// assert_eq!(grid.num_relations(), 2);
/// # Ok::<(), geograph_core::FactoryError>(())
/// ```
pub fn square_grid_factory(
    rows: usize,
    columns: usize,
    create_inverse_triples: bool,
) -> Result<MappedTriples, FactoryError> {
    mapped(&SquareGrid2D::new(rows, columns), create_inverse_triples)
}

/// Maps a [`HexagonalGrid2D`] with custom direction labels.
///
/// # Errors
/// Never fails for in-range sizes; the error type is shared with the other
/// factories.
pub fn hex_grid_factory(
    rows: usize,
    columns: usize,
    labels: HexLabels,
    create_inverse_triples: bool,
) -> Result<MappedTriples, FactoryError> {
    mapped(
        &HexagonalGrid2D::with_labels(rows, columns, labels),
        create_inverse_triples,
    )
}

/// Maps a [`Chain`].
///
/// # Errors
/// Fails with [`FactoryError::Generator`] on an invalid chain configuration.
pub fn chain_factory(
    length: usize,
    width: usize,
    leaves: usize,
    heterogeneous: bool,
    create_inverse_triples: bool,
) -> Result<MappedTriples, FactoryError> {
    let chain = Chain::new(length, width, leaves, heterogeneous)?;
    mapped(&chain, create_inverse_triples)
}

/// Maps a [`Star`].
///
/// # Errors
/// Fails with [`FactoryError::Generator`] when `spokes < 3`.
pub fn star_factory(
    spokes: usize,
    sink: bool,
    create_inverse_triples: bool,
) -> Result<MappedTriples, FactoryError> {
    mapped(&Star::new(spokes, sink)?, create_inverse_triples)
}

/// Maps a [`Wheel`].
///
/// # Errors
/// Fails with [`FactoryError::Generator`] when `spokes < 3`.
pub fn wheel_factory(
    spokes: usize,
    sink: bool,
    create_inverse_triples: bool,
) -> Result<MappedTriples, FactoryError> {
    mapped(&Wheel::new(spokes, sink)?, create_inverse_triples)
}

/// Maps a [`Barbell`].
///
/// # Errors
/// Never fails: the bridge edge is always present.
pub fn barbell_factory(
    n: usize,
    create_inverse_triples: bool,
) -> Result<MappedTriples, FactoryError> {
    mapped(&Barbell::new(n), create_inverse_triples)
}

/// Maps a [`Tadpole`].
///
/// # Errors
/// Fails with [`FactoryError::Dataset`] when `m == 0` and `n == 0`.
pub fn tadpole_factory(
    m: usize,
    n: usize,
    sink: bool,
    create_inverse_triples: bool,
) -> Result<MappedTriples, FactoryError> {
    mapped(&Tadpole::new(m, n, sink), create_inverse_triples)
}

/// Maps a [`Lollipop`].
///
/// # Errors
/// Fails with [`FactoryError::Dataset`] when the graph has no edges.
pub fn lollipop_factory(
    m: usize,
    n: usize,
    sink: bool,
    create_inverse_triples: bool,
) -> Result<MappedTriples, FactoryError> {
    mapped(&Lollipop::new(m, n, sink), create_inverse_triples)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    use crate::error::{GeneratorError, MappedTriplesError};

    fn expect_ok(result: Result<MappedTriples, FactoryError>) -> MappedTriples {
        match result {
            Ok(dataset) => dataset,
            Err(err) => panic!("factory must succeed: {err}"),
        }
    }

    #[rstest]
    #[case::line(line_factory(5, false), 5, 1)]
    #[case::circle(circle_factory(5, false), 5, 1)]
    #[case::grid(square_grid_factory(2, 3, false), 6, 2)]
    #[case::hex(hex_grid_factory(1, 1, HexLabels::default(), false), 6, 3)]
    #[case::chain(chain_factory(3, 1, 2, true, false), 7, 3)]
    #[case::star(star_factory(4, true, false), 5, 1)]
    #[case::wheel(wheel_factory(4, false, false), 5, 2)]
    #[case::barbell(barbell_factory(3, false), 6, 2)]
    #[case::tadpole(tadpole_factory(3, 2, false, false), 5, 2)]
    #[case::lollipop(lollipop_factory(4, 1, true, false), 5, 2)]
    fn factories_record_vocabulary_sizes(
        #[case] result: Result<MappedTriples, FactoryError>,
        #[case] entities: usize,
        #[case] relations: usize,
    ) {
        let dataset = expect_ok(result);
        assert_eq!(dataset.num_entities(), entities);
        assert_eq!(dataset.num_relations(), relations);
    }

    #[rstest]
    fn inverse_flag_reaches_the_dataset() {
        let dataset = expect_ok(square_grid_factory(2, 2, true));
        assert!(dataset.create_inverse_triples());
        assert_eq!(dataset.real_num_relations(), 4);
        assert_eq!(dataset.inverse_triples().len(), dataset.triples().len());
    }

    #[rstest]
    fn validation_errors_surface_unchanged() {
        assert_eq!(
            wheel_factory(2, false, false),
            Err(FactoryError::Generator(GeneratorError::TooFewSpokes { got: 2 }))
        );
        assert_eq!(
            chain_factory(1, 1, 2, true, false),
            Err(FactoryError::Generator(
                GeneratorError::ChainLengthTooShort { got: 1 }
            ))
        );
    }

    #[rstest]
    fn edgeless_graphs_cannot_be_mapped() {
        assert_eq!(
            line_factory(1, false),
            Err(FactoryError::Dataset(MappedTriplesError::EmptyTriples))
        );
    }
}
