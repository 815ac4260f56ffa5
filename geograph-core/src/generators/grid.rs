//! Two-dimensional square grid.

use crate::{
    generator::{Generator, TripleIter},
    triple::Triple,
};

/// A square lattice built from `columns` runs of `rows` consecutive ids.
///
/// The ids `0..rows * columns` are cut into chunks of length `rows`. Links
/// inside a chunk use relation 0; links between same-position members of
/// neighbouring chunks use relation 1.
///
/// ```text
///  E_0 -[R_0]-> E_1 -[R_0]-> E_2
///   |            |            |
/// [R_1]        [R_1]        [R_1]
///   ↓            ↓            ↓
///  E_3 -[R_0]-> E_4 -[R_0]-> E_5
/// ```
///
/// `number_of_edges` reports `rows * columns`, which only matches the real
/// edge count `rows * (columns - 1) + columns * (rows - 1)` for small grids.
/// Callers that need the exact figure should count the triples.
///
/// # Examples
/// ```
/// use geograph_core::{Generator, SquareGrid2D};
///
/// let grid = SquareGrid2D::new(3, 2);
/// assert_eq!(grid.number_of_nodes(), Some(6));
/// assert_eq!(grid.get_triples().len(), 7);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SquareGrid2D {
    rows: usize,
    columns: usize,
}

impl SquareGrid2D {
    /// Creates a grid with `rows * columns` nodes.
    #[must_use]
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Chunk length.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of chunks.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }
}

impl Generator for SquareGrid2D {
    fn name(&self) -> &'static str {
        "squaregrid2d"
    }

    fn iterate_triples(&self) -> TripleIter<'_> {
        let Self { rows, columns } = *self;
        let id = move |chunk: usize, position: usize| chunk * rows + position;

        let within = (0..columns).flat_map(move |chunk| {
            (1..rows).map(move |position| {
                Triple::new(id(chunk, position - 1), 0, id(chunk, position))
            })
        });
        let across = (0..rows).flat_map(move |position| {
            (1..columns).map(move |chunk| {
                Triple::new(id(chunk - 1, position), 1, id(chunk, position))
            })
        });
        Box::new(within.chain(across))
    }

    fn number_of_nodes(&self) -> Option<usize> {
        Some(self.rows * self.columns)
    }

    fn number_of_edges(&self) -> Option<usize> {
        Some(self.rows * self.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    fn two_by_three_grid_emits_rows_then_columns() {
        let triples: Vec<_> = SquareGrid2D::new(2, 3)
            .iterate_triples()
            .map(Triple::as_tuple)
            .collect();
        assert_eq!(
            triples,
            vec![
                (0, 0, 1),
                (2, 0, 3),
                (4, 0, 5),
                (0, 1, 2),
                (2, 1, 4),
                (1, 1, 3),
                (3, 1, 5),
            ]
        );
    }

    #[rstest]
    #[case(2, 2)]
    #[case(3, 4)]
    #[case(5, 5)]
    fn real_edge_count_follows_lattice_formula(#[case] rows: usize, #[case] columns: usize) {
        let grid = SquareGrid2D::new(rows, columns);
        let expected = rows * (columns - 1) + columns * (rows - 1);
        assert_eq!(grid.get_triples().len(), expected);
    }

    #[rstest]
    #[case(4, 4)]
    #[case(3, 7)]
    fn reported_edge_count_is_rows_times_columns(#[case] rows: usize, #[case] columns: usize) {
        assert_eq!(
            SquareGrid2D::new(rows, columns).number_of_edges(),
            Some(rows * columns)
        );
    }

    #[rstest]
    #[case::no_rows(0, 3)]
    #[case::no_columns(3, 0)]
    fn empty_grids_have_no_triples(#[case] rows: usize, #[case] columns: usize) {
        assert!(SquareGrid2D::new(rows, columns).get_triples().is_empty());
    }
}
