//! Two-dimensional hexagonal grid and its row layout.
//!
//! The grid is assembled from horizontal rows of node ids. Rows alternate
//! between minor and major widths; every hexagon row is built from a doubled
//! pair of rows so the vertical "cross beams" of each hexagon connect two rows
//! of equal width.

use std::cmp::Ordering;

use serde::Deserialize;

use crate::{
    generator::{Generator, TripleIter},
    triple::Triple,
};

/// Relation ids used for the three edge directions of the hex tiling.
///
/// # Examples
/// ```
/// use geograph_core::HexLabels;
///
/// let labels = HexLabels::default();
/// assert_eq!((labels.left, labels.right, labels.vertical), (0, 1, 2));
/// assert_eq!(HexLabels::from((4, 5, 6)).vertical, 6);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize)]
#[serde(from = "(usize, usize, usize)")]
pub struct HexLabels {
    /// Relation for edges leaning down and to the left.
    pub left: usize,
    /// Relation for edges leaning down and to the right.
    pub right: usize,
    /// Relation for edges between rows of equal width.
    pub vertical: usize,
}

impl Default for HexLabels {
    fn default() -> Self {
        Self {
            left: 0,
            right: 1,
            vertical: 2,
        }
    }
}

impl From<(usize, usize, usize)> for HexLabels {
    fn from((left, right, vertical): (usize, usize, usize)) -> Self {
        Self {
            left,
            right,
            vertical,
        }
    }
}

/// Computes the row layout underlying [`HexagonalGrid2D`].
///
/// Produces `2 * (rows + 1)` rows numbered by a single increasing counter. The
/// first row has `columns` ids; each hexagon row `i` then contributes two rows
/// of `columns + 1 + i % 2` ids; the final row has `columns + (rows + 1) % 2`.
///
/// # Examples
/// ```
/// use geograph_core::hex_grid_rows;
///
/// assert_eq!(
///     hex_grid_rows(1, 1),
///     vec![vec![0], vec![1, 2], vec![3, 4], vec![5]],
/// );
/// ```
#[must_use]
pub fn hex_grid_rows(rows: usize, columns: usize) -> Vec<Vec<usize>> {
    let mut layout: Vec<Vec<usize>> = Vec::with_capacity(2 * (rows + 1));
    let mut next = 0;
    let mut push_row = |width: usize| {
        layout.push((next..next + width).collect());
        next += width;
    };

    push_row(columns);
    for row in 0..rows {
        // Doubled rows form the cross beams.
        push_row(columns + 1 + row % 2);
        push_row(columns + 1 + row % 2);
    }
    push_row(columns + (rows + 1) % 2);
    layout
}

/// A hexagonal tiling whose edges lean left, lean right, or run vertically.
///
/// ```text
///           E_0               E_1
///         ⬋     ⬊           ⬋     ⬊
///    [R_0]       [R_1] [R_0]       [R_1]
///     ⬋               ⬊ ⬋               ⬊
///  E_2                E_3                E_4
///   |                  |                  |
/// [R_2]              [R_2]              [R_2]
///   ↓                  ↓                  ↓
///  E_5                E_6                E_7
/// ```
///
/// Node and edge counts are not reported for this topology.
///
/// # Examples
/// ```
/// use geograph_core::{Generator, HexagonalGrid2D, Triple};
///
/// let grid = HexagonalGrid2D::new(1, 1);
/// assert_eq!(grid.get_triples().first(), Some(&Triple::new(0, 0, 1)));
/// assert_eq!(grid.number_of_nodes(), None);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HexagonalGrid2D {
    rows: usize,
    columns: usize,
    labels: HexLabels,
}

impl HexagonalGrid2D {
    /// Creates a grid of `rows` hexagon rows over minor rows of `columns` ids,
    /// using the default labels.
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self::with_labels(rows, columns, HexLabels::default())
    }

    /// Creates a grid with explicit relation labels.
    #[must_use]
    pub const fn with_labels(rows: usize, columns: usize, labels: HexLabels) -> Self {
        Self {
            rows,
            columns,
            labels,
        }
    }

    /// Number of hexagon rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Width of a minor row.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Relation labels in use.
    #[must_use]
    pub const fn labels(&self) -> HexLabels {
        self.labels
    }
}

fn zip_rows<'a>(
    heads: impl Iterator<Item = &'a usize>,
    relation: usize,
    tails: impl Iterator<Item = &'a usize>,
) -> impl Iterator<Item = Triple> {
    heads
        .zip(tails)
        .map(move |(&head, &tail)| Triple::new(head, relation, tail))
}

fn link_rows(upper: &[usize], lower: &[usize], labels: HexLabels) -> Vec<Triple> {
    match upper.len().cmp(&lower.len()) {
        Ordering::Equal => zip_rows(upper.iter(), labels.vertical, lower.iter()).collect(),
        // minor -> major: each upper node fans out to two lower neighbours
        Ordering::Less => zip_rows(upper.iter(), labels.left, lower.iter())
            .chain(zip_rows(upper.iter(), labels.right, lower.iter().skip(1)))
            .collect(),
        // major -> minor: two upper neighbours converge on each lower node
        Ordering::Greater => zip_rows(upper.iter(), labels.right, lower.iter())
            .chain(zip_rows(upper.iter().skip(1), labels.left, lower.iter()))
            .collect(),
    }
}

impl Generator for HexagonalGrid2D {
    fn name(&self) -> &'static str {
        "hexagonalgrid2d"
    }

    fn iterate_triples(&self) -> TripleIter<'_> {
        let labels = self.labels;
        let layout = hex_grid_rows(self.rows, self.columns);
        let lower_rows = layout.clone().into_iter().skip(1);
        Box::new(
            layout
                .into_iter()
                .zip(lower_rows)
                .flat_map(move |(upper, lower)| link_rows(&upper, &lower, labels)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::one_by_one(1, 1, vec![vec![0], vec![1, 2], vec![3, 4], vec![5]])]
    #[case::one_by_two(1, 2, vec![vec![0, 1], vec![2, 3, 4], vec![5, 6, 7], vec![8, 9]])]
    #[case::one_by_three(
        1,
        3,
        vec![vec![0, 1, 2], vec![3, 4, 5, 6], vec![7, 8, 9, 10], vec![11, 12, 13]],
    )]
    #[case::two_by_one(
        2,
        1,
        vec![vec![0], vec![1, 2], vec![3, 4], vec![5, 6, 7], vec![8, 9, 10], vec![11, 12]],
    )]
    #[case::two_by_two(
        2,
        2,
        vec![
            vec![0, 1],
            vec![2, 3, 4],
            vec![5, 6, 7],
            vec![8, 9, 10, 11],
            vec![12, 13, 14, 15],
            vec![16, 17, 18],
        ],
    )]
    #[case::two_by_three(
        2,
        3,
        vec![
            vec![0, 1, 2],
            vec![3, 4, 5, 6],
            vec![7, 8, 9, 10],
            vec![11, 12, 13, 14, 15],
            vec![16, 17, 18, 19, 20],
            vec![21, 22, 23, 24],
        ],
    )]
    #[case::three_by_one(
        3,
        1,
        vec![
            vec![0],
            vec![1, 2],
            vec![3, 4],
            vec![5, 6, 7],
            vec![8, 9, 10],
            vec![11, 12],
            vec![13, 14],
            vec![15],
        ],
    )]
    #[case::three_by_two(
        3,
        2,
        vec![
            vec![0, 1],
            vec![2, 3, 4],
            vec![5, 6, 7],
            vec![8, 9, 10, 11],
            vec![12, 13, 14, 15],
            vec![16, 17, 18],
            vec![19, 20, 21],
            vec![22, 23],
        ],
    )]
    #[case::three_by_three(
        3,
        3,
        vec![
            vec![0, 1, 2],
            vec![3, 4, 5, 6],
            vec![7, 8, 9, 10],
            vec![11, 12, 13, 14, 15],
            vec![16, 17, 18, 19, 20],
            vec![21, 22, 23, 24],
            vec![25, 26, 27, 28],
            vec![29, 30, 31],
        ],
    )]
    fn rows_match_expected_layout(
        #[case] rows: usize,
        #[case] columns: usize,
        #[case] expected: Vec<Vec<usize>>,
    ) {
        assert_eq!(hex_grid_rows(rows, columns), expected);
    }

    #[rstest]
    fn single_hexagon_links_every_row_pair() {
        let triples: Vec<_> = HexagonalGrid2D::new(1, 1)
            .iterate_triples()
            .map(Triple::as_tuple)
            .collect();
        assert_eq!(
            triples,
            vec![
                (0, 0, 1),
                (0, 1, 2),
                (1, 2, 3),
                (2, 2, 4),
                (3, 1, 5),
                (4, 0, 5),
            ]
        );
    }

    #[rstest]
    fn custom_labels_replace_defaults() {
        let grid = HexagonalGrid2D::with_labels(1, 1, HexLabels::from((7, 8, 9)));
        let relations: Vec<_> = grid.iterate_triples().map(|t| t.relation).collect();
        assert_eq!(relations, vec![7, 8, 9, 9, 8, 7]);
    }

    #[rstest]
    fn labels_deserialise_from_a_triple_array() {
        let labels: HexLabels = match serde_json::from_str("[3, 4, 5]") {
            Ok(labels) => labels,
            Err(err) => panic!("labels must decode: {err}"),
        };
        assert_eq!(labels, HexLabels::from((3, 4, 5)));
    }

    #[rstest]
    #[case(1, 1)]
    #[case(2, 3)]
    #[case(3, 2)]
    fn ids_stay_within_the_layout(#[case] rows: usize, #[case] columns: usize) {
        let total: usize = hex_grid_rows(rows, columns).iter().map(Vec::len).sum();
        let grid = HexagonalGrid2D::new(rows, columns);
        assert!(
            grid.iterate_triples()
                .all(|t| t.head < total && t.tail < total)
        );
    }
}
