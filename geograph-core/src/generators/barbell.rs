//! Two cliques joined by a single bridge edge.

use super::{choose_two, clique_pairs};
use crate::{
    generator::{Generator, TripleIter},
    triple::Triple,
};

/// Two `n`-cliques over `0..n` and `n..2n` joined by the bridge `(0, 1, n)`.
///
/// Clique edges use relation 0 and follow plain pairwise order
/// (`(0, 1), (0, 2), ..., (1, 2), ...`).
///
/// # Examples
/// ```
/// use geograph_core::{Barbell, Generator, Triple};
///
/// let barbell = Barbell::new(3);
/// assert_eq!(barbell.number_of_edges(), Some(7));
/// assert_eq!(barbell.get_triples().last(), Some(&Triple::new(0, 1, 3)));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Barbell {
    n: usize,
}

impl Barbell {
    /// Creates a barbell with cliques of `n` nodes.
    #[must_use]
    pub const fn new(n: usize) -> Self {
        Self { n }
    }

    /// Size of each clique.
    #[must_use]
    pub const fn n(&self) -> usize {
        self.n
    }
}

impl Generator for Barbell {
    fn name(&self) -> &'static str {
        "barbell"
    }

    // TODO: replace the pairwise cliques with a ring-by-ring construction
    // (neighbours at distance 1, then 2, ...) once downstream numbering can move.
    fn iterate_triples(&self) -> TripleIter<'_> {
        let n = self.n;
        let west = clique_pairs(0, n);
        let east = clique_pairs(n, 2 * n);
        Box::new(
            west.chain(east)
                .map(|(head, tail)| Triple::new(head, 0, tail))
                .chain(std::iter::once(Triple::new(0, 1, n))),
        )
    }

    fn number_of_nodes(&self) -> Option<usize> {
        Some(2 * self.n)
    }

    fn number_of_edges(&self) -> Option<usize> {
        Some(2 * choose_two(self.n) + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    fn barbell_of_three() {
        let triples: Vec<_> = Barbell::new(3)
            .iterate_triples()
            .map(Triple::as_tuple)
            .collect();
        assert_eq!(
            triples,
            vec![
                (0, 0, 1),
                (0, 0, 2),
                (1, 0, 2),
                (3, 0, 4),
                (3, 0, 5),
                (4, 0, 5),
                (0, 1, 3),
            ]
        );
    }

    #[rstest]
    #[case(2)]
    #[case(4)]
    #[case(7)]
    fn edge_count_matches_closed_form(#[case] n: usize) {
        let barbell = Barbell::new(n);
        assert_eq!(Some(barbell.get_triples().len()), barbell.number_of_edges());
    }
}
