//! A cycle with a pendant path hanging off its last node.

use super::{consecutive_pairs, pendant_path};
use crate::{
    generator::{Generator, TripleIter},
    triple::Triple,
};

/// An `m`-cycle with a path of `n` edges hanging off node `m - 1`.
///
/// Cycle edges use relation 0; path edges use relation 1 and point away from
/// the cycle unless `sink` is set.
///
/// # Examples
/// ```
/// use geograph_core::{Generator, Tadpole, Triple};
///
/// let tadpole = Tadpole::new(3, 2, false);
/// assert_eq!(
///     tadpole.get_triples(),
///     vec![
///         Triple::new(0, 0, 1),
///         Triple::new(1, 0, 2),
///         Triple::new(2, 0, 0),
///         Triple::new(2, 1, 3),
///         Triple::new(3, 1, 4),
///     ],
/// );
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Tadpole {
    m: usize,
    n: usize,
    sink: bool,
}

impl Tadpole {
    /// Creates a tadpole with an `m`-cycle and an `n`-edge tail.
    #[must_use]
    pub const fn new(m: usize, n: usize, sink: bool) -> Self {
        Self { m, n, sink }
    }

    /// Size of the cycle.
    #[must_use]
    pub const fn m(&self) -> usize {
        self.m
    }

    /// Length of the path.
    #[must_use]
    pub const fn n(&self) -> usize {
        self.n
    }

    /// Whether path edges point towards the cycle.
    #[must_use]
    pub const fn sink(&self) -> bool {
        self.sink
    }
}

impl Generator for Tadpole {
    fn name(&self) -> &'static str {
        "tadpole"
    }

    fn iterate_triples(&self) -> TripleIter<'_> {
        let anchor = self.m.saturating_sub(1);
        let cycle = consecutive_pairs(0, self.m)
            .map(|(head, tail)| Triple::new(head, 0, tail))
            .chain(self.m.checked_sub(1).map(|last| Triple::new(last, 0, 0)));
        Box::new(cycle.chain(pendant_path(anchor, self.n, self.sink)))
    }

    fn number_of_nodes(&self) -> Option<usize> {
        Some(self.m + self.n)
    }

    fn number_of_edges(&self) -> Option<usize> {
        Some(self.m + self.n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    fn sink_tail_points_into_the_cycle() {
        let tail: Vec<_> = Tadpole::new(4, 3, true)
            .iterate_triples()
            .skip(4)
            .map(Triple::as_tuple)
            .collect();
        assert_eq!(tail, vec![(4, 1, 3), (5, 1, 4), (6, 1, 5)]);
    }

    #[rstest]
    fn tailless_tadpole_is_a_circle() {
        let triples: Vec<_> = Tadpole::new(3, 0, false)
            .iterate_triples()
            .map(Triple::as_tuple)
            .collect();
        assert_eq!(triples, vec![(0, 0, 1), (1, 0, 2), (2, 0, 0)]);
    }

    #[rstest]
    #[case(3, 1)]
    #[case(5, 4)]
    fn counts_match_the_stream(#[case] m: usize, #[case] n: usize) {
        let tadpole = Tadpole::new(m, n, false);
        assert_eq!(Some(tadpole.get_triples().len()), tadpole.number_of_edges());
    }
}
