//! A clique with a pendant path, plus the single-parameter variant.

use super::{choose_two, clique_pairs, pendant_path};
use crate::{
    error::{GeneratorError, Result},
    generator::{Generator, TripleIter},
    triple::Triple,
};

/// An `m`-clique with a path of `n` edges hanging off node `m - 1`.
///
/// Clique edges use relation 0 in plain pairwise order; path edges use
/// relation 1 and point away from the clique unless `sink` is set.
///
/// # Examples
/// ```
/// use geograph_core::{Generator, Lollipop};
///
/// let lollipop = Lollipop::new(4, 2, false);
/// assert_eq!(lollipop.number_of_nodes(), Some(6));
/// assert_eq!(lollipop.number_of_edges(), Some(8));
///
/// let special = Lollipop::special(9, false)?;
/// assert_eq!((special.m(), special.n()), (6, 3));
/// # Ok::<(), geograph_core::GeneratorError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Lollipop {
    m: usize,
    n: usize,
    sink: bool,
}

impl Lollipop {
    /// Creates a lollipop with an `m`-clique and an `n`-edge stick.
    #[must_use]
    pub const fn new(m: usize, n: usize, sink: bool) -> Self {
        Self { m, n, sink }
    }

    /// Creates the lollipop with `m = 2k/3` and `n = k/3`, the split that
    /// maximises the random-walk hitting time for `k` nodes.
    ///
    /// # Errors
    /// Returns [`GeneratorError::NotDivisibleByThree`] when `k % 3 != 0`.
    pub const fn special(k: usize, sink: bool) -> Result<Self> {
        if k % 3 != 0 {
            return Err(GeneratorError::NotDivisibleByThree { k });
        }
        let third = k / 3;
        Ok(Self::new(2 * third, third, sink))
    }

    /// Size of the clique.
    #[must_use]
    pub const fn m(&self) -> usize {
        self.m
    }

    /// Length of the path.
    #[must_use]
    pub const fn n(&self) -> usize {
        self.n
    }

    /// Whether path edges point towards the clique.
    #[must_use]
    pub const fn sink(&self) -> bool {
        self.sink
    }
}

impl Generator for Lollipop {
    fn name(&self) -> &'static str {
        "lollipop"
    }

    fn iterate_triples(&self) -> TripleIter<'_> {
        let clique = clique_pairs(0, self.m).map(|(head, tail)| Triple::new(head, 0, tail));
        let anchor = self.m.saturating_sub(1);
        Box::new(clique.chain(pendant_path(anchor, self.n, self.sink)))
    }

    fn number_of_nodes(&self) -> Option<usize> {
        Some(self.m + self.n)
    }

    fn number_of_edges(&self) -> Option<usize> {
        Some(choose_two(self.m) + self.n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    fn lollipop_of_three_and_two() {
        let triples: Vec<_> = Lollipop::new(3, 2, false)
            .iterate_triples()
            .map(Triple::as_tuple)
            .collect();
        assert_eq!(
            triples,
            vec![(0, 0, 1), (0, 0, 2), (1, 0, 2), (2, 1, 3), (3, 1, 4)]
        );
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(10)]
    fn special_rejects_non_multiples_of_three(#[case] k: usize) {
        assert_eq!(
            Lollipop::special(k, false),
            Err(GeneratorError::NotDivisibleByThree { k })
        );
    }

    #[rstest]
    #[case(3, 2, 1)]
    #[case(12, 8, 4)]
    #[case(0, 0, 0)]
    fn special_splits_two_thirds_one_third(
        #[case] k: usize,
        #[case] m: usize,
        #[case] n: usize,
    ) {
        let lollipop = match Lollipop::special(k, true) {
            Ok(lollipop) => lollipop,
            Err(err) => panic!("{k} is divisible by three: {err}"),
        };
        assert_eq!(lollipop, Lollipop::new(m, n, true));
    }
}
