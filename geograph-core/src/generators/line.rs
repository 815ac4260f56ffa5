//! One-dimensional lines and their closed counterpart, the circle.

use super::consecutive_pairs;
use crate::{
    generator::{Generator, TripleIter},
    triple::Triple,
};

/// A path `0 -> 1 -> ... -> n-1` labelled with relation 0.
///
/// ```text
/// E_0 -[R_0]-> E_1 -[R_0]-> E_2 -[R_0]-> E_3 -[R_0]-> E_4
/// ```
///
/// # Examples
/// ```
/// use geograph_core::{Generator, Line};
///
/// let line = Line::new(5);
/// assert_eq!(line.number_of_nodes(), Some(5));
/// assert_eq!(line.number_of_edges(), Some(4));
/// assert_eq!(line.get_triples().len(), 4);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Line {
    n: usize,
}

impl Line {
    /// Creates a line of `n` nodes. Lines shorter than two nodes have no edges.
    #[must_use]
    pub const fn new(n: usize) -> Self {
        Self { n }
    }

    /// Number of elements in the line.
    #[must_use]
    pub const fn n(&self) -> usize {
        self.n
    }
}

fn line_triples(n: usize) -> impl Iterator<Item = Triple> {
    consecutive_pairs(0, n).map(|(head, tail)| Triple::new(head, 0, tail))
}

impl Generator for Line {
    fn name(&self) -> &'static str {
        "line"
    }

    fn iterate_triples(&self) -> TripleIter<'_> {
        Box::new(line_triples(self.n))
    }

    fn number_of_nodes(&self) -> Option<usize> {
        Some(self.n)
    }

    fn number_of_edges(&self) -> Option<usize> {
        Some(self.n.saturating_sub(1))
    }
}

/// A line whose last node links back to node 0.
///
/// # Examples
/// ```
/// use geograph_core::{Circle, Generator, Triple};
///
/// let circle = Circle::new(4);
/// assert_eq!(circle.get_triples().last(), Some(&Triple::new(3, 0, 0)));
/// assert_eq!(circle.number_of_edges(), Some(4));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Circle {
    n: usize,
}

impl Circle {
    /// Creates a circle of `n` nodes.
    #[must_use]
    pub const fn new(n: usize) -> Self {
        Self { n }
    }

    /// Number of elements in the circle.
    #[must_use]
    pub const fn n(&self) -> usize {
        self.n
    }
}

impl Generator for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn iterate_triples(&self) -> TripleIter<'_> {
        let closing = self.n.checked_sub(1).map(|last| Triple::new(last, 0, 0));
        Box::new(line_triples(self.n).chain(closing))
    }

    fn number_of_nodes(&self) -> Option<usize> {
        Some(self.n)
    }

    fn number_of_edges(&self) -> Option<usize> {
        Some(self.n)
    }
}
