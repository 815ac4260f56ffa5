//! The capability contract shared by all topologies.

use crate::triple::Triple;

/// Lazy stream of triples borrowed from a generator.
pub type TripleIter<'a> = Box<dyn Iterator<Item = Triple> + 'a>;

/// A deterministic source of triples for one graph topology.
///
/// Implementations are immutable configuration records. Every call to
/// [`Generator::iterate_triples`] starts a fresh stream, and two streams from
/// the same generator always yield identical triples in identical order.
///
/// Counts are optional: `None` means the count is not available for the
/// topology, never that the graph is empty.
///
/// # Examples
/// ```
/// use geograph_core::{Generator, Line, Triple};
///
/// let line = Line::new(3);
/// let first: Vec<Triple> = line.iterate_triples().collect();
/// let second = line.get_triples();
/// assert_eq!(first, second);
/// assert_eq!(line.number_of_nodes(), Some(3));
/// ```
pub trait Generator {
    /// Canonical registry name of the topology.
    fn name(&self) -> &'static str;

    /// Starts a new lazy stream over the graph's triples.
    fn iterate_triples(&self) -> TripleIter<'_>;

    /// Materialises [`Generator::iterate_triples`] into a vector.
    fn get_triples(&self) -> Vec<Triple> {
        self.iterate_triples().collect()
    }

    /// Closed-form node count, when known for the topology.
    fn number_of_nodes(&self) -> Option<usize> {
        None
    }

    /// Closed-form edge count, when known for the topology.
    fn number_of_edges(&self) -> Option<usize> {
        None
    }
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn iterate_triples(&self) -> TripleIter<'_> {
        (**self).iterate_triples()
    }

    fn get_triples(&self) -> Vec<Triple> {
        (**self).get_triples()
    }

    fn number_of_nodes(&self) -> Option<usize> {
        (**self).number_of_nodes()
    }

    fn number_of_edges(&self) -> Option<usize> {
        (**self).number_of_edges()
    }
}
