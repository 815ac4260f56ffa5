//! Assertions over raw triple tuples.

use std::collections::BTreeSet;

/// A `(head, relation, tail)` tuple.
pub type TripleTuple = (usize, usize, usize);

/// Distinct node ids mentioned as a head or tail.
///
/// # Examples
/// ```
/// use geograph_test_support::triples::distinct_nodes;
///
/// assert_eq!(distinct_nodes(&[(0, 0, 1), (1, 0, 0)]).len(), 2);
/// ```
#[must_use]
pub fn distinct_nodes(triples: &[TripleTuple]) -> BTreeSet<usize> {
    triples
        .iter()
        .flat_map(|&(head, _, tail)| [head, tail])
        .collect()
}

/// Distinct relation ids.
#[must_use]
pub fn distinct_relations(triples: &[TripleTuple]) -> BTreeSet<usize> {
    triples.iter().map(|&(_, relation, _)| relation).collect()
}

/// Number of distinct triples.
#[must_use]
pub fn distinct_triples(triples: &[TripleTuple]) -> usize {
    triples.iter().collect::<BTreeSet<_>>().len()
}

/// Panics naming the first triple whose head or tail is `>= nodes`.
///
/// # Panics
/// Panics when any node id falls outside `0..nodes`.
pub fn assert_ids_below(triples: &[TripleTuple], nodes: usize) {
    if let Some(triple) = triples
        .iter()
        .find(|&&(head, _, tail)| head >= nodes || tail >= nodes)
    {
        panic!("triple {triple:?} references a node outside 0..{nodes}");
    }
}

/// Panics unless the node ids form the contiguous range `0..nodes`.
///
/// # Panics
/// Panics when an id is skipped or out of range.
pub fn assert_contiguous_nodes(triples: &[TripleTuple], nodes: usize) {
    let seen = distinct_nodes(triples);
    let expected: BTreeSet<usize> = (0..nodes).collect();
    assert_eq!(seen, expected, "node ids must cover 0..{nodes} exactly");
}
