//! The `(head, relation, tail)` record shared by every generator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One directed, labelled edge between two node ids.
///
/// Node and relation ids are plain indices; there is no separate entity type.
///
/// # Examples
/// ```
/// use geograph_core::Triple;
///
/// let triple = Triple::new(0, 1, 2);
/// assert_eq!(triple.as_tuple(), (0, 1, 2));
/// assert_eq!(triple.to_string(), "0\t1\t2");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Triple {
    /// Source node id.
    pub head: usize,
    /// Edge label id.
    pub relation: usize,
    /// Target node id.
    pub tail: usize,
}

impl Triple {
    /// Creates a triple from its three components.
    #[must_use]
    pub const fn new(head: usize, relation: usize, tail: usize) -> Self {
        Self {
            head,
            relation,
            tail,
        }
    }

    /// Returns the triple as a plain tuple.
    #[must_use]
    pub const fn as_tuple(self) -> (usize, usize, usize) {
        (self.head, self.relation, self.tail)
    }

    /// Returns the same edge pointing the other way under `relation`.
    #[must_use]
    pub const fn reversed(self, relation: usize) -> Self {
        Self::new(self.tail, relation, self.head)
    }
}

impl From<(usize, usize, usize)> for Triple {
    fn from((head, relation, tail): (usize, usize, usize)) -> Self {
        Self::new(head, relation, tail)
    }
}

impl From<Triple> for (usize, usize, usize) {
    fn from(triple: Triple) -> Self {
        triple.as_tuple()
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.head, self.relation, self.tail)
    }
}
