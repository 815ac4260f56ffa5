//! Star and wheel graphs.

use super::consecutive_pairs;
use crate::{
    error::{GeneratorError, Result},
    generator::{Generator, TripleIter},
    triple::Triple,
};

const MIN_SPOKES: usize = 3;

const fn check_spokes(spokes: usize) -> Result<()> {
    if spokes < MIN_SPOKES {
        return Err(GeneratorError::TooFewSpokes { got: spokes });
    }
    Ok(())
}

/// Hub-to-spoke edges; reversed into the hub when `sink` is set.
fn spoke_triples(spokes: usize, sink: bool) -> impl Iterator<Item = Triple> {
    (1..=spokes).map(move |spoke| {
        if sink {
            Triple::new(spoke, 0, 0)
        } else {
            Triple::new(0, 0, spoke)
        }
    })
}

/// A hub (node 0) joined to spokes `1..=spokes` with relation 0.
///
/// # Examples
/// ```
/// use geograph_core::{Generator, Star, Triple};
///
/// let star = Star::new(3, true)?;
/// assert_eq!(
///     star.get_triples(),
///     vec![Triple::new(1, 0, 0), Triple::new(2, 0, 0), Triple::new(3, 0, 0)],
/// );
/// # Ok::<(), geograph_core::GeneratorError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Star {
    spokes: usize,
    sink: bool,
}

impl Star {
    /// Creates a star; with `sink` all edges point into the hub.
    ///
    /// # Errors
    /// Returns [`GeneratorError::TooFewSpokes`] when `spokes < 3`.
    pub const fn new(spokes: usize, sink: bool) -> Result<Self> {
        match check_spokes(spokes) {
            Ok(()) => Ok(Self { spokes, sink }),
            Err(err) => Err(err),
        }
    }

    /// Number of spokes.
    #[must_use]
    pub const fn spokes(&self) -> usize {
        self.spokes
    }

    /// Whether edges point towards the hub.
    #[must_use]
    pub const fn sink(&self) -> bool {
        self.sink
    }
}

impl Generator for Star {
    fn name(&self) -> &'static str {
        "star"
    }

    fn iterate_triples(&self) -> TripleIter<'_> {
        Box::new(spoke_triples(self.spokes, self.sink))
    }

    fn number_of_nodes(&self) -> Option<usize> {
        Some(self.spokes + 1)
    }

    fn number_of_edges(&self) -> Option<usize> {
        Some(self.spokes)
    }
}

/// A star whose spokes are also joined in a rim with relation 1.
///
/// # Examples
/// ```
/// use geograph_core::{Generator, Triple, Wheel};
///
/// let wheel = Wheel::new(4, false)?;
/// assert_eq!(wheel.number_of_edges(), Some(8));
/// assert_eq!(wheel.get_triples().last(), Some(&Triple::new(4, 1, 1)));
/// # Ok::<(), geograph_core::GeneratorError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Wheel {
    spokes: usize,
    sink: bool,
}

impl Wheel {
    /// Creates a wheel; `sink` only affects the spoke edges.
    ///
    /// # Errors
    /// Returns [`GeneratorError::TooFewSpokes`] when `spokes < 3`.
    pub const fn new(spokes: usize, sink: bool) -> Result<Self> {
        match check_spokes(spokes) {
            Ok(()) => Ok(Self { spokes, sink }),
            Err(err) => Err(err),
        }
    }

    /// Number of spokes.
    #[must_use]
    pub const fn spokes(&self) -> usize {
        self.spokes
    }

    /// Whether spoke edges point towards the hub.
    #[must_use]
    pub const fn sink(&self) -> bool {
        self.sink
    }
}

impl Generator for Wheel {
    fn name(&self) -> &'static str {
        "wheel"
    }

    fn iterate_triples(&self) -> TripleIter<'_> {
        let spokes = self.spokes;
        let rim = consecutive_pairs(1, spokes + 1)
            .map(|(left, right)| Triple::new(left, 1, right))
            .chain(std::iter::once(Triple::new(spokes, 1, 1)));
        Box::new(spoke_triples(spokes, self.sink).chain(rim))
    }

    fn number_of_nodes(&self) -> Option<usize> {
        Some(self.spokes + 1)
    }

    fn number_of_edges(&self) -> Option<usize> {
        Some(2 * self.spokes)
    }
}
