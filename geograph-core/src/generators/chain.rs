//! Chains of diamond-shaped links.

use crate::{
    error::{GeneratorError, Result},
    generator::{Generator, TripleIter},
    triple::Triple,
};

/// Relation ids for the three kinds of chain edges.
#[derive(Clone, Copy, Debug)]
struct ChainLabels {
    begin: usize,
    cont: usize,
    end: usize,
}

/// A chain of `length - 1` links joined at single nodes.
///
/// Each link fans out from its first node into `leaves` prongs, extends every
/// prong through `width - 1` further layers (position by position), and
/// converges on one node that starts the next link. With `heterogeneous` set
/// the fan-out, continuation and convergence edges use relations 0, 1 and 2;
/// otherwise all edges use relation 0.
///
/// # Examples
/// ```
/// use geograph_core::{Chain, Generator};
///
/// let chain = Chain::new(3, 1, 2, false)?;
/// assert_eq!(chain.get_triples().len(), 8);
/// assert!(Chain::new(1, 1, 2, true).is_err());
/// # Ok::<(), geograph_core::GeneratorError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Chain {
    length: usize,
    width: usize,
    leaves: usize,
    heterogeneous: bool,
}

impl Chain {
    /// Validates the configuration and creates a chain.
    ///
    /// # Errors
    /// Returns [`GeneratorError::ChainLengthTooShort`] when `length < 2`,
    /// [`GeneratorError::ChainWidthTooSmall`] when `width < 1`, and
    /// [`GeneratorError::ChainLeavesTooFew`] when `leaves < 2`.
    pub const fn new(
        length: usize,
        width: usize,
        leaves: usize,
        heterogeneous: bool,
    ) -> Result<Self> {
        if length < 2 {
            return Err(GeneratorError::ChainLengthTooShort { got: length });
        }
        if width < 1 {
            return Err(GeneratorError::ChainWidthTooSmall { got: width });
        }
        if leaves < 2 {
            return Err(GeneratorError::ChainLeavesTooFew { got: leaves });
        }
        Ok(Self {
            length,
            width,
            leaves,
            heterogeneous,
        })
    }

    /// Number of main elements in the chain.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Number of layers in each link.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of prongs in each link.
    #[must_use]
    pub const fn leaves(&self) -> usize {
        self.leaves
    }

    /// Whether edge kinds carry distinct relations.
    #[must_use]
    pub const fn heterogeneous(&self) -> bool {
        self.heterogeneous
    }

    const fn labels(&self) -> ChainLabels {
        if self.heterogeneous {
            ChainLabels {
                begin: 0,
                cont: 1,
                end: 2,
            }
        } else {
            ChainLabels {
                begin: 0,
                cont: 0,
                end: 0,
            }
        }
    }

    /// Ids allocated per link, including the convergence node.
    const fn link_stride(&self) -> usize {
        self.leaves * self.width + 1
    }
}

/// Edges of one link whose first node is `first`.
fn link_triples(first: usize, width: usize, leaves: usize, labels: ChainLabels) -> Vec<Triple> {
    // layer `l`, prong `p` lives at `first + 1 + l * leaves + p`
    let node = move |layer: usize, prong: usize| first + 1 + layer * leaves + prong;
    let convergence = first + width * leaves + 1;

    let fan_out = (0..leaves).map(move |prong| Triple::new(first, labels.begin, node(0, prong)));
    let layers = (1..width).flat_map(move |layer| {
        (0..leaves).map(move |prong| {
            Triple::new(node(layer - 1, prong), labels.cont, node(layer, prong))
        })
    });
    let converge =
        (0..leaves).map(move |prong| Triple::new(node(width - 1, prong), labels.end, convergence));

    fan_out.chain(layers).chain(converge).collect()
}

impl Generator for Chain {
    fn name(&self) -> &'static str {
        "chain"
    }

    fn iterate_triples(&self) -> TripleIter<'_> {
        let Self { width, leaves, .. } = *self;
        let labels = self.labels();
        let stride = self.link_stride();
        Box::new(
            (0..self.length - 1)
                .flat_map(move |link| link_triples(link * stride, width, leaves, labels)),
        )
    }
}
