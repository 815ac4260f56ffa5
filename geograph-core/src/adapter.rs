//! Handing generated triples to a dataset consumer.
//!
//! A consumer owns the conversion from a flat triple list into whatever its
//! training pipeline needs, including any inverse-relation expansion. The
//! adapter only materialises the stream and forwards the caller's flag.

use tracing::{Span, debug, field, instrument};

use crate::{error::MappedTriplesError, generator::Generator, triple::Triple};

/// Turns a flat list of triples into a consumer-specific dataset.
pub trait TripleConsumer {
    /// Dataset produced on success.
    type Dataset;
    /// Failure reported by the consumer.
    type Error: std::error::Error;

    /// Builds a dataset from `triples`, adding inverse relations when
    /// `create_inverse_triples` is set.
    ///
    /// # Errors
    /// Returns the consumer's own error when it cannot represent the input.
    fn create(
        &self,
        triples: Vec<Triple>,
        create_inverse_triples: bool,
    ) -> Result<Self::Dataset, Self::Error>;
}

/// Materialises `generator` and passes the triples to `consumer`.
///
/// # Errors
/// Propagates the consumer's error unchanged.
///
/// # Examples
/// ```
/// use geograph_core::{Line, MappedTriples, to_dataset};
///
/// let dataset = to_dataset(&Line::new(3), &MappedTriples::consumer(), true)?;
/// assert_eq!(dataset.num_entities(), 3);
/// assert_eq!(dataset.num_relations(), 1);
/// assert!(dataset.create_inverse_triples());
/// # Ok::<(), geograph_core::MappedTriplesError>(())
/// ```
#[instrument(
    name = "adapter.to_dataset",
    err,
    skip_all,
    fields(
        topology = generator.name(),
        inverse = create_inverse_triples,
        triples = field::Empty,
    ),
)]
pub fn to_dataset<G, C>(
    generator: &G,
    consumer: &C,
    create_inverse_triples: bool,
) -> Result<C::Dataset, C::Error>
where
    G: Generator + ?Sized,
    C: TripleConsumer + ?Sized,
{
    let triples = generator.get_triples();
    Span::current().record("triples", triples.len());
    consumer.create(triples, create_inverse_triples)
}

/// In-memory dataset of integer-labelled triples.
///
/// Entity and relation counts are one past the largest id seen. When inverse
/// triples are requested the relation vocabulary is doubled: relation `r` of
/// a forward triple is mirrored by relation `r + num_relations`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MappedTriples {
    triples: Vec<Triple>,
    num_entities: usize,
    num_relations: usize,
    create_inverse_triples: bool,
}

/// [`TripleConsumer`] producing [`MappedTriples`].
#[derive(Clone, Copy, Debug, Default)]
pub struct MappedTriplesConsumer;

impl MappedTriples {
    /// Returns the consumer that builds this dataset type.
    #[must_use]
    pub const fn consumer() -> MappedTriplesConsumer {
        MappedTriplesConsumer
    }

    /// Wraps `triples`, recording the id ranges they span.
    ///
    /// # Errors
    /// Returns [`MappedTriplesError::EmptyTriples`] when `triples` is empty.
    pub fn new(
        triples: Vec<Triple>,
        create_inverse_triples: bool,
    ) -> Result<Self, MappedTriplesError> {
        let Some(max_entity) = triples.iter().map(|t| t.head.max(t.tail)).max() else {
            return Err(MappedTriplesError::EmptyTriples);
        };
        let max_relation = triples.iter().map(|t| t.relation).max().unwrap_or_default();
        Ok(Self {
            triples,
            num_entities: max_entity + 1,
            num_relations: max_relation + 1,
            create_inverse_triples,
        })
    }

    /// Forward triples in generation order.
    #[must_use]
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// Number of entity ids, `max(head, tail) + 1`.
    #[must_use]
    pub const fn num_entities(&self) -> usize {
        self.num_entities
    }

    /// Number of forward relation ids, `max(relation) + 1`.
    #[must_use]
    pub const fn num_relations(&self) -> usize {
        self.num_relations
    }

    /// Whether inverse triples were requested.
    #[must_use]
    pub const fn create_inverse_triples(&self) -> bool {
        self.create_inverse_triples
    }

    /// Size of the relation vocabulary seen by a model, counting inverses.
    #[must_use]
    pub const fn real_num_relations(&self) -> usize {
        if self.create_inverse_triples {
            2 * self.num_relations
        } else {
            self.num_relations
        }
    }

    /// Inverse triples, empty unless they were requested.
    #[must_use]
    pub fn inverse_triples(&self) -> Vec<Triple> {
        if !self.create_inverse_triples {
            return Vec::new();
        }
        let offset = self.num_relations;
        self.triples
            .iter()
            .map(|t| t.reversed(t.relation + offset))
            .collect()
    }
}

impl TripleConsumer for MappedTriplesConsumer {
    type Dataset = MappedTriples;
    type Error = MappedTriplesError;

    fn create(
        &self,
        triples: Vec<Triple>,
        create_inverse_triples: bool,
    ) -> Result<MappedTriples, MappedTriplesError> {
        let dataset = MappedTriples::new(triples, create_inverse_triples)?;
        debug!(
            entities = dataset.num_entities(),
            relations = dataset.num_relations(),
            inverse = create_inverse_triples,
            "mapped triples created"
        );
        Ok(dataset)
    }
}
