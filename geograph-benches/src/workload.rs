//! Scaled topology workloads.
//!
//! Each registered topology gets one integer knob, `scale`, mapped onto its
//! own keyword arguments so benchmarks can sweep every topology with the same
//! size list.

use geograph_core::{Generator, Kwargs, registry};
use serde_json::Value;

use crate::error::BenchSetupError;

/// Layers per chain link in chain workloads.
const CHAIN_WIDTH: usize = 2;

/// Prongs per chain link in chain workloads.
const CHAIN_LEAVES: usize = 3;

/// A topology at a given scale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Workload {
    topology: String,
    kwargs: Kwargs,
}

impl Workload {
    /// Maps `scale` onto the arguments of `topology`.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::ZeroValue`] for a zero scale and
    /// [`BenchSetupError::UnknownWorkload`] when the name does not resolve to
    /// a topology with a scaling rule.
    pub fn new(topology: &str, scale: usize) -> Result<Self, BenchSetupError> {
        if scale == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "workload scale",
            });
        }
        let canonical =
            registry()
                .resolve(topology)
                .map_err(|_| BenchSetupError::UnknownWorkload {
                    topology: topology.to_owned(),
                })?;
        let pairs: Vec<(&str, Value)> = match canonical {
            "line" | "circle" | "barbell" => vec![("n", scale.into())],
            "squaregrid2d" | "hexagonalgrid2d" => {
                vec![("rows", scale.into()), ("columns", scale.into())]
            }
            "chain" => vec![
                ("length", scale.into()),
                ("width", CHAIN_WIDTH.into()),
                ("leaves", CHAIN_LEAVES.into()),
            ],
            "star" | "wheel" => vec![("spokes", scale.into())],
            "tadpole" | "lollipop" => vec![("m", scale.into()), ("n", scale.into())],
            _ => {
                return Err(BenchSetupError::UnknownWorkload {
                    topology: topology.to_owned(),
                });
            }
        };
        Ok(Self {
            topology: canonical.to_owned(),
            kwargs: pairs
                .into_iter()
                .map(|(key, value)| (key.to_owned(), value))
                .collect(),
        })
    }

    /// Canonical topology name.
    #[must_use]
    pub fn topology(&self) -> &str {
        &self.topology
    }

    /// Keyword arguments passed to the registry.
    #[must_use]
    pub const fn kwargs(&self) -> &Kwargs {
        &self.kwargs
    }

    /// Builds the generator.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::Registry`] when the topology rejects the
    /// scaled arguments, for example a star with fewer than three spokes.
    pub fn build(&self) -> Result<Box<dyn Generator>, BenchSetupError> {
        Ok(registry().make(&self.topology, &self.kwargs)?)
    }
}
