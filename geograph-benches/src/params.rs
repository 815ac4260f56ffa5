//! Benchmark parameter types.

use std::fmt;

/// Parameters for one generator benchmark run.
#[derive(Clone, Debug)]
pub struct TopologyBenchParams {
    /// Canonical topology name.
    pub topology: &'static str,
    /// Scale passed to the workload.
    pub scale: usize,
}

impl fmt::Display for TopologyBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},scale={}", self.topology, self.scale)
    }
}

/// Parameters for a dataset construction benchmark run.
#[derive(Clone, Debug)]
pub struct DatasetBenchParams {
    /// Side length of the square grid.
    pub side: usize,
    /// Whether inverse triples are requested.
    pub inverse: bool,
}

impl fmt::Display for DatasetBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "side={},inverse={}", self.side, self.inverse)
    }
}
