//! Dataset construction benchmarks.
//!
//! Measures registry lookup, triple collection and mapping for square grids,
//! with and without inverse triples.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use geograph_benches::{error::BenchSetupError, params::DatasetBenchParams, workload::Workload};
use geograph_core::{MappedTriples, registry, to_dataset};

/// Grid side lengths to benchmark.
const SIDES: &[usize] = &[10, 30, 100];

fn grid_dataset_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("grid_dataset");
    group.sample_size(20);

    for &side in SIDES {
        let workload = Workload::new("SquareGrid2D", side)?;
        for inverse in [false, true] {
            let params = DatasetBenchParams { side, inverse };
            group.bench_with_input(
                BenchmarkId::from_parameter(&params),
                &(&workload, inverse),
                |b, &(workload, inverse)| {
                    b.iter(|| -> Result<MappedTriples, BenchSetupError> {
                        let generator = registry().make(workload.topology(), workload.kwargs())?;
                        Ok(to_dataset(&generator, &MappedTriples::consumer(), inverse)?)
                    });
                },
            );
        }
    }

    group.finish();
    Ok(())
}

fn grid_dataset(c: &mut Criterion) {
    if let Err(err) = grid_dataset_impl(c) {
        panic!("grid_dataset benchmark setup failed: {err}");
    }
}

criterion_group!(benches, grid_dataset);
criterion_main!(benches);
