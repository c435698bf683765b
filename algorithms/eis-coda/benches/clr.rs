use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use eis_coda::clr::{clr, clr_bands};
use eis_toolkit::benchmarks::config;
use eis_toolkit::Table;
use ndarray::{Array2, Array3};
use ndarray_rand::{
    rand::distributions::Uniform, rand::rngs::SmallRng, rand::SeedableRng, RandomExt,
};

fn bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(84);
    let mut group = c.benchmark_group("CLR");
    config::set_default_benchmark_configs(&mut group);

    for nsamples in [1_000, 10_000, 100_000] {
        let records: Array2<f64> =
            Array2::random_using((nsamples, 10), Uniform::new(1e-3, 100.), &mut rng);
        let table = Table::from_records(records);
        group.bench_with_input(BenchmarkId::new("table", nsamples), &table, |b, table| {
            b.iter(|| clr(table).unwrap());
        });
    }

    for size in [64, 256, 1024] {
        let raster: Array3<f64> =
            Array3::random_using((5, size, size), Uniform::new(1e-3, 100.), &mut rng);
        group.bench_with_input(BenchmarkId::new("bands", size), &raster, |b, raster| {
            b.iter(|| clr_bands(raster).unwrap());
        });
    }
    group.finish();
}

#[cfg(not(target_os = "windows"))]
criterion_group! {
    name = benches;
    config = config::get_default_profiling_configs();
    targets = bench
}
#[cfg(target_os = "windows")]
criterion_group!(benches, bench);

criterion_main!(benches);
