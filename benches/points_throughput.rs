use criterion::{criterion_group, criterion_main, Criterion};
use lnb_core::GeneratingMatrix;
use lnb_points::{digital_points, lattice_points};

fn sobol_like(width: usize) -> GeneratingMatrix {
    GeneratingMatrix::new(
        (0..width)
            .map(|r| (0..width).map(|c| u64::from(c >= r)).collect())
            .collect(),
    )
}

fn bench_points(c: &mut Criterion) {
    let matrix = sobol_like(16);
    c.bench_function("digital_points_2^16", |b| {
        b.iter(|| {
            let _ = digital_points(&matrix, 1 << 16, None).unwrap();
        })
    });
    c.bench_function("lattice_points_65521", |b| {
        b.iter(|| {
            let _ = lattice_points(17_797, 65_521);
        })
    });
}

criterion_group!(benches, bench_points);
criterion_main!(benches);
