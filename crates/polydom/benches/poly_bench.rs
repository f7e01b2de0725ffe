//! Benchmarks for polynomial arithmetic and composition.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use polydom::prelude::*;

/// Generates a deterministic polynomial with small integral coefficients.
fn test_poly(degree: usize) -> Polynomial {
    let coeffs: Vec<f64> = (0..=degree)
        .map(|i| f64::from(u32::try_from(i % 100).unwrap()) - 50.0)
        .collect();
    Polynomial::unbounded(coeffs).unwrap()
}

fn bench_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_mul");

    for size in [16, 64, 256] {
        let p = test_poly(size);
        let q = test_poly(size);

        group.bench_with_input(BenchmarkId::new("convolution", size), &size, |b, _| {
            b.iter(|| black_box(p.mul(&q)))
        });
    }

    group.finish();
}

fn bench_power(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_pow");
    let p = test_poly(4);

    for n in [2u32, 8, 16] {
        group.bench_with_input(BenchmarkId::new("repeated_mul", n), &n, |b, &n| {
            b.iter(|| black_box(p.pow(n)))
        });
    }

    group.finish();
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_compose");

    for size in [4, 8, 16] {
        let p = test_poly(size);
        let q = test_poly(3);

        group.bench_with_input(BenchmarkId::new("sum_of_powers", size), &size, |b, _| {
            b.iter(|| black_box(p.compose(&q)))
        });
    }

    group.finish();
}

fn bench_chebyshev(c: &mut Criterion) {
    let mut group = c.benchmark_group("chebyshev");

    for n in [16usize, 64, 128] {
        group.bench_with_input(BenchmarkId::new("fresh_family", n), &n, |b, &n| {
            b.iter(|| {
                let d = Domain::symmetric_unit();
                let family = OrthogonalFamily::new(
                    'T',
                    Polynomial::constant(1.0, d),
                    Polynomial::monomial(1.0, 1, d),
                    Polynomial::monomial(2.0, 1, d),
                );
                black_box(family.get(n))
            })
        });

        group.bench_with_input(BenchmarkId::new("cached", n), &n, |b, &n| {
            let _ = chebyshev_first_kind(n);
            b.iter(|| black_box(chebyshev_first_kind(n)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_multiplication, bench_power, bench_compose, bench_chebyshev);
criterion_main!(benches);
