//! Benchmarks for the iterative root finders.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use polydom::prelude::*;

/// Builds `(x - 1)(x - 2)...(x - n)`.
fn shifted_factorial(n: u32) -> Polynomial {
    (1..=n).fold(Polynomial::one(Domain::unbounded()), |acc, k| {
        acc.mul(&Polynomial::unbounded(vec![-f64::from(k), 1.0]).unwrap())
    })
}

fn bench_newton(c: &mut Criterion) {
    let p = Polynomial::unbounded(vec![-4.0, 0.0, 1.0]).unwrap();
    let options = NewtonOptions::default();

    c.bench_function("newton_quadratic", |b| {
        b.iter(|| black_box(newton(&p, 3.0, &options)))
    });
}

fn bench_durand_kerner(c: &mut Criterion) {
    let mut group = c.benchmark_group("durand_kerner");
    let options = DurandKernerOptions::new().iterations(40);

    for n in [2u32, 5, 10] {
        let p = shifted_factorial(n);
        group.bench_with_input(BenchmarkId::new("shifted_factorial", n), &n, |b, _| {
            b.iter(|| black_box(durand_kerner(&p, &options)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_newton, bench_durand_kerner);
criterion_main!(benches);
