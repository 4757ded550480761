//! Benchmarks for factorization over the integers.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use tertius_factor::{factor, factor_batch};
use tertius_poly::algorithms::cyclotomic::cyclotomic;
use tertius_poly::integer::int_poly;
use tertius_poly::DensePoly;
use tertius_rings::integers::Z;

/// `x^n - 1`, the product of the cyclotomic polynomials of the divisors of `n`.
fn x_pow_minus_one(n: usize) -> DensePoly<Z> {
    let mut coeffs = vec![0i64; n + 1];
    coeffs[0] = -1;
    coeffs[n] = 1;
    int_poly(&coeffs)
}

/// Benchmark polynomials with many small factors.
fn bench_many_factors(c: &mut Criterion) {
    let mut group = c.benchmark_group("factor_x^n-1");

    for n in [12usize, 30, 60] {
        let f = x_pow_minus_one(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(factor(&f)))
        });
    }

    group.finish();
}

/// Benchmark products of polynomials that split into many factors modulo
/// every prime.
fn bench_composed(c: &mut Criterion) {
    let mut group = c.benchmark_group("factor_composed");
    group.sample_size(20);

    // minimal polynomial of sqrt 2 + sqrt 3 times x^2 - 5
    let s2 = int_poly(&[1, 0, -10, 0, 1]);
    let f = s2.mul(&int_poly(&[-5, 0, 1]));
    group.bench_function("degree_6", |b| b.iter(|| black_box(factor(&f))));

    let g = cyclotomic(15).mul(&cyclotomic(21));
    group.bench_function("cyclotomic_product", |b| b.iter(|| black_box(factor(&g))));

    group.finish();
}

/// Benchmark parallel batch factorization.
fn bench_batch(c: &mut Criterion) {
    let polys: Vec<DensePoly<Z>> = (6..30).map(x_pow_minus_one).collect();
    c.bench_function("factor_batch", |b| b.iter(|| black_box(factor_batch(&polys))));
}

criterion_group!(benches, bench_many_factors, bench_composed, bench_batch);
criterion_main!(benches);
