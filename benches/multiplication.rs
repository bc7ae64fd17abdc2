//! Benchmarks comparing multiplication algorithms

extern crate criterion;
extern crate decmul;
extern crate oorandom;

use std::num::NonZeroUsize;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use decmul::{Algorithm, Context, DigitVec};

mod common;
use common::*;

criterion_main!(
    multiplication,
    karatsuba_threshold,
);

criterion_group!(
    name = multiplication;
    config = Criterion::default()
                       .measurement_time(Duration::from_secs(5))
                       .sample_size(100);
    targets = bench_algorithms,
);

criterion_group!(
    name = karatsuba_threshold;
    config = Criterion::default()
                       .sample_size(50);
    targets = bench_thresholds,
);


const OPERAND_LENGTHS: [usize; 5] = [16, 64, 256, 1024, 4096];

fn make_pairs(len: usize, count: usize, seed: u64) -> Vec<(DigitVec, DigitVec)> {
    let mut rng = oorandom::Rand32::new(seed);
    (0..count).map(|_| random_operand_pair(&mut rng, len)).collect()
}

fn bench_algorithms(c: &mut Criterion) {
    let ctx = Context::default();
    let mut group = c.benchmark_group("multiply");

    for &len in OPERAND_LENGTHS.iter() {
        let pairs = make_pairs(len, 16, 0x5eed ^ len as u64);

        for &algorithm in Algorithm::ALL.iter() {
            // quadratic algorithms take too long on the largest inputs
            if len > 1024 && algorithm != Algorithm::Karatsuba {
                continue;
            }
            let mut pair_iter = RandomIterator::new_with_seed(&pairs, len as u64);
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), len),
                &len,
                |b, _| b.iter(|| {
                    let (x, y) = pair_iter.next();
                    black_box(ctx.multiply(algorithm, x, y))
                }),
            );
        }
    }
    group.finish();
}

fn bench_thresholds(c: &mut Criterion) {
    let pairs = make_pairs(1024, 8, 1024);
    let mut group = c.benchmark_group("karatsuba_threshold");

    for &threshold in [8usize, 16, 32, 64, 128, 256].iter() {
        let ctx = match NonZeroUsize::new(threshold) {
            Some(t) => Context::new(t),
            None => continue,
        };
        let mut pair_iter = RandomIterator::new_with_seed(&pairs, threshold as u64);
        group.bench_with_input(
            BenchmarkId::from_parameter(threshold),
            &threshold,
            |b, _| b.iter(|| {
                let (x, y) = pair_iter.next();
                black_box(ctx.multiply(Algorithm::Karatsuba, x, y))
            }),
        );
    }
    group.finish();
}
