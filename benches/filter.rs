//! Filter operation benchmarks.
//!
//! Covers the three cost centers:
//!
//! 1. **Insert**: one digest plus k bit writes; scales with k, not with
//!    filter size (modulo cache effects on large arrays).
//! 2. **Query**: one digest plus up to k bit reads; misses usually exit
//!    early on the first unset bit.
//! 3. **Merge**: whole-word OR/AND over the m-bit array, O(m/64).

use bloomset::BloomFilter;
use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_strings(count: usize, len: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(len)
                .map(char::from)
                .collect()
        })
        .collect()
}

/// Insert latency across filter capacities.
fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    let items = generate_strings(1000, 32);

    for capacity in [1_000usize, 100_000] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::from_parameter(capacity),
            &capacity,
            |b, &capacity| {
                let mut filter = BloomFilter::new(capacity, 0.01).unwrap();
                let mut idx = 0;
                b.iter(|| {
                    filter.add(black_box(items[idx % items.len()].as_str()));
                    idx += 1;
                });
            },
        );
    }

    group.finish();
}

/// Query latency for present and absent values.
///
/// Lower target probabilities mean more hash slots per query.
fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");
    let present = generate_strings(1000, 32);
    let absent = generate_strings(1000, 48);

    for probability in [0.1, 0.01, 0.001] {
        let mut filter = BloomFilter::new(10_000, probability).unwrap();
        for item in &present {
            filter.add(item.as_str());
        }

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::new("hit", probability),
            &probability,
            |b, _| {
                let mut idx = 0;
                b.iter(|| {
                    let found = filter.contains(black_box(present[idx % present.len()].as_str()));
                    idx += 1;
                    found
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("miss", probability),
            &probability,
            |b, _| {
                let mut idx = 0;
                b.iter(|| {
                    let found = filter.contains(black_box(absent[idx % absent.len()].as_str()));
                    idx += 1;
                    found
                });
            },
        );
    }

    group.finish();
}

/// In-place merge cost over the whole bit array.
fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");
    let items = generate_strings(5000, 32);

    for capacity in [1_000usize, 100_000] {
        let mut left = BloomFilter::new(capacity, 0.01).unwrap();
        let mut right = BloomFilter::new(capacity, 0.01).unwrap();
        for (i, item) in items.iter().enumerate() {
            if i % 2 == 0 {
                left.add(item.as_str());
            } else {
                right.add(item.as_str());
            }
        }

        group.bench_with_input(
            BenchmarkId::new("union_with", capacity),
            &capacity,
            |b, _| {
                b.iter_batched(
                    || left.clone(),
                    |mut receiver| {
                        receiver.union_with(black_box(&right)).unwrap();
                        receiver
                    },
                    BatchSize::SmallInput,
                );
            },
        );
        group.bench_with_input(
            BenchmarkId::new("intersect_with", capacity),
            &capacity,
            |b, _| {
                b.iter_batched(
                    || left.clone(),
                    |mut receiver| {
                        receiver.intersect_with(black_box(&right)).unwrap();
                        receiver
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_add, bench_contains, bench_merge);
criterion_main!(benches);
