use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lanepack::{decode, decoded_capacity, encode, encoded_upper_bound};
use rand::Rng;
use std::hint::black_box;

/// Postings-shaped data: mostly small d-gaps with the occasional large one.
fn gap_sequence(length: usize) -> Vec<u32> {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            if rng.random_range(0..100) < 5 {
                rng.random_range(1..100_000)
            } else {
                rng.random_range(1..16)
            }
        })
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for size in [128usize, 1024, 16384, 131072].iter() {
        let values = gap_sequence(*size);
        let mut output = vec![0u8; encoded_upper_bound(values.len())];

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| encode(black_box(&mut output), black_box(values)).unwrap());
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in [128usize, 1024, 16384, 131072].iter() {
        let values = gap_sequence(*size);
        let mut encoded = vec![0u8; encoded_upper_bound(values.len())];
        let bytes = encode(&mut encoded, &values).unwrap();
        encoded.truncate(bytes);
        let mut output = vec![0u32; decoded_capacity(values.len())];

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| decode(black_box(&mut output), values.len(), black_box(encoded)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
