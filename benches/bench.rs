use std::cmp::Reverse;
use std::collections::BinaryHeap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

#[cfg(feature = "indexed")]
use radix_queue::IndexedRadixHeap;
use radix_queue::RadixHeapMap;

fn random_keys(count: usize) -> Vec<u32> {
    let mut rng = XorShiftRng::seed_from_u64(0x5eed);
    (0..count).map(|_| rng.gen()).collect()
}

fn extend(c: &mut Criterion) {
    let data = random_keys(10_000);

    c.bench_function("extend_radix", |b| {
        let mut heap = RadixHeapMap::new();

        b.iter(|| {
            heap.extend(data.iter().map(|&k| (k, ())));

            while let Some(a) = heap.pop() {
                black_box(a);
            }

            heap.clear();
        })
    });

    c.bench_function("extend_binary", |b| {
        let mut heap = BinaryHeap::new();

        b.iter(|| {
            heap.extend(data.iter().map(|&k| Reverse(k)));

            while let Some(a) = heap.pop() {
                black_box(a);
            }

            heap.clear();
        })
    });
}

fn pushpop(c: &mut Criterion) {
    c.bench_function("pushpop_radix", |b| {
        let mut heap = RadixHeapMap::<u32, ()>::new();

        b.iter(|| {
            heap.push(0, ());

            for _ in 0..10_000 {
                let (n, _) = heap.pop().unwrap();

                for i in 1..3 {
                    heap.push(n + i, ());
                }
            }

            heap.clear();
        })
    });

    c.bench_function("pushpop_binary", |b| {
        let mut heap = BinaryHeap::new();

        b.iter(|| {
            heap.push(Reverse(0u32));

            for _ in 0..10_000 {
                let Reverse(n) = heap.pop().unwrap();

                for i in 1..3 {
                    heap.push(Reverse(n + i));
                }
            }

            heap.clear();
        })
    });
}

#[cfg(feature = "indexed")]
fn decrease(c: &mut Criterion) {
    let data = random_keys(10_000);

    c.bench_function("decrease_indexed", |b| {
        let mut heap = IndexedRadixHeap::new(data.len());

        b.iter(|| {
            for (value, &key) in data.iter().enumerate() {
                heap.push(key, value);
            }

            for (value, &key) in data.iter().enumerate() {
                heap.decrease_key(value, key / 2);
            }

            while let Some(a) = heap.pop() {
                black_box(a);
            }

            heap.clear();
        })
    });
}

#[cfg(not(feature = "indexed"))]
fn decrease(_: &mut Criterion) {}

criterion_group!(benches, extend, pushpop, decrease);
criterion_main!(benches);
