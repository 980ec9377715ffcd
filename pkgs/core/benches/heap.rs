use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use keyed_heap::{IndexedHeap, Order};

const NUM_ITEMS: i64 = 10_000;

fn filled_heap(order: Order, rng: &mut fastrand::Rng) -> IndexedHeap {
    let mut heap = IndexedHeap::with_capacity(order, NUM_ITEMS as usize);
    for value in 0..NUM_ITEMS {
        heap.insert(rng.i64(0..1_000_000), value);
    }
    heap
}

fn bench_insert_pop(c: &mut Criterion) {
    let mut rng = fastrand::Rng::with_seed(12345);
    let priorities: Vec<i64> = (0..NUM_ITEMS).map(|_| rng.i64(0..1_000_000)).collect();

    c.bench_function("insert_pop", |b| {
        b.iter(|| {
            let mut heap = IndexedHeap::with_capacity(Order::Min, NUM_ITEMS as usize);
            for (value, &priority) in priorities.iter().enumerate() {
                heap.insert(black_box(priority), value as i64);
            }
            while let Ok(value) = heap.pop() {
                black_box(value);
            }
        })
    });
}

fn bench_update(c: &mut Criterion) {
    let mut rng = fastrand::Rng::with_seed(12345);

    c.bench_function("update", |b| {
        b.iter_batched_ref(
            || filled_heap(Order::Min, &mut rng),
            |heap| {
                let mut rng = fastrand::Rng::with_seed(54321);
                for _ in 0..NUM_ITEMS {
                    heap.update(rng.i64(0..NUM_ITEMS), black_box(rng.i64(0..1_000_000)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_reschedule(c: &mut Criterion) {
    let mut rng = fastrand::Rng::with_seed(12345);

    // Timer workload: pop the earliest deadline and re-arm it further in the future
    c.bench_function("reschedule", |b| {
        b.iter_batched_ref(
            || filled_heap(Order::Min, &mut rng),
            |heap| {
                let mut now = 0;
                for _ in 0..NUM_ITEMS {
                    let value = heap.pop().unwrap();
                    now += 1;
                    heap.insert(black_box(now + 1_000_000), value);
                }
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_insert_pop, bench_update, bench_reschedule);
criterion_main!(benches);
