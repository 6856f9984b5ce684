//! Criterion benchmarks for the indexed heap
//!
//! Three workloads: pure enqueue/dequeue churn, the update-heavy pattern
//! a pathfinder produces when it keeps finding cheaper routes, and
//! remove-from-the-middle eviction.
//!
//! ```bash
//! cargo bench --bench heap_perf
//! ```

use criterion::{criterion_group, criterion_main, Criterion};
use indexed_min_heap::{HeapItem, HeapLink, IndexedMinHeap, NodeRef};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::hint::black_box;
use std::rc::Rc;

struct BenchNode {
    link: HeapLink<u64>,
}

impl HeapItem for BenchNode {
    type Priority = u64;

    fn priority(&self) -> u64 {
        self.link.priority()
    }
    fn set_priority(&mut self, p: u64) {
        self.link.set_priority(p)
    }
    fn slot(&self) -> usize {
        self.link.slot()
    }
    fn set_slot(&mut self, slot: usize) {
        self.link.set_slot(slot)
    }
}

fn bench_node() -> NodeRef<BenchNode> {
    Rc::new(RefCell::new(BenchNode {
        link: HeapLink::new(0),
    }))
}

const N: usize = 1024;

fn bench_enqueue_dequeue(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let priorities: Vec<u64> = (0..N).map(|_| rng.gen()).collect();

    c.bench_function("enqueue_dequeue_1024", |b| {
        b.iter(|| {
            let mut heap = IndexedMinHeap::with_capacity(N);
            let nodes: Vec<_> = (0..N).map(|_| bench_node()).collect();
            for (n, p) in nodes.iter().zip(&priorities) {
                heap.enqueue(n, *p).unwrap();
            }
            while let Some(n) = heap.dequeue() {
                black_box(n.borrow().priority());
            }
        })
    });
}

fn bench_update_priority(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xF005);
    // Start everything high so updates sift toward the root
    let initial: Vec<u64> = (0..N).map(|_| rng.gen_range(1_000_000..2_000_000)).collect();
    let updates: Vec<(usize, u64)> = (0..4 * N)
        .map(|_| (rng.gen_range(0..N), rng.gen_range(0..1_000_000)))
        .collect();

    c.bench_function("update_priority_4096_over_1024", |b| {
        b.iter(|| {
            let mut heap = IndexedMinHeap::with_capacity(N);
            let nodes: Vec<_> = (0..N).map(|_| bench_node()).collect();
            for (n, p) in nodes.iter().zip(&initial) {
                heap.enqueue(n, *p).unwrap();
            }
            for (idx, p) in &updates {
                // Updates are not monotone, both sift directions run
                heap.update_priority(&nodes[*idx], *p).unwrap();
            }
            black_box(heap.len());
        })
    });
}

fn bench_remove_middle(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEAD);
    let priorities: Vec<u64> = (0..N).map(|_| rng.gen()).collect();

    c.bench_function("remove_half_of_1024", |b| {
        b.iter(|| {
            let mut heap = IndexedMinHeap::with_capacity(N);
            let nodes: Vec<_> = (0..N).map(|_| bench_node()).collect();
            for (n, p) in nodes.iter().zip(&priorities) {
                heap.enqueue(n, *p).unwrap();
            }
            for n in nodes.iter().step_by(2) {
                heap.remove(n).unwrap();
            }
            black_box(heap.len());
        })
    });
}

criterion_group!(
    benches,
    bench_enqueue_dequeue,
    bench_update_priority,
    bench_remove_middle
);
criterion_main!(benches);
