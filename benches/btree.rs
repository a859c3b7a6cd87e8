use bptree::BPlusTree;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_10k");

    for order in [4usize, 16, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(order), &order, |b, &order| {
            b.iter(|| {
                let mut tree = BPlusTree::new(order).unwrap();
                // Multiplicative hashing spreads sequential ids across the key space.
                for i in 0..10_000u64 {
                    tree.insert(i.wrapping_mul(0x9E37_79B9_7F4A_7C15), i).unwrap();
                }
                black_box(tree.len())
            });
        });
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_10k");

    for order in [4usize, 16, 64] {
        let mut tree = BPlusTree::new(order).unwrap();
        for i in 0..10_000u64 {
            tree.insert(i, i).unwrap();
        }

        group.bench_with_input(BenchmarkId::from_parameter(order), &tree, |b, tree| {
            b.iter(|| {
                let mut hits = 0;
                for i in (0..20_000u64).step_by(7) {
                    if tree.lookup(black_box(&i)).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_lookup);
criterion_main!(benches);
