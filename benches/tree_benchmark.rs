#[macro_use]
extern crate criterion;

use chunk_merkle_tree::{AuthPath, Digest, MerkleTree, streaming_root};
use criterion::{BenchmarkId, Criterion};
use rand::Rng;

fn random_digests(count: usize) -> Vec<Digest> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| Digest::from_bytes(rng.random()))
        .collect()
}

fn bench(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("tree build");
        let inputs = [1_000usize, 10_000, 100_000];
        for input in inputs.iter() {
            let leaves = random_digests(*input);
            group.bench_with_input(BenchmarkId::new("array", input), &leaves, |b, leaves| {
                b.iter(|| MerkleTree::build(leaves).expect("build"));
            });
            group.bench_with_input(
                BenchmarkId::new("streaming", input),
                &leaves,
                |b, leaves| {
                    b.iter(|| streaming_root(leaves).expect("streaming root"));
                },
            );
        }
    }

    c.bench_function("generate path", |b| {
        let leaves = random_digests(100_000);
        let tree = MerkleTree::build(&leaves).expect("build");
        let mut rng = rand::rng();
        b.iter(|| {
            let index = rng.random_range(0..tree.padded_leaf_count());
            AuthPath::generate(&tree, index).expect("generate")
        });
    });

    c.bench_function("verify path", |b| {
        let leaves = random_digests(100_000);
        let tree = MerkleTree::build(&leaves).expect("build");
        let root = tree.root();
        let mut rng = rand::rng();
        let paths: Vec<AuthPath> = (0..1_000)
            .map(|_| {
                let index = rng.random_range(0..tree.padded_leaf_count());
                AuthPath::generate(&tree, index).expect("generate")
            })
            .collect();
        b.iter(|| {
            let path = &paths[rng.random_range(0..paths.len())];
            path.verify(&root, tree.height()).expect("verify")
        });
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = bench
);
criterion_main!(benches);
