//! Throughput of the validation and render passes.
//!
//! Run with: cargo bench
//!
//! Trees are generated from a fixed seed so runs are comparable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use gametree::model::{GameTree, NestedNode, Payoff, Roster};
use gametree::render::{render, GraphAttributes};
use gametree::validation::validate;

/// Random tree of the given depth: decisions with 2-3 actions, and a
/// chance node on roughly one level in four.
fn random_tree(rng: &mut ChaCha8Rng, depth: usize, counter: &mut usize) -> NestedNode {
    *counter += 1;
    let id = format!("node {}", counter);
    if depth == 0 {
        return NestedNode::terminal(
            id,
            Payoff::new("An outcome long enough to need wrapping across lines")
                .with_utility("Alpha", rng.gen_range(-10.0..10.0))
                .with_utility("Beta", rng.gen_range(-10.0..10.0)),
        );
    }

    let width = rng.gen_range(2..=3);
    if rng.gen_bool(0.25) {
        let p = 1.0 / width as f64;
        (0..width).fold(NestedNode::internal(id, "Nature"), |node, i| {
            let child = random_tree(rng, depth - 1, counter);
            node.with_chance(format!("Event {}", i), p, child)
        })
    } else {
        let player = if depth % 2 == 0 { "Alpha" } else { "Beta" };
        (0..width).fold(NestedNode::internal(id, player), |node, i| {
            let child = random_tree(rng, depth - 1, counter);
            node.with_action(format!("Strategic move {}", i), child)
        })
    }
}

fn bench_passes(c: &mut Criterion) {
    let mut group = c.benchmark_group("passes");
    let roster = Roster::empty();

    for depth in [4, 6, 8] {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let tree = GameTree::from_nested(&random_tree(&mut rng, depth, &mut 0));
        group.throughput(Throughput::Elements(tree.len() as u64));

        group.bench_with_input(BenchmarkId::new("validate", depth), &tree, |b, tree| {
            b.iter(|| validate(black_box(tree), &roster))
        });
        group.bench_with_input(BenchmarkId::new("render", depth), &tree, |b, tree| {
            b.iter(|| render(black_box(tree)))
        });
        group.bench_with_input(BenchmarkId::new("render_dot", depth), &tree, |b, tree| {
            let attrs = GraphAttributes::default();
            b.iter(|| render(black_box(tree)).map(|graph| graph.to_dot(&attrs)))
        });
    }

    group.finish();
}

fn bench_from_nested(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let nested = random_tree(&mut rng, 8, &mut 0);

    c.bench_function("from_nested_depth_8", |b| {
        b.iter(|| GameTree::from_nested(black_box(&nested)))
    });
}

criterion_group!(benches, bench_passes, bench_from_nested);
criterion_main!(benches);
