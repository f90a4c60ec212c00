mod common;

use common::{petgraph_random, ugraph_random, RandomEdges, RANDOM_SEED};
use fastrand::Rng;
use petgraph::prelude::*;
use ugraph::{
    infra::export::{Export, Text},
    load::Loader,
};

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn ugraph_add_edges<const N: usize>(density: f32) {
    let mut rng = Rng::with_seed(RANDOM_SEED);

    let mut graph = ugraph::graph::UndirectedGraph::new(N);
    let mut edges = RandomEdges::new(N, density);

    while let Some((u, v)) = edges.next_edge(&mut rng) {
        graph.add_edge_weighted(u, v, rng.f64());
    }

    // Second pass hits existing edges half of the time.
    let mut edges = RandomEdges::new(N, density);

    while let Some((u, v)) = edges.next_edge(&mut rng) {
        graph.add_edge_weighted(v, u, rng.f64());
    }
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn petgraph_matrix_add_edges<const N: usize>(density: f32) {
    let mut rng = Rng::with_seed(RANDOM_SEED);

    let mut graph = petgraph::matrix_graph::UnMatrix::<(), f64>::with_capacity(N);

    for _ in 0..N {
        graph.add_node(());
    }

    let mut edges = RandomEdges::new(N, density);

    while let Some((u, v)) = edges.next_edge(&mut rng) {
        if !graph.has_edge(NodeIndex::new(u), NodeIndex::new(v)) {
            graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), rng.f64());
        }
    }

    let mut edges = RandomEdges::new(N, density);

    while let Some((u, v)) = edges.next_edge(&mut rng) {
        if !graph.has_edge(NodeIndex::new(v), NodeIndex::new(u)) {
            graph.add_edge(NodeIndex::new(v), NodeIndex::new(u), rng.f64());
        }
    }
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5])]
fn ugraph_is_connected<const N: usize>(bencher: divan::Bencher, density: f32) {
    let mut rng = Rng::with_seed(RANDOM_SEED);
    let graph = ugraph_random(N, density, &mut rng);
    let queries = (0..1000)
        .map(|_| (rng.usize(..N), rng.usize(..N)))
        .collect::<Vec<_>>();

    bencher.bench_local(|| {
        queries
            .iter()
            .filter(|(u, v)| graph.is_connected(*u, *v) == Ok(true))
            .count()
    });
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5])]
fn petgraph_contains_edge<const N: usize>(bencher: divan::Bencher, density: f32) {
    let mut rng = Rng::with_seed(RANDOM_SEED);
    let graph = petgraph_random(N, density, &mut rng);
    let queries = (0..1000)
        .map(|_| (NodeIndex::new(rng.usize(..N)), NodeIndex::new(rng.usize(..N))))
        .collect::<Vec<_>>();

    bencher.bench_local(|| {
        queries
            .iter()
            .filter(|(u, v)| graph.contains_edge(*u, *v))
            .count()
    });
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5])]
fn ugraph_neighbors<const N: usize>(bencher: divan::Bencher, density: f32) {
    let mut rng = Rng::with_seed(RANDOM_SEED);
    let graph = ugraph_random(N, density, &mut rng);

    bencher.bench_local(|| {
        graph
            .vertices()
            .map(|v| graph.neighbors(v).map_or(0, |n| n.iter().sum::<usize>()))
            .sum::<usize>()
    });
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5])]
fn petgraph_neighbors<const N: usize>(bencher: divan::Bencher, density: f32) {
    let mut rng = Rng::with_seed(RANDOM_SEED);
    let graph = petgraph_random(N, density, &mut rng);

    bencher.bench_local(|| {
        graph
            .node_indices()
            .map(|v| graph.neighbors(v).map(|n| n.index()).sum::<usize>())
            .sum::<usize>()
    });
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5])]
fn ugraph_load_weighted<const N: usize>(bencher: divan::Bencher, density: f32) {
    let mut rng = Rng::with_seed(RANDOM_SEED);
    let graph = ugraph_random(N, density, &mut rng);
    let text = Text::weighted().to_string(&graph);
    let loader = Loader::weighted();

    bencher.bench_local(|| loader.load_str(&text).map(|graph| graph.size()));
}
