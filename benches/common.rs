#![allow(dead_code)]

use fastrand::Rng;
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

/// Random edges of G(n, p) without self-loops, generated by skipping over the
/// lower triangle with geometric jumps.
pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_count: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_count,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n { Some((*v, *w)) } else { None }
    }
}

pub fn ugraph_random(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> ugraph::graph::UndirectedGraph {
    let mut graph = ugraph::graph::UndirectedGraph::new(vertex_count);
    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge_weighted(u, v, rng.f64());
    }

    graph
}

pub fn petgraph_random(vertex_count: usize, density: f32, rng: &mut Rng) -> UnGraph<(), f64> {
    let mut graph = UnGraph::with_capacity(vertex_count, 0);

    for _ in 0..vertex_count {
        graph.add_node(());
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), rng.f64());
    }

    graph
}
