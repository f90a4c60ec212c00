use std::fmt;

use proptest::{
    collection::vec,
    prelude::*,
    strategy::{NewTree, ValueTree},
    test_runner::TestRunner,
};

use crate::graph::UndirectedGraph;

/// Order and sequence of edge insertions that produce a graph.
///
/// Shrinking happens on this representation, which keeps the failing cases
/// readable: fewer vertices, fewer insertions, simpler weights.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSeq {
    pub order: usize,
    pub edges: Vec<(usize, usize, f64)>,
}

impl EdgeSeq {
    pub fn build(&self) -> UndirectedGraph {
        let mut graph = UndirectedGraph::new(self.order);

        for &(u, v, weight) in self.edges.iter() {
            graph.add_edge_weighted(u, v, weight);
        }

        graph
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyParams {
    max_order: usize,
    max_edges: usize,
    allow_loops: bool,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_order: 24,
            max_edges: 128,
            allow_loops: true,
        }
    }
}

impl StrategyParams {
    pub fn max_order(self, value: usize) -> Self {
        Self {
            max_order: value,
            ..self
        }
    }

    pub fn max_edges(self, value: usize) -> Self {
        Self {
            max_edges: value,
            ..self
        }
    }

    /// Do not generate self-loop insertions. By default they are generated
    /// to exercise their rejection.
    pub fn no_loops(self) -> Self {
        Self {
            allow_loops: false,
            ..self
        }
    }
}

pub struct EdgeSeqStrategy<W> {
    weight: W,
    params: StrategyParams,
}

impl<W: fmt::Debug> fmt::Debug for EdgeSeqStrategy<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeSeqStrategy")
            .field("weight", &self.weight)
            .field("params", &self.params)
            .finish()
    }
}

macro_rules! delegate_builder_fn {
    ($name:ident$(, $param:ident: $param_type:ty)*) => {
        #[doc = concat!("See [StrategyParams::", stringify!($name), "](StrategyParams::", stringify!($name), ") for details.")]
        pub fn $name(self, $($param: $param_type),*) -> Self {
            Self {
                params: self.params.$name($($param,)*),
                ..self
            }
        }
    }
}

impl<W> EdgeSeqStrategy<W>
where
    W: Strategy<Value = f64> + Clone + 'static,
{
    pub fn new(weight: W) -> Self {
        Self::with_params(weight, StrategyParams::default())
    }

    pub fn with_params(weight: W, params: StrategyParams) -> Self {
        Self { weight, params }
    }

    delegate_builder_fn!(max_order, value: usize);
    delegate_builder_fn!(max_edges, value: usize);
    delegate_builder_fn!(no_loops);

    fn boxed_inner(&self) -> BoxedStrategy<EdgeSeq> {
        let StrategyParams {
            max_order,
            max_edges,
            allow_loops,
        } = self.params;
        let weight = self.weight.clone();

        (0..=max_order)
            .prop_flat_map(move |order| {
                let max_edges = if order < 2 { 0 } else { max_edges };

                // Without loops, the second endpoint skips over the first one.
                let second = if allow_loops { order } else { order.saturating_sub(1) };
                let endpoints = (0..order.max(1), 0..second.max(1)).prop_map(move |(u, v)| {
                    if !allow_loops && v >= u {
                        (u, v + 1)
                    } else {
                        (u, v)
                    }
                });

                vec(
                    (endpoints, weight.clone()).prop_map(|((u, v), w)| (u, v, w)),
                    0..=max_edges,
                )
                .prop_map(move |edges| EdgeSeq { order, edges })
            })
            .boxed()
    }
}

impl<W> Strategy for EdgeSeqStrategy<W>
where
    W: Strategy<Value = f64> + Clone + 'static,
{
    type Tree = Box<dyn ValueTree<Value = EdgeSeq>>;
    type Value = EdgeSeq;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        self.boxed_inner().new_tree(runner)
    }
}

pub fn edge_seq<W>(weight: W) -> EdgeSeqStrategy<W>
where
    W: Strategy<Value = f64> + Clone + 'static,
{
    EdgeSeqStrategy::new(weight)
}

pub fn graph_undirected<W>(weight: W) -> impl Strategy<Value = UndirectedGraph>
where
    W: Strategy<Value = f64> + Clone + 'static,
{
    edge_seq(weight).prop_map(|seq| seq.build())
}

#[cfg(test)]
mod tests {
    use proptest::test_runner::TestRunner;

    use super::*;

    #[test]
    fn respects_params() {
        let mut runner = TestRunner::deterministic();
        let strategy = edge_seq(0.0..1.0f64).max_order(5).max_edges(7).no_loops();

        for _ in 0..200 {
            let seq = strategy.new_tree(&mut runner).unwrap().current();

            assert!(seq.order <= 5);
            assert!(seq.edges.len() <= 7);

            for &(u, v, weight) in seq.edges.iter() {
                assert!(u < seq.order && v < seq.order);
                assert_ne!(u, v);
                assert!((0.0..1.0).contains(&weight));
            }
        }
    }
}
