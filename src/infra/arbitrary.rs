use std::fmt;

use arbitrary::{Arbitrary, Unstructured};

use crate::{core::GraphError, graph::UndirectedGraph};

#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }
}

#[derive(Debug, Arbitrary, Clone, Copy, PartialEq)]
pub enum MutOp {
    /// Insertion of valid vertices (wrapped into range).
    AddEdge(Index, Index),
    AddEdgeWeighted(Index, Index, f64),
    /// Insertion with the indices as they are, mostly out of range.
    AddEdgeRaw(usize, usize),
    Clear,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MutOpResult {
    AddEdge(Result<bool, GraphError>),
    Clear,
}

impl MutOp {
    /// Resolves wrapped indices against the order of the graph. The
    /// resolved operation applies identically to the graph and the model.
    /// Returns `None` for edge insertions into a graph without vertices.
    pub fn resolve(self, order: usize) -> Option<(usize, usize, f64)> {
        match self {
            MutOp::AddEdge(u, v) => Some((u.get(order)?, v.get(order)?, 1.0)),
            MutOp::AddEdgeWeighted(u, v, weight) => Some((u.get(order)?, v.get(order)?, weight)),
            MutOp::AddEdgeRaw(u, v) => Some((u, v, 1.0)),
            MutOp::Clear => None,
        }
    }

    pub fn apply(self, graph: &mut UndirectedGraph) -> MutOpResult {
        match self {
            MutOp::Clear => {
                graph.clear();
                MutOpResult::Clear
            }
            op => match op.resolve(graph.order()) {
                Some((u, v, weight)) => {
                    MutOpResult::AddEdge(graph.try_add_edge_weighted(u, v, weight))
                }
                None => MutOpResult::AddEdge(Ok(false)),
            },
        }
    }
}

/// Order of a graph and a sequence of operations applied to it.
pub struct MutOpsSeq {
    pub order: usize,
    pub ops: Vec<MutOp>,
}

impl MutOpsSeq {
    pub fn graph(&self) -> UndirectedGraph {
        UndirectedGraph::new(self.order)
    }
}

impl IntoIterator for MutOpsSeq {
    type Item = MutOp;
    type IntoIter = std::vec::IntoIter<MutOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl fmt::Debug for MutOpsSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "let mut graph = UndirectedGraph::new({});", self.order)?;

        for op in self.ops.iter() {
            match op.resolve(self.order) {
                Some((u, v, weight)) => {
                    writeln!(f, "graph.try_add_edge_weighted({u}, {v}, {weight:?});")?
                }
                None if matches!(op, MutOp::Clear) => writeln!(f, "graph.clear();")?,
                None => {}
            }
        }

        writeln!(f, "check_consistency(&graph).unwrap();")
    }
}

impl<'a> Arbitrary<'a> for MutOpsSeq {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let order = u.int_in_range(0..=64)?;
        let len = u.arbitrary_len::<MutOp>()?;

        let ops = (0..len)
            .map(|_| {
                // Prefer valid insertions so that graphs get dense.
                match u.int_in_range(0..=15u8)? {
                    0 => Ok(MutOp::Clear),
                    1 => Ok(MutOp::AddEdgeRaw(u.arbitrary()?, u.arbitrary()?)),
                    2..=8 => Ok(MutOp::AddEdge(u.arbitrary()?, u.arbitrary()?)),
                    _ => Ok(MutOp::AddEdgeWeighted(
                        u.arbitrary()?,
                        u.arbitrary()?,
                        u.arbitrary()?,
                    )),
                }
            })
            .collect::<arbitrary::Result<Vec<_>>>()?;

        Ok(Self { order, ops })
    }
}

#[cfg(test)]
mod tests {
    use crate::infra::{modeling::Model, testing::check_consistency};

    use super::*;

    #[test]
    fn apply_wraps_indices() {
        let mut graph = UndirectedGraph::new(3);

        assert_eq!(
            MutOp::AddEdge(Index(4), Index(5)).apply(&mut graph),
            MutOpResult::AddEdge(Ok(true))
        );
        assert_eq!(graph.is_connected(1, 2), Ok(true));

        assert_eq!(
            MutOp::AddEdgeRaw(4, 5).apply(&mut graph),
            MutOpResult::AddEdge(Err(GraphError::VertexOutOfRange { vertex: 4, order: 3 }))
        );
    }

    #[test]
    fn apply_on_empty() {
        let mut graph = UndirectedGraph::new(0);

        assert_eq!(
            MutOp::AddEdgeWeighted(Index(0), Index(1), 2.0).apply(&mut graph),
            MutOpResult::AddEdge(Ok(false))
        );
        assert_eq!(MutOp::Clear.apply(&mut graph), MutOpResult::Clear);
    }

    #[test]
    fn random_sequences_match_model() {
        let mut rng = fastrand::Rng::with_seed(0xef6f79ed30ba75a);

        for _ in 0..64 {
            let data = (0..4096).map(|_| rng.u8(..)).collect::<Vec<_>>();
            let mut u = Unstructured::new(&data);
            let seq = MutOpsSeq::arbitrary(&mut u).unwrap();

            let mut graph = seq.graph();
            let mut model = Model::new(seq.order);

            for op in seq {
                let expected = model.apply(op);
                let actual = op.apply(&mut graph);

                assert_eq!(expected, actual);
                model.check(&graph).unwrap();
                check_consistency(&graph).unwrap();
            }
        }
    }
}
