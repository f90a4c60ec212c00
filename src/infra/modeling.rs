//! Reference model of the undirected graph used for differential testing.
//!
//! The model stores the edge set as a hash map keyed by the unordered pair
//! and remembers the insertion order. It shares no code with the real
//! storages, so agreement of the two is meaningful.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{core::GraphError, graph::UndirectedGraph};

use super::arbitrary::{MutOp, MutOpResult};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelMismatch {
    #[error("order: expected {expected}, got {actual}")]
    Order { expected: usize, actual: usize },
    #[error("size: expected {expected}, got {actual}")]
    Size { expected: usize, actual: usize },
    #[error("degree of {vertex}: expected {expected}, got {actual:?}")]
    Degree {
        vertex: usize,
        expected: usize,
        actual: Result<usize, GraphError>,
    },
    #[error("neighbors of {vertex}: expected {expected:?}, got {actual:?}")]
    Neighbors {
        vertex: usize,
        expected: Vec<usize>,
        actual: Result<Vec<usize>, GraphError>,
    },
    #[error("connectivity of ({u}, {v}): expected {expected}, got {actual:?}")]
    Connected {
        u: usize,
        v: usize,
        expected: bool,
        actual: Result<bool, GraphError>,
    },
    #[error("weight of ({u}, {v}): expected {expected:?}, got {actual:?}")]
    Weight {
        u: usize,
        v: usize,
        expected: Option<f64>,
        actual: Result<Option<f64>, GraphError>,
    },
}

#[derive(Debug, Clone)]
pub struct Model {
    order: usize,
    weights: FxHashMap<(usize, usize), f64>,
    inserted: Vec<(usize, usize)>,
}

fn key(u: usize, v: usize) -> (usize, usize) {
    (u.min(v), u.max(v))
}

impl Model {
    pub fn new(order: usize) -> Self {
        Self {
            order,
            weights: FxHashMap::default(),
            inserted: Vec::new(),
        }
    }

    pub fn apply(&mut self, op: MutOp) -> MutOpResult {
        if let MutOp::Clear = op {
            self.weights.clear();
            self.inserted.clear();
            return MutOpResult::Clear;
        }

        let Some((u, v, weight)) = op.resolve(self.order) else {
            return MutOpResult::AddEdge(Ok(false));
        };

        for vertex in [u, v] {
            if vertex >= self.order {
                return MutOpResult::AddEdge(Err(GraphError::VertexOutOfRange {
                    vertex,
                    order: self.order,
                }));
            }
        }

        if u == v || self.weights.contains_key(&key(u, v)) {
            return MutOpResult::AddEdge(Ok(false));
        }

        self.weights.insert(key(u, v), weight);
        self.inserted.push((u, v));
        MutOpResult::AddEdge(Ok(true))
    }

    pub fn neighbors(&self, vertex: usize) -> Vec<usize> {
        self.inserted
            .iter()
            .filter_map(|&(u, v)| {
                if u == vertex {
                    Some(v)
                } else if v == vertex {
                    Some(u)
                } else {
                    None
                }
            })
            .collect()
    }

    /// Compares every observable property of the graph with the model.
    pub fn check(&self, graph: &UndirectedGraph) -> Result<(), ModelMismatch> {
        if graph.order() != self.order {
            return Err(ModelMismatch::Order {
                expected: self.order,
                actual: graph.order(),
            });
        }

        if graph.size() != self.weights.len() {
            return Err(ModelMismatch::Size {
                expected: self.weights.len(),
                actual: graph.size(),
            });
        }

        for vertex in 0..self.order {
            let expected = self.neighbors(vertex);

            let actual = graph.degree(vertex);
            if actual != Ok(expected.len()) {
                return Err(ModelMismatch::Degree {
                    vertex,
                    expected: expected.len(),
                    actual,
                });
            }

            let actual = graph.neighbors(vertex).map(<[usize]>::to_vec);
            if actual.as_ref() != Ok(&expected) {
                return Err(ModelMismatch::Neighbors {
                    vertex,
                    expected,
                    actual,
                });
            }
        }

        for u in 0..self.order {
            for v in 0..self.order {
                let expected = self.weights.get(&key(u, v)).copied();

                let actual = graph.is_connected(u, v);
                if actual != Ok(expected.is_some()) {
                    return Err(ModelMismatch::Connected {
                        u,
                        v,
                        expected: expected.is_some(),
                        actual,
                    });
                }

                // Bitwise comparison, the weights may be NaN.
                let actual = graph.weight(u, v);
                let same = match (&actual, expected) {
                    (Ok(Some(lhs)), Some(rhs)) => lhs.to_bits() == rhs.to_bits(),
                    (Ok(None), None) => true,
                    _ => false,
                };

                if !same {
                    return Err(ModelMismatch::Weight {
                        u,
                        v,
                        expected,
                        actual,
                    });
                }
            }
        }

        Ok(())
    }
}
