use fixedbitset::FixedBitSet;
use thiserror::Error;

use crate::graph::UndirectedGraph;

/// Creates the complete graph of given order with all edges of the same
/// weight.
pub fn create_complete(order: usize, weight: f64) -> UndirectedGraph {
    let mut graph = UndirectedGraph::new(order);

    for u in graph.vertices() {
        for v in 0..u {
            graph.add_edge_weighted(u, v, weight);
        }
    }

    graph
}

/// Creates the path `0 - 1 - ... - (order - 1)` with default weights.
pub fn create_path(order: usize) -> UndirectedGraph {
    let mut graph = UndirectedGraph::new(order);

    for v in 1..order {
        graph.add_edge(v - 1, v);
    }

    graph
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("storage order mismatch: graph {graph}, matrix {matrix}, lists {lists}, weights {weights}, degrees {degrees}")]
    OrderMismatch {
        graph: usize,
        matrix: usize,
        lists: usize,
        weights: usize,
        degrees: usize,
    },
    #[error("number of matrix cells ({0}) is not equal to edge count ({1})")]
    MatrixEdgeCountMismatch(usize, usize),
    #[error("sum of degrees ({0}) is not equal to doubled edge count ({1})")]
    HandshakingLemma(usize, usize),
    #[error("degree of vertex {vertex} ({degree}) is not equal to its list length ({len})")]
    DegreeListMismatch {
        vertex: usize,
        degree: usize,
        len: usize,
    },
    #[error("degree of vertex {vertex} ({degree}) is not equal to its matrix row ({matrix})")]
    DegreeMatrixMismatch {
        vertex: usize,
        degree: usize,
        matrix: usize,
    },
    #[error("vertex {0} has a self-loop")]
    SelfLoop(usize),
    #[error("vertex {vertex} lists {neighbor} more than once")]
    DuplicateNeighbor { vertex: usize, neighbor: usize },
    #[error("vertex {vertex} lists {neighbor} which is out of range")]
    NeighborOutOfRange { vertex: usize, neighbor: usize },
    #[error("vertex {vertex} lists {neighbor} but the matrix has no such edge")]
    ListMatrixMismatch { vertex: usize, neighbor: usize },
    #[error("weights of ({0}, {1}) and ({1}, {0}) differ")]
    WeightAsymmetry(usize, usize),
    #[error("weight cell ({0}, {1}) is set but there is no edge")]
    StaleWeight(usize, usize),
}

/// Verifies that all backing storages of the graph describe the same edge
/// set. It is _O(V²)_, intended for tests and fuzzing.
pub fn check_consistency(graph: &UndirectedGraph) -> Result<(), ConsistencyCheckError> {
    let order = graph.order();
    let matrix = graph.matrix();
    let lists = graph.lists();
    let weights = graph.weight_matrix();
    let degrees = graph.degrees();

    if [matrix.order(), lists.order(), weights.order(), degrees.len()]
        .iter()
        .any(|n| *n != order)
    {
        return Err(ConsistencyCheckError::OrderMismatch {
            graph: order,
            matrix: matrix.order(),
            lists: lists.order(),
            weights: weights.order(),
            degrees: degrees.len(),
        });
    }

    let cells = matrix.count();
    if cells != graph.size() {
        return Err(ConsistencyCheckError::MatrixEdgeCountMismatch(
            cells,
            graph.size(),
        ));
    }

    // https://en.wikipedia.org/wiki/Handshaking_lemma
    let deg_sum = degrees.iter().sum::<usize>();
    if deg_sum != 2 * graph.size() {
        return Err(ConsistencyCheckError::HandshakingLemma(
            deg_sum,
            2 * graph.size(),
        ));
    }

    let mut seen = FixedBitSet::with_capacity(order);

    for vertex in 0..order {
        let degree = degrees[vertex];
        let neighbors = lists.neighbors(vertex);

        if neighbors.len() != degree {
            return Err(ConsistencyCheckError::DegreeListMismatch {
                vertex,
                degree,
                len: neighbors.len(),
            });
        }

        let from_matrix = matrix.degree(vertex);
        if from_matrix != degree {
            return Err(ConsistencyCheckError::DegreeMatrixMismatch {
                vertex,
                degree,
                matrix: from_matrix,
            });
        }

        if matrix.contains(vertex, vertex) {
            return Err(ConsistencyCheckError::SelfLoop(vertex));
        }

        seen.clear();
        for &neighbor in neighbors {
            if neighbor >= order {
                return Err(ConsistencyCheckError::NeighborOutOfRange { vertex, neighbor });
            }

            if seen.put(neighbor) {
                return Err(ConsistencyCheckError::DuplicateNeighbor { vertex, neighbor });
            }

            if !matrix.contains(vertex, neighbor) {
                return Err(ConsistencyCheckError::ListMatrixMismatch { vertex, neighbor });
            }
        }
    }

    for u in 0..order {
        for v in 0..u {
            let weight = weights.get(u, v);

            if weight.to_bits() != weights.get(v, u).to_bits() {
                return Err(ConsistencyCheckError::WeightAsymmetry(u, v));
            }

            if !matrix.contains(u, v) && weight.to_bits() != 0f64.to_bits() {
                return Err(ConsistencyCheckError::StaleWeight(u, v));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factories_are_consistent() {
        for order in 0..6 {
            check_consistency(&create_complete(order, 0.5)).unwrap();
            check_consistency(&create_path(order)).unwrap();
        }
    }

    #[test]
    fn message() {
        assert_eq!(
            ConsistencyCheckError::DegreeListMismatch {
                vertex: 1,
                degree: 2,
                len: 3
            }
            .to_string(),
            "degree of vertex 1 (2) is not equal to its list length (3)"
        );
    }
}
