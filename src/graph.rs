//! The undirected graph over vertices `0..n`.
//!
//! [`UndirectedGraph`] has a fixed number of vertices (its _order_) chosen at
//! construction and an insert-only edge set. Each edge is kept in all backing
//! [storages](crate::storage) at once: the lower-triangle adjacency matrix for
//! constant-time adjacency tests, the adjacency lists for neighbor
//! enumeration and the mirrored weight matrix.
//!
//! # Examples
//!
//! ```
//! use ugraph::graph::UndirectedGraph;
//!
//! let mut graph = UndirectedGraph::new(4);
//!
//! graph.add_edge(0, 1);
//! graph.add_edge_weighted(2, 1, 0.5);
//!
//! // Repeated and self-loop insertions are ignored.
//! assert!(!graph.add_edge(1, 0));
//! assert!(!graph.add_edge(3, 3));
//!
//! assert_eq!(graph.size(), 2);
//! assert_eq!(graph.degree(1), Ok(2));
//! assert_eq!(graph.neighbors(1), Ok(&[0, 2][..]));
//! assert_eq!(graph.weight(1, 2), Ok(Some(0.5)));
//! assert_eq!(graph.weight(0, 3), Ok(None));
//! ```

use std::{ops::Range, str::FromStr};

use tracing::trace;

use crate::{
    core::{facts, GraphError, VertexCountErrorKind},
    load::{LoadError, Loader},
    storage::{AdjList, AdjMatrix, WeightMatrix},
};

/// Weight of edges added without an explicit weight.
pub const DEFAULT_WEIGHT: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct UndirectedGraph {
    order: usize,
    size: usize,
    matrix: AdjMatrix,
    lists: AdjList,
    weights: WeightMatrix,
    degrees: Vec<usize>,
}

impl UndirectedGraph {
    /// Creates a graph with `order` vertices and no edges.
    ///
    /// # Panics
    ///
    /// Panics if the storage for `order` vertices cannot be addressed. Use
    /// [`try_new`](Self::try_new) for the fallible version.
    pub fn new(order: usize) -> Self {
        match Self::try_new(order) {
            Ok(graph) => graph,
            Err(error) => panic!("{error}"),
        }
    }

    /// Creates a graph with `order` vertices and no edges, or returns
    /// [`InvalidVertexCount`](GraphError::InvalidVertexCount) if the storage
    /// cannot be addressed or allocated.
    pub fn try_new(order: usize) -> Result<Self, GraphError> {
        let overflow = || GraphError::InvalidVertexCount(VertexCountErrorKind::CapacityOverflow);

        // The weight matrix is the largest storage.
        let weights = WeightMatrix::with_order(order).ok_or_else(overflow)?;
        let matrix = AdjMatrix::with_order(order).ok_or_else(overflow)?;

        Ok(Self {
            order,
            size: 0,
            matrix,
            lists: AdjList::with_order(order),
            weights,
            degrees: vec![0; order],
        })
    }

    /// Creates an empty graph from a signed vertex count, rejecting negative
    /// counts.
    pub fn try_from_count(count: i64) -> Result<Self, GraphError> {
        let order = usize::try_from(count).map_err(|_| {
            if count < 0 {
                GraphError::InvalidVertexCount(VertexCountErrorKind::Negative)
            } else {
                GraphError::InvalidVertexCount(VertexCountErrorKind::CapacityOverflow)
            }
        })?;

        Self::try_new(order)
    }

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of edges.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The largest size the graph can reach, i.e., the size of the complete
    /// graph of the same order.
    pub fn max_size(&self) -> usize {
        facts::complete_graph_edge_count(self.order)
    }

    pub fn vertices(&self) -> Range<usize> {
        0..self.order
    }

    pub fn contains_vertex(&self, v: usize) -> bool {
        v < self.order
    }

    /// Adds an edge of [default weight](DEFAULT_WEIGHT) and returns whether
    /// the edge set changed.
    ///
    /// # Panics
    ///
    /// Panics if any of the vertices is out of range.
    pub fn add_edge(&mut self, u: usize, v: usize) -> bool {
        self.add_edge_weighted(u, v, DEFAULT_WEIGHT)
    }

    /// # Panics
    ///
    /// Panics if any of the vertices is out of range.
    pub fn add_edge_weighted(&mut self, u: usize, v: usize, weight: f64) -> bool {
        match self.try_add_edge_weighted(u, v, weight) {
            Ok(added) => added,
            Err(error) => panic!("{error}"),
        }
    }

    pub fn try_add_edge(&mut self, u: usize, v: usize) -> Result<bool, GraphError> {
        self.try_add_edge_weighted(u, v, DEFAULT_WEIGHT)
    }

    /// Adds the edge `{u, v}` with given weight.
    ///
    /// Returns `Ok(false)` without touching the graph if `u == v` or if the
    /// edge already exists. The weight of an existing edge is never
    /// overwritten.
    pub fn try_add_edge_weighted(
        &mut self,
        u: usize,
        v: usize,
        weight: f64,
    ) -> Result<bool, GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        if u == v {
            trace!(vertex = u, "self-loop ignored");
            return Ok(false);
        }

        if !self.matrix.insert(u, v) {
            trace!(u, v, "edge already present");
            return Ok(false);
        }

        self.weights.set(u, v, weight);
        self.lists.push(u, v);
        self.degrees[u] += 1;
        self.degrees[v] += 1;
        self.size += 1;

        Ok(true)
    }

    pub fn degree(&self, v: usize) -> Result<usize, GraphError> {
        self.check_vertex(v)?;
        Ok(self.degrees[v])
    }

    pub fn is_connected(&self, u: usize, v: usize) -> Result<bool, GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.matrix.contains(u, v))
    }

    /// Returns the weight of edge `{u, v}` or `None` if the vertices are not
    /// adjacent.
    pub fn weight(&self, u: usize, v: usize) -> Result<Option<f64>, GraphError> {
        let weight = self
            .is_connected(u, v)?
            .then(|| self.weights.get(u, v));

        Ok(weight)
    }

    /// Neighbors of the vertex in the order the edges were added.
    pub fn neighbors(&self, v: usize) -> Result<&[usize], GraphError> {
        self.check_vertex(v)?;
        Ok(self.lists.neighbors(v))
    }

    /// Iterates over all edges as `(u, v, weight)` with `u > v`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.matrix
            .iter()
            .map(|(u, v)| (u, v, self.weights.get(u, v)))
    }

    /// Removes all edges. The order of the graph is preserved.
    pub fn clear(&mut self) {
        self.matrix.clear();
        self.lists.clear();
        self.weights.clear();
        self.degrees.fill(0);
        self.size = 0;
    }

    fn check_vertex(&self, v: usize) -> Result<(), GraphError> {
        if self.contains_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::out_of_range(v, self.order))
        }
    }

    pub(crate) fn matrix(&self) -> &AdjMatrix {
        &self.matrix
    }

    pub(crate) fn lists(&self) -> &AdjList {
        &self.lists
    }

    pub(crate) fn weight_matrix(&self) -> &WeightMatrix {
        &self.weights
    }

    pub(crate) fn degrees(&self) -> &[usize] {
        &self.degrees
    }
}

impl Default for UndirectedGraph {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Two graphs are equal if they have the same order and the same edges with
/// the same weights. The order of neighbors in adjacency lists is not
/// considered.
impl PartialEq for UndirectedGraph {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
            && self.size == other.size
            && self
                .edges()
                .all(|(u, v, weight)| other.weight(u, v) == Ok(Some(weight)))
    }
}

impl FromStr for UndirectedGraph {
    type Err = LoadError;

    /// Parses the unweighted text format.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Loader::unweighted().load_str(s)
    }
}
