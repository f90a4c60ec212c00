//! Backing structures of [`UndirectedGraph`](crate::graph::UndirectedGraph).
//!
//! The graph keeps the same edge set in several representations, each
//! serving a different kind of query:
//!
//! * [Adjacency matrix](adj_matrix) answers "are `u` and `v` adjacent?".
//! * [Adjacency list](adj_list) enumerates the neighbors of a vertex.
//! * [Weight matrix](weights) stores the weight of an edge.
//!
//! |                  | **[AdjMatrix]** | **[AdjList]** | **[WeightMatrix]** |
//! |------------------|-----------------|---------------|--------------------|
//! | insert edge      | _O(1)_          | _O*(1)_       | _O(1)_             |
//! | lookup edge      | _O(1)_          | _O(d)_        | -                  |
//! | get neighbors    | _O(V)_          | _O(d)_        | -                  |
//! | space            | _O(V²/2)_ bits  | _O(V + E)_    | _O(V²)_            |
//!
//! * _V_ – vertex count
//! * _E_ – edge count
//! * _d_ – vertex degree
//! * _O*(..)_ – amortized complexity
//!
//! The storages do not validate vertex indices; that is the responsibility of
//! the graph which owns them. Out-of-range indices panic.

pub mod adj_list;
pub mod adj_matrix;
pub mod weights;

#[doc(inline)]
pub use self::{adj_list::AdjList, adj_matrix::AdjMatrix, weights::WeightMatrix};
