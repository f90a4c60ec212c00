//! Undirected graph over vertices `0..n` with edge weights.
//!
//! The [`UndirectedGraph`](graph::UndirectedGraph) keeps a fixed vertex set
//! and an insert-only set of simple edges (no self-loops, no parallel
//! edges). Adjacency tests take constant time, neighbor enumeration is
//! proportional to the degree.
//!
//! Graphs are either built in code or [loaded](load) from a whitespace
//! delimited text format, and can be [exported](infra::export) back to it.
//!
//! ```
//! use ugraph::prelude::*;
//!
//! let graph: UndirectedGraph = "4 0 1 1 2 2 3".parse().unwrap();
//!
//! assert_eq!(graph.order(), 4);
//! assert_eq!(graph.size(), 3);
//! assert_eq!(graph.is_connected(2, 1), Ok(true));
//! assert_eq!(
//!     graph.degree(4),
//!     Err(GraphError::VertexOutOfRange { vertex: 4, order: 4 })
//! );
//! ```
//!
//! The graph is a plain owned value without interior mutability. Sharing it
//! between threads for mutation requires a single lock around the whole
//! graph, e.g. `Mutex<UndirectedGraph>`.

pub mod core;
pub mod graph;
pub mod infra;
pub mod load;
pub mod storage;

pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{
        core::GraphError,
        graph::UndirectedGraph,
        load::{Format, LoadConfig, LoadError, Loader},
    };
}
