//! Building blocks shared by the graph, its storages and the loader.

pub mod error;
pub mod facts;
pub mod matrix;

pub use error::{GraphError, VertexCountErrorKind};
