use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum GraphError {
    #[error("invalid vertex count: {0}")]
    InvalidVertexCount(VertexCountErrorKind),
    #[error("vertex {vertex} is out of range for a graph of order {order}")]
    VertexOutOfRange { vertex: usize, order: usize },
}

impl GraphError {
    pub fn out_of_range(vertex: usize, order: usize) -> Self {
        GraphError::VertexOutOfRange { vertex, order }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexCountErrorKind {
    Negative,
    CapacityOverflow,
}

impl fmt::Display for VertexCountErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            VertexCountErrorKind::Negative => "the count is negative",
            VertexCountErrorKind::CapacityOverflow => {
                "the graph storage for this count exceeds the address space"
            }
        };
        f.write_str(reason)
    }
}
