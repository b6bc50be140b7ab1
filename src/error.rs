use thiserror::Error;

/// Errors raised while building or querying a [`Graph`](crate::graph::Graph).
///
/// All validation happens eagerly at the offending call; the MST builders
/// assume a well-formed graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A nonsensical argument, such as a negative vertex count.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A vertex index outside `0..vertex_count`.
    #[error("vertex {vertex} out of range for graph with {vertex_count} vertices")]
    OutOfRange { vertex: usize, vertex_count: usize },

    /// A negative edge weight.
    #[error("invalid weight: {0}")]
    InvalidWeight(String),
}

impl GraphError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        GraphError::InvalidArgument(msg.into())
    }

    pub fn invalid_weight(msg: impl Into<String>) -> Self {
        GraphError::InvalidWeight(msg.into())
    }

    pub fn out_of_range(vertex: usize, vertex_count: usize) -> Self {
        GraphError::OutOfRange {
            vertex,
            vertex_count,
        }
    }
}

pub type Error = GraphError;
pub type Result<T> = std::result::Result<T, GraphError>;
