//! Graph-specific error types.

use sv_core::{NodeId, SvError};

/// Document ingestion and lookup errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The document holds more nodes than a `NodeId` can address.
    TooManyNodes { count: usize },

    /// A node ID does not belong to this graph.
    NodeNotFound { node: NodeId },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::TooManyNodes { count } => {
                write!(f, "Document has too many nodes to index ({} so far)", count)
            }
            GraphError::NodeNotFound { node } => {
                write!(f, "Node {} is not part of this document graph", node)
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for SvError {
    fn from(err: GraphError) -> Self {
        SvError::Invariant {
            what: err.to_string(),
        }
    }
}
