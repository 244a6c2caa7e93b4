//! Error types for graph algorithms
//!
//! Read paths of the graph never fail: absence is reported as `false`, `None` or an empty
//! collection. Errors are only raised by algorithms whose arguments or preconditions are
//! violated, and by structural failures that make a result meaningless.

use std::fmt::Debug;

use thiserror::Error;

/// Result type for graph algorithms
pub type GraphResult<T> = Result<T, GraphError>;

/// Coarse classification of a [`GraphError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument handed to the algorithm is unusable
    InvalidArgument,
    /// The algorithm was invoked on a graph it is not defined for
    Logic,
    /// The graph's structure prevents a meaningful result
    Structural,
}

/// Errors that can occur while running graph algorithms
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraphError {
    /// A node passed as argument does not exist
    #[error("{role} node {id} does not exist")]
    NodeNotFound {
        /// Which argument referred to the node (e.g. "start", "source")
        role: &'static str,
        /// Debug rendering of the missing identifier
        id: String,
    },

    /// A capacity extractor produced a negative value
    #[error("negative capacity on edge {from} -> {to}")]
    NegativeCapacity {
        /// Debug rendering of the tail
        from: String,
        /// Debug rendering of the head
        to: String,
    },

    /// Source and sink of a flow computation coincide
    #[error("source and sink must be distinct nodes (both are {id})")]
    SourceIsSink {
        /// Debug rendering of the identifier
        id: String,
    },

    /// The operation is only defined on directed graphs
    #[error("{operation} requires a directed graph")]
    RequiresDirected {
        /// Name of the rejected operation
        operation: &'static str,
    },

    /// The graph has at least one cycle
    #[error("graph has at least one cycle")]
    CycleDetected,
}

impl GraphError {
    /// Creates a node not found error
    pub fn node_not_found<Id: Debug>(role: &'static str, id: &Id) -> Self {
        Self::NodeNotFound {
            role,
            id: format!("{id:?}"),
        }
    }

    /// Creates a negative capacity error
    pub fn negative_capacity<Id: Debug>(from: &Id, to: &Id) -> Self {
        Self::NegativeCapacity {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    /// Creates a source-is-sink error
    pub fn source_is_sink<Id: Debug>(id: &Id) -> Self {
        Self::SourceIsSink {
            id: format!("{id:?}"),
        }
    }

    /// Creates a requires-directed error
    pub fn requires_directed(operation: &'static str) -> Self {
        Self::RequiresDirected { operation }
    }

    /// Returns the class of failure this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NodeNotFound { .. } | Self::NegativeCapacity { .. } | Self::SourceIsSink { .. } => {
                ErrorKind::InvalidArgument
            }
            Self::RequiresDirected { .. } => ErrorKind::Logic,
            Self::CycleDetected => ErrorKind::Structural,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages_and_kinds() {
        let err = GraphError::node_not_found("start", &42u32);
        assert_eq!(err.to_string(), "start node 42 does not exist");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = GraphError::negative_capacity(&"a", &"b");
        assert_eq!(err.to_string(), "negative capacity on edge \"a\" -> \"b\"");

        let err = GraphError::requires_directed("topological sort");
        assert_eq!(err.to_string(), "topological sort requires a directed graph");
        assert_eq!(err.kind(), ErrorKind::Logic);

        assert_eq!(GraphError::CycleDetected.kind(), ErrorKind::Structural);
    }
}
