//! Error types for graphe-core.

use thiserror::Error;

/// Which structural collection a capacity limit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityKind {
    /// Node count limit.
    Nodes,
    /// Edge count limit.
    Edges,
}

impl std::fmt::Display for CapacityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nodes => f.write_str("nodes"),
            Self::Edges => f.write_str("edges"),
        }
    }
}

/// Graph engine error types.
#[derive(Error, Debug)]
pub enum Error {
    /// An operation referenced a node that is not in the graph.
    #[error("Unknown node: {0}")]
    UnknownNode(u64),

    /// A node with the same ID already exists.
    #[error("Node {0} already exists")]
    DuplicateNode(u64),

    /// An identical edge already exists.
    #[error("Edge {from} -> {to} (directed: {directed}) already exists")]
    DuplicateEdge {
        /// Source node ID.
        from: u64,
        /// Target node ID.
        to: u64,
        /// Directedness of the rejected edge.
        directed: bool,
    },

    /// Edges must connect two distinct nodes.
    #[error("Self-loop on node {0} is not allowed")]
    SelfLoop(u64),

    /// The operation needs at least one node.
    #[error("Graph is empty")]
    EmptyGraph,

    /// A distance computation was requested without a start node.
    #[error("No start node selected")]
    NoStartNodeSelected,

    /// A configured size limit would be exceeded.
    #[error("Capacity exceeded: graph limited to {limit} {kind}")]
    CapacityExceeded {
        /// Which limit was hit.
        kind: CapacityKind,
        /// The configured maximum.
        limit: usize,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(Error::UnknownNode(7).to_string(), "Unknown node: 7");
        assert_eq!(
            Error::DuplicateEdge {
                from: 1,
                to: 2,
                directed: true
            }
            .to_string(),
            "Edge 1 -> 2 (directed: true) already exists"
        );
        assert_eq!(
            Error::CapacityExceeded {
                kind: CapacityKind::Nodes,
                limit: 10
            }
            .to_string(),
            "Capacity exceeded: graph limited to 10 nodes"
        );
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u64>("not a number").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
