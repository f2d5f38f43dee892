//! Node, edge and color types for the in-memory graph store.

use serde::{Deserialize, Serialize};

/// Identifier of a node. Unique within a graph.
pub type NodeId = u64;

/// Which edges a one-hop move may follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Along directed edges from source to target, and along undirected edges.
    #[default]
    Outgoing,
    /// Against directed edges, and along undirected edges.
    Incoming,
    /// Along any edge, ignoring direction.
    Both,
}

/// An opaque color class token produced by greedy coloring.
///
/// Tokens are sequential, starting at `Color(0)` for the first class. Any
/// visual mapping (hex palette, CSS class) belongs to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    /// Returns the class index of this color.
    #[must_use]
    pub fn index(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// A node in the graph.
///
/// Degree is not stored on the node; it is derived from the edge list by
/// [`Graph::degree`](super::Graph::degree).
///
/// # Example
///
/// ```rust
/// use graphe_core::graph::{Color, Node};
///
/// let mut node = Node::new(1);
/// assert_eq!(node.id(), 1);
/// assert_eq!(node.color(), None);
///
/// node.set_color(Color(2));
/// assert_eq!(node.color(), Some(Color(2)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<Color>,
}

impl Node {
    /// Creates an uncolored node.
    #[must_use]
    pub fn new(id: NodeId) -> Self {
        Self { id, color: None }
    }

    /// Returns the node ID.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the assigned color, if any.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Assigns a color to this node.
    pub fn set_color(&mut self, color: Color) {
        self.color = Some(color);
    }

    /// Removes any assigned color.
    pub fn clear_color(&mut self) {
        self.color = None;
    }
}

/// An edge between two nodes.
///
/// A directed edge is traversable from `source` to `target` only. An
/// undirected edge is stored once but traversable both ways.
///
/// # Example
///
/// ```rust
/// use graphe_core::graph::Edge;
///
/// let edge = Edge::undirected(2, 1);
/// assert!(edge.connects(1, 2));
/// assert!(edge.connects(2, 1));
///
/// let arc = Edge::directed(1, 2);
/// assert!(arc.connects(1, 2));
/// assert!(!arc.connects(2, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
    #[serde(default)]
    directed: bool,
}

impl Edge {
    /// Creates an edge with explicit directedness.
    #[must_use]
    pub fn new(source: NodeId, target: NodeId, directed: bool) -> Self {
        Self {
            source,
            target,
            directed,
        }
    }

    /// Creates a directed edge `source -> target`.
    #[must_use]
    pub fn directed(source: NodeId, target: NodeId) -> Self {
        Self::new(source, target, true)
    }

    /// Creates an undirected edge `source -- target`.
    #[must_use]
    pub fn undirected(source: NodeId, target: NodeId) -> Self {
        Self::new(source, target, false)
    }

    /// Returns the source node ID.
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Returns the target node ID.
    #[must_use]
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Returns true if the edge is directed.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns true if `node` is one of the endpoints.
    #[must_use]
    pub fn touches(&self, node: NodeId) -> bool {
        self.source == node || self.target == node
    }

    /// Returns true if this edge can be traversed from `from` to `to` in one hop.
    #[must_use]
    pub fn connects(&self, from: NodeId, to: NodeId) -> bool {
        (self.source == from && self.target == to)
            || (!self.directed && self.source == to && self.target == from)
    }

    /// Returns the endpoint reached when leaving `from` along this edge.
    ///
    /// `None` if the edge does not start at `from` (respecting direction).
    #[must_use]
    pub fn head_from(&self, from: NodeId) -> Option<NodeId> {
        if self.source == from {
            Some(self.target)
        } else if !self.directed && self.target == from {
            Some(self.source)
        } else {
            None
        }
    }

    /// Returns the endpoint that reaches `to` along this edge.
    #[must_use]
    pub fn tail_to(&self, to: NodeId) -> Option<NodeId> {
        if self.target == to {
            Some(self.source)
        } else if !self.directed && self.source == to {
            Some(self.target)
        } else {
            None
        }
    }

    /// Uniqueness key: ordered pair for directed edges, sorted pair otherwise.
    pub(crate) fn key(&self) -> EdgeKey {
        if self.directed {
            EdgeKey {
                a: self.source,
                b: self.target,
                directed: true,
            }
        } else {
            EdgeKey {
                a: self.source.min(self.target),
                b: self.source.max(self.target),
                directed: false,
            }
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arrow = if self.directed { "->" } else { "--" };
        write!(f, "{} {} {}", self.source, arrow, self.target)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct EdgeKey {
    a: NodeId,
    b: NodeId,
    directed: bool,
}

/// Serializable form of a [`Graph`](super::Graph).
///
/// This is the JSON shape used for import/export:
///
/// ```json
/// { "name": "main", "nodes": [1, 2], "edges": [{ "source": 1, "target": 2, "directed": false }] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Graph identity.
    #[serde(default)]
    pub name: String,
    /// Node IDs in insertion order.
    pub nodes: Vec<NodeId>,
    /// Edges in insertion order.
    #[serde(default)]
    pub edges: Vec<Edge>,
}
