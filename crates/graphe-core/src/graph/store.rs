//! In-memory graph store.
//!
//! Owns nodes and edges and keeps a per-node incidence index so that
//! neighbor and degree queries cost O(degree) rather than O(size).

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use rand::Rng;

use crate::error::{CapacityKind, Error, Result};

use super::types::{Color, Direction, Edge, EdgeKey, GraphSnapshot, Node, NodeId};

/// Structural size limits enforced by a [`Graph`].
///
/// The default is unbounded; [`crate::config::LimitsConfig`] produces
/// bounded limits from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphLimits {
    /// Maximum number of nodes.
    pub max_nodes: usize,
    /// Maximum number of edges.
    pub max_edges: usize,
}

impl Default for GraphLimits {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl GraphLimits {
    /// Limits that never trigger.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            max_nodes: usize::MAX,
            max_edges: usize::MAX,
        }
    }

    /// Creates limits with the given maxima.
    #[must_use]
    pub fn new(max_nodes: usize, max_edges: usize) -> Self {
        Self {
            max_nodes,
            max_edges,
        }
    }
}

/// A graph of nodes connected by directed and/or undirected edges.
///
/// Nodes and edges keep their insertion order so that every iteration, and
/// therefore every algorithm result, is deterministic.
///
/// # Example
///
/// ```rust
/// use graphe_core::graph::Graph;
///
/// let mut graph = Graph::new("main");
/// graph.add_node(1).unwrap();
/// graph.add_node(2).unwrap();
/// graph.add_node(3).unwrap();
/// graph.add_edge(1, 2, false).unwrap();
/// graph.add_edge(2, 3, true).unwrap();
///
/// assert_eq!(graph.order(), 3);
/// assert_eq!(graph.size(), 2);
/// assert_eq!(graph.neighbors(2).unwrap(), vec![1, 3]);
/// assert_eq!(graph.neighbors(3).unwrap(), Vec::<u64>::new());
/// ```
#[derive(Debug, Default)]
pub struct Graph {
    /// Graph identity.
    name: String,
    /// All nodes, in insertion order.
    nodes: IndexMap<NodeId, Node>,
    /// All edges, in insertion order.
    edges: Vec<Edge>,
    /// Uniqueness keys of stored edges.
    keys: HashSet<EdgeKey>,
    /// Incidence index: node_id -> edges touching it, in insertion order.
    incident: HashMap<NodeId, Vec<Edge>>,
    /// Size limits.
    limits: GraphLimits,
}

impl Graph {
    /// Creates an empty, unbounded graph.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self::with_limits(name, GraphLimits::unbounded())
    }

    /// Creates an empty graph enforcing `limits`.
    #[must_use]
    pub fn with_limits(name: &str, limits: GraphLimits) -> Self {
        Self {
            name: name.to_string(),
            limits,
            ..Self::default()
        }
    }

    /// Builds a graph from a node list and an edge list.
    ///
    /// # Errors
    ///
    /// Fails with the first structural error encountered (duplicate node,
    /// unknown endpoint, duplicate edge, self-loop).
    pub fn from_parts<N, E>(name: &str, nodes: N, edges: E) -> Result<Self>
    where
        N: IntoIterator<Item = NodeId>,
        E: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::new(name);
        graph.extend(nodes, edges)?;
        Ok(graph)
    }

    /// Rebuilds a graph from its serialized form.
    pub fn from_snapshot(snapshot: GraphSnapshot, limits: GraphLimits) -> Result<Self> {
        let mut graph = Self::with_limits(&snapshot.name, limits);
        graph.extend(snapshot.nodes, snapshot.edges)?;
        Ok(graph)
    }

    /// Parses a JSON snapshot.
    pub fn from_json(json: &str, limits: GraphLimits) -> Result<Self> {
        let snapshot: GraphSnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot, limits)
    }

    /// Returns the serializable form of this graph. Colors are not included.
    #[must_use]
    pub fn to_snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            name: self.name.clone(),
            nodes: self.node_ids(),
            edges: self.edges.clone(),
        }
    }

    /// Serializes this graph as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_snapshot())?)
    }

    fn extend<N, E>(&mut self, nodes: N, edges: E) -> Result<()>
    where
        N: IntoIterator<Item = NodeId>,
        E: IntoIterator<Item = Edge>,
    {
        for id in nodes {
            self.add_node(id)?;
        }
        for edge in edges {
            self.insert_edge(edge)?;
        }
        Ok(())
    }

    /// Returns the graph identity.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the enforced size limits.
    #[must_use]
    pub fn limits(&self) -> GraphLimits {
        self.limits
    }

    /// Returns an independent deep copy named `name`, with all colors cleared.
    #[must_use]
    pub fn clone_as(&self, name: &str) -> Self {
        let mut nodes = self.nodes.clone();
        for node in nodes.values_mut() {
            node.clear_color();
        }
        tracing::debug!(
            source = %self.name,
            clone = name,
            order = self.order(),
            size = self.size(),
            "Cloned graph"
        );
        Self {
            name: name.to_string(),
            nodes,
            edges: self.edges.clone(),
            keys: self.keys.clone(),
            incident: self.incident.clone(),
            limits: self.limits,
        }
    }

    // ── Node CRUD ──────────────────────────────────────────────────────

    /// Adds an uncolored node.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateNode` if the ID is taken, or
    /// `Error::CapacityExceeded` if the node limit is reached.
    pub fn add_node(&mut self, id: NodeId) -> Result<()> {
        if self.nodes.contains_key(&id) {
            return Err(Error::DuplicateNode(id));
        }
        if self.nodes.len() >= self.limits.max_nodes {
            return Err(Error::CapacityExceeded {
                kind: CapacityKind::Nodes,
                limit: self.limits.max_nodes,
            });
        }
        self.nodes.insert(id, Node::new(id));
        tracing::trace!(graph = %self.name, node = id, "Added node");
        Ok(())
    }

    /// Returns true if a node with the given ID exists.
    #[must_use]
    pub fn has_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Gets a node by ID.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Returns all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values()
    }

    /// Returns all node IDs in insertion order.
    #[must_use]
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.keys().copied().collect()
    }

    /// Removes a node and every edge touching it.
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        let node = self.nodes.shift_remove(&id)?;
        for edge in self.incident.remove(&id).unwrap_or_default() {
            self.unlink(&edge);
        }
        Some(node)
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Picks a node uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyGraph` if there are no nodes.
    pub fn random_node(&self) -> Result<NodeId> {
        self.random_node_with(&mut rand::thread_rng())
    }

    /// Picks a node uniformly at random using the supplied generator.
    pub fn random_node_with<R: Rng>(&self, rng: &mut R) -> Result<NodeId> {
        if self.nodes.is_empty() {
            return Err(Error::EmptyGraph);
        }
        let index = rng.gen_range(0..self.nodes.len());
        self.nodes
            .get_index(index)
            .map(|(id, _)| *id)
            .ok_or(Error::EmptyGraph)
    }

    // ── Edge CRUD ──────────────────────────────────────────────────────

    /// Adds an edge between two existing nodes.
    ///
    /// # Errors
    ///
    /// - `Error::UnknownNode` if either endpoint is missing
    /// - `Error::SelfLoop` if `source == target`
    /// - `Error::DuplicateEdge` if an identical edge exists (undirected edges
    ///   match regardless of endpoint order)
    /// - `Error::CapacityExceeded` if the edge limit is reached
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, directed: bool) -> Result<()> {
        self.insert_edge(Edge::new(source, target, directed))
    }

    /// Adds a prebuilt edge. Same rules as [`Graph::add_edge`].
    pub fn insert_edge(&mut self, edge: Edge) -> Result<()> {
        let (source, target) = (edge.source(), edge.target());
        for id in [source, target] {
            if !self.nodes.contains_key(&id) {
                return Err(Error::UnknownNode(id));
            }
        }
        if source == target {
            return Err(Error::SelfLoop(source));
        }
        let key = edge.key();
        if self.keys.contains(&key) {
            return Err(Error::DuplicateEdge {
                from: source,
                to: target,
                directed: edge.is_directed(),
            });
        }
        if self.edges.len() >= self.limits.max_edges {
            return Err(Error::CapacityExceeded {
                kind: CapacityKind::Edges,
                limit: self.limits.max_edges,
            });
        }

        self.keys.insert(key);
        self.incident.entry(source).or_default().push(edge);
        self.incident.entry(target).or_default().push(edge);
        self.edges.push(edge);
        tracing::trace!(graph = %self.name, edge = %edge, "Added edge");
        Ok(())
    }

    /// Returns true if the exact edge exists.
    #[must_use]
    pub fn has_edge(&self, source: NodeId, target: NodeId, directed: bool) -> bool {
        self.keys.contains(&Edge::new(source, target, directed).key())
    }

    /// Returns true if `target` is reachable from `source` in exactly one hop.
    #[must_use]
    pub fn has_arc(&self, source: NodeId, target: NodeId) -> bool {
        self.incident
            .get(&source)
            .is_some_and(|edges| edges.iter().any(|e| e.connects(source, target)))
    }

    /// Removes an edge, returning it if it existed.
    pub fn remove_edge(&mut self, source: NodeId, target: NodeId, directed: bool) -> Option<Edge> {
        let key = Edge::new(source, target, directed).key();
        let edge = *self.edges.iter().find(|e| e.key() == key)?;
        self.unlink(&edge);
        Some(edge)
    }

    /// Drops an edge from the edge list, the key set and both incidence lists.
    fn unlink(&mut self, edge: &Edge) {
        let key = edge.key();
        self.keys.remove(&key);
        self.edges.retain(|e| e.key() != key);
        for id in [edge.source(), edge.target()] {
            if let Some(list) = self.incident.get_mut(&id) {
                list.retain(|e| e.key() != key);
            }
        }
    }

    /// Returns all edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if at least one edge is directed.
    #[must_use]
    pub fn has_directed_edges(&self) -> bool {
        self.edges.iter().any(Edge::is_directed)
    }

    // ── Adjacency ──────────────────────────────────────────────────────

    /// Edges touching `id`; empty for unknown IDs.
    pub(crate) fn edges_of(&self, id: NodeId) -> &[Edge] {
        self.incident.get(&id).map_or(&[], Vec::as_slice)
    }

    fn incident_edges(&self, id: NodeId) -> Result<&[Edge]> {
        if !self.nodes.contains_key(&id) {
            return Err(Error::UnknownNode(id));
        }
        Ok(self.edges_of(id))
    }

    /// One-hop moves from a node already known to exist.
    pub(crate) fn hop(&self, id: NodeId, direction: Direction) -> Vec<NodeId> {
        let edges = self.edges_of(id).iter();
        match direction {
            Direction::Outgoing => dedup(edges.filter_map(|e| e.head_from(id))),
            Direction::Incoming => dedup(edges.filter_map(|e| e.tail_to(id))),
            Direction::Both => dedup(edges.map(|e| {
                if e.source() == id {
                    e.target()
                } else {
                    e.source()
                }
            })),
        }
    }

    /// Returns the nodes one hop away from `id` in the given direction.
    ///
    /// Each node appears once, in edge insertion order.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownNode` if the node does not exist.
    pub fn walk(&self, id: NodeId, direction: Direction) -> Result<Vec<NodeId>> {
        self.incident_edges(id)?;
        Ok(self.hop(id, direction))
    }

    /// Returns the one-hop successors of a node, respecting directedness.
    pub fn neighbors(&self, id: NodeId) -> Result<Vec<NodeId>> {
        self.walk(id, Direction::Outgoing)
    }

    /// Same as [`Graph::neighbors`], resolved to node records.
    pub fn neighbor_nodes(&self, id: NodeId) -> Result<Vec<&Node>> {
        Ok(self
            .neighbors(id)?
            .into_iter()
            .filter_map(|n| self.nodes.get(&n))
            .collect())
    }

    /// Returns the nodes with a one-hop edge into `id`.
    pub fn predecessors(&self, id: NodeId) -> Result<Vec<NodeId>> {
        self.walk(id, Direction::Incoming)
    }

    /// Returns every node sharing an edge with `id`, ignoring direction.
    pub fn adjacent(&self, id: NodeId) -> Result<Vec<NodeId>> {
        self.walk(id, Direction::Both)
    }

    /// Returns the number of edges touching a node.
    ///
    /// Every edge counts once per endpoint, whatever its direction.
    pub fn degree(&self, id: NodeId) -> Result<usize> {
        Ok(self.incident_edges(id)?.len())
    }

    /// Returns the largest degree in the graph, or 0 when empty.
    #[must_use]
    pub fn max_degree(&self) -> usize {
        self.nodes
            .keys()
            .map(|id| self.edges_of(*id).len())
            .max()
            .unwrap_or(0)
    }

    // ── Colors ─────────────────────────────────────────────────────────

    /// Assigns a color to a node.
    pub fn set_color(&mut self, id: NodeId, color: Color) -> Result<()> {
        let node = self.nodes.get_mut(&id).ok_or(Error::UnknownNode(id))?;
        node.set_color(color);
        Ok(())
    }

    /// Returns the color currently stored on a node.
    pub fn color_of(&self, id: NodeId) -> Result<Option<Color>> {
        self.nodes
            .get(&id)
            .map(Node::color)
            .ok_or(Error::UnknownNode(id))
    }

    /// Clears every node color. Structure is untouched.
    pub fn reset_colors(&mut self) {
        for node in self.nodes.values_mut() {
            node.clear_color();
        }
    }

    /// Removes every node and edge. Name and limits are kept.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.keys.clear();
        self.incident.clear();
    }
}

fn dedup(ids: impl Iterator<Item = NodeId>) -> Vec<NodeId> {
    let mut seen = HashSet::new();
    ids.filter(|id| seen.insert(*id)).collect()
}
