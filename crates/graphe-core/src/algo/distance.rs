//! Breadth-first hop distances.
//!
//! [`compute_distances`] runs to completion. [`DistanceRun`] exposes the same
//! traversal one dequeued node at a time, so a caller can render the frontier
//! between steps.

use std::collections::{HashSet, VecDeque};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::{Direction, Graph, NodeId};

use super::observer::{AlgorithmObserver, NoopObserver};

/// Hop distance from the start node.
///
/// Serialized as an integer, or `null` when unreachable. `Finite` values sort
/// before `Unreachable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Option<usize>", into = "Option<usize>")]
pub enum Distance {
    /// Minimum number of edge hops.
    Finite(usize),
    /// No path from the start node.
    Unreachable,
}

impl Distance {
    /// Returns the hop count, or `None` if unreachable.
    #[must_use]
    pub fn hops(self) -> Option<usize> {
        match self {
            Self::Finite(h) => Some(h),
            Self::Unreachable => None,
        }
    }

    /// Returns true for a finite distance.
    #[must_use]
    pub fn is_reachable(self) -> bool {
        matches!(self, Self::Finite(_))
    }
}

impl From<Option<usize>> for Distance {
    fn from(value: Option<usize>) -> Self {
        value.map_or(Self::Unreachable, Self::Finite)
    }
}

impl From<Distance> for Option<usize> {
    fn from(value: Distance) -> Self {
        value.hops()
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite(h) => write!(f, "{h}"),
            Self::Unreachable => f.write_str("∞"),
        }
    }
}

/// Distances from one start node to every node of a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Distances {
    start: NodeId,
    distances: IndexMap<NodeId, Distance>,
}

impl Distances {
    fn unreachable_from(graph: &Graph, start: NodeId) -> Self {
        Self {
            start,
            distances: graph
                .nodes()
                .map(|n| (n.id(), Distance::Unreachable))
                .collect(),
        }
    }

    fn set(&mut self, node: NodeId, distance: Distance) {
        self.distances.insert(node, distance);
    }

    /// The start node.
    #[must_use]
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Distance of `node`, or `None` if the node is not in the graph.
    #[must_use]
    pub fn get(&self, node: NodeId) -> Option<Distance> {
        self.distances.get(&node).copied()
    }

    /// Iterates `(node, distance)` in graph insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Distance)> + '_ {
        self.distances.iter().map(|(id, d)| (*id, *d))
    }

    /// Number of nodes with a finite distance (start included).
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_reachable()).count()
    }

    /// Largest finite distance (the eccentricity of the start node).
    #[must_use]
    pub fn max_hops(&self) -> usize {
        self.distances
            .values()
            .filter_map(|d| d.hops())
            .max()
            .unwrap_or(0)
    }

    /// Number of nodes covered (the graph order).
    #[must_use]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// True for an empty mapping.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

/// One dequeued node of a breadth-first run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierStep {
    /// The node taken from the front of the queue.
    pub node: NodeId,
    /// Its distance from the start.
    pub hops: usize,
    /// Neighbors seen for the first time, now at `hops + 1`.
    pub discovered: Vec<NodeId>,
}

/// A breadth-first distance computation that can be advanced step by step.
///
/// # Example
///
/// ```rust
/// use graphe_core::graph::{Edge, Graph};
/// use graphe_core::algo::{Distance, DistanceRun};
///
/// let graph = Graph::from_parts(
///     "path",
///     [1, 2, 3],
///     [Edge::undirected(1, 2), Edge::undirected(2, 3)],
/// )
/// .unwrap();
///
/// let mut run = DistanceRun::new(&graph, 1).unwrap();
/// let step = run.step().unwrap();
/// assert_eq!(step.node, 1);
/// assert_eq!(step.discovered, vec![2]);
/// assert_eq!(run.distances().get(3), Some(Distance::Unreachable));
///
/// let distances = run.finish();
/// assert_eq!(distances.get(3), Some(Distance::Finite(2)));
/// ```
#[derive(Debug)]
pub struct DistanceRun<'g> {
    graph: &'g Graph,
    distances: Distances,
    visited: HashSet<NodeId>,
    queue: VecDeque<(NodeId, usize)>,
}

impl<'g> DistanceRun<'g> {
    /// Starts a run at `start`.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownNode` if `start` is not in the graph.
    pub fn new(graph: &'g Graph, start: NodeId) -> Result<Self> {
        Self::new_observed(graph, start, &mut NoopObserver)
    }

    /// Same as [`DistanceRun::new`], reporting the start node.
    pub fn new_observed<O>(graph: &'g Graph, start: NodeId, observer: &mut O) -> Result<Self>
    where
        O: AlgorithmObserver + ?Sized,
    {
        if !graph.has_node(start) {
            return Err(Error::UnknownNode(start));
        }

        let mut distances = Distances::unreachable_from(graph, start);
        distances.set(start, Distance::Finite(0));
        observer.node_visited(start);
        observer.distance_updated(start, Distance::Finite(0));

        let mut visited = HashSet::with_capacity(graph.order());
        visited.insert(start);
        let mut queue = VecDeque::new();
        queue.push_back((start, 0));

        Ok(Self {
            graph,
            distances,
            visited,
            queue,
        })
    }

    /// Dequeues one node and records its undiscovered neighbors.
    ///
    /// Returns `None` once the frontier is empty.
    pub fn step(&mut self) -> Option<FrontierStep> {
        self.step_observed(&mut NoopObserver)
    }

    /// Same as [`DistanceRun::step`], reporting every discovery.
    pub fn step_observed<O>(&mut self, observer: &mut O) -> Option<FrontierStep>
    where
        O: AlgorithmObserver + ?Sized,
    {
        let (node, hops) = self.queue.pop_front()?;
        let mut discovered = Vec::new();

        for neighbor in self.graph.hop(node, Direction::Outgoing) {
            if !self.visited.insert(neighbor) {
                continue;
            }
            let distance = Distance::Finite(hops + 1);
            observer.edge_traversed(node, neighbor);
            observer.node_visited(neighbor);
            observer.distance_updated(neighbor, distance);
            self.distances.set(neighbor, distance);
            self.queue.push_back((neighbor, hops + 1));
            discovered.push(neighbor);
        }

        tracing::trace!(node, hops, discovered = discovered.len(), "BFS step");
        Some(FrontierStep {
            node,
            hops,
            discovered,
        })
    }

    /// Nodes waiting in the queue, front first.
    pub fn frontier(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.queue.iter().map(|(id, _)| *id)
    }

    /// Distances computed so far. Undiscovered nodes are `Unreachable`.
    #[must_use]
    pub fn distances(&self) -> &Distances {
        &self.distances
    }

    /// True once no node is left to dequeue.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.queue.is_empty()
    }

    /// Runs the remaining steps and returns the final distances.
    #[must_use]
    pub fn finish(self) -> Distances {
        self.finish_observed(&mut NoopObserver)
    }

    /// Same as [`DistanceRun::finish`], reporting every discovery.
    pub fn finish_observed<O>(mut self, observer: &mut O) -> Distances
    where
        O: AlgorithmObserver + ?Sized,
    {
        while self.step_observed(observer).is_some() {}
        self.distances
    }
}

impl Iterator for DistanceRun<'_> {
    type Item = FrontierStep;

    fn next(&mut self) -> Option<Self::Item> {
        self.step()
    }
}

/// Computes the hop distance from `start` to every node.
///
/// Nodes without a path from `start` are `Distance::Unreachable`.
///
/// # Errors
///
/// Returns `Error::UnknownNode` if `start` is not in the graph.
pub fn compute_distances(graph: &Graph, start: NodeId) -> Result<Distances> {
    compute_distances_observed(graph, start, &mut NoopObserver)
}

/// Same as [`compute_distances`], but the start may not have been chosen yet.
///
/// # Errors
///
/// Returns `Error::NoStartNodeSelected` if `start` is `None`.
pub fn compute_distances_from(graph: &Graph, start: Option<NodeId>) -> Result<Distances> {
    let start = start.ok_or(Error::NoStartNodeSelected)?;
    compute_distances(graph, start)
}

/// Same as [`compute_distances`], reporting progress to `observer`.
pub fn compute_distances_observed<O>(
    graph: &Graph,
    start: NodeId,
    observer: &mut O,
) -> Result<Distances>
where
    O: AlgorithmObserver + ?Sized,
{
    let run = DistanceRun::new_observed(graph, start, observer)?;
    let distances = run.finish_observed(observer);
    tracing::debug!(
        graph = %graph.name(),
        start,
        reachable = distances.reachable_count(),
        order = graph.order(),
        "Distance computation complete"
    );
    Ok(distances)
}
