//! Depth-first reachability.
//!
//! Traversal uses an explicit `Vec` stack, so reachable depth is bounded by
//! heap memory rather than the call stack.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::graph::{Direction, Graph, NodeId};

use super::observer::{AlgorithmObserver, NoopObserver};

/// The set of nodes reached from a start node.
///
/// Iteration follows first-visit order, but callers should treat it as a set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reached {
    order: Vec<NodeId>,
    members: HashSet<NodeId>,
}

impl Reached {
    /// Inserts a node, returning `false` if it was already present.
    fn insert(&mut self, node: NodeId) -> bool {
        if self.members.insert(node) {
            self.order.push(node);
            true
        } else {
            false
        }
    }

    /// Returns true if `node` was reached.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.members.contains(&node)
    }

    /// Number of reached nodes (start included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always false for a completed run, since the start is reached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates reached nodes in first-visit order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.order.iter().copied()
    }

    /// Reached nodes in first-visit order.
    #[must_use]
    pub fn as_slice(&self) -> &[NodeId] {
        &self.order
    }

    /// Consumes the set, returning nodes in first-visit order.
    #[must_use]
    pub fn into_vec(self) -> Vec<NodeId> {
        self.order
    }
}

/// Returns every node reachable from `start` along edge directions,
/// `start` included.
///
/// # Errors
///
/// Returns `Error::UnknownNode` if `start` is not in the graph.
///
/// # Example
///
/// ```rust
/// use graphe_core::graph::{Edge, Graph};
/// use graphe_core::algo::reachable;
///
/// let graph = Graph::from_parts(
///     "g",
///     [1, 2, 3, 4],
///     [Edge::undirected(1, 2), Edge::undirected(3, 4)],
/// )
/// .unwrap();
///
/// let reached = reachable(&graph, 1).unwrap();
/// assert_eq!(reached.len(), 2);
/// assert!(reached.contains(2));
/// assert!(!reached.contains(3));
/// ```
pub fn reachable(graph: &Graph, start: NodeId) -> Result<Reached> {
    reachable_in(graph, start, Direction::Outgoing, &mut NoopObserver)
}

/// Same as [`reachable`], reporting each visit and each followed edge.
pub fn reachable_observed<O>(graph: &Graph, start: NodeId, observer: &mut O) -> Result<Reached>
where
    O: AlgorithmObserver + ?Sized,
{
    reachable_in(graph, start, Direction::Outgoing, observer)
}

/// Depth-first exploration from `start` following `direction`.
///
/// `Direction::Incoming` yields every node that can reach `start`;
/// `Direction::Both` yields the weakly connected component of `start`.
pub fn reachable_in<O>(
    graph: &Graph,
    start: NodeId,
    direction: Direction,
    observer: &mut O,
) -> Result<Reached>
where
    O: AlgorithmObserver + ?Sized,
{
    if !graph.has_node(start) {
        return Err(Error::UnknownNode(start));
    }

    let mut reached = Reached::default();
    let mut stack = vec![start];

    while let Some(node) = stack.pop() {
        // Revisits are no-ops; neighbors are pushed without a visited check.
        if !reached.insert(node) {
            continue;
        }
        observer.node_visited(node);

        let next = graph.hop(node, direction);
        for &neighbor in &next {
            observer.edge_traversed(node, neighbor);
        }
        // Reverse so the first neighbor is popped first.
        stack.extend(next.into_iter().rev());
    }

    tracing::trace!(
        graph = %graph.name(),
        start,
        ?direction,
        reached = reached.len(),
        "Reachability complete"
    );
    Ok(reached)
}
