//! Connectivity and tree tests built on [`reachable_in`].
//!
//! A graph with directed edges is only called connected when it is strongly
//! connected: every node reaches the probe node and the probe node reaches
//! every node. On undirected graphs both directions coincide, so a single
//! depth-first pass decides.

use rand::Rng;

use crate::graph::{Direction, Graph, NodeId};

use super::observer::NoopObserver;
use super::reachability::reachable_in;

fn covers(graph: &Graph, start: NodeId, direction: Direction) -> bool {
    reachable_in(graph, start, direction, &mut NoopObserver)
        .is_ok_and(|reached| reached.len() == graph.order())
}

/// Returns true if every node is mutually reachable from every other.
///
/// The empty graph is not connected; a single node is.
///
/// # Example
///
/// ```rust
/// use graphe_core::graph::{Edge, Graph};
/// use graphe_core::algo::is_connected;
///
/// let path = Graph::from_parts(
///     "path",
///     [1, 2, 3],
///     [Edge::undirected(1, 2), Edge::undirected(2, 3)],
/// )
/// .unwrap();
/// assert!(is_connected(&path));
///
/// let one_way = Graph::from_parts("arc", [1, 2], [Edge::directed(1, 2)]).unwrap();
/// assert!(!is_connected(&one_way));
/// ```
#[must_use]
pub fn is_connected(graph: &Graph) -> bool {
    is_connected_with(graph, &mut rand::thread_rng())
}

/// Same as [`is_connected`], drawing the probe node from `rng`.
///
/// The verdict does not depend on which node is drawn.
pub fn is_connected_with<R: Rng>(graph: &Graph, rng: &mut R) -> bool {
    let Ok(start) = graph.random_node_with(rng) else {
        return false;
    };

    let connected = covers(graph, start, Direction::Outgoing)
        && (!graph.has_directed_edges() || covers(graph, start, Direction::Incoming));

    tracing::debug!(
        graph = %graph.name(),
        probe = start,
        order = graph.order(),
        connected,
        "Connectivity check"
    );
    connected
}

/// Returns true if the graph is connected when edge directions are ignored.
#[must_use]
pub fn is_weakly_connected(graph: &Graph) -> bool {
    match graph.random_node() {
        Ok(start) => covers(graph, start, Direction::Both),
        Err(_) => false,
    }
}

/// Returns true if the graph is connected and has exactly `order - 1` edges.
///
/// Acyclicity is not checked separately: for simple undirected graphs the
/// two conditions together imply it.
#[must_use]
pub fn is_tree(graph: &Graph) -> bool {
    graph.size() + 1 == graph.order() && is_connected(graph)
}
