//! Welsh–Powell greedy coloring.
//!
//! Nodes are ordered by non-increasing degree (stable, so ties keep graph
//! insertion order). Each pass opens a new color class with the first
//! uncolored node, then sweeps the rest of the order adding every uncolored
//! node that has no neighbor in the class yet. Every pass colors at least
//! one node, so there are at most `order` passes, and at most
//! `max_degree + 1` classes.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{Color, Direction, Graph, NodeId};

use super::observer::{AlgorithmObserver, NoopObserver};

/// A complete assignment of color classes to nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Coloring {
    colors: IndexMap<NodeId, Color>,
    classes: u32,
}

impl Coloring {
    /// Color assigned to `node`.
    #[must_use]
    pub fn color_of(&self, node: NodeId) -> Option<Color> {
        self.colors.get(&node).copied()
    }

    /// Number of distinct classes used.
    #[must_use]
    pub fn color_count(&self) -> usize {
        self.classes as usize
    }

    /// Number of colored nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True when nothing was colored (empty graph).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterates `(node, color)` in graph insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Color)> + '_ {
        self.colors.iter().map(|(id, c)| (*id, *c))
    }

    /// Nodes grouped by class; index `k` holds the members of `Color(k)`.
    #[must_use]
    pub fn classes(&self) -> Vec<Vec<NodeId>> {
        let mut classes = vec![Vec::new(); self.color_count()];
        for (node, color) in self.iter() {
            classes[color.index() as usize].push(node);
        }
        classes
    }

    /// Returns true if no edge of `graph` joins two nodes of the same class
    /// and every node of `graph` is colored.
    #[must_use]
    pub fn is_proper_for(&self, graph: &Graph) -> bool {
        graph.nodes().all(|n| self.colors.contains_key(&n.id()))
            && graph
                .edges()
                .iter()
                .all(|e| self.color_of(e.source()) != self.color_of(e.target()))
    }

    /// Stores this coloring on the nodes of `graph`, after clearing any
    /// previous colors.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownNode` if a colored node is missing from `graph`;
    /// in that case no color is written.
    pub fn apply_to(&self, graph: &mut Graph) -> Result<()> {
        if let Some(missing) = self.colors.keys().find(|id| !graph.has_node(**id)) {
            return Err(Error::UnknownNode(*missing));
        }
        graph.reset_colors();
        for (node, color) in self.iter() {
            graph.set_color(node, color)?;
        }
        Ok(())
    }
}

/// Colors `graph` with the Welsh–Powell heuristic.
///
/// Adjacency ignores edge direction: a directed edge still forbids its two
/// endpoints from sharing a class.
///
/// # Example
///
/// ```rust
/// use graphe_core::graph::{Color, Edge, Graph};
/// use graphe_core::algo::color_graph;
///
/// let square = Graph::from_parts(
///     "square",
///     [1, 2, 3, 4],
///     [
///         Edge::undirected(1, 2),
///         Edge::undirected(2, 3),
///         Edge::undirected(3, 4),
///         Edge::undirected(4, 1),
///     ],
/// )
/// .unwrap();
///
/// let coloring = color_graph(&square);
/// assert_eq!(coloring.color_count(), 2);
/// assert_eq!(coloring.color_of(1), Some(Color(0)));
/// assert_eq!(coloring.color_of(2), Some(Color(1)));
/// assert_eq!(coloring.color_of(3), Some(Color(0)));
/// assert_eq!(coloring.color_of(4), Some(Color(1)));
/// ```
#[must_use]
pub fn color_graph(graph: &Graph) -> Coloring {
    color_graph_observed(graph, &mut NoopObserver)
}

/// Same as [`color_graph`], reporting each assignment in construction order.
pub fn color_graph_observed<O>(graph: &Graph, observer: &mut O) -> Coloring
where
    O: AlgorithmObserver + ?Sized,
{
    let ids = graph.node_ids();
    let index: HashMap<NodeId, usize> = ids.iter().enumerate().map(|(i, id)| (*id, i)).collect();
    let adjacency: Vec<Vec<usize>> = ids
        .iter()
        .map(|&id| {
            graph
                .hop(id, Direction::Both)
                .into_iter()
                .filter_map(|n| index.get(&n).copied())
                .collect()
        })
        .collect();

    let mut order: Vec<usize> = (0..ids.len()).collect();
    order.sort_by_key(|&i| std::cmp::Reverse(graph.edges_of(ids[i]).len()));

    let mut assigned: Vec<Option<Color>> = vec![None; ids.len()];
    let mut classes = 0u32;

    while let Some(first) = order.iter().position(|&i| assigned[i].is_none()) {
        let color = Color(classes);
        classes += 1;

        assigned[order[first]] = Some(color);
        observer.color_assigned(ids[order[first]], color);

        for &v in &order[first + 1..] {
            if assigned[v].is_some() {
                continue;
            }
            if adjacency[v].iter().any(|&w| assigned[w] == Some(color)) {
                continue;
            }
            assigned[v] = Some(color);
            observer.color_assigned(ids[v], color);
        }
        tracing::trace!(class = color.index(), "Color class closed");
    }

    let colors: IndexMap<NodeId, Color> = ids
        .iter()
        .zip(&assigned)
        .filter_map(|(id, color)| color.map(|c| (*id, c)))
        .collect();

    tracing::debug!(
        graph = %graph.name(),
        order = graph.order(),
        colors = classes,
        "Welsh-Powell coloring complete"
    );
    Coloring { colors, classes }
}

/// Clears every color on `graph`, colors it, and stores the result on its
/// nodes.
pub fn color_graph_in_place(graph: &mut Graph) -> Result<Coloring> {
    let coloring = color_graph(graph);
    coloring.apply_to(graph)?;
    Ok(coloring)
}
