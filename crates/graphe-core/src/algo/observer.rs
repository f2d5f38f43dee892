//! Step-observation hooks.
//!
//! Algorithms report progress through [`AlgorithmObserver`] so an embedding
//! application can render intermediate state (visited nodes, traversed
//! edges, assigned colors). Observers only receive notifications; nothing
//! they do can change the result of a run.

use serde::Serialize;

use crate::graph::{Color, NodeId};

use super::distance::Distance;

/// Receives notifications while an algorithm runs.
///
/// Every method has an empty default, so implementors only override the
/// events they care about.
pub trait AlgorithmObserver {
    /// A node was visited for the first time.
    fn node_visited(&mut self, _node: NodeId) {}

    /// The edge `from -> to` was followed (or queued for following).
    fn edge_traversed(&mut self, _from: NodeId, _to: NodeId) {}

    /// A node's hop distance was set.
    fn distance_updated(&mut self, _node: NodeId, _distance: Distance) {}

    /// A node joined a color class.
    fn color_assigned(&mut self, _node: NodeId, _color: Color) {}

    /// A directed edge was added to a derived graph (transitive closure).
    fn edge_added(&mut self, _from: NodeId, _to: NodeId) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl AlgorithmObserver for NoopObserver {}

/// A single recorded notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AlgorithmEvent {
    /// See [`AlgorithmObserver::node_visited`].
    NodeVisited {
        /// Visited node.
        node: NodeId,
    },
    /// See [`AlgorithmObserver::edge_traversed`].
    EdgeTraversed {
        /// Tail of the edge.
        from: NodeId,
        /// Head of the edge.
        to: NodeId,
    },
    /// See [`AlgorithmObserver::distance_updated`].
    DistanceUpdated {
        /// Updated node.
        node: NodeId,
        /// New distance.
        distance: Distance,
    },
    /// See [`AlgorithmObserver::color_assigned`].
    ColorAssigned {
        /// Colored node.
        node: NodeId,
        /// Assigned class.
        color: Color,
    },
    /// See [`AlgorithmObserver::edge_added`].
    EdgeAdded {
        /// Tail of the new edge.
        from: NodeId,
        /// Head of the new edge.
        to: NodeId,
    },
}

/// Observer that keeps every event, in emission order.
///
/// Useful for replaying a run step by step with presentation delays, and in
/// tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    events: Vec<AlgorithmEvent>,
}

impl RecordingObserver {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events.
    #[must_use]
    pub fn events(&self) -> &[AlgorithmEvent] {
        &self.events
    }

    /// Consumes the recorder, returning its events.
    #[must_use]
    pub fn into_events(self) -> Vec<AlgorithmEvent> {
        self.events
    }

    /// Nodes from `NodeVisited` events, in order.
    #[must_use]
    pub fn visited(&self) -> Vec<NodeId> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AlgorithmEvent::NodeVisited { node } => Some(*node),
                _ => None,
            })
            .collect()
    }
}

impl AlgorithmObserver for RecordingObserver {
    fn node_visited(&mut self, node: NodeId) {
        self.events.push(AlgorithmEvent::NodeVisited { node });
    }

    fn edge_traversed(&mut self, from: NodeId, to: NodeId) {
        self.events.push(AlgorithmEvent::EdgeTraversed { from, to });
    }

    fn distance_updated(&mut self, node: NodeId, distance: Distance) {
        self.events
            .push(AlgorithmEvent::DistanceUpdated { node, distance });
    }

    fn color_assigned(&mut self, node: NodeId, color: Color) {
        self.events.push(AlgorithmEvent::ColorAssigned { node, color });
    }

    fn edge_added(&mut self, from: NodeId, to: NodeId) {
        self.events.push(AlgorithmEvent::EdgeAdded { from, to });
    }
}
