//! # `graphe` Core
//!
//! In-memory graph engine: a node/edge store plus the classical algorithms
//! an interactive graph editor needs.
//!
//! ## Features
//!
//! - **Graph store**: directed and undirected edges, insertion-ordered nodes,
//!   neighbor/degree queries, independent clones, JSON snapshots
//! - **Reachability**: iterative depth-first search
//! - **Connectivity**: connected (strongly, when directed edges are present),
//!   weakly connected, tree test
//! - **Hop distances**: breadth-first, steppable frontier by frontier
//! - **Transitive closure**: built on a clone, source untouched
//! - **Coloring**: Welsh–Powell greedy heuristic
//! - **Observer hooks**: notification-only callbacks for visualization
//!
//! ## Quick Start
//!
//! ```rust
//! use graphe_core::{color_graph, compute_distances, is_tree, Distance, Graph};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut graph = Graph::new("demo");
//!     for id in 1..=4 {
//!         graph.add_node(id)?;
//!     }
//!     graph.add_edge(1, 2, false)?;
//!     graph.add_edge(2, 3, false)?;
//!     graph.add_edge(3, 4, false)?;
//!
//!     let distances = compute_distances(&graph, 1)?;
//!     assert_eq!(distances.get(4), Some(Distance::Finite(3)));
//!     assert!(is_tree(&graph));
//!
//!     let coloring = color_graph(&graph);
//!     assert_eq!(coloring.color_count(), 2);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![cfg_attr(
    test,
    allow(
        clippy::doc_markdown,
        clippy::uninlined_format_args,
        clippy::cast_possible_truncation
    )
)]

pub mod algo;
pub mod config;
#[cfg(test)]
mod config_tests;
pub mod error;
pub mod graph;

pub use algo::{
    build_transitive_closure, color_graph, compute_distances, compute_distances_from,
    is_connected, is_tree, is_weakly_connected, reachable, AlgorithmEvent, AlgorithmObserver,
    Coloring, Distance, DistanceRun, Distances, NoopObserver, Reached, RecordingObserver,
};
pub use config::{GrapheConfig, LimitsConfig, LoggingConfig};
pub use error::{CapacityKind, Error, Result};
pub use graph::{Color, Direction, Edge, Graph, GraphLimits, GraphSnapshot, Node, NodeId};
