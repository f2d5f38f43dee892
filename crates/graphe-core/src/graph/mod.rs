//! In-memory graph store.
//!
//! Provides the node/edge types and the [`Graph`] container every algorithm
//! in [`crate::algo`] borrows.
//!
//! # Example
//!
//! ```rust
//! use graphe_core::graph::{Edge, Graph};
//!
//! let graph = Graph::from_parts(
//!     "path",
//!     [1, 2, 3],
//!     [Edge::undirected(1, 2), Edge::undirected(2, 3)],
//! )
//! .unwrap();
//!
//! assert_eq!(graph.order(), 3);
//! assert_eq!(graph.size(), 2);
//! assert_eq!(graph.degree(2).unwrap(), 2);
//! ```

mod store;
mod types;

#[cfg(test)]
mod types_tests;

pub use store::{Graph, GraphLimits};
pub use types::{Color, Direction, Edge, GraphSnapshot, Node, NodeId};
