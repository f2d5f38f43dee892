//! Graph algorithms.
//!
//! Every algorithm borrows a [`Graph`](crate::graph::Graph) and returns a
//! fresh result value; none of them mutate their input. Each one has an
//! `*_observed` variant that reports progress to an [`AlgorithmObserver`].
//!
//! | Algorithm | Entry point | Result |
//! |-----------|-------------|--------|
//! | Depth-first reachability | [`reachable`] | [`Reached`] |
//! | Connectivity / tree test | [`is_connected`], [`is_tree`] | `bool` |
//! | Breadth-first hop distance | [`compute_distances`], [`DistanceRun`] | [`Distances`] |
//! | Transitive closure | [`build_transitive_closure`] | new `Graph` |
//! | Welsh–Powell coloring | [`color_graph`] | [`Coloring`] |

mod closure;
mod coloring;
mod connectivity;
mod distance;
mod observer;
mod reachability;

#[cfg(test)]
mod closure_tests;

pub use closure::{build_transitive_closure, build_transitive_closure_as};
pub use coloring::{color_graph, color_graph_in_place, color_graph_observed, Coloring};
pub use connectivity::{is_connected, is_connected_with, is_tree, is_weakly_connected};
pub use distance::{
    compute_distances, compute_distances_from, compute_distances_observed, Distance, DistanceRun,
    Distances, FrontierStep,
};
pub use observer::{AlgorithmEvent, AlgorithmObserver, NoopObserver, RecordingObserver};
pub use reachability::{reachable, reachable_in, reachable_observed, Reached};
