//! Fuzz target for graph mutation sequences.
//!
//! Applies arbitrary add/remove operations, then checks structural and
//! algorithmic invariants:
//! - failed mutations leave the graph unchanged
//! - coloring is proper and within max degree + 1 classes
//! - `is_tree` agrees with edge count and connectivity
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_graph_ops
//! ```

#![no_main]

use arbitrary::Arbitrary;
use graphe_core::{
    color_graph, compute_distances, is_connected, is_tree, reachable, Distance, Graph,
};
use libfuzzer_sys::fuzz_target;

/// One mutation. Node IDs are folded into a small range so edges land.
#[derive(Arbitrary, Debug)]
enum Op {
    AddNode(u8),
    AddEdge { from: u8, to: u8, directed: bool },
    RemoveNode(u8),
    RemoveEdge { from: u8, to: u8, directed: bool },
}

fn id(raw: u8) -> u64 {
    u64::from(raw % 32)
}

fuzz_target!(|ops: Vec<Op>| {
    let mut graph = Graph::new("fuzz");

    for op in ops.into_iter().take(256) {
        match op {
            Op::AddNode(n) => {
                let before = graph.order();
                if graph.add_node(id(n)).is_err() {
                    assert_eq!(graph.order(), before);
                }
            }
            Op::AddEdge { from, to, directed } => {
                let before = graph.size();
                if graph.add_edge(id(from), id(to), directed).is_err() {
                    assert_eq!(graph.size(), before);
                }
            }
            Op::RemoveNode(n) => {
                graph.remove_node(id(n));
                assert!(graph.edges().iter().all(|e| !e.touches(id(n))));
            }
            Op::RemoveEdge { from, to, directed } => {
                graph.remove_edge(id(from), id(to), directed);
            }
        }
    }

    let coloring = color_graph(&graph);
    assert!(coloring.is_proper_for(&graph));
    assert!(coloring.color_count() <= graph.max_degree() + 1);
    assert_eq!(
        is_tree(&graph),
        graph.size() + 1 == graph.order() && is_connected(&graph)
    );

    if let Ok(start) = graph.random_node() {
        let reached = reachable(&graph, start).unwrap();
        let distances = compute_distances(&graph, start).unwrap();
        for (node, distance) in distances.iter() {
            assert_eq!(distance != Distance::Unreachable, reached.contains(node));
        }
    }
});
