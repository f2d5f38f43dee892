//! Fuzz target for JSON snapshot loading.
//!
//! Arbitrary bytes must either be rejected with an error or produce a graph
//! on which every algorithm runs without panicking.
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_snapshot_parser
//! ```

#![no_main]

use graphe_core::{
    build_transitive_closure, color_graph, compute_distances, is_connected, is_tree, Graph,
    GraphLimits,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };

    // Closures are quadratic; keep inputs small.
    let Ok(graph) = Graph::from_json(json, GraphLimits::new(64, 4096)) else {
        return;
    };

    let _ = is_connected(&graph);
    let _ = is_tree(&graph);
    assert!(color_graph(&graph).is_proper_for(&graph));
    if let Ok(start) = graph.random_node() {
        let _ = compute_distances(&graph, start);
    }
    let _ = build_transitive_closure(&graph);

    // Reloading our own output must succeed.
    let reloaded = Graph::from_json(&graph.to_json().unwrap(), graph.limits()).unwrap();
    assert_eq!(reloaded.to_snapshot(), graph.to_snapshot());
});
