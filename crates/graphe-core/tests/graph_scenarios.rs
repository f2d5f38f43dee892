//! End-to-end scenarios through the public API, starting from JSON snapshots.

use graphe_core::{
    build_transitive_closure, color_graph, compute_distances, compute_distances_from,
    is_connected, is_tree, reachable, Color, Distance, Error, Graph, GraphLimits,
};

fn load(json: &str) -> Graph {
    Graph::from_json(json, GraphLimits::default()).unwrap()
}

const PATH: &str = r#"{
    "name": "path",
    "nodes": [1, 2, 3, 4],
    "edges": [
        {"source": 1, "target": 2},
        {"source": 2, "target": 3},
        {"source": 3, "target": 4}
    ]
}"#;

const SPLIT: &str = r#"{
    "name": "split",
    "nodes": [1, 2, 3, 4],
    "edges": [
        {"source": 1, "target": 2},
        {"source": 3, "target": 4}
    ]
}"#;

const SQUARE: &str = r#"{
    "name": "square",
    "nodes": [1, 2, 3, 4],
    "edges": [
        {"source": 1, "target": 2},
        {"source": 2, "target": 3},
        {"source": 3, "target": 4},
        {"source": 4, "target": 1}
    ]
}"#;

#[test]
fn path_graph_distances_and_shape() {
    let graph = load(PATH);

    let distances = compute_distances(&graph, 1).unwrap();
    let hops: Vec<_> = distances.iter().map(|(_, d)| d.hops()).collect();
    assert_eq!(hops, vec![Some(0), Some(1), Some(2), Some(3)]);

    assert!(is_connected(&graph));
    assert!(is_tree(&graph));
}

#[test]
fn split_graph_reach_and_closure() {
    let graph = load(SPLIT);

    assert!(!is_connected(&graph));
    let mut reached = reachable(&graph, 1).unwrap().into_vec();
    reached.sort_unstable();
    assert_eq!(reached, vec![1, 2]);

    let closure = build_transitive_closure(&graph).unwrap();
    assert_eq!(closure.size(), graph.size());
}

#[test]
fn square_graph_two_alternating_colors() {
    let graph = load(SQUARE);
    let coloring = color_graph(&graph);

    assert_eq!(coloring.color_count(), 2);
    assert_eq!(coloring.color_of(1), Some(Color(0)));
    assert_eq!(coloring.color_of(2), Some(Color(1)));
    assert_eq!(coloring.color_of(3), Some(Color(0)));
    assert_eq!(coloring.color_of(4), Some(Color(1)));
}

#[test]
fn distances_need_a_start() {
    let graph = load(PATH);
    assert!(matches!(
        compute_distances_from(&graph, None),
        Err(Error::NoStartNodeSelected)
    ));
}

#[test]
fn directed_snapshot_keeps_direction() {
    let graph = load(
        r#"{"nodes": [1, 2, 3], "edges": [
            {"source": 1, "target": 2, "directed": true},
            {"source": 2, "target": 3, "directed": true}
        ]}"#,
    );

    assert_eq!(graph.name(), "");
    let from_three = compute_distances(&graph, 3).unwrap();
    assert_eq!(from_three.get(1), Some(Distance::Unreachable));
    assert!(!is_tree(&graph));

    let closure = build_transitive_closure(&graph).unwrap();
    assert!(closure.has_edge(1, 3, true));
}

#[test]
fn closure_snapshot_round_trips() {
    let closure = build_transitive_closure(&load(PATH)).unwrap();
    let reloaded = load(&closure.to_json().unwrap());

    assert_eq!(reloaded.to_snapshot(), closure.to_snapshot());
    assert_eq!(reloaded.name(), "path-closure");
}

#[test]
fn snapshot_over_limit_is_rejected() {
    let result = Graph::from_json(PATH, GraphLimits::new(3, 10));
    assert!(matches!(result, Err(Error::CapacityExceeded { .. })));
}
