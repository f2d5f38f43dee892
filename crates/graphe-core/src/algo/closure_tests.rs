//! Tests for the transitive closure builder.

use crate::error::{CapacityKind, Error};
use crate::graph::{Color, Edge, Graph, GraphLimits};

use super::closure::{build_transitive_closure, build_transitive_closure_as};
use super::observer::{AlgorithmEvent, RecordingObserver};
use super::reachability::reachable;

fn chain() -> Graph {
    Graph::from_parts(
        "chain",
        [1, 2, 3, 4],
        [
            Edge::directed(1, 2),
            Edge::directed(2, 3),
            Edge::directed(3, 4),
        ],
    )
    .unwrap()
}

#[test]
fn test_closure_of_chain() {
    let source = chain();
    let closure = build_transitive_closure(&source).unwrap();

    assert_eq!(closure.name(), "chain-closure");
    assert_eq!(closure.order(), 4);
    // 3 source edges + 1->3, 1->4, 2->4
    assert_eq!(closure.size(), 6);
    assert!(closure.has_edge(1, 3, true));
    assert!(closure.has_edge(1, 4, true));
    assert!(closure.has_edge(2, 4, true));
    assert!(!closure.has_edge(4, 1, true));
}

#[test]
fn test_closure_leaves_source_untouched() {
    let source = chain();
    let before = source.to_snapshot();
    let _ = build_transitive_closure(&source).unwrap();
    assert_eq!(source.to_snapshot(), before);
}

#[test]
fn test_closure_adds_nothing_to_single_edge_components() {
    let graph = Graph::from_parts(
        "split",
        [1, 2, 3, 4],
        [Edge::undirected(1, 2), Edge::undirected(3, 4)],
    )
    .unwrap();

    let closure = build_transitive_closure(&graph).unwrap();
    assert_eq!(closure.size(), graph.size());
}

#[test]
fn test_closure_never_adds_self_loops() {
    let cycle = Graph::from_parts(
        "cycle",
        [1, 2, 3],
        [
            Edge::directed(1, 2),
            Edge::directed(2, 3),
            Edge::directed(3, 1),
        ],
    )
    .unwrap();

    let closure = build_transitive_closure(&cycle).unwrap();
    assert_eq!(closure.size(), 6);
    assert!(closure.edges().iter().all(|e| e.source() != e.target()));
}

#[test]
fn test_closure_arcs_match_reachability() {
    let graph = Graph::from_parts(
        "mixed",
        [1, 2, 3, 4, 5],
        [
            Edge::undirected(1, 2),
            Edge::directed(2, 3),
            Edge::directed(3, 4),
        ],
    )
    .unwrap();
    let closure = build_transitive_closure(&graph).unwrap();

    for u in graph.node_ids() {
        let reached = reachable(&graph, u).unwrap();
        for v in graph.node_ids() {
            if u == v {
                continue;
            }
            assert_eq!(closure.has_arc(u, v), reached.contains(v), "{u} -> {v}");
        }
    }
}

#[test]
fn test_closure_is_idempotent() {
    let once = build_transitive_closure(&chain()).unwrap();
    let twice = build_transitive_closure(&once).unwrap();
    assert_eq!(twice.size(), once.size());
}

#[test]
fn test_closure_clears_colors_and_uses_name() {
    let mut source = chain();
    source.set_color(1, Color(3)).unwrap();

    let closure =
        build_transitive_closure_as(&source, "graph-area-two", &mut RecordingObserver::new())
            .unwrap();
    assert_eq!(closure.name(), "graph-area-two");
    assert_eq!(closure.color_of(1).unwrap(), None);
    assert_eq!(source.color_of(1).unwrap(), Some(Color(3)));
}

#[test]
fn test_closure_reports_added_edges() {
    let mut observer = RecordingObserver::new();
    let closure = build_transitive_closure_as(&chain(), "c", &mut observer).unwrap();

    let added: Vec<_> = observer
        .events()
        .iter()
        .filter_map(|e| match e {
            AlgorithmEvent::EdgeAdded { from, to } => Some((*from, *to)),
            _ => None,
        })
        .collect();
    assert_eq!(added, vec![(1, 3), (1, 4), (2, 4)]);
    assert_eq!(closure.size(), 3 + added.len());
}

#[test]
fn test_closure_respects_edge_limit() {
    let mut graph = Graph::with_limits("tight", GraphLimits::new(10, 3));
    for id in 1..=4 {
        graph.add_node(id).unwrap();
    }
    graph.add_edge(1, 2, true).unwrap();
    graph.add_edge(2, 3, true).unwrap();
    graph.add_edge(3, 4, true).unwrap();

    let result = build_transitive_closure(&graph);
    assert!(matches!(
        result,
        Err(Error::CapacityExceeded {
            kind: CapacityKind::Edges,
            limit: 3
        })
    ));
    assert_eq!(graph.size(), 3);
}

#[test]
fn test_closure_of_empty_graph() {
    let closure = build_transitive_closure(&Graph::new("empty")).unwrap();
    assert!(closure.is_empty());
    assert_eq!(closure.size(), 0);
}
