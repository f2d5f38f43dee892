//! Tests for graph types (Node, Edge, Color, GraphSnapshot).

use super::types::{Color, Edge, GraphSnapshot, Node};

#[test]
fn test_node_new_is_uncolored() {
    let node = Node::new(7);
    assert_eq!(node.id(), 7);
    assert_eq!(node.color(), None);
}

#[test]
fn test_node_set_and_clear_color() {
    let mut node = Node::new(1);
    node.set_color(Color(3));
    assert_eq!(node.color(), Some(Color(3)));
    node.clear_color();
    assert_eq!(node.color(), None);
}

#[test]
fn test_directed_edge_connects_one_way() {
    let edge = Edge::directed(1, 2);
    assert!(edge.is_directed());
    assert!(edge.connects(1, 2));
    assert!(!edge.connects(2, 1));
    assert_eq!(edge.head_from(1), Some(2));
    assert_eq!(edge.head_from(2), None);
    assert_eq!(edge.tail_to(2), Some(1));
    assert_eq!(edge.tail_to(1), None);
}

#[test]
fn test_undirected_edge_connects_both_ways() {
    let edge = Edge::undirected(1, 2);
    assert!(!edge.is_directed());
    assert!(edge.connects(1, 2));
    assert!(edge.connects(2, 1));
    assert_eq!(edge.head_from(2), Some(1));
    assert_eq!(edge.tail_to(1), Some(2));
    assert!(edge.touches(1));
    assert!(!edge.touches(3));
}

#[test]
fn test_edge_key_ignores_order_for_undirected_only() {
    assert_eq!(Edge::undirected(1, 2).key(), Edge::undirected(2, 1).key());
    assert_ne!(Edge::directed(1, 2).key(), Edge::directed(2, 1).key());
    assert_ne!(Edge::directed(1, 2).key(), Edge::undirected(1, 2).key());
}

#[test]
fn test_edge_display() {
    assert_eq!(Edge::directed(1, 2).to_string(), "1 -> 2");
    assert_eq!(Edge::undirected(3, 4).to_string(), "3 -- 4");
}

#[test]
fn test_color_display_and_order() {
    assert_eq!(Color(0).to_string(), "c0");
    assert!(Color(0) < Color(1));
    assert_eq!(Color(5).index(), 5);
}

#[test]
fn test_snapshot_deserialize_defaults_directed_false() {
    let json = r#"{ "name": "g", "nodes": [1, 2], "edges": [{ "source": 1, "target": 2 }] }"#;
    let snapshot: GraphSnapshot = serde_json::from_str(json).unwrap();
    assert_eq!(snapshot.name, "g");
    assert_eq!(snapshot.nodes, vec![1, 2]);
    assert_eq!(snapshot.edges, vec![Edge::undirected(1, 2)]);
}

#[test]
fn test_node_serialization_skips_missing_color() {
    let json = serde_json::to_string(&Node::new(4)).unwrap();
    assert_eq!(json, r#"{"id":4}"#);

    let mut colored = Node::new(4);
    colored.set_color(Color(1));
    let json = serde_json::to_string(&colored).unwrap();
    assert_eq!(json, r#"{"id":4,"color":1}"#);
}
