//! Tests for layered configuration.

use std::io::Write;

use serial_test::serial;

use crate::config::{GrapheConfig, DEFAULT_MAX_EDGES, DEFAULT_MAX_NODES};
use crate::error::Error;
use crate::graph::GraphLimits;

#[test]
fn test_defaults() {
    let config = GrapheConfig::default();
    assert_eq!(config.limits.max_nodes, DEFAULT_MAX_NODES);
    assert_eq!(config.limits.max_edges, DEFAULT_MAX_EDGES);
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_toml_str_partial_override() {
    let config = GrapheConfig::from_toml_str("[limits]\nmax_nodes = 12\n").unwrap();
    assert_eq!(config.limits.max_nodes, 12);
    assert_eq!(config.limits.max_edges, DEFAULT_MAX_EDGES);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_zero_limit_rejected() {
    let result = GrapheConfig::from_toml_str("[limits]\nmax_edges = 0\n");
    assert!(matches!(result, Err(Error::Config(msg)) if msg.contains("max_edges")));
}

#[test]
fn test_unknown_log_level_rejected() {
    let result = GrapheConfig::from_toml_str("[logging]\nlevel = \"loud\"\n");
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_malformed_toml_rejected() {
    let result = GrapheConfig::from_toml_str("[limits\nmax_nodes = 1");
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_to_graph_limits() {
    let config = GrapheConfig::from_toml_str("[limits]\nmax_nodes = 3\nmax_edges = 4\n").unwrap();
    assert_eq!(config.limits.to_graph_limits(), GraphLimits::new(3, 4));
}

#[test]
#[serial]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[logging]\nlevel = \"debug\"\n[limits]\nmax_nodes = 50").unwrap();

    let config = GrapheConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.limits.max_nodes, 50);
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[limits]\nmax_nodes = 50").unwrap();

    std::env::set_var("GRAPHE_LIMITS__MAX_NODES", "75");
    let result = GrapheConfig::load(Some(file.path()));
    std::env::remove_var("GRAPHE_LIMITS__MAX_NODES");

    assert_eq!(result.unwrap().limits.max_nodes, 75);
}

#[test]
#[serial]
fn test_load_without_file_uses_defaults() {
    let config = GrapheConfig::load(None).unwrap();
    assert_eq!(config, GrapheConfig::default());
}
