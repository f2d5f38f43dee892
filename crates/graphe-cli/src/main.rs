#![allow(clippy::doc_markdown)]
//! `graphe` - command-line front-end for the graphe graph engine.
//!
//! Loads a graph from a JSON snapshot, runs one algorithm and prints the
//! result as a table or as JSON.

mod commands;
mod output;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use graphe_core::{Graph, GraphSnapshot, GrapheConfig, NodeId};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::output::OutputFormat;

/// Graphe - hop distances, reachability, closure and coloring for JSON graphs
#[derive(Parser, Debug)]
#[command(name = "graphe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true, env = "GRAPHE_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show order, size and per-node degree
    Info {
        /// Graph snapshot (JSON)
        graph: PathBuf,
    },
    /// Hop distances from a start node (breadth-first)
    Distances {
        /// Graph snapshot (JSON)
        graph: PathBuf,
        /// Start node
        #[arg(short, long)]
        start: Option<NodeId>,
        /// Print every frontier step
        #[arg(long)]
        steps: bool,
    },
    /// Nodes reachable from a start node (depth-first)
    Reach {
        /// Graph snapshot (JSON)
        graph: PathBuf,
        /// Start node
        #[arg(short, long)]
        start: NodeId,
        /// Dump traversal events
        #[arg(long)]
        events: bool,
    },
    /// Connectivity and tree verdicts
    Connected {
        /// Graph snapshot (JSON)
        graph: PathBuf,
    },
    /// Build the transitive closure as a new graph snapshot
    Closure {
        /// Graph snapshot (JSON)
        graph: PathBuf,
        /// Write the closure here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Name of the closure graph (default: "<name>-closure")
        #[arg(long)]
        name: Option<String>,
    },
    /// Welsh-Powell greedy coloring
    Color {
        /// Graph snapshot (JSON)
        graph: PathBuf,
    },
    /// Print the effective configuration
    Config,
    /// Generate a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Reads a snapshot, enforcing the configured limits. Unnamed graphs take
/// the file stem as their name.
fn load_graph(path: &Path, config: &GrapheConfig) -> Result<Graph> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read graph file {}", path.display()))?;
    let mut snapshot: GraphSnapshot = serde_json::from_str(&json)
        .with_context(|| format!("Invalid graph file {}", path.display()))?;

    if snapshot.name.is_empty() {
        snapshot.name = path
            .file_stem()
            .map_or_else(|| "graph".to_string(), |s| s.to_string_lossy().into_owned());
    }

    let graph = Graph::from_snapshot(snapshot, config.limits.to_graph_limits())
        .with_context(|| format!("Invalid graph file {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        graph = %graph.name(),
        order = graph.order(),
        size = graph.size(),
        "Loaded graph"
    );
    Ok(graph)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "graphe", &mut std::io::stdout());
        return Ok(());
    }

    let config = GrapheConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    init_tracing(&config.logging.level);
    tracing::debug!(
        file = ?cli.config,
        max_nodes = config.limits.max_nodes,
        max_edges = config.limits.max_edges,
        level = %config.logging.level,
        "Loaded configuration"
    );

    let format = cli.format;
    match cli.command {
        Commands::Info { graph } => commands::info(&load_graph(&graph, &config)?, format),
        Commands::Distances {
            graph,
            start,
            steps,
        } => commands::distances(&load_graph(&graph, &config)?, start, steps, format),
        Commands::Reach {
            graph,
            start,
            events,
        } => commands::reach(&load_graph(&graph, &config)?, start, events, format),
        Commands::Connected { graph } => {
            commands::connected(&load_graph(&graph, &config)?, format)
        }
        Commands::Closure {
            graph,
            output,
            name,
        } => commands::closure(
            &load_graph(&graph, &config)?,
            output.as_deref(),
            name.as_deref(),
            format,
        ),
        Commands::Color { graph } => commands::color(&load_graph(&graph, &config)?, format),
        Commands::Config => commands::show_config(&config, format),
        // Handled before configuration is loaded.
        Commands::Completions { .. } => Ok(()),
    }
}
