//! Command handlers.
//!
//! Each handler takes a loaded graph, runs one algorithm and prints the
//! result in the requested format.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use graphe_core::algo::{
    build_transitive_closure_as, reachable_observed, FrontierStep, NoopObserver,
};
use graphe_core::{
    build_transitive_closure, color_graph, compute_distances_from, is_connected, is_tree,
    is_weakly_connected, DistanceRun, Error, Graph, GrapheConfig, NodeId, RecordingObserver,
};
use serde_json::json;

use crate::output::{hex, join_ids, print_json, swatch, table, verdict, OutputFormat};

pub fn info(graph: &Graph, format: OutputFormat) -> Result<()> {
    let mut rows = Vec::with_capacity(graph.order());
    for id in graph.node_ids() {
        rows.push((id, graph.degree(id)?, graph.neighbors(id)?));
    }

    match format {
        OutputFormat::Json => print_json(&json!({
            "name": graph.name(),
            "order": graph.order(),
            "size": graph.size(),
            "max_degree": graph.max_degree(),
            "directed_edges": graph.has_directed_edges(),
            "nodes": rows
                .iter()
                .map(|(id, degree, neighbors)| json!({
                    "id": id,
                    "degree": degree,
                    "neighbors": neighbors,
                }))
                .collect::<Vec<_>>(),
        })),
        OutputFormat::Table => {
            println!("\n{} {}", "Graph:".bold(), graph.name().green());
            println!("  {} {}", "Order:".cyan(), graph.order());
            println!("  {} {}", "Size:".cyan(), graph.size());
            println!("  {} {}", "Max degree:".cyan(), graph.max_degree());
            println!();

            let mut out = table(&["Node", "Degree", "Neighbors"]);
            for (id, degree, neighbors) in &rows {
                out.add_row(vec![id.to_string(), degree.to_string(), join_ids(neighbors)]);
            }
            println!("{out}\n");
            Ok(())
        }
    }
}

fn step_json(step: &FrontierStep) -> serde_json::Value {
    json!({
        "node": step.node,
        "hops": step.hops,
        "discovered": step.discovered,
    })
}

pub fn distances(
    graph: &Graph,
    start: Option<NodeId>,
    steps: bool,
    format: OutputFormat,
) -> Result<()> {
    let mut recorded = Vec::new();
    let distances = if steps {
        let start = start.ok_or(Error::NoStartNodeSelected)?;
        let mut run = DistanceRun::new(graph, start)?;
        while let Some(step) = run.step() {
            if format == OutputFormat::Table {
                println!(
                    "{} node {} at {} hops, discovered [{}]",
                    "step".dimmed(),
                    step.node,
                    step.hops,
                    join_ids(&step.discovered)
                );
            }
            recorded.push(step);
        }
        run.finish()
    } else {
        compute_distances_from(graph, start)?
    };

    match format {
        OutputFormat::Json => {
            let mut value = serde_json::to_value(&distances)?;
            if steps {
                value["steps"] = recorded.iter().map(step_json).collect();
            }
            print_json(&value)
        }
        OutputFormat::Table => {
            println!(
                "\n{} from {} ({} of {} reachable)",
                "Distances".bold(),
                distances.start().to_string().green(),
                distances.reachable_count(),
                distances.len()
            );
            let mut out = table(&["Node", "Hops"]);
            for (node, distance) in distances.iter() {
                out.add_row(vec![node.to_string(), distance.to_string()]);
            }
            println!("{out}\n");
            Ok(())
        }
    }
}

pub fn reach(graph: &Graph, start: NodeId, events: bool, format: OutputFormat) -> Result<()> {
    let mut observer = RecordingObserver::new();
    let reached = reachable_observed(graph, start, &mut observer)?;

    match format {
        OutputFormat::Json => {
            let mut value = json!({
                "start": start,
                "count": reached.len(),
                "reached": reached.as_slice(),
            });
            if events {
                value["events"] = serde_json::to_value(observer.events())?;
            }
            print_json(&value)
        }
        OutputFormat::Table => {
            if events {
                for event in observer.events() {
                    println!("{}", serde_json::to_string(event)?);
                }
            }
            println!(
                "\n{} {} of {} nodes from {}",
                "Reached".bold(),
                reached.len(),
                graph.order(),
                start.to_string().green()
            );
            println!("  {}\n", join_ids(reached.as_slice()));
            Ok(())
        }
    }
}

pub fn connected(graph: &Graph, format: OutputFormat) -> Result<()> {
    let connected = is_connected(graph);
    let weakly = is_weakly_connected(graph);
    let tree = is_tree(graph);

    match format {
        OutputFormat::Json => print_json(&json!({
            "connected": connected,
            "weakly_connected": weakly,
            "tree": tree,
        })),
        OutputFormat::Table => {
            println!("\n{} {}", "Graph:".bold(), graph.name().green());
            println!("  {} {}", "Connected:".cyan(), verdict(connected));
            println!("  {} {}", "Weakly connected:".cyan(), verdict(weakly));
            println!("  {} {}", "Tree:".cyan(), verdict(tree));
            println!();
            Ok(())
        }
    }
}

pub fn closure(
    graph: &Graph,
    output: Option<&Path>,
    name: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let closure = match name {
        Some(name) => build_transitive_closure_as(graph, name, &mut NoopObserver)?,
        None => build_transitive_closure(graph)?,
    };
    let added = closure.size() - graph.size();
    let snapshot = closure.to_json()?;

    let Some(path) = output else {
        println!("{snapshot}");
        return Ok(());
    };

    std::fs::write(path, &snapshot)
        .with_context(|| format!("Failed to write closure to {}", path.display()))?;
    tracing::info!(path = %path.display(), added, "Closure written");

    match format {
        OutputFormat::Json => print_json(&json!({
            "name": closure.name(),
            "output": path.display().to_string(),
            "size": closure.size(),
            "added": added,
        })),
        OutputFormat::Table => {
            println!(
                "{} Closure '{}' written to {} ({} edges added, {} total)",
                "✓".green(),
                closure.name().green(),
                path.display(),
                added,
                closure.size()
            );
            Ok(())
        }
    }
}

pub fn color(graph: &Graph, format: OutputFormat) -> Result<()> {
    let coloring = color_graph(graph);

    match format {
        OutputFormat::Json => print_json(&json!({
            "color_count": coloring.color_count(),
            "nodes": coloring
                .iter()
                .map(|(node, color)| json!({
                    "node": node,
                    "color": color,
                    "hex": hex(color),
                }))
                .collect::<Vec<_>>(),
        })),
        OutputFormat::Table => {
            println!(
                "\n{} {} colors for {} nodes",
                "Welsh-Powell:".bold(),
                coloring.color_count().to_string().green(),
                coloring.len()
            );
            let mut out = table(&["Node", "Degree", "Color", "Hex"]);
            for (node, color) in coloring.iter() {
                out.add_row(vec![
                    node.to_string(),
                    graph.degree(node)?.to_string(),
                    color.to_string(),
                    hex(color),
                ]);
            }
            println!("{out}");

            for (index, members) in coloring.classes().iter().enumerate() {
                let Some(color) = members.first().and_then(|m| coloring.color_of(*m)) else {
                    continue;
                };
                println!("  {} class {index}: {}", swatch(color), join_ids(members));
            }
            println!();
            Ok(())
        }
    }
}

pub fn show_config(config: &GrapheConfig, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(config),
        OutputFormat::Table => {
            let rendered = toml::to_string_pretty(config).context("Failed to render configuration")?;
            print!("{rendered}");
            Ok(())
        }
    }
}
