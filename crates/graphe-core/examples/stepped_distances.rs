//! Replays a breadth-first distance run one frontier step at a time, the way
//! an interactive front-end would animate it.
//!
//! ```bash
//! cargo run -p graphe-core --example stepped_distances
//! ```

use graphe_core::algo::{AlgorithmEvent, DistanceRun, RecordingObserver};
use graphe_core::{Edge, Graph};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let graph = Graph::from_parts(
        "demo",
        [1, 2, 3, 4, 5, 6],
        [
            Edge::undirected(1, 2),
            Edge::undirected(1, 3),
            Edge::undirected(2, 4),
            Edge::undirected(3, 4),
            Edge::directed(4, 5),
        ],
    )?;

    let mut observer = RecordingObserver::new();
    let mut run = DistanceRun::new_observed(&graph, 1, &mut observer)?;

    while let Some(step) = run.step_observed(&mut observer) {
        let frontier: Vec<_> = run.frontier().collect();
        println!(
            "visit {} ({} hops): discovered {:?}, frontier {:?}",
            step.node, step.hops, step.discovered, frontier
        );
    }

    println!();
    for (node, distance) in run.distances().iter() {
        println!("  {node}: {distance}");
    }

    let updates = observer
        .events()
        .iter()
        .filter(|e| matches!(e, AlgorithmEvent::DistanceUpdated { .. }))
        .count();
    println!("\n{updates} distance updates recorded");
    Ok(())
}
