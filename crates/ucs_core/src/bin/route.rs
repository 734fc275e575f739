use anyhow::Context;
use log::info;
use ucs_core::{graph::Graph, service::RouteService, util::cli};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = cli::parse();

    let g = Graph::from_csv(&cfg.vertices_file, &cfg.arcs_file)
        .context("Failed to create graph from csv files")?;
    let service = RouteService::new(g);

    let path = service
        .route(cfg.from, cfg.to)
        .with_context(|| format!("Could not search route {} -> {}", cfg.from, cfg.to))?;
    info!(
        "{} nodes generated, {} nodes expanded in {:?}",
        path.nodes_generated, path.nodes_expanded, path.duration
    );

    if cfg.json {
        println!("{}", serde_json::to_string_pretty(&path)?);
        return Ok(());
    }

    if !path.is_reachable() {
        println!("No path found");
        return Ok(());
    }

    for label in path.labels(service.graph()) {
        println!("{}", label);
    }
    println!("Costs: {}", path.weight);
    println!(
        "Generated: {}, Expanded: {}, Took: {:?}",
        path.nodes_generated, path.nodes_expanded, path.duration
    );

    Ok(())
}
