//! Graph command handler: connectivity report for a proximity threshold.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use safarpak_cli::output::{render_json, OutputFormat};
use safarpak_lib::{build_graph, load_catalog, validate_threshold};

#[derive(Debug, Serialize)]
struct GraphReport<'a> {
    threshold_km: f64,
    nodes: usize,
    edges: usize,
    isolated: Vec<&'a str>,
}

/// Handle the graph subcommand.
pub fn handle_graph_command(cities: Option<&Path>, format: OutputFormat, threshold: f64) -> Result<()> {
    let threshold = validate_threshold(threshold)?;
    let catalog = load_catalog(cities).context("failed to load city data")?;
    let graph = build_graph(&catalog.hub_cities(), threshold);

    let report = GraphReport {
        threshold_km: graph.threshold_km(),
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        isolated: graph.isolated_nodes(),
    };

    match format {
        OutputFormat::Json => render_json(&report)?,
        OutputFormat::Text | OutputFormat::Rich => {
            println!("Threshold: {} km", report.threshold_km);
            println!("Cities: {}", report.nodes);
            println!("Connections: {}", report.edges);
            if report.isolated.is_empty() {
                println!("Isolated: none");
            } else {
                println!(
                    "Isolated ({}): {}",
                    report.isolated.len(),
                    report.isolated.join(", ")
                );
            }
        }
    }
    Ok(())
}
