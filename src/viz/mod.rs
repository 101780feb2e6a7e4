//! Visualization generation module

use anyhow::Result;
use crate::cluster::Cluster;
use crate::graph::ContactGraph;
use serde_json::{json, to_string_pretty};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Generate visualizations from analysis results
pub fn generate_visualizations(
    clusters: &[Cluster],
    graph: &ContactGraph,
    output_dir: &str,
) -> Result<()> {
    log::info!("Generating visualizations for {} clusters", clusters.len());

    // Create visualizations directory
    let viz_dir = Path::new(output_dir).join("visualizations");
    fs::create_dir_all(&viz_dir)?;

    generate_network_data(clusters, graph, &viz_dir)?;
    generate_html_summary(clusters, graph, &viz_dir)?;
    generate_stats_files(clusters, &viz_dir)?;

    log::info!("Visualizations generated successfully");

    Ok(())
}

/// Generate force-directed network data for the D3 graph view
fn generate_network_data(
    clusters: &[Cluster],
    graph: &ContactGraph,
    viz_dir: &Path,
) -> Result<()> {
    log::info!("Generating network data files");

    // Map each person to their cluster for node coloring
    let mut cluster_of: HashMap<&str, u32> = HashMap::new();
    for cluster in clusters {
        for member in &cluster.members {
            cluster_of.insert(member.as_str(), cluster.id);
        }
    }

    let mut ids: Vec<&str> = graph.people().collect();
    ids.sort_unstable();

    let nodes: Vec<serde_json::Value> = ids
        .iter()
        .map(|&id| {
            json!({
                "id": id,
                "cluster": cluster_of.get(id).copied(),
                "connections": graph.degree(id),
            })
        })
        .collect();

    // Each undirected edge once
    let mut links: Vec<serde_json::Value> = Vec::new();
    for &id in &ids {
        for neighbor in graph.neighbors(id) {
            if neighbor.id.as_str() <= id {
                continue;
            }
            links.push(json!({
                "source": id,
                "target": neighbor.id,
                "strength": neighbor.strength,
                "type": neighbor.kind.as_str(),
            }));
        }
    }

    let network = json!({ "nodes": nodes, "links": links });

    let path = viz_dir.join("network.json");
    let mut file = File::create(path)?;
    file.write_all(to_string_pretty(&network)?.as_bytes())?;

    Ok(())
}

/// Generate an HTML summary page
fn generate_html_summary(
    clusters: &[Cluster],
    graph: &ContactGraph,
    viz_dir: &Path,
) -> Result<()> {
    log::info!("Generating HTML summary");

    let index_path = viz_dir.join("index.html");
    let mut index_file = File::create(index_path)?;

    writeln!(index_file, "<!DOCTYPE html>")?;
    writeln!(index_file, "<html lang=\"en\">")?;
    writeln!(index_file, "<head>")?;
    writeln!(index_file, "  <meta charset=\"UTF-8\">")?;
    writeln!(index_file, "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">")?;
    writeln!(index_file, "  <title>Relationship Network Analysis</title>")?;
    writeln!(index_file, "  <style>")?;
    writeln!(index_file, "    body {{ font-family: Arial, sans-serif; margin: 20px; }}")?;
    writeln!(index_file, "    h1, h2 {{ color: #333; }}")?;
    writeln!(index_file, "    .cluster-list {{ display: flex; flex-wrap: wrap; }}")?;
    writeln!(index_file, "    .cluster-card {{ border: 1px solid #ddd; margin: 10px; padding: 15px; border-radius: 5px; width: 300px; }}")?;
    writeln!(index_file, "    .cluster-card h3 {{ margin-top: 0; }}")?;
    writeln!(index_file, "    .stats {{ margin-top: 20px; background-color: #f9f9f9; padding: 15px; border-radius: 5px; }}")?;
    writeln!(index_file, "  </style>")?;
    writeln!(index_file, "</head>")?;
    writeln!(index_file, "<body>")?;
    writeln!(index_file, "  <h1>Relationship Network Analysis</h1>")?;

    writeln!(index_file, "  <div class=\"stats\">")?;
    writeln!(index_file, "    <h2>Summary Statistics</h2>")?;
    writeln!(index_file, "    <p>People: {}</p>", graph.node_count())?;
    writeln!(index_file, "    <p>Relationships: {}</p>", graph.edge_count())?;
    writeln!(index_file, "    <p>Total Clusters: {}</p>", clusters.len())?;

    if !clusters.is_empty() {
        let largest = clusters.iter().map(|c| c.size).max().unwrap_or(0);
        let avg_size = clusters.iter().map(|c| c.size).sum::<usize>() as f64 / clusters.len() as f64;

        writeln!(index_file, "    <p>Largest Cluster: {} people</p>", largest)?;
        writeln!(index_file, "    <p>Average Cluster Size: {:.2} people</p>", avg_size)?;
    }

    writeln!(index_file, "  </div>")?;

    writeln!(index_file, "  <h2>Clusters</h2>")?;
    writeln!(index_file, "  <div class=\"cluster-list\">")?;

    for cluster in clusters.iter().take(50) { // Limit to top 50 clusters
        writeln!(index_file, "    <div class=\"cluster-card\">")?;
        writeln!(index_file, "      <h3>Cluster {}</h3>", cluster.id)?;
        writeln!(index_file, "      <p>Size: {} people</p>", cluster.size)?;
        writeln!(index_file, "    </div>")?;
    }

    writeln!(index_file, "  </div>")?;
    writeln!(index_file, "</body>")?;
    writeln!(index_file, "</html>")?;

    Ok(())
}

/// Generate CSV statistics for external charting
fn generate_stats_files(clusters: &[Cluster], viz_dir: &Path) -> Result<()> {
    log::info!("Generating cluster statistics");

    let stats_path = viz_dir.join("cluster_stats.csv");
    let mut stats_file = File::create(stats_path)?;

    writeln!(stats_file, "cluster_id,size")?;
    for cluster in clusters {
        writeln!(stats_file, "{},{}", cluster.id, cluster.size)?;
    }

    Ok(())
}
