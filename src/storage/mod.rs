//! Results persistence module

use anyhow::Result;
use crate::cluster::Cluster;
use crate::cluster::metrics::{self, ConnectionRank};
use crate::graph::ContactGraph;
use crate::graph::expand::EgoNetwork;
use crate::graph::paths::{AllPathsResult, ConnectionPath};
use serde_json::{json, to_string_pretty};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Save analysis results to the specified directory
pub fn save_results(
    graph: &ContactGraph,
    clusters: &[Cluster],
    central: &[ConnectionRank],
    isolated: &[ConnectionRank],
    output_dir: &str,
) -> Result<()> {
    log::info!("Saving {} clusters to {}", clusters.len(), output_dir);

    // Ensure output directory exists
    fs::create_dir_all(output_dir)?;

    save_summary(graph, clusters, output_dir)?;
    save_clusters(clusters, output_dir)?;
    save_rankings(central, isolated, output_dir)?;

    log::info!("Results saved successfully");

    Ok(())
}

/// Save summary information
fn save_summary(graph: &ContactGraph, clusters: &[Cluster], output_dir: &str) -> Result<()> {
    log::info!("Saving summary information");

    let path = Path::new(output_dir).join("summary.json");
    let mut file = File::create(path)?;

    let node_count = graph.node_count();
    let edge_count = graph.edge_count();

    let summary = json!({
        "graph_stats": {
            "node_count": node_count,
            "edge_count": edge_count,
            "density": metrics::network_density(node_count, edge_count),
            "avg_connections": if node_count == 0 { 0.0 } else {
                2.0 * edge_count as f64 / node_count as f64
            },
        },
        "cluster_stats": {
            "cluster_count": clusters.len(),
            "total_clustered_nodes": clusters.iter().map(|c| c.size).sum::<usize>(),
            "largest_cluster_size": clusters.get(0).map_or(0, |c| c.size),
            "smallest_cluster_size": clusters.last().map_or(0, |c| c.size),
            "avg_cluster_size": clusters.iter().map(|c| c.size).sum::<usize>() as f64 /
                                if clusters.is_empty() { 1.0 } else { clusters.len() as f64 },
        }
    });

    file.write_all(to_string_pretty(&summary)?.as_bytes())?;

    Ok(())
}

/// Save individual cluster information
fn save_clusters(clusters: &[Cluster], output_dir: &str) -> Result<()> {
    log::info!("Saving individual cluster information");

    // Create clusters directory
    let clusters_dir = Path::new(output_dir).join("clusters");
    fs::create_dir_all(&clusters_dir)?;

    // Create a JSON file for each cluster
    for cluster in clusters {
        let path = clusters_dir.join(format!("cluster_{}.json", cluster.id));
        let mut file = File::create(path)?;

        let cluster_json = json!({
            "id": cluster.id,
            "size": cluster.size,
            "members": cluster.members,
        });

        file.write_all(to_string_pretty(&cluster_json)?.as_bytes())?;
    }

    // Create a JSON file with all clusters
    let all_clusters_path = Path::new(output_dir).join("all_clusters.json");
    let mut all_clusters_file = File::create(all_clusters_path)?;

    let clusters_json = json!({
        "clusters": clusters.iter().map(|c| {
            json!({
                "id": c.id,
                "size": c.size,
            })
        }).collect::<Vec<_>>()
    });

    all_clusters_file.write_all(to_string_pretty(&clusters_json)?.as_bytes())?;

    Ok(())
}

/// Save centrality and isolation rankings
fn save_rankings(
    central: &[ConnectionRank],
    isolated: &[ConnectionRank],
    output_dir: &str,
) -> Result<()> {
    log::info!("Saving connection rankings");

    let central_path = Path::new(output_dir).join("central_nodes.json");
    let mut central_file = File::create(central_path)?;
    let central_json = json!({ "central_nodes": central });
    central_file.write_all(to_string_pretty(&central_json)?.as_bytes())?;

    let isolated_path = Path::new(output_dir).join("isolated_nodes.json");
    let mut isolated_file = File::create(isolated_path)?;
    let isolated_json = json!({ "isolated_nodes": isolated });
    isolated_file.write_all(to_string_pretty(&isolated_json)?.as_bytes())?;

    Ok(())
}

/// Save the outcome of a connection path query.
///
/// When no path exists the suggested intermediaries ride along, so the
/// report never presents a dead end without a fallback.
pub fn save_connection_path(
    shortest: Option<&ConnectionPath>,
    all_paths: &AllPathsResult,
    suggestions: &[String],
    output_dir: &str,
) -> Result<()> {
    log::info!("Saving connection path results");

    fs::create_dir_all(output_dir)?;

    let path = Path::new(output_dir).join("connection_path.json");
    let mut file = File::create(path)?;

    let report = json!({
        "shortest_path": shortest,
        "all_paths": all_paths,
        "suggested_intermediaries": suggestions,
    });

    file.write_all(to_string_pretty(&report)?.as_bytes())?;

    Ok(())
}

/// Save an ego network for the focused-subgraph view
pub fn save_ego_network(ego: &EgoNetwork, output_dir: &str) -> Result<()> {
    log::info!("Saving ego network");

    fs::create_dir_all(output_dir)?;

    let path = Path::new(output_dir).join("ego_network.json");
    let mut file = File::create(path)?;

    file.write_all(to_string_pretty(ego)?.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::detection::find_clusters;
    use crate::cluster::metrics::{central_nodes, isolated_nodes};
    use crate::graph::builder::GraphBuilder;
    use crate::graph::paths::find_all_paths;
    use crate::graph::RelationKind;

    fn sample_graph() -> ContactGraph {
        let mut builder = GraphBuilder::new();
        builder.add_edge("a", "b", 3, RelationKind::Friend);
        builder.add_edge("b", "c", 2, RelationKind::Colleague);
        builder.build()
    }

    #[test]
    fn test_save_results_writes_reports() {
        let graph = sample_graph();
        let clusters = find_clusters(&graph);
        let central = central_nodes(&graph, 5);
        let isolated = isolated_nodes(&graph, 1);

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().to_str().unwrap();
        save_results(&graph, &clusters, &central, &isolated, out).unwrap();

        let summary: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(dir.path().join("summary.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(summary["graph_stats"]["node_count"], 3);
        assert_eq!(summary["cluster_stats"]["cluster_count"], 1);

        assert!(dir.path().join("clusters/cluster_0.json").exists());
        assert!(dir.path().join("central_nodes.json").exists());
        assert!(dir.path().join("isolated_nodes.json").exists());
    }

    #[test]
    fn test_save_connection_path_includes_fallback() {
        let graph = sample_graph();
        let all_paths = find_all_paths(&graph, "a", "zzz");
        let suggestions = vec!["b".to_string()];

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().to_str().unwrap();
        save_connection_path(None, &all_paths, &suggestions, out).unwrap();

        let report: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(dir.path().join("connection_path.json")).unwrap(),
        )
        .unwrap();
        assert!(report["shortest_path"].is_null());
        assert_eq!(report["all_paths"]["found"], false);
        assert_eq!(report["suggested_intermediaries"][0], "b");
    }
}
