//! Connected-component detection

use crate::cluster::Cluster;
use crate::graph::ContactGraph;
use std::collections::HashSet;

/// Partition the graph into connected components, largest first.
///
/// Iterates every person; each unvisited one seeds a depth-first walk
/// that marks everyone reachable from it as the same cluster. Cluster
/// IDs are assigned sequentially in discovery order and are not
/// reassigned when the output is sorted by size. People are visited in
/// sorted ID order so discovery order does not depend on map iteration.
pub fn find_clusters(graph: &ContactGraph) -> Vec<Cluster> {
    let mut ids: Vec<&str> = graph.people().collect();
    ids.sort_unstable();

    let mut visited: HashSet<String> = HashSet::new();
    let mut clusters: Vec<Cluster> = Vec::new();

    for &id in &ids {
        if visited.contains(id) {
            continue;
        }

        let mut members: Vec<String> = Vec::new();
        let mut stack: Vec<String> = vec![id.to_string()];
        visited.insert(id.to_string());

        while let Some(current) = stack.pop() {
            for neighbor in graph.neighbors(&current) {
                if visited.insert(neighbor.id.clone()) {
                    stack.push(neighbor.id.clone());
                }
            }
            members.push(current);
        }

        members.sort_unstable();
        clusters.push(Cluster {
            id: clusters.len() as u32,
            size: members.len(),
            members,
        });
    }

    // Sort clusters by size (largest first)
    clusters.sort_by(|a, b| b.size.cmp(&a.size));

    log::info!("Found {} clusters", clusters.len());

    clusters
}
