//! Connection-count metrics over the whole graph

use crate::graph::ContactGraph;
use itertools::Itertools;
use serde::Serialize;

/// A person ranked by how many relationships touch them
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionRank {
    pub id: String,
    pub connection_count: usize,
}

/// People with the most relationships, highest first.
///
/// The count is of relationship entries, not distinct neighbors, so
/// parallel edges would each contribute. Ties are broken by ID for
/// stable output.
pub fn central_nodes(graph: &ContactGraph, limit: usize) -> Vec<ConnectionRank> {
    graph
        .people()
        .map(|id| ConnectionRank {
            id: id.to_string(),
            connection_count: graph.degree(id),
        })
        .sorted_by(|a, b| {
            b.connection_count
                .cmp(&a.connection_count)
                .then_with(|| a.id.cmp(&b.id))
        })
        .take(limit)
        .collect()
}

/// People with at most `max_connections` relationships, sorted by
/// count then by ID for stable display ordering
pub fn isolated_nodes(graph: &ContactGraph, max_connections: usize) -> Vec<ConnectionRank> {
    graph
        .people()
        .filter(|id| graph.degree(id) <= max_connections)
        .map(|id| ConnectionRank {
            id: id.to_string(),
            connection_count: graph.degree(id),
        })
        .sorted_by(|a, b| {
            a.connection_count
                .cmp(&b.connection_count)
                .then_with(|| a.id.cmp(&b.id))
        })
        .collect()
}

/// Share of possible relationships actually present, in [0, 1].
///
/// Possible edges = n(n-1)/2 for an undirected graph; zero when fewer
/// than two people exist, and capped at 1.0 so anomalous duplicate
/// edges cannot push it out of range.
pub fn network_density(node_count: usize, edge_count: usize) -> f64 {
    if node_count < 2 {
        return 0.0;
    }

    let possible = (node_count * (node_count - 1)) / 2;
    (edge_count as f64 / possible as f64).min(1.0)
}
