//! Graph construction module

use std::collections::HashMap;
use crate::graph::adjacency::{ContactGraph, Neighbor, RelationKind};

/// Builder for incrementally constructing a ContactGraph
pub struct GraphBuilder {
    /// Neighbor lists keyed by person ID
    adjacency: HashMap<String, Vec<Neighbor>>,

    /// Number of edges inserted so far
    edge_count: usize,
}

impl GraphBuilder {
    /// Create a new empty graph builder
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Create a new graph builder with the given node capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(capacity),
            edge_count: 0,
        }
    }

    /// Add an undirected edge between two people.
    ///
    /// The edge is inserted in both directions so it is traversable
    /// either way.
    pub fn add_edge(&mut self, a: &str, b: &str, strength: u8, kind: RelationKind) {
        self.adjacency
            .entry(a.to_string())
            .or_default()
            .push(Neighbor {
                id: b.to_string(),
                strength,
                kind,
            });
        self.adjacency
            .entry(b.to_string())
            .or_default()
            .push(Neighbor {
                id: a.to_string(),
                strength,
                kind,
            });
        self.edge_count += 1;
    }

    /// Finalize the adjacency view.
    ///
    /// Neighbor lists are sorted by person ID so traversal order does
    /// not depend on the order relationships were created.
    pub fn build(mut self) -> ContactGraph {
        for list in self.adjacency.values_mut() {
            list.sort_by(|a, b| a.id.cmp(&b.id));
        }

        ContactGraph {
            adjacency: self.adjacency,
            edge_count: self.edge_count,
        }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_empty() {
        let graph = GraphBuilder::new().build();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_neighbor_lists_sorted_by_id() {
        let mut builder = GraphBuilder::new();
        builder.add_edge("hub", "zara", 3, RelationKind::Friend);
        builder.add_edge("hub", "amir", 3, RelationKind::Friend);
        builder.add_edge("hub", "mei", 3, RelationKind::Friend);
        let graph = builder.build();

        let ids: Vec<&str> = graph.neighbors("hub").iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["amir", "mei", "zara"]);
    }

    #[test]
    fn test_duplicate_edges_are_tolerated() {
        let mut builder = GraphBuilder::new();
        builder.add_edge("a", "b", 2, RelationKind::Friend);
        builder.add_edge("a", "b", 5, RelationKind::Colleague);
        let graph = builder.build();

        // Both records survive as parallel entries
        assert_eq!(graph.degree("a"), 2);
        assert_eq!(graph.degree("b"), 2);
        assert_eq!(graph.edge_count(), 2);
    }
}
