//! In-memory adjacency view of the relationship graph

use serde::{Serialize, Deserialize};
use std::collections::HashMap;
use crate::graph::builder::GraphBuilder;

/// Relationship categories a user can declare between two people
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum RelationKind {
    Family,
    Friend,
    ExtendedFamily,
    Colleague,
    Acquaintance,
    Other,
}

impl From<String> for RelationKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "family" => Self::Family,
            "friend" => Self::Friend,
            "extended_family" => Self::ExtendedFamily,
            "colleague" => Self::Colleague,
            "acquaintance" => Self::Acquaintance,
            // Unrecognized categories fall back to the weakest weight
            _ => Self::Other,
        }
    }
}

impl RelationKind {
    /// Weight applied to edge strength when scoring a path
    pub fn weight(self) -> f64 {
        match self {
            Self::Family => 1.5,
            Self::Friend => 1.3,
            Self::ExtendedFamily => 1.2,
            Self::Colleague => 1.0,
            Self::Acquaintance => 0.8,
            Self::Other => 0.5,
        }
    }

    /// Label used in reports and visualization data
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Family => "family",
            Self::Friend => "friend",
            Self::ExtendedFamily => "extended_family",
            Self::Colleague => "colleague",
            Self::Acquaintance => "acquaintance",
            Self::Other => "other",
        }
    }
}

/// One declared relationship between two people, as exported upstream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationshipEdge {
    /// Person on one side of the relationship
    pub source: String,

    /// Person on the other side
    pub target: String,

    /// Declared strength, 1 (weak) to 5 (strong)
    pub strength: u8,

    /// Relationship category
    #[serde(rename = "type")]
    pub kind: RelationKind,
}

/// One entry in a person's neighbor list
#[derive(Debug, Clone, Serialize)]
pub struct Neighbor {
    /// The connected person
    pub id: String,

    /// Strength of the connecting relationship
    pub strength: u8,

    /// Category of the connecting relationship
    pub kind: RelationKind,
}

/// Undirected adjacency view over one account's relationships.
///
/// Built fresh for every run from the current edge list and discarded
/// afterwards; each undirected edge contributes one entry to each
/// endpoint's neighbor list. A person absent from the map reads as an
/// empty neighbor list everywhere, so an empty edge list is valid input
/// to every algorithm.
#[derive(Debug, Clone)]
pub struct ContactGraph {
    /// Neighbor lists keyed by person ID
    pub(crate) adjacency: HashMap<String, Vec<Neighbor>>,

    /// Number of relationship records inserted
    pub(crate) edge_count: usize,
}

impl ContactGraph {
    /// Build the adjacency view from a flat edge list
    pub fn from_edges(edges: &[RelationshipEdge]) -> Self {
        let mut builder = GraphBuilder::with_capacity(edges.len() * 2);
        for edge in edges {
            builder.add_edge(&edge.source, &edge.target, edge.strength, edge.kind);
        }
        builder.build()
    }

    /// Neighbor list for a person; unknown IDs read as no neighbors
    pub fn neighbors(&self, id: &str) -> &[Neighbor] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the person appears in any relationship
    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// All person IDs in the graph
    pub fn people(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Number of distinct people
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of relationship records
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Count of relationship entries touching a person.
    ///
    /// Parallel edges each count once; the upstream schema normally
    /// prevents them but they are tolerated here.
    pub fn degree(&self, id: &str) -> usize {
        self.neighbors(id).len()
    }

    /// Strength and category of a relationship between two people, if any
    pub fn edge_between(&self, a: &str, b: &str) -> Option<(u8, RelationKind)> {
        self.neighbors(a)
            .iter()
            .find(|n| n.id == b)
            .map(|n| (n.strength, n.kind))
    }

    /// Strength of the relationship between two people, if any
    pub fn strength_between(&self, a: &str, b: &str) -> Option<u8> {
        self.edge_between(a, b).map(|(strength, _)| strength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> ContactGraph {
        let edges = vec![
            RelationshipEdge {
                source: "alice".to_string(),
                target: "bob".to_string(),
                strength: 4,
                kind: RelationKind::Friend,
            },
            RelationshipEdge {
                source: "bob".to_string(),
                target: "carol".to_string(),
                strength: 2,
                kind: RelationKind::Colleague,
            },
        ];
        ContactGraph::from_edges(&edges)
    }

    #[test]
    fn test_edges_inserted_both_directions() {
        let graph = sample_graph();

        assert!(graph.neighbors("alice").iter().any(|n| n.id == "bob"));
        assert!(graph.neighbors("bob").iter().any(|n| n.id == "alice"));
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_unknown_person_has_no_neighbors() {
        let graph = sample_graph();

        assert!(graph.neighbors("nobody").is_empty());
        assert!(!graph.contains("nobody"));
        assert_eq!(graph.degree("nobody"), 0);
    }

    #[test]
    fn test_empty_edge_list_is_valid() {
        let graph = ContactGraph::from_edges(&[]);

        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.neighbors("anyone").is_empty());
    }

    #[test]
    fn test_edge_between() {
        let graph = sample_graph();

        assert_eq!(
            graph.edge_between("alice", "bob"),
            Some((4, RelationKind::Friend))
        );
        assert_eq!(graph.strength_between("bob", "carol"), Some(2));
        assert_eq!(graph.strength_between("alice", "carol"), None);
    }

    #[test]
    fn test_unknown_kind_becomes_other() {
        let kind = RelationKind::from("mentor".to_string());
        assert_eq!(kind, RelationKind::Other);

        let parsed: RelationshipEdge = serde_json::from_str(
            r#"{"source": "a", "target": "b", "strength": 3, "type": "mentor"}"#,
        )
        .unwrap();
        assert_eq!(parsed.kind, RelationKind::Other);
    }

    #[test]
    fn test_kind_weights() {
        assert_eq!(RelationKind::Family.weight(), 1.5);
        assert_eq!(RelationKind::Friend.weight(), 1.3);
        assert_eq!(RelationKind::ExtendedFamily.weight(), 1.2);
        assert_eq!(RelationKind::Colleague.weight(), 1.0);
        assert_eq!(RelationKind::Acquaintance.weight(), 0.8);
        assert_eq!(RelationKind::Other.weight(), 0.5);
    }
}
