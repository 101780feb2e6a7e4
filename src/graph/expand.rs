//! Ego-network expansion around a focal person

use crate::graph::{ContactGraph, RelationKind};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::str::FromStr;

/// Cumulative reach buckets are reported up to this degree even when
/// the expansion itself is unbounded
const MAX_REPORTED_DEGREE: usize = 6;

/// Bound on how far the expansion walks from the focal person
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegreeLimit {
    /// Stop after this many hops (1 to 6)
    Bounded(usize),

    /// Traverse until the graph is exhausted
    All,
}

impl DegreeLimit {
    fn allows(self, degree: usize) -> bool {
        match self {
            Self::Bounded(max) => degree <= max,
            Self::All => true,
        }
    }
}

impl FromStr for DegreeLimit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        match s.parse::<usize>() {
            Ok(n @ 1..=6) => Ok(Self::Bounded(n)),
            _ => Err(format!("expected 1-6 or \"all\", got \"{}\"", s)),
        }
    }
}

/// A person in the ego network, annotated with hop distance
#[derive(Debug, Clone, Serialize)]
pub struct EgoNode {
    pub id: String,
    pub degree_from_focus: usize,
}

/// A relationship where both endpoints are inside the ego network
#[derive(Debug, Clone, Serialize)]
pub struct EgoLink {
    pub source: String,
    pub target: String,
    pub strength: u8,
    #[serde(rename = "type")]
    pub kind: RelationKind,
}

/// The subgraph within a bounded hop distance of a focal person
#[derive(Debug, Clone, Serialize)]
pub struct EgoNetwork {
    /// People within the bound, focal person first, then by BFS layer
    pub nodes: Vec<EgoNode>,

    /// Relationships with both endpoints within the bound, each
    /// undirected edge emitted once
    pub links: Vec<EgoLink>,

    /// Number of people first reached at exactly each hop distance;
    /// degree 0 is the focal person alone
    pub degree_counts: BTreeMap<usize, usize>,

    /// Running reach totals keyed "n0" through "n6"
    pub cumulative_counts: BTreeMap<String, usize>,

    /// Count of visible people excluding the focal person
    pub total_connections: usize,
}

/// Expand the ego network around a focal person.
///
/// Standard BFS layering: every person is visited at most once, and the
/// first layer they appear in is authoritative, so anyone reachable by
/// several routes is recorded at their shortest distance. A focal
/// person with no relationships (or absent from the graph entirely)
/// yields a single-node network with zero connections.
pub fn expand_from_focus(graph: &ContactGraph, focal: &str, limit: DegreeLimit) -> EgoNetwork {
    let mut degree_of: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();
    let mut queue: VecDeque<(String, usize)> = VecDeque::new();

    degree_of.insert(focal.to_string(), 0);
    order.push(focal.to_string());
    queue.push_back((focal.to_string(), 0));

    while let Some((current, degree)) = queue.pop_front() {
        if !limit.allows(degree + 1) {
            continue;
        }

        for neighbor in graph.neighbors(&current) {
            if degree_of.contains_key(&neighbor.id) {
                continue;
            }
            degree_of.insert(neighbor.id.clone(), degree + 1);
            order.push(neighbor.id.clone());
            queue.push_back((neighbor.id.clone(), degree + 1));
        }
    }

    let mut degree_counts: BTreeMap<usize, usize> = BTreeMap::new();
    for id in &order {
        *degree_counts.entry(degree_of[id]).or_insert(0) += 1;
    }

    let mut cumulative_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut running = 0;
    for (&degree, &count) in &degree_counts {
        if degree > MAX_REPORTED_DEGREE {
            break;
        }
        running += count;
        cumulative_counts.insert(format!("n{}", degree), running);
    }

    // Induced links: both endpoints inside the bound, emitted once per
    // undirected edge
    let mut links: Vec<EgoLink> = Vec::new();
    for id in &order {
        for neighbor in graph.neighbors(id) {
            if neighbor.id.as_str() <= id.as_str() {
                continue;
            }
            if degree_of.contains_key(&neighbor.id) {
                links.push(EgoLink {
                    source: id.clone(),
                    target: neighbor.id.clone(),
                    strength: neighbor.strength,
                    kind: neighbor.kind,
                });
            }
        }
    }

    let nodes: Vec<EgoNode> = order
        .iter()
        .map(|id| EgoNode {
            id: id.clone(),
            degree_from_focus: degree_of[id],
        })
        .collect();

    let total_connections = nodes.len() - 1;

    EgoNetwork {
        nodes,
        links,
        degree_counts,
        cumulative_counts,
        total_connections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::GraphBuilder;

    /// hub - a, hub - b, a - leaf, leaf - far
    fn sample_graph() -> ContactGraph {
        let mut builder = GraphBuilder::new();
        builder.add_edge("hub", "a", 3, RelationKind::Friend);
        builder.add_edge("hub", "b", 4, RelationKind::Family);
        builder.add_edge("a", "leaf", 2, RelationKind::Colleague);
        builder.add_edge("leaf", "far", 1, RelationKind::Acquaintance);
        builder.build()
    }

    #[test]
    fn test_degree_limit_parsing() {
        assert_eq!("all".parse::<DegreeLimit>(), Ok(DegreeLimit::All));
        assert_eq!("ALL".parse::<DegreeLimit>(), Ok(DegreeLimit::All));
        assert_eq!("3".parse::<DegreeLimit>(), Ok(DegreeLimit::Bounded(3)));
        assert!("0".parse::<DegreeLimit>().is_err());
        assert!("7".parse::<DegreeLimit>().is_err());
        assert!("six".parse::<DegreeLimit>().is_err());
    }

    #[test]
    fn test_expand_first_degree() {
        let graph = sample_graph();
        let ego = expand_from_focus(&graph, "hub", DegreeLimit::Bounded(1));

        assert_eq!(ego.nodes.len(), 3); // hub, a, b
        assert_eq!(ego.degree_counts[&0], 1);
        assert_eq!(ego.degree_counts[&1], 2);
        assert_eq!(ego.total_connections, 2);
        assert!(!ego.nodes.iter().any(|n| n.id == "leaf"));
    }

    #[test]
    fn test_expand_all_reaches_everything() {
        let graph = sample_graph();
        let ego = expand_from_focus(&graph, "hub", DegreeLimit::All);

        assert_eq!(ego.nodes.len(), 5);
        assert_eq!(ego.total_connections, 4);
        let far = ego.nodes.iter().find(|n| n.id == "far").unwrap();
        assert_eq!(far.degree_from_focus, 3);
    }

    #[test]
    fn test_shortest_layer_is_authoritative() {
        // b is reachable at degree 1 directly and at degree 2 via a
        let mut builder = GraphBuilder::new();
        builder.add_edge("hub", "a", 3, RelationKind::Friend);
        builder.add_edge("hub", "b", 3, RelationKind::Friend);
        builder.add_edge("a", "b", 3, RelationKind::Friend);
        let graph = builder.build();

        let ego = expand_from_focus(&graph, "hub", DegreeLimit::All);
        let b = ego.nodes.iter().find(|n| n.id == "b").unwrap();
        assert_eq!(b.degree_from_focus, 1);
    }

    #[test]
    fn test_cumulative_counts_monotonic() {
        let graph = sample_graph();
        let ego = expand_from_focus(&graph, "hub", DegreeLimit::All);

        assert_eq!(ego.cumulative_counts["n0"], 1);
        let mut previous = 0;
        for degree in 0..=3 {
            let value = ego.cumulative_counts[&format!("n{}", degree)];
            assert!(value >= previous);
            previous = value;
        }
        assert_eq!(previous, ego.nodes.len());
    }

    #[test]
    fn test_cumulative_counts_capped_at_six() {
        let mut builder = GraphBuilder::new();
        for i in 0..8 {
            builder.add_edge(
                &format!("c{}", i),
                &format!("c{}", i + 1),
                3,
                RelationKind::Friend,
            );
        }
        let graph = builder.build();

        let ego = expand_from_focus(&graph, "c0", DegreeLimit::All);
        // People at degrees 7 and 8 are counted per-degree...
        assert_eq!(ego.degree_counts[&7], 1);
        assert_eq!(ego.degree_counts[&8], 1);
        // ...but the cumulative display stops at n6
        assert!(ego.cumulative_counts.contains_key("n6"));
        assert!(!ego.cumulative_counts.contains_key("n7"));
    }

    #[test]
    fn test_links_induced_by_bound() {
        let graph = sample_graph();
        let ego = expand_from_focus(&graph, "hub", DegreeLimit::Bounded(2));

        // leaf is at degree 2, far is outside, so leaf-far is excluded
        assert!(ego.nodes.iter().any(|n| n.id == "leaf"));
        assert_eq!(ego.links.len(), 3);
        assert!(!ego
            .links
            .iter()
            .any(|l| l.source == "far" || l.target == "far"));
    }

    #[test]
    fn test_links_emitted_once_per_edge() {
        let graph = sample_graph();
        let ego = expand_from_focus(&graph, "hub", DegreeLimit::All);
        assert_eq!(ego.links.len(), 4);
    }

    #[test]
    fn test_unknown_focal_person() {
        let graph = sample_graph();
        let ego = expand_from_focus(&graph, "nobody", DegreeLimit::All);

        assert_eq!(ego.nodes.len(), 1);
        assert_eq!(ego.total_connections, 0);
        assert_eq!(ego.cumulative_counts["n0"], 1);
        assert!(ego.links.is_empty());
    }
}
