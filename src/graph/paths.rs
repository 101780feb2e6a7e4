//! Pathfinding over the relationship graph
//!
//! Both searches are bounded by six degrees of separation. The
//! exhaustive enumeration is exponential in branching factor and is
//! only tractable because one account's contact graph is small and
//! sparse; it is not expected to scale to thousands of densely
//! connected people.

use crate::graph::ContactGraph;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{HashSet, VecDeque};

/// Hard limit on degrees of separation explored by both pathfinders
pub const MAX_SEPARATION: usize = 6;

/// Number of ranked paths returned by the exhaustive search
pub const MAX_RANKED_PATHS: usize = 10;

/// Default cap on enumerated simple paths per query
pub const DEFAULT_ENUMERATION_CAP: usize = 10_000;

/// A shortest connection between two people
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionPath {
    /// Person IDs from start to target, in order
    pub path: Vec<String>,

    /// Path length in hops
    pub degrees: usize,

    /// Minimum edge strength along the path (the weakest link)
    pub strength: u8,
}

/// One scored path from the exhaustive search
#[derive(Debug, Clone, Serialize)]
pub struct ScoredPath {
    /// Person IDs from start to target, in order
    pub path: Vec<String>,

    /// Path length in hops
    pub degrees: usize,

    /// Strength-by-type-weight average over the path's hops
    pub quality_score: f64,

    /// Minimum edge strength along the path
    pub strength: u8,
}

/// Result of enumerating every simple path between two people
#[derive(Debug, Clone, Serialize)]
pub struct AllPathsResult {
    /// Whether at least one path exists within the degree bound
    pub found: bool,

    /// True count of simple paths discovered, even when truncated
    pub total_found: usize,

    /// At most `MAX_RANKED_PATHS` paths, best first
    pub paths: Vec<ScoredPath>,
}

/// Find a shortest path between two people, bounded by six degrees.
///
/// Breadth-first search where each queue entry carries the full path
/// taken to reach it, so the first completed path to the target can be
/// returned immediately. Ties between equal-length paths go to
/// whichever neighbor sorts first in the adjacency list.
pub fn find_shortest_path(graph: &ContactGraph, from: &str, to: &str) -> Option<ConnectionPath> {
    if from == to {
        return Some(ConnectionPath {
            path: vec![from.to_string()],
            degrees: 0,
            strength: 0,
        });
    }

    let mut queue: VecDeque<(String, Vec<String>)> = VecDeque::new();
    let mut visited: HashSet<String> = HashSet::new();

    queue.push_back((from.to_string(), vec![from.to_string()]));
    visited.insert(from.to_string());

    while let Some((current, path)) = queue.pop_front() {
        // Paths at the bound are pruned, not errors
        if path.len() - 1 >= MAX_SEPARATION {
            continue;
        }

        for neighbor in graph.neighbors(&current) {
            if neighbor.id == to {
                let mut full = path.clone();
                full.push(neighbor.id.clone());
                let degrees = full.len() - 1;
                let strength = path_strength(graph, &full);
                return Some(ConnectionPath {
                    path: full,
                    degrees,
                    strength,
                });
            }

            if visited.insert(neighbor.id.clone()) {
                let mut next = path.clone();
                next.push(neighbor.id.clone());
                queue.push_back((neighbor.id.clone(), next));
            }
        }
    }

    None
}

/// Enumerate and rank every simple path between two people.
///
/// Uses the default enumeration cap; see [`find_all_paths_with_cap`].
pub fn find_all_paths(graph: &ContactGraph, from: &str, to: &str) -> AllPathsResult {
    find_all_paths_with_cap(graph, from, to, DEFAULT_ENUMERATION_CAP)
}

/// Enumerate every simple path between two people, up to `cap` paths.
///
/// Depth-first search with push/pop backtracking on a mutable visited
/// set; no node repeats within one path. Paths are ranked by degrees
/// ascending, then quality score descending, and truncated to the top
/// ten while `total_found` reports the full discovered count.
/// `total_found` saturates at `cap`.
pub fn find_all_paths_with_cap(
    graph: &ContactGraph,
    from: &str,
    to: &str,
    cap: usize,
) -> AllPathsResult {
    let mut found: Vec<Vec<String>> = Vec::new();
    let mut path = vec![from.to_string()];
    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(from.to_string());

    collect_paths(graph, from, to, &mut path, &mut visited, &mut found, cap);

    if found.len() >= cap {
        log::warn!(
            "Path enumeration between {} and {} hit the cap of {} paths",
            from,
            to,
            cap
        );
    }

    let total_found = found.len();
    let mut paths: Vec<ScoredPath> = found
        .into_iter()
        .map(|p| score_path(graph, p))
        .collect();

    paths.sort_by(|a, b| {
        a.degrees.cmp(&b.degrees).then_with(|| {
            b.quality_score
                .partial_cmp(&a.quality_score)
                .unwrap_or(Ordering::Equal)
        })
    });
    paths.truncate(MAX_RANKED_PATHS);

    AllPathsResult {
        found: total_found > 0,
        total_found,
        paths,
    }
}

/// People directly connected to both endpoints.
///
/// Offered by the calling layer as a fallback whenever no path exists,
/// so a failed search degrades into an introduction suggestion instead
/// of a dead end.
pub fn suggest_intermediaries(graph: &ContactGraph, from: &str, to: &str) -> Vec<String> {
    let from_side: HashSet<&str> = graph
        .neighbors(from)
        .iter()
        .map(|n| n.id.as_str())
        .collect();

    let mut shared: Vec<String> = graph
        .neighbors(to)
        .iter()
        .filter(|n| from_side.contains(n.id.as_str()))
        .map(|n| n.id.clone())
        .collect();

    shared.sort();
    shared.dedup();
    shared
}

fn collect_paths(
    graph: &ContactGraph,
    current: &str,
    target: &str,
    path: &mut Vec<String>,
    visited: &mut HashSet<String>,
    found: &mut Vec<Vec<String>>,
    cap: usize,
) {
    if found.len() >= cap {
        return;
    }

    if current == target {
        found.push(path.clone());
        return;
    }

    if path.len() - 1 >= MAX_SEPARATION {
        return;
    }

    for neighbor in graph.neighbors(current) {
        if visited.contains(&neighbor.id) {
            continue;
        }

        visited.insert(neighbor.id.clone());
        path.push(neighbor.id.clone());

        collect_paths(graph, &neighbor.id, target, path, visited, found, cap);

        path.pop();
        visited.remove(&neighbor.id);
    }
}

/// Score a discovered path: strength times type weight, averaged per hop
fn score_path(graph: &ContactGraph, path: Vec<String>) -> ScoredPath {
    let degrees = path.len() - 1;

    let mut weighted_sum = 0.0;
    for pair in path.windows(2) {
        if let Some((strength, kind)) = graph.edge_between(&pair[0], &pair[1]) {
            weighted_sum += f64::from(strength) * kind.weight();
        }
    }

    let quality_score = if degrees == 0 {
        0.0
    } else {
        round2(weighted_sum / degrees as f64)
    };

    let strength = path_strength(graph, &path);

    ScoredPath {
        path,
        degrees,
        quality_score,
        strength,
    }
}

/// Minimum edge strength along a path, re-queried per consecutive pair
fn path_strength(graph: &ContactGraph, path: &[String]) -> u8 {
    path.windows(2)
        .filter_map(|pair| graph.strength_between(&pair[0], &pair[1]))
        .min()
        .unwrap_or(0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
