//! Edge-list file handling

use crate::graph::RelationshipEdge;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading an edge-list file
#[derive(Debug, Error)]
pub enum EdgeFileError {
    #[error("file not found: {0}")]
    NotFound(String),

    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid edge list in {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load relationship edges from a JSON file.
///
/// The file holds an array of `{source, target, strength, type}`
/// records. Records the algorithms must never see are dropped with a
/// warning: self-relationships and strengths outside 1 to 5. Upstream
/// validation owns both, so drops here point at a data export problem.
pub fn load_edges(path: &str) -> Result<Vec<RelationshipEdge>, EdgeFileError> {
    log::info!("Reading edge list: {}", path);

    if !Path::new(path).exists() {
        return Err(EdgeFileError::NotFound(path.to_string()));
    }

    let raw = fs::read_to_string(path).map_err(|source| EdgeFileError::Io {
        path: path.to_string(),
        source,
    })?;

    let edges: Vec<RelationshipEdge> =
        serde_json::from_str(&raw).map_err(|source| EdgeFileError::Parse {
            path: path.to_string(),
            source,
        })?;

    log::info!("Loaded {} relationship records", edges.len());

    Ok(sanitize(edges))
}

fn sanitize(edges: Vec<RelationshipEdge>) -> Vec<RelationshipEdge> {
    let before = edges.len();

    let edges: Vec<RelationshipEdge> = edges
        .into_iter()
        .filter(|edge| {
            if edge.source == edge.target {
                log::warn!("Skipping self-relationship for {}", edge.source);
                return false;
            }
            if !(1..=5).contains(&edge.strength) {
                log::warn!(
                    "Skipping {} - {}: strength {} out of range",
                    edge.source,
                    edge.target,
                    edge.strength
                );
                return false;
            }
            true
        })
        .collect();

    if edges.len() != before {
        log::info!("Dropped {} invalid records", before - edges.len());
    }

    edges
}
