//! Cluster analysis module

pub mod detection;
pub mod metrics;

use serde::Serialize;

/// A connected component of the relationship graph
#[derive(Debug, Clone, Serialize)]
pub struct Cluster {
    /// Identifier assigned in discovery order
    pub id: u32,

    /// People in this cluster
    pub members: Vec<String>,

    /// Number of members
    pub size: usize,
}
