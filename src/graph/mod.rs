//! Graph representation and algorithms module

pub mod adjacency;
pub mod builder;
pub mod expand;
pub mod paths;

pub use adjacency::{ContactGraph, Neighbor, RelationKind, RelationshipEdge};
