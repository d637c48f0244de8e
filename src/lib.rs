//! Single-source shortest paths and shortest-path trees
//!
//! This library runs Dijkstra's algorithm from one origin vertex over a graph whose
//! edge weights live in a named numeric edge array, then reconstructs explicit
//! paths and materializes the shortest-path tree (one incoming edge per reachable
//! vertex, rooted at the origin) from the predecessor table.
//!
//! Directed and undirected graphs are both supported. Edge weights must be finite
//! and non-negative.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::{DijkstraShortestPaths, SolverConfig},
    extract::{build_tree, path_to, ShortestPathTree, TreeSink},
    prim::PrimMinimumSpanningTree,
    Predecessor, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{AdjacencyGraph, DataArray, DataArrays, EdgeId, EdgeWeights, Graph, MutableGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Could not find edge-weight array named {0:?}")]
    MissingWeightSource(String),

    #[error("No weight value for edge {edge}")]
    MissingEdgeWeight { edge: EdgeId },

    #[error("Invalid weight {weight} on edge {edge}: weights must be finite and non-negative")]
    InvalidEdgeWeight { edge: EdgeId, weight: f64 },

    #[error("Origin vertex {0} is not a vertex of the graph")]
    InvalidOriginVertex(usize),

    #[error("Destination vertex {0} is not reachable from the origin")]
    DestinationUnreachable(usize),

    #[error("Predecessor chain from vertex {0} does not reach the origin within |V| steps")]
    PredecessorCycleDetected(usize),

    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Result is a forest: {unreachable} vertices are not reachable from the origin")]
    DisconnectedGraph { unreachable: usize },

    #[error("Invalid solver configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
