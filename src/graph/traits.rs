use std::fmt::Debug;

use crate::graph::data::DataArrays;
use crate::Result;

/// Dense zero-based edge handle
pub type EdgeId = usize;

/// Read-only view of a graph as consumed by the solver
pub trait Graph: Debug {
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns true if edges are only traversable from their first endpoint
    fn is_directed(&self) -> bool;

    /// Returns the stored (from, to) endpoints of an edge
    fn edge_endpoints(&self, edge: EdgeId) -> Option<(usize, usize)>;

    /// Returns the edges traversable from a vertex as (other endpoint, edge id).
    ///
    /// For a directed graph these are the outgoing edges. For an undirected graph
    /// every incident edge is yielded, so an edge (a, b) shows up from both a and b.
    fn adjacent_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, EdgeId)> + '_>;

    /// Named numeric arrays attached to the edges
    fn edge_data(&self) -> &DataArrays;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if `to` can be reached from `from` over a single edge
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.has_vertex(from) && self.adjacent_edges(from).any(|(target, _)| target == to)
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph: Graph {
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Adds `count` vertices and returns the ID of the first one
    fn add_vertices(&mut self, count: usize) -> usize {
        let first = self.vertex_count();
        for _ in 0..count {
            self.add_vertex();
        }
        first
    }

    /// Adds an edge between two existing vertices. Parallel edges are kept.
    fn add_edge(&mut self, from: usize, to: usize) -> Result<EdgeId>;

    /// Mutable access to the named edge arrays
    fn edge_data_mut(&mut self) -> &mut DataArrays;
}
