use crate::graph::data::DataArrays;
use crate::graph::traits::{EdgeId, Graph, MutableGraph};
use crate::{Error, Result};

/// A directed or undirected graph stored as adjacency lists
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    /// Whether edges only run from their first endpoint to their second
    directed: bool,

    /// Edge endpoints in insertion order, indexed by edge id
    edges: Vec<(usize, usize)>,

    /// Traversable edges for each vertex: vertex_id -> [(other_vertex, edge_id)]
    adjacency: Vec<Vec<(usize, EdgeId)>>,

    /// Named arrays attached to the edges
    edge_data: DataArrays,

    /// Named arrays attached to the vertices
    vertex_data: DataArrays,
}

impl AdjacencyGraph {
    /// Creates a new empty directed graph
    pub fn directed() -> Self {
        AdjacencyGraph {
            directed: true,
            ..Default::default()
        }
    }

    /// Creates a new empty undirected graph
    pub fn undirected() -> Self {
        AdjacencyGraph::default()
    }

    /// Creates a graph with the specified number of vertices and no edges
    pub fn with_vertices(directed: bool, vertices: usize) -> Self {
        AdjacencyGraph {
            directed,
            adjacency: vec![Vec::new(); vertices],
            ..Default::default()
        }
    }

    /// Builds a graph from (from, to, weight) triples, storing the weights in the
    /// edge array `weight_array_name`
    pub fn from_weighted_edges(
        directed: bool,
        vertices: usize,
        edges: &[(usize, usize, f64)],
        weight_array_name: &str,
    ) -> Result<Self> {
        let mut graph = AdjacencyGraph::with_vertices(directed, vertices);
        let mut weights = Vec::with_capacity(edges.len());
        for &(from, to, weight) in edges {
            graph.add_edge(from, to)?;
            weights.push(weight);
        }
        graph.edge_data.add_array(weight_array_name, weights);
        Ok(graph)
    }

    /// Iterates over all edges as (edge_id, from, to)
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, usize, usize)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(id, &(from, to))| (id, from, to))
    }

    /// Number of edges whose second endpoint is `vertex`
    pub fn in_degree(&self, vertex: usize) -> usize {
        self.edges.iter().filter(|&&(_, to)| to == vertex).count()
    }

    pub fn vertex_data(&self) -> &DataArrays {
        &self.vertex_data
    }

    pub fn vertex_data_mut(&mut self) -> &mut DataArrays {
        &mut self.vertex_data
    }
}

impl Graph for AdjacencyGraph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn edge_endpoints(&self, edge: EdgeId) -> Option<(usize, usize)> {
        self.edges.get(edge).copied()
    }

    fn adjacent_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, EdgeId)> + '_> {
        match self.adjacency.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn edge_data(&self) -> &DataArrays {
        &self.edge_data
    }
}

impl MutableGraph for AdjacencyGraph {
    fn add_vertex(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    fn add_vertices(&mut self, count: usize) -> usize {
        let first = self.adjacency.len();
        self.adjacency.resize_with(first + count, Vec::new);
        first
    }

    fn add_edge(&mut self, from: usize, to: usize) -> Result<EdgeId> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return Err(Error::InvalidEdge(from, to));
        }

        let id = self.edges.len();
        self.edges.push((from, to));
        self.adjacency[from].push((to, id));

        // Undirected self-loops are listed once
        if !self.directed && from != to {
            self.adjacency[to].push((from, id));
        }

        Ok(id)
    }

    fn edge_data_mut(&mut self) -> &mut DataArrays {
        &mut self.edge_data
    }
}
