use crate::algorithm::dijkstra::{attach_predecessor_array, grow, validate_weights, SolverConfig};
use crate::algorithm::extract::ShortestPathTree;
use crate::algorithm::result::ShortestPathResult;
use crate::graph::Graph;
use crate::{Error, Result};

/// Prim's minimum spanning tree grown from the configured origin.
///
/// The result has the same shape as a shortest-path run, except that
/// `distances[v]` holds the weight of the edge joining `v` to the tree.
/// Edges of a directed graph are only followed in their stored direction.
#[derive(Debug, Clone, Default)]
pub struct PrimMinimumSpanningTree {
    config: SolverConfig,
}

impl PrimMinimumSpanningTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SolverConfig) -> Self {
        PrimMinimumSpanningTree { config }
    }

    pub fn with_edge_weight_array_name(mut self, name: impl Into<String>) -> Self {
        self.config.edge_weight_array_name = Some(name.into());
        self
    }

    pub fn with_origin_vertex(mut self, origin: usize) -> Self {
        self.config.origin_vertex_index = origin;
        self
    }

    pub fn with_predecessor_array(mut self, enabled: bool) -> Self {
        self.config.create_predecessor_array = enabled;
        self
    }

    pub fn solve<G: Graph>(&self, graph: &G) -> Result<ShortestPathResult> {
        let weights = validate_weights(graph, self.config.weight_source(graph)?)?;
        let origin = self.config.origin_vertex_index;
        if !graph.has_vertex(origin) {
            return Err(Error::InvalidOriginVertex(origin));
        }
        grow(graph, &weights, origin, "prim", |_, weight| weight)
    }

    /// Total weight of the tree edges
    pub fn total_weight(result: &ShortestPathResult) -> f64 {
        (0..result.vertex_count())
            .filter(|&v| v != result.origin)
            .filter_map(|v| result.distance(v))
            .sum()
    }

    pub fn build_tree<G: Graph>(&self, graph: &G) -> Result<ShortestPathTree> {
        let result = self.solve(graph)?;
        let mut tree = result.to_tree()?;
        if self.config.create_predecessor_array {
            attach_predecessor_array(&mut tree, &result);
        }
        Ok(tree)
    }
}
