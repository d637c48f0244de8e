use std::fmt;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::algorithm::extract::ShortestPathTree;
use crate::algorithm::result::{Predecessor, ShortestPathResult};
use crate::data_structures::MinFrontier;
use crate::graph::{DataArray, EdgeWeights, Graph};
use crate::{Error, Result};

/// Name of the vertex array holding the sentinel predecessor table
pub const PREDECESSOR_ARRAY: &str = "predecessorMap";

/// Settings shared by the tree-building algorithms
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Name of the numeric edge array holding the weights
    pub edge_weight_array_name: Option<String>,
    /// Vertex the run starts from
    pub origin_vertex_index: usize,
    /// Attach the predecessor table to the output tree as a vertex array
    pub create_predecessor_array: bool,
}

impl SolverConfig {
    /// Loads a configuration from JSON; absent fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Looks up the configured weight array on the graph's edge data
    pub fn weight_source<'g, G: Graph>(&self, graph: &'g G) -> Result<&'g DataArray> {
        let name = self
            .edge_weight_array_name
            .as_deref()
            .ok_or_else(|| Error::MissingWeightSource(String::new()))?;
        graph
            .edge_data()
            .array(name)
            .ok_or_else(|| Error::MissingWeightSource(name.to_string()))
    }
}

impl fmt::Display for SolverConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "OriginVertexIndex: {}", self.origin_vertex_index)?;
        writeln!(
            f,
            "EdgeWeightArrayName: {}",
            self.edge_weight_array_name.as_deref().unwrap_or("(none)")
        )?;
        write!(f, "CreatePredecessorArray: {}", self.create_predecessor_array)
    }
}

/// Checks every edge weight up front so that no traversal starts on bad input
pub(crate) fn validate_weights<G, W>(graph: &G, weights: &W) -> Result<Vec<f64>>
where
    G: Graph,
    W: EdgeWeights + ?Sized,
{
    (0..graph.edge_count())
        .map(|edge| match weights.weight(edge) {
            None => Err(Error::MissingEdgeWeight { edge }),
            Some(weight) if !weight.is_finite() || weight < 0.0 => {
                Err(Error::InvalidEdgeWeight { edge, weight })
            }
            Some(weight) => Ok(weight),
        })
        .collect()
}

/// Dijkstra's single-source shortest paths over non-negative edge weights
#[derive(Debug, Clone, Default)]
pub struct DijkstraShortestPaths {
    config: SolverConfig,
}

impl DijkstraShortestPaths {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SolverConfig) -> Self {
        DijkstraShortestPaths { config }
    }

    /// Set the name of the edge array holding the weights
    pub fn with_edge_weight_array_name(mut self, name: impl Into<String>) -> Self {
        self.config.edge_weight_array_name = Some(name.into());
        self
    }

    /// Set the vertex from which to find shortest paths to all vertices
    pub fn with_origin_vertex(mut self, origin: usize) -> Self {
        self.config.origin_vertex_index = origin;
        self
    }

    /// Enable or disable the predecessor vertex array on built trees
    pub fn with_predecessor_array(mut self, enabled: bool) -> Self {
        self.config.create_predecessor_array = enabled;
        self
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Computes shortest paths from the configured origin using the configured weight array
    pub fn solve<G: Graph>(&self, graph: &G) -> Result<ShortestPathResult> {
        let weights = self.config.weight_source(graph)?;
        self.solve_with_weights(graph, weights, self.config.origin_vertex_index)
    }

    /// Computes shortest paths from `origin` with weights from an external source
    pub fn solve_with_weights<G, W>(&self, graph: &G, weights: &W, origin: usize) -> Result<ShortestPathResult>
    where
        G: Graph,
        W: EdgeWeights + ?Sized,
    {
        let weights = validate_weights(graph, weights)?;
        if !graph.has_vertex(origin) {
            return Err(Error::InvalidOriginVertex(origin));
        }
        grow(graph, &weights, origin, "dijkstra", path_key)
    }

    /// Runs one independent solve per origin, in parallel.
    /// Results are returned in the order of `origins`.
    pub fn solve_from_origins<G>(&self, graph: &G, origins: &[usize]) -> Result<Vec<ShortestPathResult>>
    where
        G: Graph + Sync,
    {
        let weights = validate_weights(graph, self.config.weight_source(graph)?)?;
        if let Some(&bad) = origins.iter().find(|&&o| !graph.has_vertex(o)) {
            return Err(Error::InvalidOriginVertex(bad));
        }

        origins
            .par_iter()
            .map(|&origin| grow(graph, &weights, origin, "dijkstra", path_key))
            .collect()
    }

    /// Solves and materializes the shortest-path tree rooted at the origin
    pub fn build_tree<G: Graph>(&self, graph: &G) -> Result<ShortestPathTree> {
        let result = self.solve(graph)?;
        let mut tree = result.to_tree()?;
        if self.config.create_predecessor_array {
            attach_predecessor_array(&mut tree, &result);
        }
        Ok(tree)
    }
}

impl fmt::Display for DijkstraShortestPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.config, f)
    }
}

pub(crate) fn attach_predecessor_array(tree: &mut ShortestPathTree, result: &ShortestPathResult) {
    let table: Vec<u64> = result
        .sentinel_predecessors()
        .into_iter()
        .map(|p| p as u64)
        .collect();
    tree.vertex_data_mut().add_array(PREDECESSOR_ARRAY, table);
}

fn path_key(dist_u: f64, weight: f64) -> f64 {
    dist_u + weight
}

/// Main relaxation loop. `weights` is indexed by edge id and already validated.
/// `key` gives the frontier key of a neighbor reached over an edge from a vertex
/// finalized at the given key.
///
/// Edge ids or neighbors handed out by `adjacent_edges` outside the validated
/// ranges fail the run instead of being indexed.
pub(crate) fn grow<G, K>(graph: &G, weights: &[f64], origin: usize, label: &str, key: K) -> Result<ShortestPathResult>
where
    G: Graph,
    K: Fn(f64, f64) -> f64,
{
    let n = graph.vertex_count();

    let mut distances = vec![f64::INFINITY; n];
    let mut predecessors = vec![Predecessor::Unreached; n];
    let mut finalized = vec![false; n];

    distances[origin] = 0.0;
    predecessors[origin] = Predecessor::Origin;

    let mut frontier = MinFrontier::with_capacity(n.min(1024));
    frontier.push(origin, 0.0);

    let mut relaxations = 0usize;
    while let Some((u, dist_u)) = frontier.pop() {
        // Stale entry left behind by a later decrease
        if finalized[u] || dist_u > distances[u] {
            continue;
        }
        finalized[u] = true;

        for (v, edge) in graph.adjacent_edges(u) {
            if v >= n {
                return Err(Error::InvalidEdge(u, v));
            }
            let weight = *weights.get(edge).ok_or(Error::MissingEdgeWeight { edge })?;
            if finalized[v] {
                continue;
            }
            let candidate = key(dist_u, weight);
            if candidate < distances[v] {
                distances[v] = candidate;
                predecessors[v] = Predecessor::Vertex(u);
                frontier.push(v, candidate);
                relaxations += 1;
            }
        }
    }

    debug!(
        "{} from {}: {} of {} vertices reached, {} relaxations",
        label,
        origin,
        finalized.iter().filter(|&&f| f).count(),
        n,
        relaxations
    );

    Ok(ShortestPathResult {
        origin,
        distances,
        predecessors,
    })
}
