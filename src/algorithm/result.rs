use serde::{Deserialize, Serialize};

use crate::algorithm::extract::{self, ShortestPathTree, TreeSink};
use crate::{Error, Result};

/// Entry of the predecessor table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Predecessor {
    /// The vertex is the origin of the run
    Origin,
    /// The vertex was never reached from the origin
    Unreached,
    /// The vertex immediately before this one on a shortest path
    Vertex(usize),
}

impl Predecessor {
    /// Returns the preceding vertex, if there is one
    pub fn vertex(self) -> Option<usize> {
        match self {
            Predecessor::Vertex(v) => Some(v),
            Predecessor::Origin | Predecessor::Unreached => None,
        }
    }

    /// Encodes a table in the sentinel form used by graph pipelines, where
    /// `table[v] == v` marks both the origin and unreachable vertices.
    pub fn to_sentinel_table(predecessors: &[Predecessor]) -> Vec<usize> {
        predecessors
            .iter()
            .enumerate()
            .map(|(v, p)| p.vertex().unwrap_or(v))
            .collect()
    }

    /// Decodes a sentinel table. Self-references are split into `Origin` and
    /// `Unreached` using the origin index.
    pub fn from_sentinel_table(table: &[usize], origin: usize) -> Vec<Predecessor> {
        table
            .iter()
            .enumerate()
            .map(|(v, &p)| match (p == v, v == origin) {
                (true, true) => Predecessor::Origin,
                (true, false) => Predecessor::Unreached,
                (false, _) => Predecessor::Vertex(p),
            })
            .collect()
    }
}

/// Distance and predecessor tables produced by one solver run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathResult {
    /// Origin vertex ID
    pub origin: usize,

    /// Total weight from the origin to each vertex; infinite when unreachable
    pub distances: Vec<f64>,

    /// Predecessor of each vertex in the shortest-path tree
    pub predecessors: Vec<Predecessor>,
}

impl ShortestPathResult {
    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    /// Distance to a vertex, or None if the vertex is unreachable or out of range
    pub fn distance(&self, vertex: usize) -> Option<f64> {
        self.distances.get(vertex).copied().filter(|d| d.is_finite())
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        matches!(
            self.predecessors.get(vertex),
            Some(Predecessor::Origin | Predecessor::Vertex(_))
        )
    }

    /// Number of vertices reachable from the origin, the origin included
    pub fn reachable_count(&self) -> usize {
        (0..self.vertex_count())
            .filter(|&v| self.is_reachable(v))
            .count()
    }

    /// Predecessor table in sentinel form, see [`Predecessor::to_sentinel_table`]
    pub fn sentinel_predecessors(&self) -> Vec<usize> {
        Predecessor::to_sentinel_table(&self.predecessors)
    }

    /// Vertices from the origin to `destination`, both inclusive
    pub fn path_to(&self, destination: usize) -> Result<Vec<usize>> {
        extract::path_to(&self.predecessors, self.origin, destination)
    }

    /// Emits the shortest-path tree into `sink`, returning the number of edges added
    pub fn build_tree<S: TreeSink>(&self, sink: &mut S) -> Result<usize> {
        extract::build_tree(
            &self.predecessors,
            &self.distances,
            self.origin,
            self.vertex_count(),
            sink,
        )
    }

    /// Materializes the shortest-path tree as a new [`ShortestPathTree`]
    pub fn to_tree(&self) -> Result<ShortestPathTree> {
        let mut tree = ShortestPathTree::new(self.origin);
        self.build_tree(&mut tree)?;
        Ok(tree)
    }

    /// Fails if the tree would be a forest, i.e. some vertex is unreachable
    pub fn ensure_spanning(&self) -> Result<()> {
        let unreachable = self.vertex_count() - self.reachable_count();
        if unreachable > 0 {
            return Err(Error::DisconnectedGraph { unreachable });
        }
        Ok(())
    }
}
