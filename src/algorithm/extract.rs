use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::algorithm::result::Predecessor;
use crate::graph::{AdjacencyGraph, DataArrays, EdgeId, Graph, MutableGraph};
use crate::{Error, Result};

/// Destination of a materialized shortest-path tree
pub trait TreeSink {
    /// Makes sure vertices `0..count` exist before any edge is inserted
    fn set_vertex_count(&mut self, count: usize) -> Result<()>;

    /// Inserts the directed edge `from -> to`
    fn add_tree_edge(&mut self, from: usize, to: usize) -> Result<EdgeId>;
}

/// Reconstructs the vertices on the shortest path from `origin` to `destination`,
/// both inclusive, by walking predecessor links backwards.
pub fn path_to(predecessors: &[Predecessor], origin: usize, destination: usize) -> Result<Vec<usize>> {
    let n = predecessors.len();
    if origin >= n {
        return Err(Error::InvalidOriginVertex(origin));
    }
    if destination >= n {
        return Err(Error::InvalidVertex(destination));
    }

    let mut path = vec![destination];
    let mut current = destination;

    while current != origin {
        match predecessors[current] {
            Predecessor::Vertex(prev) if prev < n => {
                current = prev;
                path.push(current);
            }
            Predecessor::Vertex(prev) => return Err(Error::InvalidVertex(prev)),
            // A chain ending anywhere but the origin does not reach it
            Predecessor::Unreached | Predecessor::Origin => {
                return Err(Error::DestinationUnreachable(destination))
            }
        }

        // A simple path never holds more than |V| vertices
        if path.len() > n {
            return Err(Error::PredecessorCycleDetected(destination));
        }
    }

    path.reverse();
    Ok(path)
}

/// Emits one edge `predecessor[v] -> v` for every reachable vertex other than the
/// origin. Unreachable vertices are allocated in the sink but get no incoming edge.
///
/// Returns the number of edges emitted. If the sink rejects an edge the error is
/// returned as is and the edges inserted before it stay in the sink; build into a
/// fresh [`ShortestPathTree`] when a partial result must not be observed.
pub fn build_tree<S: TreeSink>(
    predecessors: &[Predecessor],
    distances: &[f64],
    origin: usize,
    vertex_count: usize,
    sink: &mut S,
) -> Result<usize> {
    if origin >= vertex_count {
        return Err(Error::InvalidOriginVertex(origin));
    }

    sink.set_vertex_count(vertex_count)?;

    let mut emitted = 0;
    for v in 0..vertex_count {
        if v == origin {
            continue;
        }

        let predecessor = predecessors.get(v).copied().unwrap_or(Predecessor::Unreached);
        let distance = distances.get(v).copied().unwrap_or(f64::INFINITY);

        match predecessor {
            Predecessor::Vertex(prev) => {
                if !distance.is_finite() {
                    warn!("vertex {} has predecessor {} but no finite distance", v, prev);
                }
                sink.add_tree_edge(prev, v)?;
                emitted += 1;
            }
            Predecessor::Unreached | Predecessor::Origin => {
                if distance.is_finite() {
                    warn!("vertex {} has distance {} but no predecessor", v, distance);
                }
            }
        }
    }

    debug!(
        "built tree rooted at {}: {} edges, {} isolated vertices",
        origin,
        emitted,
        vertex_count - 1 - emitted
    );
    Ok(emitted)
}

impl TreeSink for AdjacencyGraph {
    fn set_vertex_count(&mut self, count: usize) -> Result<()> {
        let current = self.vertex_count();
        if count > current {
            self.add_vertices(count - current);
        }
        Ok(())
    }

    fn add_tree_edge(&mut self, from: usize, to: usize) -> Result<EdgeId> {
        self.add_edge(from, to)
    }
}

/// A directed forest with at most one incoming edge per vertex.
///
/// Built from a predecessor table, it is rooted at the origin; vertices that were
/// not reached stay isolated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathTree {
    root: usize,
    parents: Vec<Option<usize>>,
    edges: Vec<(usize, usize)>,
    vertex_data: DataArrays,
}

impl ShortestPathTree {
    pub fn new(root: usize) -> Self {
        ShortestPathTree {
            root,
            parents: Vec::new(),
            edges: Vec::new(),
            vertex_data: DataArrays::new(),
        }
    }

    pub fn root(&self) -> usize {
        self.root
    }

    pub fn vertex_count(&self) -> usize {
        self.parents.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Tree edges as (parent, child) in insertion order
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.parents.get(vertex).copied().flatten()
    }

    pub fn children(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.edges
            .iter()
            .filter(move |&&(parent, _)| parent == vertex)
            .map(|&(_, child)| child)
    }

    /// Vertices that have neither a parent nor children, the root excluded
    pub fn isolated_vertices(&self) -> Vec<usize> {
        (0..self.vertex_count())
            .filter(|&v| v != self.root && self.parent(v).is_none() && self.children(v).next().is_none())
            .collect()
    }

    /// Number of edges between the root and `vertex`, or None if they are not connected
    pub fn depth(&self, vertex: usize) -> Option<usize> {
        if vertex >= self.vertex_count() {
            return None;
        }

        let mut depth = 0;
        let mut current = vertex;
        while current != self.root {
            current = self.parent(current)?;
            depth += 1;
            if depth > self.vertex_count() {
                return None;
            }
        }
        Some(depth)
    }

    pub fn vertex_data(&self) -> &DataArrays {
        &self.vertex_data
    }

    pub fn vertex_data_mut(&mut self) -> &mut DataArrays {
        &mut self.vertex_data
    }

    /// Copies the tree into a directed graph, vertex arrays included
    pub fn to_graph(&self) -> Result<AdjacencyGraph> {
        let mut graph = AdjacencyGraph::with_vertices(true, self.vertex_count());
        for &(parent, child) in &self.edges {
            graph.add_edge(parent, child)?;
        }
        *graph.vertex_data_mut() = self.vertex_data.clone();
        Ok(graph)
    }
}

impl TreeSink for ShortestPathTree {
    fn set_vertex_count(&mut self, count: usize) -> Result<()> {
        if count <= self.root {
            return Err(Error::InvalidOriginVertex(self.root));
        }
        if count > self.parents.len() {
            self.parents.resize(count, None);
        }
        Ok(())
    }

    fn add_tree_edge(&mut self, from: usize, to: usize) -> Result<EdgeId> {
        let n = self.vertex_count();
        let valid = from < n && to < n && from != to && to != self.root && self.parents[to].is_none();
        if !valid {
            return Err(Error::InvalidEdge(from, to));
        }

        self.parents[to] = Some(from);
        self.edges.push((from, to));
        Ok(self.edges.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Predecessor::{Origin, Unreached, Vertex};

    #[test]
    fn path_walks_back_to_origin() {
        let preds = [Origin, Vertex(0), Vertex(1), Vertex(0)];
        assert_eq!(path_to(&preds, 0, 2).unwrap(), vec![0, 1, 2]);
        assert_eq!(path_to(&preds, 0, 3).unwrap(), vec![0, 3]);
        assert_eq!(path_to(&preds, 0, 0).unwrap(), vec![0]);
    }

    #[test]
    fn unreached_destination_is_reported() {
        let preds = [Origin, Vertex(0), Unreached];
        assert!(matches!(path_to(&preds, 0, 2), Err(Error::DestinationUnreachable(2))));
    }

    #[test]
    fn chain_ending_at_other_root_is_unreachable() {
        // Vertex 2 hangs off a stale root at 1
        let preds = [Origin, Origin, Vertex(1)];
        assert!(matches!(path_to(&preds, 0, 2), Err(Error::DestinationUnreachable(2))));
    }

    #[test]
    fn corrupted_table_cycle_is_detected() {
        let preds = [Origin, Vertex(2), Vertex(3), Vertex(1)];
        assert!(matches!(path_to(&preds, 0, 1), Err(Error::PredecessorCycleDetected(1))));
    }

    #[test]
    fn out_of_range_queries() {
        let preds = [Origin, Vertex(0)];
        assert!(matches!(path_to(&preds, 0, 5), Err(Error::InvalidVertex(5))));
        assert!(matches!(path_to(&preds, 4, 1), Err(Error::InvalidOriginVertex(4))));
        assert!(matches!(path_to(&[Origin, Vertex(9)], 0, 1), Err(Error::InvalidVertex(9))));
    }

    #[test]
    fn tree_keeps_unreached_vertices_isolated() {
        let preds = [Vertex(2), Unreached, Origin, Vertex(0)];
        let dists = [1.0, f64::INFINITY, 0.0, 3.0];
        let mut tree = ShortestPathTree::new(2);

        let emitted = build_tree(&preds, &dists, 2, 4, &mut tree).unwrap();

        assert_eq!(emitted, 2);
        assert_eq!(tree.vertex_count(), 4);
        assert_eq!(tree.edges(), &[(2, 0), (0, 3)]);
        assert_eq!(tree.parent(3), Some(0));
        assert_eq!(tree.parent(2), None);
        assert_eq!(tree.depth(3), Some(2));
        assert_eq!(tree.depth(1), None);
        assert_eq!(tree.isolated_vertices(), vec![1]);
        assert_eq!(tree.children(2).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn tree_rejects_second_parent() {
        let mut tree = ShortestPathTree::new(0);
        tree.set_vertex_count(3).unwrap();
        tree.add_tree_edge(0, 1).unwrap();

        assert!(matches!(tree.add_tree_edge(2, 1), Err(Error::InvalidEdge(2, 1))));
        assert!(matches!(tree.add_tree_edge(1, 0), Err(Error::InvalidEdge(1, 0))));
        assert!(matches!(tree.add_tree_edge(1, 7), Err(Error::InvalidEdge(1, 7))));
        assert_eq!(tree.edge_count(), 1);
    }

    #[test]
    fn graph_sink_receives_directed_edges() {
        let preds = [Origin, Vertex(0), Vertex(1)];
        let dists = [0.0, 1.0, 2.0];
        let mut sink = AdjacencyGraph::directed();

        build_tree(&preds, &dists, 0, 3, &mut sink).unwrap();

        assert_eq!(sink.vertex_count(), 3);
        assert_eq!(sink.edges().collect::<Vec<_>>(), vec![(0, 0, 1), (1, 1, 2)]);
    }

    #[test]
    fn origin_outside_vertex_count_is_rejected() {
        let mut tree = ShortestPathTree::new(5);
        assert!(matches!(
            build_tree(&[Origin], &[0.0], 5, 1, &mut tree),
            Err(Error::InvalidOriginVertex(5))
        ));
    }
}
