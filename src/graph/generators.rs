use rand::prelude::*;
use rand::rngs::StdRng;

use crate::graph::{AdjacencyGraph, MutableGraph};

/// Name of the edge array the generators store weights in
pub const WEIGHT_ARRAY: &str = "Weights";

/// Generates a random graph with n vertices and about `edge_factor * n` edges.
/// Weights are drawn uniformly from [1, 100). The same seed always yields the same graph.
pub fn generate_random(n: usize, edge_factor: f64, directed: bool, seed: u64) -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::with_vertices(directed, n);
    let mut rng = StdRng::seed_from_u64(seed);
    if n == 0 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    let mut weights = Vec::with_capacity(num_edges);

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops
        if u != v && graph.add_edge(u, v).is_ok() {
            weights.push(rng.gen_range(1.0..100.0));
        }
    }

    graph.edge_data_mut().add_array(WEIGHT_ARRAY, weights);
    graph
}

/// Generates a small random graph with integer weights in [0, max_weight].
/// Zero weights and parallel edges are allowed, which makes ties common.
pub fn generate_small_random(
    n: usize,
    edges: usize,
    max_weight: u32,
    directed: bool,
    seed: u64,
) -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::with_vertices(directed, n);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut weights = Vec::with_capacity(edges);

    if n > 0 {
        for _ in 0..edges {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            if graph.add_edge(u, v).is_ok() {
                weights.push(rng.gen_range(0..=max_weight) as f64);
            }
        }
    }

    graph.edge_data_mut().add_array(WEIGHT_ARRAY, weights);
    graph
}

/// Generates a width*height 4-connected grid with unit weights.
/// Vertex (x, y) has index `y * width + x`.
pub fn generate_grid(width: usize, height: usize, directed: bool) -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::with_vertices(directed, width * height);
    let mut weights = Vec::new();

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            let mut neighbors = Vec::with_capacity(2);
            if x + 1 < width {
                neighbors.push(vertex + 1);
            }
            if y + 1 < height {
                neighbors.push(vertex + width);
            }
            for neighbor in neighbors {
                // Directed grids get both directions explicitly
                let mut pairs = vec![(vertex, neighbor)];
                if directed {
                    pairs.push((neighbor, vertex));
                }
                for (from, to) in pairs {
                    if graph.add_edge(from, to).is_ok() {
                        weights.push(1.0);
                    }
                }
            }
        }
    }

    graph.edge_data_mut().add_array(WEIGHT_ARRAY, weights);
    graph
}

/// The four-vertex undirected diamond:
///
/// ```text
///        v0
///     5 /  \ 2
///      v1   v2
///     3 \  / 4
///        v3
/// ```
///
/// Edges are inserted in the order (0,1), (1,3), (0,2), (2,3).
pub fn generate_diamond() -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::with_vertices(false, 4);
    for (from, to) in [(0, 1), (1, 3), (0, 2), (2, 3)] {
        // Endpoints are always in range here
        let _ = graph.add_edge(from, to);
    }
    graph
        .edge_data_mut()
        .add_array(WEIGHT_ARRAY, vec![5.0, 3.0, 2.0, 4.0]);
    graph
}
