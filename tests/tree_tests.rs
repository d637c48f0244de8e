use std::collections::HashSet;

use sp_tree::algorithm::dijkstra::PREDECESSOR_ARRAY;
use sp_tree::graph::generators::{generate_diamond, generate_random, generate_small_random, WEIGHT_ARRAY};
use sp_tree::graph::{AdjacencyGraph, DataArray, Graph, MutableGraph};
use sp_tree::{build_tree, DijkstraShortestPaths, Error, Predecessor, ShortestPathTree, SolverConfig, TreeSink};

fn solver(origin: usize) -> DijkstraShortestPaths {
    DijkstraShortestPaths::new()
        .with_edge_weight_array_name(WEIGHT_ARRAY)
        .with_origin_vertex(origin)
}

#[test]
fn test_diamond_tree_shape() {
    let tree = solver(0).build_tree(&generate_diamond()).unwrap();

    assert_eq!(tree.root(), 0);
    assert_eq!(tree.vertex_count(), 4);
    assert_eq!(tree.edges(), &[(0, 1), (0, 2), (2, 3)]);
    assert_eq!(tree.depth(3), Some(2));
    assert!(tree.isolated_vertices().is_empty());
}

#[test]
fn test_tree_has_one_edge_per_reachable_vertex() {
    for seed in 0..25u64 {
        let graph = generate_small_random(8, 9, 5, seed % 3 == 0, seed);
        let result = solver(0).solve(&graph).unwrap();
        let tree = result.to_tree().unwrap();

        assert_eq!(tree.edge_count(), result.reachable_count() - 1);

        let mut targets = HashSet::new();
        for &(_, child) in tree.edges() {
            assert!(targets.insert(child), "vertex {} has two incoming edges", child);
            assert_ne!(child, 0);
        }

        for v in 0..graph.vertex_count() {
            assert_eq!(tree.depth(v).is_some(), result.is_reachable(v));
        }
    }
}

#[test]
fn test_tree_paths_match_path_queries() {
    let graph = generate_random(300, 2.5, true, 5);
    let result = solver(0).solve(&graph).unwrap();
    let tree = result.to_tree().unwrap();

    for v in 0..graph.vertex_count() {
        match result.path_to(v) {
            Ok(path) => assert_eq!(tree.depth(v), Some(path.len() - 1)),
            Err(Error::DestinationUnreachable(_)) => assert_eq!(tree.depth(v), None),
            Err(e) => panic!("unexpected error {}", e),
        }
    }
}

#[test]
fn test_unreachable_vertices_stay_isolated() {
    let mut graph = generate_diamond();
    let isolated = graph.add_vertex();

    let result = solver(1).solve(&graph).unwrap();
    let tree = result.to_tree().unwrap();

    assert_eq!(tree.vertex_count(), 5);
    assert_eq!(tree.edge_count(), 3);
    assert_eq!(tree.isolated_vertices(), vec![isolated]);
    assert!(matches!(
        result.ensure_spanning(),
        Err(Error::DisconnectedGraph { unreachable: 1 })
    ));
}

#[test]
fn test_graph_sink_gets_tree_edges() {
    let result = solver(0).solve(&generate_diamond()).unwrap();
    let mut sink = AdjacencyGraph::directed();

    let emitted = result.build_tree(&mut sink).unwrap();

    assert_eq!(emitted, 3);
    assert!(sink.is_directed());
    assert_eq!(sink.vertex_count(), 4);
    assert!(sink.has_edge(2, 3));
    assert!(!sink.has_edge(3, 2));
    for v in 1..4 {
        assert_eq!(sink.in_degree(v), 1);
    }
}

#[test]
fn test_tree_from_sentinel_table() {
    // Predecessor table as a graph pipeline hands it over
    let sentinel = [0, 0, 1, 3];
    let predecessors = Predecessor::from_sentinel_table(&sentinel, 0);
    let distances = [0.0, 1.0, 2.0, f64::INFINITY];

    let mut tree = ShortestPathTree::new(0);
    let emitted = build_tree(&predecessors, &distances, 0, 4, &mut tree).unwrap();

    assert_eq!(emitted, 2);
    assert_eq!(tree.isolated_vertices(), vec![3]);
    assert_eq!(Predecessor::to_sentinel_table(&predecessors), sentinel.to_vec());
}

#[test]
fn test_predecessor_array_on_tree_graph() {
    let config = SolverConfig::from_json(
        r#"{"edge_weight_array_name": "Weights", "origin_vertex_index": 0, "create_predecessor_array": true}"#,
    )
    .unwrap();

    let tree = DijkstraShortestPaths::with_config(config)
        .build_tree(&generate_diamond())
        .unwrap();
    let graph = tree.to_graph().unwrap();

    assert_eq!(graph.edge_count(), 3);
    assert_eq!(
        graph.vertex_data().array(PREDECESSOR_ARRAY),
        Some(&DataArray::UnsignedInt(vec![0, 0, 0, 2]))
    );
}

#[test]
fn test_tree_serializes() {
    let tree = solver(0).build_tree(&generate_diamond()).unwrap();
    let json = serde_json::to_string(&tree).unwrap();
    let back: ShortestPathTree = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tree);
}

#[test]
fn test_sink_errors_propagate() {
    struct Refusing;

    impl TreeSink for Refusing {
        fn set_vertex_count(&mut self, _count: usize) -> sp_tree::Result<()> {
            Ok(())
        }

        fn add_tree_edge(&mut self, from: usize, to: usize) -> sp_tree::Result<usize> {
            Err(Error::InvalidEdge(from, to))
        }
    }

    let result = solver(0).solve(&generate_diamond()).unwrap();
    assert!(matches!(
        result.build_tree(&mut Refusing),
        Err(Error::InvalidEdge(0, 1))
    ));
}

#[test]
fn test_edges_before_a_rejected_edge_stay_in_sink() {
    // Accepts the first `capacity` edges, then refuses
    struct Bounded {
        capacity: usize,
        edges: Vec<(usize, usize)>,
    }

    impl TreeSink for Bounded {
        fn set_vertex_count(&mut self, _count: usize) -> sp_tree::Result<()> {
            Ok(())
        }

        fn add_tree_edge(&mut self, from: usize, to: usize) -> sp_tree::Result<usize> {
            if self.edges.len() == self.capacity {
                return Err(Error::InvalidEdge(from, to));
            }
            self.edges.push((from, to));
            Ok(self.edges.len() - 1)
        }
    }

    let result = solver(0).solve(&generate_diamond()).unwrap();
    let mut sink = Bounded {
        capacity: 2,
        edges: Vec::new(),
    };

    assert!(matches!(result.build_tree(&mut sink), Err(Error::InvalidEdge(2, 3))));
    assert_eq!(sink.edges, vec![(0, 1), (0, 2)]);

    // A fresh tree is only handed out when every edge went in
    assert_eq!(result.to_tree().unwrap().edge_count(), 3);
}
