use std::env;
use std::time::{Duration, Instant};

use log::info;
use sp_tree::graph::generators::{generate_random, WEIGHT_ARRAY};
use sp_tree::graph::{AdjacencyGraph, Graph};
use sp_tree::DijkstraShortestPaths;

// Times one solve plus tree extraction on a graph
fn benchmark_solve(graph: &AdjacencyGraph, origin: usize) -> sp_tree::Result<(Duration, Duration)> {
    let solver = DijkstraShortestPaths::new()
        .with_edge_weight_array_name(WEIGHT_ARRAY)
        .with_origin_vertex(origin);

    let start = Instant::now();
    let result = solver.solve(graph)?;
    let solve_time = start.elapsed();

    let start = Instant::now();
    let tree = result.to_tree()?;
    let tree_time = start.elapsed();

    println!(
        "  - {} reachable vertices, {} tree edges",
        result.reachable_count(),
        tree.edge_count()
    );

    Ok((solve_time, tree_time))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Graph sizes may be given on the command line
    let args: Vec<String> = env::args().skip(1).collect();
    let graph_sizes: Vec<usize> = if args.is_empty() {
        vec![1_000, 10_000, 50_000, 100_000, 200_000]
    } else {
        args.iter().map(|a| a.parse::<usize>()).collect::<Result<_, _>>()?
    };

    let edge_factor = 4.0;
    let runs = 3;

    println!("Dijkstra shortest-path tree benchmark");
    println!("=====================================");

    for &size in &graph_sizes {
        println!("\nGraph with {} vertices, edge factor {}", size, edge_factor);

        for directed in [true, false] {
            let graph = generate_random(size, edge_factor, directed, size as u64);
            info!(
                "generated {} graph: {} vertices, {} edges",
                if directed { "directed" } else { "undirected" },
                graph.vertex_count(),
                graph.edge_count()
            );

            let mut solve_total = Duration::ZERO;
            let mut tree_total = Duration::ZERO;
            for run in 0..runs {
                let origin = (run * 7919) % size.max(1);
                let (solve_time, tree_time) = benchmark_solve(&graph, origin)?;
                solve_total += solve_time;
                tree_total += tree_time;
            }

            println!(
                "  {:>10}: solve {:?}, tree {:?} (average of {} runs)",
                if directed { "directed" } else { "undirected" },
                solve_total / runs as u32,
                tree_total / runs as u32,
                runs
            );
        }
    }

    Ok(())
}
